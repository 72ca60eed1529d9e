//! 文本分割器
//!
//! 将任意文本按字节预算切分为有序片段，分三级回退（行 → 词 → 字符），
//! 保证任何输入形状下单个片段的 UTF-8 编码长度都不超过预算

use serde::Deserialize;

/// 默认字节预算
/// 远程翻译服务单次请求的安全上限
pub const DEFAULT_MAX_BYTES: usize = 9000;

/// 最小可行字节预算
/// 单个码点最坏情况下的 UTF-8 编码长度，预算低于此值属于配置错误
pub const MIN_SEGMENT_BYTES: usize = 4;

/// 分割配置
#[derive(Debug, Clone, Deserialize)]
pub struct SegmenterConfig {
    /// 单个片段的最大 UTF-8 编码字节数
    #[serde(default = "default_max_bytes")]
    pub max_bytes: usize,
}

fn default_max_bytes() -> usize {
    DEFAULT_MAX_BYTES
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            max_bytes: default_max_bytes(),
        }
    }
}

/// 计算拼接后的编码长度（非空时包含一个分隔符）
#[inline]
fn joined_len(current: &str, sep_len: usize, next: &str) -> usize {
    if current.is_empty() {
        next.len()
    } else {
        current.len() + sep_len + next.len()
    }
}

/// 对文本进行分段
///
/// 分段策略：
/// 1. 按 `\n` 分行，贪婪累积到当前片段，超出预算时先冲刷再重新开始
/// 2. 单行超出预算时降级为按空格分词，应用相同的累积/冲刷逻辑
/// 3. 单词超出预算时再降级为按字符累积
///
/// 保证：每个片段编码长度 ≤ max_bytes；片段顺序与文档顺序一致；
/// 空输入产生空序列。纯函数，不会失败。
pub fn segment_text(text: &str, config: &SegmenterConfig) -> Vec<String> {
    let max = config.max_bytes;
    let mut segments: Vec<String> = Vec::new();
    let mut current = String::new();

    for line in text.split('\n') {
        if joined_len(&current, 1, line) <= max {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
            continue;
        }

        // 超出预算：先冲刷已累积的片段
        if !current.is_empty() {
            segments.push(std::mem::take(&mut current));
        }

        // 当前行单独考察，仍超预算则降级到词级
        if line.len() <= max {
            current.push_str(line);
        } else {
            split_words(line, max, &mut segments);
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// 词级回退：按空格分词后贪婪累积
fn split_words(line: &str, max: usize, segments: &mut Vec<String>) {
    let mut chunk = String::new();

    for word in line.split(' ') {
        if joined_len(&chunk, 1, word) <= max {
            if !chunk.is_empty() {
                chunk.push(' ');
            }
            chunk.push_str(word);
            continue;
        }

        if !chunk.is_empty() {
            segments.push(std::mem::take(&mut chunk));
        }

        // 单词单独考察，仍超预算则降级到字符级
        if word.len() <= max {
            chunk.push_str(word);
        } else {
            split_chars(word, max, segments);
        }
    }

    if !chunk.is_empty() {
        segments.push(chunk);
    }
}

/// 字符级回退：按码点累积
///
/// 前提：max ≥ 单个码点的编码长度（配置加载时校验），因此必然终止
fn split_chars(word: &str, max: usize, segments: &mut Vec<String>) {
    let mut chunk = String::new();

    for ch in word.chars() {
        if chunk.len() + ch.len_utf8() > max && !chunk.is_empty() {
            segments.push(std::mem::take(&mut chunk));
        }
        chunk.push(ch);
    }

    if !chunk.is_empty() {
        segments.push(chunk);
    }
}
