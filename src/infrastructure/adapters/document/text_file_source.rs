//! Text File Source - 纯文本文件文档源
//!
//! 以换页符（form feed）作为页分隔读取整个文件，
//! 在接口边界上替代外部渲染引擎的文本提取

use async_trait::async_trait;
use std::path::Path;

use crate::application::ports::{DocumentSourcePort, SourceError};

/// 页分隔符
const PAGE_SEPARATOR: char = '\u{0c}';

/// 文本文件文档源
///
/// 打开时一次性读入并切页，之后的端口调用都是内存访问
pub struct TextFileSource {
    pages: Vec<String>,
}

impl TextFileSource {
    /// 读取文件并按换页符切页
    pub async fn open(path: impl AsRef<Path>) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| SourceError::ReadError(format!("{}: {}", path.display(), e)))?;

        tracing::debug!(path = %path.display(), bytes = content.len(), "Document loaded");

        Ok(Self::from_text(&content))
    }

    /// 直接从内存文本构建（测试与嵌入场景）
    pub fn from_text(content: &str) -> Self {
        Self {
            pages: content
                .split(PAGE_SEPARATOR)
                .map(|page| page.to_string())
                .collect(),
        }
    }
}

#[async_trait]
impl DocumentSourcePort for TextFileSource {
    async fn page_count(&self) -> Result<usize, SourceError> {
        Ok(self.pages.len())
    }

    async fn load_page_text(&self, page_index: usize) -> Result<String, SourceError> {
        // 页码从 1 开始，沿用引擎约定
        page_index
            .checked_sub(1)
            .and_then(|i| self.pages.get(i))
            .cloned()
            .ok_or(SourceError::PageOutOfRange(page_index))
    }
}
