//! 应用层错误定义
//!
//! 统一的流水线错误类型；领域函数（分割、布局）是纯函数不会失败，
//! 这里收敛所有可失败路径，调用方据此呈现单一可读的错误信息

use thiserror::Error;

use crate::application::ports::{OcrError, SinkError, SourceError, TranslateError};

/// 流水线错误
#[derive(Debug, Error)]
pub enum PipelineError {
    /// 配置错误（启动期致命，运行期不可恢复）
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// 提取不到任何文本
    #[error("No text found in the document to translate")]
    EmptyInput,

    /// 某个片段的翻译调用失败，流水线立即中止，不返回部分结果
    #[error("Translation failed at segment {index}: {source}")]
    Translation {
        index: usize,
        #[source]
        source: TranslateError,
    },

    /// 运行在片段间被调用方取消；不是故障
    #[error("Translation run cancelled")]
    Cancelled,

    /// OCR 调用失败
    #[error("OCR failed: {0}")]
    Ocr(#[from] OcrError),

    /// 输入校验失败
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 文档源错误
    #[error("Document source error: {0}")]
    Source(#[from] SourceError),

    /// 页面写入错误
    #[error("Document sink error: {0}")]
    Sink(#[from] SinkError),
}

impl PipelineError {
    /// 创建配置错误
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// 创建校验错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// 标记第 index 个片段的翻译失败
    pub fn translation(index: usize, source: TranslateError) -> Self {
        Self::Translation { index, source }
    }
}
