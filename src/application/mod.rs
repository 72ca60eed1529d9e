//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Translator、Ocr、DocumentSource、PageSink）
//! - pipeline: 顺序分段翻译编排器与取消句柄
//! - commands: 命令及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod pipeline;
pub mod ports;

// Re-exports
pub use commands::{
    handlers::{
        RecognizeImageHandler, RecognizeImageResponse, TranslateDocumentHandler,
        TranslateDocumentResponse,
    },
    RecognizeImage,
    TranslateDocument,
};

pub use error::PipelineError;

pub use pipeline::{CancelHandle, TranslateContext, TranslationPipeline};

pub use ports::{
    // Document engine boundary
    DocumentSourcePort,
    PageContent,
    PageSinkPort,
    SinkError,
    SourceError,
    // OCR engine
    OcrError,
    OcrPort,
    OcrRequest,
    // Translator engine
    TranslateError,
    TranslateOutcome,
    TranslateRequest,
    TranslatorPort,
};
