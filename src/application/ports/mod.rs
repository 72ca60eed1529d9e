//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层的抽象接口

mod document;
mod ocr;
mod translator;

pub use document::{
    DocumentSourcePort, PageContent, PageSinkPort, SinkError, SourceError,
};
pub use ocr::{OcrError, OcrPort, OcrRequest};
pub use translator::{TranslateError, TranslateOutcome, TranslateRequest, TranslatorPort};
