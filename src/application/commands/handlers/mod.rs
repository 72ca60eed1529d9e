//! Command Handlers - 命令处理器

mod ocr_handlers;
mod translate_handlers;

pub use ocr_handlers::{RecognizeImageHandler, RecognizeImageResponse};
pub use translate_handlers::{TranslateDocumentHandler, TranslateDocumentResponse};
