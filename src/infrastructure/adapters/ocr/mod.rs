//! OCR Adapter - 文字识别客户端实现

mod http_ocr_client;

pub use http_ocr_client::*;
