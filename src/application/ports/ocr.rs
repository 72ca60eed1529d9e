//! OCR Port - 远程文字识别服务抽象
//!
//! 定义图片文字识别的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// OCR 错误
#[derive(Debug, Error)]
pub enum OcrError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid image format")]
    InvalidImage,

    #[error("Daily request limit reached")]
    RateLimited,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// OCR 识别请求
#[derive(Debug, Clone)]
pub struct OcrRequest {
    /// 图片原始字节
    pub image: Vec<u8>,
    /// 文件名（用于 multipart 表单和日志）
    pub file_name: String,
    /// 识别语言标识
    pub lang: String,
}

/// OCR Port
///
/// 外部 OCR 服务的抽象接口；识别结果为空是合法输出，不视为失败
#[async_trait]
pub trait OcrPort: Send + Sync {
    /// 识别图片中的文字
    async fn recognize(&self, request: OcrRequest) -> Result<String, OcrError>;
}
