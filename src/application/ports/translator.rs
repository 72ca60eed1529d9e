//! Translator Port - 远程翻译服务抽象
//!
//! 定义翻译调用的抽象接口，具体实现在 infrastructure/adapters 层

use async_trait::async_trait;
use thiserror::Error;

/// 翻译错误
#[derive(Debug, Error)]
pub enum TranslateError {
    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Service error: {0}")]
    ServiceError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// 翻译请求
///
/// 语言参数在一次流水线运行中保持不变，由上下文逐段填入
#[derive(Debug, Clone)]
pub struct TranslateRequest {
    /// 待翻译的单个片段
    pub text: String,
    /// 源语言标识
    pub source_lang: String,
    /// 目标语言标识
    pub target_lang: String,
}

/// 翻译响应
#[derive(Debug, Clone)]
pub struct TranslateOutcome {
    /// 翻译后的文本，与源片段一一对应
    pub translated_text: String,
}

/// Translator Port
///
/// 外部翻译服务的抽象接口；重试策略属于实现方，编排器本身不重试
#[async_trait]
pub trait TranslatorPort: Send + Sync {
    /// 翻译单个片段
    async fn translate(&self, request: TranslateRequest) -> Result<TranslateOutcome, TranslateError>;

    /// 检查翻译服务是否可用
    async fn health_check(&self) -> bool {
        true // 默认实现
    }
}
