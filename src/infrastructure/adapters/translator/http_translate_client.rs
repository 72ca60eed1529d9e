//! HTTP Translate Client - 调用外部翻译 HTTP 服务
//!
//! 实现 TranslatorPort trait，通过 HTTP 调用外部翻译服务
//!
//! 外部翻译 API:
//! POST {base_url}/translate
//! Request: multipart/form-data 字段 text / source_lang / target_lang
//! Response: {"translated_text": "..."}  (JSON)

use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::application::ports::{
    TranslateError, TranslateOutcome, TranslateRequest, TranslatorPort,
};

/// 翻译服务响应体 (JSON)
#[derive(Debug, Deserialize)]
struct TranslateHttpResponse {
    /// 字段缺失或为空都按结构性失败处理，不当作空结果
    #[serde(default)]
    translated_text: Option<String>,
}

/// HTTP 翻译客户端配置
#[derive(Debug, Clone)]
pub struct HttpTranslateClientConfig {
    /// 翻译服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
    /// 网络/超时错误的重试次数；编排器不重试，重试只发生在这里
    pub max_retries: u32,
}

impl Default for HttpTranslateClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5001".to_string(),
            timeout_secs: 120,
            max_retries: 0,
        }
    }
}

impl HttpTranslateClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.max_retries = retries;
        self
    }
}

/// HTTP 翻译客户端
///
/// 通过 HTTP 调用外部翻译服务
pub struct HttpTranslateClient {
    client: Client,
    config: HttpTranslateClientConfig,
}

impl HttpTranslateClient {
    /// 创建新的 HTTP 翻译客户端
    pub fn new(config: HttpTranslateClientConfig) -> Result<Self, TranslateError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TranslateError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 使用默认配置创建客户端
    pub fn with_default_config() -> Result<Self, TranslateError> {
        Self::new(HttpTranslateClientConfig::default())
    }

    /// 获取翻译 URL
    fn translate_url(&self) -> String {
        format!("{}/translate", self.config.base_url)
    }

    async fn try_translate(
        &self,
        request: &TranslateRequest,
    ) -> Result<TranslateOutcome, TranslateError> {
        let form = Form::new()
            .text("text", request.text.clone())
            .text("source_lang", request.source_lang.clone())
            .text("target_lang", request.target_lang.clone());

        tracing::debug!(
            url = %self.translate_url(),
            text_len = request.text.len(),
            source_lang = %request.source_lang,
            target_lang = %request.target_lang,
            "Sending translate request"
        );

        let response = self
            .client
            .post(self.translate_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    TranslateError::Timeout
                } else if e.is_connect() {
                    TranslateError::NetworkError(format!(
                        "Cannot connect to translation service: {}",
                        e
                    ))
                } else {
                    TranslateError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(TranslateError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let payload: TranslateHttpResponse = response.json().await.map_err(|e| {
            TranslateError::InvalidResponse(format!("Failed to parse response: {}", e))
        })?;

        let translated_text = match payload.translated_text {
            Some(text) if !text.is_empty() => text,
            _ => {
                return Err(TranslateError::InvalidResponse(
                    "Missing or empty translated_text field".to_string(),
                ))
            }
        };

        tracing::debug!(
            translated_len = translated_text.len(),
            "Translate request completed"
        );

        Ok(TranslateOutcome { translated_text })
    }
}

#[async_trait]
impl TranslatorPort for HttpTranslateClient {
    async fn translate(
        &self,
        request: TranslateRequest,
    ) -> Result<TranslateOutcome, TranslateError> {
        let mut attempt: u32 = 0;

        loop {
            match self.try_translate(&request).await {
                Err(e @ (TranslateError::NetworkError(_) | TranslateError::Timeout))
                    if attempt < self.config.max_retries =>
                {
                    attempt += 1;
                    tracing::warn!(
                        attempt,
                        max_retries = self.config.max_retries,
                        error = %e,
                        "Translate request failed, retrying"
                    );
                }
                other => return other,
            }
        }
    }

    async fn health_check(&self) -> bool {
        match self
            .client
            .get(&self.config.base_url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}
