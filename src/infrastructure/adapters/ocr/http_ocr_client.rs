//! HTTP OCR Client - 调用外部 OCR HTTP 服务
//!
//! 实现 OcrPort trait，通过 HTTP 调用外部 OCR 服务
//!
//! 外部 OCR API:
//! POST {base_url}/ocr
//! Request: multipart/form-data 字段 image（文件）/ lang
//! Response: {"text": "..."}  (JSON)；400 格式错误，429 超出每日限额

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::application::ports::{OcrError, OcrPort, OcrRequest};

/// OCR 服务响应体 (JSON)
#[derive(Debug, Deserialize)]
struct OcrHttpResponse {
    /// 识别结果；缺失视为空结果而非失败
    #[serde(default)]
    text: Option<String>,
    /// 服务端错误详情（非 2xx 时可能出现）
    #[serde(default)]
    error: Option<String>,
}

/// HTTP OCR 客户端配置
#[derive(Debug, Clone)]
pub struct HttpOcrClientConfig {
    /// OCR 服务基础 URL
    pub base_url: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for HttpOcrClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5001".to_string(),
            timeout_secs: 120,
        }
    }
}

impl HttpOcrClientConfig {
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
}

/// HTTP OCR 客户端
pub struct HttpOcrClient {
    client: Client,
    config: HttpOcrClientConfig,
}

impl HttpOcrClient {
    /// 创建新的 HTTP OCR 客户端
    pub fn new(config: HttpOcrClientConfig) -> Result<Self, OcrError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OcrError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// 获取识别 URL
    fn ocr_url(&self) -> String {
        format!("{}/ocr", self.config.base_url)
    }
}

#[async_trait]
impl OcrPort for HttpOcrClient {
    async fn recognize(&self, request: OcrRequest) -> Result<String, OcrError> {
        tracing::debug!(
            url = %self.ocr_url(),
            image_bytes = request.image.len(),
            file_name = %request.file_name,
            lang = %request.lang,
            "Sending OCR request"
        );

        let part = Part::bytes(request.image).file_name(request.file_name);
        let form = Form::new().part("image", part).text("lang", request.lang);

        let response = self
            .client
            .post(self.ocr_url())
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    OcrError::Timeout
                } else if e.is_connect() {
                    OcrError::NetworkError(format!("Cannot connect to OCR service: {}", e))
                } else {
                    OcrError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // 错误详情在响应 JSON 的 error 字段里
            let payload = response.json::<OcrHttpResponse>().await.ok();
            return Err(match status.as_u16() {
                400 => OcrError::InvalidImage,
                429 => OcrError::RateLimited,
                500 => OcrError::ServiceError(
                    payload
                        .and_then(|p| p.error)
                        .unwrap_or_else(|| "Error processing image".to_string()),
                ),
                _ => OcrError::ServiceError(format!("HTTP {}", status)),
            });
        }

        let payload: OcrHttpResponse = response
            .json()
            .await
            .map_err(|e| OcrError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        let text = payload.text.unwrap_or_default();

        tracing::info!(characters = text.chars().count(), "OCR request completed");

        Ok(text)
    }
}
