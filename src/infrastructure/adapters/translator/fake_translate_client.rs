//! Fake Translate Client - 用于测试的翻译客户端
//!
//! 不访问网络，按确定性规则变换输入，并支持注入失败与模拟延迟

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::application::ports::{
    TranslateError, TranslateOutcome, TranslateRequest, TranslatorPort,
};

/// Fake Translate Client 配置
#[derive(Debug, Clone)]
pub struct FakeTranslateClientConfig {
    /// 大写变换，让"翻译"效果可见
    pub uppercase: bool,
    /// 附加在结果前的标记，空串表示不加
    pub prefix: String,
    /// 模拟服务延迟（毫秒）
    pub delay_ms: u64,
    /// 第 N 次调用（0 起）返回服务错误
    pub fail_at: Option<usize>,
}

impl Default for FakeTranslateClientConfig {
    fn default() -> Self {
        Self {
            uppercase: true,
            prefix: String::new(),
            delay_ms: 0,
            fail_at: None,
        }
    }
}

/// Fake Translate Client
///
/// 用于测试，记录调用次数以便断言顺序与快速失败行为
pub struct FakeTranslateClient {
    config: FakeTranslateClientConfig,
    calls: AtomicUsize,
}

impl FakeTranslateClient {
    pub fn new(config: FakeTranslateClientConfig) -> Self {
        Self {
            config,
            calls: AtomicUsize::new(0),
        }
    }

    /// 使用默认配置创建
    pub fn with_defaults() -> Self {
        Self::new(FakeTranslateClientConfig::default())
    }

    /// 已发出的调用次数
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TranslatorPort for FakeTranslateClient {
    async fn translate(
        &self,
        request: TranslateRequest,
    ) -> Result<TranslateOutcome, TranslateError> {
        let call_index = self.calls.fetch_add(1, Ordering::SeqCst);

        tracing::debug!(
            call_index,
            text_len = request.text.len(),
            target_lang = %request.target_lang,
            "FakeTranslateClient: transforming segment"
        );

        if self.config.delay_ms > 0 {
            tokio::time::sleep(tokio::time::Duration::from_millis(self.config.delay_ms)).await;
        }

        if self.config.fail_at == Some(call_index) {
            return Err(TranslateError::ServiceError(format!(
                "injected failure at call {}",
                call_index
            )));
        }

        let mut translated_text = if self.config.uppercase {
            request.text.to_uppercase()
        } else {
            request.text
        };
        if !self.config.prefix.is_empty() {
            translated_text = format!("{}{}", self.config.prefix, translated_text);
        }

        Ok(TranslateOutcome { translated_text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_uppercase_transform_and_call_count() {
        let client = FakeTranslateClient::with_defaults();
        let outcome = client
            .translate(TranslateRequest {
                text: "hello".to_string(),
                source_lang: "en".to_string(),
                target_lang: "fr".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(outcome.translated_text, "HELLO");
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_injected_failure_at_call_index() {
        let client = FakeTranslateClient::new(FakeTranslateClientConfig {
            fail_at: Some(0),
            ..FakeTranslateClientConfig::default()
        });

        let result = client
            .translate(TranslateRequest {
                text: "x".to_string(),
                source_lang: "en".to_string(),
                target_lang: "fr".to_string(),
            })
            .await;

        assert!(matches!(result, Err(TranslateError::ServiceError(_))));
    }
}
