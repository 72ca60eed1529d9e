//! Translation Pipeline - 顺序分段翻译编排器
//!
//! 严格按文档顺序逐段调用翻译端口：结果位置与片段位置一一对应，
//! 串行请求也不会触碰远程服务的按调用方限流。任何一段失败立即中止，
//! 不返回部分结果；重试策略属于端口实现方，编排器本身不重试。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::application::error::PipelineError;
use crate::application::ports::{TranslateRequest, TranslatorPort};

/// 取消句柄
///
/// 宿主在片段间置位；编排器在发起每次远程调用前检查，已置位时
/// 停止发起后续调用并以 Cancelled 结束（区别于翻译故障）
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// 请求取消当前运行
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// 翻译上下文
///
/// 一次流水线运行内保持不变，逐段填入请求
#[derive(Debug, Clone)]
pub struct TranslateContext {
    /// 源语言标识
    pub source_lang: String,
    /// 目标语言标识
    pub target_lang: String,
}

/// 顺序翻译流水线
pub struct TranslationPipeline {
    translator: Arc<dyn TranslatorPort>,
    cancel: CancelHandle,
}

impl TranslationPipeline {
    pub fn new(translator: Arc<dyn TranslatorPort>, cancel: CancelHandle) -> Self {
        Self { translator, cancel }
    }

    /// 逐段翻译，返回与输入同序的结果列表
    ///
    /// 每段一个挂起点；编排器不设内部超时，截止时间由端口实现自行约束
    pub async fn run(
        &self,
        segments: &[String],
        ctx: &TranslateContext,
    ) -> Result<Vec<String>, PipelineError> {
        let mut results = Vec::with_capacity(segments.len());

        for (index, segment) in segments.iter().enumerate() {
            if self.cancel.is_cancelled() {
                tracing::info!(
                    segment_index = index,
                    total = segments.len(),
                    "Translation run cancelled"
                );
                return Err(PipelineError::Cancelled);
            }

            tracing::debug!(
                segment_index = index,
                total = segments.len(),
                segment_bytes = segment.len(),
                "Translating segment"
            );

            let request = TranslateRequest {
                text: segment.clone(),
                source_lang: ctx.source_lang.clone(),
                target_lang: ctx.target_lang.clone(),
            };

            let outcome = self
                .translator
                .translate(request)
                .await
                .map_err(|e| PipelineError::translation(index, e))?;

            results.push(outcome.translated_text);
        }

        tracing::info!(total = results.len(), "All segments translated");
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{TranslateError, TranslateOutcome};
    use crate::infrastructure::adapters::{FakeTranslateClient, FakeTranslateClientConfig};
    use async_trait::async_trait;

    fn ctx() -> TranslateContext {
        TranslateContext {
            source_lang: "en".to_string(),
            target_lang: "fr".to_string(),
        }
    }

    fn segments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_results_preserve_segment_order() {
        let translator = Arc::new(FakeTranslateClient::new(FakeTranslateClientConfig::default()));
        let pipeline = TranslationPipeline::new(translator.clone(), CancelHandle::new());

        let results = pipeline.run(&segments(&["ab", "cd"]), &ctx()).await.unwrap();

        // 大写变换、原始顺序、换行拼接
        assert_eq!(results, vec!["AB", "CD"]);
        assert_eq!(results.join("\n"), "AB\nCD");
        assert_eq!(translator.calls(), 2);
    }

    #[tokio::test]
    async fn test_failure_aborts_without_calling_later_segments() {
        let config = FakeTranslateClientConfig {
            fail_at: Some(1),
            ..FakeTranslateClientConfig::default()
        };
        let translator = Arc::new(FakeTranslateClient::new(config));
        let pipeline = TranslationPipeline::new(translator.clone(), CancelHandle::new());

        let err = pipeline
            .run(&segments(&["a", "b", "c"]), &ctx())
            .await
            .unwrap_err();

        // 第 1 段失败即中止，第 2 段从未发出
        assert!(matches!(err, PipelineError::Translation { index: 1, .. }));
        assert_eq!(translator.calls(), 2);
    }

    #[tokio::test]
    async fn test_pre_cancelled_run_issues_no_calls() {
        let translator = Arc::new(FakeTranslateClient::new(FakeTranslateClientConfig::default()));
        let cancel = CancelHandle::new();
        cancel.cancel();
        let pipeline = TranslationPipeline::new(translator.clone(), cancel);

        let err = pipeline.run(&segments(&["a", "b"]), &ctx()).await.unwrap_err();

        assert!(matches!(err, PipelineError::Cancelled));
        assert_eq!(translator.calls(), 0);
    }

    /// 第一次调用返回后置位取消句柄，模拟宿主在片段间取消
    struct CancelAfterFirst {
        cancel: CancelHandle,
        calls: std::sync::atomic::AtomicUsize,
    }

    #[async_trait]
    impl TranslatorPort for CancelAfterFirst {
        async fn translate(
            &self,
            request: TranslateRequest,
        ) -> Result<TranslateOutcome, TranslateError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.cancel.cancel();
            Ok(TranslateOutcome {
                translated_text: request.text,
            })
        }
    }

    #[tokio::test]
    async fn test_cancellation_between_segments_is_distinct_from_failure() {
        let cancel = CancelHandle::new();
        let translator = Arc::new(CancelAfterFirst {
            cancel: cancel.clone(),
            calls: std::sync::atomic::AtomicUsize::new(0),
        });
        let pipeline = TranslationPipeline::new(translator.clone(), cancel);

        let err = pipeline
            .run(&segments(&["a", "b", "c"]), &ctx())
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::Cancelled));
        // 第二段的检查先于调用，因此只发出了一次请求
        assert_eq!(translator.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_segment_list_yields_empty_results() {
        let translator = Arc::new(FakeTranslateClient::new(FakeTranslateClientConfig::default()));
        let pipeline = TranslationPipeline::new(translator.clone(), CancelHandle::new());

        let results = pipeline.run(&[], &ctx()).await.unwrap();

        assert!(results.is_empty());
        assert_eq!(translator.calls(), 0);
    }
}
