//! Translate Command Handlers - 翻译用例编排

use std::sync::Arc;

use crate::application::commands::TranslateDocument;
use crate::application::error::PipelineError;
use crate::application::pipeline::{CancelHandle, TranslateContext, TranslationPipeline};
use crate::application::ports::{DocumentSourcePort, PageContent, PageSinkPort, TranslatorPort};
use crate::domain::{place_lines, segment_text, PageGeometry, SegmenterConfig};

// ============================================================================
// TranslateDocument
// ============================================================================

/// 翻译响应
#[derive(Debug, Clone)]
pub struct TranslateDocumentResponse {
    pub total_segments: usize,
    pub pages_written: usize,
    pub dropped_lines: usize,
}

/// TranslateDocument Handler - 提取 → 分段 → 顺序翻译 → 排版写出
pub struct TranslateDocumentHandler {
    source: Arc<dyn DocumentSourcePort>,
    sink: Arc<dyn PageSinkPort>,
    pipeline: TranslationPipeline,
    segmenter: SegmenterConfig,
    geometry: PageGeometry,
    paginate: bool,
}

impl TranslateDocumentHandler {
    pub fn new(
        source: Arc<dyn DocumentSourcePort>,
        sink: Arc<dyn PageSinkPort>,
        translator: Arc<dyn TranslatorPort>,
        cancel: CancelHandle,
        segmenter: SegmenterConfig,
        geometry: PageGeometry,
        paginate: bool,
    ) -> Self {
        Self {
            source,
            sink,
            pipeline: TranslationPipeline::new(translator, cancel),
            segmenter,
            geometry,
            paginate,
        }
    }

    pub async fn handle(
        &self,
        command: TranslateDocument,
    ) -> Result<TranslateDocumentResponse, PipelineError> {
        // 提取全文：逐页加载文本，每页后跟一个换行
        let page_count = self.source.page_count().await?;
        let mut extracted = String::new();
        for page_index in 1..=page_count {
            let text = self.source.load_page_text(page_index).await?;
            extracted.push_str(&text);
            extracted.push('\n');
        }

        if extracted.trim().is_empty() {
            return Err(PipelineError::EmptyInput);
        }

        // 分段
        let segments = segment_text(&extracted, &self.segmenter);
        let total_segments = segments.len();
        tracing::info!(
            page_count,
            total_segments,
            extracted_bytes = extracted.len(),
            "Document text segmented"
        );

        // 顺序翻译，失败或取消时到此为止，不写出任何页面
        let ctx = TranslateContext {
            source_lang: command.source_lang,
            target_lang: command.target_lang,
        };
        let translated = self.pipeline.run(&segments, &ctx).await?.join("\n");

        // 排版写出
        let (pages_written, dropped_lines) =
            write_pages(self.sink.as_ref(), &self.geometry, self.paginate, &translated).await?;

        tracing::info!(
            total_segments,
            pages_written,
            dropped_lines,
            "Document translated"
        );

        Ok(TranslateDocumentResponse {
            total_segments,
            pages_written,
            dropped_lines,
        })
    }
}

/// 将文本排版为页面并逐页写出
///
/// 布局器只做单页放置，续页与否在此决定：paginate 为 false 时
/// 保留观察到的截断行为，剩余行丢弃并记录数量
pub(crate) async fn write_pages(
    sink: &dyn PageSinkPort,
    geometry: &PageGeometry,
    paginate: bool,
    text: &str,
) -> Result<(usize, usize), PipelineError> {
    let mut remaining = text.to_string();
    let mut index = 1;

    loop {
        let placement = place_lines(&remaining, geometry);
        sink.write_page(&PageContent {
            index,
            font_size: geometry.font_size,
            lines: placement.lines,
        })
        .await?;

        if placement.remainder.is_empty() {
            return Ok((index, 0));
        }
        if !paginate {
            tracing::warn!(
                dropped_lines = placement.remainder.len(),
                "Page capacity exhausted, remaining lines dropped"
            );
            return Ok((index, placement.remainder.len()));
        }

        remaining = placement.remainder.join("\n");
        index += 1;
    }
}
