//! OCR Command Handlers - 图片识别用例编排

use std::sync::Arc;

use crate::application::commands::RecognizeImage;
use crate::application::commands::handlers::translate_handlers::write_pages;
use crate::application::error::PipelineError;
use crate::application::ports::{OcrPort, OcrRequest, PageContent, PageSinkPort};
use crate::domain::PageGeometry;

/// 远程服务接受的图片扩展名
const ALLOWED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

// ============================================================================
// RecognizeImage
// ============================================================================

/// 识别响应
#[derive(Debug, Clone)]
pub struct RecognizeImageResponse {
    /// 识别出的字符数
    pub characters: usize,
    pub pages_written: usize,
    pub dropped_lines: usize,
}

/// RecognizeImage Handler - 校验 → 识别 → 排版写出
pub struct RecognizeImageHandler {
    ocr: Arc<dyn OcrPort>,
    sink: Arc<dyn PageSinkPort>,
    geometry: PageGeometry,
    paginate: bool,
    max_image_bytes: u64,
}

impl RecognizeImageHandler {
    pub fn new(
        ocr: Arc<dyn OcrPort>,
        sink: Arc<dyn PageSinkPort>,
        geometry: PageGeometry,
        paginate: bool,
        max_image_bytes: u64,
    ) -> Self {
        Self {
            ocr,
            sink,
            geometry,
            paginate,
            max_image_bytes,
        }
    }

    pub async fn handle(
        &self,
        command: RecognizeImage,
    ) -> Result<RecognizeImageResponse, PipelineError> {
        // 入参校验，与远程服务自身的约束一致
        if command.image.len() as u64 > self.max_image_bytes {
            return Err(PipelineError::validation(format!(
                "File size must not exceed {}MB",
                self.max_image_bytes / (1024 * 1024)
            )));
        }
        if !has_allowed_extension(&command.file_name) {
            return Err(PipelineError::validation(
                "Unsupported file format. Please use JPG or PNG",
            ));
        }

        let text = self
            .ocr
            .recognize(OcrRequest {
                image: command.image,
                file_name: command.file_name,
                lang: command.lang,
            })
            .await?;
        let characters = text.chars().count();

        // 识别结果为空时仍产出一张空白页
        let (pages_written, dropped_lines) = if text.trim().is_empty() {
            self.sink
                .write_page(&PageContent {
                    index: 1,
                    font_size: self.geometry.font_size,
                    lines: Vec::new(),
                })
                .await?;
            (1, 0)
        } else {
            write_pages(self.sink.as_ref(), &self.geometry, self.paginate, &text).await?
        };

        tracing::info!(characters, pages_written, dropped_lines, "Image recognized");

        Ok(RecognizeImageResponse {
            characters,
            pages_written,
            dropped_lines,
        })
    }
}

fn has_allowed_extension(file_name: &str) -> bool {
    std::path::Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{OcrError, SinkError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeOcr {
        text: String,
    }

    #[async_trait]
    impl OcrPort for FakeOcr {
        async fn recognize(&self, _request: OcrRequest) -> Result<String, OcrError> {
            Ok(self.text.clone())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        pages: Mutex<Vec<PageContent>>,
    }

    #[async_trait]
    impl PageSinkPort for RecordingSink {
        async fn write_page(&self, page: &PageContent) -> Result<(), SinkError> {
            self.pages.lock().unwrap().push(page.clone());
            Ok(())
        }
    }

    fn three_line_geometry() -> PageGeometry {
        PageGeometry {
            height: 100.0,
            top_margin: 20.0,
            bottom_margin: 60.0,
            line_height: 10.0,
            ..PageGeometry::default()
        }
    }

    fn make_handler(text: &str) -> (RecognizeImageHandler, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::default());
        let handler = RecognizeImageHandler::new(
            Arc::new(FakeOcr {
                text: text.to_string(),
            }),
            sink.clone(),
            three_line_geometry(),
            true,
            10 * 1024 * 1024,
        );
        (handler, sink)
    }

    fn command(file_name: &str, size: usize) -> RecognizeImage {
        RecognizeImage {
            image: vec![0u8; size],
            file_name: file_name.to_string(),
            lang: "eng".to_string(),
        }
    }

    #[tokio::test]
    async fn test_recognized_text_is_placed_onto_pages() {
        let (handler, sink) = make_handler("a\nb\nc\nd");

        let response = handler.handle(command("scan.png", 128)).await.unwrap();

        assert_eq!(response.characters, 7);
        assert_eq!(response.pages_written, 2);
        let pages = sink.pages.lock().unwrap();
        let first: Vec<&str> = pages[0].lines.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(first, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_empty_recognition_produces_blank_page() {
        let (handler, sink) = make_handler("   ");

        let response = handler.handle(command("scan.jpg", 128)).await.unwrap();

        assert_eq!(response.pages_written, 1);
        let pages = sink.pages.lock().unwrap();
        assert_eq!(pages.len(), 1);
        assert!(pages[0].lines.is_empty());
    }

    #[tokio::test]
    async fn test_oversized_image_is_rejected_before_recognition() {
        let sink = Arc::new(RecordingSink::default());
        let handler = RecognizeImageHandler::new(
            Arc::new(FakeOcr {
                text: "x".to_string(),
            }),
            sink.clone(),
            three_line_geometry(),
            true,
            1024, // 1KB 上限
        );

        let err = handler.handle(command("scan.png", 2048)).await.unwrap_err();

        assert!(matches!(err, PipelineError::ValidationError(_)));
        assert!(sink.pages.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_extension_is_rejected() {
        let (handler, _sink) = make_handler("x");

        let err = handler.handle(command("scan.gif", 128)).await.unwrap_err();

        assert!(matches!(err, PipelineError::ValidationError(_)));
    }

    #[tokio::test]
    async fn test_extension_check_is_case_insensitive() {
        let (handler, _sink) = make_handler("x");

        assert!(handler.handle(command("SCAN.JPEG", 128)).await.is_ok());
    }
}
