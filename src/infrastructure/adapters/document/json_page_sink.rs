//! JSON Page Sink - 放置指令序列化写出
//!
//! 每页一行 JSON 追加到输出文件，在接口边界上替代
//! 外部渲染引擎的页面内容写入

use async_trait::async_trait;
use std::path::Path;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use crate::application::ports::{PageContent, PageSinkPort, SinkError};

/// JSON 页面写入端
pub struct JsonPageSink {
    file: Mutex<tokio::fs::File>,
}

impl JsonPageSink {
    /// 创建输出文件（已存在时截断）
    pub async fn create(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref();
        let file = tokio::fs::File::create(path)
            .await
            .map_err(|e| SinkError::WriteError(format!("{}: {}", path.display(), e)))?;

        Ok(Self {
            file: Mutex::new(file),
        })
    }
}

#[async_trait]
impl PageSinkPort for JsonPageSink {
    async fn write_page(&self, page: &PageContent) -> Result<(), SinkError> {
        let mut line = serde_json::to_string(page)
            .map_err(|e| SinkError::WriteError(format!("Failed to serialize page: {}", e)))?;
        line.push('\n');

        let mut file = self.file.lock().await;
        file.write_all(line.as_bytes())
            .await
            .map_err(|e| SinkError::WriteError(e.to_string()))?;
        file.flush()
            .await
            .map_err(|e| SinkError::WriteError(e.to_string()))?;

        tracing::debug!(page = page.index, lines = page.lines.len(), "Page written");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PlacedLine;

    fn page(index: usize, texts: &[&str]) -> PageContent {
        PageContent {
            index,
            font_size: 12.0,
            lines: texts
                .iter()
                .enumerate()
                .map(|(i, t)| PlacedLine {
                    text: t.to_string(),
                    x: 60.0,
                    y: 724.0 - 14.0 * i as f64,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn test_writes_one_json_document_per_page() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");

        let sink = JsonPageSink::create(&path).await.unwrap();
        sink.write_page(&page(1, &["hello", "world"])).await.unwrap();
        sink.write_page(&page(2, &["tail"])).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let records: Vec<serde_json::Value> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["index"], 1);
        assert_eq!(records[0]["font_size"], 12.0);
        assert_eq!(records[0]["lines"][0]["text"], "hello");
        assert_eq!(records[0]["lines"][0]["x"], 60.0);
        assert_eq!(records[0]["lines"][0]["y"], 724.0);
        assert_eq!(records[1]["index"], 2);
        assert_eq!(records[1]["lines"][0]["text"], "tail");
    }

    #[tokio::test]
    async fn test_create_truncates_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.jsonl");
        std::fs::write(&path, "stale content\n").unwrap();

        let sink = JsonPageSink::create(&path).await.unwrap();
        sink.write_page(&page(1, &["fresh"])).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 1);
        assert!(content.contains("fresh"));
    }
}
