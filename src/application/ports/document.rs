//! Document Ports - 文档引擎边界抽象
//!
//! 渲染引擎只在接口边界出现：文本提取端（source）与页面内容写入端（sink）

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::domain::PlacedLine;

/// 文档源错误
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("Page {0} out of range")]
    PageOutOfRange(usize),

    #[error("Read error: {0}")]
    ReadError(String),
}

/// 页面写入错误
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Write error: {0}")]
    WriteError(String),
}

/// 单页输出内容
///
/// 布局器产出的放置指令序列，写入端不做任何布局决策
#[derive(Debug, Clone, Serialize)]
pub struct PageContent {
    /// 页码（1 起）
    pub index: usize,
    /// 字号
    pub font_size: f64,
    /// 放置指令，顺序即书写顺序
    pub lines: Vec<PlacedLine>,
}

/// Document Source Port
///
/// 文本提取端的抽象接口，页码沿用引擎的 1 起约定
#[async_trait]
pub trait DocumentSourcePort: Send + Sync {
    /// 文档总页数
    async fn page_count(&self) -> Result<usize, SourceError>;

    /// 加载指定页的文本（page_index 从 1 开始）
    async fn load_page_text(&self, page_index: usize) -> Result<String, SourceError>;
}

/// Page Sink Port
///
/// 页面内容写入端的抽象接口，每页调用一次
#[async_trait]
pub trait PageSinkPort: Send + Sync {
    /// 写入一页放置指令
    async fn write_page(&self, page: &PageContent) -> Result<(), SinkError>;
}
