//! Domain Layer - 领域层
//!
//! 纯函数核心，无 I/O、无异步：
//! - segmenter: 字节预算文本分割
//! - layout: 固定几何页面布局

pub mod layout;
pub mod segmenter;

pub use layout::{place_lines, PageGeometry, PlacedLine, Placement};
pub use segmenter::{segment_text, SegmenterConfig, DEFAULT_MAX_BYTES, MIN_SEGMENT_BYTES};
