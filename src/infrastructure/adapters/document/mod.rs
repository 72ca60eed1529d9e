//! Document Adapter - 文档源与页面写入实现

mod json_page_sink;
mod text_file_source;

pub use json_page_sink::JsonPageSink;
pub use text_file_source::TextFileSource;
