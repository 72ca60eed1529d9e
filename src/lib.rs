//! Transdoc - 文档分段翻译与排版流水线
//!
//! 架构设计: Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - Segmenter: 字节预算文本分割（行 → 词 → 字符三级回退）
//! - Layout: 固定几何页面布局
//!
//! 应用层 (application/):
//! - Ports: 端口定义（Translator, Ocr, DocumentSource, PageSink）
//! - Pipeline: 顺序分段翻译编排器与取消句柄
//! - Commands: 命令处理器（TranslateDocument, RecognizeImage）
//!
//! 基础设施层 (infrastructure/):
//! - Adapters: HTTP 翻译/OCR 客户端、文本文件源、JSON 页面写入

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
