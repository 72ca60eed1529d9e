//! 应用层 - 命令（写操作）

mod document_commands;

pub mod handlers;

pub use document_commands::*;
