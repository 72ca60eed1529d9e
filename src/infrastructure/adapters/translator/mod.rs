//! Translator Adapter - 翻译客户端实现

mod fake_translate_client;
mod http_translate_client;

pub use fake_translate_client::{FakeTranslateClient, FakeTranslateClientConfig};
pub use http_translate_client::*;
