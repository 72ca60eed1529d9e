//! Configuration Types
//!
//! 定义所有配置结构体

use serde::Deserialize;

use crate::domain::{PageGeometry, SegmenterConfig};

/// 应用主配置
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// 分割配置
    #[serde(default)]
    pub segmenter: SegmenterConfig,

    /// 翻译服务配置
    #[serde(default)]
    pub translator: TranslatorConfig,

    /// OCR 服务配置
    #[serde(default)]
    pub ocr: OcrConfig,

    /// 页面配置
    #[serde(default)]
    pub page: PageConfig,

    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            segmenter: SegmenterConfig::default(),
            translator: TranslatorConfig::default(),
            ocr: OcrConfig::default(),
            page: PageConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// 翻译服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct TranslatorConfig {
    /// 翻译服务基础 URL
    #[serde(default = "default_service_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_service_timeout")]
    pub timeout_secs: u64,

    /// 网络/超时错误的最大重试次数
    #[serde(default)]
    pub max_retries: u32,

    /// 默认源语言
    #[serde(default = "default_source_lang")]
    pub source_lang: String,

    /// 默认目标语言
    #[serde(default = "default_target_lang")]
    pub target_lang: String,
}

fn default_service_url() -> String {
    "http://localhost:5001".to_string()
}

fn default_service_timeout() -> u64 {
    120
}

fn default_source_lang() -> String {
    "en".to_string()
}

fn default_target_lang() -> String {
    "fr".to_string()
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            url: default_service_url(),
            timeout_secs: default_service_timeout(),
            max_retries: 0,
            source_lang: default_source_lang(),
            target_lang: default_target_lang(),
        }
    }
}

/// OCR 服务配置
#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    /// OCR 服务基础 URL
    #[serde(default = "default_service_url")]
    pub url: String,

    /// 请求超时时间（秒）
    #[serde(default = "default_service_timeout")]
    pub timeout_secs: u64,

    /// 默认识别语言
    #[serde(default = "default_ocr_lang")]
    pub lang: String,

    /// 图片大小上限（字节）
    #[serde(default = "default_max_image_bytes")]
    pub max_image_bytes: u64,
}

fn default_ocr_lang() -> String {
    "eng".to_string()
}

fn default_max_image_bytes() -> u64 {
    10 * 1024 * 1024 // 10 MB
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            url: default_service_url(),
            timeout_secs: default_service_timeout(),
            lang: default_ocr_lang(),
            max_image_bytes: default_max_image_bytes(),
        }
    }
}

/// 页面配置
#[derive(Debug, Clone, Deserialize)]
pub struct PageConfig {
    /// 页面几何常量
    #[serde(default)]
    pub geometry: PageGeometry,

    /// 单页放不下时是否续页；false 保留截断行为并丢弃剩余行
    #[serde(default = "default_paginate")]
    pub paginate: bool,
}

fn default_paginate() -> bool {
    true
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            geometry: PageGeometry::default(),
            paginate: default_paginate(),
        }
    }
}

/// 日志配置
#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// 日志级别
    #[serde(default = "default_log_level")]
    pub level: String,

    /// 是否启用 JSON 格式
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.segmenter.max_bytes, 9000);
        assert_eq!(config.translator.url, "http://localhost:5001");
        assert_eq!(config.translator.source_lang, "en");
        assert_eq!(config.translator.target_lang, "fr");
        assert_eq!(config.ocr.lang, "eng");
        assert_eq!(config.ocr.max_image_bytes, 10 * 1024 * 1024);
        assert!(config.page.paginate);
    }

    #[test]
    fn test_default_page_geometry() {
        let config = AppConfig::default();
        assert_eq!(config.page.geometry.width, 612.0);
        assert_eq!(config.page.geometry.height, 794.0);
        assert_eq!(config.page.geometry.font_size, 12.0);
    }
}
