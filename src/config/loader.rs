//! Configuration Loader
//!
//! 实现多源配置加载与合并逻辑
//!
//! 优先级（从高到低）：
//! 1. 环境变量
//! 2. 配置文件（config.toml）
//! 3. 默认值

use config::{Config, ConfigError as ConfigCrateError, Environment, File};
use std::path::Path;
use thiserror::Error;

use crate::domain::MIN_SEGMENT_BYTES;

use super::types::AppConfig;

/// 配置加载错误
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

impl From<ConfigCrateError> for ConfigError {
    fn from(err: ConfigCrateError) -> Self {
        ConfigError::LoadError(err.to_string())
    }
}

/// 配置文件搜索路径
const CONFIG_FILE_NAMES: &[&str] = &["config", "config.local"];

/// 加载应用配置
///
/// 按优先级从高到低合并配置：
/// 1. 环境变量（前缀 `TRANSDOC_`，层级分隔符 `__`）
/// 2. 配置文件（config.toml 或 config.local.toml）
/// 3. 默认值
///
/// # 环境变量示例
/// - `TRANSDOC_TRANSLATOR__URL=http://translate-server:5001`
/// - `TRANSDOC_TRANSLATOR__TARGET_LANG=de`
/// - `TRANSDOC_SEGMENTER__MAX_BYTES=4096`
/// - `TRANSDOC_PAGE__PAGINATE=false`
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from_path(None)
}

/// 从指定路径加载配置
///
/// # 参数
/// - `config_path` - 可选的配置文件路径，如果为 None 则使用默认搜索路径
pub fn load_config_from_path(config_path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();

    // 1. 首先设置默认值（最低优先级）
    builder = builder
        .set_default("segmenter.max_bytes", 9000)?
        .set_default("translator.url", "http://localhost:5001")?
        .set_default("translator.timeout_secs", 120)?
        .set_default("translator.max_retries", 0)?
        .set_default("translator.source_lang", "en")?
        .set_default("translator.target_lang", "fr")?
        .set_default("ocr.url", "http://localhost:5001")?
        .set_default("ocr.timeout_secs", 120)?
        .set_default("ocr.lang", "eng")?
        .set_default("ocr.max_image_bytes", 10 * 1024 * 1024)?
        .set_default("page.geometry.width", 612.0)?
        .set_default("page.geometry.height", 794.0)?
        .set_default("page.geometry.top_margin", 70.0)?
        .set_default("page.geometry.bottom_margin", 60.0)?
        .set_default("page.geometry.left_origin", 60.0)?
        .set_default("page.geometry.line_height", 14.0)?
        .set_default("page.geometry.font_size", 12.0)?
        .set_default("page.paginate", true)?
        .set_default("log.level", "info")?
        .set_default("log.json", false)?;

    // 2. 添加配置文件（如果存在）
    if let Some(path) = config_path {
        builder = builder.add_source(File::from(path).required(true));
    } else {
        // 搜索默认配置文件
        for name in CONFIG_FILE_NAMES {
            builder = builder.add_source(File::with_name(name).required(false));
        }
    }

    // 3. 添加环境变量（最高优先级）
    // 前缀: TRANSDOC_
    // 层级分隔符: __ (双下划线)
    // 例如: TRANSDOC_TRANSLATOR__URL=http://translate-server:5001
    builder = builder.add_source(
        Environment::with_prefix("TRANSDOC")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true),
    );

    // 4. 构建配置
    let config = builder.build()?;

    // 5. 反序列化为 AppConfig
    let app_config: AppConfig = config
        .try_deserialize()
        .map_err(|e| ConfigError::ParseError(format!("Failed to deserialize config: {}", e)))?;

    // 6. 验证配置
    validate_config(&app_config)?;

    Ok(app_config)
}

/// 验证配置有效性
///
/// 字节预算与页面几何的约束在此一次性把关，运行期不再检查
fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    // 预算必须能容纳最坏情况下的单个码点编码
    if config.segmenter.max_bytes < MIN_SEGMENT_BYTES {
        return Err(ConfigError::ValidationError(format!(
            "Segment byte budget must be at least {} bytes to hold one UTF-8 code point",
            MIN_SEGMENT_BYTES
        )));
    }

    // 验证服务 URL
    if config.translator.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "Translator URL cannot be empty".to_string(),
        ));
    }
    if config.ocr.url.is_empty() {
        return Err(ConfigError::ValidationError(
            "OCR URL cannot be empty".to_string(),
        ));
    }

    // 验证页面几何：至少能放下一行，否则排版无法推进
    let geometry = &config.page.geometry;
    if geometry.line_height <= 0.0 {
        return Err(ConfigError::ValidationError(
            "Line height must be positive".to_string(),
        ));
    }
    if geometry.height - geometry.top_margin < geometry.bottom_margin {
        return Err(ConfigError::ValidationError(
            "Page margins leave no room for a single line".to_string(),
        ));
    }

    Ok(())
}

/// 打印配置信息（用于启动时日志）
pub fn print_config(config: &AppConfig) {
    tracing::info!("=== Application Configuration ===");
    tracing::info!("Segment Byte Budget: {}", config.segmenter.max_bytes);
    tracing::info!("Translator URL: {}", config.translator.url);
    tracing::info!("Translator Timeout: {}s", config.translator.timeout_secs);
    tracing::info!(
        "Translation: {} -> {}",
        config.translator.source_lang,
        config.translator.target_lang
    );
    tracing::info!("OCR URL: {}", config.ocr.url);
    tracing::info!("OCR Language: {}", config.ocr.lang);
    tracing::info!(
        "Page: {}x{}, line height {}",
        config.page.geometry.width,
        config.page.geometry.height,
        config.page.geometry.line_height
    );
    tracing::info!("Paginate: {}", config.page.paginate);
    tracing::info!("Log Level: {}", config.log.level);
    tracing::info!("=================================");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.segmenter.max_bytes, 9000);
        assert_eq!(config.translator.url, "http://localhost:5001");
    }

    #[test]
    fn test_validation_passes_for_valid_config() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_tiny_byte_budget() {
        let mut config = AppConfig::default();
        config.segmenter.max_bytes = 3;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_minimum_viable_byte_budget_is_accepted() {
        let mut config = AppConfig::default();
        config.segmenter.max_bytes = MIN_SEGMENT_BYTES;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_validation_error_for_empty_translator_url() {
        let mut config = AppConfig::default();
        config.translator.url = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_zero_line_height() {
        let mut config = AppConfig::default();
        config.page.geometry.line_height = 0.0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_validation_error_for_margins_exceeding_page() {
        let mut config = AppConfig::default();
        config.page.geometry.top_margin = 780.0;
        assert!(validate_config(&config).is_err());
    }
}
