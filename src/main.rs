//! Transdoc - 文档分段翻译与排版流水线
//!
//! CLI 入口：装配适配器并执行命令
//! - translate: 文本文档 → 分段 → 远程翻译 → 排版 → 放置指令
//! - ocr: 图片 → 远程识别 → 排版 → 放置指令

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use transdoc::application::{
    CancelHandle, RecognizeImage, RecognizeImageHandler, TranslateDocument,
    TranslateDocumentHandler,
};
use transdoc::config::{load_config, print_config};
use transdoc::infrastructure::adapters::{
    HttpOcrClient, HttpOcrClientConfig, HttpTranslateClient, HttpTranslateClientConfig,
    JsonPageSink, TextFileSource,
};

#[derive(Debug, Parser)]
#[command(name = "transdoc", about = "Segment, translate and lay out document text")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// 翻译文本文档并输出页面放置指令
    Translate {
        /// 输入文本文件（换页符分页）
        input: PathBuf,
        /// 输出文件（每页一行 JSON）
        output: PathBuf,
        /// 源语言（默认取配置）
        #[arg(long)]
        source_lang: Option<String>,
        /// 目标语言（默认取配置）
        #[arg(long)]
        target_lang: Option<String>,
    },
    /// 识别图片文字并输出页面放置指令
    Ocr {
        /// 输入图片（JPG/PNG）
        image: PathBuf,
        /// 输出文件（每页一行 JSON）
        output: PathBuf,
        /// 识别语言（默认取配置）
        #[arg(long)]
        lang: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    // 初始化日志
    let log_filter = format!("{},transdoc={}", config.log.level, config.log.level);
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter)),
        )
        .init();

    print_config(&config);

    // Ctrl-C 在片段间取消运行，区别于翻译故障
    let cancel = CancelHandle::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Received shutdown signal, cancelling run");
                cancel.cancel();
            }
        });
    }

    match cli.command {
        Command::Translate {
            input,
            output,
            source_lang,
            target_lang,
        } => {
            let source = Arc::new(TextFileSource::open(&input).await?);
            let sink = Arc::new(JsonPageSink::create(&output).await?);

            let translator_config = HttpTranslateClientConfig {
                base_url: config.translator.url.clone(),
                timeout_secs: config.translator.timeout_secs,
                max_retries: config.translator.max_retries,
            };
            let translator = Arc::new(HttpTranslateClient::new(translator_config)?);

            let handler = TranslateDocumentHandler::new(
                source,
                sink,
                translator,
                cancel,
                config.segmenter.clone(),
                config.page.geometry.clone(),
                config.page.paginate,
            );

            let command = TranslateDocument {
                source_lang: source_lang.unwrap_or_else(|| config.translator.source_lang.clone()),
                target_lang: target_lang.unwrap_or_else(|| config.translator.target_lang.clone()),
            };

            let response = handler.handle(command).await?;
            tracing::info!(
                total_segments = response.total_segments,
                pages_written = response.pages_written,
                dropped_lines = response.dropped_lines,
                output = %output.display(),
                "Translation complete"
            );
        }

        Command::Ocr {
            image,
            output,
            lang,
        } => {
            let image_bytes = tokio::fs::read(&image).await?;
            let file_name = image
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            let sink = Arc::new(JsonPageSink::create(&output).await?);

            let ocr_config = HttpOcrClientConfig {
                base_url: config.ocr.url.clone(),
                timeout_secs: config.ocr.timeout_secs,
            };
            let ocr = Arc::new(HttpOcrClient::new(ocr_config)?);

            let handler = RecognizeImageHandler::new(
                ocr,
                sink,
                config.page.geometry.clone(),
                config.page.paginate,
                config.ocr.max_image_bytes,
            );

            let command = RecognizeImage {
                image: image_bytes,
                file_name,
                lang: lang.unwrap_or_else(|| config.ocr.lang.clone()),
            };

            let response = handler.handle(command).await?;
            tracing::info!(
                characters = response.characters,
                pages_written = response.pages_written,
                dropped_lines = response.dropped_lines,
                output = %output.display(),
                "Recognition complete"
            );
        }
    }

    Ok(())
}
