mod application;
mod domain;
mod infrastructure;
mod logging;

use crate::application::pipeline::SortPipeline;
use crate::domain::config::AppConfig;
use crate::infrastructure::display_selector::DisplaySelector;
use crate::infrastructure::feature_extract::FeatureExtractAdapter;
use crate::infrastructure::image_load::ImreadLoaderAdapter;
use crate::logging::init_logging;
use anyhow::Context;
use std::path::Path;

fn main() {
    // ログシステムの初期化（stderr出力、結果行のstdoutとは分離）
    let _guard = init_logging("info", false, None);

    tracing::info!("conveyor_sort starting...");

    match run() {
        Ok(_) => {
            tracing::info!("conveyor_sort terminated gracefully.");
        }
        Err(e) => {
            tracing::error!("Fatal error: {:?}", e);
            std::process::exit(1);
        }
    }
}

/// アプリケーションのメイン処理
fn run() -> anyhow::Result<()> {
    // 設定ファイルの読み込み（存在しない場合はデフォルト設定を使用）
    let config = match AppConfig::from_file("config.toml") {
        Ok(config) => {
            tracing::info!("Loaded configuration from config.toml");
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load config.toml: {:?}, using defaults", e);
            AppConfig::default()
        }
    };

    // 設定の検証
    config.validate().context("Invalid configuration")?;

    tracing::info!("Input: directory={}", config.input.directory);

    // アダプタの初期化
    let loader = ImreadLoaderAdapter::new();
    let analyzer = FeatureExtractAdapter::new();
    let display = DisplaySelector::from_enabled(config.display.enabled);

    let backend_name = display.backend_name();
    tracing::info!("Display backend: {}", backend_name);

    // パイプラインの起動（ブロッキング、最初のエラーで中断）
    let mut pipeline = SortPipeline::new(loader, analyzer, display);
    let processed = pipeline
        .run(Path::new(&config.input.directory))
        .context("Classification run aborted")?;

    tracing::info!("Processed {} image(s)", processed);

    Ok(())
}
