/// ログ・トレーシング基盤
///
/// tracingを使用した統一的なログ出力。
///
/// # stdoutとの分離
/// 分類結果の行はprintln!でstdoutへ出力する契約のため、
/// 診断ログはstderrまたはファイルにのみ流す。stdoutには書かない。

use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// ログシステムを初期化
///
/// # Arguments
/// - `log_level`: ログレベル（"info", "debug", "trace"等、RUST_LOGで上書き可）
/// - `json_format`: JSON形式で出力するか
/// - `log_dir`: ログファイル出力先（None = stderr）
///
/// # Returns
/// - `Some(WorkerGuard)`: ファイル出力時はプログラム終了まで保持必須
///   （Drop時にログスレッドが終了しフラッシュされる）
/// - `None`: stderr出力時、または既にsubscriber設定済みの場合
pub fn init_logging(
    log_level: &str,
    json_format: bool,
    log_dir: Option<PathBuf>,
) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    match log_dir {
        Some(dir) => {
            // ファイル出力（非同期）
            if let Err(e) = std::fs::create_dir_all(&dir) {
                eprintln!("Failed to create log directory: {}", e);
                return None;
            }

            let file_appender = tracing_appender::rolling::daily(dir, "conveyor_sort.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

            let subscriber = tracing_subscriber::registry().with(env_filter);

            let result = if json_format {
                subscriber
                    .with(fmt::layer().json().with_writer(non_blocking))
                    .try_init()
            } else {
                subscriber
                    .with(
                        fmt::layer()
                            .with_target(true)
                            .with_ansi(false) // ファイル出力時はANSIエスケープ無効
                            .with_writer(non_blocking),
                    )
                    .try_init()
            };

            if result.is_err() {
                return None;
            }

            info!(
                "Logging initialized (async file): level={}, format={}",
                log_level,
                if json_format { "json" } else { "text" }
            );
            Some(guard)
        }
        None => {
            // stderr出力
            let subscriber = tracing_subscriber::registry().with(env_filter);

            let result = if json_format {
                subscriber
                    .with(fmt::layer().json().with_writer(std::io::stderr))
                    .try_init()
            } else {
                subscriber
                    .with(
                        fmt::layer()
                            .with_target(true)
                            .with_writer(std::io::stderr),
                    )
                    .try_init()
            };

            if result.is_ok() {
                info!(
                    "Logging initialized (stderr): level={}, format={}",
                    log_level,
                    if json_format { "json" } else { "text" }
                );
            }
            None
        }
    }
}
