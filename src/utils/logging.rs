//! Logging initialization.
//!
//! The TUI owns the terminal, so logs only ever go to a file: one per day under
//! `<cache dir>/history-picker/logs/`. The level comes from `RUST_LOG` and defaults to `warn`.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_PREFIX: &str = "history-picker.log";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Directory log files are written to
pub fn log_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("history-picker")
        .join("logs")
}

/// Install the global file subscriber
///
/// Keep the returned guard alive for the whole run; dropping it flushes and stops the writer.
pub fn init_logging() -> Result<WorkerGuard> {
    let dir = log_dir();
    fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(&dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install log subscriber")?;

    tracing::info!(dir = %dir.display(), "logging initialized");
    Ok(guard)
}
