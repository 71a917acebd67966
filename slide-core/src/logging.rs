//! Structured logging setup using the `tracing` ecosystem.
//!
//! Console output is always enabled; a daily-rotated file layer is added when
//! the logging config names a directory.

use std::path::Path;

use tracing_appender::rolling;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{SlideError, SlideResult};

/// Initialize the global tracing subscriber from the logging config.
///
/// Sets up:
/// - Console output (stderr) in compact format
/// - File output with daily rotation when `config.directory` is set
/// - JSON file output when `config.json_output` is true
pub fn init_logging(config: &LoggingConfig) -> SlideResult<LogGuard> {
    let env_filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .compact();

    if config.directory.is_empty() {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .try_init()
            .map_err(|e| SlideError::Config(format!("failed to install subscriber: {e}")))?;
        tracing::info!("logging initialized at level={}", config.level);
        return Ok(LogGuard { _guard: None });
    }

    let log_dir = Path::new(&config.directory);
    std::fs::create_dir_all(log_dir)?;

    let file_appender = rolling::daily(log_dir, "slide.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let init = if config.json_output {
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .json()
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
    } else {
        let file_layer = fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .with_target(true)
            .with_file(true)
            .with_line_number(true);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(console_layer)
            .with(file_layer)
            .try_init()
    };
    init.map_err(|e| SlideError::Config(format!("failed to install subscriber: {e}")))?;

    tracing::info!(
        "logging initialized at level={}, dir={}",
        config.level,
        log_dir.display()
    );

    Ok(LogGuard {
        _guard: Some(guard),
    })
}

/// Guard that keeps the non-blocking log writer alive.
/// Drop this to flush and close the log file.
#[derive(Debug)]
pub struct LogGuard {
    _guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Initialize a minimal console-only logger for testing or simple tools.
pub fn init_console_logging(level: &str) {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_target(true).compact())
        .try_init();
}
