use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Options for logging setup.
#[derive(Debug, Clone)]
pub struct LogOptions<'a> {
    /// Directory for log files (created if missing).
    pub log_dir: &'a str,
    /// Prefix for daily-rotated log files.
    pub prefix: &'a str,
    /// If true, use debug level; otherwise info.
    pub debug: bool,
    /// If true, also log to the console with ANSI colors.
    pub console: bool,
}

impl Default for LogOptions<'_> {
    fn default() -> Self {
        Self {
            log_dir: "logs",
            prefix: "resuforge",
            debug: false,
            console: false,
        }
    }
}

/// Setup logging with a daily-rotating file appender.
///
/// # Returns
/// A guard that must be held for the duration of the program to keep the
/// non-blocking writer flushing.
pub fn setup_logging(options: &LogOptions<'_>) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let log_path = Utf8Path::new(options.log_dir);
    if !log_path.exists() {
        fs::create_dir_all(log_path)
            .with_context(|| format!("Failed to create log directory: {log_path}"))?;
    }

    let file_appender = rolling::daily(options.log_dir, options.prefix);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = if options.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI codes in log files
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    if options.console {
        let console_layer = tracing_subscriber::fmt::layer()
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .with(console_layer)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .init();
    }

    tracing::info!(
        "Logging initialized: dir={}, prefix={}, debug={}, console={}",
        options.log_dir,
        options.prefix,
        options.debug,
        options.console
    );

    Ok(guard)
}
