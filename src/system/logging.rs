//! Logging system initialization

use crate::config::Config;
use tracing_appender::non_blocking::WorkerGuard;

/// Initialize the tracing subscriber from configuration.
///
/// Logs go to stdout unless `LOG_FILE` is set. The returned guard must be
/// kept alive for the duration of the program so buffered writes are
/// flushed on shutdown.
///
/// # Panics
/// * If opening the log file fails
/// * If a global subscriber is already installed
pub fn init_logging(config: &Config) -> WorkerGuard {
    let writer: Box<dyn std::io::Write + Send + Sync> = match config.log_file {
        Some(ref log_file) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .expect("Failed to open log file");
            Box::new(file)
        }
        None => Box::new(std::io::stdout()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::new(config.log_level.clone());

    tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(config.log_file.is_none())
        .init();

    guard
}
