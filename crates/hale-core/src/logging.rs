//! File logging setup.
//!
//! Logs go to ${HALE_HOME}/logs rather than stderr: the TUI owns the
//! terminal's alternate screen, and writing log lines to it would corrupt
//! the display. Filtering is controlled with the HALE_LOG env var.

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber with a daily-rolling file
/// appender.
///
/// Returns a guard that must be held for the lifetime of the process;
/// dropping it flushes and stops the background writer.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = crate::config::paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("Failed to create log directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(&logs_dir, "hale.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env("HALE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    // try_init so tests that initialize their own subscriber don't panic.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init();

    Ok(guard)
}
