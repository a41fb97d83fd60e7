use crate::persistence::ensure_dir;
use anyhow::Result;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `TASKTIMER_LOG=debug`
pub const LOG_ENV: &str = "TASKTIMER_LOG";

/// Build the filter from `TASKTIMER_LOG`, defaulting to `info`
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Route tracing output to a daily rolling file in `log_dir`
///
/// The terminal is owned by the TUI, so nothing is written to stdout or
/// stderr. Keep the returned guard alive until exit to flush pending lines.
pub fn init_logging(log_dir: &Path) -> Result<WorkerGuard> {
    ensure_dir(log_dir)?;

    let file_appender = RollingFileAppender::new(Rotation::DAILY, log_dir, "tasktimer.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(false),
        )
        .try_init()?;

    Ok(guard)
}
