//! Tracing setup.
//!
//! Stdout and stderr belong to the terminal UI (or to command output), so
//! logs go to a daily-rolling file under `$SOCIAL_HOME/logs`.

use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::{Config, paths};

/// Environment variable overriding the configured log filter.
pub const LOG_ENV: &str = "SOCIAL_LOG";

/// Log file name prefix (the appender adds a date suffix).
const LOG_FILE: &str = "social.log";

/// Initializes the global tracing subscriber.
///
/// The returned guard flushes buffered log lines on drop; keep it alive for
/// the whole process.
pub fn init(config: &Config) -> Result<WorkerGuard> {
    init_in(&paths::logs_dir(), config)
}

/// Initializes tracing with logs written to `dir`.
pub fn init_in(dir: &Path, config: &Config) -> Result<WorkerGuard> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::registry()
        .with(env_filter(&config.log_level)?)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    Ok(guard)
}

fn env_filter(configured: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(configured))
        .or_else(|_| EnvFilter::try_new("info"))
        .map_err(|e| anyhow::anyhow!("Failed to create log filter: {e}"))
}
