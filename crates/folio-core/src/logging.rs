//! File logging.
//!
//! The TUI owns stdout/stderr while it runs, so logs go to
//! `$FOLIO_HOME/logs/folio.log.<date>` through a non-blocking writer.
//! Filter resolution: `FOLIO_LOG` env var > `[logging] level` > `info`.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::LoggingConfig;

/// Env var that overrides the configured filter directive.
pub const LOG_ENV: &str = "FOLIO_LOG";

const LOG_FILE_PREFIX: &str = "folio.log";

/// Installs the global subscriber.
///
/// Returns the writer guard (keep it alive until exit so buffered lines are
/// flushed), or `None` when logging is disabled.
///
/// # Errors
/// Returns an error if the log directory cannot be created or a global
/// subscriber is already installed.
pub fn init(config: &LoggingConfig, dir: &Path) -> Result<Option<WorkerGuard>> {
    if !config.enabled {
        return Ok(None);
    }

    fs::create_dir_all(dir)
        .with_context(|| format!("create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()
        .context("install tracing subscriber")?;

    Ok(Some(guard))
}

/// Filter directive from config, falling back to `info` when blank.
fn filter_directive(config: &LoggingConfig) -> &str {
    let level = config.level.trim();
    if level.is_empty() { "info" } else { level }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_logging_installs_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            enabled: false,
            ..Default::default()
        };
        let guard = init(&config, &dir.path().join("logs")).unwrap();
        assert!(guard.is_none());
        assert!(!dir.path().join("logs").exists());
    }

    #[test]
    fn test_blank_level_falls_back_to_info() {
        let config = LoggingConfig {
            enabled: true,
            level: "  ".to_string(),
        };
        assert_eq!(filter_directive(&config), "info");
    }
}
