//! Diagnostic logging
//!
//! Game output goes to stdout; diagnostics go to stderr, or to a file when one
//! is given so they never interleave with the board.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Keeps the file writer alive; logs may be lost once this is dropped
pub struct LoggingGuard {
    _guard: Option<WorkerGuard>,
}

/// Default filter when `RUST_LOG` is not set
#[must_use]
pub fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "wordle_duel=debug"
    } else {
        "wordle_duel=warn"
    }
}

/// Install the global subscriber
///
/// # Errors
///
/// Returns an error if the log file's directory cannot be created or a
/// subscriber is already installed.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<LoggingGuard> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let Some(path) = log_file else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false),
            )
            .try_init()
            .context("Failed to install logger")?;
        return Ok(LoggingGuard { _guard: None });
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    let file_name = path
        .file_name()
        .with_context(|| format!("Log path has no file name: {}", path.display()))?;

    let file_appender = tracing_appender::rolling::never(dir, file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_file(true)
                .with_line_number(true),
        )
        .try_init()
        .context("Failed to install logger")?;

    tracing::info!(log_file = %path.display(), "tracing initialized");

    Ok(LoggingGuard {
        _guard: Some(guard),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_level() {
        assert_eq!(default_directive(false), "wordle_duel=warn");
        assert_eq!(default_directive(true), "wordle_duel=debug");
    }

    #[test]
    fn default_directives_parse() {
        for verbose in [false, true] {
            assert!(default_directive(verbose).parse::<EnvFilter>().is_ok());
        }
    }
}
