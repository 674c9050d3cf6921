//! Logging initialisation via tracing-subscriber.
//!
//! Call [`init`] once at startup, after settings are resolved.

use std::path::Path;
use std::sync::Mutex;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::EnvFilter;

use crate::config::LogTarget;
use crate::errors::AppError;

/// Initialise the global tracing subscriber.
///
/// If `prefer_level` is `true`, `level` was given explicitly: it must be a
/// plain level accepted by [`parse_level`] and takes precedence over
/// `RUST_LOG`. If `prefer_level` is `false`, `RUST_LOG` takes precedence and
/// `level` is the fallback.
pub fn init(level: &str, prefer_level: bool, target: &LogTarget) -> Result<(), AppError> {
    let filter = if prefer_level {
        let level = parse_level(level)?;
        EnvFilter::default().add_directive(level.into())
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(level))
            .map_err(|e| AppError::Logger(format!("invalid log level '{level}': {e}")))?
    };

    let writer = match target {
        LogTarget::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogTarget::File(path) => BoxMakeWriter::new(Mutex::new(open_log_file(path)?)),
        LogTarget::Discard => BoxMakeWriter::new(std::io::sink),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(matches!(target, LogTarget::Stderr))
        .try_init()
        .map_err(|e| AppError::Logger(format!("failed to set subscriber: {e}")))?;

    Ok(())
}

fn open_log_file(path: &Path) -> Result<std::fs::File, AppError> {
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| AppError::Logger(format!("failed to open log file '{}': {e}", path.display())))
}

/// Parse a log level string into a [`LevelFilter`], returning an error on
/// unrecognised values.
pub fn parse_level(level: &str) -> Result<LevelFilter, AppError> {
    if level.is_empty() {
        return Err(AppError::Logger("log level must not be empty".into()));
    }
    level
        .parse::<LevelFilter>()
        .map_err(|_| AppError::Logger(format!("unrecognised log level: '{level}'")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_levels_parse() {
        for l in &["off", "error", "warn", "info", "debug", "trace"] {
            assert!(parse_level(l).is_ok(), "expected '{l}' to be valid");
        }
    }

    #[test]
    fn invalid_level_errors() {
        assert!(parse_level("verbose").is_err());
        assert!(parse_level("").is_err());
    }

    #[test]
    fn init_rejects_unknown_explicit_level() {
        match init("verbose", true, &LogTarget::Discard) {
            Err(AppError::Logger(msg)) => assert!(msg.contains("unrecognised log level")),
            other => panic!("expected logger error, got {other:?}"),
        }
    }

    #[test]
    fn init_discard_succeeds_or_already_init() {
        // Another test in this process may have installed the subscriber first
        match init("info", true, &LogTarget::Discard) {
            Ok(()) => {}
            Err(AppError::Logger(msg)) if msg.contains("set subscriber") => {}
            Err(e) => panic!("unexpected error: {e}"),
        }
    }
}
