//! Runtime settings resolved from the command line
//!
//! There are no configuration files. The log level comes from `--log-level`,
//! falling back to `RUST_LOG` and then [`DEFAULT_LOG_LEVEL`].

use crate::cli::{Cli, Commands};
use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Where log records go
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
    /// Dropped, used while the workbench owns the terminal
    Discard,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub log_level: String,
    /// `log_level` was given explicitly and wins over `RUST_LOG`
    pub prefer_level: bool,
    pub log_target: LogTarget,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Self {
        let (log_level, prefer_level) = match &cli.log_level {
            Some(level) => (level.clone(), true),
            None => (DEFAULT_LOG_LEVEL.to_string(), false),
        };
        let log_target = match (&cli.log_file, &cli.command) {
            (Some(path), _) => LogTarget::File(path.clone()),
            (None, Commands::Tui) => LogTarget::Discard,
            (None, _) => LogTarget::Stderr,
        };
        Settings {
            log_level,
            prefer_level,
            log_target,
        }
    }
}
