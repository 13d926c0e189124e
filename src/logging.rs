//! Diagnostic logging setup.
//!
//! Logs go through `tracing`. The filter comes from `RUST_LOG` and defaults
//! to `info`. The interactive dashboard owns the terminal, so without a log
//! file its logs are discarded; the headless modes log to stderr.

use std::sync::Mutex;

use camino::Utf8Path;
use cap_std::fs_utf8::OpenOptions;
use tracing_subscriber::EnvFilter;

use crate::api::ReviewError;
use crate::config::OperationMode;
use crate::download::open_or_create_dir;

/// Directive used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Where diagnostic logs are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// Standard error.
    Stderr,
    /// Appended to a file.
    File(&'a Utf8Path),
    /// Dropped.
    Discard,
}

impl<'a> LogTarget<'a> {
    /// Picks the log target for an operation mode and optional log file.
    #[must_use]
    pub fn for_mode(mode: OperationMode, log_file: Option<&'a str>) -> Self {
        match (log_file.filter(|path| !path.trim().is_empty()), mode) {
            (Some(path), _) => Self::File(Utf8Path::new(path)),
            (None, OperationMode::Dashboard) => Self::Discard,
            (None, OperationMode::List | OperationMode::Export) => Self::Stderr,
        }
    }
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns [`ReviewError::Io`] when the log file cannot be opened and
/// [`ReviewError::Configuration`] when a subscriber is already installed.
pub fn init(target: LogTarget<'_>) -> Result<(), ReviewError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_ansi(false);

    let installed = match target {
        LogTarget::Discard => return Ok(()),
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::File(path) => {
            let file = open_log_file(path)?;
            builder.with_writer(Mutex::new(file)).try_init()
        }
    };

    installed.map_err(|error| ReviewError::Configuration {
        message: format!("failed to install log subscriber: {error}"),
    })
}

fn open_log_file(path: &Utf8Path) -> Result<std::fs::File, ReviewError> {
    let file_name = path.file_name().ok_or_else(|| ReviewError::Configuration {
        message: format!("log file '{path}' has no file name"),
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));

    let dir = open_or_create_dir(parent)?;
    let file = dir
        .open_with(file_name, OpenOptions::new().create(true).append(true))
        .map_err(|error| ReviewError::Io {
            message: format!("failed to open log file '{path}': {error}"),
        })?;
    Ok(file.into_std())
}
