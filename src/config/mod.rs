//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.docquest.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `DOCQUEST_API_URL`, `DOCQUEST_EXPORT_FORMAT`,
//!    and so on
//! 4. **Command-line arguments** – `--api-url`/`-u`, `--export-format`/`-f`,
//!    and so on
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "http://127.0.0.1:5000"
//! export_format = "markdown"
//! download_dir = "/home/reviewer/Downloads"
//! request_timeout_seconds = 30
//! log_file = "/tmp/docquest.log"
//! ```

use std::str::FromStr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::api::{ExportFormat, ReviewError};

/// Backend used when no API URL is configured.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Interactive terminal dashboard.
    Dashboard,
    /// Print the block cards and exit.
    List,
    /// Export approved content once and exit.
    Export,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use docquest_review::ReviewConfig;
/// use ortho_config::OrthoConfig;
///
/// let config = ReviewConfig::load().expect("failed to load configuration");
/// let api_url = config.resolve_api_url().expect("valid API URL");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "DOCQUEST",
    discovery(
        dotfile_name = ".docquest.toml",
        config_file_name = "docquest.toml",
        app_name = "docquest"
    )
)]
pub struct ReviewConfig {
    /// Base URL of the review backend.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-u <URL>`
    /// - Environment: `DOCQUEST_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'u')]
    pub api_url: Option<String>,

    /// Export format: `json`, `text`, `markdown` or `csv`.
    ///
    /// Can be provided via:
    /// - CLI: `--export-format <FORMAT>` or `-f <FORMAT>`
    /// - Environment: `DOCQUEST_EXPORT_FORMAT`
    /// - Config file: `export_format = "..."`
    #[ortho_config(cli_short = 'f')]
    pub export_format: Option<String>,

    /// Directory that receives exported files. Defaults to the current
    /// directory.
    #[ortho_config(cli_short = 'd')]
    pub download_dir: Option<String>,

    /// Upper bound for every backend request, in seconds. Unbounded when
    /// unset.
    #[ortho_config()]
    pub request_timeout_seconds: Option<u64>,

    /// File that receives diagnostic logs.
    ///
    /// Without it the dashboard discards logs, since it owns the terminal,
    /// and the headless modes log to stderr.
    #[ortho_config(cli_short = 'L')]
    pub log_file: Option<String>,

    /// Prints the block cards and exits.
    ///
    /// Note: `ortho_config` does not load boolean values from the
    /// environment, so only the CLI flag and config file apply.
    #[ortho_config(cli_short = 'l')]
    pub list: bool,

    /// Exports approved content in `export_format` and exits.
    #[ortho_config(cli_short = 'e')]
    pub export: bool,
}

impl ReviewConfig {
    /// Determines the operation mode.
    ///
    /// Export wins over listing; with neither flag the dashboard runs.
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.export {
            OperationMode::Export
        } else if self.list {
            OperationMode::List
        } else {
            OperationMode::Dashboard
        }
    }

    /// Parses the configured API URL, falling back to [`DEFAULT_API_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when the URL is malformed or is
    /// not an `http`/`https` URL.
    pub fn resolve_api_url(&self) -> Result<Url, ReviewError> {
        let raw = self.api_url.as_deref().unwrap_or(DEFAULT_API_URL).trim();
        let url = Url::parse(raw).map_err(|error| ReviewError::Configuration {
            message: format!("invalid API URL '{raw}': {error}"),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ReviewError::Configuration {
                message: format!("API URL must use http or https: {raw}"),
            });
        }
        Ok(url)
    }

    /// Parses the configured export format, defaulting to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::UnsupportedExportFormat`] for unknown formats.
    pub fn resolve_export_format(&self) -> Result<ExportFormat, ReviewError> {
        self.export_format
            .as_deref()
            .map_or(Ok(ExportFormat::default()), ExportFormat::from_str)
    }

    /// Returns the download directory, defaulting to the current directory.
    #[must_use]
    pub fn resolve_download_dir(&self) -> &str {
        self.download_dir
            .as_deref()
            .filter(|dir| !dir.trim().is_empty())
            .unwrap_or(".")
    }

    /// Returns the per-request timeout, if one is configured.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::Configuration`] when the timeout is zero.
    pub fn request_timeout(&self) -> Result<Option<Duration>, ReviewError> {
        match self.request_timeout_seconds {
            Some(0) => Err(ReviewError::Configuration {
                message: "request_timeout_seconds must be greater than zero".to_owned(),
            }),
            other => Ok(other.map(Duration::from_secs)),
        }
    }

    /// Checks every derived value so start-up fails before any request.
    ///
    /// # Errors
    ///
    /// Returns the first resolution error.
    pub fn validate(&self) -> Result<(), ReviewError> {
        self.resolve_api_url()?;
        self.resolve_export_format()?;
        self.request_timeout()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests;
