//! `docquest-review` entry point.
//!
//! Runs the interactive dashboard by default, or one of the headless modes
//! (`--list`, `--export`).

use std::io::{self, Write};
use std::process::ExitCode;

use docquest_review::logging::{self, LogTarget};
use docquest_review::{OperationMode, ReviewConfig, ReviewError};
use ortho_config::OrthoConfig;

mod cli;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            if writeln!(io::stderr().lock(), "{error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ReviewError> {
    let config = load_config()?;
    config.validate()?;

    let mode = config.operation_mode();
    logging::init(LogTarget::for_mode(mode, config.log_file.as_deref()))?;
    tracing::debug!(?mode, "starting docquest-review");

    match mode {
        OperationMode::Dashboard => cli::review_tui::run(&config).await,
        OperationMode::List => cli::list::run(&config).await,
        OperationMode::Export => cli::export::run(&config).await,
    }
}

/// Loads configuration from CLI, environment, and files.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<ReviewConfig, ReviewError> {
    ReviewConfig::load().map_err(|error| ReviewError::Configuration {
        message: error.to_string(),
    })
}
