//! Headless mode exporting approved content once.

use std::io::{self, Write};
use std::sync::Arc;

use docquest_review::telemetry::StderrJsonlTelemetrySink;
use docquest_review::{ReviewConfig, ReviewError};

use super::build_headless;

/// Requests an export in the configured format and prints the path of the
/// delivered file.
///
/// # Errors
///
/// Returns the gateway or delivery failure, or [`ReviewError::Io`] when
/// stdout is closed.
pub async fn run(config: &ReviewConfig) -> Result<(), ReviewError> {
    let mut dashboard = build_headless(config, Arc::new(StderrJsonlTelemetrySink))?;
    let path = dashboard.export_approved().await?;
    writeln!(io::stdout().lock(), "{path}").map_err(|error| ReviewError::Io {
        message: error.to_string(),
    })
}
