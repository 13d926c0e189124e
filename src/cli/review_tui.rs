//! Interactive dashboard mode.

use std::io::{self, Write};
use std::sync::Arc;

use bubbletea_rs::Program;

use docquest_review::telemetry::TracingTelemetrySink;
use docquest_review::tui::{DashboardApp, set_dashboard_context};
use docquest_review::{ReviewConfig, ReviewError};

use super::build_dashboard;

/// Runs the terminal dashboard until the reviewer quits.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] for invalid settings and
/// [`ReviewError::Terminal`] when the TUI fails.
pub async fn run(config: &ReviewConfig) -> Result<(), ReviewError> {
    let (runner, state) = build_dashboard(config, Arc::new(TracingTelemetrySink))?;

    // If already set (re-running in the same process) the existing context
    // is kept.
    let _ = set_dashboard_context(runner, state);

    run_tui().await.map_err(|error| ReviewError::Terminal {
        message: error.to_string(),
    })
}

/// Runs the bubbletea-rs program with the `DashboardApp` model.
async fn run_tui() -> Result<(), bubbletea_rs::Error> {
    let program = Program::<DashboardApp>::builder().alt_screen(true).build()?;

    program.run().await?;

    io::stdout().flush().ok();

    Ok(())
}
