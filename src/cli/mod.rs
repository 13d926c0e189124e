//! CLI operation mode handlers.
//!
//! - [`review_tui`]: interactive dashboard
//! - [`list`]: print the block cards
//! - [`export`]: export approved content once

use std::sync::Arc;

use docquest_review::telemetry::TelemetrySink;
use docquest_review::{
    DashboardState, DirectoryDownloads, EffectRunner, HttpBlockGateway, ReviewConfig,
    ReviewDashboard, ReviewError,
};

pub mod export;
pub mod list;
pub mod review_tui;

/// Builds the effect runner and starting state described by `config`.
///
/// # Errors
///
/// Returns [`ReviewError::Configuration`] for an invalid API URL, export
/// format or timeout.
pub fn build_dashboard(
    config: &ReviewConfig,
    telemetry: Arc<dyn TelemetrySink>,
) -> Result<(EffectRunner, DashboardState), ReviewError> {
    let api_url = config.resolve_api_url()?;
    let gateway = HttpBlockGateway::new(&api_url, config.request_timeout()?)?;
    let downloads = DirectoryDownloads::new(config.resolve_download_dir());
    let runner = EffectRunner::new(Arc::new(gateway), Arc::new(downloads)).with_telemetry(telemetry);
    let state = DashboardState::new(config.resolve_export_format()?);
    Ok((runner, state))
}

/// Builds a sequential dashboard for the headless modes.
///
/// # Errors
///
/// See [`build_dashboard`].
pub fn build_headless(
    config: &ReviewConfig,
    telemetry: Arc<dyn TelemetrySink>,
) -> Result<ReviewDashboard, ReviewError> {
    let (runner, state) = build_dashboard(config, telemetry)?;
    Ok(ReviewDashboard::new(state, runner))
}
