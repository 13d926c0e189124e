//! Terminal dashboard for reviewing document blocks.
//!
//! The dashboard follows the Model-View-Update pattern on bubbletea-rs:
//!
//! - **Model**: [`app::DashboardApp`] wraps the framework-independent
//!   [`DashboardState`] together with cursor and layout state
//! - **View**: rendering in `app::rendering` and the [`components`]
//! - **Update**: key events become [`messages::AppMsg`]s; dashboard actions
//!   are applied through [`crate::dashboard::dispatch`] and their effects run
//!   as background commands
//!
//! # Start-up context
//!
//! bubbletea-rs calls `Model::init()` as a static function, so the effect
//! runner and starting state are stored at module level. Call
//! [`set_dashboard_context`] before starting the program.

use std::sync::OnceLock;

use crate::dashboard::{DashboardState, EffectRunner};

pub mod app;
pub mod components;
pub mod input;
pub mod messages;
pub mod state;

pub use app::DashboardApp;

/// Global storage for the runner and initial state read by `init()`.
static DASHBOARD_CONTEXT: OnceLock<DashboardContext> = OnceLock::new();

struct DashboardContext {
    runner: EffectRunner,
    initial_state: DashboardState,
}

/// Stores the effect runner and starting state for the dashboard.
///
/// Returns `true` if the context was set, `false` if it was already set.
pub fn set_dashboard_context(runner: EffectRunner, initial_state: DashboardState) -> bool {
    DASHBOARD_CONTEXT
        .set(DashboardContext {
            runner,
            initial_state,
        })
        .is_ok()
}

/// Returns a copy of the configured starting state, or an empty state.
pub(crate) fn initial_state() -> DashboardState {
    DASHBOARD_CONTEXT
        .get()
        .map(|context| context.initial_state.clone())
        .unwrap_or_default()
}

/// Returns the configured effect runner, if any.
pub(crate) fn effect_runner() -> Option<EffectRunner> {
    DASHBOARD_CONTEXT.get().map(|context| context.runner.clone())
}
