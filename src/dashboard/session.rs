//! Sequential driver that runs every effect to completion.
//!
//! The TUI spreads effects across background commands; headless callers and
//! tests use [`ReviewDashboard`] instead, which awaits each effect in turn
//! until no work remains.

use std::collections::VecDeque;

use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};

use crate::api::{BlockId, ReviewError};

use super::action::Action;
use super::cards::BlockCard;
use super::dispatch::dispatch;
use super::runner::EffectRunner;
use super::state::DashboardState;

/// Dashboard state paired with the runner that performs its effects.
#[derive(Debug)]
pub struct ReviewDashboard {
    state: DashboardState,
    runner: EffectRunner,
}

impl ReviewDashboard {
    /// Creates a dashboard over `state`.
    #[must_use]
    pub const fn new(state: DashboardState, runner: EffectRunner) -> Self {
        Self { state, runner }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Dispatches `action` and runs the resulting effects, including any
    /// effects emitted by their follow-up actions.
    pub async fn apply(&mut self, action: Action) {
        self.state.last_error = None;
        let mut pending: VecDeque<_> = dispatch(&mut self.state, action).into();
        while let Some(effect) = pending.pop_front() {
            let outcome = self.runner.run(effect).await;
            pending.extend(dispatch(&mut self.state, outcome));
        }
    }

    /// Loads the block collection.
    ///
    /// # Errors
    ///
    /// Returns the load failure; cached blocks are kept.
    pub async fn load_blocks(&mut self) -> Result<usize, ReviewError> {
        self.apply(Action::RefreshRequested).await;
        self.take_failure()?;
        Ok(self.state.blocks().len())
    }

    /// Projects the cached blocks into cards.
    #[must_use]
    pub fn render_blocks(&self) -> Vec<BlockCard> {
        self.state.cards()
    }

    /// Opens the review editor on `block_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::LocalPrecondition`] when the block is not cached.
    pub async fn open_editor(&mut self, block_id: BlockId) -> Result<(), ReviewError> {
        self.apply(Action::OpenEditor(block_id)).await;
        self.take_failure()
    }

    /// Saves the open draft stamped with `requested_at`.
    ///
    /// # Errors
    ///
    /// Returns [`ReviewError::LocalPrecondition`] when no editor is open, or
    /// the gateway failure when the backend rejects the update.
    pub async fn save_current_review(
        &mut self,
        requested_at: DateTime<Utc>,
    ) -> Result<(), ReviewError> {
        self.apply(Action::SaveRequested { requested_at }).await;
        self.take_failure()
    }

    /// Exports approved content in the selected format and delivers it.
    ///
    /// # Errors
    ///
    /// Returns the gateway or delivery failure.
    pub async fn export_approved(&mut self) -> Result<Utf8PathBuf, ReviewError> {
        self.state.last_download = None;
        self.apply(Action::ExportRequested).await;
        self.take_failure()?;
        self.state
            .last_download()
            .cloned()
            .ok_or_else(|| ReviewError::precondition("Export produced no download."))
    }

    fn take_failure(&mut self) -> Result<(), ReviewError> {
        self.state.last_error.take().map_or(Ok(()), Err)
    }
}
