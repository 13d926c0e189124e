//! Handlers that feed the dashboard core and run its effects.

use std::any::Any;

use bubbletea_rs::Cmd;
use chrono::Utc;

use super::DashboardApp;
use crate::api::ReviewError;
use crate::dashboard::{Action, Effect, dispatch};
use crate::tui::messages::AppMsg;

impl DashboardApp {
    /// Dispatches dashboard messages to their handlers.
    pub(super) fn handle_dashboard_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::OpenSelected => self.handle_open_selected(),
            AppMsg::SaveDraft => self.apply_action(Action::SaveRequested {
                requested_at: Utc::now(),
            }),
            AppMsg::Dashboard(action) => self.apply_action(action.clone()),
            AppMsg::EffectsCompleted(outcomes) => self.apply_outcomes(outcomes),
            _ => {
                debug_assert!(false, "non-dashboard message routed to handle_dashboard_msg");
                None
            }
        }
    }

    /// Applies one action and returns a command for its effects.
    pub(super) fn apply_action(&mut self, action: Action) -> Option<Cmd> {
        let effects = dispatch(&mut self.state, action);
        self.clamp_cursor();
        self.effects_cmd(effects)
    }

    fn apply_outcomes(&mut self, outcomes: &[Action]) -> Option<Cmd> {
        let mut effects = Vec::new();
        for outcome in outcomes {
            effects.extend(dispatch(&mut self.state, outcome.clone()));
        }
        self.clamp_cursor();
        self.effects_cmd(effects)
    }

    fn handle_open_selected(&mut self) -> Option<Cmd> {
        let block_id = self
            .state
            .blocks()
            .get(self.cursor.position)
            .map(|block| block.id.clone())?;
        self.apply_action(Action::OpenEditor(block_id))
    }

    /// Runs `effects` in order on a background task.
    ///
    /// All outcomes are delivered together as one
    /// [`AppMsg::EffectsCompleted`] message.
    fn effects_cmd(&self, effects: Vec<Effect>) -> Option<Cmd> {
        if effects.is_empty() {
            return None;
        }
        let runner = self.runner.clone();
        Some(Box::pin(async move {
            let mut outcomes = Vec::with_capacity(effects.len());
            for effect in effects {
                let outcome = match &runner {
                    Some(runner) => runner.run(effect).await,
                    None => effect.into_failure(ReviewError::Configuration {
                        message: "review backend is not configured".to_owned(),
                    }),
                };
                outcomes.push(outcome);
            }
            Some(Box::new(AppMsg::EffectsCompleted(outcomes)) as Box<dyn Any + Send>)
        }))
    }
}
