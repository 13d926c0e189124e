//! Main TUI application model implementing the MVU pattern.
//!
//! [`DashboardApp`] owns the dashboard core state plus the view-only cursor
//! and layout state. Dashboard actions are applied with
//! [`crate::dashboard::dispatch`]; the effects it returns run as background
//! commands whose outcomes come back as [`AppMsg::EffectsCompleted`].
//!
//! # Module Structure
//!
//! - `dashboard_handlers`: dispatching actions and running effects
//! - `navigation`: cursor movement over the card list
//! - `rendering`: header, status bar and help overlay
//! - `model_impl`: the `bubbletea_rs::Model` implementation

use bubbletea_rs::Cmd;

use crate::dashboard::{BlockCard, DashboardState, EffectRunner};

use super::components::BlockListComponent;
use super::input::InputContext;
use super::messages::AppMsg;
use super::state::ListCursor;

mod dashboard_handlers;
mod model_impl;
mod navigation;
mod rendering;

/// Rows used by the header, format bar, spacer and status bar.
pub(crate) const CHROME_HEIGHT: usize = 4;

/// Main application model for the review dashboard.
#[derive(Debug)]
pub struct DashboardApp {
    /// Framework-independent dashboard state.
    pub(crate) state: DashboardState,
    /// Runner for backend and download effects.
    runner: Option<EffectRunner>,
    /// Cursor over the projected cards.
    pub(crate) cursor: ListCursor,
    /// Terminal dimensions.
    width: u16,
    height: u16,
    /// Whether help overlay is visible.
    pub(crate) show_help: bool,
    /// Whether the startup load has been requested.
    has_initialized: bool,
    /// Card list component.
    block_list: BlockListComponent,
}

impl DashboardApp {
    /// Creates an application over `state` with no effect runner.
    ///
    /// Without a runner every effect fails with a configuration error.
    #[must_use]
    pub fn new(state: DashboardState) -> Self {
        Self {
            state,
            runner: None,
            cursor: ListCursor::default(),
            width: 80,
            height: 24,
            show_help: false,
            has_initialized: false,
            block_list: BlockListComponent::new(),
        }
    }

    /// Creates an empty application.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(DashboardState::default())
    }

    /// Sets the runner used for effects.
    #[must_use]
    pub fn with_runner(mut self, runner: EffectRunner) -> Self {
        self.runner = Some(runner);
        self
    }

    /// Returns the dashboard state.
    #[must_use]
    pub const fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Returns the current cursor position.
    #[must_use]
    pub const fn cursor_position(&self) -> usize {
        self.cursor.position
    }

    /// Returns the card under the cursor, if any.
    #[must_use]
    pub fn selected_card(&self) -> Option<BlockCard> {
        self.state
            .blocks()
            .get(self.cursor.position)
            .map(BlockCard::from)
    }

    /// Returns where keyboard input is directed.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        self.state
            .editor()
            .draft()
            .map_or(InputContext::BlockList, |draft| {
                InputContext::Editor(draft.focus())
            })
    }

    /// Handles a message and updates state accordingly.
    ///
    /// Delegates to a handler per message category.
    pub fn handle_message(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if msg.is_navigation() {
            return self.handle_navigation_msg(msg);
        }
        if msg.is_dashboard() {
            return self.handle_dashboard_msg(msg);
        }
        self.handle_lifecycle_msg(msg)
    }

    /// Dispatches lifecycle and window messages to their handlers.
    fn handle_lifecycle_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        match msg {
            AppMsg::Initialized => self.handle_initialized(),
            AppMsg::Quit => Some(bubbletea_rs::quit()),
            AppMsg::ToggleHelp => {
                self.show_help = !self.show_help;
                None
            }
            AppMsg::WindowResized { width, height } => {
                self.handle_resize(*width, *height);
                None
            }
            _ => {
                debug_assert!(
                    false,
                    "non-lifecycle message routed to handle_lifecycle_msg"
                );
                None
            }
        }
    }

    /// Requests the first load; later `Initialized` messages are ignored.
    fn handle_initialized(&mut self) -> Option<Cmd> {
        if self.has_initialized {
            return None;
        }
        self.has_initialized = true;
        self.apply_action(crate::dashboard::Action::RefreshRequested)
    }

    fn handle_resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.block_list.set_visible_height(self.list_height());
        self.cursor.keep_visible(self.block_list.visible_height());
    }

    /// Rows available for the card list or the editor.
    pub(crate) const fn body_height(&self) -> usize {
        (self.height as usize).saturating_sub(CHROME_HEIGHT)
    }

    const fn list_height(&self) -> usize {
        let body = self.body_height();
        if body == 0 { 1 } else { body }
    }
}
