//! Message types for the TUI update loop.
//!
//! Messages represent key presses translated by [`super::input`], results of
//! background commands, and terminal events. Everything that changes the
//! dashboard itself travels as [`AppMsg::Dashboard`].

use crate::dashboard::Action;

/// Messages for the review dashboard TUI.
#[derive(Debug, Clone)]
pub enum AppMsg {
    // Navigation
    /// Move cursor up one card.
    CursorUp,
    /// Move cursor down one card.
    CursorDown,
    /// Move cursor up one page.
    PageUp,
    /// Move cursor down one page.
    PageDown,
    /// Move cursor to the first card.
    Home,
    /// Move cursor to the last card.
    End,

    // Dashboard
    /// Open the review editor on the card under the cursor.
    OpenSelected,
    /// Save the open draft, stamped with the current time.
    SaveDraft,
    /// An action for the dashboard core.
    Dashboard(Action),
    /// Outcomes of effects run in the background.
    EffectsCompleted(Vec<Action>),

    // Application lifecycle
    /// Startup event emitted by `init()`.
    Initialized,
    /// Quit the application.
    Quit,
    /// Toggle help overlay.
    ToggleHelp,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

impl AppMsg {
    /// Returns true for cursor movement messages.
    #[must_use]
    pub const fn is_navigation(&self) -> bool {
        matches!(
            self,
            Self::CursorUp
                | Self::CursorDown
                | Self::PageUp
                | Self::PageDown
                | Self::Home
                | Self::End
        )
    }

    /// Returns true for messages that reach the dashboard core.
    #[must_use]
    pub const fn is_dashboard(&self) -> bool {
        matches!(
            self,
            Self::OpenSelected | Self::SaveDraft | Self::Dashboard(_) | Self::EffectsCompleted(_)
        )
    }
}

impl From<Action> for AppMsg {
    fn from(action: Action) -> Self {
        Self::Dashboard(action)
    }
}
