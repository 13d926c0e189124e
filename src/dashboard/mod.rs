//! Framework-independent review dashboard core.
//!
//! The dashboard keeps a cached copy of the backend's blocks, projects it
//! into summary cards, drives the review editor and requests exports. All
//! behaviour is expressed as [`Action`]s applied by [`dispatch`], which
//! returns [`Effect`]s for an [`EffectRunner`] to perform. The TUI and the
//! headless CLI modes are thin shells around this module.

mod action;
pub mod cards;
mod dispatch;
pub mod editor;
mod runner;
mod session;
mod state;

pub use action::{Action, ActionCategory, Effect};
pub use cards::{BlockCard, PREVIEW_CHAR_LIMIT, TRUNCATION_MARKER, preview_content, project_cards};
pub use dispatch::{
    EXPORT_FAILED_NOTICE, LOAD_FAILED_NOTICE, NO_ACTIVE_BLOCK, SAVE_CONFIRMED_NOTICE,
    SAVE_FAILED_NOTICE, dispatch,
};
pub use editor::{EditorField, EditorState, ReviewDraft};
pub use runner::EffectRunner;
pub use session::ReviewDashboard;
pub use state::{DashboardState, Notice, NoticeLevel};
