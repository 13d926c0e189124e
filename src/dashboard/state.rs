//! Application state shared by every dashboard operation.
//!
//! All mutation goes through [`super::dispatch`]; front ends only read this
//! state to render it.

use camino::Utf8PathBuf;

use crate::api::{Block, BlockId, ExportFormat, ReviewError};

use super::cards::{BlockCard, project_cards};
use super::editor::EditorState;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    /// Confirmation or progress message.
    Info,
    /// A failed operation.
    Error,
}

/// Human-readable message shown after an operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Severity of the notice.
    pub level: NoticeLevel,
    /// Text shown to the reviewer.
    pub message: String,
}

impl Notice {
    /// Creates an informational notice.
    #[must_use]
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Returns whether the notice reports a failure.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.level, NoticeLevel::Error)
    }
}

/// Complete client-side state of the review dashboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardState {
    /// Cached copy of the backend's block collection, in backend order.
    pub(crate) blocks: Vec<Block>,
    /// Review editor state.
    pub(crate) editor: EditorState,
    /// Format used by the next export.
    pub(crate) export_format: ExportFormat,
    /// Whether a block load is in flight.
    pub(crate) loading: bool,
    /// Block whose review save is in flight, if any.
    pub(crate) saving: Option<BlockId>,
    /// Whether an export (request or delivery) is in flight.
    pub(crate) exporting: bool,
    /// Whether a refresh was requested during a save and must run after it.
    pub(crate) refresh_deferred: bool,
    /// Last notice for the reviewer.
    pub(crate) notice: Option<Notice>,
    /// Where the most recent export was delivered.
    pub(crate) last_download: Option<Utf8PathBuf>,
    /// Detailed failure behind the most recent error notice.
    pub(crate) last_error: Option<ReviewError>,
}

impl DashboardState {
    /// Creates an empty state using `export_format` for exports.
    #[must_use]
    pub fn new(export_format: ExportFormat) -> Self {
        Self {
            export_format,
            ..Self::default()
        }
    }

    /// Returns the cached blocks.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Looks up a cached block by identity.
    #[must_use]
    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| &block.id == id)
    }

    /// Projects the cached blocks into summary cards.
    #[must_use]
    pub fn cards(&self) -> Vec<BlockCard> {
        project_cards(&self.blocks)
    }

    /// Returns the review editor state.
    #[must_use]
    pub const fn editor(&self) -> &EditorState {
        &self.editor
    }

    /// Returns the selected export format.
    #[must_use]
    pub const fn export_format(&self) -> ExportFormat {
        self.export_format
    }

    /// Returns whether a block load is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    /// Returns whether a review save is in flight.
    #[must_use]
    pub const fn is_saving(&self) -> bool {
        self.saving.is_some()
    }

    /// Returns whether an export is in flight.
    #[must_use]
    pub const fn is_exporting(&self) -> bool {
        self.exporting
    }

    /// Returns whether a refresh is waiting for a save to settle.
    #[must_use]
    pub const fn is_refresh_deferred(&self) -> bool {
        self.refresh_deferred
    }

    /// Returns whether any backend request is in flight.
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        self.loading || self.saving.is_some() || self.exporting
    }

    /// Returns the current notice, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Returns the failure behind the most recent error notice.
    #[must_use]
    pub const fn last_error(&self) -> Option<&ReviewError> {
        self.last_error.as_ref()
    }

    /// Returns where the most recent export was delivered.
    #[must_use]
    pub fn last_download(&self) -> Option<&Utf8PathBuf> {
        self.last_download.as_ref()
    }
}
