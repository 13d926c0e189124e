//! Actions fed into the dashboard and effects it asks the runtime to perform.

use camino::Utf8PathBuf;
use chrono::{DateTime, Utc};

use crate::api::{Block, BlockId, ExportFormat, ReviewError, ReviewStatus, ReviewUpdate};

/// Everything that can happen to the dashboard: user intents and the
/// results of completed effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Loader
    /// Reload the block collection.
    RefreshRequested,
    /// The backend returned the full collection.
    BlocksLoaded(Vec<Block>),
    /// Loading the collection failed.
    LoadFailed(ReviewError),

    // Review editor
    /// Open the editor on the block with this identity.
    OpenEditor(BlockId),
    /// Explicit close action.
    CloseEditor,
    /// Interaction outside the editor surface.
    DismissEditor,
    /// Move focus to the next editor field.
    FocusNext,
    /// Move focus to the previous editor field.
    FocusPrevious,
    /// Choose a status directly.
    SelectStatus(ReviewStatus),
    /// Advance the status choice.
    CycleStatus,
    /// Move the status choice back.
    CycleStatusBack,
    /// Replace the reviewer text.
    SetReviewer(String),
    /// Replace the notes text.
    SetNotes(String),
    /// Type a character into the focused field.
    InsertChar(char),
    /// Delete the last character of the focused field.
    Backspace,
    /// Save the open draft, stamped with the moment of the request.
    SaveRequested {
        /// When the reviewer asked to save.
        requested_at: DateTime<Utc>,
    },
    /// The backend confirmed a review update.
    ReviewSaved {
        /// Block that was updated.
        block_id: BlockId,
        /// Update the backend accepted.
        update: ReviewUpdate,
    },
    /// The backend rejected or never received a review update.
    SaveFailed {
        /// Block whose save failed.
        block_id: BlockId,
        /// Failure detail.
        error: ReviewError,
    },

    // Exporter
    /// Choose the export format.
    SelectExportFormat(ExportFormat),
    /// Advance to the next export format.
    CycleExportFormat,
    /// Export approved content in the selected format.
    ExportRequested,
    /// The backend returned export content.
    ExportReceived {
        /// Format that was requested.
        format: ExportFormat,
        /// Opaque export body.
        body: String,
    },
    /// The export was written to disk.
    DownloadDelivered {
        /// Format that was exported.
        format: ExportFormat,
        /// Location of the delivered file.
        path: Utf8PathBuf,
    },
    /// Requesting or delivering the export failed.
    ExportFailed(ReviewError),

    // Notices
    /// Clear the current notice.
    DismissNotice,
}

/// Coarse grouping used to route actions to their handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCategory {
    /// Collection loading.
    Loader,
    /// Review editor transitions and saves.
    Editor,
    /// Export requests and delivery.
    Exporter,
    /// Notice housekeeping.
    Notice,
}

impl Action {
    /// Returns the category that handles this action.
    #[must_use]
    pub const fn category(&self) -> ActionCategory {
        match self {
            Self::RefreshRequested | Self::BlocksLoaded(_) | Self::LoadFailed(_) => {
                ActionCategory::Loader
            }
            Self::OpenEditor(_)
            | Self::CloseEditor
            | Self::DismissEditor
            | Self::FocusNext
            | Self::FocusPrevious
            | Self::SelectStatus(_)
            | Self::CycleStatus
            | Self::CycleStatusBack
            | Self::SetReviewer(_)
            | Self::SetNotes(_)
            | Self::InsertChar(_)
            | Self::Backspace
            | Self::SaveRequested { .. }
            | Self::ReviewSaved { .. }
            | Self::SaveFailed { .. } => ActionCategory::Editor,
            Self::SelectExportFormat(_)
            | Self::CycleExportFormat
            | Self::ExportRequested
            | Self::ExportReceived { .. }
            | Self::DownloadDelivered { .. }
            | Self::ExportFailed(_) => ActionCategory::Exporter,
            Self::DismissNotice => ActionCategory::Notice,
        }
    }
}

/// Side effects the dashboard asks its runtime to perform.
///
/// Every effect completes with exactly one follow-up [`Action`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// `GET /api/blocks`.
    LoadBlocks,
    /// `PUT /api/blocks/{id}`.
    SaveReview {
        /// Target block.
        block_id: BlockId,
        /// Payload to send.
        update: ReviewUpdate,
    },
    /// `POST /api/export`.
    RequestExport {
        /// Format to request.
        format: ExportFormat,
    },
    /// Write export content to the download destination.
    DeliverDownload {
        /// Format of the content.
        format: ExportFormat,
        /// File name to deliver under.
        file_name: String,
        /// Content to write.
        contents: String,
    },
}

impl Effect {
    /// Returns the action reporting that this effect could not run.
    #[must_use]
    pub fn into_failure(self, error: ReviewError) -> Action {
        match self {
            Self::LoadBlocks => Action::LoadFailed(error),
            Self::SaveReview { block_id, .. } => Action::SaveFailed { block_id, error },
            Self::RequestExport { .. } | Self::DeliverDownload { .. } => {
                Action::ExportFailed(error)
            }
        }
    }
}
