//! Dispatch table mapping actions onto state transitions and effects.
//!
//! `dispatch` is the only place dashboard state changes. Each action is
//! routed to the handler for its category; handlers mutate the state and
//! return the effects the runtime must perform. Failures are logged with
//! their full detail, surfaced as a generic notice, and otherwise leave the
//! state as it was before the failed operation.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::api::{Block, BlockId, ReviewError, ReviewUpdate};

use super::action::{Action, ActionCategory, Effect};
use super::editor::{EditorState, ReviewDraft};
use super::state::{DashboardState, Notice};

/// Notice shown when loading the collection fails.
pub const LOAD_FAILED_NOTICE: &str = "Error loading blocks. Check the log for details.";
/// Notice shown when saving a review fails.
pub const SAVE_FAILED_NOTICE: &str = "Error saving review. Check the log for details.";
/// Notice shown when exporting fails.
pub const EXPORT_FAILED_NOTICE: &str = "Error exporting content. Check the log for details.";
/// Notice shown after a confirmed save.
pub const SAVE_CONFIRMED_NOTICE: &str = "Review saved successfully!";
/// Precondition message for a save with no open editor.
pub const NO_ACTIVE_BLOCK: &str = "No block is currently being reviewed.";

/// Applies `action` to `state` and returns the effects to perform.
pub fn dispatch(state: &mut DashboardState, action: Action) -> Vec<Effect> {
    match action.category() {
        ActionCategory::Loader => handle_loader(state, action),
        ActionCategory::Editor => handle_editor(state, action),
        ActionCategory::Exporter => handle_exporter(state, action),
        ActionCategory::Notice => {
            state.notice = None;
            Vec::new()
        }
    }
}

fn handle_loader(state: &mut DashboardState, action: Action) -> Vec<Effect> {
    match action {
        Action::RefreshRequested => request_refresh(state),
        Action::BlocksLoaded(blocks) => {
            apply_loaded(state, blocks);
            Vec::new()
        }
        Action::LoadFailed(error) => {
            state.loading = false;
            report_failure(state, "loading blocks", &error, LOAD_FAILED_NOTICE);
            Vec::new()
        }
        _ => {
            debug_assert!(false, "non-loader action routed to handle_loader");
            Vec::new()
        }
    }
}

fn request_refresh(state: &mut DashboardState) -> Vec<Effect> {
    if state.saving.is_some() {
        debug!("refresh deferred until the pending save settles");
        state.refresh_deferred = true;
        return Vec::new();
    }
    start_load(state)
}

fn start_load(state: &mut DashboardState) -> Vec<Effect> {
    if state.loading {
        debug!("refresh coalesced with the load already in flight");
        return Vec::new();
    }
    state.loading = true;
    vec![Effect::LoadBlocks]
}

fn apply_loaded(state: &mut DashboardState, blocks: Vec<Block>) {
    info!(count = blocks.len(), "loaded blocks");
    state.loading = false;
    state.blocks = blocks;
    // Only the load's own failure is resolved by a successful load.
    if state
        .notice
        .as_ref()
        .is_some_and(|notice| notice.is_error() && notice.message == LOAD_FAILED_NOTICE)
    {
        state.notice = None;
    }
}

/// Starts a refresh that was requested while a save was in flight.
fn flush_deferred_refresh(state: &mut DashboardState) -> Vec<Effect> {
    if !state.refresh_deferred {
        return Vec::new();
    }
    state.refresh_deferred = false;
    start_load(state)
}

fn handle_editor(state: &mut DashboardState, action: Action) -> Vec<Effect> {
    match action {
        Action::OpenEditor(block_id) => {
            open_editor(state, &block_id);
            Vec::new()
        }
        Action::CloseEditor | Action::DismissEditor => {
            state.editor = EditorState::Closed;
            Vec::new()
        }
        Action::SaveRequested { requested_at } => request_save(state, requested_at),
        Action::ReviewSaved { block_id, update } => apply_saved(state, &block_id, &update),
        Action::SaveFailed { block_id, error } => {
            if state.saving.as_ref() == Some(&block_id) {
                state.saving = None;
            }
            report_failure(state, "saving review", &error, SAVE_FAILED_NOTICE);
            flush_deferred_refresh(state)
        }
        edit => {
            apply_edit(state, edit);
            Vec::new()
        }
    }
}

fn open_editor(state: &mut DashboardState, block_id: &BlockId) {
    let Some(block) = state.block(block_id) else {
        let error = ReviewError::precondition(format!("Block {block_id} is no longer loaded."));
        report_failure(state, "opening review editor", &error, "");
        return;
    };
    debug!(block_id = %block_id, "opening review editor");
    state.editor = EditorState::Open(ReviewDraft::from_block(block));
}

fn apply_edit(state: &mut DashboardState, edit: Action) {
    let Some(draft) = state.editor.draft_mut() else {
        return;
    };
    match edit {
        Action::FocusNext => draft.focus_next(),
        Action::FocusPrevious => draft.focus_previous(),
        Action::SelectStatus(status) => draft.select_status(status),
        Action::CycleStatus => draft.cycle_status(),
        Action::CycleStatusBack => draft.cycle_status_back(),
        Action::SetReviewer(reviewer) => draft.set_reviewer(reviewer),
        Action::SetNotes(notes) => draft.set_notes(notes),
        Action::InsertChar(character) => draft.insert_char(character),
        Action::Backspace => draft.backspace(),
        _ => {}
    }
}

fn request_save(state: &mut DashboardState, requested_at: DateTime<Utc>) -> Vec<Effect> {
    if state.saving.is_some() {
        let error = ReviewError::precondition("A review save is already in progress.");
        report_failure(state, "saving review", &error, "");
        return Vec::new();
    }
    let Some(draft) = state.editor.draft() else {
        let error = ReviewError::precondition(NO_ACTIVE_BLOCK);
        report_failure(state, "saving review", &error, "");
        return Vec::new();
    };
    let block_id = draft.block_id().clone();
    let update = draft.to_update(requested_at);
    debug!(block_id = %block_id, status = %update.review_status, "saving review");
    state.saving = Some(block_id.clone());
    vec![Effect::SaveReview { block_id, update }]
}

fn apply_saved(
    state: &mut DashboardState,
    block_id: &BlockId,
    update: &ReviewUpdate,
) -> Vec<Effect> {
    if state.saving.as_ref() == Some(block_id) {
        state.saving = None;
    }
    if let Some(block) = state.blocks.iter_mut().find(|block| &block.id == block_id) {
        block.apply_review(update);
    }
    if state.editor.active_block_id() == Some(block_id) {
        state.editor = EditorState::Closed;
    }
    info!(block_id = %block_id, status = %update.review_status, "review saved");
    state.notice = Some(Notice::info(SAVE_CONFIRMED_NOTICE));
    flush_deferred_refresh(state)
}

fn handle_exporter(state: &mut DashboardState, action: Action) -> Vec<Effect> {
    match action {
        Action::SelectExportFormat(format) => {
            state.export_format = format;
            Vec::new()
        }
        Action::CycleExportFormat => {
            state.export_format = state.export_format.next();
            Vec::new()
        }
        Action::ExportRequested => request_export(state),
        Action::ExportReceived { format, body } => vec![Effect::DeliverDownload {
            format,
            file_name: format.file_name(),
            contents: body,
        }],
        Action::DownloadDelivered { format, path } => {
            info!(format = %format, path = %path, "export delivered");
            state.exporting = false;
            state.notice = Some(Notice::info(format!("Exported approved content to {path}")));
            state.last_download = Some(path);
            Vec::new()
        }
        Action::ExportFailed(error) => {
            state.exporting = false;
            report_failure(
                state,
                "exporting approved content",
                &error,
                EXPORT_FAILED_NOTICE,
            );
            Vec::new()
        }
        _ => {
            debug_assert!(false, "non-exporter action routed to handle_exporter");
            Vec::new()
        }
    }
}

fn request_export(state: &mut DashboardState) -> Vec<Effect> {
    if state.exporting {
        let error = ReviewError::precondition("An export is already in progress.");
        report_failure(state, "exporting approved content", &error, "");
        return Vec::new();
    }
    let format = state.export_format;
    debug!(format = %format, "requesting export");
    state.exporting = true;
    vec![Effect::RequestExport { format }]
}

/// Logs `error` and replaces the notice.
///
/// Precondition failures carry a message meant for the reviewer and are
/// shown verbatim; everything else gets `generic`.
fn report_failure(
    state: &mut DashboardState,
    operation: &str,
    error: &ReviewError,
    generic: &str,
) {
    warn!(error = %error, "{operation} failed");
    let message = match error {
        ReviewError::LocalPrecondition { message } => message.clone(),
        _ => generic.to_owned(),
    };
    state.notice = Some(Notice::error(message));
    state.last_error = Some(error.clone());
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
