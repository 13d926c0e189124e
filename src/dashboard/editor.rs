//! Review editor state machine.
//!
//! The editor is either closed or open on exactly one block. While open it
//! holds a [`ReviewDraft`]: the in-progress status, reviewer and notes seeded
//! from the cached block. The draft is only turned into a [`ReviewUpdate`]
//! when the reviewer saves.

use chrono::{DateTime, Utc};

use crate::api::{Block, BlockId, ReviewStatus, ReviewUpdate};

/// Editable fields of the review editor, in focus order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditorField {
    /// Enumerated status choice.
    #[default]
    Status,
    /// Free-text reviewer identifier.
    Reviewer,
    /// Free-text notes.
    Notes,
}

impl EditorField {
    /// Returns the next field, wrapping around.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Status => Self::Reviewer,
            Self::Reviewer => Self::Notes,
            Self::Notes => Self::Status,
        }
    }

    /// Returns the previous field, wrapping around.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::Status => Self::Notes,
            Self::Reviewer => Self::Status,
            Self::Notes => Self::Reviewer,
        }
    }

    /// Returns the label shown next to the field.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Status => "Status",
            Self::Reviewer => "Reviewer",
            Self::Notes => "Notes",
        }
    }
}

/// In-progress edits for the block under review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewDraft {
    block_id: BlockId,
    status: ReviewStatus,
    reviewer: String,
    notes: String,
    focus: EditorField,
}

impl ReviewDraft {
    /// Seeds a draft from the cached block.
    ///
    /// A missing status becomes pending; missing reviewer and notes become
    /// empty strings.
    #[must_use]
    pub fn from_block(block: &Block) -> Self {
        Self {
            block_id: block.id.clone(),
            status: block.status(),
            reviewer: block.reviewer.clone().unwrap_or_default(),
            notes: block.notes.clone().unwrap_or_default(),
            focus: EditorField::default(),
        }
    }

    /// Returns the identifier of the block being reviewed.
    #[must_use]
    pub const fn block_id(&self) -> &BlockId {
        &self.block_id
    }

    /// Returns the selected status.
    #[must_use]
    pub const fn status(&self) -> &ReviewStatus {
        &self.status
    }

    /// Returns the reviewer text.
    #[must_use]
    pub const fn reviewer(&self) -> &str {
        self.reviewer.as_str()
    }

    /// Returns the notes text.
    #[must_use]
    pub const fn notes(&self) -> &str {
        self.notes.as_str()
    }

    /// Returns the focused field.
    #[must_use]
    pub const fn focus(&self) -> EditorField {
        self.focus
    }

    /// Moves focus to the next field.
    pub const fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus to the previous field.
    pub const fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// Selects a status explicitly.
    pub fn select_status(&mut self, status: ReviewStatus) {
        self.status = status;
    }

    /// Advances the status to the next choice.
    pub fn cycle_status(&mut self) {
        self.status = self.status.next();
    }

    /// Moves the status back to the previous choice.
    pub fn cycle_status_back(&mut self) {
        self.status = self.status.previous();
    }

    /// Replaces the reviewer text.
    pub fn set_reviewer(&mut self, reviewer: impl Into<String>) {
        self.reviewer = reviewer.into();
    }

    /// Replaces the notes text.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = notes.into();
    }

    /// Types a character into the focused text field.
    ///
    /// The status field is an enumerated choice, so typing there is ignored.
    /// Newlines are only accepted by the notes field.
    pub fn insert_char(&mut self, character: char) {
        match self.focus {
            EditorField::Status => {}
            EditorField::Reviewer if character != '\n' => self.reviewer.push(character),
            EditorField::Reviewer => {}
            EditorField::Notes => self.notes.push(character),
        }
    }

    /// Deletes the last character of the focused text field.
    pub fn backspace(&mut self) {
        match self.focus {
            EditorField::Status => {}
            EditorField::Reviewer => {
                self.reviewer.pop();
            }
            EditorField::Notes => {
                self.notes.pop();
            }
        }
    }

    /// Builds the update payload for a save issued at `requested_at`.
    #[must_use]
    pub fn to_update(&self, requested_at: DateTime<Utc>) -> ReviewUpdate {
        ReviewUpdate::stamped(
            self.status.clone(),
            self.reviewer.clone(),
            self.notes.clone(),
            requested_at,
        )
    }
}

/// Whether the review editor is visible, and on which block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum EditorState {
    /// No block is being reviewed.
    #[default]
    Closed,
    /// The editor is open with a draft for one block.
    Open(ReviewDraft),
}

impl EditorState {
    /// Returns the open draft, if any.
    #[must_use]
    pub const fn draft(&self) -> Option<&ReviewDraft> {
        match self {
            Self::Closed => None,
            Self::Open(draft) => Some(draft),
        }
    }

    /// Returns the open draft mutably, if any.
    pub const fn draft_mut(&mut self) -> Option<&mut ReviewDraft> {
        match self {
            Self::Closed => None,
            Self::Open(draft) => Some(draft),
        }
    }

    /// Returns whether the editor is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open(_))
    }

    /// Returns the active target block, if the editor is open.
    #[must_use]
    pub fn active_block_id(&self) -> Option<&BlockId> {
        self.draft().map(ReviewDraft::block_id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rstest::rstest;

    use super::*;
    use crate::api::models::test_support::{minimal_block, reviewed_block};

    #[test]
    fn draft_defaults_unset_fields() {
        let draft = ReviewDraft::from_block(&minimal_block("b1", "paragraph", "text"));

        assert_eq!(draft.status(), &ReviewStatus::Pending);
        assert_eq!(draft.reviewer(), "");
        assert_eq!(draft.notes(), "");
        assert_eq!(draft.focus(), EditorField::Status);
    }

    #[test]
    fn draft_copies_cached_review() {
        let block = reviewed_block("b2", ReviewStatus::Approved, "dana", "ok");

        let draft = ReviewDraft::from_block(&block);

        assert_eq!(draft.block_id().as_str(), "b2");
        assert_eq!(draft.status(), &ReviewStatus::Approved);
        assert_eq!(draft.reviewer(), "dana");
        assert_eq!(draft.notes(), "ok");
    }

    #[rstest]
    #[case::status(EditorField::Status, "", "")]
    #[case::reviewer(EditorField::Reviewer, "ab", "")]
    #[case::notes(EditorField::Notes, "", "a\nb")]
    fn typing_targets_focused_field(
        #[case] focus: EditorField,
        #[case] reviewer: &str,
        #[case] notes: &str,
    ) {
        let mut draft = ReviewDraft::from_block(&minimal_block("b1", "paragraph", "text"));
        while draft.focus() != focus {
            draft.focus_next();
        }

        for character in ['a', '\n', 'b'] {
            draft.insert_char(character);
        }

        assert_eq!(draft.reviewer(), reviewer);
        assert_eq!(draft.notes(), notes);
    }

    #[test]
    fn backspace_removes_last_character_of_focused_field() {
        let mut draft = ReviewDraft::from_block(&reviewed_block(
            "b1",
            ReviewStatus::Pending,
            "dana",
            "note",
        ));
        draft.focus_previous();

        draft.backspace();

        assert_eq!(draft.notes(), "not");
        assert_eq!(draft.reviewer(), "dana");
    }

    #[test]
    fn focus_cycles_in_both_directions() {
        let mut draft = ReviewDraft::from_block(&minimal_block("b1", "paragraph", "text"));
        draft.focus_next();
        draft.focus_next();
        assert_eq!(draft.focus(), EditorField::Notes);
        draft.focus_next();
        assert_eq!(draft.focus(), EditorField::Status);
        draft.focus_previous();
        assert_eq!(draft.focus(), EditorField::Notes);
    }

    #[test]
    fn to_update_carries_fields_and_timestamp() {
        let mut draft = ReviewDraft::from_block(&minimal_block("b1", "paragraph", "text"));
        draft.cycle_status();
        draft.set_reviewer("eli");
        draft.set_notes("looks right");
        let at = Utc
            .with_ymd_and_hms(2026, 1, 2, 3, 4, 5)
            .single()
            .expect("valid timestamp");

        let update = draft.to_update(at);

        assert_eq!(update.review_status, ReviewStatus::Approved);
        assert_eq!(update.reviewer, "eli");
        assert_eq!(update.notes, "looks right");
        assert_eq!(update.updated_at, "2026-01-02T03:04:05.000Z");
    }

    #[test]
    fn editor_state_reports_active_target() {
        let closed = EditorState::Closed;
        assert!(!closed.is_open());
        assert!(closed.active_block_id().is_none());

        let open = EditorState::Open(ReviewDraft::from_block(&minimal_block(
            "b9",
            "table",
            "cells",
        )));
        assert!(open.is_open());
        assert_eq!(open.active_block_id().map(BlockId::as_str), Some("b9"));
    }
}
