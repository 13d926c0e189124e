//! Modal review editor for a single block.
//!
//! Shows the block's type, page and full content above the editable status,
//! reviewer and notes fields. The focused field is marked with `>` and text
//! fields show a `_` caret.

use crate::api::{Block, ReviewStatus};
use crate::dashboard::{EditorField, ReviewDraft};

use super::text::{truncate_lines, wrap_text};

/// Rows used by the editor chrome: title, metadata, content label, the
/// status and reviewer rows, the notes label and the key hints.
const CHROME_ROWS: usize = 7;

/// Minimum rows kept for the block content.
const MIN_CONTENT_ROWS: usize = 1;

/// Context for rendering the review editor.
#[derive(Debug, Clone)]
pub struct ReviewEditorViewContext<'a> {
    /// Draft being edited.
    pub draft: &'a ReviewDraft,
    /// Cached block under review, if still loaded.
    pub block: Option<&'a Block>,
    /// Whether a save for this draft is in flight.
    pub saving: bool,
    /// Available columns.
    pub max_width: usize,
    /// Available rows.
    pub max_height: usize,
}

/// Renders a review editor view.
#[must_use]
pub fn render_review_editor(ctx: &ReviewEditorViewContext<'_>) -> String {
    let draft = ctx.draft;
    let width = ctx.max_width.saturating_sub(2).max(1);

    let notes_lines = render_notes(draft, width);
    let content_rows = ctx
        .max_height
        .saturating_sub(CHROME_ROWS + notes_lines.len())
        .max(MIN_CONTENT_ROWS);

    let mut lines = vec![format!("Review block {}", draft.block_id())];
    match ctx.block {
        Some(block) => {
            lines.push(format!("Type: {}  Page: {}", block.kind, block.page_label()));
            lines.push("Content:".to_owned());
            let content = truncate_lines(wrap_text(&block.content, width), content_rows);
            lines.extend(content.into_iter().map(|line| format!("  {line}")));
        }
        None => {
            lines.push("Type: unknown  Page: Unknown".to_owned());
            lines.push("Content: (block no longer loaded)".to_owned());
        }
    }

    lines.push(field_line(draft, EditorField::Status, &status_choice(draft.status())));
    lines.push(field_line(
        draft,
        EditorField::Reviewer,
        &text_value(draft, EditorField::Reviewer, draft.reviewer()),
    ));
    lines.push(field_line(draft, EditorField::Notes, ""));
    lines.extend(notes_lines);
    lines.push(hint_line(ctx.saving).to_owned());

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn field_line(draft: &ReviewDraft, field: EditorField, value: &str) -> String {
    let marker = if draft.focus() == field { ">" } else { " " };
    let label = format!("{}:", field.label());
    format!("{marker} {label:<10}{value}")
        .trim_end()
        .to_owned()
}

fn status_choice(current: &ReviewStatus) -> String {
    ReviewStatus::CHOICES
        .iter()
        .map(|choice| {
            if choice == current {
                format!("({choice})")
            } else {
                format!(" {choice} ")
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn text_value(draft: &ReviewDraft, field: EditorField, value: &str) -> String {
    if draft.focus() == field {
        format!("{value}_")
    } else {
        value.to_owned()
    }
}

fn render_notes(draft: &ReviewDraft, width: usize) -> Vec<String> {
    let notes = text_value(draft, EditorField::Notes, draft.notes());
    if notes.is_empty() {
        return vec!["    (none)".to_owned()];
    }
    wrap_text(&notes, width.saturating_sub(4).max(1))
        .into_iter()
        .map(|line| format!("    {line}"))
        .collect()
}

const fn hint_line(saving: bool) -> &'static str {
    if saving {
        "Saving review..."
    } else {
        "Tab:next field  Left/Right:status  Ctrl-S:save  Esc:close"
    }
}
