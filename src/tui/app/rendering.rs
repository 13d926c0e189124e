//! Rendering logic for the review dashboard.
//!
//! These are pure query methods that read state without modification.

use super::DashboardApp;
use crate::dashboard::NoticeLevel;
use crate::tui::components::{
    BlockListViewContext, ReviewEditorViewContext, render_review_editor,
};

const LIST_HINTS: &str = "j/k:move  Enter:review  r:refresh  f:format  e:export  ?:help  q:quit";

impl DashboardApp {
    /// Renders the header bar with the in-flight indicator.
    pub(super) fn render_header(&self) -> String {
        let title = "DocQuest Review - Blocks";
        let indicator = if self.state.is_loading() {
            " [Loading...]"
        } else if self.state.is_saving() {
            " [Saving...]"
        } else if self.state.is_exporting() {
            " [Exporting...]"
        } else {
            ""
        };
        format!("{title}{indicator}\n")
    }

    /// Renders the export format and block count.
    pub(super) fn render_format_bar(&self) -> String {
        let format = self.state.export_format();
        let count = self.state.blocks().len();
        format!(
            "Export: {format} -> {file}  Blocks: {count}\n",
            file = format.file_name()
        )
    }

    /// Renders the card list or, when a block is under review, the editor.
    pub(super) fn render_body(&self) -> String {
        let body_height = self.body_height();
        if let Some(draft) = self.state.editor().draft() {
            let saving = self.state.is_saving();
            return render_review_editor(&ReviewEditorViewContext {
                draft,
                block: self.state.block(draft.block_id()),
                saving,
                max_width: (self.width as usize).max(1),
                max_height: body_height,
            });
        }

        let cards = self.state.cards();
        self.block_list.view(&BlockListViewContext {
            cards: &cards,
            cursor_position: self.cursor.position,
            scroll_offset: self.cursor.scroll_offset,
            visible_height: body_height,
            loading: self.state.is_loading(),
        })
    }

    /// Renders the status bar: the current notice or key hints.
    pub(super) fn render_status_bar(&self) -> String {
        match self.state.notice() {
            Some(notice) if notice.level == NoticeLevel::Error => {
                format!("Error: {}\n", notice.message)
            }
            Some(notice) => format!("{}\n", notice.message),
            None if self.state.editor().is_open() => "Reviewing block\n".to_owned(),
            None => format!("{LIST_HINTS}\n"),
        }
    }

    /// Renders the help overlay.
    pub(super) fn render_help_overlay(&self) -> String {
        let help_text = r"
=== Keyboard Shortcuts ===

Block list:
  j, Down    Move cursor down
  k, Up      Move cursor up
  PgDn       Page down
  PgUp       Page up
  Home, g    Go to first block
  End, G     Go to last block
  Enter      Review the selected block
  r          Reload blocks
  f          Cycle export format (json/text/markdown/csv)
  e          Export approved content
  Esc        Dismiss the current message
  ?          Toggle this help
  q          Quit

Review editor:
  Tab        Next field
  Shift-Tab  Previous field
  Left/Right Change status (space also cycles)
  text keys  Edit reviewer or notes
  Backspace  Delete one character
  Enter      New line in notes
  Ctrl-S     Save review
  Esc        Close without saving
  Ctrl-W     Dismiss the editor

Press any key to close this help.
";
        if self.show_help {
            help_text.to_owned()
        } else {
            String::new()
        }
    }
}
