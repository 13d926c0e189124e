//! Navigation handlers for the card list.
//!
//! Cursor moves are clamped to the cached collection and the scroll offset
//! follows the cursor.

use bubbletea_rs::Cmd;

use super::DashboardApp;
use crate::tui::messages::AppMsg;

impl DashboardApp {
    /// Dispatches navigation messages to the cursor.
    pub(super) fn handle_navigation_msg(&mut self, msg: &AppMsg) -> Option<Cmd> {
        if self.state.editor().is_open() {
            return None;
        }

        let count = self.state.blocks().len();
        let page = self.block_list.visible_height().max(1);
        match msg {
            AppMsg::CursorUp => self.cursor.up(1),
            AppMsg::CursorDown => self.cursor.down(1, count),
            AppMsg::PageUp => self.cursor.up(page),
            AppMsg::PageDown => self.cursor.down(page, count),
            AppMsg::Home => self.cursor.home(),
            AppMsg::End => self.cursor.end(count),
            _ => {
                debug_assert!(
                    false,
                    "non-navigation message routed to handle_navigation_msg"
                );
            }
        }
        self.cursor.keep_visible(self.block_list.visible_height());
        None
    }

    /// Clamps the cursor after the collection changed.
    pub(super) fn clamp_cursor(&mut self) {
        self.cursor.clamp(self.state.blocks().len());
        self.cursor.keep_visible(self.block_list.visible_height());
    }
}
