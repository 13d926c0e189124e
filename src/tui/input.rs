//! Input handling for the TUI application.
//!
//! Translates terminal key events into application messages. The same key
//! means different things in the card list and in the review editor, so the
//! mapping takes an [`InputContext`].

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;
use crate::dashboard::{Action, EditorField};

/// Where keyboard input is currently directed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The card list has focus.
    BlockList,
    /// The review editor is open with focus on the given field.
    Editor(EditorField),
}

/// Maps a key event to an application message for the given context.
///
/// Returns `None` for keys with no meaning in that context.
#[must_use]
pub fn map_key_to_message_with_context(
    key: &bubbletea_rs::event::KeyMsg,
    context: InputContext,
) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return map_control_key(key.key, context);
    }
    match context {
        InputContext::BlockList => map_list_key(key.key),
        InputContext::Editor(field) => map_editor_key(key.key, field),
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_control_key(code: KeyCode, context: InputContext) -> Option<AppMsg> {
    match (code, context) {
        (KeyCode::Char('c'), _) => Some(AppMsg::Quit),
        (KeyCode::Char('s'), InputContext::Editor(_)) => Some(AppMsg::SaveDraft),
        (KeyCode::Char('w'), InputContext::Editor(_)) => {
            Some(AppMsg::Dashboard(Action::DismissEditor))
        }
        _ => None,
    }
}

#[expect(
    clippy::missing_const_for_fn,
    reason = "KeyCode match patterns prevent const evaluation"
)]
fn map_list_key(code: KeyCode) -> Option<AppMsg> {
    match code {
        KeyCode::Char('q') => Some(AppMsg::Quit),
        KeyCode::Char('j') | KeyCode::Down => Some(AppMsg::CursorDown),
        KeyCode::Char('k') | KeyCode::Up => Some(AppMsg::CursorUp),
        KeyCode::PageDown => Some(AppMsg::PageDown),
        KeyCode::PageUp => Some(AppMsg::PageUp),
        KeyCode::Home | KeyCode::Char('g') => Some(AppMsg::Home),
        KeyCode::End | KeyCode::Char('G') => Some(AppMsg::End),
        KeyCode::Enter => Some(AppMsg::OpenSelected),
        KeyCode::Char('r') => Some(AppMsg::Dashboard(Action::RefreshRequested)),
        KeyCode::Char('f') => Some(AppMsg::Dashboard(Action::CycleExportFormat)),
        KeyCode::Char('e') => Some(AppMsg::Dashboard(Action::ExportRequested)),
        KeyCode::Esc => Some(AppMsg::Dashboard(Action::DismissNotice)),
        KeyCode::Char('?') => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

fn map_editor_key(code: KeyCode, field: EditorField) -> Option<AppMsg> {
    let action = match (code, field) {
        (KeyCode::Esc, _) => Action::CloseEditor,
        (KeyCode::Tab, _) => Action::FocusNext,
        (KeyCode::BackTab, _) => Action::FocusPrevious,
        (KeyCode::Right | KeyCode::Char(' '), EditorField::Status) => Action::CycleStatus,
        (KeyCode::Left, EditorField::Status) => Action::CycleStatusBack,
        (KeyCode::Enter, EditorField::Notes) => Action::InsertChar('\n'),
        (KeyCode::Backspace, EditorField::Reviewer | EditorField::Notes) => Action::Backspace,
        (KeyCode::Char(character), EditorField::Reviewer | EditorField::Notes) => {
            Action::InsertChar(character)
        }
        _ => return None,
    };
    Some(AppMsg::Dashboard(action))
}
