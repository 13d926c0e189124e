//! View state owned by the TUI rather than the dashboard core.

mod list_cursor;

pub use list_cursor::ListCursor;
