//! UI components for the review dashboard.
//!
//! Components are stateless renderers over borrowed view contexts, apart
//! from the list's visible height used for scrolling.

mod block_list;
mod review_editor;
mod text;

pub use block_list::{BlockListComponent, BlockListViewContext};
pub use review_editor::{ReviewEditorViewContext, render_review_editor};
pub use text::{truncate_lines, wrap_text};
