//! Test helpers for constructing `Block` fixtures.
//!
//! # Examples
//!
//! ```
//! use docquest_review::api::models::test_support::minimal_block;
//!
//! let block = minimal_block("b-1", "paragraph", "Hello");
//! assert_eq!(block.id.as_str(), "b-1");
//! assert!(block.review_status.is_none());
//! ```

use super::{Block, BlockId, ReviewStatus};

/// Constructs a `Block` with only id, type and content set.
#[must_use]
pub fn minimal_block(id: &str, kind: &str, content: &str) -> Block {
    Block {
        id: BlockId::new(id),
        kind: kind.to_owned(),
        content: content.to_owned(),
        page: None,
        review_status: None,
        reviewer: None,
        notes: None,
    }
}

/// Constructs a reviewed `Block` carrying a status, reviewer and notes.
#[must_use]
pub fn reviewed_block(id: &str, status: ReviewStatus, reviewer: &str, notes: &str) -> Block {
    Block {
        page: Some(1),
        review_status: Some(status),
        reviewer: Some(reviewer.to_owned()),
        notes: Some(notes.to_owned()),
        ..minimal_block(id, "paragraph", &format!("Content of {id}"))
    }
}

/// Creates `count` paragraph blocks with ids `b-1`, `b-2`, ...
#[must_use]
pub fn numbered_blocks(count: usize) -> Vec<Block> {
    (1..=count)
        .map(|index| {
            minimal_block(
                &format!("b-{index}"),
                "paragraph",
                &format!("Paragraph {index}"),
            )
        })
        .collect()
}
