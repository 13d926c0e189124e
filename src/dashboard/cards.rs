//! Projection of cached blocks into summary cards.
//!
//! Cards are plain view-models: any front end (the TUI list, the headless
//! `--list` mode, tests) renders them without touching [`Block`] directly.

use crate::api::{Block, BlockId, ReviewStatus};

/// Maximum number of characters shown in a card's content preview.
pub const PREVIEW_CHAR_LIMIT: usize = 150;

/// Marker appended to previews that were cut short.
pub const TRUNCATION_MARKER: &str = "...";

/// Summary view of one block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockCard {
    /// Identity of the block the card opens.
    pub block_id: BlockId,
    /// Classification tag.
    pub kind: String,
    /// Content preview, at most [`PREVIEW_CHAR_LIMIT`] characters plus the
    /// truncation marker.
    pub preview: String,
    /// Status shown in the badge.
    pub status: ReviewStatus,
}

impl BlockCard {
    /// Returns the badge text for the card's status.
    #[must_use]
    pub fn status_badge(&self) -> &str {
        self.status.as_str()
    }
}

impl From<&Block> for BlockCard {
    fn from(block: &Block) -> Self {
        Self {
            block_id: block.id.clone(),
            kind: block.kind.clone(),
            preview: preview_content(&block.content),
            status: block.status(),
        }
    }
}

/// Projects blocks into cards, preserving collection order.
#[must_use]
pub fn project_cards(blocks: &[Block]) -> Vec<BlockCard> {
    blocks.iter().map(BlockCard::from).collect()
}

/// Returns the display preview for block content.
///
/// Content of up to [`PREVIEW_CHAR_LIMIT`] Unicode scalar values is returned
/// unchanged; longer content keeps exactly that many characters followed by
/// [`TRUNCATION_MARKER`].
#[must_use]
pub fn preview_content(content: &str) -> String {
    match content.char_indices().nth(PREVIEW_CHAR_LIMIT) {
        Some((cut, _)) => {
            let kept = content.get(..cut).unwrap_or(content);
            format!("{kept}{TRUNCATION_MARKER}")
        }
        None => content.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::api::models::test_support::{minimal_block, numbered_blocks, reviewed_block};

    #[rstest]
    #[case::empty(0)]
    #[case::short(12)]
    #[case::boundary(PREVIEW_CHAR_LIMIT)]
    fn preview_keeps_content_up_to_limit(#[case] length: usize) {
        let content = "a".repeat(length);
        assert_eq!(preview_content(&content), content);
    }

    #[rstest]
    #[case::one_over(PREVIEW_CHAR_LIMIT + 1)]
    #[case::far_over(1_000)]
    fn preview_truncates_beyond_limit(#[case] length: usize) {
        let content = "b".repeat(length);

        let preview = preview_content(&content);

        assert_eq!(preview, format!("{}...", "b".repeat(PREVIEW_CHAR_LIMIT)));
    }

    #[test]
    fn preview_counts_characters_not_bytes() {
        let content = "é".repeat(PREVIEW_CHAR_LIMIT + 5);

        let preview = preview_content(&content);

        assert_eq!(
            preview.chars().count(),
            PREVIEW_CHAR_LIMIT + TRUNCATION_MARKER.len()
        );
        assert!(preview.ends_with(TRUNCATION_MARKER));
    }

    #[test]
    fn projection_preserves_order_and_count() {
        let blocks = numbered_blocks(4);

        let cards = project_cards(&blocks);

        let ids: Vec<_> = cards.iter().map(|card| card.block_id.as_str()).collect();
        assert_eq!(ids, vec!["b-1", "b-2", "b-3", "b-4"]);
    }

    #[test]
    fn card_defaults_missing_status_to_pending() {
        let card = BlockCard::from(&minimal_block("x", "figure", "Figure 1"));

        assert_eq!(card.kind, "figure");
        assert_eq!(card.preview, "Figure 1");
        assert_eq!(card.status_badge(), "pending");
    }

    #[test]
    fn card_shows_reviewed_status() {
        let card = BlockCard::from(&reviewed_block(
            "y",
            ReviewStatus::Rejected,
            "dana",
            "off-topic",
        ));

        assert_eq!(card.status, ReviewStatus::Rejected);
        assert_eq!(card.status_badge(), "rejected");
    }

    #[test]
    fn projection_never_mutates_content() {
        let long = "c".repeat(PREVIEW_CHAR_LIMIT * 2);
        let blocks = vec![minimal_block("z", "paragraph", &long)];

        let _cards = project_cards(&blocks);

        assert_eq!(blocks.first().map(|block| block.content.len()), Some(long.len()));
    }
}
