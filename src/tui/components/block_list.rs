//! Card list component for the block collection.
//!
//! Renders one line per [`BlockCard`] with the cursor marker, status badge,
//! type tag and content preview. Only the rows inside the scroll window are
//! produced.

use crate::dashboard::BlockCard;

/// Default visible height for the card list.
const DEFAULT_VISIBLE_HEIGHT: usize = 20;

/// Width reserved for the status badge column.
const BADGE_WIDTH: usize = 10;

/// Context for rendering the card list.
#[derive(Debug, Clone)]
pub struct BlockListViewContext<'a> {
    /// Cards in collection order.
    pub cards: &'a [BlockCard],
    /// Current cursor position (0-indexed).
    pub cursor_position: usize,
    /// Index of the first visible card.
    pub scroll_offset: usize,
    /// Number of rows available.
    pub visible_height: usize,
    /// Whether the first load has not finished yet.
    pub loading: bool,
}

/// Component for displaying the block cards.
#[derive(Debug, Clone)]
pub struct BlockListComponent {
    visible_height: usize,
}

impl Default for BlockListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockListComponent {
    /// Creates a new card list component.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visible_height: DEFAULT_VISIBLE_HEIGHT,
        }
    }

    /// Updates the visible height for scrolling calculations.
    pub const fn set_visible_height(&mut self, height: usize) {
        self.visible_height = height;
    }

    /// Returns the visible height.
    #[must_use]
    pub const fn visible_height(&self) -> usize {
        self.visible_height
    }

    /// Renders the visible cards, one per line.
    #[must_use]
    pub fn view(&self, ctx: &BlockListViewContext<'_>) -> String {
        if ctx.cards.is_empty() {
            let message = if ctx.loading {
                "  Loading blocks...\n"
            } else {
                "  No blocks to review.\n"
            };
            return message.to_owned();
        }

        let visible_height = if ctx.visible_height > 0 {
            ctx.visible_height
        } else {
            self.visible_height
        };

        let mut output = String::new();
        for (index, card) in ctx
            .cards
            .iter()
            .enumerate()
            .skip(ctx.scroll_offset)
            .take(visible_height)
        {
            let prefix = if index == ctx.cursor_position { ">" } else { " " };
            output.push_str(&format_card_line(card, prefix));
            output.push('\n');
        }
        output
    }
}

/// Formats a card as a single display line.
fn format_card_line(card: &BlockCard, prefix: &str) -> String {
    let badge = format!("[{}]", card.status_badge());
    let preview = card.preview.split_whitespace().collect::<Vec<_>>().join(" ");
    format!(
        "{prefix} {badge:<width$} {kind}: {preview}",
        width = BADGE_WIDTH,
        kind = card.kind
    )
}
