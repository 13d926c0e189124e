//! Cursor and scroll position within the card list.
//!
//! The cursor is an index into the projected cards. It is clamped whenever
//! the collection is replaced so it never points past the last card.

/// Cursor and scroll state for the card list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    /// Current cursor position (0-indexed).
    pub position: usize,
    /// Index of the first visible card.
    pub scroll_offset: usize,
}

impl ListCursor {
    /// Clamps the cursor to a list of `count` cards.
    pub const fn clamp(&mut self, count: usize) {
        if count == 0 {
            self.position = 0;
            self.scroll_offset = 0;
        } else if self.position >= count {
            self.position = count.saturating_sub(1);
        }
    }

    /// Moves the cursor up by `step`, stopping at the first card.
    pub const fn up(&mut self, step: usize) {
        self.position = self.position.saturating_sub(step);
    }

    /// Moves the cursor down by `step`, stopping at the last of `count` cards.
    pub const fn down(&mut self, step: usize, count: usize) {
        let max_index = count.saturating_sub(1);
        let target = self.position.saturating_add(step);
        self.position = if target < max_index { target } else { max_index };
    }

    /// Moves the cursor to the first card.
    pub const fn home(&mut self) {
        self.position = 0;
        self.scroll_offset = 0;
    }

    /// Moves the cursor to the last of `count` cards.
    pub const fn end(&mut self, count: usize) {
        self.position = count.saturating_sub(1);
    }

    /// Adjusts the scroll offset so the cursor stays within `visible_height`
    /// rows.
    pub const fn keep_visible(&mut self, visible_height: usize) {
        if visible_height == 0 {
            return;
        }
        if self.position < self.scroll_offset {
            self.scroll_offset = self.position;
            return;
        }
        let viewport_end = self.scroll_offset.saturating_add(visible_height);
        if self.position >= viewport_end {
            self.scroll_offset = self.position.saturating_sub(visible_height.saturating_sub(1));
        }
    }
}
