//! Fixed-height scroll window over a sequence of rows.

use std::ops::Range;

use log::debug;

/// `(offset, height)` window selecting a contiguous slice of rows.
///
/// The offset is never negative but has no upper bound: callers may scroll
/// past the last row and get an empty window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
}

impl Viewport {
    pub fn new(height: usize) -> Self {
        Self { offset: 0, height }
    }

    /// Rank of the first row in the window.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Row capacity.
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
    }

    /// Set the offset to `max(0, n)`.
    pub fn scroll_to(&mut self, n: isize) {
        self.offset = usize::try_from(n).unwrap_or(0);
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let current = isize::try_from(self.offset).unwrap_or(isize::MAX);
        self.scroll_to(current.saturating_add(delta));
    }

    /// Ranks currently inside the window.
    pub fn range(&self) -> Range<usize> {
        self.offset..self.offset.saturating_add(self.height)
    }

    pub fn contains(&self, rank: usize) -> bool {
        self.range().contains(&rank)
    }

    /// Move the window the minimum distance needed to include `rank`.
    /// Returns whether the offset changed.
    ///
    /// A zero-height window is treated as one row tall.
    pub fn reveal(&mut self, rank: usize) -> bool {
        let height = self.height.max(1);
        let before = self.offset;
        if rank < self.offset {
            self.offset = rank;
        } else if rank >= self.offset.saturating_add(height) {
            self.offset = rank - (height - 1);
        }
        if self.offset != before {
            debug!(
                "viewport: offset {} -> {} to reveal rank {}",
                before, self.offset, rank
            );
        }
        self.offset != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_below_window_scrolls_down() {
        let mut viewport = Viewport::new(3);
        assert!(viewport.reveal(5));
        assert_eq!(viewport.offset(), 3);
        assert!(viewport.contains(5));
    }

    #[test]
    fn test_reveal_above_window_scrolls_up() {
        let mut viewport = Viewport::new(3);
        viewport.scroll_to(10);
        assert!(viewport.reveal(4));
        assert_eq!(viewport.offset(), 4);
    }

    #[test]
    fn test_reveal_inside_window_is_noop() {
        let mut viewport = Viewport::new(3);
        viewport.scroll_to(2);
        for rank in 2..5 {
            assert!(!viewport.reveal(rank));
            assert_eq!(viewport.offset(), 2);
        }
    }

    #[test]
    fn test_reveal_with_huge_height() {
        let mut viewport = Viewport::new(usize::MAX);
        viewport.scroll_to(1);
        assert!(!viewport.reveal(5));
        assert_eq!(viewport.offset(), 1);
        assert!(viewport.reveal(0));
        assert_eq!(viewport.offset(), 0);
        assert!(!viewport.reveal(usize::MAX - 1));
    }

    #[test]
    fn test_reveal_keeps_rank_in_bounds() {
        for height in 1..6 {
            for start in 0..8 {
                for rank in 0..12 {
                    let mut viewport = Viewport::new(height);
                    viewport.scroll_to(start);
                    viewport.reveal(rank);
                    let offset = viewport.offset();
                    assert!(offset <= rank && rank <= offset + height - 1);
                }
            }
        }
    }

    #[test]
    fn test_zero_height_reveal() {
        let mut viewport = Viewport::new(0);
        viewport.reveal(4);
        assert_eq!(viewport.offset(), 4);
    }

    #[test]
    fn test_scroll_to_clamps_negative() {
        let mut viewport = Viewport::new(3);
        viewport.scroll_to(-5);
        assert_eq!(viewport.offset(), 0);
        viewport.scroll_by(-1);
        assert_eq!(viewport.offset(), 0);
    }

    #[test]
    fn test_scroll_has_no_upper_bound() {
        let mut viewport = Viewport::new(3);
        viewport.scroll_to(1_000);
        assert_eq!(viewport.offset(), 1_000);
        viewport.scroll_by(-1);
        assert_eq!(viewport.offset(), 999);
        viewport.scroll_by(2);
        assert_eq!(viewport.offset(), 1_001);
    }
}
