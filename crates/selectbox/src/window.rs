//! Scroll window over the option list.

/// Tracks which slice of the entry list is visible inside the overlay.
///
/// The window never moves on its own; the controller calls
/// [`scroll_to`](ListWindow::scroll_to) whenever hover or focus moves while
/// the list stays open.
#[derive(Debug, Clone, Copy)]
pub struct ListWindow {
    offset: usize,
    visible: usize,
}

impl ListWindow {
    pub fn new(visible: usize) -> Self {
        Self {
            offset: 0,
            visible: visible.max(1),
        }
    }

    /// Index of the first visible entry.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Height of the visible band, in entries.
    pub fn visible(&self) -> usize {
        self.visible
    }

    pub fn set_visible(&mut self, visible: usize) {
        self.visible = visible.max(1);
    }

    /// Whether the entry at `index` lies fully within the visible band.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.offset && index < self.offset + self.visible
    }

    /// Bring the entry at `target` into view.
    ///
    /// If the target is already fully visible, nothing happens. If it lies
    /// above the band, the window scrolls up exactly to the target. If it
    /// lies below, the window scrolls down until the target's bottom aligns
    /// with the band's bottom edge. `count` clamps the offset so the band
    /// never runs past the end of the list.
    pub fn scroll_to(&mut self, target: usize, count: usize) {
        if count == 0 {
            self.offset = 0;
            return;
        }
        if target < self.offset {
            self.offset = target;
        } else if target + 1 > self.offset + self.visible {
            self.offset = target + 1 - self.visible;
        }
        self.offset = self.offset.min(count.saturating_sub(self.visible));
    }

    /// Reset to the top of the list.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_target_does_not_move_window() {
        let mut w = ListWindow::new(3);
        w.scroll_to(1, 10);
        assert_eq!(w.offset(), 0);
        w.scroll_to(2, 10);
        assert_eq!(w.offset(), 0);
    }

    #[test]
    fn target_below_aligns_with_bottom() {
        let mut w = ListWindow::new(3);
        w.scroll_to(5, 10); // band becomes 3..=5
        assert_eq!(w.offset(), 3);
        assert!(w.contains(5));
        assert!(!w.contains(2));
    }

    #[test]
    fn target_above_aligns_with_top() {
        let mut w = ListWindow::new(3);
        w.scroll_to(8, 10); // offset 6
        w.scroll_to(2, 10);
        assert_eq!(w.offset(), 2);
    }

    #[test]
    fn offset_clamps_to_list_end() {
        let mut w = ListWindow::new(5);
        w.scroll_to(9, 10);
        assert_eq!(w.offset(), 5);
        // Shrinking the list pulls the window back.
        w.scroll_to(2, 3);
        assert_eq!(w.offset(), 0);
    }

    #[test]
    fn empty_list_resets_offset() {
        let mut w = ListWindow::new(3);
        w.scroll_to(7, 10);
        w.scroll_to(0, 0);
        assert_eq!(w.offset(), 0);
    }

    #[test]
    fn zero_visible_is_clamped_to_one() {
        let mut w = ListWindow::new(0);
        assert_eq!(w.visible(), 1);
        w.scroll_to(4, 10);
        assert_eq!(w.offset(), 4);
        assert!(w.contains(4));
    }
}
