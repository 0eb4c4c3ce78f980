// Scroll state for TUI panels
//
// The panel owns its scroll state; App just renders and routes input.
//
// - Auto-follow for streaming content: new lines keep the view at the bottom
// - Scrolling up takes control; scrolling back to the bottom gives it back
// - Lines evicted from the head of a bounded buffer shift the offset so the
//   lines the user is reading stay put

/// Scroll state for a single panel
///
/// Owns all state needed for scrolling: position, content size, viewport size.
#[derive(Debug, Clone)]
pub struct ScrollState {
    /// Current scroll offset (line index at top of viewport)
    offset: usize,

    /// Total number of lines in content
    total: usize,

    /// Number of lines visible in viewport
    viewport: usize,

    /// Whether to auto-follow new content (scroll to bottom)
    /// User scrolling up disables this; scrolling to bottom re-enables
    pub auto_follow: bool,
}

impl ScrollState {
    /// Create new scroll state with auto-follow enabled
    pub fn new() -> Self {
        Self {
            offset: 0,
            total: 0,
            viewport: 0,
            auto_follow: true,
        }
    }

    /// Update content and viewport dimensions
    /// Call this each render frame with current sizes
    pub fn update_dimensions(&mut self, total: usize, viewport: usize) {
        self.total = total;
        self.viewport = viewport;

        // If auto-following, snap to bottom
        if self.auto_follow {
            self.offset = self.max_offset();
        } else {
            // Clamp offset to valid range
            self.offset = self.offset.min(self.max_offset());
        }
    }

    /// `removed` lines were dropped from the head of the content
    ///
    /// Moves the offset up by the same amount so the viewport keeps showing
    /// the same lines. No-op while auto-following.
    pub fn shift_for_removed(&mut self, removed: usize) {
        if self.auto_follow || removed == 0 {
            return;
        }
        self.offset = self.offset.saturating_sub(removed);
        self.total = self.total.saturating_sub(removed);
    }

    /// Scroll up by one line
    /// Disables auto-follow (user took control)
    pub fn scroll_up(&mut self) {
        if self.offset > 0 {
            self.offset -= 1;
            self.auto_follow = false;
        }
    }

    /// Scroll down by one line
    /// Re-enables auto-follow if we reach the bottom
    pub fn scroll_down(&mut self) {
        if self.offset < self.max_offset() {
            self.offset += 1;
        }

        if self.offset >= self.max_offset() {
            self.auto_follow = true;
        }
    }

    /// Scroll up by a page
    pub fn page_up(&mut self) {
        let page = self.viewport.max(1);
        self.offset = self.offset.saturating_sub(page);
        self.auto_follow = false;
    }

    /// Scroll down by a page
    pub fn page_down(&mut self) {
        let page = self.viewport.max(1);
        self.offset = (self.offset + page).min(self.max_offset());

        if self.offset >= self.max_offset() {
            self.auto_follow = true;
        }
    }

    /// Jump to top
    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
        self.auto_follow = false;
    }

    /// Jump to bottom (and enable auto-follow)
    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
        self.auto_follow = true;
    }

    /// Get current scroll offset
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Get visible range (start_index, end_index)
    pub fn visible_range(&self) -> (usize, usize) {
        let start = self.offset;
        let end = (self.offset + self.viewport).min(self.total);
        (start, end)
    }

    /// Check if content overflows viewport (scrollbar needed)
    pub fn needs_scrollbar(&self) -> bool {
        self.total > self.viewport
    }

    /// Maximum valid offset
    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.viewport)
    }

    /// Get total content size
    pub fn total(&self) -> usize {
        self.total
    }

    /// Get viewport size
    pub fn viewport(&self) -> usize {
        self.viewport
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_follow_on_new_content() {
        let mut scroll = ScrollState::new();
        assert!(scroll.auto_follow);

        // Simulate content growing
        scroll.update_dimensions(10, 5);
        assert_eq!(scroll.offset(), 5); // At bottom

        scroll.update_dimensions(15, 5);
        assert_eq!(scroll.offset(), 10); // Still at bottom
    }

    #[test]
    fn test_scroll_up_disables_auto_follow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);
        assert!(scroll.auto_follow);

        scroll.scroll_up();
        assert!(!scroll.auto_follow);
        assert_eq!(scroll.offset(), 14); // Moved up one
    }

    #[test]
    fn test_scroll_down_to_bottom_enables_auto_follow() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(20, 5);

        scroll.scroll_up();
        scroll.scroll_up();
        assert!(!scroll.auto_follow);

        scroll.scroll_down();
        assert!(!scroll.auto_follow);
        scroll.scroll_down();
        assert!(scroll.auto_follow);
        assert_eq!(scroll.offset(), 15);
    }

    #[test]
    fn test_paging() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 10);

        scroll.page_up();
        assert_eq!(scroll.offset(), 80);
        assert!(!scroll.auto_follow);

        scroll.scroll_to_top();
        scroll.page_up();
        assert_eq!(scroll.offset(), 0);

        for _ in 0..9 {
            scroll.page_down();
        }
        assert_eq!(scroll.offset(), 90);
        assert!(scroll.auto_follow);
    }

    #[test]
    fn test_visible_range() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 10);

        // At bottom (auto-follow)
        assert_eq!(scroll.visible_range(), (90, 100));

        // Scroll to top
        scroll.scroll_to_top();
        assert_eq!(scroll.visible_range(), (0, 10));
    }

    #[test]
    fn test_content_shorter_than_viewport() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(3, 10);

        assert_eq!(scroll.visible_range(), (0, 3));
        assert!(!scroll.needs_scrollbar());

        scroll.scroll_up();
        assert!(scroll.auto_follow); // nothing to scroll
    }

    #[test]
    fn test_removed_head_lines_keep_view_stable() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 10);
        scroll.page_up();
        scroll.page_up();
        assert_eq!(scroll.offset(), 70);

        // 5 lines dropped from the head, 5 appended at the tail
        scroll.shift_for_removed(5);
        scroll.update_dimensions(100, 10);
        assert_eq!(scroll.offset(), 65);
        assert!(!scroll.auto_follow);
    }

    #[test]
    fn test_removed_lines_ignored_while_following() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(100, 10);

        scroll.shift_for_removed(40);
        scroll.update_dimensions(100, 10);
        assert_eq!(scroll.offset(), 90);
    }

    #[test]
    fn test_removed_past_offset_clamps_to_top() {
        let mut scroll = ScrollState::new();
        scroll.update_dimensions(50, 10);
        scroll.scroll_to_top();
        for _ in 0..3 {
            scroll.scroll_down();
        }

        scroll.shift_for_removed(20);
        assert_eq!(scroll.offset(), 0);
    }
}
