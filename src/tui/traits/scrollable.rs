//! Scrollable trait for panels with scrollable content

use crate::tui::scroll::ScrollState;

/// Trait for panels with scrollable content
///
/// Panels own their `ScrollState` and expose it through this trait; the
/// navigation methods delegate to it.
pub trait Scrollable {
    /// Get immutable reference to scroll state
    fn scroll_state(&self) -> &ScrollState;

    /// Get mutable reference to scroll state
    fn scroll_state_mut(&mut self) -> &mut ScrollState;

    // ─────────────────────────────────────────────────────────────
    // Navigation - default implementations delegate to ScrollState
    // ─────────────────────────────────────────────────────────────

    /// Scroll up by one line
    fn scroll_up(&mut self) {
        self.scroll_state_mut().scroll_up();
    }

    /// Scroll down by one line
    fn scroll_down(&mut self) {
        self.scroll_state_mut().scroll_down();
    }

    /// Jump to the top of content
    fn scroll_to_top(&mut self) {
        self.scroll_state_mut().scroll_to_top();
    }

    /// Jump to the bottom of content
    fn scroll_to_bottom(&mut self) {
        self.scroll_state_mut().scroll_to_bottom();
    }

    /// Scroll up by a page
    fn page_up(&mut self) {
        self.scroll_state_mut().page_up();
    }

    /// Scroll down by a page
    fn page_down(&mut self) {
        self.scroll_state_mut().page_down();
    }

    // ─────────────────────────────────────────────────────────────
    // State queries
    // ─────────────────────────────────────────────────────────────

    /// Check if auto-follow is enabled
    fn is_auto_following(&self) -> bool {
        self.scroll_state().auto_follow
    }
}
