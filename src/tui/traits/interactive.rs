//! Interactive trait for panels that handle keyboard input

use super::Scrollable;
use crossterm::event::{KeyCode, KeyEvent};

/// Result of handling a key event
///
/// Tells the App whether the panel consumed the event or if it should
/// bubble up for global handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handled {
    /// Event was consumed by the panel
    Yes,
    /// Event was not handled, should bubble up
    No,
}

impl Handled {
    /// Check if the event was handled
    pub fn was_handled(self) -> bool {
        self == Self::Yes
    }
}

/// Trait for panels that handle keyboard input
///
/// ```text
/// KeyEvent
///    │
///    ▼
/// App (global handlers: ?, q, m)
///    │
///    │ if not handled
///    ▼
/// Panel (via Interactive trait)
///    │
///    │ returns Handled::Yes or Handled::No
///    ▼
/// App (fallback handlers)
/// ```
pub trait Interactive {
    /// Handle a key event
    ///
    /// Returns `Handled::Yes` if the panel consumed the event,
    /// `Handled::No` if it should bubble up to the App.
    fn handle_key(&mut self, key: KeyEvent) -> Handled;

    /// Keybind hints shown in the status bar
    fn focus_hint(&self) -> Option<&'static str> {
        None
    }
}

/// Default key handling for common scroll operations
pub trait ScrollableInteractive: Interactive + Scrollable {
    /// Handle common scroll keys
    ///
    /// Returns `Handled::Yes` for: Up, Down, k, j, Home, End, PageUp, PageDown
    fn handle_scroll_keys(&mut self, key: KeyEvent) -> Handled {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll_up();
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll_down();
                Handled::Yes
            }
            KeyCode::Home => {
                self.scroll_to_top();
                Handled::Yes
            }
            KeyCode::End => {
                self.scroll_to_bottom();
                Handled::Yes
            }
            KeyCode::PageUp => {
                self.page_up();
                Handled::Yes
            }
            KeyCode::PageDown => {
                self.page_down();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }
}

// Blanket implementation: anything that implements both traits gets this for free
impl<T: Interactive + Scrollable> ScrollableInteractive for T {}
