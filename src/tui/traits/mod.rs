//! Component traits for TUI panels
//!
//! Instead of App knowing how to scroll or handle keys for every panel,
//! panels declare their own capabilities through traits.
//!
//! ```text
//! KeyEvent ──▶ App (global keys: q, ?, m, Esc)
//!                 │ if not handled
//!                 ▼
//!           LogsPanel (Interactive) ──▶ Scrollable ──▶ ScrollState
//! ```
//!
//! - [`Scrollable`] - Panels with scrollable content
//! - [`Interactive`] - Panels that handle keyboard input

mod interactive;
mod scrollable;

pub use interactive::{Handled, Interactive, ScrollableInteractive};
pub use scrollable::Scrollable;
