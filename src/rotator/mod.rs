//! Rotating log content
//!
//! Every scheduler tick either gets suspended (the panel can't be seen or is
//! being scrolled) or produces one block of demo content:
//!
//! ```text
//! tick ──▶ suspension check ──▶ counter += 1 ──▶ select(counter) ──▶ render ──▶ sink
//!               │
//!               └── suspended: counter and sink untouched
//! ```
//!
//! The [`Rotator`] owns the counter and the sink; hosts own the timer and the
//! widget, and plug in through [`scheduler::TickSource`] and
//! [`scheduler::Viewport`].

pub mod content;
pub mod render;
pub mod samples;
pub mod scheduler;
pub mod sink;

use content::{select, ContentKind, Selection};
use render::Renderer;
use scheduler::{suspension, SuspendReason, Viewport};
use sink::BoundedSink;

/// First line written to a freshly mounted panel
pub const GREETING: &str = "I am a scrolling log panel";

/// Result of one scheduler tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TickOutcome {
    /// Skipped: nothing changed
    Suspended(SuspendReason),
    /// New content was appended
    Produced(Produced),
}

/// Summary of a produced tick
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Produced {
    /// Counter value after the increment
    pub tick: u64,
    /// Kind the counter selected
    pub kind: ContentKind,
    /// Kind of block actually appended (`ErrorTrace` if the generator faulted)
    pub block_kind: ContentKind,
    /// Lines appended, caption included
    pub lines: usize,
}

/// Tick counter plus the bounded sink it writes into
pub struct Rotator<R: Renderer> {
    counter: u64,
    sink: BoundedSink<R::Line>,
    renderer: R,
}

impl<R: Renderer> Rotator<R> {
    pub fn new(capacity: usize, renderer: R) -> Self {
        Self {
            counter: 0,
            sink: BoundedSink::new(capacity),
            renderer,
        }
    }

    /// Number of produced ticks so far
    pub fn counter(&self) -> u64 {
        self.counter
    }

    pub fn sink(&self) -> &BoundedSink<R::Line> {
        &self.sink
    }

    /// Write a free-standing line (greeting, notices)
    pub fn write(&mut self, text: &str) {
        let line = self.renderer.text(text);
        self.sink.push(line);
    }

    /// Handle one scheduler tick: gate on the viewport, then produce
    pub fn tick<V: Viewport + ?Sized>(&mut self, viewport: &V) -> TickOutcome {
        if let Some(reason) = suspension(viewport) {
            tracing::trace!(
                reason = reason.as_str(),
                counter = self.counter,
                "Rotation tick suspended"
            );
            return TickOutcome::Suspended(reason);
        }

        TickOutcome::Produced(self.produce())
    }

    /// Produce the next block without gating
    pub fn produce(&mut self) -> Produced {
        self.counter = self.counter.wrapping_add(1);
        let tick = self.counter;

        let Selection { kind, block } = select(tick);
        let lines = self.renderer.render(tick, &block);
        let count = lines.len();
        self.sink.extend(lines);

        tracing::debug!(
            tick,
            kind = kind.as_str(),
            lines = count,
            sink_len = self.sink.len(),
            "Rotated log content"
        );

        Produced {
            tick,
            kind,
            block_kind: block.kind(),
            lines: count,
        }
    }
}
