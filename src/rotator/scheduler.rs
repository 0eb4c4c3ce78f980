//! Rotation scheduling: tick sources and visibility gating
//!
//! The host owns the timer and the widget. The rotator only needs two things
//! from it: a stream of ticks ([`TickSource`]) and a way to ask whether the
//! log panel can currently be seen ([`Viewport`]).

use super::render::Renderer;
use super::{Produced, Rotator, TickOutcome};
use std::future::Future;
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::{interval_at, Instant, Interval, MissedTickBehavior};

/// Shortest period accepted by [`IntervalTicks`] (tokio rejects zero)
pub const MIN_PERIOD: Duration = Duration::from_millis(1);

/// What the rotator can ask the host about the log panel
///
/// Snapshots only: the rotator never changes visibility or scroll state.
pub trait Viewport {
    /// The panel is entirely within the rendered screen region
    fn is_fully_visible(&self) -> bool;

    /// The user is in the middle of scrolling the panel
    fn is_user_scrolling(&self) -> bool;

    /// The panel is shown in a maximized/focused view
    fn is_maximized(&self) -> bool {
        false
    }
}

/// A viewport that is always on screen and never scrolled (headless output)
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysVisible;

impl Viewport for AlwaysVisible {
    fn is_fully_visible(&self) -> bool {
        true
    }

    fn is_user_scrolling(&self) -> bool {
        false
    }
}

/// Why a tick was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuspendReason {
    /// The user is scrolling the panel
    UserScrolling,
    /// The panel is partly off screen or covered, and not maximized
    Obscured,
}

impl SuspendReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UserScrolling => "scrolling",
            Self::Obscured => "hidden",
        }
    }
}

/// Gating rule for a tick
///
/// Two independent conditions, either of which suspends: the user is
/// scrolling, or the panel is not fully visible and not maximized.
pub fn suspension<V: Viewport + ?Sized>(viewport: &V) -> Option<SuspendReason> {
    if viewport.is_user_scrolling() {
        return Some(SuspendReason::UserScrolling);
    }
    if !viewport.is_fully_visible() && !viewport.is_maximized() {
        return Some(SuspendReason::Obscured);
    }
    None
}

/// Source of scheduler ticks
pub trait TickSource {
    /// Wait for the next tick. Returns `false` once the source is exhausted.
    ///
    /// Must be cancel-safe: hosts race it against input in `tokio::select!`.
    fn next_tick(&mut self) -> impl Future<Output = bool> + Send;
}

/// Fixed-rate ticks from a tokio interval
///
/// The first tick fires one full period after creation. Missed ticks are
/// delivered in a burst to catch up, keeping the long-run rate fixed.
#[derive(Debug)]
pub struct IntervalTicks {
    interval: Interval,
    remaining: Option<u64>,
}

impl IntervalTicks {
    /// Tick every `period` (raised to [`MIN_PERIOD`]). Must be called inside a
    /// tokio runtime.
    pub fn every(period: Duration) -> Self {
        let period = period.max(MIN_PERIOD);
        let mut interval = interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Burst);
        Self {
            interval,
            remaining: None,
        }
    }

    /// Stop after `limit` ticks
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.remaining = Some(limit);
        self
    }

    pub fn period(&self) -> Duration {
        self.interval.period()
    }
}

impl TickSource for IntervalTicks {
    async fn next_tick(&mut self) -> bool {
        if self.remaining == Some(0) {
            return false;
        }
        self.interval.tick().await;
        if let Some(remaining) = self.remaining.as_mut() {
            *remaining -= 1;
        }
        true
    }
}

/// Drive `rotator` from `ticks` until the source is exhausted or `shutdown`
/// resolves (a sent signal or a dropped sender both count).
///
/// `on_produced` runs after each produced tick, with the new lines already in
/// the sink; returning `Break` stops the loop. Returns the number of ticks
/// seen, suspended ones included.
pub async fn run<T, R, V, F>(
    ticks: &mut T,
    rotator: &mut Rotator<R>,
    viewport: &V,
    mut shutdown: oneshot::Receiver<()>,
    mut on_produced: F,
) -> u64
where
    T: TickSource,
    R: Renderer,
    V: Viewport + ?Sized,
    F: FnMut(&Rotator<R>, &Produced) -> ControlFlow<()>,
{
    let mut seen = 0u64;

    loop {
        tokio::select! {
            biased;

            _ = &mut shutdown => {
                tracing::debug!(ticks = seen, "Rotation scheduler shut down");
                break;
            }

            more = ticks.next_tick() => {
                if !more {
                    tracing::debug!(ticks = seen, "Tick source exhausted");
                    break;
                }
                seen += 1;
                if let TickOutcome::Produced(produced) = rotator.tick(viewport) {
                    if on_produced(rotator, &produced).is_break() {
                        tracing::debug!(ticks = seen, "Rotation scheduler stopped by consumer");
                        break;
                    }
                }
            }
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotator::tests::{OneLine, ScriptedViewport};
    use crate::rotator::content::ContentKind;

    /// Ticks immediately, `n` times
    struct FixedTicks(u64);

    impl TickSource for FixedTicks {
        async fn next_tick(&mut self) -> bool {
            if self.0 == 0 {
                return false;
            }
            self.0 -= 1;
            true
        }
    }

    /// Never ticks
    struct Silent;

    impl TickSource for Silent {
        async fn next_tick(&mut self) -> bool {
            std::future::pending::<()>().await;
            false
        }
    }

    #[test]
    fn test_scrolling_suspends_even_when_visible() {
        let viewport = ScriptedViewport::visible().scrolling(true);
        assert_eq!(suspension(&viewport), Some(SuspendReason::UserScrolling));

        let maximized = ScriptedViewport::hidden().maximized(true).scrolling(true);
        assert_eq!(suspension(&maximized), Some(SuspendReason::UserScrolling));
    }

    #[test]
    fn test_hidden_suspends_unless_maximized() {
        assert_eq!(
            suspension(&ScriptedViewport::hidden()),
            Some(SuspendReason::Obscured)
        );
        assert_eq!(suspension(&ScriptedViewport::hidden().maximized(true)), None);
        assert_eq!(suspension(&ScriptedViewport::visible()), None);
        assert_eq!(suspension(&AlwaysVisible), None);
    }

    #[tokio::test]
    async fn test_run_stops_when_source_exhausted() {
        let mut rotator = Rotator::new(100, OneLine);
        let (_tx, rx) = oneshot::channel();
        let mut produced = Vec::new();

        let seen = run(&mut FixedTicks(4), &mut rotator, &AlwaysVisible, rx, |_, p| {
            produced.push(p.kind);
            ControlFlow::Continue(())
        })
        .await;

        assert_eq!(seen, 4);
        assert_eq!(rotator.counter(), 4);
        assert_eq!(
            produced,
            vec![
                ContentKind::Table,
                ContentKind::ErrorTrace,
                ContentKind::CodeSample,
                ContentKind::Table,
            ]
        );
    }

    #[tokio::test]
    async fn test_run_counts_suspended_ticks_without_producing() {
        let mut rotator = Rotator::new(100, OneLine);
        let viewport = ScriptedViewport::visible().scrolling(true);
        let (_tx, rx) = oneshot::channel();

        let seen = run(&mut FixedTicks(25), &mut rotator, &viewport, rx, |_, _| {
            panic!("nothing should be produced while scrolling")
        })
        .await;

        assert_eq!(seen, 25);
        assert_eq!(rotator.counter(), 0);
        assert_eq!(rotator.sink().len(), 0);
    }

    #[tokio::test]
    async fn test_run_stops_on_shutdown() {
        let mut rotator = Rotator::new(100, OneLine);
        let (tx, rx) = oneshot::channel();
        tx.send(()).unwrap();

        let seen = run(&mut Silent, &mut rotator, &AlwaysVisible, rx, |_, _| {
            ControlFlow::Continue(())
        })
        .await;
        assert_eq!(seen, 0);
    }

    #[tokio::test]
    async fn test_run_stops_when_sender_dropped() {
        let mut rotator = Rotator::new(100, OneLine);
        let (tx, rx) = oneshot::channel::<()>();
        drop(tx);

        let seen = run(&mut Silent, &mut rotator, &AlwaysVisible, rx, |_, _| {
            ControlFlow::Continue(())
        })
        .await;
        assert_eq!(seen, 0);
    }

    #[tokio::test]
    async fn test_run_stops_when_consumer_breaks() {
        let mut rotator = Rotator::new(100, OneLine);
        let (_tx, rx) = oneshot::channel();

        let seen = run(&mut FixedTicks(10), &mut rotator, &AlwaysVisible, rx, |r, _| {
            if r.counter() == 3 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .await;

        assert_eq!(seen, 3);
        assert_eq!(rotator.counter(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_first_tick_waits_one_period() {
        let start = Instant::now();
        let mut ticks = IntervalTicks::every(Duration::from_secs(1));

        assert!(ticks.next_tick().await);
        assert_eq!(start.elapsed(), Duration::from_secs(1));
        assert!(ticks.next_tick().await);
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_limit_exhausts_source() {
        let mut ticks = IntervalTicks::every(Duration::from_millis(10)).with_limit(2);

        assert!(ticks.next_tick().await);
        assert!(ticks.next_tick().await);
        assert!(!ticks.next_tick().await);
        assert!(!ticks.next_tick().await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_zero_period_is_raised() {
        let ticks = IntervalTicks::every(Duration::ZERO);
        assert_eq!(ticks.period(), MIN_PERIOD);
    }

    #[tokio::test(start_paused = true)]
    async fn test_interval_drives_run_at_fixed_rate() {
        let mut rotator = Rotator::new(100, OneLine);
        let mut ticks = IntervalTicks::every(Duration::from_millis(250)).with_limit(8);
        let (_tx, rx) = oneshot::channel();
        let start = Instant::now();

        let seen = run(&mut ticks, &mut rotator, &AlwaysVisible, rx, |_, _| {
            ControlFlow::Continue(())
        })
        .await;

        assert_eq!(seen, 8);
        assert_eq!(rotator.counter(), 8);
        assert_eq!(start.elapsed(), Duration::from_secs(2));
    }
}
