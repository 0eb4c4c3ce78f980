// TUI application state
//
// App owns the rotator (and with it the log sink), the logs panel, and the
// view flags the rotator's visibility gate depends on. Everything runs on
// the single event-loop task, so there is no locking.

use super::components::logs_panel::LogsPanel;
use crate::config::Config;
use crate::rotator::render::StyledRenderer;
use crate::rotator::scheduler::{SuspendReason, Viewport};
use crate::rotator::{Rotator, TickOutcome, GREETING};
use crate::theme::Theme;
use std::time::{Duration, Instant};

/// What the rotator sees of the logs panel at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportSnapshot {
    pub fully_visible: bool,
    pub scrolling: bool,
    pub maximized: bool,
}

impl Viewport for ViewportSnapshot {
    fn is_fully_visible(&self) -> bool {
        self.fully_visible
    }

    fn is_user_scrolling(&self) -> bool {
        self.scrolling
    }

    fn is_maximized(&self) -> bool {
        self.maximized
    }
}

/// Main application state for the TUI
pub struct App {
    /// Tick counter and bounded log sink
    pub rotator: Rotator<StyledRenderer>,

    /// Logs panel (scroll state, last drawn viewport)
    pub logs_panel: LogsPanel,

    /// Color theme
    pub theme: Theme,

    /// Logs panel fills the screen
    pub maximized: bool,

    /// Help overlay is drawn over the panels
    pub show_help: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Reason the most recent rotation tick was skipped (None = it produced)
    pub last_suspension: Option<SuspendReason>,

    /// How long a scroll input keeps the user "scrolling"
    scroll_grace: Duration,

    /// Last scroll input
    last_scroll: Option<Instant>,

    /// When the app started (for uptime display)
    start_time: Instant,
}

impl App {
    pub fn new(config: &Config) -> Self {
        let theme = Theme::default();
        let mut rotator = Rotator::new(config.capacity, StyledRenderer::new(theme.clone()));
        rotator.write(GREETING);

        Self {
            rotator,
            logs_panel: LogsPanel::new(),
            theme,
            maximized: false,
            show_help: false,
            should_quit: false,
            last_suspension: None,
            scroll_grace: config.scroll_grace,
            last_scroll: None,
            start_time: Instant::now(),
        }
    }

    /// Record a scroll input at `now`
    pub fn mark_scrolling(&mut self, now: Instant) {
        self.last_scroll = Some(now);
    }

    /// Whether a scroll input happened within the grace window before `now`
    pub fn is_scrolling_at(&self, now: Instant) -> bool {
        self.last_scroll
            .is_some_and(|at| now.saturating_duration_since(at) < self.scroll_grace)
    }

    /// Visibility snapshot as of the last drawn frame
    ///
    /// The panel is fully visible when the last draw left room for at least
    /// one content line and no overlay covers it.
    pub fn viewport_at(&self, now: Instant) -> ViewportSnapshot {
        ViewportSnapshot {
            fully_visible: self.logs_panel.viewport_height() > 0 && !self.show_help,
            scrolling: self.is_scrolling_at(now),
            maximized: self.maximized,
        }
    }

    /// Handle one rotation tick
    pub fn on_rotation_tick(&mut self) -> TickOutcome {
        self.rotation_tick_at(Instant::now())
    }

    pub fn rotation_tick_at(&mut self, now: Instant) -> TickOutcome {
        let viewport = self.viewport_at(now);
        let outcome = self.rotator.tick(&viewport);
        self.last_suspension = match &outcome {
            TickOutcome::Suspended(reason) => Some(*reason),
            TickOutcome::Produced(_) => None,
        };
        outcome
    }

    pub fn toggle_maximized(&mut self) {
        self.maximized = !self.maximized;
        tracing::debug!(maximized = self.maximized, "Toggled maximized logs view");
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Format uptime as HH:MM:SS
    pub fn uptime(&self) -> String {
        let seconds = self.start_time.elapsed().as_secs();
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;

        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotator::content::ContentKind;
    use crate::rotator::render::plain_text;

    fn app() -> App {
        let mut config = Config::default();
        config.scroll_grace = Duration::from_millis(500);
        App::new(&config)
    }

    /// Pretend a frame was drawn with `height` content lines
    fn drawn(app: &mut App, height: usize) {
        app.logs_panel.sync(app.rotator.sink(), 80, height);
    }

    #[test]
    fn test_greeting_is_first_line() {
        let app = app();
        assert_eq!(app.rotator.sink().len(), 1);
        let first = app.rotator.sink().iter().next().map(plain_text);
        assert_eq!(first.as_deref(), Some(GREETING));
    }

    #[test]
    fn test_undrawn_panel_is_obscured() {
        let mut app = app();
        assert_eq!(
            app.rotation_tick_at(Instant::now()),
            TickOutcome::Suspended(SuspendReason::Obscured)
        );
        assert_eq!(app.last_suspension, Some(SuspendReason::Obscured));
        assert_eq!(app.rotator.counter(), 0);
    }

    #[test]
    fn test_drawn_panel_produces() {
        let mut app = app();
        drawn(&mut app, 20);

        let TickOutcome::Produced(produced) = app.rotation_tick_at(Instant::now()) else {
            panic!("visible panel should produce");
        };
        assert_eq!(produced.kind, ContentKind::Table);
        assert_eq!(app.last_suspension, None);
        assert_eq!(app.rotator.sink().len(), 1 + 13);
    }

    #[test]
    fn test_scroll_grace_window() {
        let mut app = app();
        drawn(&mut app, 20);
        let t0 = Instant::now();
        app.mark_scrolling(t0);

        assert_eq!(
            app.rotation_tick_at(t0 + Duration::from_millis(100)),
            TickOutcome::Suspended(SuspendReason::UserScrolling)
        );
        assert!(matches!(
            app.rotation_tick_at(t0 + Duration::from_millis(500)),
            TickOutcome::Produced(_)
        ));
        assert_eq!(app.rotator.counter(), 1);
    }

    #[test]
    fn test_help_overlay_obscures_unless_maximized() {
        let mut app = app();
        drawn(&mut app, 20);
        app.toggle_help();
        let now = Instant::now();

        assert_eq!(
            app.rotation_tick_at(now),
            TickOutcome::Suspended(SuspendReason::Obscured)
        );

        app.toggle_maximized();
        assert!(matches!(app.rotation_tick_at(now), TickOutcome::Produced(_)));
    }

    #[test]
    fn test_scrolling_wins_over_maximized() {
        let mut app = app();
        app.toggle_maximized();
        let now = Instant::now();
        app.mark_scrolling(now);

        assert_eq!(
            app.viewport_at(now),
            ViewportSnapshot {
                fully_visible: false,
                scrolling: true,
                maximized: true,
            }
        );
        assert_eq!(
            app.rotation_tick_at(now),
            TickOutcome::Suspended(SuspendReason::UserScrolling)
        );
    }

    #[test]
    fn test_uptime_format() {
        let app = app();
        assert_eq!(app.uptime(), "00:00:00");
    }
}
