//! Logs panel component
//!
//! Displays the rotator's bounded sink. The panel doesn't own the lines: it
//! receives the sink at render time and wraps each new line into rows of the
//! panel's inner width. Scrolling counts rows, not sink lines, so a wrapped
//! line scrolls like any other content.
//!
//! The last drawn viewport height is what the rotator's visibility gate sees:
//! a panel with no room for a content line counts as obscured.

use super::scrollbar::{render_scrollbar, ScrollbarStyle};
use crate::rotator::render::LogLine;
use crate::rotator::scheduler::SuspendReason;
use crate::rotator::sink::BoundedSink;
use crate::theme::Theme;
use crate::tui::scroll::ScrollState;
use crate::tui::traits::{Handled, Interactive, Scrollable, ScrollableInteractive};
use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::collections::VecDeque;
use unicode_width::UnicodeWidthChar;

/// How the panel is being shown, for its title and border
#[derive(Debug, Clone, Copy, Default)]
pub struct PanelStatus {
    pub maximized: bool,
    pub suspended: Option<SuspendReason>,
}

/// Logs panel component
pub struct LogsPanel {
    /// Scroll state over wrapped rows (position, viewport, auto-follow)
    scroll: ScrollState,

    /// Wrapped rows of every sink line synced so far
    rows: VecDeque<LogLine>,

    /// Row count of each synced sink line, oldest first
    row_counts: VecDeque<usize>,

    /// Sink sequence number of the oldest wrapped line
    first: u64,

    /// Sink append count at the last sync
    fence: u64,

    /// Width the rows were wrapped to
    width: usize,
}

impl LogsPanel {
    /// Create a new logs panel with auto-follow enabled
    pub fn new() -> Self {
        Self {
            scroll: ScrollState::new(),
            rows: VecDeque::new(),
            row_counts: VecDeque::new(),
            first: 0,
            fence: 0,
            width: 0,
        }
    }

    /// Sync wrapped rows and scroll state with the sink (call each frame)
    ///
    /// Only lines appended since the last sync are wrapped; a width change
    /// rewraps everything. Rows of lines evicted since the last sync shift a
    /// scrolled-back view so the user keeps reading the same rows.
    pub fn sync(&mut self, sink: &BoundedSink<LogLine>, width: usize, viewport_height: usize) {
        let width = width.max(1);
        if width != self.width {
            self.width = width;
            self.rows.clear();
            self.row_counts.clear();
            for line in sink.iter() {
                self.push_wrapped(line);
            }
            self.first = sink.evicted();
            self.fence = sink.appended();
        }

        // Drop rows of evicted lines
        let mut removed = 0;
        while self.first < sink.evicted() {
            let Some(count) = self.row_counts.pop_front() else {
                break;
            };
            self.rows.drain(..count);
            removed += count;
            self.first += 1;
        }
        // Lines evicted before they were ever wrapped
        self.first = self.first.max(sink.evicted());
        self.fence = self.fence.max(self.first);

        for line in sink.since(self.fence) {
            self.push_wrapped(line);
        }
        self.fence = sink.appended();

        self.scroll.shift_for_removed(removed);
        self.scroll.update_dimensions(self.rows.len(), viewport_height);
    }

    fn push_wrapped(&mut self, line: &LogLine) {
        let rows = wrap_line(line, self.width);
        self.row_counts.push_back(rows.len());
        self.rows.extend(rows);
    }

    /// Content lines in the last synced viewport
    pub fn viewport_height(&self) -> usize {
        self.scroll.viewport()
    }

    /// Render the visible window of the synced rows
    pub fn render_rows(&self, f: &mut Frame, area: Rect, theme: &Theme, status: PanelStatus) {
        let (start, end) = self.scroll.visible_range();
        let end = end.min(self.rows.len());
        let lines: Vec<LogLine> = self.rows.range(start.min(end)..end).cloned().collect();

        let border_color = if status.maximized {
            theme.highlight
        } else {
            theme.panel_logs
        };

        // Show scroll/maximize indicator in title
        let title = match (status.maximized, self.is_auto_following()) {
            (true, true) => " Logs [maximized] ",
            (true, false) => " Logs [maximized] [scroll] ",
            (false, true) => " Logs ",
            (false, false) => " Logs [scroll] ",
        };

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(border_color))
            .title(title);

        if let Some(reason) = status.suspended {
            block = block.title_top(
                Line::styled(
                    format!(" paused: {} ", reason.as_str()),
                    Style::default().fg(theme.warning),
                )
                .right_aligned(),
            );
        }

        let paragraph = Paragraph::new(Text::from(lines))
            .style(Style::default().fg(theme.foreground))
            .block(block);

        f.render_widget(paragraph, area);

        // Render scrollbar if content overflows
        let style = if status.maximized {
            ScrollbarStyle::Arrows
        } else {
            ScrollbarStyle::Minimal
        };
        render_scrollbar(f, area, self.scroll_state(), style);
    }
}

/// Split `line` into rows at most `width` display cells wide
///
/// Breaks between characters, keeping each span's style. A character wider
/// than the remaining room starts the next row.
pub fn wrap_line(line: &LogLine, width: usize) -> Vec<LogLine> {
    let width = width.max(1);
    if line.width() <= width {
        return vec![line.clone()];
    }

    let finish = |spans: Vec<Span<'static>>| {
        let row = Line::from(spans).style(line.style);
        match line.alignment {
            Some(alignment) => row.alignment(alignment),
            None => row,
        }
    };

    let mut rows = Vec::new();
    let mut spans: Vec<Span<'static>> = Vec::new();
    let mut used = 0;
    for span in &line.spans {
        let mut chunk = String::new();
        for ch in span.content.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width && used > 0 {
                if !chunk.is_empty() {
                    spans.push(Span::styled(std::mem::take(&mut chunk), span.style));
                }
                rows.push(finish(std::mem::take(&mut spans)));
                used = 0;
            }
            chunk.push(ch);
            used += w;
        }
        if !chunk.is_empty() {
            spans.push(Span::styled(chunk, span.style));
        }
    }
    if !spans.is_empty() {
        rows.push(finish(spans));
    }
    rows
}

impl Default for LogsPanel {
    fn default() -> Self {
        Self::new()
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait Implementations
// ═══════════════════════════════════════════════════════════════════════════

impl Scrollable for LogsPanel {
    fn scroll_state(&self) -> &ScrollState {
        &self.scroll
    }

    fn scroll_state_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }
}

impl Interactive for LogsPanel {
    fn handle_key(&mut self, key: KeyEvent) -> Handled {
        self.handle_scroll_keys(key)
    }

    fn focus_hint(&self) -> Option<&'static str> {
        Some("↑↓/jk:scroll  PgUp/PgDn  Home/End")
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Render Entry Point
// ═══════════════════════════════════════════════════════════════════════════

use crate::tui::app::App;

/// Render the logs panel using the component owned by App
///
/// Syncs the panel with the rotator's sink, then draws it.
pub fn render(f: &mut Frame, area: Rect, app: &mut App) {
    let width = area.width.saturating_sub(2) as usize;
    let height = area.height.saturating_sub(2) as usize;
    app.logs_panel.sync(app.rotator.sink(), width, height);

    let status = PanelStatus {
        maximized: app.maximized,
        suspended: app.last_suspension,
    };
    app.logs_panel.render_rows(f, area, &app.theme, status);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rotator::render::plain_text;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::style::Color;

    fn sink_with(lines: usize, capacity: usize) -> BoundedSink<LogLine> {
        let mut sink = BoundedSink::new(capacity);
        sink.extend((0..lines).map(|i| Line::from(format!("line {i}"))));
        sink
    }

    fn row_text(panel: &LogsPanel, row: usize) -> Option<String> {
        panel.rows.get(row).map(plain_text)
    }

    #[test]
    fn test_sync_follows_bottom() {
        let mut panel = LogsPanel::new();
        let sink = sink_with(50, 100);

        panel.sync(&sink, 40, 10);
        assert_eq!(panel.scroll_state().offset(), 40);
        assert_eq!(panel.viewport_height(), 10);
        assert!(panel.is_auto_following());
    }

    #[test]
    fn test_scrolled_view_survives_eviction() {
        let mut panel = LogsPanel::new();
        let mut sink = sink_with(100, 100);
        panel.sync(&sink, 40, 10);

        panel.handle_key(KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE));
        assert_eq!(panel.scroll_state().offset(), 80);
        let first_visible = row_text(&panel, 80);

        // Six new lines evict six old ones
        sink.extend((0..6).map(|i| Line::from(format!("new {i}"))));
        panel.sync(&sink, 40, 10);

        assert_eq!(panel.scroll_state().offset(), 74);
        assert_eq!(row_text(&panel, 74), first_visible);
        assert_eq!(panel.rows.len(), 100);
    }

    #[test]
    fn test_long_lines_wrap_into_rows() {
        let mut panel = LogsPanel::new();
        let mut sink = BoundedSink::new(10);
        sink.push(Line::from("abcdefghij"));
        sink.push(Line::from("short"));

        panel.sync(&sink, 4, 10);
        assert_eq!(panel.rows.len(), 4);
        assert_eq!(row_text(&panel, 0).as_deref(), Some("abcd"));
        assert_eq!(row_text(&panel, 2).as_deref(), Some("ij"));
        assert_eq!(row_text(&panel, 3).as_deref(), Some("short"));

        // Wider panel rewraps everything
        panel.sync(&sink, 20, 10);
        assert_eq!(panel.rows.len(), 2);
    }

    #[test]
    fn test_eviction_drops_all_rows_of_a_line() {
        let mut panel = LogsPanel::new();
        let mut sink = BoundedSink::new(2);
        sink.push(Line::from("abcdefghij"));
        sink.push(Line::from("kl"));
        panel.sync(&sink, 4, 2);
        assert_eq!(panel.rows.len(), 4);

        sink.push(Line::from("mn"));
        panel.sync(&sink, 4, 2);
        assert_eq!(panel.rows.len(), 2);
        assert_eq!(row_text(&panel, 0).as_deref(), Some("kl"));
    }

    #[test]
    fn test_lines_evicted_between_syncs_are_skipped() {
        let mut panel = LogsPanel::new();
        let mut sink = sink_with(3, 3);
        panel.sync(&sink, 40, 10);

        sink.extend((0..5).map(|i| Line::from(format!("burst {i}"))));
        panel.sync(&sink, 40, 10);

        assert_eq!(panel.rows.len(), 3);
        assert_eq!(row_text(&panel, 0).as_deref(), Some("burst 2"));
    }

    #[test]
    fn test_wrap_keeps_span_styles() {
        let line = Line::from(vec![
            Span::styled("abc", Style::default().fg(Color::Red)),
            Span::styled("def", Style::default().fg(Color::Blue)),
        ]);
        let rows = wrap_line(&line, 4);

        assert_eq!(rows.len(), 2);
        assert_eq!(plain_text(&rows[0]), "abcd");
        assert_eq!(rows[0].spans[1].style.fg, Some(Color::Blue));
        assert_eq!(plain_text(&rows[1]), "ef");
        assert_eq!(rows[1].spans[0].style.fg, Some(Color::Blue));
    }

    #[test]
    fn test_wide_chars_never_split_a_row_past_width() {
        let rows = wrap_line(&Line::from("László 游泳"), 5);
        for row in &rows {
            assert!(row.width() <= 5, "{row:?}");
        }
        let joined: String = rows.iter().map(plain_text).collect();
        assert_eq!(joined, "László 游泳");
    }

    #[test]
    fn test_scroll_keys_are_handled() {
        let mut panel = LogsPanel::new();
        panel.sync(&sink_with(30, 100), 40, 10);

        for code in [
            KeyCode::Up,
            KeyCode::Char('k'),
            KeyCode::Down,
            KeyCode::Char('j'),
            KeyCode::Home,
            KeyCode::End,
            KeyCode::PageUp,
            KeyCode::PageDown,
        ] {
            let handled = panel.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
            assert!(handled.was_handled(), "{code:?}");
        }

        let other = panel.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE));
        assert_eq!(other, Handled::No);
    }

    #[test]
    fn test_zero_height_panel_has_no_viewport() {
        let mut panel = LogsPanel::new();
        panel.sync(&sink_with(5, 100), 40, 0);
        assert_eq!(panel.viewport_height(), 0);
    }
}
