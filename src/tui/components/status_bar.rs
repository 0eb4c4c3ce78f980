// Status bar component
//
// Renders rotation state at the bottom: uptime, tick counter, sink fill,
// running/paused, key hints.

use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use crate::tui::traits::Interactive;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Status line text for the given width
///
/// Adapts to terminal width:
/// - Wide: Full format with labels and panel key hints
/// - Narrow: Compact format
pub fn status_text(app: &App, width: u16) -> String {
    let sink = app.rotator.sink();
    let state = match app.last_suspension {
        Some(reason) => format!("paused ({})", reason.as_str()),
        None => "running".to_string(),
    };

    if !Breakpoint::from_width(width).at_least(Breakpoint::Wide) {
        return format!(
            " {} │ #{} │ {}/{} │ {} │ ?:help",
            app.uptime(),
            app.rotator.counter(),
            sink.len(),
            sink.capacity(),
            state,
        );
    }

    let hint = app.logs_panel.focus_hint().unwrap_or_default();
    format!(
        " {} │ tick {} │ {}/{} lines ({} dropped) │ {} │ {}  m:maximize  ?:help  q:quit",
        app.uptime(),
        app.rotator.counter(),
        sink.len(),
        sink.capacity(),
        sink.evicted(),
        state,
        hint,
    )
}

/// Render the status bar
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let status = Paragraph::new(status_text(app, area.width))
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
