// Help overlay
//
// Keyboard shortcuts, drawn as a centered box over the panels. While it is
// open the logs panel counts as covered.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Calculate centered rect for the overlay
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// Render the help overlay
pub fn render(f: &mut Frame, app: &App) {
    // Styles
    let key_style = Style::default().fg(app.theme.highlight);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::BOLD);

    // Helper to create a keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Logs", header_style)),
        kb("↑/↓, k/j", "Scroll one line"),
        kb("PgUp/PgDn", "Scroll one page"),
        kb("Home/End", "Jump to start/end"),
        kb("Wheel", "Scroll"),
        Line::raw(""),
        Line::from(Span::styled("  View", header_style)),
        kb("m", "Toggle maximized logs"),
        kb("?", "Toggle this help"),
        kb("Esc", "Close help / restore"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("q, Ctrl-C", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  New content pauses while you scroll",
            Style::default().fg(app.theme.muted),
        )),
        Line::from(Span::styled(
            "  or while the logs are covered.",
            Style::default().fg(app.theme.muted),
        )),
        Line::raw(""),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name.clone(), key_style),
        ]),
    ]);

    // Calculate overlay size
    let width = 44;
    let height = 22;
    let area = centered_rect(width, height, f.area());

    // Clear the area behind the overlay
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_inside() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(44, 20, area), Rect::new(28, 10, 44, 20));

        let small = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_rect(44, 20, small), Rect::new(0, 0, 30, 10));
    }
}
