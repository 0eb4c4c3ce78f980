// Side panel component
//
// Three static text areas stacked 1:1:2. Placeholders for content the log
// panel demo doesn't drive.

use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// (title, body, height share)
const AREAS: [(&str, &str, u32); 3] = [
    (" User Stats ", "This text area will present user stats.", 1),
    (
        " Card Description ",
        "This text area will show the card description.",
        1,
    ),
    (" Card Display ", "This area will display card ASCII art.", 2),
];

pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    let total: u32 = AREAS.iter().map(|(_, _, share)| share).sum();
    let chunks = Layout::vertical(
        AREAS
            .iter()
            .map(|(_, _, share)| Constraint::Ratio(*share, total)),
    )
    .split(area);

    for ((title, body, _), chunk) in AREAS.iter().zip(chunks.iter()) {
        let paragraph = Paragraph::new(*body)
            .style(Style::default().fg(theme.muted))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(Style::default().fg(theme.border))
                    .title(*title),
            );
        f.render_widget(paragraph, *chunk);
    }
}
