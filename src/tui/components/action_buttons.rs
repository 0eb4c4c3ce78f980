// Action buttons component
//
// A row of four static buttons, one per color variant. They are drawn but
// carry no actions.

use crate::theme::Theme;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Height of the button row, borders included
pub const HEIGHT: u16 = 3;

/// Button labels with their color variant
pub fn buttons(theme: &Theme) -> [(&'static str, Color); 4] {
    [
        ("Strength", theme.success),
        ("Dexterity", theme.primary),
        ("Intelligence", theme.warning),
        ("Charisma", theme.error),
    ]
}

pub fn render(f: &mut Frame, area: Rect, theme: &Theme) {
    let buttons = buttons(theme);
    let chunks = Layout::horizontal([Constraint::Ratio(1, buttons.len() as u32); 4]).split(area);

    for ((label, color), chunk) in buttons.iter().zip(chunks.iter()) {
        let button = Paragraph::new(Line::from(*label).centered())
            .style(
                Style::default()
                    .fg(*color)
                    .add_modifier(Modifier::BOLD),
            )
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(theme.border_type)
                    .border_style(Style::default().fg(*color)),
            );
        f.render_widget(button, *chunk);
    }
}
