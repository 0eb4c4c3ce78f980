// Color palette for the TUI and the rendered log content
//
// One fixed palette (Gruvbox Dark). Colors are named by what they paint, so
// render code never hardcodes RGB values.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Complete resolved theme ready for use in the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // ─── UI Element Colors ───────────────────────────────────
    pub border: Color,
    pub highlight: Color, // Focused/maximized border
    pub title: Color,
    pub status_bar: Color,
    pub panel_logs: Color,

    // ─── Button Variants ─────────────────────────────────────
    pub success: Color,
    pub primary: Color,
    pub warning: Color,
    pub error: Color,

    // ─── Syntax Colors ───────────────────────────────────────
    pub keyword: Color,
    pub string: Color,
    pub comment: Color,
    pub number: Color,
    pub type_name: Color,
    pub punctuation: Color,

    pub border_type: BorderType,
}

impl Theme {
    /// Gruvbox Dark - Retro groove color scheme
    pub fn gruvbox_dark() -> Self {
        Self {
            name: "Gruvbox Dark".to_string(),
            background: Color::Rgb(0x28, 0x28, 0x28),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            muted: Color::Rgb(0x92, 0x83, 0x74),
            border: Color::Rgb(0x66, 0x5c, 0x54),
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),
            title: Color::Rgb(0x68, 0x9d, 0x6a),
            status_bar: Color::Rgb(0xa8, 0x99, 0x84),
            panel_logs: Color::Rgb(0xb8, 0xbb, 0x26),
            success: Color::Rgb(0x98, 0x97, 0x1a),
            primary: Color::Rgb(0x45, 0x85, 0x88),
            warning: Color::Rgb(0xd7, 0x99, 0x21),
            error: Color::Rgb(0xfb, 0x49, 0x34),
            keyword: Color::Rgb(0xfb, 0x49, 0x34),
            string: Color::Rgb(0xb8, 0xbb, 0x26),
            comment: Color::Rgb(0x92, 0x83, 0x74),
            number: Color::Rgb(0xd3, 0x86, 0x9b),
            type_name: Color::Rgb(0xfa, 0xbd, 0x2f),
            punctuation: Color::Rgb(0xa8, 0x99, 0x84),
            border_type: BorderType::Rounded,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::gruvbox_dark()
    }
}
