//! Rendering content blocks into styled log lines
//!
//! The sink stores `Line<'static>` values, so everything here produces owned
//! spans. Colors come from the [`Theme`]; no widget state is involved.

use super::content::ContentBlock;
use crate::theme::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthStr;

const RUST_KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while",
];

/// A styled line as stored by the log panel
pub type LogLine = Line<'static>;

/// Turns content blocks into the line type a sink stores
pub trait Renderer {
    type Line;

    /// Lines appended for one produced tick (caption first)
    fn render(&self, tick: u64, block: &ContentBlock) -> Vec<Self::Line>;

    /// A single free-standing line of text
    fn text(&self, text: &str) -> Self::Line;
}

/// Themed renderer used by both hosts
#[derive(Debug, Clone, Default)]
pub struct StyledRenderer {
    theme: Theme,
}

impl StyledRenderer {
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }
}

impl Renderer for StyledRenderer {
    type Line = LogLine;

    fn render(&self, _tick: u64, block: &ContentBlock) -> Vec<LogLine> {
        let mut lines = vec![render_caption(block.caption(), &self.theme)];
        lines.extend(render_block(block, &self.theme));
        lines
    }

    fn text(&self, text: &str) -> LogLine {
        Line::from(Span::styled(
            text.to_string(),
            Style::default().fg(self.theme.foreground),
        ))
    }
}

/// Caption written above each block
pub fn render_caption(caption: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        caption.to_string(),
        Style::default()
            .fg(theme.title)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Render a block into the lines appended below its caption
pub fn render_block(block: &ContentBlock, theme: &Theme) -> Vec<Line<'static>> {
    match block {
        ContentBlock::CodeSample { text, language } => render_code(text, language, theme),
        ContentBlock::Table { header, rows } => render_table(header, rows, theme),
        ContentBlock::ErrorTrace { message, frames } => render_trace(message, frames, theme),
    }
}

/// Concatenated span contents of a line, without styling
pub fn plain_text(line: &Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Code
// ═══════════════════════════════════════════════════════════════════════════

fn render_code(text: &str, language: &str, theme: &Theme) -> Vec<Line<'static>> {
    let line_count = text.lines().count();
    let gutter_width = line_count.to_string().len();
    let gutter_style = Style::default().fg(theme.muted);

    text.lines()
        .enumerate()
        .map(|(idx, line)| {
            let mut spans = vec![Span::styled(
                format!("{:>width$} ", idx + 1, width = gutter_width),
                gutter_style,
            )];
            if language == "rust" {
                spans.extend(highlight_rust_line(line, theme));
            } else {
                spans.push(Span::styled(
                    line.to_string(),
                    Style::default().fg(theme.foreground),
                ));
            }
            Line::from(spans)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Keyword,
    TypeName,
    Ident,
    String,
    Number,
    Comment,
    Punctuation,
    Whitespace,
}

/// Split one line of Rust source into styled spans
///
/// Line-local: block comments and multi-line strings are not tracked, which
/// is fine for the fixed sample.
fn highlight_rust_line(line: &str, theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    let mut chars = line.char_indices().peekable();

    let style_for = |token: Token| match token {
        Token::Keyword => Style::default().fg(theme.keyword),
        Token::TypeName => Style::default().fg(theme.type_name),
        Token::Ident => Style::default().fg(theme.foreground),
        Token::String => Style::default().fg(theme.string),
        Token::Number => Style::default().fg(theme.number),
        Token::Comment => Style::default()
            .fg(theme.comment)
            .add_modifier(Modifier::ITALIC),
        Token::Punctuation => Style::default().fg(theme.punctuation),
        Token::Whitespace => Style::default(),
    };

    while let Some((start, ch)) = chars.next() {
        let (token, end) = if ch == '/' && line[start..].starts_with("//") {
            // Comment runs to end of line
            while chars.next().is_some() {}
            (Token::Comment, line.len())
        } else if ch == '"' {
            let mut end = line.len();
            let mut escaped = false;
            for (idx, c) in chars.by_ref() {
                if escaped {
                    escaped = false;
                } else if c == '\\' {
                    escaped = true;
                } else if c == '"' {
                    end = idx + c.len_utf8();
                    break;
                }
            }
            (Token::String, end)
        } else if ch.is_ascii_digit() {
            let end = take_while(&mut chars, line, |c| {
                c.is_ascii_alphanumeric() || c == '_'
            });
            (Token::Number, end)
        } else if ch.is_alphabetic() || ch == '_' {
            let end = take_while(&mut chars, line, |c| c.is_alphanumeric() || c == '_');
            let word = &line[start..end];
            let token = if RUST_KEYWORDS.contains(&word) {
                Token::Keyword
            } else if word.starts_with(char::is_uppercase) {
                Token::TypeName
            } else {
                Token::Ident
            };
            (token, end)
        } else if ch.is_whitespace() {
            (Token::Whitespace, take_while(&mut chars, line, char::is_whitespace))
        } else {
            (Token::Punctuation, start + ch.len_utf8())
        };

        spans.push(Span::styled(line[start..end].to_string(), style_for(token)));
    }

    spans
}

/// Advance while `pred` holds; returns the byte offset where the run ends
fn take_while(
    chars: &mut std::iter::Peekable<std::str::CharIndices<'_>>,
    line: &str,
    pred: impl Fn(char) -> bool,
) -> usize {
    while let Some(&(idx, c)) = chars.peek() {
        if !pred(c) {
            return idx;
        }
        chars.next();
    }
    line.len()
}

// ═══════════════════════════════════════════════════════════════════════════
// Table
// ═══════════════════════════════════════════════════════════════════════════

fn render_table(header: &[String], rows: &[Vec<String>], theme: &Theme) -> Vec<Line<'static>> {
    // Column widths in display cells, not bytes: names like "László" are wider
    // in bytes than on screen
    let mut widths: Vec<usize> = header.iter().map(|cell| cell.width()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(idx) {
                *width = (*width).max(cell.width());
            }
        }
    }

    let border = Style::default().fg(theme.border);
    let header_style = Style::default()
        .fg(theme.foreground)
        .add_modifier(Modifier::BOLD);
    let cell_style = Style::default().fg(theme.foreground);

    let rule = |left: &str, mid: &str, right: &str, fill: &str| -> Line<'static> {
        let segments: Vec<String> = widths.iter().map(|w| fill.repeat(w + 2)).collect();
        Line::from(Span::styled(
            format!("{}{}{}", left, segments.join(mid), right),
            border,
        ))
    };

    let row_line = |cells: &[String], edge: &str, style: Style| -> Line<'static> {
        let mut spans = Vec::with_capacity(widths.len() * 2 + 1);
        for (idx, width) in widths.iter().enumerate() {
            let cell = cells.get(idx).map(String::as_str).unwrap_or("");
            let pad = width.saturating_sub(cell.width());
            spans.push(Span::styled(format!("{} ", edge), border));
            spans.push(Span::styled(format!("{}{} ", cell, " ".repeat(pad)), style));
        }
        spans.push(Span::styled(edge.to_string(), border));
        Line::from(spans)
    };

    let mut lines = Vec::with_capacity(rows.len() + 4);
    lines.push(rule("┏", "┳", "┓", "━"));
    lines.push(row_line(header, "┃", header_style));
    lines.push(rule("┡", "╇", "┩", "━"));
    for row in rows {
        lines.push(row_line(row, "│", cell_style));
    }
    lines.push(rule("└", "┴", "┘", "─"));
    lines
}

// ═══════════════════════════════════════════════════════════════════════════
// Trace
// ═══════════════════════════════════════════════════════════════════════════

fn render_trace(message: &str, frames: &[String], theme: &Theme) -> Vec<Line<'static>> {
    let error = Style::default().fg(theme.error);

    let mut lines = Vec::with_capacity(frames.len() + 2);
    lines.push(Line::from(Span::styled(
        "Traceback (most recent call last):",
        error.add_modifier(Modifier::BOLD),
    )));
    for frame in frames {
        lines.push(Line::from(vec![
            Span::styled("  ❱ ", error),
            Span::styled(frame.clone(), Style::default().fg(theme.foreground)),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("GenerationFault: ", error.add_modifier(Modifier::BOLD)),
        Span::styled(message.to_string(), error),
    ]));
    lines
}
