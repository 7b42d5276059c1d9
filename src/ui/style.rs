//! Color definitions.
//!
//! Uses semantic ANSI colors that respect the terminal's palette.

use ratatui::style::{Color, Modifier, Style};

use crate::highlight::SpanKind;

/// Style for a highlight span category.
pub fn span_style(kind: SpanKind) -> Style {
    match kind {
        SpanKind::Directive => Style::default().fg(Color::Red),
        SpanKind::Comment => Style::default().fg(Color::Cyan),
        SpanKind::Str => Style::default().fg(Color::Green),
        SpanKind::Keyword => Style::default().fg(Color::Yellow),
        SpanKind::Number => Style::default().fg(Color::Magenta),
        SpanKind::Bracket(level) => Style::default().fg(bracket_color(level)),
    }
}

// Nesting palette cycles red, yellow, green.
const fn bracket_color(level: u8) -> Color {
    match level % 3 {
        0 => Color::Red,
        1 => Color::Yellow,
        _ => Color::Green,
    }
}

/// Line-number gutter.
pub fn gutter_style() -> Style {
    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
}

/// Transient status messages.
pub fn message_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}

/// The one-render search-match emphasis.
pub fn find_style() -> Style {
    Style::default().bg(Color::Cyan).fg(Color::Black)
}
