use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::{Mode, Model};

use super::style;

/// Bottom-row text, in priority order: the chord being typed, a pending
/// transient message, else the file summary.
pub fn status_text(model: &Model) -> String {
    if model.mode == Mode::ChordEntry {
        return model.chord.clone();
    }
    if let Some(message) = &model.status_message {
        return message.clone();
    }
    let modified = if model.buffer.is_dirty() {
        " (modified)"
    } else {
        ""
    };
    format!(
        "{} - {} lines{}",
        model.display_name(),
        model.buffer.line_count(),
        modified
    )
}

pub fn render_status_bar(model: &Model, frame: &mut Frame, area: Rect) {
    let styled = model.mode != Mode::ChordEntry && model.status_message.is_some();
    let bar_style = if styled {
        style::message_style()
    } else {
        Style::default()
    };
    let bar = Paragraph::new(status_text(model)).style(bar_style);
    frame.render_widget(bar, area);
}
