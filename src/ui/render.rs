use ratatui::layout::Position;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::model::{FindHighlight, Mode};
use crate::app::Model;
use crate::highlight::{self, HighlightSpan};

use super::{CursorViewport, status, style};

/// Render the complete UI: the text area with its gutter, the status row,
/// and the terminal cursor.
///
/// Takes the model mutably because the find emphasis is consumed here -
/// it lives for exactly one frame.
pub fn render(model: &mut Model, frame: &mut Frame) {
    let area = frame.area();
    let text_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let status_area = Rect {
        y: area.y + area.height.saturating_sub(1),
        height: 1,
        ..area
    };

    let line_count = model.buffer.line_count();
    let gutter_width = CursorViewport::gutter_width(line_count);
    let start = model.viewport.row_offset;
    let end = (start + usize::from(text_area.height)).min(line_count);

    let spans = if model.highlight_enabled {
        highlight::highlight_rows(&model.buffer, start..end)
    } else {
        Vec::new()
    };
    let find = model.find_highlight.take();

    let col_offset = model.viewport.col_offset;
    let text_width = model.viewport.text_width(line_count);

    let mut content: Vec<Line> = Vec::with_capacity(end.saturating_sub(start));
    for row in start..end {
        let text = model.buffer.line_at(row).unwrap_or_default();
        content.push(render_row(
            row,
            &text,
            gutter_width,
            col_offset,
            text_width,
            &spans,
            find,
        ));
    }
    frame.render_widget(Paragraph::new(content), text_area);

    status::render_status_bar(model, frame, status_area);
    place_cursor(model, frame, gutter_width, status_area.y);
}

/// One buffer line as a styled row: gutter, then the clipped text with
/// per-character style resolution.
fn render_row(
    row: usize,
    text: &str,
    gutter_width: usize,
    col_offset: usize,
    text_width: usize,
    spans: &[HighlightSpan],
    find: Option<FindHighlight>,
) -> Line<'static> {
    let gutter = format!("{:>gutter_width$} ", row + 1);
    let mut parts = vec![Span::styled(gutter, style::gutter_style())];

    let mut run = String::new();
    let mut run_style: Option<Style> = None;
    let mut taken = 0;
    for (idx, ch) in text.char_indices() {
        if idx < col_offset {
            continue;
        }
        if taken >= text_width {
            break;
        }
        taken += 1;
        let char_style = style_at(row, idx, spans, find);
        if char_style == run_style {
            run.push(ch);
        } else {
            flush_run(&mut parts, &mut run, run_style);
            run_style = char_style;
            run.push(ch);
        }
    }
    flush_run(&mut parts, &mut run, run_style);
    Line::from(parts)
}

fn flush_run(parts: &mut Vec<Span<'static>>, run: &mut String, run_style: Option<Style>) {
    if run.is_empty() {
        return;
    }
    let text = std::mem::take(run);
    parts.push(match run_style {
        Some(s) => Span::styled(text, s),
        None => Span::raw(text),
    });
}

/// Resolve the style of one character. The find emphasis beats everything;
/// overlapping highlight spans resolve by the fixed category z-order.
fn style_at(
    row: usize,
    idx: usize,
    spans: &[HighlightSpan],
    find: Option<FindHighlight>,
) -> Option<Style> {
    if let Some(f) = find
        && f.row == row
        && idx >= f.col
        && idx < f.col + f.len
    {
        return Some(style::find_style());
    }
    spans
        .iter()
        .filter(|s| s.row == row && idx >= s.start && idx < s.start + s.len)
        .max_by_key(|s| s.kind.z_index())
        .map(|s| style::span_style(s.kind))
}

/// The terminal cursor sits in the text at the buffer position, except in
/// chord entry where it follows the chord text on the status row.
#[allow(clippy::cast_possible_truncation)]
fn place_cursor(model: &Model, frame: &mut Frame, gutter_width: usize, status_y: u16) {
    if model.mode == Mode::ChordEntry {
        let x = model.chord.chars().count() as u16;
        frame.set_cursor_position(Position::new(x, status_y));
        return;
    }
    let vp = &model.viewport;
    let x = (gutter_width + 1 + vp.col.saturating_sub(vp.col_offset)) as u16;
    let y = vp.row.saturating_sub(vp.row_offset) as u16;
    frame.set_cursor_position(Position::new(x, y));
}
