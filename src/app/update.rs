use crate::app::Model;
use crate::app::model::{FindHighlight, Mode};
use crate::command::{self, Command, LineTarget};

/// All possible events and actions in the application.
///
/// These represent user input and terminal events, already routed by the
/// active input mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    // Navigation
    /// Move cursor up one row
    MoveUp,
    /// Move cursor down one row
    MoveDown,
    /// Move cursor left one column, wrapping to the previous line end
    MoveLeft,
    /// Move cursor right one column, wrapping to the next line start
    MoveRight,
    /// Jump to the start of the current line
    LineStart,
    /// Jump to the end of the current line
    LineEnd,

    // Mode switching
    /// Enter insertion mode from navigation
    EnterInsert,
    /// Return to navigation mode, abandoning any chord in progress
    Escape,

    // Editing
    /// Insert a printable character at the cursor
    InsertChar(char),
    /// Insert an indentation stop at the cursor
    InsertTab,
    /// Split the current line at the cursor (Enter)
    SplitLine,
    /// Delete the character before the cursor, joining lines at column 0
    DeleteBack,

    // Chords
    /// Begin chord entry with the trigger character
    StartChord(char),
    /// Append a printable character to the chord in progress
    ChordChar(char),
    /// Remove the last chord character; cancels when only the trigger remains
    ChordBackspace,
    /// Commit the chord, carrying its full text including the trigger
    CommitChord(String),

    // Window
    /// Terminal resized
    Resize(u16, u16),
}

/// Pure function that updates the model based on a message.
///
/// This is the core of TEA - all state transitions happen here.
/// No side effects should occur in this function; commands that touch the
/// file system are executed afterwards by the effects layer.
pub fn update(mut model: Model, msg: Message) -> Model {
    match msg {
        // Navigation
        Message::MoveUp => {
            model.viewport.move_up(&model.buffer);
            model.viewport.ensure_visible(&model.buffer);
        }
        Message::MoveDown => {
            model.viewport.move_down(&model.buffer);
            model.viewport.ensure_visible(&model.buffer);
        }
        Message::MoveLeft => {
            model.viewport.move_left(&model.buffer);
            model.viewport.ensure_visible(&model.buffer);
        }
        Message::MoveRight => {
            model.viewport.move_right(&model.buffer);
            model.viewport.ensure_visible(&model.buffer);
        }
        Message::LineStart => {
            model.viewport.line_start();
            model.viewport.ensure_visible(&model.buffer);
        }
        Message::LineEnd => {
            model.viewport.line_end(&model.buffer);
            model.viewport.ensure_visible(&model.buffer);
        }

        // Mode switching
        Message::EnterInsert => {
            model.mode = Mode::Insertion;
            model.status_message = Some("INSERT - PRESS ESC TO EXIT".to_string());
        }
        Message::Escape => {
            model.mode = Mode::Navigation;
            model.chord.clear();
            model.status_message = None;
        }

        // Editing
        Message::InsertChar(ch) => {
            let (row, col) = model
                .buffer
                .insert_char(model.viewport.row, model.viewport.col, ch);
            model.viewport.place(row, col);
            model.viewport.ensure_visible(&model.buffer);
        }
        Message::InsertTab => {
            let (row, col) = model
                .buffer
                .insert_tab(model.viewport.row, model.viewport.col);
            model.viewport.place(row, col);
            model.viewport.ensure_visible(&model.buffer);
        }
        Message::SplitLine => {
            let (row, col) = model
                .buffer
                .split_line(model.viewport.row, model.viewport.col);
            model.viewport.place(row, col);
            model.viewport.ensure_visible(&model.buffer);
        }
        Message::DeleteBack => {
            if let Some((row, col)) = model
                .buffer
                .delete_before(model.viewport.row, model.viewport.col)
            {
                model.viewport.place(row, col);
                model.viewport.ensure_visible(&model.buffer);
            }
        }

        // Chords
        Message::StartChord(trigger) => {
            model.mode = Mode::ChordEntry;
            model.chord.clear();
            model.chord.push(trigger);
        }
        Message::ChordChar(ch) => {
            model.chord.push(ch);
        }
        Message::ChordBackspace => {
            if model.chord.len() > 1 {
                model.chord.pop();
            } else {
                model.chord.clear();
                model.mode = Mode::Navigation;
            }
        }
        Message::CommitChord(chord) => {
            model.chord.clear();
            model.mode = Mode::Navigation;
            apply_command(&mut model, &chord);
        }

        // Window
        Message::Resize(width, height) => {
            model
                .viewport
                .resize(usize::from(width), usize::from(height));
            model.viewport.ensure_visible(&model.buffer);
        }
    }

    model
}

/// Execute the pure part of a committed chord. File-store commands are
/// recognized here only enough to leave them for the effects layer.
fn apply_command(model: &mut Model, chord: &str) {
    match command::parse(chord) {
        Command::Quit => model.should_quit = true,
        Command::EnterInsert => {
            model.mode = Mode::Insertion;
            model.status_message = Some("INSERT - PRESS ESC TO EXIT".to_string());
        }
        Command::JumpLine(target) => jump_to_line(model, target),
        Command::Find(needle) => run_find(model, &needle),
        Command::Unknown => {
            model.status_message = Some("UNKNOWN COMMAND".to_string());
        }
        Command::Save
        | Command::SaveQuit
        | Command::Create(_)
        | Command::CreateSwitch(_)
        | Command::SaveSwitch(_) => {}
    }
}

fn jump_to_line(model: &mut Model, target: LineTarget) {
    let line_count = model.buffer.line_count();
    let line = match target {
        LineTarget::Last => line_count,
        LineTarget::Absolute(n) => n.clamp(1, line_count),
    };
    model.viewport.place(line - 1, 0);
    if !model.viewport.cursor_row_visible() {
        model.viewport.center_on_cursor();
    }
    model.viewport.ensure_visible(&model.buffer);
}

/// Circular forward search starting on the line after the cursor and
/// wrapping through the whole document back to the cursor's own line.
fn run_find(model: &mut Model, needle: &str) {
    if needle.is_empty() {
        return;
    }
    let line_count = model.buffer.line_count();
    for i in 0..line_count {
        let row = (model.viewport.row + 1 + i) % line_count;
        let Some(line) = model.buffer.line_at(row) else {
            continue;
        };
        if let Some(col) = line.find(needle) {
            model.viewport.place(row, col);
            if !model.viewport.cursor_row_visible() {
                model.viewport.center_on_cursor();
            }
            model.viewport.ensure_visible(&model.buffer);
            model.find_highlight = Some(FindHighlight {
                row,
                col,
                len: needle.len(),
            });
            return;
        }
    }
    model.status_message = Some("NOT FOUND".to_string());
}
