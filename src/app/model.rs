//! The complete editor state.
//!
//! One `Model` per session, owned by the event loop and threaded through
//! `update`. No module-level state anywhere.

use std::path::PathBuf;

use crate::buffer::TextBuffer;
use crate::highlight;
use crate::ui::CursorViewport;

/// Input mode. Keystrokes are routed differently in each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys navigate and start chords; nothing mutates the buffer.
    #[default]
    Navigation,
    /// Printable keys insert into the buffer.
    Insertion,
    /// A command chord is being typed into the status row.
    ChordEntry,
}

/// A search match to emphasize for exactly one render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FindHighlight {
    pub row: usize,
    pub col: usize,
    pub len: usize,
}

/// The complete application state.
#[derive(Debug, Default)]
pub struct Model {
    pub buffer: TextBuffer,
    pub viewport: CursorViewport,
    pub file_path: PathBuf,
    pub mode: Mode,
    /// Chord text including the trigger character, shown verbatim in the
    /// status row while in `ChordEntry`.
    pub chord: String,
    /// Transient status text; displaces the file summary until cleared.
    pub status_message: Option<String>,
    /// Consumed by the next render pass.
    pub find_highlight: Option<FindHighlight>,
    /// Fixed at session start from the file extension; switching the
    /// active file mid-session does not re-derive it.
    pub highlight_enabled: bool,
    pub should_quit: bool,
}

impl Model {
    /// Build the session state for a loaded file.
    pub fn new<S: AsRef<str>>(
        file_path: PathBuf,
        lines: &[S],
        width: usize,
        height: usize,
    ) -> Self {
        let highlight_enabled = highlight::is_c_family(&file_path);
        Self {
            buffer: TextBuffer::from_lines(lines),
            viewport: CursorViewport::new(width, height),
            file_path,
            mode: Mode::Navigation,
            chord: String::new(),
            status_message: None,
            find_highlight: None,
            highlight_enabled,
            should_quit: false,
        }
    }

    /// Replace the buffer with another file's contents and return the
    /// cursor and scroll state to the origin. Mode and the highlight flag
    /// are left alone.
    pub fn switch_file<S: AsRef<str>>(&mut self, path: PathBuf, lines: &[S]) {
        self.buffer = TextBuffer::from_lines(lines);
        self.file_path = path;
        self.viewport.place(0, 0);
        self.viewport.row_offset = 0;
        self.viewport.col_offset = 0;
        self.find_highlight = None;
    }

    /// File name shown in the status row.
    pub fn display_name(&self) -> String {
        self.file_path.file_name().map_or_else(
            || self.file_path.display().to_string(),
            |n| n.to_string_lossy().into_owned(),
        )
    }
}
