//! Cursor and scroll state for the text area.
//!
//! The viewport tracks the cursor in buffer coordinates plus the row and
//! column scroll offsets. It also remembers a "snap" column: the column
//! vertical movement tries to return to after passing through shorter
//! lines. Horizontal movement and edits collapse the snap to the actual
//! cursor column.

use crate::buffer::TextBuffer;

/// Cursor position, snap column and scroll offsets for one text window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorViewport {
    /// Total terminal width in columns.
    pub width: usize,
    /// Text rows available (terminal height minus the status row).
    pub height: usize,
    pub row: usize,
    pub col: usize,
    pub snap_col: usize,
    pub row_offset: usize,
    pub col_offset: usize,
}

impl Default for CursorViewport {
    fn default() -> Self {
        Self::new(80, 24)
    }
}

impl CursorViewport {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height: height.saturating_sub(1),
            row: 0,
            col: 0,
            snap_col: 0,
            row_offset: 0,
            col_offset: 0,
        }
    }

    /// Width of the line-number gutter for a buffer of `line_count` lines.
    ///
    /// Recomputed from the current line count on every call; crossing a
    /// power of ten reflows the text area on the next redraw.
    pub fn gutter_width(line_count: usize) -> usize {
        let mut digits = 1;
        let mut n = line_count;
        while n >= 10 {
            digits += 1;
            n /= 10;
        }
        digits
    }

    /// Columns left for text after the gutter and its trailing space.
    pub fn text_width(&self, line_count: usize) -> usize {
        self.width
            .saturating_sub(Self::gutter_width(line_count) + 1)
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height.saturating_sub(1);
    }

    /// Place the cursor at an exact position, collapsing the snap column.
    pub fn place(&mut self, row: usize, col: usize) {
        self.row = row;
        self.col = col;
        self.snap_col = col;
    }

    /// Scroll the minimum amount needed to bring the cursor on screen.
    pub fn ensure_visible(&mut self, buffer: &TextBuffer) {
        if self.row < self.row_offset {
            self.row_offset = self.row;
        } else if self.height > 0 && self.row >= self.row_offset + self.height {
            self.row_offset = self.row + 1 - self.height;
        }
        let text_width = self.text_width(buffer.line_count());
        if self.col < self.col_offset {
            self.col_offset = self.col;
        } else if text_width > 0 && self.col >= self.col_offset + text_width {
            self.col_offset = self.col + 1 - text_width;
        }
    }

    /// Center the cursor row in the window. Used by jumps that land
    /// outside the visible range.
    pub fn center_on_cursor(&mut self) {
        self.row_offset = self.row.saturating_sub(self.height / 2);
    }

    /// Whether the cursor row currently falls inside the visible rows.
    pub fn cursor_row_visible(&self) -> bool {
        self.row >= self.row_offset && self.row < self.row_offset + self.height
    }

    /// Up one row, returning to the snap column where the line allows.
    /// On the first row a nonzero column collapses to the line start;
    /// at the origin the snap column resets instead.
    pub fn move_up(&mut self, buffer: &TextBuffer) {
        if self.row > 0 {
            self.row -= 1;
            self.col = buffer.clamp_col(self.row, self.snap_col.min(buffer.line_len(self.row)));
        } else if self.col > 0 {
            self.col = 0;
        } else {
            self.snap_col = self.col;
        }
    }

    /// Down one row, mirroring `move_up`: on the last row a cursor short
    /// of the line end jumps to it, and at the very end the snap column
    /// resets.
    pub fn move_down(&mut self, buffer: &TextBuffer) {
        let last = buffer.line_count().saturating_sub(1);
        if self.row < last {
            self.row += 1;
            self.col = buffer.clamp_col(self.row, self.snap_col.min(buffer.line_len(self.row)));
        } else if self.col < buffer.line_len(self.row) {
            self.col = buffer.line_len(self.row);
        } else {
            self.snap_col = self.col;
        }
    }

    /// Left one column, wrapping to the end of the previous line.
    pub fn move_left(&mut self, buffer: &TextBuffer) {
        if self.col > 0 {
            self.col = buffer.clamp_col(self.row, self.col - 1);
        } else if self.row > 0 {
            self.row -= 1;
            self.col = buffer.line_len(self.row);
        }
        self.snap_col = self.col;
    }

    /// Right one column, wrapping to the start of the next line.
    pub fn move_right(&mut self, buffer: &TextBuffer) {
        if self.col < buffer.line_len(self.row) {
            let line = buffer.line_at(self.row).unwrap_or_default();
            let next = line[self.col..]
                .chars()
                .next()
                .map_or(1, char::len_utf8);
            self.col += next;
        } else if self.row + 1 < buffer.line_count() {
            self.row += 1;
            self.col = 0;
        }
        self.snap_col = self.col;
    }

    pub fn line_start(&mut self) {
        self.col = 0;
        self.snap_col = 0;
    }

    pub fn line_end(&mut self, buffer: &TextBuffer) {
        self.col = buffer.line_len(self.row);
        self.snap_col = self.col;
    }
}
