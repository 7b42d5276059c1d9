use ropey::Rope;

/// A text buffer backed by a rope data structure.
///
/// The buffer is an ordered sequence of lines, 0-indexed, and is never
/// empty: an empty document is exactly one zero-length line. Lines are
/// addressed by (row, byte column) pairs; callers clamp columns into range
/// before mutating. The stored text carries no trailing newline, so
/// [`TextBuffer::serialize`] is exactly "lines joined by `\n`".
pub struct TextBuffer {
    rope: Rope,
    dirty: bool,
}

impl TextBuffer {
    /// Create a buffer holding a single empty line.
    pub fn empty() -> Self {
        Self {
            rope: Rope::new(),
            dirty: false,
        }
    }

    /// Replace-wholesale constructor: build a buffer from a line sequence.
    ///
    /// An empty sequence yields the one-empty-line document.
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        let joined = lines
            .iter()
            .map(std::convert::AsRef::as_ref)
            .collect::<Vec<_>>()
            .join("\n");
        Self {
            rope: Rope::from_str(&joined),
            dirty: false,
        }
    }

    /// The persisted form: lines joined by a single `\n`, no trailing
    /// separator after the last line.
    pub fn serialize(&self) -> String {
        self.rope.to_string()
    }

    /// Whether the buffer has been modified since load or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of lines. Always at least 1.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Get the content of a line (without trailing newline).
    pub fn line_at(&self, row: usize) -> Option<String> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let line = self.rope.line(row);
        let s = line.to_string();
        Some(s.trim_end_matches('\n').to_string())
    }

    /// Length of a line in bytes (without trailing newline).
    pub fn line_len(&self, row: usize) -> usize {
        self.line_at(row).map_or(0, |s| s.len())
    }

    /// Floor a byte column to the nearest char boundary within the line.
    ///
    /// Columns are byte offsets; vertical moves clamp against raw lengths,
    /// which can land inside a multi-byte character.
    pub fn clamp_col(&self, row: usize, col: usize) -> usize {
        let Some(line) = self.line_at(row) else {
            return 0;
        };
        let mut col = col.min(line.len());
        while col > 0 && !line.is_char_boundary(col) {
            col -= 1;
        }
        col
    }

    /// Insert a character at (row, col). `col == line_len(row)` appends.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) -> (usize, usize) {
        let idx = self.char_idx(row, col);
        self.rope.insert_char(idx, ch);
        self.dirty = true;
        (row, col + ch.len_utf8())
    }

    /// Insert the 4-space tab expansion at (row, col).
    pub fn insert_tab(&mut self, row: usize, col: usize) -> (usize, usize) {
        let idx = self.char_idx(row, col);
        self.rope.insert(idx, "    ");
        self.dirty = true;
        (row, col + 4)
    }

    /// Split line `row` at `col`: the suffix becomes a new line at row + 1.
    pub fn split_line(&mut self, row: usize, col: usize) -> (usize, usize) {
        let idx = self.char_idx(row, col);
        self.rope.insert_char(idx, '\n');
        self.dirty = true;
        (row + 1, 0)
    }

    /// Delete the character before (row, col); Backspace semantics.
    ///
    /// At column 0 this joins line `row` onto line `row - 1`. At (0, 0) it
    /// is a no-op and returns `None`.
    pub fn delete_before(&mut self, row: usize, col: usize) -> Option<(usize, usize)> {
        if row == 0 && col == 0 {
            return None;
        }
        if col == 0 {
            let prev_len = self.line_len(row - 1);
            let idx = self.char_idx(row, 0);
            self.rope.remove(idx - 1..idx);
            self.dirty = true;
            return Some((row - 1, prev_len));
        }
        let line = self.line_at(row)?;
        let prev_char_len = line[..col].chars().next_back().map_or(1, char::len_utf8);
        let idx = self.char_idx(row, col);
        self.rope.remove(idx - 1..idx);
        self.dirty = true;
        Some((row, col - prev_char_len))
    }

    // Convert a (row, byte column) address to a ropey char index.
    fn char_idx(&self, row: usize, col: usize) -> usize {
        let line_start = self.rope.line_to_char(row);
        let line: String = self.rope.line(row).chars().collect();
        let byte_col = col.min(line.len());
        line_start + line[..byte_col].chars().count()
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Construction and serialization ---

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = TextBuffer::empty();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some(String::new()));
    }

    #[test]
    fn test_from_lines_preserves_content() {
        let buf = TextBuffer::from_lines(&["hello", "world"]);
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_at(0), Some("hello".to_string()));
        assert_eq!(buf.line_at(1), Some("world".to_string()));
    }

    #[test]
    fn test_from_empty_sequence_is_one_empty_line() {
        let buf = TextBuffer::from_lines::<&str>(&[]);
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some(String::new()));
    }

    #[test]
    fn test_serialize_has_no_trailing_newline() {
        let buf = TextBuffer::from_lines(&["a", "b", "c"]);
        assert_eq!(buf.serialize(), "a\nb\nc");
    }

    #[test]
    fn test_serialize_round_trip() {
        let lines = ["first", "", "third", "  indented"];
        let buf = TextBuffer::from_lines(&lines);
        let text = buf.serialize();
        assert_eq!(text.matches('\n').count(), lines.len() - 1);
        let back: Vec<&str> = text.split('\n').collect();
        assert_eq!(back, lines);
    }

    #[test]
    fn test_line_at_out_of_bounds_returns_none() {
        let buf = TextBuffer::from_lines(&["hello"]);
        assert_eq!(buf.line_at(1), None);
    }

    #[test]
    fn test_line_len() {
        let buf = TextBuffer::from_lines(&["hello", "hi", ""]);
        assert_eq!(buf.line_len(0), 5);
        assert_eq!(buf.line_len(1), 2);
        assert_eq!(buf.line_len(2), 0);
    }

    // --- Dirty tracking ---

    #[test]
    fn test_new_buffer_is_clean() {
        let buf = TextBuffer::from_lines(&["hello"]);
        assert!(!buf.is_dirty());
    }

    #[test]
    fn test_insert_marks_dirty() {
        let mut buf = TextBuffer::from_lines(&["hello"]);
        buf.insert_char(0, 5, '!');
        assert!(buf.is_dirty());
    }

    #[test]
    fn test_mark_clean_resets_dirty() {
        let mut buf = TextBuffer::from_lines(&["hello"]);
        buf.insert_char(0, 0, 'x');
        buf.mark_clean();
        assert!(!buf.is_dirty());
    }

    // --- Character insertion ---

    #[test]
    fn test_insert_char_in_middle() {
        let mut buf = TextBuffer::from_lines(&["hllo"]);
        let cursor = buf.insert_char(0, 1, 'e');
        assert_eq!(buf.line_at(0), Some("hello".to_string()));
        assert_eq!(cursor, (0, 2));
    }

    #[test]
    fn test_insert_char_at_line_end_appends() {
        let mut buf = TextBuffer::from_lines(&["ab", "cd"]);
        buf.insert_char(0, 2, 'X');
        assert_eq!(buf.line_at(0), Some("abX".to_string()));
        assert_eq!(buf.line_at(1), Some("cd".to_string()));
        assert_eq!(buf.line_count(), 2);
    }

    #[test]
    fn test_insert_multibyte_char_advances_by_utf8_len() {
        let mut buf = TextBuffer::from_lines(&["caf"]);
        let cursor = buf.insert_char(0, 3, 'é');
        assert_eq!(buf.line_at(0), Some("café".to_string()));
        assert_eq!(cursor, (0, 5));
    }

    #[test]
    fn test_insert_tab_is_four_spaces() {
        let mut buf = TextBuffer::from_lines(&["ab"]);
        let cursor = buf.insert_tab(0, 1);
        assert_eq!(buf.line_at(0), Some("a    b".to_string()));
        assert_eq!(cursor, (0, 5));
    }

    // --- Line splitting (Enter) ---

    #[test]
    fn test_split_line_in_middle() {
        let mut buf = TextBuffer::from_lines(&["hello world"]);
        let cursor = buf.split_line(0, 5);
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.line_at(0), Some("hello".to_string()));
        assert_eq!(buf.line_at(1), Some(" world".to_string()));
        assert_eq!(cursor, (1, 0));
    }

    #[test]
    fn test_split_line_at_end_creates_empty_line() {
        let mut buf = TextBuffer::from_lines(&["hello"]);
        let cursor = buf.split_line(0, 5);
        assert_eq!(buf.line_at(1), Some(String::new()));
        assert_eq!(cursor, (1, 0));
    }

    #[test]
    fn test_split_line_at_start() {
        let mut buf = TextBuffer::from_lines(&["hello"]);
        buf.split_line(0, 0);
        assert_eq!(buf.line_at(0), Some(String::new()));
        assert_eq!(buf.line_at(1), Some("hello".to_string()));
    }

    // --- Backspace deletion ---

    #[test]
    fn test_delete_before_at_origin_is_noop() {
        let mut buf = TextBuffer::from_lines(&["hello"]);
        assert_eq!(buf.delete_before(0, 0), None);
        assert_eq!(buf.serialize(), "hello");
        assert!(!buf.is_dirty());
    }

    #[test]
    fn test_delete_before_removes_char() {
        let mut buf = TextBuffer::from_lines(&["hello"]);
        let cursor = buf.delete_before(0, 5);
        assert_eq!(buf.line_at(0), Some("hell".to_string()));
        assert_eq!(cursor, Some((0, 4)));
    }

    #[test]
    fn test_delete_before_at_col_zero_joins_lines() {
        let mut buf = TextBuffer::from_lines(&["hello", "world"]);
        let cursor = buf.delete_before(1, 0);
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some("helloworld".to_string()));
        assert_eq!(cursor, Some((0, 5)));
    }

    #[test]
    fn test_delete_before_multibyte() {
        let mut buf = TextBuffer::from_lines(&["café"]);
        let cursor = buf.delete_before(0, 5);
        assert_eq!(buf.line_at(0), Some("caf".to_string()));
        assert_eq!(cursor, Some((0, 3)));
    }

    // --- Column clamping ---

    #[test]
    fn test_clamp_col_past_end() {
        let buf = TextBuffer::from_lines(&["hello"]);
        assert_eq!(buf.clamp_col(0, 100), 5);
    }

    #[test]
    fn test_clamp_col_mid_char_floors_to_boundary() {
        let buf = TextBuffer::from_lines(&["café"]);
        // byte 4 is inside the two-byte 'é'
        assert_eq!(buf.clamp_col(0, 4), 3);
    }

    // --- Complex editing sequences ---

    #[test]
    fn test_split_and_rejoin() {
        let mut buf = TextBuffer::from_lines(&["helloworld"]);
        buf.split_line(0, 5);
        assert_eq!(buf.line_count(), 2);
        buf.delete_before(1, 0);
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_at(0), Some("helloworld".to_string()));
    }

    #[test]
    fn test_type_then_backspace_then_type() {
        let mut buf = TextBuffer::empty();
        let (r, c) = buf.insert_char(0, 0, 'h');
        let (r, c) = buf.insert_char(r, c, 'e');
        let (r, c) = buf.insert_char(r, c, 'l');
        let (r, c) = buf.delete_before(r, c).unwrap();
        let (r, c) = buf.insert_char(r, c, 'l');
        buf.insert_char(r, c, 'p');
        assert_eq!(buf.line_at(0), Some("help".to_string()));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // serialize(from_lines(L)) reproduces L exactly: N lines,
            // N - 1 separators.
            #[test]
            fn round_trip_any_lines(
                lines in proptest::collection::vec("[a-zA-Z0-9 _#\"/(){}]*", 1..20),
            ) {
                let buf = TextBuffer::from_lines(&lines);
                let text = buf.serialize();
                prop_assert_eq!(text.matches('\n').count(), lines.len() - 1);
                let back: Vec<String> =
                    text.split('\n').map(str::to_string).collect();
                prop_assert_eq!(back, lines);
            }

            #[test]
            fn append_only_touches_one_row(
                lines in proptest::collection::vec("[a-z]{0,8}", 2..10),
                row in 0usize..10,
            ) {
                let row = row % lines.len();
                let mut buf = TextBuffer::from_lines(&lines);
                buf.insert_char(row, buf.line_len(row), '!');
                for (i, line) in lines.iter().enumerate() {
                    if i == row {
                        prop_assert_eq!(buf.line_at(i).unwrap(), format!("{line}!"));
                    } else {
                        prop_assert_eq!(buf.line_at(i).unwrap(), line.clone());
                    }
                }
            }
        }
    }
}
