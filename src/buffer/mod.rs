//! Line buffer for the editing session.
//!
//! Provides a rope-backed text buffer addressed by (row, column) pairs,
//! designed for integration into the TEA architecture. The cursor itself
//! lives in [`crate::ui::viewport::CursorViewport`]; mutating operations
//! return the cursor position that results from the edit.

mod text;

pub use text::TextBuffer;
