//! File store collaborator.
//!
//! Blocking whole-file reads and writes for the editing session. Saves
//! write the buffer's serialized form in one call; there is no partial-write
//! protection, a crash mid-write can corrupt the target file.

use std::fs;
use std::io;
use std::path::Path;

use crate::buffer::TextBuffer;

/// Read a file as a line sequence.
///
/// The separator handling matches the buffer's persisted form: a trailing
/// newline does not produce an extra empty line.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid UTF-8.
pub fn read_lines(path: &Path) -> io::Result<Vec<String>> {
    let text = fs::read_to_string(path)?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Persist a buffer: lines joined by `\n`, no trailing separator.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_buffer(path: &Path, buffer: &TextBuffer) -> io::Result<()> {
    fs::write(path, buffer.serialize())
}

/// Create (or truncate to empty) a file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be created.
pub fn create_empty(path: &Path) -> io::Result<()> {
    fs::File::create(path).map(|_| ())
}
