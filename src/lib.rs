// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. buffer::TextBuffer)
    clippy::module_name_repetitions
)]

//! # Ced
//!
//! A modal terminal text editor for a single file.
//!
//! Ced opens one file in a full-screen terminal session with:
//! - Navigation, insertion and chord-command input modes
//! - A line-number gutter and a one-row status line
//! - C-family syntax highlighting with depth-colored brackets
//! - Chord commands for save, quit, line jumps, search and file switching
//!
//! ## Architecture
//!
//! Ced uses The Elm Architecture (TEA) pattern:
//! - **Model**: Application state
//! - **Message**: Events and actions
//! - **Update**: Pure state transitions
//! - **View**: Render to terminal
//!
//! ## Modules
//!
//! - [`app`]: Main application loop and state
//! - [`buffer`]: The rope-backed text buffer
//! - [`command`]: Chord command parsing
//! - [`highlight`]: Syntax highlighting
//! - [`store`]: File load/save
//! - [`ui`]: Terminal UI components

pub mod app;
pub mod buffer;
pub mod command;
pub mod highlight;
pub mod store;
pub mod ui;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::app::{App, Message, Model};
    pub use crate::buffer::TextBuffer;
    pub use crate::ui::viewport::CursorViewport;
}
