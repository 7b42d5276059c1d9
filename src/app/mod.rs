//! Application state and main event loop.
//!
//! This module implements The Elm Architecture (TEA):
//! - [`Model`]: The complete application state
//! - [`Message`]: All possible events and actions
//! - [`update`]: Pure function for state transitions
//! - [`App::run`]: Main event loop with rendering
//!
//! Chord commands that touch the file system run in a separate effects
//! pass after `update`, keeping the transition function pure.

mod effects;
mod event_loop;
mod input;
pub mod model;
mod update;

pub use model::{FindHighlight, Mode, Model};
pub use update::{Message, update};

use std::path::PathBuf;

/// Main application struct that owns the terminal and runs the event loop.
pub struct App {
    file_path: PathBuf,
}

impl App {
    /// Create a new editor session for the given file.
    pub const fn new(file_path: PathBuf) -> Self {
        Self { file_path }
    }
}
