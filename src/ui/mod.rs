//! Terminal UI components.
//!
//! This module contains all UI-related code including:
//! - [`viewport`]: Cursor position and scroll management
//! - [`style`]: The highlight palette and chrome colors

pub mod style;
pub mod viewport;

mod render;
mod status;

pub use render::render;
pub use status::status_text;
pub use viewport::CursorViewport;
