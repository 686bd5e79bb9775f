//! # fibstudio-tui
//!
//! Interactive terminal front end using ratatui with Elm architecture.

pub mod about;
pub mod cards;
pub mod footer;
pub mod header;
pub mod keymap;
pub mod messages;
pub mod model;
pub mod results;
pub mod styles;

pub use keymap::KeyAction;
pub use messages::{Effect, StudioMessage};
pub use model::{Status, StatusKind, StudioApp};

/// Errors raised by the terminal front end.
#[derive(Debug, thiserror::Error)]
pub enum TuiError {
    /// Terminal setup, drawing, or event polling failed.
    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
