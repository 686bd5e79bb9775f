//! TUI message types (Elm Messages) and the side effects they can request.

use std::path::PathBuf;

use crate::keymap::KeyAction;

/// Messages that drive the TUI update cycle.
#[derive(Debug, Clone, PartialEq)]
pub enum StudioMessage {
    /// Key press event forwarded from the event loop.
    KeyPress(KeyAction),
    /// Terminal resize event.
    Resize { width: u16, height: u16 },
    /// Tick event for periodic redraws.
    Tick,
    /// Quit the application.
    Quit,
    /// Outcome of a clipboard copy: copied term count or error text.
    Copied(Result<usize, String>),
    /// Outcome of a CSV export: written path or error text.
    Saved(Result<PathBuf, String>),
}

/// Side effects requested by the model, run by the event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Copy the comma-joined values to the clipboard.
    Copy,
    /// Export the sequence as CSV.
    Save,
}
