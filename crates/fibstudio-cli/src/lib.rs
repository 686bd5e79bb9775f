//! # fibstudio-cli
//!
//! CLI output, CSV export, clipboard copy, and shell completion.

pub mod clipboard;
pub mod completion;
pub mod export;
pub mod output;
pub mod presenter;
pub mod ui;

pub use export::ExportError;
pub use presenter::{CLIPresenter, OutputFormat, SequencePresenter};
