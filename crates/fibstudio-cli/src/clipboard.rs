//! Clipboard copy through the terminal (OSC 52).

use std::io::Write;

use crossterm::clipboard::CopyToClipboard;
use crossterm::execute;
use num_bigint::BigUint;
use tracing::info;

use crate::export::ExportError;
use crate::output::join_values;

/// Copy the comma-joined values to the system clipboard.
///
/// The request is written to `out` as an OSC 52 escape sequence, which the
/// terminal emulator turns into a clipboard update. Returns the copied text.
pub fn copy_sequence<W: Write>(
    out: &mut W,
    sequence: &[BigUint],
) -> Result<String, ExportError> {
    if sequence.is_empty() {
        return Err(ExportError::Empty("copy"));
    }

    let text = join_values(sequence);
    execute!(out, CopyToClipboard::to_clipboard_from(text.as_str()))?;

    info!(terms = sequence.len(), bytes = text.len(), "copied sequence to clipboard");
    Ok(text)
}
