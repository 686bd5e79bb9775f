//! Error handling and exit codes.

use fibstudio_cli::ExportError;
use fibstudio_core::exit_codes;
use fibstudio_tui::TuiError;

/// Map an application error to the process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ExportError>().is_some() {
        exit_codes::ERROR_EXPORT
    } else if err.downcast_ref::<TuiError>().is_some() {
        exit_codes::ERROR_TERMINAL
    } else {
        exit_codes::ERROR_GENERIC
    }
}
