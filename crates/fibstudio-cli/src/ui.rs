//! UI helpers for CLI messages on stderr.

use console::style;

/// Check if color output is disabled via `NO_COLOR` or `--no-color`.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var_os("NO_COLOR").is_some() || !console::colors_enabled_stderr()
}

/// Turn colored output off for the rest of the process.
pub fn disable_colors() {
    console::set_colors_enabled(false);
    console::set_colors_enabled_stderr(false);
}

/// Success line, e.g. after an export.
#[must_use]
pub fn success_line(text: &str) -> String {
    if is_color_disabled() {
        format!("[OK] {text}")
    } else {
        format!("{} {text}", style("[OK]").green().bold().for_stderr())
    }
}

/// Error line shown before exiting.
#[must_use]
pub fn error_line(text: &str) -> String {
    if is_color_disabled() {
        format!("[ERROR] {text}")
    } else {
        format!("{} {text}", style("[ERROR]").red().bold().for_stderr())
    }
}

/// Print a success message.
pub fn print_success(text: &str) {
    eprintln!("{}", success_line(text));
}

/// Print an error message.
pub fn print_error(text: &str) {
    eprintln!("{}", error_line(text));
}
