//! Fibonacci Studio: explore and export the Fibonacci sequence.

use std::process::ExitCode;

use fibstudio_cli::ui;
use fibstudio_lib::{app, config, errors, logging};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(logging::env_log_filter())
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::print_error(&format!("{err:#}"));
            let code = errors::exit_code_for(&err);
            ExitCode::from(u8::try_from(code).unwrap_or(1))
        }
    }
}
