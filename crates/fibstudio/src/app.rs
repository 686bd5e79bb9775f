//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::Result;
use tracing::{debug, info};

use fibstudio_cli::clipboard::copy_sequence;
use fibstudio_cli::export::{export_csv, export_to_dir};
use fibstudio_cli::presenter::{CLIPresenter, SequencePresenter};
use fibstudio_cli::ui;
use fibstudio_core::compute;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    if config.no_color {
        ui::disable_colors();
    }

    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fibstudio_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    // Handle TUI mode
    if config.tui {
        return run_tui(config);
    }

    // CLI mode
    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let count = config.term_count();
    let (sequence, summary) = compute(count);
    debug!(count, terms = sequence.len(), "computed sequence");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let presenter = CLIPresenter::new(config.format, config.verbose, config.quiet, config.precision);
    presenter.present(&mut out, &sequence, &summary)?;
    out.flush()?;

    // Write to file if requested
    if let Some(path) = &config.output {
        export_csv(path, &sequence)?;
        if !config.quiet {
            ui::print_success(&format!("File saved to {}.", path.display()));
        }
    } else if let Some(dir) = &config.export_dir {
        let path = export_to_dir(dir, &sequence)?;
        if !config.quiet {
            ui::print_success(&format!("File saved to {}.", path.display()));
        }
    }

    // The clipboard request goes to the terminal on stderr, never into the data stream.
    if config.copy {
        copy_sequence(&mut io::stderr(), &sequence)?;
        if !config.quiet {
            ui::print_success("Sequence copied to the clipboard.");
        }
    }

    Ok(())
}

fn run_tui(config: &AppConfig) -> Result<()> {
    let export_dir = match &config.export_dir {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let mut app = fibstudio_tui::StudioApp::new(config.count, export_dir);
    info!(count = app.count(), "starting TUI");
    app.run()?;
    Ok(())
}
