//! Application configuration from CLI flags and environment.

use std::path::PathBuf;

use clap::Parser;
use tracing::warn;

use fibstudio_cli::OutputFormat;
use fibstudio_core::{DEFAULT_TERMS, MAX_TERMS};

/// Fibonacci Studio: explore and export the Fibonacci sequence.
#[derive(Parser, Debug)]
#[command(name = "fibstudio", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Number of terms to generate (clamped to 0-500).
    #[arg(
        short = 'n',
        long,
        default_value_t = i64::from(DEFAULT_TERMS),
        env = "FIBSTUDIO_COUNT",
        allow_negative_numbers = true
    )]
    pub count: i64,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the CSV export to this file.
    #[arg(short, long, conflicts_with = "export_dir")]
    pub output: Option<PathBuf>,

    /// Write the CSV export into this directory under a timestamped name.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Copy the comma-joined values to the clipboard (OSC 52).
    #[arg(long)]
    pub copy: bool,

    /// Show full values instead of truncating long ones.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only output the data).
    #[arg(short, long)]
    pub quiet: bool,

    /// Decimals shown for ratios in the table and summary.
    #[arg(long, default_value_t = 6)]
    pub precision: usize,

    /// Disable colored messages.
    #[arg(long)]
    pub no_color: bool,

    /// Launch interactive TUI.
    #[arg(long)]
    pub tui: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Term count clamped to `0..=MAX_TERMS`.
    #[must_use]
    pub fn term_count(&self) -> i64 {
        clamp_count(self.count)
    }
}

/// Clamp a requested term count to `0..=MAX_TERMS`, warning when it changes.
#[must_use]
pub fn clamp_count(requested: i64) -> i64 {
    let clamped = requested.clamp(0, i64::from(MAX_TERMS));
    if clamped != requested {
        warn!(requested, clamped, "term count out of range, clamped");
    }
    clamped
}
