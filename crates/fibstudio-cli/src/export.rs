//! CSV export of a sequence and its per-term ratios.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use num_bigint::BigUint;
use tracing::info;

use fibstudio_core::table::rows;

use crate::output::{format_optional_ratio, EXPORT_RATIO_PRECISION};

/// CSV header row.
pub const CSV_HEADER: [&str; 3] = ["Index", "Value", "Value/Previous"];

/// Errors raised while exporting or copying a sequence.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// There is nothing to export.
    #[error("the sequence is empty, nothing to {0}")]
    Empty(&'static str),

    /// Writing the destination failed.
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// CSV encoding failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing to stdout or the terminal failed.
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

/// Write the CSV header and one row per term to `writer`.
///
/// An empty sequence produces the header only.
pub fn write_csv<W: io::Write>(writer: W, sequence: &[BigUint]) -> Result<(), ExportError> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(CSV_HEADER)?;
    for row in rows(sequence) {
        csv.write_record([
            row.index.to_string(),
            row.value.to_string(),
            format_optional_ratio(row.ratio, EXPORT_RATIO_PRECISION, ""),
        ])?;
    }
    csv.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Export the sequence as CSV to `path`.
///
/// Refuses to write an empty sequence.
pub fn export_csv(path: &Path, sequence: &[BigUint]) -> Result<(), ExportError> {
    if sequence.is_empty() {
        return Err(ExportError::Empty("export"));
    }

    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    write_csv(file, sequence)?;

    info!(path = %path.display(), terms = sequence.len(), "exported CSV");
    Ok(())
}

/// Default export file name, e.g. `fibonacci_20260118_093005.csv`.
#[must_use]
pub fn default_export_filename(now: DateTime<Local>) -> String {
    format!("fibonacci_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

/// Export the sequence into `dir` under the default timestamped name.
///
/// Returns the path that was written.
pub fn export_to_dir(dir: &Path, sequence: &[BigUint]) -> Result<PathBuf, ExportError> {
    let path = dir.join(default_export_filename(Local::now()));
    export_csv(&path, sequence)?;
    Ok(path)
}
