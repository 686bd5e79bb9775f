//! CLI sequence presenter.

use std::io::{self, Write};

use num_bigint::BigUint;
use serde::Serialize;

use fibstudio_core::summary::Summary;
use fibstudio_core::table::rows;

use crate::export::{write_csv, ExportError};
use crate::output::{format_optional_ratio, format_value, join_values, status_message};

/// How the sequence is rendered on stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Summary block plus an index/value/ratio table.
    #[default]
    Table,
    /// Comma-joined values on a single line.
    Values,
    /// CSV with header row.
    Csv,
    /// JSON object with the summary and the values.
    Json,
}

/// Trait for presenting a computed sequence to the user.
pub trait SequencePresenter {
    /// Present the sequence and its summary.
    fn present(
        &self,
        out: &mut dyn Write,
        sequence: &[BigUint],
        summary: &Summary,
    ) -> Result<(), ExportError>;
}

/// JSON shape of a computed sequence. Integers are decimal strings.
#[derive(Debug, Serialize)]
pub struct SequenceReport {
    pub count: usize,
    pub last_value: Option<String>,
    pub total_sum: String,
    pub golden_ratio: Option<f64>,
    pub values: Vec<String>,
}

impl SequenceReport {
    #[must_use]
    pub fn new(sequence: &[BigUint], summary: &Summary) -> Self {
        Self {
            count: summary.count,
            last_value: summary.last_value.as_ref().map(ToString::to_string),
            total_sum: summary.total_sum.to_string(),
            golden_ratio: summary.golden_ratio,
            values: sequence.iter().map(ToString::to_string).collect(),
        }
    }
}

/// CLI presenter.
pub struct CLIPresenter {
    format: OutputFormat,
    verbose: bool,
    quiet: bool,
    precision: usize,
}

impl CLIPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, verbose: bool, quiet: bool, precision: usize) -> Self {
        Self {
            format,
            verbose,
            quiet,
            precision,
        }
    }

    fn write_summary(&self, out: &mut dyn Write, summary: &Summary) -> io::Result<()> {
        let last = summary
            .last_value
            .as_ref()
            .map_or_else(|| "-".to_string(), |v| format_value(v, self.verbose));
        writeln!(out, "Terms:         {}", summary.count)?;
        writeln!(out, "Last value:    {last}")?;
        writeln!(
            out,
            "Total sum:     {}",
            format_value(&summary.total_sum, self.verbose)
        )?;
        writeln!(
            out,
            "Golden ratio:  {}",
            format_optional_ratio(summary.golden_ratio, self.precision, "-")
        )?;
        Ok(())
    }

    fn write_table(&self, out: &mut dyn Write, sequence: &[BigUint]) -> io::Result<()> {
        let table: Vec<(String, String, String)> = rows(sequence)
            .into_iter()
            .map(|row| {
                (
                    row.index.to_string(),
                    format_value(row.value, self.verbose),
                    format_optional_ratio(row.ratio, self.precision, ""),
                )
            })
            .collect();

        let index_width = table.iter().map(|r| r.0.len()).max().unwrap_or(0).max(5);
        let value_width = table.iter().map(|r| r.1.len()).max().unwrap_or(0).max(5);

        writeln!(
            out,
            "{:>index_width$}  {:<value_width$}  Value/Previous",
            "Index", "Value"
        )?;
        writeln!(
            out,
            "{:->index_width$}  {:-<value_width$}  {:-<14}",
            "", "", ""
        )?;
        for (index, value, ratio) in &table {
            let line = format!("{index:>index_width$}  {value:<value_width$}  {ratio}");
            writeln!(out, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

impl SequencePresenter for CLIPresenter {
    fn present(
        &self,
        out: &mut dyn Write,
        sequence: &[BigUint],
        summary: &Summary,
    ) -> Result<(), ExportError> {
        match self.format {
            OutputFormat::Table => {
                if !self.quiet {
                    writeln!(out, "=== Fibonacci Studio ===")?;
                    self.write_summary(out, summary)?;
                    writeln!(out)?;
                }
                if !sequence.is_empty() {
                    self.write_table(out, sequence)?;
                }
                if !self.quiet {
                    writeln!(out, "{}", status_message(summary.count))?;
                }
            }
            OutputFormat::Values => {
                writeln!(out, "{}", join_values(sequence))?;
            }
            OutputFormat::Csv => {
                write_csv(out, sequence)?;
            }
            OutputFormat::Json => {
                let report = SequenceReport::new(sequence, summary);
                serde_json::to_writer_pretty(&mut *out, &report).map_err(io::Error::from)?;
                writeln!(out)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fibstudio_core::compute;

    fn render(presenter: &CLIPresenter, count: i64) -> String {
        let (sequence, summary) = compute(count);
        let mut buf = Vec::new();
        presenter.present(&mut buf, &sequence, &summary).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn table_includes_summary_and_rows() {
        let presenter = CLIPresenter::new(OutputFormat::Table, false, false, 6);
        let out = render(&presenter, 8);
        assert!(out.contains("Terms:         8"));
        assert!(out.contains("Last value:    13"));
        assert!(out.contains("Total sum:     33"));
        assert!(out.contains("Golden ratio:  1.625000"));
        assert!(out.contains("Index  Value  Value/Previous"));
        assert!(out.contains("    7  13     1.625000"));
        assert!(out.ends_with("Showing 8 terms.\n"));
    }

    #[test]
    fn table_empty_sequence() {
        let presenter = CLIPresenter::new(OutputFormat::Table, false, false, 6);
        let out = render(&presenter, 0);
        assert!(out.contains("Last value:    -"));
        assert!(out.contains("Total sum:     0"));
        assert!(out.contains("Golden ratio:  -"));
        assert!(!out.contains("Index"));
        assert!(out.ends_with("No terms to show.\n"));
    }

    #[test]
    fn table_quiet_mode_has_rows_only() {
        let presenter = CLIPresenter::new(OutputFormat::Table, false, true, 6);
        let out = render(&presenter, 3);
        assert!(!out.contains("Terms:"));
        assert!(!out.contains("Showing"));
        assert_eq!(out.lines().count(), 5);
    }

    #[test]
    fn table_respects_precision() {
        let presenter = CLIPresenter::new(OutputFormat::Table, false, false, 2);
        let out = render(&presenter, 8);
        assert!(out.contains("Golden ratio:  1.6"));
        assert!(!out.contains("1.625000"));
    }

    #[test]
    fn values_format() {
        let presenter = CLIPresenter::new(OutputFormat::Values, false, false, 6);
        assert_eq!(render(&presenter, 8), "0, 1, 1, 2, 3, 5, 8, 13\n");
    }

    #[test]
    fn csv_format() {
        let presenter = CLIPresenter::new(OutputFormat::Csv, false, false, 6);
        let out = render(&presenter, 3);
        assert_eq!(out, "Index,Value,Value/Previous\n0,0,\n1,1,\n2,1,1.000000\n");
    }

    #[test]
    fn json_format() {
        let presenter = CLIPresenter::new(OutputFormat::Json, false, false, 6);
        let out = render(&presenter, 8);
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["count"], 8);
        assert_eq!(value["last_value"], "13");
        assert_eq!(value["total_sum"], "33");
        assert_eq!(value["golden_ratio"], 1.625);
        assert_eq!(value["values"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn json_empty_sequence_has_nulls() {
        let presenter = CLIPresenter::new(OutputFormat::Json, false, false, 6);
        let value: serde_json::Value = serde_json::from_str(&render(&presenter, 0)).unwrap();
        assert!(value["last_value"].is_null());
        assert!(value["golden_ratio"].is_null());
        assert_eq!(value["total_sum"], "0");
    }

    #[test]
    fn verbose_shows_full_values() {
        let presenter = CLIPresenter::new(OutputFormat::Table, true, false, 6);
        let (sequence, _) = compute(500);
        let out = render(&presenter, 500);
        assert!(out.contains(&sequence[499].to_string()));
    }
}
