//! CLI output formatting.

use num_bigint::BigUint;

/// Decimals used for ratios in CSV exports.
pub const EXPORT_RATIO_PRECISION: usize = 6;

/// Separator between values in the clipboard text.
pub const VALUE_SEPARATOR: &str = ", ";

/// Format a `BigUint` for display, potentially truncating.
#[must_use]
pub fn format_value(value: &BigUint, verbose: bool) -> String {
    let s = value.to_string();
    if !verbose && s.len() > 40 {
        format!("{}...{} ({} digits)", &s[..15], &s[s.len() - 15..], s.len())
    } else {
        s
    }
}

/// Format a ratio with a fixed number of decimals.
#[must_use]
pub fn format_ratio(ratio: f64, precision: usize) -> String {
    format!("{ratio:.precision$}")
}

/// Format an optional ratio, using `placeholder` when it is absent.
#[must_use]
pub fn format_optional_ratio(ratio: Option<f64>, precision: usize, placeholder: &str) -> String {
    ratio.map_or_else(|| placeholder.to_string(), |r| format_ratio(r, precision))
}

/// Join all values with [`VALUE_SEPARATOR`], as copied to the clipboard.
#[must_use]
pub fn join_values(sequence: &[BigUint]) -> String {
    sequence
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(VALUE_SEPARATOR)
}

/// Status line describing how many terms are shown.
#[must_use]
pub fn status_message(count: usize) -> String {
    match count {
        0 => "No terms to show.".to_string(),
        1 => "Showing 1 term.".to_string(),
        n => format!("Showing {n} terms."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_value_short() {
        let value = BigUint::from(12345u64);
        assert_eq!(format_value(&value, false), "12345");
    }

    #[test]
    fn format_value_truncates_long_values() {
        let value = fibstudio_core::generate(500).pop().unwrap();
        let s = format_value(&value, false);
        assert!(s.contains("..."));
        assert!(s.ends_with("(104 digits)"));
    }

    #[test]
    fn format_value_verbose_keeps_all_digits() {
        let value = fibstudio_core::generate(500).pop().unwrap();
        assert_eq!(format_value(&value, true), value.to_string());
    }

    #[test]
    fn format_ratio_precision() {
        assert_eq!(format_ratio(1.625, 6), "1.625000");
        assert_eq!(format_ratio(1.618_033_988_7, 3), "1.618");
    }

    #[test]
    fn format_optional_ratio_placeholder() {
        assert_eq!(format_optional_ratio(None, 6, "-"), "-");
        assert_eq!(format_optional_ratio(None, 6, ""), "");
        assert_eq!(format_optional_ratio(Some(2.0), 2, "-"), "2.00");
    }

    #[test]
    fn join_values_comma_separated() {
        let sequence = fibstudio_core::generate(6);
        assert_eq!(join_values(&sequence), "0, 1, 1, 2, 3, 5");
        assert_eq!(join_values(&[]), "");
    }

    #[test]
    fn status_message_pluralizes() {
        assert_eq!(status_message(0), "No terms to show.");
        assert_eq!(status_message(1), "Showing 1 term.");
        assert_eq!(status_message(15), "Showing 15 terms.");
    }
}
