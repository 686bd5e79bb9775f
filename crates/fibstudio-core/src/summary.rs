//! Summary statistics over a sequence of terms.

use num_bigint::BigUint;
use tracing::debug;

use crate::ratio::ratio;

/// Aggregate statistics for a sequence, computed once and read-only after.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of terms.
    pub count: usize,
    /// Final term, absent for an empty sequence.
    pub last_value: Option<BigUint>,
    /// Sum of all terms (zero for an empty sequence).
    pub total_sum: BigUint,
    /// Last term divided by the second-to-last term.
    ///
    /// Absent with fewer than two terms or when the second-to-last is zero.
    /// Not rounded.
    pub golden_ratio: Option<f64>,
}

impl Summary {
    /// Whether the summarized sequence had no terms.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Summarize any sequence of non-negative integers.
///
/// The input does not have to be a Fibonacci sequence.
///
/// # Example
/// ```
/// let summary = fibstudio_core::summarize(&fibstudio_core::generate(8));
/// assert_eq!(summary.count, 8);
/// assert_eq!(summary.last_value.unwrap().to_string(), "13");
/// assert_eq!(summary.golden_ratio, Some(1.625));
/// ```
#[must_use]
pub fn summarize(sequence: &[BigUint]) -> Summary {
    let total_sum: BigUint = sequence.iter().sum();
    let golden_ratio = match sequence {
        [.., previous, last] => ratio(last, previous),
        _ => None,
    };

    let summary = Summary {
        count: sequence.len(),
        last_value: sequence.last().cloned(),
        total_sum,
        golden_ratio,
    };
    debug!(
        count = summary.count,
        has_ratio = summary.golden_ratio.is_some(),
        "summarized sequence"
    );
    summary
}
