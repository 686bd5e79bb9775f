//! # fibstudio-core
//!
//! Core library for Fibonacci Studio.
//! Generates Fibonacci sequences and derives summary statistics from them.

pub mod constants;
pub mod ratio;
pub mod sequence;
pub mod summary;
pub mod table;

// Re-exports
pub use constants::{exit_codes, DEFAULT_TERMS, FIB_TABLE, MAX_FIB_U64, MAX_TERMS};
pub use ratio::ratio;
pub use sequence::{generate, FibSequence};
pub use summary::{summarize, Summary};
pub use table::{rows, SequenceRow};

/// Generate the first `count` terms and summarize them in one call.
///
/// # Example
/// ```
/// let (sequence, summary) = fibstudio_core::compute(8);
/// assert_eq!(sequence.len(), 8);
/// assert_eq!(summary.total_sum.to_string(), "33");
/// ```
#[must_use]
pub fn compute(count: i64) -> (Vec<num_bigint::BigUint>, Summary) {
    let sequence = generate(count);
    let summary = summarize(&sequence);
    (sequence, summary)
}
