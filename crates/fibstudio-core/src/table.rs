//! Per-term rows for tabular display and export.

use num_bigint::BigUint;

use crate::ratio::ratio;

/// One row of the results table.
#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRow<'a> {
    /// Zero-based position in the sequence.
    pub index: usize,
    /// Term at `index`.
    pub value: &'a BigUint,
    /// `value / previous`, absent for the first row or when the previous
    /// term is zero.
    pub ratio: Option<f64>,
}

/// Build one row per term, pairing each with its ratio to the previous term.
#[must_use]
pub fn rows(sequence: &[BigUint]) -> Vec<SequenceRow<'_>> {
    sequence
        .iter()
        .enumerate()
        .map(|(index, value)| SequenceRow {
            index,
            value,
            ratio: index
                .checked_sub(1)
                .and_then(|prev| ratio(value, &sequence[prev])),
        })
        .collect()
}
