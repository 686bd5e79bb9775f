//! Fibonacci sequence generation using the standard additive recurrence.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use tracing::debug;

use crate::constants::FIB_TABLE;

/// Lazy iterator over the Fibonacci sequence, starting at F(0).
///
/// Unbounded: callers are expected to `take` what they need.
///
/// # Example
/// ```
/// use fibstudio_core::sequence::FibSequence;
/// let fibs: Vec<_> = FibSequence::new().take(7).map(|v| v.to_string()).collect();
/// assert_eq!(fibs, ["0", "1", "1", "2", "3", "5", "8"]);
/// ```
#[derive(Debug, Clone)]
pub struct FibSequence {
    a: BigUint,
    b: BigUint,
}

impl FibSequence {
    #[must_use]
    pub fn new() -> Self {
        Self {
            a: BigUint::zero(),
            b: BigUint::one(),
        }
    }
}

impl Default for FibSequence {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for FibSequence {
    type Item = BigUint;

    fn next(&mut self) -> Option<Self::Item> {
        let next = &self.a + &self.b;
        let b = std::mem::replace(&mut self.b, next);
        Some(std::mem::replace(&mut self.a, b))
    }
}

/// Return the first `count` Fibonacci terms.
///
/// Counts of zero or below yield an empty sequence.
///
/// # Example
/// ```
/// let terms: Vec<u64> = fibstudio_core::generate(8)
///     .into_iter()
///     .map(|v| v.try_into().unwrap())
///     .collect();
/// assert_eq!(terms, [0, 1, 1, 2, 3, 5, 8, 13]);
/// assert!(fibstudio_core::generate(-3).is_empty());
/// ```
#[must_use]
pub fn generate(count: i64) -> Vec<BigUint> {
    let Ok(len) = usize::try_from(count) else {
        debug!(count, "negative term count, returning empty sequence");
        return Vec::new();
    };

    // Fast path: every term fits in the precomputed table.
    let sequence: Vec<BigUint> = if len <= FIB_TABLE.len() {
        FIB_TABLE[..len].iter().copied().map(BigUint::from).collect()
    } else {
        FibSequence::new().take(len).collect()
    };

    debug!(count, "generated Fibonacci sequence");
    sequence
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_u64(sequence: &[BigUint]) -> Vec<u64> {
        sequence
            .iter()
            .map(|v| u64::try_from(v).unwrap())
            .collect()
    }

    #[test]
    fn zero_terms_is_empty() {
        assert!(generate(0).is_empty());
    }

    #[test]
    fn negative_terms_is_empty() {
        assert!(generate(-10).is_empty());
        assert!(generate(i64::MIN).is_empty());
    }

    #[test]
    fn single_term_is_zero() {
        assert_eq!(as_u64(&generate(1)), [0]);
    }

    #[test]
    fn two_terms() {
        assert_eq!(as_u64(&generate(2)), [0, 1]);
    }

    #[test]
    fn first_eight() {
        assert_eq!(as_u64(&generate(8)), [0, 1, 1, 2, 3, 5, 8, 13]);
    }

    #[test]
    fn table_and_iterator_paths_agree() {
        let from_table = generate(94);
        let from_iter: Vec<BigUint> = FibSequence::new().take(94).collect();
        assert_eq!(from_table, from_iter);
    }

    #[test]
    fn crosses_u64_boundary() {
        let sequence = generate(96);
        assert_eq!(sequence.len(), 96);
        assert_eq!(
            sequence[94].to_string(),
            "19740274219868223167",
            "F(94) should exceed u64"
        );
        assert_eq!(sequence[95], &sequence[94] + &sequence[93]);
    }

    #[test]
    fn max_terms_last_value() {
        let sequence = generate(500);
        assert_eq!(sequence.len(), 500);
        // F(499) has 104 decimal digits.
        assert_eq!(sequence[499].to_string().len(), 104);
    }

    #[test]
    fn iterator_yields_known_values() {
        let expected: Vec<u64> = vec![
            0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89, 144, 233, 377, 610, 987, 1597, 2584, 4181,
            6765,
        ];
        let values: Vec<BigUint> = FibSequence::default().take(expected.len()).collect();
        assert_eq!(as_u64(&values), expected);
    }

    #[test]
    fn generate_is_idempotent() {
        assert_eq!(generate(120), generate(120));
    }
}
