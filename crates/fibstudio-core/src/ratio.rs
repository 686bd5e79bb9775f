//! Floating-point ratio of two arbitrary-precision integers.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};

/// Leading bits of each operand kept for the `f64` division.
///
/// Well above the 53-bit mantissa, well below the `f64` exponent range.
const RATIO_BITS: u64 = 128;

/// Largest power of two applied in one multiplication when rescaling.
const SCALE_STEP: i64 = 512;

/// Compute `numerator / denominator` as an `f64`.
///
/// Returns `None` when the denominator is zero. Each operand is reduced to its
/// leading [`RATIO_BITS`] bits and a binary exponent, the reduced values are
/// divided, and the exponent difference is applied afterwards. Operands of any
/// size, including very different sizes, keep full `f64` precision. Quotients
/// beyond the `f64` range saturate to infinity or zero.
///
/// # Example
/// ```
/// use num_bigint::BigUint;
/// let r = fibstudio_core::ratio(&BigUint::from(13u32), &BigUint::from(8u32));
/// assert_eq!(r, Some(1.625));
/// ```
#[must_use]
pub fn ratio(numerator: &BigUint, denominator: &BigUint) -> Option<f64> {
    if denominator.is_zero() {
        return None;
    }

    let (num, num_exp) = split(numerator)?;
    let (den, den_exp) = split(denominator)?;
    let exp = i64::try_from(num_exp).ok()? - i64::try_from(den_exp).ok()?;
    Some(scale(num / den, exp))
}

/// Leading bits of `value` as an `f64`, with the number of bits dropped.
fn split(value: &BigUint) -> Option<(f64, u64)> {
    let shift = value.bits().saturating_sub(RATIO_BITS);
    Some(((value >> shift).to_f64()?, shift))
}

/// `value * 2^exp` for a non-negative `value`.
fn scale(mut value: f64, mut exp: i64) -> f64 {
    while exp != 0 && value > 0.0 && value.is_finite() {
        let step = i32::try_from(exp.clamp(-SCALE_STEP, SCALE_STEP)).unwrap_or_default();
        value *= 2f64.powi(step);
        exp -= i64::from(step);
    }
    value
}
