#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use fibstudio_core::{compute, ratio};

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    // Any i64 is a valid request; keep the positive side small for speed.
    let raw = i64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    let count = if raw < 0 { raw } else { raw % 2_000 };

    let (sequence, summary) = compute(count);
    assert_eq!(sequence.len(), usize::try_from(count).unwrap_or(0));
    assert_eq!(summary.count, sequence.len());

    for window in sequence.windows(3) {
        assert_eq!(&window[0] + &window[1], window[2]);
    }

    let sum: BigUint = sequence.iter().sum();
    assert_eq!(summary.total_sum, sum);
    assert_eq!(summary.last_value.as_ref(), sequence.last());

    if let [.., previous, last] = sequence.as_slice() {
        assert_eq!(summary.golden_ratio, ratio(last, previous));
    } else {
        assert!(summary.golden_ratio.is_none());
    }
});
