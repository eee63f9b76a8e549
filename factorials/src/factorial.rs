//! Exact factorials over arbitrary-precision integers.
//!
//! Values up to [`MAX_LONG_FACTORIAL_DIGIT`]`!` are served from a precomputed native table;
//! larger values extend the last table entry with a [`RangeProduct`].
//!
//! There is no enforced upper bound on `n`. The practical ceiling is memory: `n!` needs
//! roughly [`log2_factorial`]`(n)` bits, and [`max_factorial_digit`] gives the largest `n`
//! for a given bit budget.

use num_bigint::BigInt;
use tracing::debug;

use crate::error::{check_non_negative, InvalidArgument};
use crate::range::{Accumulated, RangeProduct};

/// Largest `n` for which `n!` fits in an `i64`.
pub const MAX_LONG_FACTORIAL_DIGIT: i32 = 20;

const LONG_FACTORIALS: [i64; MAX_LONG_FACTORIAL_DIGIT as usize + 1] = {
    let mut entries = [1i64; MAX_LONG_FACTORIAL_DIGIT as usize + 1];
    let mut i = 2;
    while i < entries.len() {
        entries[i] = i as i64 * entries[i - 1];
        i += 1;
    }
    entries
};

pub fn max_long_factorial_digit() -> i32 {
    MAX_LONG_FACTORIAL_DIGIT
}

/// `n!` as an `i64`, or `None` if it would not fit. Never approximates.
pub fn long_factorial(n: i32) -> Result<Option<i64>, InvalidArgument> {
    check_non_negative(n)?;
    Ok(LONG_FACTORIALS.get(n as usize).copied())
}

/// Exact `n!`.
pub fn factorial(n: i32) -> Result<BigInt, InvalidArgument> {
    factorial_with(n, &Accumulated)
}

/// Exact `n!`, using `range_product` to multiply out the part beyond the native table.
pub fn factorial_with(n: i32, range_product: &impl RangeProduct) -> Result<BigInt, InvalidArgument> {
    if let Some(value) = long_factorial(n)? {
        return Ok(BigInt::from(value));
    }

    debug!("computing {n}! beyond the native table");
    let k = MAX_LONG_FACTORIAL_DIGIT;
    let head = BigInt::from(LONG_FACTORIALS[k as usize]);
    Ok(head * range_product.multiply_range(i64::from(k) + 1, i64::from(n) + 1))
}

/// Above this, [`log2_factorial`] switches from summing logarithms to Stirling's series.
const STIRLING_THRESHOLD: u64 = 1_024;

/// Estimated number of bits in `n!`, as `log2(2) + log2(3) + ... + log2(n)`.
pub fn log2_factorial(n: u64) -> f64 {
    if n <= STIRLING_THRESHOLD {
        return (2..=n).map(|i| (i as f64).log2()).sum();
    }

    // ln n! ≈ n ln n - n + ln(2πn)/2 + 1/12n - 1/360n³ + 1/1260n⁵
    let n = n as f64;
    let ln = n * n.ln() - n + (2.0 * std::f64::consts::PI * n).ln() / 2.0 + 1.0 / (12.0 * n)
        - 1.0 / (360.0 * n.powi(3))
        + 1.0 / (1260.0 * n.powi(5));
    ln / std::f64::consts::LN_2
}

/// The largest `n` whose factorial needs fewer than `bit_limit` bits, according to
/// [`log2_factorial`]. Never less than 1, since `0!` and `1!` need no bits at all.
///
/// `None` if `bit_limit` is not finite, or if the answer would not fit in a `u64`.
pub fn max_factorial_digit(bit_limit: f64) -> Option<u64> {
    if !bit_limit.is_finite() {
        return None;
    }

    let (mut lo, mut hi) = (1u64, 2u64);
    while log2_factorial(hi) < bit_limit {
        lo = hi;
        hi = hi.checked_mul(2)?;
    }
    while hi - lo > 1 {
        let mid = lo + (hi - lo) / 2;
        if log2_factorial(mid) < bit_limit {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    Some(lo)
}
