//! Combinatorics.

use num_bigint::BigInt;
use num_traits::One;

use crate::error::InvalidArgument;
use crate::factorial::factorial_with;
use crate::range::{Accumulated, RangeProduct};

/// Binomial coefficient: the number of combinations obtained when sampling `k` items from a
/// set of `n` without replacement.
pub fn combinations(n: i32, k: i32) -> Result<BigInt, InvalidArgument> {
    combinations_with(n, k, &Accumulated)
}

/// As [`combinations`], computing `n! / (n - s)!` and `s!` with `range_product`, where
/// `s = min(k, n - k)`. The full `n!` is never materialised.
pub fn combinations_with(
    n: i32,
    k: i32,
    range_product: &impl RangeProduct,
) -> Result<BigInt, InvalidArgument> {
    check_combinations(n, k)?;
    if k == 0 {
        return Ok(BigInt::one());
    }

    let s = k.min(n - k);
    let numerator = range_product.multiply_range(i64::from(n) - i64::from(s) + 1, i64::from(n) + 1);
    let denominator = factorial_with(s, range_product)?;
    Ok(numerator / denominator)
}

fn check_combinations(n: i32, k: i32) -> Result<(), InvalidArgument> {
    if k > n {
        Err(InvalidArgument::KExceedsN { n, k })
    } else if k < 0 {
        Err(InvalidArgument::NegativeK { k })
    } else {
        Ok(())
    }
}
