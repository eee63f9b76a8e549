//! Conversion into the [factorial number system](https://en.wikipedia.org/wiki/Factorial_number_system),
//! a mixed-radix notation in which the digit at position `i` has radix `i + 2` and weight `(i + 1)!`.
//!
//! The coefficient of `0!` is structurally zero and is omitted, so the first digit is the
//! coefficient of `1!`. For example,
//!
//! 10 = 1·3! + 2·2! + 0·1! + 0·0!, which becomes `[0, 2, 1]`.
//!
//! Negative values are not canonicalised: every digit carries the sign of the input, so `-10`
//! becomes `[0, -2, -1]`.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};
use tracing::trace;

use crate::error::InvalidArgument;

/// Digits of `value` in the factorial number system, least significant (the `1!` place) first.
/// Zero yields no digits.
///
/// Each digit is the remainder of successive truncating divisions by 2, 3, 4, ... until the
/// quotient reaches zero. Truncating division gives the remainder the dividend's sign, which
/// is what makes the digits of a negative value come out negative.
pub fn decimal_to_factorial_digits(value: &BigInt) -> Vec<i64> {
    let mut digits = vec![];
    let mut dividend = value.clone();
    let mut radix = 2u64;
    while !dividend.is_zero() {
        let (quotient, remainder) = dividend.div_rem(&BigInt::from(radix));
        digits.push(to_digit(&remainder, radix));
        dividend = quotient;
        radix += 1;
    }
    trace!("{value} has {} factorial digits", digits.len());
    digits
}

/// As [`decimal_to_factorial_digits`], for callers holding a value that may be absent.
pub fn try_decimal_to_factorial_digits(
    value: Option<&BigInt>,
) -> Result<Vec<i64>, InvalidArgument> {
    value
        .map(decimal_to_factorial_digits)
        .ok_or(InvalidArgument::MissingValue)
}

/// Reassembles a value from its factorial digits, as `Σ digits[i] · (i + 1)!`. An empty slice
/// yields zero.
pub fn factorial_digits_to_decimal(digits: &[i64]) -> BigInt {
    let mut value = BigInt::zero();
    let mut weight = BigInt::one();
    for (index, &digit) in digits.iter().enumerate() {
        value += &weight * digit;
        weight *= index as u64 + 2;
    }
    value
}

fn to_digit(remainder: &BigInt, radix: u64) -> i64 {
    remainder
        .to_i64()
        .unwrap_or_else(|| unreachable!("remainder {remainder} exceeds radix {radix}"))
}
