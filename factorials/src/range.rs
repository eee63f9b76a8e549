//! Products over half-open integer ranges, the building block of both [`factorial`](crate::factorial)
//! and [`combinations`](crate::comb::combinations).

use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::trace;

/// Bits a signed 64-bit register can hold without overflowing.
const REGISTER_BITS: u32 = 63;

pub trait RangeProduct {
    /// Multiplies every integer in `start_inclusive..end_exclusive`. An empty range yields 1;
    /// a range straddling zero (`start_inclusive <= 0 < end_exclusive`) yields 0.
    fn multiply_range(&self, start_inclusive: i64, end_exclusive: i64) -> BigInt;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Direct;

impl RangeProduct for Direct {
    fn multiply_range(&self, start_inclusive: i64, end_exclusive: i64) -> BigInt {
        if straddles_zero(start_inclusive, end_exclusive) {
            return BigInt::zero();
        }

        let mut product = BigInt::one();
        for i in start_inclusive..end_exclusive {
            product *= i;
        }
        product
    }
}

/// Runs the product in a native register for as long as the next factor is guaranteed not to
/// overflow it, then flushes the register into the arbitrary-precision product. Most of the
/// multiplications therefore happen in native arithmetic.
#[derive(Debug, Default, Clone, Copy)]
pub struct Accumulated;

impl RangeProduct for Accumulated {
    fn multiply_range(&self, start_inclusive: i64, end_exclusive: i64) -> BigInt {
        if straddles_zero(start_inclusive, end_exclusive) {
            return BigInt::zero();
        }

        let mut product = BigInt::one();
        let mut register = 1i64;
        let mut flushes = 0usize;
        for i in start_inclusive..end_exclusive {
            register *= i;
            if !fits_next(register, i + 1) {
                product *= register;
                register = 1;
                flushes += 1;
            }
        }

        if register != 1 {
            product *= register;
            flushes += 1;
        }
        trace!("multiplied {start_inclusive}..{end_exclusive} with {flushes} flushes");
        product
    }
}

fn straddles_zero(start_inclusive: i64, end_exclusive: i64) -> bool {
    start_inclusive <= 0 && end_exclusive > 0
}

/// Whether `register * next` is certain to stay within [`REGISTER_BITS`].
#[inline]
fn fits_next(register: i64, next: i64) -> bool {
    let next_bits = bit_length(next).max(bit_length(next.saturating_add(1)));
    bit_length(register) + next_bits <= REGISTER_BITS
}

#[inline]
fn bit_length(value: i64) -> u32 {
    u64::BITS - value.unsigned_abs().leading_zeros()
}

#[cfg(test)]
mod tests {
    use super::*;
    use factorials_testing::big;
    use tinyrand::{Rand, Seeded, StdRand};

    #[test]
    fn test_bit_length() {
        assert_eq!(0, bit_length(0));
        assert_eq!(1, bit_length(1));
        assert_eq!(2, bit_length(2));
        assert_eq!(2, bit_length(3));
        assert_eq!(3, bit_length(4));
        assert_eq!(3, bit_length(-4));
        assert_eq!(63, bit_length(i64::MAX));
        assert_eq!(64, bit_length(i64::MIN));
    }

    #[test]
    fn test_fits_next() {
        assert!(fits_next(1, 2));
        assert!(fits_next(1 << 60, 2));
        assert!(!fits_next(1 << 61, 2));
        assert!(!fits_next(i64::MAX, 1));
    }

    #[test]
    fn direct() {
        test_impl(Direct);
    }

    #[test]
    fn accumulated() {
        test_impl(Accumulated);
    }

    fn test_impl(p: impl RangeProduct) {
        assert_eq!(BigInt::one(), p.multiply_range(5, 5));
        assert_eq!(BigInt::one(), p.multiply_range(7, 3));
        assert_eq!(BigInt::from(5), p.multiply_range(5, 6));
        assert_eq!(BigInt::from(120), p.multiply_range(1, 6));
        assert_eq!(BigInt::from(60), p.multiply_range(3, 6));
        assert_eq!(BigInt::zero(), p.multiply_range(0, 6));
        assert_eq!(BigInt::zero(), p.multiply_range(-3, 1));
        assert_eq!(BigInt::from(-6), p.multiply_range(-3, 0));
        assert_eq!(BigInt::from(24), p.multiply_range(-4, 0));
        assert_eq!(
            big("51090942171709440000"),
            p.multiply_range(1, 22)
        );
        assert_eq!(
            big("15511210043330985984000000"),
            p.multiply_range(1, 26)
        );
    }

    #[test]
    fn accumulated_agrees_with_direct() {
        let mut rand = StdRand::seed(42);
        for _ in 0..200 {
            let start = rand.next_lim_u64(1_000) as i64 + 1;
            let len = rand.next_lim_u64(300) as i64;
            assert_eq!(
                Direct.multiply_range(start, start + len),
                Accumulated.multiply_range(start, start + len),
                "range {start}..{}",
                start + len
            );
        }
    }

    #[test]
    fn accumulated_large_factors() {
        let start = (1i64 << 40) - 3;
        let end = start + 16;
        assert_eq!(
            Direct.multiply_range(start, end),
            Accumulated.multiply_range(start, end)
        );

        let start = -(1i64 << 40);
        let end = start + 16;
        assert_eq!(
            Direct.multiply_range(start, end),
            Accumulated.multiply_range(start, end)
        );
    }
}
