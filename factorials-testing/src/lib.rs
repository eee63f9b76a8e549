//! Testing helpers.

use num_bigint::{BigInt, Sign};
use tinyrand::Rand;

/// Parses a decimal literal, as used for expected values too large for native integers.
pub fn big(literal: &str) -> BigInt {
    literal
        .parse()
        .unwrap_or_else(|err| panic!("invalid decimal literal {literal}: {err}"))
}

/// A random signed integer with a magnitude of up to `words` random 64-bit words. Zero words
/// yields zero.
pub fn random_bigint(rand: &mut impl Rand, words: usize) -> BigInt {
    let sign = if rand.next_u64() & 1 == 0 {
        Sign::Plus
    } else {
        Sign::Minus
    };
    let magnitude = (0..words * 2).map(|_| rand.next_u32()).collect::<Vec<_>>();
    BigInt::new(sign, magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tinyrand::{Seeded, StdRand};

    #[test]
    fn parse() {
        assert_eq!(BigInt::from(-42), big("-42"));
        assert_eq!(BigInt::from(u64::MAX) * 10 + 5, big("184467440737095516155"));
    }

    #[test]
    #[should_panic(expected = "invalid decimal literal")]
    fn parse_invalid() {
        big("4x2");
    }

    #[test]
    fn random_bounded() {
        let mut rand = StdRand::seed(0);
        assert_eq!(BigInt::from(0), random_bigint(&mut rand, 0));
        for words in 1..8 {
            let value = random_bigint(&mut rand, words);
            assert!(value.bits() <= words as u64 * 64, "{value}");
        }
    }
}
