//! Exact factorials, binomial coefficients and factorial number system conversion over
//! arbitrary-precision integers.
//!
//! Every operation is a pure function of its arguments. The only shared state is a read-only
//! table of native factorials, so everything here may be called concurrently without locking.

pub mod comb;
pub mod error;
pub mod factoradic;
pub mod factorial;
pub mod range;

pub use comb::combinations;
pub use error::InvalidArgument;
pub use factoradic::{decimal_to_factorial_digits, try_decimal_to_factorial_digits};
pub use factorial::{factorial, long_factorial, max_long_factorial_digit};

#[doc = include_str!("../../README.md")]
#[cfg(doc)]
fn readme() {}
