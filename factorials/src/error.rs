//! Argument validation errors.

use thiserror::Error;

/// The single error kind raised by this crate. Every variant is a deterministic function of
/// the caller's input; nothing is retried or recovered internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("digit is negative number (n = {n})")]
    NegativeDigit { n: i32 },

    #[error("k = {k} is more than n = {n}")]
    KExceedsN { n: i32, k: i32 },

    #[error("k = {k} is negative number")]
    NegativeK { k: i32 },

    #[error("value is absent")]
    MissingValue,
}

pub(crate) fn check_non_negative(n: i32) -> Result<(), InvalidArgument> {
    if n < 0 {
        Err(InvalidArgument::NegativeDigit { n })
    } else {
        Ok(())
    }
}
