use std::env;

use num_bigint::BigInt;
use tracing::info;

use factorials::factoradic::factorial_digits_to_decimal;
use factorials::factorial::{log2_factorial, max_factorial_digit};
use factorials::{combinations, decimal_to_factorial_digits, factorial, long_factorial};

fn main() -> anyhow::Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "debug")
    }
    tracing_subscriber::fmt::init();

    // the native table covers up to 20!; anything larger is multiplied out
    for n in [5, 20, 21, 100] {
        let long = long_factorial(n)?;
        let big = factorial(n)?;
        info!("{n}! = {big} (native: {long:?})");
    }

    info!("C(15, 4) = {}", combinations(15, 4)?);
    info!("C(100, 50) = {}", combinations(100, 50)?);

    for value in [10, -10, 100_000] {
        let value = BigInt::from(value);
        let digits = decimal_to_factorial_digits(&value);
        let reassembled = factorial_digits_to_decimal(&digits);
        info!("{value} in factorial digits: {digits:?} (reassembled: {reassembled})");
    }

    let bits = f64::from(1u32 << 20);
    info!(
        "a {bits}-bit integer holds factorials up to {}! ({:.1} bits for 1000!)",
        max_factorial_digit(bits).unwrap_or_default(),
        log2_factorial(1_000)
    );
    Ok(())
}
