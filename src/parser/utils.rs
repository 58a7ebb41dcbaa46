//! This module contains auxiliary parsers

use num::{BigInt, BigRational, Zero};
use std::str::FromStr;

/// Builds an exact rational out of a decimal number already validated by the grammar
pub(crate) fn parse_rational(number: &str) -> BigRational {
    let mut num = String::new();
    let mut den = "1".to_string();
    let mut decimal = false;
    for c in number.chars() {
        if c == '.' {
            decimal = true
        } else {
            num.push(c);
            if decimal {
                den.push('0')
            };
        }
    }
    BigRational::new(
        BigInt::from_str(num.as_str()).unwrap_or_else(|_| BigInt::zero()),
        BigInt::from_str(den.as_str()).unwrap_or_else(|_| BigInt::from(1)),
    )
}
