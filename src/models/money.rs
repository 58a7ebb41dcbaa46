use num::rational::BigRational;
use num::{BigInt, Integer, Signed};

/// Formats an amount as dollars and cents, `$X.XX`
///
/// Calculations are done with rational numbers so that everything adds up correctly,
/// rounding only happens here, to the nearest cent and half away from zero.
/// # Examples
/// ```rust
/// # use split::models::format_money;
/// # use num::{BigInt, BigRational};
/// let amount = BigRational::new(BigInt::from(10 * 5722), BigInt::from(3500));
/// assert_eq!(format_money(&amount), "$16.35");
/// ```
pub fn format_money(amount: &BigRational) -> String {
    let cents = (amount.clone() * BigInt::from(100)).round().to_integer();
    let sign = if cents.is_negative() { "-" } else { "" };
    let (dollars, cents) = cents.abs().div_rem(&BigInt::from(100));
    format!("{}${}.{:02}", sign, dollars, cents)
}
