//! Final rounding of calculated figures.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of fraction digits in every reported figure.
pub const REPORTED_DECIMAL_PLACES: u32 = 2;

/// Rounds a full-precision figure to two fraction digits, half away from zero.
///
/// The result always carries exactly two fraction digits, so it prints as
/// `"3.00"` rather than `"3"`. Apply this once to a finished total, never to
/// the per-slot terms that make it up.
///
/// # Example
///
/// ```
/// use shift_pay::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_to_cents(Decimal::from_str("7.875").unwrap()).to_string(), "7.88");
/// assert_eq!(round_to_cents(Decimal::ZERO).to_string(), "0.00");
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(REPORTED_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(REPORTED_DECIMAL_PLACES);
    rounded
}
