//! Pay calculation for a single shift.
//!
//! This module slices one shift and prices every slot with the rate table
//! it is given, producing the duration and amount shown per shift.

use rust_decimal::Decimal;

use crate::config::{RatePolicy, RateTable};
use crate::error::EngineResult;
use crate::models::{Shift, ShiftPayResult};

use super::{RateSlicer, round_to_cents, seconds_to_hours};

/// Computes duration and pay for one shift with the default policy.
///
/// Slot seconds and seconds-times-rate are summed exactly; each total is
/// converted to hours and rounded to two places only once, at the end.
///
/// Pass [`RateTable::shift_pay`] (or the loaded `shift_pay` table) for the
/// per-shift view.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MalformedInterval`] if the shift
/// starts at or after its end.
///
/// # Examples
///
/// ```
/// use shift_pay::calculation::compute_pay;
/// use shift_pay::config::RateTable;
/// use shift_pay::models::Shift;
///
/// // Monday: 0.5h Standard, 1.5h Morning-Premium, 1h Standard
/// let shift = Shift::parse("shift_001", "2024-03-04", "06:00", "09:00").unwrap();
/// let result = compute_pay(&shift, &RateTable::shift_pay()).unwrap();
///
/// assert_eq!(result.duration_hours.to_string(), "3.00");
/// assert_eq!(result.amount.to_string(), "47.25");
/// ```
pub fn compute_pay(shift: &Shift, rates: &RateTable) -> EngineResult<ShiftPayResult> {
    compute_pay_with_policy(shift, rates, &RatePolicy::default())
}

/// Computes duration and pay for one shift under an explicit policy.
///
/// # Errors
///
/// - [`crate::error::EngineError::MalformedInterval`] if the shift starts at
///   or after its end
/// - [`crate::error::EngineError::InvalidConfig`] if `policy` is invalid
pub fn compute_pay_with_policy(
    shift: &Shift,
    rates: &RateTable,
    policy: &RatePolicy,
) -> EngineResult<ShiftPayResult> {
    // Seconds and rates are both exact, so only the final division can leave a remainder
    let mut seconds = 0_i64;
    let mut rated_seconds = Decimal::ZERO;

    for slot in RateSlicer::new(shift.date, shift.start, shift.end, policy)? {
        let slot_seconds = slot.duration_seconds();
        seconds += slot_seconds;
        rated_seconds += Decimal::from(slot_seconds) * rates.rate_for(slot.bucket);
    }

    Ok(ShiftPayResult {
        duration_hours: round_to_cents(seconds_to_hours(Decimal::from(seconds))),
        amount: round_to_cents(seconds_to_hours(rated_seconds)),
    })
}
