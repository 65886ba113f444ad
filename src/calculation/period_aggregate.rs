//! Reporting-period aggregation.
//!
//! This module slices every shift in a set and accumulates hours per rate
//! bucket together with total pay, for the dashboard summary.
//!
//! A malformed shift fails the whole call; no shift is ever skipped.

use rust_decimal::Decimal;

use crate::config::{RatePolicy, RateTable};
use crate::error::EngineResult;
use crate::models::{PeriodTotals, RateBucket, RateSlot, ReportingPeriod, Shift};

use super::{RateSlicer, round_to_cents, seconds_to_hours};

/// Exact running totals, kept in seconds until [`BucketAccumulator::finish`].
#[derive(Debug, Default)]
struct BucketAccumulator {
    morning_premium_seconds: i64,
    saturday_seconds: i64,
    standard_seconds: i64,
    rated_seconds: Decimal,
}

impl BucketAccumulator {
    fn add(&mut self, slot: &RateSlot, rates: &RateTable) {
        let seconds = match slot.bucket {
            RateBucket::MorningPremium => &mut self.morning_premium_seconds,
            RateBucket::Saturday => &mut self.saturday_seconds,
            RateBucket::Standard => &mut self.standard_seconds,
        };
        let slot_seconds = slot.duration_seconds();
        *seconds += slot_seconds;
        self.rated_seconds += Decimal::from(slot_seconds) * rates.rate_for(slot.bucket);
    }

    fn finish(self) -> PeriodTotals {
        let hours = |seconds: i64| round_to_cents(seconds_to_hours(Decimal::from(seconds)));
        PeriodTotals {
            morning_premium_hours: hours(self.morning_premium_seconds),
            saturday_hours: hours(self.saturday_seconds),
            standard_hours: hours(self.standard_seconds),
            total_amount: round_to_cents(seconds_to_hours(self.rated_seconds)),
        }
    }
}

/// Aggregates a set of shifts with the default policy.
///
/// Pass [`RateTable::period_summary`] (or the loaded `period_summary` table)
/// for the dashboard view. An empty set yields `0.00` everywhere.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MalformedInterval`] for the first
/// shift that starts at or after its end; no partial totals are returned.
///
/// # Examples
///
/// ```
/// use shift_pay::calculation::aggregate;
/// use shift_pay::config::RateTable;
/// use shift_pay::models::Shift;
///
/// let shifts = vec![
///     Shift::parse("shift_001", "2024-03-04", "06:00", "09:00").unwrap(),
///     Shift::parse("shift_002", "2024-03-09", "10:00", "12:00").unwrap(),
/// ];
/// let totals = aggregate(&shifts, &RateTable::period_summary()).unwrap();
///
/// assert_eq!(totals.standard_hours.to_string(), "1.50");
/// assert_eq!(totals.morning_premium_hours.to_string(), "1.50");
/// assert_eq!(totals.saturday_hours.to_string(), "2.00");
/// assert_eq!(totals.total_amount.to_string(), "80.25");
/// ```
pub fn aggregate<'a, I>(shifts: I, rates: &RateTable) -> EngineResult<PeriodTotals>
where
    I: IntoIterator<Item = &'a Shift>,
{
    aggregate_with_policy(shifts, rates, &RatePolicy::default())
}

/// Aggregates a set of shifts under an explicit policy.
///
/// # Errors
///
/// - [`crate::error::EngineError::MalformedInterval`] for the first shift that
///   starts at or after its end
/// - [`crate::error::EngineError::InvalidConfig`] if `policy` is invalid
pub fn aggregate_with_policy<'a, I>(
    shifts: I,
    rates: &RateTable,
    policy: &RatePolicy,
) -> EngineResult<PeriodTotals>
where
    I: IntoIterator<Item = &'a Shift>,
{
    let mut accumulator = BucketAccumulator::default();

    for shift in shifts {
        for slot in RateSlicer::new(shift.date, shift.start, shift.end, policy)? {
            accumulator.add(&slot, rates);
        }
    }

    Ok(accumulator.finish())
}

/// Aggregates only the shifts dated within `period`.
///
/// Every shift is validated, including those dated outside the period; only
/// the in-period ones are priced.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MalformedInterval`] for the first
/// shift, in or out of the period, that starts at or after its end.
pub fn aggregate_in_period<'a, I>(
    shifts: I,
    period: &ReportingPeriod,
    rates: &RateTable,
    policy: &RatePolicy,
) -> EngineResult<PeriodTotals>
where
    I: IntoIterator<Item = &'a Shift>,
{
    let mut in_period = Vec::new();
    for shift in shifts {
        shift.validate()?;
        if period.contains_date(shift.date) {
            in_period.push(shift);
        }
    }

    aggregate_with_policy(in_period, rates, policy)
}
