//! Slot slicing and rate bucket selection.
//!
//! A shift is walked in fixed-size slots from its start time. Each slot is
//! assigned a [`RateBucket`] by looking at the weekday and the slot's start
//! instant only, so rate boundaries are resolved at slot granularity: a slot
//! that starts at 07:50 is Morning-Premium for all 15 minutes even though
//! the window closes at 08:00.

use std::iter::FusedIterator;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Timelike, Weekday};
use rust_decimal::Decimal;

use crate::config::RatePolicy;
use crate::error::EngineResult;
use crate::models::{RateBucket, RateSlot, ensure_interval};

const SECONDS_PER_HOUR: i64 = 3600;

/// Converts a wall-clock time to a decimal hour (6:30 is 6.5).
pub fn decimal_hour(time: NaiveTime) -> Decimal {
    seconds_to_hours(Decimal::from(time.num_seconds_from_midnight()))
}

/// Converts a seconds-based figure (a duration, or a duration times a rate)
/// to its per-hour value.
pub(crate) fn seconds_to_hours(seconds: Decimal) -> Decimal {
    seconds / Decimal::from(SECONDS_PER_HOUR)
}

/// Chooses the rate bucket for an instant on a given date.
///
/// Saturday overrides everything. On any other day, including Sunday, an
/// instant inside the Morning-Premium window is Morning-Premium. Everything
/// else is Standard.
///
/// # Example
///
/// ```
/// use shift_pay::calculation::bucket_for;
/// use shift_pay::config::RatePolicy;
/// use shift_pay::models::RateBucket;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let policy = RatePolicy::default();
/// let monday = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let saturday = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
/// let seven = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
///
/// assert_eq!(bucket_for(monday, seven, &policy), RateBucket::MorningPremium);
/// assert_eq!(bucket_for(saturday, seven, &policy), RateBucket::Saturday);
/// ```
pub fn bucket_for(date: NaiveDate, time: NaiveTime, policy: &RatePolicy) -> RateBucket {
    if date.weekday() == Weekday::Sat {
        return RateBucket::Saturday;
    }

    let hour = decimal_hour(time);
    let window = &policy.morning_premium;
    if hour >= window.start_hour && hour < window.end_hour {
        RateBucket::MorningPremium
    } else {
        RateBucket::Standard
    }
}

/// A lazy walk over the slots of one same-day interval.
///
/// Every slot is `slot_minutes` long except the last, which is cut short to
/// end exactly at the interval end. The slots are contiguous and their
/// durations add up to the interval length.
///
/// Construct with [`RateSlicer::new`] or [`slice`]. The slicer is `Clone`, so
/// the same walk can be replayed.
///
/// # Example
///
/// ```
/// use shift_pay::calculation::slice;
/// use chrono::{NaiveDate, NaiveTime};
///
/// let date = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
/// let start = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
/// let end = NaiveTime::from_hms_opt(9, 50, 0).unwrap();
///
/// let minutes: Vec<i64> = slice(date, start, end)
///     .unwrap()
///     .map(|slot| (slot.end - slot.start).num_minutes())
///     .collect();
/// assert_eq!(minutes, vec![15, 15, 15, 5]);
/// ```
#[derive(Debug, Clone)]
pub struct RateSlicer {
    date: NaiveDate,
    cursor: NaiveTime,
    end: NaiveTime,
    step: Duration,
    policy: RatePolicy,
}

impl RateSlicer {
    /// Creates a slicer over `[start, end)` on `date`.
    ///
    /// # Errors
    ///
    /// - [`crate::error::EngineError::MalformedInterval`] if `start >= end`
    /// - [`crate::error::EngineError::InvalidConfig`] if `policy` has a zero
    ///   slot size or an empty premium window
    pub fn new(
        date: NaiveDate,
        start: NaiveTime,
        end: NaiveTime,
        policy: &RatePolicy,
    ) -> EngineResult<Self> {
        ensure_interval(start, end)?;
        policy.validate()?;
        Ok(Self {
            date,
            cursor: start,
            end,
            step: Duration::minutes(i64::from(policy.slot_minutes)),
            policy: *policy,
        })
    }
}

impl Iterator for RateSlicer {
    type Item = RateSlot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor >= self.end {
            return None;
        }

        let start = self.cursor;
        // Stepping only while a full slot fits keeps the cursor from wrapping past midnight
        let end = if self.end - start > self.step {
            start + self.step
        } else {
            self.end
        };
        self.cursor = end;

        Some(RateSlot {
            start,
            end,
            duration_hours: seconds_to_hours(Decimal::from((end - start).num_seconds())),
            bucket: bucket_for(self.date, start, &self.policy),
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.cursor >= self.end {
            return (0, Some(0));
        }
        let remaining = (self.end - self.cursor).num_seconds();
        let step = self.step.num_seconds();
        let slots = ((remaining + step - 1) / step) as usize;
        (slots, Some(slots))
    }
}

impl ExactSizeIterator for RateSlicer {}

impl FusedIterator for RateSlicer {}

/// Slices `[start, end)` on `date` using the default 15-minute policy.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MalformedInterval`] if `start >= end`.
pub fn slice(date: NaiveDate, start: NaiveTime, end: NaiveTime) -> EngineResult<RateSlicer> {
    RateSlicer::new(date, start, end, &RatePolicy::default())
}
