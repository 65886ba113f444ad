//! Pay calculation models.
//!
//! This module contains the rate bucket classification, the per-slot
//! [`RateSlot`] produced by slicing, and the two rounded summaries returned
//! to callers: [`ShiftPayResult`] and [`PeriodTotals`].

use chrono::NaiveTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The wage-rate category a slot of worked time falls into.
///
/// # Example
///
/// ```
/// use shift_pay::models::RateBucket;
///
/// assert_eq!(RateBucket::MorningPremium.to_string(), "Morning-Premium");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateBucket {
    /// Early-morning window on any day other than Saturday.
    MorningPremium,
    /// Any time on a Saturday.
    Saturday,
    /// Everything else.
    Standard,
}

impl RateBucket {
    /// All buckets, in reporting order.
    pub const ALL: [RateBucket; 3] = [
        RateBucket::MorningPremium,
        RateBucket::Saturday,
        RateBucket::Standard,
    ];
}

impl std::fmt::Display for RateBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RateBucket::MorningPremium => write!(f, "Morning-Premium"),
            RateBucket::Saturday => write!(f, "Saturday"),
            RateBucket::Standard => write!(f, "Standard"),
        }
    }
}

/// A slice of a shift, rated as a unit.
///
/// Slots are derived on demand and never stored. The bucket is decided at
/// `start`; a rate boundary falling inside the slot does not split it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateSlot {
    /// The slot start time.
    pub start: NaiveTime,
    /// The slot end time (exclusive).
    pub end: NaiveTime,
    /// The slot length in hours, unrounded.
    pub duration_hours: Decimal,
    /// The rate bucket chosen at `start`.
    pub bucket: RateBucket,
}

impl RateSlot {
    /// Returns the exact slot length in whole seconds.
    pub fn duration_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }
}

/// Duration and pay for a single shift.
///
/// Both values carry exactly two fraction digits and serialize as decimal
/// strings, e.g. `"3.00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftPayResult {
    /// Total hours worked.
    pub duration_hours: Decimal,
    /// Total pay for the shift.
    pub amount: Decimal,
}

/// Hour subtotals per bucket and total pay across a set of shifts.
///
/// Every field carries exactly two fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodTotals {
    /// Hours worked in the Morning-Premium bucket.
    pub morning_premium_hours: Decimal,
    /// Hours worked in the Saturday bucket.
    pub saturday_hours: Decimal,
    /// Hours worked in the Standard bucket.
    pub standard_hours: Decimal,
    /// Pay across all buckets.
    pub total_amount: Decimal,
}

impl PeriodTotals {
    /// Returns the hour subtotal for one bucket.
    pub fn hours_for(&self, bucket: RateBucket) -> Decimal {
        match bucket {
            RateBucket::MorningPremium => self.morning_premium_hours,
            RateBucket::Saturday => self.saturday_hours,
            RateBucket::Standard => self.standard_hours,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_bucket_display() {
        assert_eq!(format!("{}", RateBucket::MorningPremium), "Morning-Premium");
        assert_eq!(format!("{}", RateBucket::Saturday), "Saturday");
        assert_eq!(format!("{}", RateBucket::Standard), "Standard");
    }

    #[test]
    fn test_bucket_serialization() {
        let json = serde_json::to_string(&RateBucket::MorningPremium).unwrap();
        assert_eq!(json, "\"morning_premium\"");

        let deserialized: RateBucket = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, RateBucket::MorningPremium);
    }

    #[test]
    fn test_shift_pay_result_serializes_amounts_as_strings() {
        let result = ShiftPayResult {
            duration_hours: dec("3.00"),
            amount: dec("47.25"),
        };

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(json, r#"{"duration_hours":"3.00","amount":"47.25"}"#);
    }

    #[test]
    fn test_period_totals_hours_for() {
        let totals = PeriodTotals {
            morning_premium_hours: dec("1.50"),
            saturday_hours: dec("2.00"),
            standard_hours: dec("1.50"),
            total_amount: dec("80.25"),
        };

        assert_eq!(totals.hours_for(RateBucket::MorningPremium), dec("1.50"));
        assert_eq!(totals.hours_for(RateBucket::Saturday), dec("2.00"));
        assert_eq!(totals.hours_for(RateBucket::Standard), dec("1.50"));
    }

    #[test]
    fn test_rate_slot_serialization() {
        let slot = RateSlot {
            start: NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
            end: NaiveTime::from_hms_opt(6, 45, 0).unwrap(),
            duration_hours: dec("0.25"),
            bucket: RateBucket::MorningPremium,
        };

        let json = serde_json::to_string(&slot).unwrap();
        assert!(json.contains("\"bucket\":\"morning_premium\""));
        assert!(json.contains("\"duration_hours\":\"0.25\""));

        let deserialized: RateSlot = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, slot);
    }
}
