//! Configuration types for shift pay calculation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::RateBucket;

/// Hourly rate for each bucket.
///
/// Every calculation takes the table it should price with as an explicit
/// argument; there is no implicit global rate.
///
/// # Example
///
/// ```
/// use shift_pay::config::RateTable;
/// use shift_pay::models::RateBucket;
/// use rust_decimal::Decimal;
///
/// let table = RateTable::shift_pay();
/// assert_eq!(table.rate_for(RateBucket::Saturday), Decimal::new(160, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    /// Rate for Standard hours.
    pub standard: Decimal,
    /// Rate for Saturday hours.
    pub saturday: Decimal,
    /// Rate for Morning-Premium hours.
    pub morning_premium: Decimal,
}

impl RateTable {
    /// The table used to price a single shift.
    pub fn shift_pay() -> Self {
        Self {
            standard: Decimal::new(145, 1),
            saturday: Decimal::new(160, 1),
            morning_premium: Decimal::new(170, 1),
        }
    }

    /// The table used for reporting-period totals.
    ///
    /// Differs from [`RateTable::shift_pay`] on the Saturday rate.
    pub fn period_summary() -> Self {
        Self {
            standard: Decimal::new(145, 1),
            saturday: Decimal::new(165, 1),
            morning_premium: Decimal::new(170, 1),
        }
    }

    /// Returns the hourly rate for a bucket.
    pub fn rate_for(&self, bucket: RateBucket) -> Decimal {
        match bucket {
            RateBucket::MorningPremium => self.morning_premium,
            RateBucket::Saturday => self.saturday,
            RateBucket::Standard => self.standard,
        }
    }

    /// Rejects zero and negative rates.
    pub(crate) fn validate(&self, name: &str) -> EngineResult<()> {
        for bucket in RateBucket::ALL {
            let rate = self.rate_for(bucket);
            if rate <= Decimal::ZERO {
                return Err(EngineError::InvalidConfig {
                    message: format!("{} rate for {} must be positive, got {}", name, bucket, rate),
                });
            }
        }
        Ok(())
    }
}

/// Both rate tables, as stored in `rates.yaml`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatesConfig {
    /// Rates for per-shift pay.
    pub shift_pay: RateTable,
    /// Rates for reporting-period totals.
    pub period_summary: RateTable,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            shift_pay: RateTable::shift_pay(),
            period_summary: RateTable::period_summary(),
        }
    }
}

/// A bucket where the two rate tables disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateDiscrepancy {
    /// The bucket with differing rates.
    pub bucket: RateBucket,
    /// The rate in the shift pay table.
    pub shift_pay: Decimal,
    /// The rate in the period summary table.
    pub period_summary: Decimal,
}

impl RatesConfig {
    /// Lists every bucket priced differently by the two tables.
    pub fn discrepancies(&self) -> Vec<RateDiscrepancy> {
        RateBucket::ALL
            .into_iter()
            .filter_map(|bucket| {
                let shift_pay = self.shift_pay.rate_for(bucket);
                let period_summary = self.period_summary.rate_for(bucket);
                (shift_pay != period_summary).then_some(RateDiscrepancy {
                    bucket,
                    shift_pay,
                    period_summary,
                })
            })
            .collect()
    }
}

/// The premium window, in decimal hours (6:30 is 6.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumWindow {
    /// First decimal hour inside the window.
    pub start_hour: Decimal,
    /// First decimal hour after the window.
    pub end_hour: Decimal,
}

/// Slot size and premium window, as stored in `policy.yaml`.
///
/// # Example
///
/// ```
/// use shift_pay::config::RatePolicy;
///
/// let policy = RatePolicy::default();
/// assert_eq!(policy.slot_minutes, 15);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatePolicy {
    /// Length of each slot in minutes.
    pub slot_minutes: u32,
    /// The Morning-Premium window on non-Saturdays.
    pub morning_premium: PremiumWindow,
}

impl Default for RatePolicy {
    fn default() -> Self {
        Self {
            slot_minutes: 15,
            morning_premium: PremiumWindow {
                start_hour: Decimal::new(65, 1),
                end_hour: Decimal::new(80, 1),
            },
        }
    }
}

impl RatePolicy {
    pub(crate) fn validate(&self) -> EngineResult<()> {
        if self.slot_minutes == 0 {
            return Err(EngineError::InvalidConfig {
                message: "slot_minutes must be positive".to_string(),
            });
        }

        let window = &self.morning_premium;
        let day = Decimal::from(24);
        if window.start_hour < Decimal::ZERO
            || window.end_hour > day
            || window.start_hour >= window.end_hour
        {
            return Err(EngineError::InvalidConfig {
                message: format!(
                    "morning_premium window [{}, {}) must be a non-empty range within 0..24",
                    window.start_hour, window.end_hour
                ),
            });
        }

        Ok(())
    }
}
