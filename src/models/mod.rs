//! Core data models for the shift pay engine.
//!
//! This module contains all the domain models used throughout the engine.

mod pay_result;
mod reporting_period;
mod shift;

pub use pay_result::{PeriodTotals, RateBucket, RateSlot, ShiftPayResult};
pub use reporting_period::ReportingPeriod;
pub use shift::{DATE_FORMAT, Shift, TIME_FORMAT};

pub(crate) use shift::ensure_interval;
