//! Calculation logic for the shift pay engine.
//!
//! This module contains slot slicing with rate bucket selection, per-shift
//! pay calculation, and reporting-period aggregation. All of it is pure and
//! synchronous: nothing here performs I/O or holds state between calls.

mod period_aggregate;
mod rate_slicer;
mod rounding;
mod shift_pay;

pub use period_aggregate::{aggregate, aggregate_in_period, aggregate_with_policy};
pub use rate_slicer::{RateSlicer, bucket_for, decimal_hour, slice};
pub(crate) use rate_slicer::seconds_to_hours;
pub use rounding::{REPORTED_DECIMAL_PLACES, round_to_cents};
pub use shift_pay::{compute_pay, compute_pay_with_policy};
