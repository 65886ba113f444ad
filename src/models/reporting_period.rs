//! Reporting period model.
//!
//! This module contains the [`ReportingPeriod`] type that bounds which shifts
//! are included in a period summary.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// An inclusive date range over which shifts are summarised.
///
/// The dashboard default is the current calendar month, see
/// [`ReportingPeriod::current_month`].
///
/// # Example
///
/// ```
/// use shift_pay::models::ReportingPeriod;
/// use chrono::NaiveDate;
///
/// let period = ReportingPeriod {
///     start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
/// };
///
/// assert!(period.contains_date(NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()));
/// assert!(!period.contains_date(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingPeriod {
    /// The first date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl ReportingPeriod {
    /// Returns the calendar month containing `today`.
    ///
    /// # Example
    ///
    /// ```
    /// use shift_pay::models::ReportingPeriod;
    /// use chrono::NaiveDate;
    ///
    /// let period = ReportingPeriod::current_month(NaiveDate::from_ymd_opt(2024, 2, 14).unwrap());
    /// assert_eq!(period.start_date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
    /// assert_eq!(period.end_date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    /// ```
    pub fn current_month(today: NaiveDate) -> Self {
        let start_date = today - Days::new(u64::from(today.day0()));
        let end_date = start_date + Months::new(1) - Days::new(1);
        Self {
            start_date,
            end_date,
        }
    }

    /// Checks if a given date falls within this period, inclusive of both ends.
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}
