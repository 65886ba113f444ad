//! Shift model.
//!
//! A shift is a same-day interval of wall-clock time worked by one worker.
//! Overnight shifts are not supported: `start` must be strictly before `end`.

use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Format accepted for shift dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format accepted for shift start and end times.
pub const TIME_FORMAT: &str = "%H:%M";

const SECONDS_PER_HOUR: i64 = 3600;

/// Represents one worked interval on a single calendar date.
///
/// Deserializing checks the same interval invariant as [`Shift::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "ShiftFields")]
pub struct Shift {
    /// Identifier assigned by whatever stores the shift.
    pub id: String,
    /// The calendar date the shift was worked on.
    pub date: NaiveDate,
    /// The wall-clock start time.
    pub start: NaiveTime,
    /// The wall-clock end time (exclusive).
    pub end: NaiveTime,
}

/// Unchecked wire form of a [`Shift`].
#[derive(Deserialize)]
struct ShiftFields {
    id: String,
    date: NaiveDate,
    start: NaiveTime,
    end: NaiveTime,
}

impl TryFrom<ShiftFields> for Shift {
    type Error = EngineError;

    fn try_from(fields: ShiftFields) -> EngineResult<Self> {
        let shift = Shift {
            id: fields.id,
            date: fields.date,
            start: fields.start,
            end: fields.end,
        };
        shift.validate()?;
        Ok(shift)
    }
}

impl Shift {
    /// Parses a shift from its textual form.
    ///
    /// The date must be `YYYY-MM-DD` and the times `HH:MM`.
    ///
    /// # Errors
    ///
    /// - [`EngineError::MalformedDate`] if `date` is not a valid calendar date
    /// - [`EngineError::MalformedInterval`] if either time fails to parse or
    ///   `start` is not strictly before `end`
    ///
    /// # Examples
    ///
    /// ```
    /// use shift_pay::models::Shift;
    /// use chrono::Weekday;
    ///
    /// let shift = Shift::parse("shift_001", "2024-03-04", "06:00", "09:00").unwrap();
    /// assert_eq!(shift.day_of_week(), Weekday::Mon);
    ///
    /// assert!(Shift::parse("shift_002", "2024-03-04", "09:00", "09:00").is_err());
    /// ```
    pub fn parse(id: &str, date: &str, start: &str, end: &str) -> EngineResult<Self> {
        let parsed_date =
            NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|e| EngineError::MalformedDate {
                value: date.to_string(),
                message: e.to_string(),
            })?;

        let parse_time = |value: &str| {
            NaiveTime::parse_from_str(value, TIME_FORMAT).map_err(|e| {
                EngineError::MalformedInterval {
                    start: start.to_string(),
                    end: end.to_string(),
                    message: format!("'{}' is not a valid time of day: {}", value, e),
                }
            })
        };

        let shift = Shift {
            id: id.to_string(),
            date: parsed_date,
            start: parse_time(start)?,
            end: parse_time(end)?,
        };
        shift.validate()?;
        Ok(shift)
    }

    /// Checks the same-day interval invariant.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MalformedInterval`] if `start >= end`.
    pub fn validate(&self) -> EngineResult<()> {
        ensure_interval(self.start, self.end)
    }

    /// Returns the length of the shift in hours, unrounded.
    pub fn duration_hours(&self) -> Decimal {
        let seconds = (self.end - self.start).num_seconds();
        Decimal::from(seconds) / Decimal::from(SECONDS_PER_HOUR)
    }

    /// Returns the day of the week the shift was worked on.
    pub fn day_of_week(&self) -> Weekday {
        self.date.weekday()
    }
}

/// Rejects empty and reversed intervals.
pub(crate) fn ensure_interval(start: NaiveTime, end: NaiveTime) -> EngineResult<()> {
    if start >= end {
        return Err(EngineError::MalformedInterval {
            start: start.format(TIME_FORMAT).to_string(),
            end: end.format(TIME_FORMAT).to_string(),
            message: "start must be before end (overnight shifts are not supported)".to_string(),
        });
    }
    Ok(())
}
