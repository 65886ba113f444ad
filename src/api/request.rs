//! Request types for the shift pay API.
//!
//! Shift fields arrive as plain strings so that date and time parse failures
//! surface as [`EngineError::MalformedDate`] and
//! [`EngineError::MalformedInterval`] rather than generic JSON errors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{ReportingPeriod, Shift};

/// A shift as submitted by a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRequest {
    /// Identifier of the stored shift.
    pub id: String,
    /// The shift date, `YYYY-MM-DD`.
    pub date: String,
    /// The start time, `HH:MM`.
    pub start: String,
    /// The end time, `HH:MM`.
    pub end: String,
}

/// Request body for the `/periods/summary` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummaryRequest {
    /// The period to summarise. Defaults to the current calendar month.
    #[serde(default)]
    pub period: Option<ReportingPeriodRequest>,
    /// The worker's shifts; those dated outside the period are ignored.
    #[serde(default)]
    pub shifts: Vec<ShiftRequest>,
}

/// Reporting period bounds in a summary request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportingPeriodRequest {
    /// The first date of the period (inclusive).
    pub start_date: NaiveDate,
    /// The last date of the period (inclusive).
    pub end_date: NaiveDate,
}

impl TryFrom<ShiftRequest> for Shift {
    type Error = EngineError;

    fn try_from(req: ShiftRequest) -> Result<Self, Self::Error> {
        Shift::parse(&req.id, &req.date, &req.start, &req.end)
    }
}

impl From<ReportingPeriodRequest> for ReportingPeriod {
    fn from(req: ReportingPeriodRequest) -> Self {
        ReportingPeriod {
            start_date: req.start_date,
            end_date: req.end_date,
        }
    }
}
