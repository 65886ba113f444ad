//! Response types for the shift pay API.
//!
//! This module defines the success bodies for each endpoint together with
//! the error response structures and the mapping from [`EngineError`].

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::config::{RateDiscrepancy, RateTable};
use crate::error::EngineError;
use crate::models::{PeriodTotals, RateSlot, ReportingPeriod, ShiftPayResult};

/// Response body for `POST /shifts/pay`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftPayResponse {
    /// The shift the figures belong to.
    pub shift_id: String,
    /// Rounded duration and amount.
    #[serde(flatten)]
    pub result: ShiftPayResult,
    /// The slots the shift was priced in.
    pub slots: Vec<RateSlot>,
}

/// Response body for `POST /periods/summary`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PeriodSummaryResponse {
    /// The period that was summarised.
    pub period: ReportingPeriod,
    /// Number of submitted shifts dated inside the period.
    pub shift_count: usize,
    /// Number of submitted shifts dated outside the period.
    pub excluded_count: usize,
    /// Hour subtotals and total pay.
    pub totals: PeriodTotals,
}

/// Response body for `GET /rates`.
#[derive(Debug, Clone, Serialize)]
pub struct RatesResponse {
    /// Rates used for per-shift pay.
    pub shift_pay: RateTable,
    /// Rates used for period totals.
    pub period_summary: RateTable,
    /// Buckets the two tables price differently.
    pub discrepancies: Vec<RateDiscrepancy>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a 400 response.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    /// Names the offending shift in the error details.
    pub fn for_shift(mut self, shift_id: &str) -> Self {
        self.error.details = Some(format!("Rejected shift '{}'", shift_id));
        self
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::MalformedDate { .. } => {
                Self::bad_request(ApiError::new("MALFORMED_DATE", error.to_string()))
            }
            EngineError::MalformedInterval { .. } => {
                Self::bad_request(ApiError::new("MALFORMED_INTERVAL", error.to_string()))
            }
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::InvalidConfig { message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Invalid configuration", message),
            },
        }
    }
}
