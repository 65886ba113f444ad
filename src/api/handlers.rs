//! HTTP request handlers for the shift pay API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::{RateSlicer, aggregate_in_period, compute_pay_with_policy};
use crate::error::EngineResult;
use crate::models::{ReportingPeriod, Shift};

use super::context::WorkerContext;
use super::request::{PeriodSummaryRequest, ShiftRequest};
use super::response::{
    ApiError, ApiErrorResponse, PeriodSummaryResponse, RatesResponse, ShiftPayResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/shifts/pay", post(shift_pay_handler))
        .route("/periods/summary", post(period_summary_handler))
        .route("/rates", get(rates_handler))
        .with_state(state)
}

/// Handler for POST /shifts/pay.
///
/// Prices one shift with the `shift_pay` rate table.
async fn shift_pay_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<ShiftRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let context = WorkerContext::from_headers(&headers);
    info!(
        correlation_id = %correlation_id,
        worker_id = context.label(),
        "Processing shift pay request"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let shift_id = request.id.clone();
    let start_time = Instant::now();
    match price_shift(request, &state) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                worker_id = context.label(),
                shift_id = %response.shift_id,
                amount = %response.result.amount,
                duration_us = start_time.elapsed().as_micros(),
                "Shift pay calculated"
            );
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                worker_id = context.label(),
                shift_id = %shift_id,
                error = %err,
                "Shift pay calculation failed"
            );
            ApiErrorResponse::from(err)
                .for_shift(&shift_id)
                .into_response()
        }
    }
}

fn price_shift(request: ShiftRequest, state: &AppState) -> EngineResult<ShiftPayResponse> {
    let config = state.config();
    let shift = Shift::try_from(request)?;

    let result = compute_pay_with_policy(&shift, config.shift_pay_rates(), config.policy())?;
    let slots = RateSlicer::new(shift.date, shift.start, shift.end, config.policy())?.collect();

    Ok(ShiftPayResponse {
        shift_id: shift.id,
        result,
        slots,
    })
}

/// Handler for POST /periods/summary.
///
/// Summarises the shifts dated inside the requested period (the current
/// calendar month when none is given) with the `period_summary` rate table.
/// One malformed shift rejects the whole request.
async fn period_summary_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<PeriodSummaryRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let context = WorkerContext::from_headers(&headers);
    info!(
        correlation_id = %correlation_id,
        worker_id = context.label(),
        "Processing period summary request"
    );

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let period: ReportingPeriod = match request.period {
        Some(period) => period.into(),
        None => ReportingPeriod::current_month(Utc::now().date_naive()),
    };
    if period.start_date > period.end_date {
        warn!(
            correlation_id = %correlation_id,
            start_date = %period.start_date,
            end_date = %period.end_date,
            "Reporting period is reversed"
        );
        return ApiErrorResponse::bad_request(ApiError::validation_error(format!(
            "Reporting period start {} is after end {}",
            period.start_date, period.end_date
        )))
        .into_response();
    }

    let mut shifts = Vec::with_capacity(request.shifts.len());
    for shift_request in request.shifts {
        let shift_id = shift_request.id.clone();
        match Shift::try_from(shift_request) {
            Ok(shift) => shifts.push(shift),
            Err(err) => {
                warn!(
                    correlation_id = %correlation_id,
                    worker_id = context.label(),
                    shift_id = %shift_id,
                    error = %err,
                    "Rejecting period summary: malformed shift"
                );
                return ApiErrorResponse::from(err)
                    .for_shift(&shift_id)
                    .into_response();
            }
        }
    }

    let shift_count = shifts
        .iter()
        .filter(|shift| period.contains_date(shift.date))
        .count();
    let excluded_count = shifts.len() - shift_count;
    if excluded_count > 0 {
        debug!(
            correlation_id = %correlation_id,
            excluded_count,
            "Ignoring shifts outside the reporting period"
        );
    }

    let config = state.config();
    let start_time = Instant::now();
    match aggregate_in_period(
        &shifts,
        &period,
        config.period_summary_rates(),
        config.policy(),
    ) {
        Ok(totals) => {
            info!(
                correlation_id = %correlation_id,
                worker_id = context.label(),
                shifts_count = shift_count,
                total_amount = %totals.total_amount,
                duration_us = start_time.elapsed().as_micros(),
                "Period summary calculated"
            );
            let response = PeriodSummaryResponse {
                period,
                shift_count,
                excluded_count,
                totals,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Period summary calculation failed"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for GET /rates.
///
/// Returns both configured tables and where they disagree.
async fn rates_handler(State(state): State<AppState>) -> Json<RatesResponse> {
    let config = state.config();
    Json(RatesResponse {
        shift_pay: *config.shift_pay_rates(),
        period_summary: *config.period_summary_rates(),
        discrepancies: config.rate_discrepancies(),
    })
}

/// Converts a JSON extraction failure into a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}
