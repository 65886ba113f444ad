//! HTTP API module for the shift pay engine.
//!
//! This module exposes per-shift pay, period summaries and the configured
//! rate tables as JSON endpoints.

mod context;
mod handlers;
mod request;
mod response;
mod state;

pub use context::{WORKER_ID_HEADER, WorkerContext};
pub use handlers::create_router;
pub use request::{PeriodSummaryRequest, ReportingPeriodRequest, ShiftRequest};
pub use response::{ApiError, PeriodSummaryResponse, RatesResponse, ShiftPayResponse};
pub use state::AppState;
