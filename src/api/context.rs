//! Per-request worker context.
//!
//! The calling worker's identity is read from a request header into a
//! [`WorkerContext`] that handlers receive explicitly. The engine never
//! authorizes anything with it; it only tags log lines.

use axum::http::HeaderMap;

/// Header carrying the authenticated worker's identifier.
pub const WORKER_ID_HEADER: &str = "x-worker-id";

/// Identity of the worker a request is made on behalf of.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkerContext {
    /// The worker identifier, if the upstream layer supplied one.
    pub worker_id: Option<String>,
}

impl WorkerContext {
    /// Extracts the worker context from request headers.
    ///
    /// Blank and non-UTF-8 values are treated as absent.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let worker_id = headers
            .get(WORKER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string);

        Self { worker_id }
    }

    /// Returns the worker identifier for logging.
    pub fn label(&self) -> &str {
        self.worker_id.as_deref().unwrap_or("anonymous")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extracts_worker_id() {
        let mut headers = HeaderMap::new();
        headers.insert(WORKER_ID_HEADER, HeaderValue::from_static("worker_42"));

        let context = WorkerContext::from_headers(&headers);
        assert_eq!(context.worker_id.as_deref(), Some("worker_42"));
        assert_eq!(context.label(), "worker_42");
    }

    #[test]
    fn test_trims_whitespace() {
        let mut headers = HeaderMap::new();
        headers.insert(WORKER_ID_HEADER, HeaderValue::from_static("  worker_42 "));

        let context = WorkerContext::from_headers(&headers);
        assert_eq!(context.worker_id.as_deref(), Some("worker_42"));
    }

    #[test]
    fn test_missing_header_is_anonymous() {
        let context = WorkerContext::from_headers(&HeaderMap::new());
        assert_eq!(context, WorkerContext::default());
        assert_eq!(context.label(), "anonymous");
    }

    #[test]
    fn test_blank_header_is_anonymous() {
        let mut headers = HeaderMap::new();
        headers.insert(WORKER_ID_HEADER, HeaderValue::from_static("   "));

        let context = WorkerContext::from_headers(&headers);
        assert!(context.worker_id.is_none());
    }
}
