//! Request identification.
//!
//! # Design Decisions
//! - Request ID is set by `SetRequestIdLayer` as early as possible and echoed
//!   back on the response
//! - Handlers never see a request without one; `unknown` covers direct calls

use axum::http::HeaderMap;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Request ID header value, or `unknown` when absent.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}
