//! Response encoding policy.
//!
//! # Responsibilities
//! - Turn a [`HandlerResult`] into the HTTP response sent to the client
//! - Map serialization failures to 500
//!
//! # Design Decisions
//! - Plain text is always `text/plain; charset=utf-8`, never JSON-wrapped
//! - Models and model lists are always `application/json`, status 200
//! - For raw handlers the context response is final; nothing is added to it
//! - For every other kind the returned value wins over anything the handler
//!   also wrote into the context

use axum::body::{Body, Bytes};
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::handler::context::{Context, JSON_CONTENT_TYPE, TEXT_CONTENT_TYPE};
use crate::handler::{HandlerResult, SerializationError};
use crate::observability::metrics;

/// Body sent when a returned value cannot be encoded.
pub const SERIALIZATION_FAILURE_BODY: &str = r#"{"error":"response serialization failed"}"#;

/// Build the response for one dispatch.
pub fn encode(result: Result<HandlerResult, SerializationError>, ctx: &mut Context) -> Response {
    let result = match result {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(
                method = %ctx.method(),
                path = %ctx.path(),
                error = %e,
                "Handler result could not be serialized"
            );
            metrics::record_serialization_error(ctx.path());
            return with_content_type(
                StatusCode::INTERNAL_SERVER_ERROR,
                Bytes::from_static(SERIALIZATION_FAILURE_BODY.as_bytes()),
                JSON_CONTENT_TYPE,
            );
        }
    };

    if !matches!(result, HandlerResult::Raw) && ctx.is_written() {
        tracing::warn!(
            method = %ctx.method(),
            path = %ctx.path(),
            kind = %result.kind(),
            "Handler wrote a response and returned a value; using the returned value"
        );
    }

    match result {
        HandlerResult::PlainText(text) => {
            with_content_type(StatusCode::OK, Bytes::from(text), TEXT_CONTENT_TYPE)
        }
        HandlerResult::SingleModel(body) => {
            with_content_type(StatusCode::OK, body, JSON_CONTENT_TYPE)
        }
        HandlerResult::ModelList { body, .. } => {
            with_content_type(StatusCode::OK, body, JSON_CONTENT_TYPE)
        }
        HandlerResult::Raw => ctx
            .take_response()
            .unwrap_or_else(|| StatusCode::OK.into_response()),
    }
}

fn with_content_type(status: StatusCode, body: Bytes, content_type: &'static str) -> Response {
    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}
