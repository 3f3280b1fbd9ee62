//! Per-request context handed to every handler.
//!
//! # Responsibilities
//! - Expose the request (method, path, query, headers, buffered body)
//! - Hold the response a raw handler writes for itself
//!
//! # Design Decisions
//! - Body is buffered before the handler runs, so handlers stay synchronous
//! - Only the first write is kept; later writes are dropped and logged

use axum::body::{Body, Bytes};
use axum::http::{header, request::Parts, HeaderMap, HeaderValue, Method, Request, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::handler::responder::{ResponseKind, SerializationError};

pub(crate) const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";
pub(crate) const JSON_CONTENT_TYPE: &str = "application/json";

/// Request view and response slot for one dispatch.
#[derive(Debug)]
pub struct Context {
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
    response: Option<Response>,
}

impl Context {
    pub fn new(parts: Parts, body: Bytes) -> Self {
        Self {
            method: parts.method,
            uri: parts.uri,
            headers: parts.headers,
            body,
            response: None,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn uri(&self) -> &Uri {
        &self.uri
    }

    pub fn path(&self) -> &str {
        self.uri.path()
    }

    /// First value of a query parameter, percent-decoded.
    pub fn query(&self, key: &str) -> Option<String> {
        let query = self.uri.query()?;
        url::form_urlencoded::parse(query.as_bytes())
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.into_owned())
    }

    /// All query parameters in request order.
    pub fn query_pairs(&self) -> Vec<(String, String)> {
        self.uri
            .query()
            .map(|q| {
                url::form_urlencoded::parse(q.as_bytes())
                    .into_owned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Header value, if present and valid visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// Body as UTF-8 text, if it is valid UTF-8.
    pub fn body_text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }

    /// Store the response for this request.
    ///
    /// Returns `false` if a response was already written; the new one is dropped.
    pub fn write(&mut self, response: Response) -> bool {
        if self.response.is_some() {
            tracing::warn!(
                method = %self.method,
                path = %self.uri.path(),
                "Response already written; ignoring second write"
            );
            return false;
        }
        self.response = Some(response);
        true
    }

    /// Write an empty response with the given status.
    pub fn status(&mut self, status: StatusCode) -> bool {
        self.write(status.into_response())
    }

    /// Write a plain-text response.
    pub fn text(&mut self, status: StatusCode, body: impl Into<String>) -> bool {
        let mut response = Response::new(Body::from(body.into()));
        *response.status_mut() = status;
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(TEXT_CONTENT_TYPE));
        self.write(response)
    }

    /// Write a JSON response.
    pub fn json<T: Serialize + ?Sized>(
        &mut self,
        status: StatusCode,
        value: &T,
    ) -> Result<bool, SerializationError> {
        let body = serde_json::to_vec(value)
            .map_err(|e| SerializationError::new(ResponseKind::Raw, e))?;
        let mut response = Response::new(Body::from(body));
        *response.status_mut() = status;
        response
            .headers_mut()
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        Ok(self.write(response))
    }

    pub fn is_written(&self) -> bool {
        self.response.is_some()
    }

    pub(crate) fn take_response(&mut self) -> Option<Response> {
        self.response.take()
    }
}

impl From<Request<Bytes>> for Context {
    fn from(request: Request<Bytes>) -> Self {
        let (parts, body) = request.into_parts();
        Self::new(parts, body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(uri: &str) -> Context {
        Context::from(
            Request::builder()
                .uri(uri)
                .header("x-token", "abc")
                .body(Bytes::from_static(b"{\"a\":1}"))
                .unwrap(),
        )
    }

    #[test]
    fn test_query_is_decoded() {
        let ctx = context("/user/find?id=102&name=%E5%BC%A0%E4%B8%89");
        assert_eq!(ctx.path(), "/user/find");
        assert_eq!(ctx.query("id").as_deref(), Some("102"));
        assert_eq!(ctx.query("name").as_deref(), Some("张三"));
        assert_eq!(ctx.query("missing"), None);
        assert_eq!(ctx.query_pairs().len(), 2);
    }

    #[test]
    fn test_request_accessors() {
        let ctx = context("/");
        assert_eq!(ctx.method(), Method::GET);
        assert_eq!(ctx.header("x-token"), Some("abc"));
        assert_eq!(ctx.body_text(), Some("{\"a\":1}"));
        assert!(ctx.query_pairs().is_empty());
    }

    #[test]
    fn test_first_write_wins() {
        let mut ctx = context("/");
        assert!(!ctx.is_written());
        assert!(ctx.text(StatusCode::CREATED, "first"));
        assert!(!ctx.status(StatusCode::NOT_FOUND));

        let response = ctx.take_response().unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[header::CONTENT_TYPE], TEXT_CONTENT_TYPE);
    }

    #[test]
    fn test_json_write_sets_content_type() {
        let mut ctx = context("/");
        assert!(ctx.json(StatusCode::OK, &serde_json::json!({"ok": true})).unwrap());
        let response = ctx.take_response().unwrap();
        assert_eq!(response.headers()[header::CONTENT_TYPE], JSON_CONTENT_TYPE);
    }
}
