//! A single registered endpoint.

use std::fmt;

use axum::response::Response;

use crate::handler::{Context, ErasedHandler, ResponseKind};
use crate::routing::error::ConfigurationError;
use crate::routing::method::HttpMethod;

/// One `(method, path, handler)` entry. Never mutated after creation.
#[derive(Clone)]
pub struct Route {
    method: HttpMethod,
    path: String,
    handler: ErasedHandler,
}

impl Route {
    pub(crate) fn new(method: HttpMethod, path: String, handler: ErasedHandler) -> Self {
        Self {
            method,
            path,
            handler,
        }
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> ResponseKind {
        self.handler.kind()
    }

    pub fn handler(&self) -> &ErasedHandler {
        &self.handler
    }

    pub fn dispatch(&self, ctx: Context) -> Response {
        self.handler.dispatch(ctx)
    }
}

impl fmt::Debug for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Route")
            .field("method", &self.method)
            .field("path", &self.path)
            .field("kind", &self.handler.kind())
            .finish()
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<7} {} ({})", self.method, self.path, self.handler.kind())
    }
}

/// Check that a path is a static, absolute route path.
///
/// Only literal ASCII segments are accepted, matching what a request URI can carry.
/// Other characters must be registered percent-encoded.
pub fn validate_path(path: &str) -> Result<(), ConfigurationError> {
    let malformed = |reason| ConfigurationError::MalformedPath {
        path: path.to_string(),
        reason,
    };

    if path.is_empty() {
        return Err(malformed("path is empty"));
    }
    if !path.starts_with('/') {
        return Err(malformed("path must begin with '/'"));
    }
    let trimmed = path.strip_suffix('/').filter(|t| !t.is_empty()).unwrap_or(path);
    if path != "/" && trimmed.split('/').skip(1).any(str::is_empty) {
        return Err(malformed("path contains an empty segment"));
    }
    if path.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(malformed("path contains whitespace or control characters"));
    }
    if !path.is_ascii() {
        return Err(malformed("path must be ASCII; percent-encode other characters"));
    }
    if trimmed.split('/').any(|segment| segment == "." || segment == "..") {
        return Err(malformed("path may not contain '.' or '..' segments"));
    }
    if path.contains(['?', '#']) {
        return Err(malformed("path may not carry a query or fragment"));
    }
    if path.contains(['*', '{', '}', ':']) {
        return Err(malformed("path may not contain wildcards or captures"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(path: &str) -> &'static str {
        match validate_path(path) {
            Err(ConfigurationError::MalformedPath { reason, .. }) => reason,
            other => panic!("expected MalformedPath for {path:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_accepts_static_paths() {
        for path in ["/", "/user", "/user/detail", "/user/", "/v1/topic-list", "/%E7%94%A8%E6%88%B7", "/v1.2/a..b"] {
            assert!(validate_path(path).is_ok(), "{path} should be valid");
        }
    }

    #[test]
    fn test_rejects_malformed_paths() {
        assert_eq!(reason(""), "path is empty");
        assert_eq!(reason("user"), "path must begin with '/'");
        assert_eq!(reason("/user//detail"), "path contains an empty segment");
        assert_eq!(reason("//"), "path contains an empty segment");
        assert_eq!(reason("/user detail"), "path contains whitespace or control characters");
        assert_eq!(reason("/user?id=1"), "path may not carry a query or fragment");
        assert_eq!(reason("/user/{id}"), "path may not contain wildcards or captures");
        assert_eq!(reason("/files/*rest"), "path may not contain wildcards or captures");
        assert_eq!(reason("/用户"), "path must be ASCII; percent-encode other characters");
        assert_eq!(reason("/a/../b"), "path may not contain '.' or '..' segments");
        assert_eq!(reason("/a/./b"), "path may not contain '.' or '..' segments");
        assert_eq!(reason("/user/.."), "path may not contain '.' or '..' segments");
        assert_eq!(reason("/user/../"), "path may not contain '.' or '..' segments");
    }
}
