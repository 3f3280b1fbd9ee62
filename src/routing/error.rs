//! Registration-time errors.

use thiserror::Error;

use crate::handler::ResponseKind;
use crate::routing::method::HttpMethod;

/// Errors raised while declaring or installing routes.
///
/// All of these are fatal to start-up: a missing or misrouted endpoint must be
/// caught before the listener accepts traffic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Verb is not one of the supported HTTP methods.
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// Path is empty, relative, or contains characters routes may not use.
    #[error("Malformed path {path:?}: {reason}")]
    MalformedPath { path: String, reason: &'static str },

    /// Same method and path registered twice.
    #[error("Route {method} {path} is already registered")]
    DuplicateRoute { method: HttpMethod, path: String },

    /// Handler's return shape does not match the encoding it was registered for.
    #[error("Handler for {method} {path} returns {actual}, but was registered as {declared}")]
    UnsupportedReturn {
        method: HttpMethod,
        path: String,
        declared: ResponseKind,
        actual: ResponseKind,
    },

    /// Builder was already handed to the transport.
    #[error("Route builder already installed")]
    AlreadyInstalled,
}
