//! Adapts typed handler functions into one uniform callable.
//!
//! # Data Flow
//! ```text
//! Fn(&mut Context) -> R   (R: Responder, kind fixed by R::KIND)
//!     → ErasedHandler::new (registration)
//!     → ErasedHandler::dispatch(Context)
//!         → call user function
//!         → R::into_handler_result
//!         → http::response::encode
//!     → Response
//! ```

use std::fmt;
use std::sync::Arc;

use axum::response::Response;

use crate::handler::context::Context;
use crate::handler::responder::{HandlerResult, Responder, ResponseKind, SerializationError};
use crate::http::response::encode;

type CallFn = dyn Fn(&mut Context) -> Result<HandlerResult, SerializationError> + Send + Sync;

/// A user handler with its return type erased and its encoding recorded.
#[derive(Clone)]
pub struct ErasedHandler {
    kind: ResponseKind,
    call: Arc<CallFn>,
}

impl ErasedHandler {
    /// Wrap a handler; its response kind comes from the declared return type.
    pub fn new<F, R>(handler: F) -> Self
    where
        F: Fn(&mut Context) -> R + Send + Sync + 'static,
        R: Responder,
    {
        Self {
            kind: R::KIND,
            call: Arc::new(move |ctx: &mut Context| handler(ctx).into_handler_result()),
        }
    }

    pub fn kind(&self) -> ResponseKind {
        self.kind
    }

    /// Invoke the user function and convert its return value.
    pub fn call(&self, ctx: &mut Context) -> Result<HandlerResult, SerializationError> {
        let result = (self.call)(ctx)?;
        debug_assert_eq!(result.kind(), self.kind);
        Ok(result)
    }

    /// Run the handler and produce the final response.
    ///
    /// Never fails: serialization errors become a 500 response.
    pub fn dispatch(&self, mut ctx: Context) -> Response {
        let result = self.call(&mut ctx);
        encode(result, &mut ctx)
    }
}

impl fmt::Debug for ErasedHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErasedHandler")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::model::Model;
    use axum::body::Bytes;
    use axum::http::{Request, StatusCode};
    use serde::Serialize;

    #[derive(Serialize)]
    struct Item {
        id: u32,
    }

    impl Model for Item {}

    fn context() -> Context {
        Context::from(Request::builder().uri("/").body(Bytes::new()).unwrap())
    }

    #[test]
    fn test_kind_recorded_at_construction() {
        assert_eq!(ErasedHandler::new(|_: &mut Context| "hi").kind(), ResponseKind::PlainText);
        assert_eq!(ErasedHandler::new(|_: &mut Context| Item { id: 1 }).kind(), ResponseKind::SingleModel);
        assert_eq!(ErasedHandler::new(|_: &mut Context| vec![Item { id: 1 }]).kind(), ResponseKind::ModelList);
        assert_eq!(ErasedHandler::new(|_: &mut Context| {}).kind(), ResponseKind::Raw);
    }

    #[test]
    fn test_call_returns_converted_result() {
        let handler = ErasedHandler::new(|ctx: &mut Context| format!("path={}", ctx.path()));
        let result = handler.call(&mut context()).unwrap();
        assert_eq!(result, HandlerResult::PlainText("path=/".to_string()));
    }

    #[test]
    fn test_dispatch_raw_uses_written_response() {
        let handler = ErasedHandler::new(|ctx: &mut Context| {
            ctx.status(StatusCode::NO_CONTENT);
        });
        let response = handler.dispatch(context());
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
    }
}
