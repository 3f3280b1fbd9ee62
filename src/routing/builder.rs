//! Fluent route registration.
//!
//! # Responsibilities
//! - Validate verb and path of every registration
//! - Reject duplicate method+path pairs
//! - Adapt handlers and keep routes in declaration order
//! - Hand the finished routes over as an immutable [`RouteTable`]
//!
//! # State Transitions
//! ```text
//! Empty → Accumulating: first successful handle()
//! Empty | Accumulating → Installed: install()
//! Installed: terminal, every further handle()/install() fails
//! ```

use std::collections::HashSet;
use std::sync::Arc;

use crate::handler::{Context, ErasedHandler, Model, Models, Responder, ResponseKind};
use crate::routing::error::ConfigurationError;
use crate::routing::method::{HttpMethod, IntoHttpMethod};
use crate::routing::route::{validate_path, Route};
use crate::routing::router::RouteTable;

/// Lifecycle state of a [`RouteBuilder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuilderState {
    Empty,
    Accumulating,
    Installed,
}

/// Accumulates one controller's routes.
///
/// ```
/// use fluent_router::{Context, RouteBuilder};
/// use fluent_router::users::UserModel;
///
/// fn user_list(_: &mut Context) -> Vec<UserModel> {
///     vec![UserModel::new(101, "custer"), UserModel::new(102, "张三")]
/// }
///
/// fn user_detail(_: &mut Context) -> UserModel {
///     UserModel::new(101, "custer")
/// }
///
/// # fn main() -> Result<(), fluent_router::ConfigurationError> {
/// let mut routes = RouteBuilder::new();
/// routes
///     .handle("GET", "/test", |_: &mut Context| "用户测试")?
///     .handle("GET", "/user", user_list)?
///     .handle("GET", "/user/detail", user_detail)?;
/// let table = routes.install()?;
/// assert_eq!(table.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct RouteBuilder {
    state: BuilderState,
    routes: Vec<Route>,
    registered: HashSet<(HttpMethod, String)>,
}

impl RouteBuilder {
    pub fn new() -> Self {
        Self {
            state: BuilderState::Empty,
            routes: Vec::new(),
            registered: HashSet::new(),
        }
    }

    pub fn state(&self) -> BuilderState {
        self.state
    }

    /// Routes declared so far, in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Register a handler; the response encoding follows its return type.
    pub fn handle<M, F, R>(
        &mut self,
        method: M,
        path: &str,
        handler: F,
    ) -> Result<&mut Self, ConfigurationError>
    where
        M: IntoHttpMethod,
        F: Fn(&mut Context) -> R + Send + Sync + 'static,
        R: Responder,
    {
        self.push(method, path, ErasedHandler::new(handler))
    }

    /// Register a handler answering in plain text.
    pub fn handle_text<M, F, S>(
        &mut self,
        method: M,
        path: &str,
        handler: F,
    ) -> Result<&mut Self, ConfigurationError>
    where
        M: IntoHttpMethod,
        F: Fn(&mut Context) -> S + Send + Sync + 'static,
        S: Into<String>,
    {
        self.handle(method, path, move |ctx: &mut Context| -> String { handler(ctx).into() })
    }

    /// Register a handler answering with one JSON object.
    pub fn handle_model<M, F, T>(
        &mut self,
        method: M,
        path: &str,
        handler: F,
    ) -> Result<&mut Self, ConfigurationError>
    where
        M: IntoHttpMethod,
        F: Fn(&mut Context) -> T + Send + Sync + 'static,
        T: Model,
    {
        self.handle(method, path, handler)
    }

    /// Register a handler answering with a JSON array.
    pub fn handle_models<M, F, T, I>(
        &mut self,
        method: M,
        path: &str,
        handler: F,
    ) -> Result<&mut Self, ConfigurationError>
    where
        M: IntoHttpMethod,
        F: Fn(&mut Context) -> I + Send + Sync + 'static,
        I: Into<Models<T>>,
        T: Model,
    {
        self.handle(method, path, move |ctx: &mut Context| -> Models<T> { handler(ctx).into() })
    }

    /// Register a handler that writes its own response through the context.
    pub fn handle_raw<M, F>(
        &mut self,
        method: M,
        path: &str,
        handler: F,
    ) -> Result<&mut Self, ConfigurationError>
    where
        M: IntoHttpMethod,
        F: Fn(&mut Context) + Send + Sync + 'static,
    {
        self.handle(method, path, handler)
    }

    /// Register a method of a shared controller instance.
    ///
    /// `handle_bound("GET", "/user", &self, Self::user_list)` is the Rust
    /// counterpart of passing a bound method value.
    pub fn handle_bound<M, C, F, R>(
        &mut self,
        method: M,
        path: &str,
        controller: &Arc<C>,
        handler: F,
    ) -> Result<&mut Self, ConfigurationError>
    where
        M: IntoHttpMethod,
        C: Send + Sync + 'static,
        F: Fn(&C, &mut Context) -> R + Send + Sync + 'static,
        R: Responder,
    {
        let controller = Arc::clone(controller);
        self.handle(method, path, move |ctx: &mut Context| handler(&controller, ctx))
    }

    /// Register an already-erased handler under a declared encoding.
    ///
    /// Fails with [`ConfigurationError::UnsupportedReturn`] when the handler's
    /// own kind differs from `declared`.
    pub fn handle_erased<M>(
        &mut self,
        method: M,
        path: &str,
        handler: ErasedHandler,
        declared: ResponseKind,
    ) -> Result<&mut Self, ConfigurationError>
    where
        M: IntoHttpMethod,
    {
        if self.state == BuilderState::Installed {
            return Err(ConfigurationError::AlreadyInstalled);
        }
        if handler.kind() != declared {
            return Err(ConfigurationError::UnsupportedReturn {
                method: method.into_http_method()?,
                path: path.to_string(),
                declared,
                actual: handler.kind(),
            });
        }
        self.push(method, path, handler)
    }

    fn push<M: IntoHttpMethod>(
        &mut self,
        method: M,
        path: &str,
        handler: ErasedHandler,
    ) -> Result<&mut Self, ConfigurationError> {
        if self.state == BuilderState::Installed {
            return Err(ConfigurationError::AlreadyInstalled);
        }
        let method = method.into_http_method()?;
        validate_path(path)?;

        if !self.registered.insert((method, path.to_string())) {
            return Err(ConfigurationError::DuplicateRoute {
                method,
                path: path.to_string(),
            });
        }

        tracing::debug!(
            method = %method,
            path = %path,
            kind = %handler.kind(),
            "Route registered"
        );
        self.routes.push(Route::new(method, path.to_string(), handler));
        self.state = BuilderState::Accumulating;
        Ok(self)
    }

    /// Freeze the declared routes into a read-only table.
    pub fn install(&mut self) -> Result<RouteTable, ConfigurationError> {
        if self.state == BuilderState::Installed {
            return Err(ConfigurationError::AlreadyInstalled);
        }
        self.state = BuilderState::Installed;
        self.registered.clear();
        let table = RouteTable::new(std::mem::take(&mut self.routes));
        tracing::debug!(routes = table.len(), "Route builder installed");
        Ok(table)
    }
}

impl Default for RouteBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[derive(Serialize)]
    struct Tag {
        name: &'static str,
    }

    impl Model for Tag {}

    struct Greeter {
        greeting: &'static str,
    }

    impl Greeter {
        fn greet(&self, _: &mut Context) -> String {
            self.greeting.to_string()
        }
    }

    #[test]
    fn test_chained_registration_keeps_order() {
        let mut routes = RouteBuilder::new();
        assert_eq!(routes.state(), BuilderState::Empty);

        routes
            .handle("GET", "/test", |_: &mut Context| "text")
            .unwrap()
            .handle_models(HttpMethod::Get, "/tags", |_: &mut Context| vec![Tag { name: "rust" }])
            .unwrap()
            .handle_model("post", "/tags/first", |_: &mut Context| Tag { name: "rust" })
            .unwrap()
            .handle_raw("DELETE", "/tags", |_: &mut Context| {})
            .unwrap();

        assert_eq!(routes.state(), BuilderState::Accumulating);
        let summary: Vec<_> = routes
            .routes()
            .iter()
            .map(|r| (r.method(), r.path().to_string(), r.kind()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (HttpMethod::Get, "/test".to_string(), ResponseKind::PlainText),
                (HttpMethod::Get, "/tags".to_string(), ResponseKind::ModelList),
                (HttpMethod::Post, "/tags/first".to_string(), ResponseKind::SingleModel),
                (HttpMethod::Delete, "/tags".to_string(), ResponseKind::Raw),
            ]
        );
    }

    #[test]
    fn test_duplicate_route_is_rejected() {
        let mut routes = RouteBuilder::new();
        routes.handle("GET", "/user", |_: &mut Context| "a").unwrap();
        let err = routes.handle("get", "/user", |_: &mut Context| "b").unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::DuplicateRoute {
                method: HttpMethod::Get,
                path: "/user".to_string(),
            }
        );
        // Same path under another verb is a different route.
        routes.handle("POST", "/user", |_: &mut Context| "c").unwrap();
        assert_eq!(routes.len(), 2);
    }

    #[test]
    fn test_invalid_method_and_path_are_rejected() {
        let mut routes = RouteBuilder::new();
        let err = routes.handle("FETCH", "/user", |_: &mut Context| "a").unwrap_err();
        assert!(matches!(err, ConfigurationError::UnsupportedMethod(_)));

        let err = routes.handle("GET", "user", |_: &mut Context| "a").unwrap_err();
        assert!(matches!(err, ConfigurationError::MalformedPath { .. }));
        assert_eq!(routes.state(), BuilderState::Empty);
    }

    #[test]
    fn test_handle_after_install_fails() {
        let mut routes = RouteBuilder::new();
        routes.handle("GET", "/test", |_: &mut Context| "a").unwrap();
        let table = routes.install().unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(routes.state(), BuilderState::Installed);

        let err = routes.handle("GET", "/other", |_: &mut Context| "b").unwrap_err();
        assert_eq!(err, ConfigurationError::AlreadyInstalled);
        assert_eq!(routes.install().unwrap_err(), ConfigurationError::AlreadyInstalled);
    }

    #[test]
    fn test_install_empty_builder() {
        let table = RouteBuilder::new().install().unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_bound_method_uses_controller_state() {
        let greeter = Arc::new(Greeter { greeting: "hello" });
        let mut routes = RouteBuilder::new();
        routes.handle_bound("GET", "/greet", &greeter, Greeter::greet).unwrap();
        assert_eq!(routes.routes()[0].kind(), ResponseKind::PlainText);
        assert_eq!(Arc::strong_count(&greeter), 2);
    }

    #[test]
    fn test_erased_handler_kind_must_match_declaration() {
        let mut routes = RouteBuilder::new();
        let handler = ErasedHandler::new(|_: &mut Context| Tag { name: "x" });

        let err = routes
            .handle_erased("GET", "/tag", handler.clone(), ResponseKind::ModelList)
            .unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::UnsupportedReturn {
                method: HttpMethod::Get,
                path: "/tag".to_string(),
                declared: ResponseKind::ModelList,
                actual: ResponseKind::SingleModel,
            }
        );

        routes
            .handle_erased("GET", "/tag", handler, ResponseKind::SingleModel)
            .unwrap();
        assert_eq!(routes.len(), 1);
    }
}
