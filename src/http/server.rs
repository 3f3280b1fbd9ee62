//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Turn an installed [`RouteTable`] into an Axum Router
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Buffer request bodies and dispatch to the adapted handlers
//! - Bind server to listener with graceful shutdown

use std::time::{Duration, Instant};

use axum::{
    extract::Request,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::MethodRouter,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer,
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;
use crate::handler::Context;
use crate::http::request::request_id;
use crate::observability::metrics;
use crate::routing::{Route, RouteTable};

/// HTTP server serving one installed route table.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
    route_count: usize,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration and routes.
    pub fn new(config: ServerConfig, table: RouteTable) -> Self {
        let router = Self::build_router(&config, &table);
        Self {
            router,
            config,
            route_count: table.len(),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    pub fn build_router(config: &ServerConfig, table: &RouteTable) -> Router {
        mount_routes(table, config.limits.max_body_bytes)
            .layer(RequestBodyLimitLayer::new(config.limits.max_body_bytes))
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(TraceLayer::new_for_http())
            .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
    }

    /// The router, for in-process dispatch.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Run the server until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            routes = self.route_count,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Draining connections");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// One method router per distinct path.
fn mount_routes(table: &RouteTable, max_body_bytes: usize) -> Router {
    let mut router = Router::new();
    for path in table.paths() {
        let mut method_router: MethodRouter = MethodRouter::new();
        for route in table.iter().filter(|r| r.path() == path) {
            let route = route.clone();
            method_router = method_router.on(route.method().filter(), move |request: Request| {
                dispatch(route.clone(), request, max_body_bytes)
            });
        }
        router = router.route(path, method_router);
    }
    router.fallback(not_found)
}

/// Buffer the body, run the adapted handler and record the outcome.
async fn dispatch(route: Route, request: Request, max_body_bytes: usize) -> Response {
    let start_time = Instant::now();
    let (parts, body) = request.into_parts();
    let request_id = request_id(&parts.headers).to_string();

    let body = match axum::body::to_bytes(body, max_body_bytes).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(
                request_id = %request_id,
                path = %route.path(),
                error = %e,
                "Request body rejected"
            );
            metrics::record_request(
                route.method().as_str(),
                route.path(),
                StatusCode::PAYLOAD_TOO_LARGE.as_u16(),
                start_time,
            );
            return (StatusCode::PAYLOAD_TOO_LARGE, "Request body too large").into_response();
        }
    };

    tracing::debug!(
        request_id = %request_id,
        method = %route.method(),
        path = %route.path(),
        kind = %route.kind(),
        "Dispatching request"
    );

    let response = route.dispatch(Context::new(parts, body));
    metrics::record_request(
        route.method().as_str(),
        route.path(),
        response.status().as_u16(),
        start_time,
    );
    response
}

async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "No route matched");
    (StatusCode::NOT_FOUND, "No matching route found").into_response()
}
