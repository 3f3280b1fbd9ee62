//! Shared utilities for integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use tower::ServiceExt;

use fluent_router::config::ServerConfig;
use fluent_router::lifecycle::Application;
use fluent_router::topics::{TopicController, TopicModel};
use fluent_router::users::{InMemoryUserGetter, UserController};

/// Application with the demo controllers mounted.
#[allow(dead_code)]
pub fn demo_app(config: ServerConfig) -> Application {
    let mut app = Application::new(config);
    app.mount(UserController::new(Arc::new(InMemoryUserGetter::seeded())))
        .unwrap()
        .mount(TopicController::new(vec![TopicModel::new(1, "first topic", "first")]))
        .unwrap();
    app
}

/// Response parts collected for assertions.
#[allow(dead_code)]
pub struct Collected {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

/// Send one request through the router in-process.
#[allow(dead_code)]
pub async fn send(router: &Router, method: &str, uri: &str, body: &str) -> Collected {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    Collected {
        status,
        headers,
        body: String::from_utf8(bytes.to_vec()).unwrap(),
    }
}
