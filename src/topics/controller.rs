//! Topic endpoints.

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use crate::handler::Context;
use crate::routing::{ConfigurationError, Controller, RouteBuilder};
use crate::topics::model::TopicModel;

/// Serves a read-only topic list handed in at construction.
pub struct TopicController {
    topics: Vec<TopicModel>,
}

impl TopicController {
    pub fn new(topics: Vec<TopicModel>) -> Self {
        Self { topics }
    }

    pub fn topic_list(&self, _: &mut Context) -> Vec<TopicModel> {
        self.topics.clone()
    }

    pub fn topic_count(&self, _: &mut Context) -> String {
        format!("{} topics", self.topics.len())
    }

    /// Echo a posted topic back with 201; nothing is stored.
    pub fn topic_create(&self, ctx: &mut Context) {
        let parsed = serde_json::from_slice::<TopicModel>(ctx.body());
        let written = match parsed {
            Ok(topic) => ctx.json(StatusCode::CREATED, &topic),
            Err(e) => ctx.json(
                StatusCode::BAD_REQUEST,
                &json!({ "error": format!("invalid topic: {e}") }),
            ),
        };
        if let Err(e) = written {
            tracing::error!(path = %ctx.path(), error = %e, "Failed to write response");
            ctx.status(StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}

impl Controller for TopicController {
    fn name(&self) -> &'static str {
        "topics"
    }

    fn build(self: Arc<Self>, routes: &mut RouteBuilder) -> Result<(), ConfigurationError> {
        routes
            .handle_bound("GET", "/topic", &self, Self::topic_list)?
            .handle_bound("GET", "/topic/count", &self, Self::topic_count)?
            .handle_bound("POST", "/topic", &self, Self::topic_create)?;
        Ok(())
    }
}
