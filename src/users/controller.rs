//! User endpoints.

use std::sync::Arc;

use axum::http::StatusCode;
use serde_json::json;

use crate::handler::{make_models, Context, Models, SerializationError};
use crate::routing::{ConfigurationError, Controller, RouteBuilder};
use crate::users::getter::UserGetter;
use crate::users::model::UserModel;

/// Serves the user list, a fixed detail record and lookups by id.
pub struct UserController {
    getter: Arc<dyn UserGetter>,
}

impl UserController {
    pub fn new(getter: Arc<dyn UserGetter>) -> Self {
        Self { getter }
    }

    pub fn user_test(&self, _: &mut Context) -> String {
        "用户测试".to_string()
    }

    pub fn user_list(&self, _: &mut Context) -> Models<UserModel> {
        make_models(self.getter.user_list())
    }

    pub fn user_detail(&self, _: &mut Context) -> UserModel {
        UserModel::new(101, "custer")
    }

    /// `GET /user/find?id=N`: writes 200, 400 or 404 itself.
    pub fn user_find(&self, ctx: &mut Context) {
        let written = match ctx.query("id").map(|v| v.parse::<u32>()) {
            Some(Ok(id)) => match self.getter.user_by_id(id) {
                Ok(user) => ctx.json(StatusCode::OK, &user),
                Err(e) => ctx.json(StatusCode::NOT_FOUND, &json!({ "error": e.to_string() })),
            },
            Some(Err(_)) | None => ctx.json(
                StatusCode::BAD_REQUEST,
                &json!({ "error": "query parameter `id` must be a non-negative integer" }),
            ),
        };
        if let Err(e) = written {
            report_write_failure(ctx, e);
        }
    }
}

fn report_write_failure(ctx: &mut Context, error: SerializationError) {
    tracing::error!(path = %ctx.path(), error = %error, "Failed to write response");
    ctx.status(StatusCode::INTERNAL_SERVER_ERROR);
}

impl Controller for UserController {
    fn name(&self) -> &'static str {
        "users"
    }

    fn build(self: Arc<Self>, routes: &mut RouteBuilder) -> Result<(), ConfigurationError> {
        routes
            .handle_bound("GET", "/test", &self, Self::user_test)?
            .handle_bound("GET", "/user", &self, Self::user_list)?
            .handle_bound("GET", "/user/detail", &self, Self::user_detail)?
            .handle_bound("GET", "/user/find", &self, Self::user_find)?;
        Ok(())
    }
}
