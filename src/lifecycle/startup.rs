//! Startup orchestration.
//!
//! # Responsibilities
//! - Give every controller its own route builder and install it
//! - Merge installed tables, rejecting routes claimed by two controllers
//! - Build the HTTP server once all controllers are mounted
//!
//! # Design Decisions
//! - Fail fast: any registration error aborts startup
//! - Controllers mount in order; the listener starts last

use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;

use crate::config::ServerConfig;
use crate::http::HttpServer;
use crate::routing::{ConfigurationError, Controller, RouteBuilder, RouteTable};

/// An application under assembly: configuration plus mounted controllers.
#[derive(Debug)]
pub struct Application {
    config: ServerConfig,
    table: RouteTable,
    controllers: Vec<&'static str>,
}

impl Application {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config,
            table: RouteTable::default(),
            controllers: Vec::new(),
        }
    }

    /// Mount a controller, taking ownership of it.
    pub fn mount<C: Controller>(&mut self, controller: C) -> Result<&mut Self, ConfigurationError> {
        self.mount_shared(Arc::new(controller))
    }

    /// Mount a controller that is already shared.
    pub fn mount_shared<C: Controller>(
        &mut self,
        controller: Arc<C>,
    ) -> Result<&mut Self, ConfigurationError> {
        let name = controller.name();
        let mut routes = RouteBuilder::new();
        controller.build(&mut routes)?;
        let installed = routes.install()?;
        self.table = self.table.merge(&installed)?;
        self.controllers.push(name);

        tracing::info!(
            controller = name,
            routes = installed.len(),
            "Controller mounted"
        );
        for route in &installed {
            tracing::debug!(route = %route, "Route installed");
        }
        Ok(self)
    }

    /// Every installed route, across all controllers.
    pub fn routes(&self) -> &RouteTable {
        &self.table
    }

    /// Names of mounted controllers, in mount order.
    pub fn controllers(&self) -> &[&'static str] {
        &self.controllers
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn into_server(self) -> HttpServer {
        HttpServer::new(self.config, self.table)
    }

    pub fn into_router(self) -> Router {
        self.into_server().into_router()
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn serve(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        self.into_server().run(listener, shutdown).await
    }
}
