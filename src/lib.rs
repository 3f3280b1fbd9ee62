//! Fluent route builder and handler adapter on top of Axum.
//!
//! Controllers declare `(method, path, handler)` triples in one chained
//! expression; each handler's return type (text, model, model list or raw)
//! fixes how its result is encoded, before any request arrives.

pub mod config;
pub mod handler;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod topics;
pub mod users;

pub use config::ServerConfig;
pub use handler::{make_models, Context, Model, Models, ResponseKind, SerializationError};
pub use http::HttpServer;
pub use lifecycle::{Application, Shutdown};
pub use routing::{ConfigurationError, Controller, HttpMethod, RouteBuilder, RouteTable};
