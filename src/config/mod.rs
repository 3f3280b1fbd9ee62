//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! --config <file.toml>          (or built-in defaults)
//!     → loader.rs: toml → ServerConfig
//!     → validation.rs: addresses, non-zero limits, log level
//!     → --bind override from the CLI
//!     → Application::new / HttpServer::new
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the route table never depends on it
//! - All fields have defaults to allow minimal configs
//! - Validation reports every problem at once, not just the first

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, LoadError};
pub use schema::{
    LimitsConfig, ListenerConfig, LogFormat, ObservabilityConfig, ServerConfig, TimeoutConfig,
};
pub use validation::ValidationError;
