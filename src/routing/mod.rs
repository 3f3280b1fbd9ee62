//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Controller::build(routes)
//!     → builder.rs (validate verb/path, reject duplicates, adapt handler)
//!     → builder.install()
//!     → router.rs (immutable RouteTable)
//!     → http::server (axum router, one method router per path)
//! ```
//!
//! # Design Decisions
//! - Routes are declared at startup, immutable at runtime
//! - Static paths only: no wildcards, captures or regex
//! - Every registration mistake is an error before traffic is accepted

pub mod builder;
pub mod controller;
pub mod error;
pub mod method;
pub mod route;
pub mod router;

pub use builder::{BuilderState, RouteBuilder};
pub use controller::Controller;
pub use error::ConfigurationError;
pub use method::{HttpMethod, IntoHttpMethod};
pub use route::Route;
pub use router::RouteTable;
