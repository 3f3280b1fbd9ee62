//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Mount controllers → Install routes → Start listener
//!
//! Shutdown (shutdown.rs):
//!     trigger() → broadcast to subscribers → axum graceful drain → serve returns
//!
//! Signals (signals.rs):
//!     Ctrl+C → Shutdown::trigger
//! ```
//!
//! # Design Decisions
//! - Route tables are sealed before the listener binds
//! - One broadcast channel; any number of subscribers

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::Shutdown;
pub use startup::Application;
