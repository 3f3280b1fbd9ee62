//! Handler adapter subsystem.
//!
//! # Data Flow
//! ```text
//! user fn (&mut Context) -> String | M: Model | Vec<M> / Models<M> | ()
//!     → responder.rs (kind fixed by the return type)
//!     → adapter.rs (type-erased, uniform callable)
//!     → http::response (encoding policy)
//! ```
//!
//! # Design Decisions
//! - No runtime inspection of returned values: the encoding is part of the type
//! - Handlers are synchronous; the transport buffers the body before calling

pub mod adapter;
pub mod context;
pub mod model;
pub mod responder;

pub use adapter::ErasedHandler;
pub use context::Context;
pub use model::{make_models, Model, Models};
pub use responder::{HandlerResult, Responder, ResponseKind, SerializationError};
