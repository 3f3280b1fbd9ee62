//! Controllers: groups of handlers that declare their own routes.

use std::sync::Arc;

use crate::routing::builder::RouteBuilder;
use crate::routing::error::ConfigurationError;

/// A stateless group of handlers.
///
/// `build` is called once at start-up with a fresh builder. Calling it twice
/// on the same builder fails with a duplicate-route error.
pub trait Controller: Send + Sync + 'static {
    /// Short name used in start-up logs.
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    fn build(self: Arc<Self>, routes: &mut RouteBuilder) -> Result<(), ConfigurationError>;
}
