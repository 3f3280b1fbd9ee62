//! Sample topic domain.

pub mod controller;
pub mod model;

pub use controller::TopicController;
pub use model::TopicModel;
