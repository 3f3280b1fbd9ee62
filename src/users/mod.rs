//! Sample user domain: model, repository and controller.

pub mod controller;
pub mod getter;
pub mod model;

pub use controller::UserController;
pub use getter::{InMemoryUserGetter, RepositoryError, UserGetter};
pub use model::UserModel;
