//! User repository access.
//!
//! # Design Decisions
//! - Controllers receive a `UserGetter` through their constructor; there is
//!   no process-wide instance
//! - Lookups return `Result` instead of panicking on a missing user

use std::collections::BTreeMap;

use thiserror::Error;

use crate::users::model::UserModel;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("not found user, id = {0}")]
    NotFound(u32),
}

/// Read access to stored users.
pub trait UserGetter: Send + Sync {
    /// All users, ordered by id.
    fn user_list(&self) -> Vec<UserModel>;

    fn user_by_id(&self, id: u32) -> Result<UserModel, RepositoryError>;
}

/// `UserGetter` over a fixed in-memory set.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserGetter {
    users: BTreeMap<u32, UserModel>,
}

impl InMemoryUserGetter {
    pub fn new(users: impl IntoIterator<Item = UserModel>) -> Self {
        Self {
            users: users.into_iter().map(|u| (u.user_id, u)).collect(),
        }
    }

    /// The three sample users served by the demo binary.
    pub fn seeded() -> Self {
        Self::new([
            UserModel::new(101, "custer"),
            UserModel::new(102, "张三"),
            UserModel::new(103, "李四"),
        ])
    }
}

impl UserGetter for InMemoryUserGetter {
    fn user_list(&self) -> Vec<UserModel> {
        self.users.values().cloned().collect()
    }

    fn user_by_id(&self, id: u32) -> Result<UserModel, RepositoryError> {
        self.users
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_is_ordered_by_id() {
        let getter = InMemoryUserGetter::new([UserModel::new(2, "b"), UserModel::new(1, "a")]);
        let ids: Vec<u32> = getter.user_list().iter().map(|u| u.user_id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_lookup_by_id() {
        let getter = InMemoryUserGetter::seeded();
        assert_eq!(getter.user_by_id(102).unwrap().user_name, "张三");

        let err = getter.user_by_id(7).unwrap_err();
        assert_eq!(err, RepositoryError::NotFound(7));
        assert_eq!(err.to_string(), "not found user, id = 7");
    }
}
