//! User entity.

use serde::{Deserialize, Serialize};

use crate::handler::Model;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserModel {
    #[serde(rename = "id")]
    pub user_id: u32,
    #[serde(rename = "name")]
    pub user_name: String,
}

impl UserModel {
    pub fn new(user_id: u32, user_name: impl Into<String>) -> Self {
        Self {
            user_id,
            user_name: user_name.into(),
        }
    }

    pub fn with_id(mut self, user_id: u32) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn with_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = user_name.into();
        self
    }
}

impl Model for UserModel {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mutators_and_field_names() {
        let user = UserModel::default().with_id(3).with_name("custer");
        assert_eq!(user, UserModel::new(3, "custer"));
        assert_eq!(
            serde_json::to_string(&user).unwrap(),
            r#"{"id":3,"name":"custer"}"#
        );
    }
}
