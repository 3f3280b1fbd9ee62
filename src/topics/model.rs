use serde::{Deserialize, Serialize};

use crate::handler::Model;

/// A discussion topic.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TopicModel {
    #[serde(rename = "id")]
    pub topic_id: u32,
    #[serde(rename = "title")]
    pub topic_title: String,
    #[serde(rename = "stitle")]
    pub topic_short_title: String,
    #[serde(rename = "url", default, skip_serializing_if = "String::is_empty")]
    pub topic_url: String,
    #[serde(rename = "ip", default)]
    pub user_ip: String,
    #[serde(rename = "score", default)]
    pub topic_score: i32,
}

impl TopicModel {
    pub fn new(topic_id: u32, title: impl Into<String>, short_title: impl Into<String>) -> Self {
        Self {
            topic_id,
            topic_title: title.into(),
            topic_short_title: short_title.into(),
            ..Self::default()
        }
    }
}

impl Model for TopicModel {}
