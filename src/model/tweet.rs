use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub text: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,

    #[serde(default)]
    pub created: DateTime<Utc>,
}

impl Tweet {
    pub fn new(id: String, text: String) -> Self {
        Self {
            id,
            text,
            author_id: None,
            created: Utc::now(),
        }
    }

    pub fn with_author(mut self, author_id: String) -> Self {
        self.author_id = Some(author_id);
        self
    }
}
