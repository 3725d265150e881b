//! `[not_found]` configuration: metadata for slugs without content.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotFoundConfig {
    pub title: String,
    pub description: String,
}

impl Default for NotFoundConfig {
    fn default() -> Self {
        Self {
            title: "Post Not Found".into(),
            description: "The requested blog post could not be found.".into(),
        }
    }
}
