use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of the most recently delivered post (a Reddit fullname, e.g. `t3_abc`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Cursor(pub String);

impl Cursor {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Cursor {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A post from the community feed, as consumed by the relay
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedItem {
    /// Full identifier, used as the cursor value
    pub id: String,
    pub title: String,
    /// Absolute link to the post's discussion page
    pub permalink: String,
    /// Link the post points at (the post itself for text posts)
    pub url: String,
    pub author: String,
    pub thumbnail: Option<String>,
}

impl FeedItem {
    pub fn cursor(&self) -> Cursor {
        Cursor(self.id.clone())
    }
}
