use serde::{Deserialize, Serialize};

/// A normalized, presentation-ready record derived from one feed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    pub title: String,
    pub author: String,
    pub author_href: Option<String>,
    /// Unix seconds
    pub created: Option<i64>,
    pub href: String,
    pub image_href: Option<String>,
    pub source: String,
    pub text: String,
}

impl Story {
    pub fn display_author(&self) -> &str {
        if self.author.is_empty() {
            "staff"
        } else {
            &self.author
        }
    }

    pub fn has_text(&self) -> bool {
        !self.text.trim().is_empty()
    }
}
