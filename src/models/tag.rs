//! Feed/category tags

use serde::{Deserialize, Serialize};

/// Tags offered by the upload screen
pub const TAG_CHOICES: [&str; 12] = [
    "category1",
    "category2",
    "category3",
    "category4",
    "category5",
    "category6",
    "category7",
    "category8",
    "category9",
    "category10",
    "category11",
    "category12",
];

/// A non-empty, trimmed tag
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tag(String);

impl Tag {
    /// Parse from string; blank input yields `None`
    pub fn parse(s: &str) -> Option<Self> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Whether this is one of the upload categories
    pub fn is_upload_choice(&self) -> bool {
        TAG_CHOICES.contains(&self.0.as_str())
    }

    /// Borrow the tag text
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
