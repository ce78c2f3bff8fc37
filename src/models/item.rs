//! Validated media items and rejection records

use serde::{Deserialize, Serialize};

/// Canonical, upload-ready media descriptor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedMediaItem {
    /// Locator, `file://` form for absolute paths
    pub uri: String,
    /// Whether the item was classified as a video
    pub is_video: bool,
    /// Resolved or generated file name
    pub file_name: String,
    /// Resolved MIME type
    pub mime: String,
    /// Duration exactly as supplied by the picker
    pub duration: Option<f64>,
    /// Resolved byte size, if one could be determined
    pub size: Option<u64>,
}

impl ValidatedMediaItem {
    /// Short human label ("Video" / "Image")
    pub const fn kind_label(&self) -> &'static str {
        if self.is_video { "Video" } else { "Image" }
    }
}

/// Why one asset was not added to the selection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectionRecord {
    /// Name shown to the user
    pub label: String,
    /// Human-readable reason
    pub reason: String,
}

impl RejectionRecord {
    /// Create a new record
    pub fn new(label: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for RejectionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.label, self.reason)
    }
}
