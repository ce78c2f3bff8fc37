//! Raw media asset as produced by a picker

use serde::{Deserialize, Serialize};

/// Coarse kind hint attached to a picked asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    /// Still image
    Image,
    /// Video clip
    Video,
}

/// One user-selected media file before validation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMediaAsset {
    /// Locator of the underlying file (path, `file://` or `http(s)://`)
    pub uri: String,
    /// Display name, if the picker knows one
    #[serde(default)]
    pub file_name: Option<String>,
    /// Kind hint
    #[serde(default, rename = "type")]
    pub kind: Option<AssetKind>,
    /// Duration in milliseconds or seconds, depending on the source
    #[serde(default)]
    pub duration: Option<f64>,
    /// Size in bytes
    #[serde(default)]
    pub file_size: Option<u64>,
}

impl RawMediaAsset {
    /// Create an asset with only a locator
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            ..Default::default()
        }
    }

    /// Set the display name
    pub fn with_file_name(mut self, name: impl Into<String>) -> Self {
        self.file_name = Some(name.into());
        self
    }

    /// Set the kind hint
    pub fn with_kind(mut self, kind: AssetKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the raw duration
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = Some(duration);
        self
    }

    /// Set the known byte size
    pub fn with_file_size(mut self, size: u64) -> Self {
        self.file_size = Some(size);
        self
    }

    /// Last path segment of the locator, without query or fragment
    pub fn uri_file_name(&self) -> Option<&str> {
        let path = self
            .uri
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim_end_matches('/');
        path.rsplit('/').next().filter(|s| !s.is_empty())
    }
}
