//! Media as served by the remote feed endpoint

use serde::{Deserialize, Serialize};

/// One published media entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteMedia {
    /// Server-side ID
    pub id: i64,
    /// Name of the file as uploaded
    #[serde(default)]
    pub original_name: String,
    /// Stored file name
    #[serde(default)]
    pub file_name: String,
    /// Public URL
    pub url: String,
    /// Upload timestamp as sent by the server
    #[serde(default)]
    pub upload_time: String,
}

impl RemoteMedia {
    /// Whether this entry should be played as a video
    pub fn is_video(&self) -> bool {
        self.url.to_lowercase().ends_with(".mp4")
    }

    /// Parsed upload time, if the server sent RFC 3339
    pub fn uploaded_at(&self) -> Option<chrono::DateTime<chrono::Utc>> {
        chrono::DateTime::parse_from_rfc3339(&self.upload_time)
            .ok()
            .map(|dt| dt.with_timezone(&chrono::Utc))
    }
}

/// Body of `GET /media/{tag}`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FeedResponse {
    /// Published media, absent when the tag is unknown
    #[serde(default)]
    pub media: Vec<RemoteMedia>,
}
