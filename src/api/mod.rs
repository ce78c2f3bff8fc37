//! Client for the remote media service

pub mod client;

pub use client::MediaClient;

use anyhow::Result;

use crate::error::SubmitError;
use crate::models::{RemoteMedia, Tag, ValidatedMediaItem};

/// Successful upload response
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReceipt {
    /// `message` field of the response body, if any
    pub message: Option<String>,
}

/// Operations offered by the media service
#[allow(async_fn_in_trait)]
pub trait MediaApi {
    /// Get the published media for a tag
    async fn fetch_feed(&self, tag: &Tag) -> Result<Vec<RemoteMedia>>;

    /// Submit validated items for review under a tag
    async fn upload(
        &self,
        tag: &Tag,
        items: &[ValidatedMediaItem],
    ) -> std::result::Result<UploadReceipt, SubmitError>;
}
