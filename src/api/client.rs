//! HTTP implementation of [`MediaApi`]

use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;

use crate::error::SubmitError;
use crate::models::{FeedResponse, RemoteMedia, Tag, ValidatedMediaItem};

use super::{MediaApi, UploadReceipt};

/// Form field carrying each uploaded file
const MEDIA_FIELD: &str = "media";

/// Media service client
pub struct MediaClient {
    client: Client,
    base_url: String,
}

/// Body returned by the upload endpoint
#[derive(Debug, Default, Deserialize)]
struct UploadResponse {
    #[serde(default)]
    message: Option<String>,
}

impl MediaClient {
    /// Create a new client
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Feed URL for a tag
    pub fn feed_url(&self, tag: &Tag) -> String {
        format!("{}/media/{}", self.base_url, urlencoding::encode(tag.as_str()))
    }

    /// Upload URL for a tag
    pub fn upload_url(&self, tag: &Tag) -> String {
        format!("{}/upload/{}", self.base_url, urlencoding::encode(tag.as_str()))
    }

    /// Read the bytes behind an item.
    ///
    /// Local paths (plain or `file://`) are read from disk and `http(s)`
    /// locators are downloaded. Any other scheme cannot be sent.
    async fn item_bytes(&self, item: &ValidatedMediaItem) -> std::result::Result<Vec<u8>, SubmitError> {
        let uri = item.uri.as_str();

        if uri.starts_with("http://") || uri.starts_with("https://") {
            let response = self.client.get(uri).send().await?;
            let status = response.status();
            if !status.is_success() {
                return Err(SubmitError::Unfetchable {
                    uri: uri.to_string(),
                    status: status.as_u16(),
                });
            }
            return Ok(response.bytes().await?.to_vec());
        }

        let path = match uri.strip_prefix("file://") {
            Some(path) => path,
            None if uri.contains("://") => {
                return Err(SubmitError::UnsupportedLocator(uri.to_string()));
            }
            None => uri,
        };
        tokio::fs::read(path)
            .await
            .map_err(|source| SubmitError::Unreadable {
                uri: uri.to_string(),
                source,
            })
    }

    /// Build the multipart part for one item
    async fn part_for(&self, item: &ValidatedMediaItem) -> std::result::Result<Part, SubmitError> {
        let bytes = self.item_bytes(item).await?;
        Ok(Part::bytes(bytes)
            .file_name(item.file_name.clone())
            .mime_str(&item.mime)?)
    }
}

impl MediaApi for MediaClient {
    async fn fetch_feed(&self, tag: &Tag) -> Result<Vec<RemoteMedia>> {
        let url = self.feed_url(tag);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to fetch media")?;

        if !response.status().is_success() {
            anyhow::bail!("Media service error {}", response.status());
        }

        let feed: FeedResponse = response
            .json()
            .await
            .context("Failed to parse media response")?;

        Ok(feed.media)
    }

    async fn upload(
        &self,
        tag: &Tag,
        items: &[ValidatedMediaItem],
    ) -> std::result::Result<UploadReceipt, SubmitError> {
        let mut form = Form::new();
        for item in items {
            form = form.part(MEDIA_FIELD, self.part_for(item).await?);
        }

        let url = self.upload_url(tag);
        tracing::info!("Uploading {} item(s) to {url}", items.len());

        let response = self.client.post(&url).multipart(form).send().await?;
        let status = response.status();

        // Body may be empty or not JSON on either outcome
        let body: UploadResponse = response.json().await.unwrap_or_default();

        if status.is_success() {
            Ok(UploadReceipt {
                message: body.message,
            })
        } else {
            tracing::warn!("Upload failed with {status}: {:?}", body.message);
            Err(SubmitError::Rejected {
                status: status.as_u16(),
                message: body.message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{IntakeRules, IntakeValidator, NoProbe};
    use crate::models::RawMediaAsset;
    use crate::test_support::TestServer;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    fn tag(s: &str) -> Tag {
        Tag::parse(s).unwrap()
    }

    #[test]
    fn test_urls() {
        let client = MediaClient::new("https://media.example.com/", Duration::from_secs(5));
        assert_eq!(
            client.feed_url(&tag("category1")),
            "https://media.example.com/media/category1"
        );
        assert_eq!(
            client.upload_url(&tag("box braids")),
            "https://media.example.com/upload/box%20braids"
        );
    }

    #[test]
    fn test_upload_response_parsing() {
        let body: UploadResponse = serde_json::from_str(r#"{"message":"Too many files"}"#).unwrap();
        assert_eq!(body.message.as_deref(), Some("Too many files"));
        let body: UploadResponse = serde_json::from_str(r#"{"ok":true}"#).unwrap();
        assert!(body.message.is_none());
    }

    #[tokio::test]
    async fn test_unreadable_item() {
        let client = MediaClient::new("http://127.0.0.1:9", Duration::from_secs(1));
        let item = ValidatedMediaItem {
            uri: "file:///definitely/not/here.jpg".to_string(),
            is_video: false,
            file_name: "here.jpg".to_string(),
            mime: "image/jpeg".to_string(),
            duration: None,
            size: None,
        };
        let result = client.upload(&tag("category1"), &[item]).await;
        assert!(matches!(result, Err(SubmitError::Unreadable { .. })));
    }

    #[tokio::test]
    async fn test_upload_remote_item() {
        let server = TestServer::start(vec![
            ("/cdn/look.jpg", "200 OK", b"REMOTE-JPEG-BYTES".to_vec()),
            ("/upload/category1", "200 OK", br#"{"message":"queued"}"#.to_vec()),
        ])
        .await;

        let validator = IntakeValidator::new(IntakeRules::default(), NoProbe);
        let report = validator
            .validate(&[RawMediaAsset::new(format!("{}/cdn/look.jpg", server.base))])
            .await;
        assert_eq!(report.accepted.len(), 1);

        let client = MediaClient::new(&server.base, Duration::from_secs(5));
        let receipt = client
            .upload(&tag("category1"), &report.accepted)
            .await
            .unwrap();
        assert_eq!(receipt.message.as_deref(), Some("queued"));

        let body = server.body_of("POST /upload/category1").unwrap();
        assert!(contains(&body, b"REMOTE-JPEG-BYTES"));
        let disposition = format!("filename=\"{}\"", report.accepted[0].file_name);
        assert!(contains(&body, disposition.as_bytes()));
    }

    #[tokio::test]
    async fn test_upload_local_item_and_rejection() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.png");
        std::fs::write(&path, b"LOCAL-PNG").unwrap();

        let server = TestServer::start(vec![(
            "/upload/category2",
            "413 Payload Too Large",
            br#"{"message":"Too big"}"#.to_vec(),
        )])
        .await;
        let validator = IntakeValidator::new(IntakeRules::default(), NoProbe);
        let report = validator
            .validate(&[RawMediaAsset::new(path.to_string_lossy())])
            .await;

        let client = MediaClient::new(&server.base, Duration::from_secs(5));
        let err = client
            .upload(&tag("category2"), &report.accepted)
            .await
            .unwrap_err();
        assert!(matches!(err, SubmitError::Rejected { status: 413, .. }));
        assert_eq!(err.notice(), "Too big");
        assert!(contains(&server.body_of("POST /upload/category2").unwrap(), b"LOCAL-PNG"));
    }

    #[tokio::test]
    async fn test_upload_remote_item_missing() {
        let server = TestServer::start(Vec::new()).await;
        let client = MediaClient::new(&server.base, Duration::from_secs(5));
        let item = ValidatedMediaItem {
            uri: format!("{}/cdn/gone.jpg", server.base),
            is_video: false,
            file_name: "gone.jpg".to_string(),
            mime: "image/jpeg".to_string(),
            duration: None,
            size: None,
        };
        let result = client.upload(&tag("category1"), &[item]).await;
        assert!(matches!(result, Err(SubmitError::Unfetchable { status: 404, .. })));
        // Nothing was posted
        assert!(server.body_of("POST").is_none());
    }

    #[tokio::test]
    async fn test_upload_unsupported_scheme() {
        let client = MediaClient::new("http://127.0.0.1:9", Duration::from_secs(1));
        let item = ValidatedMediaItem {
            uri: "content://media/external/42".to_string(),
            is_video: false,
            file_name: "42.jpg".to_string(),
            mime: "image/jpeg".to_string(),
            duration: None,
            size: None,
        };
        let result = client.upload(&tag("category1"), &[item]).await;
        assert!(matches!(result, Err(SubmitError::UnsupportedLocator(_))));
    }
}
