//! Tag feed state

use anyhow::Result;
use rand::seq::SliceRandom;

use crate::api::MediaApi;
use crate::models::{RemoteMedia, Tag};
use crate::prefs::Preferences;

/// One feed item with its local liked flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedEntry {
    /// Media as published
    pub media: RemoteMedia,
    /// Whether the user liked it on this device
    pub liked: bool,
}

/// Loaded feed for one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feed {
    /// Tag the feed was loaded for
    pub tag: Tag,
    /// Entries in display order
    pub entries: Vec<FeedEntry>,
    /// Message to show instead of entries
    pub error: Option<String>,
}

impl Feed {
    /// Fetch the feed for `tag` in random order
    pub async fn load<A: MediaApi>(api: &A, tag: &Tag, prefs: &Preferences<'_>) -> Self {
        let mut feed = Self {
            tag: tag.clone(),
            entries: Vec::new(),
            error: None,
        };

        let mut media = match api.fetch_feed(tag).await {
            Ok(media) => media,
            Err(e) => {
                tracing::error!("Error fetching media for {tag}: {e:#}");
                feed.error = Some("Failed to fetch images. Please try again later.".to_string());
                return feed;
            }
        };

        if media.is_empty() {
            feed.error = Some("No images found for this tag.".to_string());
            return feed;
        }

        media.shuffle(&mut rand::rng());

        // A broken liked map only costs the hearts, not the feed
        let liked = prefs.liked().unwrap_or_else(|e| {
            tracing::warn!("Ignoring liked media: {e:#}");
            Default::default()
        });

        feed.entries = media
            .into_iter()
            .map(|media| FeedEntry {
                liked: liked.get(&media.id).copied().unwrap_or(false),
                media,
            })
            .collect();
        feed
    }

    /// Flip the liked flag of entry `id`, persisting it
    pub fn toggle_like(&mut self, prefs: &Preferences<'_>, id: i64) -> Result<bool> {
        let liked = prefs.toggle_like(id)?;
        if let Some(entry) = self.entries.iter_mut().find(|e| e.media.id == id) {
            entry.liked = liked;
        }
        Ok(liked)
    }

    /// Look up an entry
    pub fn entry(&self, id: i64) -> Option<&FeedEntry> {
        self.entries.iter().find(|e| e.media.id == id)
    }
}
