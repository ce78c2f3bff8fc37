//! Typed access to the flags kept in the preference store

use anyhow::{Context, Result};
use std::collections::BTreeMap;

use crate::db::Database;

/// Set once the content policy was accepted with "don't show again"
pub const POLICY_SEEN: &str = "@policy_seen";
/// Set once the referral prompt has been shown
pub const REFERRAL_SHOWN: &str = "hasShownReferralDialog";
/// Set once the review prompt was answered
pub const HAS_RATED: &str = "hasRated";
/// JSON object of media id to liked flag
pub const LIKED_MEDIA: &str = "likedImages";

/// Preference flags on top of the key-value table
pub struct Preferences<'a> {
    db: &'a Database,
}

impl<'a> Preferences<'a> {
    /// Wrap a database
    pub const fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Read a boolean flag; anything but `"true"` is false
    pub fn flag(&self, key: &str) -> Result<bool> {
        Ok(self.db.get(key)?.as_deref() == Some("true"))
    }

    /// Set a boolean flag
    pub fn set_flag(&self, key: &str) -> Result<()> {
        self.db.set(key, "true")
    }

    /// Clear a boolean flag
    pub fn clear_flag(&self, key: &str) -> Result<()> {
        self.db.remove(key)
    }

    /// Liked state per media id
    pub fn liked(&self) -> Result<BTreeMap<i64, bool>> {
        match self.db.get(LIKED_MEDIA)? {
            Some(json) => serde_json::from_str(&json).context("Failed to parse liked media"),
            None => Ok(BTreeMap::new()),
        }
    }

    /// Replace the liked map
    pub fn set_liked(&self, liked: &BTreeMap<i64, bool>) -> Result<()> {
        let json = serde_json::to_string(liked).context("Failed to serialize liked media")?;
        self.db.set(LIKED_MEDIA, &json)
    }

    /// Flip the liked state of one item and return the new state
    pub fn toggle_like(&self, id: i64) -> Result<bool> {
        let mut liked = self.liked()?;
        let entry = liked.entry(id).or_insert(false);
        *entry = !*entry;
        let now_liked = *entry;
        self.set_liked(&liked)?;
        Ok(now_liked)
    }
}
