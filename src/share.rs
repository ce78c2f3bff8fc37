//! Share and referral messages

use anyhow::Result;

use crate::prefs::{Preferences, REFERRAL_SHOWN};

/// Content handed to the platform share sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareContent {
    /// Sheet title
    pub title: Option<String>,
    /// Body text
    pub message: String,
    /// Link being shared
    pub url: Option<String>,
}

/// Share one feed item
pub fn share_media(url: &str, title: &str) -> ShareContent {
    ShareContent {
        title: Some(format!("Lookbook Style: {title}")),
        message: format!("Check out this style on Lookbook! 🔥\n{url}"),
        url: Some(url.to_string()),
    }
}

/// Invite a friend to the app
pub fn referral(app_link: &str) -> ShareContent {
    ShareContent {
        title: None,
        message: format!("Hey! Check out this awesome app for hairstyles I found: {app_link}"),
        url: Some(app_link.to_string()),
    }
}

/// Referral to show on first launch, once
pub fn first_launch_referral(prefs: &Preferences<'_>, app_link: &str) -> Result<Option<ShareContent>> {
    if prefs.flag(REFERRAL_SHOWN)? {
        return Ok(None);
    }
    prefs.set_flag(REFERRAL_SHOWN)?;
    Ok(Some(referral(app_link)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn test_share_media() {
        let content = share_media("https://x/1.jpg", "category3");
        assert_eq!(content.title.as_deref(), Some("Lookbook Style: category3"));
        assert!(content.message.ends_with("\nhttps://x/1.jpg"));
    }

    #[test]
    fn test_referral_shown_once() {
        let db = Database::open_in_memory().unwrap();
        let prefs = Preferences::new(&db);
        let first = first_launch_referral(&prefs, "https://apps.example/lookbook").unwrap();
        assert!(first.unwrap().message.contains("https://apps.example/lookbook"));
        assert!(first_launch_referral(&prefs, "https://apps.example/lookbook").unwrap().is_none());
    }
}
