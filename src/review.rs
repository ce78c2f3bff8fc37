//! App-store review prompt

use anyhow::Result;

use crate::prefs::{HAS_RATED, Preferences};

/// Open the store page (when one is configured) and record that the user
/// was asked, so the prompt is not repeated.
///
/// Returns whether a store page was opened.
pub fn request_review(prefs: &Preferences<'_>, store_url: Option<&str>) -> Result<bool> {
    let opened = match store_url.filter(|u| !u.trim().is_empty()) {
        Some(url) => match open::that(url) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Could not open {url}: {e}");
                false
            }
        },
        None => {
            tracing::info!("In-app review not available");
            false
        }
    };

    prefs.set_flag(HAS_RATED)?;
    Ok(opened)
}

/// Whether the review prompt should still be offered
pub fn should_prompt(prefs: &Preferences<'_>) -> Result<bool> {
    Ok(!prefs.flag(HAS_RATED)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;

    #[test]
    fn test_review_without_store_still_records() {
        let db = Database::open_in_memory().unwrap();
        let prefs = Preferences::new(&db);
        assert!(should_prompt(&prefs).unwrap());
        assert!(!request_review(&prefs, None).unwrap());
        assert!(!should_prompt(&prefs).unwrap());
    }
}
