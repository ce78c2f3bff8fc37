//! Capped selection of validated items

use crate::models::ValidatedMediaItem;

/// Most items a selection can hold
pub const MAX_SELECTION: usize = 5;

/// Items waiting for submission, owned by the upload session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    items: Vec<ValidatedMediaItem>,
}

impl Selection {
    /// Create an empty selection
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append a batch, then truncate to [`MAX_SELECTION`].
    ///
    /// Returns how many items were dropped by the truncation.
    pub fn merge(&mut self, batch: Vec<ValidatedMediaItem>) -> usize {
        self.items.extend(batch);
        let dropped = self.items.len().saturating_sub(MAX_SELECTION);
        self.items.truncate(MAX_SELECTION);
        if dropped > 0 {
            tracing::debug!("Dropped {dropped} item(s) over the selection cap");
        }
        dropped
    }

    /// Remove the item at `index`; out-of-range indexes are ignored
    pub fn remove(&mut self, index: usize) -> Option<ValidatedMediaItem> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Remove everything
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Selected items in order
    pub fn items(&self) -> &[ValidatedMediaItem] {
        &self.items
    }

    /// Number of selected items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Slots left before the cap
    pub fn remaining(&self) -> usize {
        MAX_SELECTION.saturating_sub(self.items.len())
    }
}
