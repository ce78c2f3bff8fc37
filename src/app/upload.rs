//! Upload screen state

use crate::api::MediaApi;
use crate::error::PickError;
use crate::intake::{IntakeReport, IntakeValidator, MAX_SELECTION, MediaPicker, Selection, SizeProbe};
use crate::models::Tag;

use super::Notice;

/// What one pick did to the session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeOutcome {
    /// Validation result for the picked batch
    pub report: IntakeReport,
    /// Accepted items dropped by the selection cap
    pub dropped: usize,
}

/// State of the upload screen
#[derive(Debug, Clone, Default)]
pub struct UploadSession {
    /// Items waiting for submission
    pub selection: Selection,
    /// Tag the selection will be filed under
    pub tag: Option<Tag>,
    notices: Vec<Notice>,
}

impl UploadSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Run one picker invocation through validation and into the selection.
    ///
    /// Returns `None` when the pick itself failed; the reason is left as a
    /// notice and the selection is untouched.
    pub async fn pick<M, P>(
        &mut self,
        picker: &M,
        validator: &IntakeValidator<P>,
    ) -> Option<IntakeOutcome>
    where
        M: MediaPicker,
        P: SizeProbe,
    {
        let batch = match picker.pick(MAX_SELECTION).await {
            Ok(batch) => batch,
            Err(PickError::Cancelled) => return None,
            Err(PickError::PermissionDenied(what)) => {
                tracing::warn!("Media access refused for {what}");
                self.notify(Notice::Error(
                    "Permission to access gallery is required.".to_string(),
                ));
                return None;
            }
            Err(e) => {
                tracing::error!("Picker error: {e:#}");
                self.notify(Notice::Error("Could not open gallery.".to_string()));
                return None;
            }
        };

        let report = validator.validate(&batch).await;
        if let Some(message) = report.rejection_message(validator.rules()) {
            self.notify(Notice::Error(message));
        }
        let dropped = self.selection.merge(report.accepted.clone());

        Some(IntakeOutcome { report, dropped })
    }

    /// Drop one selected item
    pub fn remove(&mut self, index: usize) -> bool {
        self.selection.remove(index).is_some()
    }

    /// Choose the tag; blank input clears it
    pub fn set_tag(&mut self, tag: &str) {
        self.tag = Tag::parse(tag);
    }

    /// Whether submission is currently possible
    pub fn can_submit(&self) -> bool {
        !self.selection.is_empty() && self.tag.is_some()
    }

    /// Send the selection to the media service.
    ///
    /// On success the selection and tag are cleared. On failure both are
    /// kept so the user can retry.
    pub async fn submit<A: MediaApi>(&mut self, api: &A) -> bool {
        let Some(tag) = self.tag.clone().filter(|_| !self.selection.is_empty()) else {
            self.notify(Notice::Error(
                "Please select media and pick a tag.".to_string(),
            ));
            return false;
        };

        match api.upload(&tag, self.selection.items()).await {
            Ok(_) => {
                tracing::info!("Submitted {} item(s) under {tag}", self.selection.len());
                self.selection.clear();
                self.tag = None;
                self.notify(Notice::Info(
                    "Media sent for review successfully.".to_string(),
                ));
                true
            }
            Err(e) => {
                tracing::error!("Upload error: {e}");
                self.notify(Notice::Error(e.notice()));
                false
            }
        }
    }

    /// Take the notices raised since the last call
    pub fn drain_notices(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::UploadReceipt;
    use crate::error::SubmitError;
    use crate::intake::{IntakeRules, NoProbe};
    use crate::models::{AssetKind, RawMediaAsset, RemoteMedia, ValidatedMediaItem};
    use anyhow::Result;
    use std::cell::RefCell;

    struct FixedPicker(fn() -> Result<Vec<RawMediaAsset>, PickError>);

    impl MediaPicker for FixedPicker {
        async fn pick(&self, limit: usize) -> Result<Vec<RawMediaAsset>, PickError> {
            (self.0)().map(|mut batch| {
                batch.truncate(limit);
                batch
            })
        }
    }

    /// Records uploads and answers with a canned status
    struct FakeApi {
        status: Option<u16>,
        uploads: RefCell<Vec<(String, usize)>>,
    }

    impl FakeApi {
        fn answering(status: Option<u16>) -> Self {
            Self {
                status,
                uploads: RefCell::new(Vec::new()),
            }
        }
    }

    impl MediaApi for FakeApi {
        async fn fetch_feed(&self, _tag: &Tag) -> Result<Vec<RemoteMedia>> {
            Ok(Vec::new())
        }

        async fn upload(
            &self,
            tag: &Tag,
            items: &[ValidatedMediaItem],
        ) -> Result<UploadReceipt, SubmitError> {
            self.uploads
                .borrow_mut()
                .push((tag.to_string(), items.len()));
            match self.status {
                None => Ok(UploadReceipt::default()),
                Some(status) => Err(SubmitError::Rejected {
                    status,
                    message: (status == 413).then(|| "Files too large".to_string()),
                }),
            }
        }
    }

    fn validator() -> IntakeValidator<NoProbe> {
        IntakeValidator::new(IntakeRules::default(), NoProbe)
    }

    fn three_images() -> Result<Vec<RawMediaAsset>, PickError> {
        Ok((0..3)
            .map(|i| RawMediaAsset::new(format!("/p/{i}.png")).with_file_size(100))
            .collect())
    }

    #[tokio::test]
    async fn test_pick_merges_and_reports() {
        fn batch() -> Result<Vec<RawMediaAsset>, PickError> {
            Ok(vec![
                RawMediaAsset::new("a.png"),
                RawMediaAsset::new("b.mp4")
                    .with_kind(AssetKind::Video)
                    .with_duration(70_000.0),
            ])
        }
        let mut session = UploadSession::new();
        let outcome = session
            .pick(&FixedPicker(batch), &validator())
            .await
            .unwrap();

        assert_eq!(outcome.report.accepted.len(), 1);
        assert_eq!(outcome.dropped, 0);
        assert_eq!(session.selection.len(), 1);

        let notices = session.drain_notices();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].text().contains("b.mp4: too long (70s)"));
        assert!(session.drain_notices().is_empty());
    }

    #[tokio::test]
    async fn test_pick_respects_cap() {
        let mut session = UploadSession::new();
        let picker = FixedPicker(three_images);
        session.pick(&picker, &validator()).await.unwrap();
        let outcome = session.pick(&picker, &validator()).await.unwrap();
        assert_eq!(outcome.dropped, 1);
        assert_eq!(session.selection.len(), MAX_SELECTION);
        assert!(session.drain_notices().is_empty());
    }

    #[tokio::test]
    async fn test_permission_denied_leaves_state() {
        fn denied() -> Result<Vec<RawMediaAsset>, PickError> {
            Err(PickError::PermissionDenied("/photos".to_string()))
        }
        let mut session = UploadSession::new();
        assert!(session.pick(&FixedPicker(denied), &validator()).await.is_none());
        assert!(session.selection.is_empty());
        assert_eq!(
            session.drain_notices(),
            vec![Notice::Error("Permission to access gallery is required.".to_string())]
        );
    }

    #[tokio::test]
    async fn test_cancelled_pick_is_silent() {
        fn cancelled() -> Result<Vec<RawMediaAsset>, PickError> {
            Err(PickError::Cancelled)
        }
        let mut session = UploadSession::new();
        assert!(session.pick(&FixedPicker(cancelled), &validator()).await.is_none());
        assert!(session.drain_notices().is_empty());
    }

    #[tokio::test]
    async fn test_submit_requires_selection_and_tag() {
        let api = FakeApi::answering(None);
        let mut session = UploadSession::new();
        session.set_tag("category1");
        assert!(!session.submit(&api).await);
        assert!(api.uploads.borrow().is_empty());
        assert_eq!(
            session.drain_notices()[0].text(),
            "Please select media and pick a tag."
        );

        session.pick(&FixedPicker(three_images), &validator()).await;
        session.set_tag("   ");
        assert!(!session.can_submit());
        assert!(!session.submit(&api).await);
        assert!(api.uploads.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_submit_success_clears() {
        let api = FakeApi::answering(None);
        let mut session = UploadSession::new();
        session.pick(&FixedPicker(three_images), &validator()).await;
        session.set_tag("category4");
        assert!(session.remove(0));

        assert!(session.submit(&api).await);
        assert_eq!(api.uploads.borrow().as_slice(), &[("category4".to_string(), 2)]);
        assert!(session.selection.is_empty());
        assert!(session.tag.is_none());
        assert_eq!(
            session.drain_notices(),
            vec![Notice::Info("Media sent for review successfully.".to_string())]
        );
    }

    #[tokio::test]
    async fn test_submit_failure_preserves_selection() {
        let mut session = UploadSession::new();
        session.pick(&FixedPicker(three_images), &validator()).await;
        session.set_tag("category2");

        assert!(!session.submit(&FakeApi::answering(Some(413))).await);
        assert!(!session.submit(&FakeApi::answering(Some(500))).await);
        assert_eq!(session.selection.len(), 3);
        assert!(session.tag.is_some());

        let texts: Vec<_> = session
            .drain_notices()
            .iter()
            .map(|n| n.text().to_string())
            .collect();
        assert_eq!(texts, vec!["Files too large", "Upload failed."]);
    }
}
