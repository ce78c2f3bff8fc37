//! Client-side media intake.
//!
//! A picked batch goes through [`IntakeValidator::validate`], which splits it
//! into accepted [`ValidatedMediaItem`]s and [`RejectionRecord`]s. Accepted
//! items are then merged into a capped [`Selection`].
//!
//! Measurements that cannot be taken never reject an asset on their own:
//! a missing duration is ignored, and a missing size is ignored unless
//! [`IntakeRules::fail_open_on_unknown_size`] is turned off.

pub mod classify;
pub mod duration;
pub mod picker;
pub mod probe;
pub mod selection;

pub use picker::{ManifestPicker, MediaPicker, PathPicker};
pub use probe::{DefaultProbe, NoProbe, SizeProbe};
pub use selection::{MAX_SELECTION, Selection};

use chrono::{DateTime, TimeDelta, Utc};

use crate::models::{RawMediaAsset, RejectionRecord, ValidatedMediaItem};

const MIB: f64 = 1024.0 * 1024.0;

/// Ceilings applied to every asset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntakeRules {
    /// Longest accepted video, in seconds
    pub max_video_duration_secs: f64,
    /// Largest accepted file, in bytes
    pub max_file_size_bytes: u64,
    /// Accept assets whose size cannot be determined
    pub fail_open_on_unknown_size: bool,
}

impl Default for IntakeRules {
    fn default() -> Self {
        Self {
            max_video_duration_secs: 60.0,
            max_file_size_bytes: 50 * 1024 * 1024,
            fail_open_on_unknown_size: true,
        }
    }
}

impl IntakeRules {
    /// Trailing line of the rejection report
    pub fn summary(&self) -> String {
        format!(
            "Videos must be ≤ {}s and ≤ {} MB.",
            self.max_video_duration_secs.round(),
            (self.max_file_size_bytes as f64 / MIB).round()
        )
    }
}

/// Result of validating one batch
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntakeReport {
    /// Items that passed every check, in input order
    pub accepted: Vec<ValidatedMediaItem>,
    /// Items that did not, in input order
    pub rejected: Vec<RejectionRecord>,
}

impl IntakeReport {
    /// Combined message for the user, or `None` when nothing was rejected
    pub fn rejection_message(&self, rules: &IntakeRules) -> Option<String> {
        if self.rejected.is_empty() {
            return None;
        }
        let lines = self
            .rejected
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n");
        Some(format!(
            "Some items were not added:\n\n{lines}\n\n{}",
            rules.summary()
        ))
    }
}

/// Outcome of checking a single asset
enum Verdict {
    Accept(ValidatedMediaItem),
    Reject(RejectionRecord),
}

/// Applies [`IntakeRules`] to picked batches
pub struct IntakeValidator<P> {
    rules: IntakeRules,
    probe: P,
}

impl<P: SizeProbe> IntakeValidator<P> {
    /// Create a validator with the given rules and size probe
    pub const fn new(rules: IntakeRules, probe: P) -> Self {
        Self { rules, probe }
    }

    /// Rules in effect
    pub const fn rules(&self) -> &IntakeRules {
        &self.rules
    }

    /// Validate a batch, naming unnamed items after the current time
    pub async fn validate(&self, batch: &[RawMediaAsset]) -> IntakeReport {
        self.validate_at(batch, Utc::now()).await
    }

    /// Validate a batch with an explicit clock for generated names
    pub async fn validate_at(&self, batch: &[RawMediaAsset], now: DateTime<Utc>) -> IntakeReport {
        let mut report = IntakeReport::default();

        // Sequential so the report keeps input order. Each position gets its
        // own millisecond so generated names stay distinct within a batch.
        for (offset, asset) in (0_i64..).zip(batch) {
            let stamp = now + TimeDelta::milliseconds(offset);
            match self.check(asset, stamp).await {
                Verdict::Accept(item) => report.accepted.push(item),
                Verdict::Reject(record) => report.rejected.push(record),
            }
        }

        tracing::debug!(
            accepted = report.accepted.len(),
            rejected = report.rejected.len(),
            "Validated intake batch"
        );
        report
    }

    async fn check(&self, asset: &RawMediaAsset, now: DateTime<Utc>) -> Verdict {
        let ext = classify::extension(asset);
        let is_video = classify::is_video(asset, &ext);
        let label = classify::label(asset, is_video);

        if is_video {
            if let Some(secs) = asset
                .duration
                .filter(|d| d.is_finite())
                .map(duration::normalize_secs)
            {
                if secs > self.rules.max_video_duration_secs {
                    tracing::debug!("Rejecting {label}: {secs}s");
                    return Verdict::Reject(RejectionRecord::new(
                        label,
                        format!("too long ({}s)", secs.round()),
                    ));
                }
            }
        }

        let size = self.resolve_size(asset).await;
        match size {
            Some(bytes) if bytes > self.rules.max_file_size_bytes => {
                tracing::debug!("Rejecting {label}: {bytes} bytes");
                return Verdict::Reject(RejectionRecord::new(
                    label,
                    format!("too big ({:.1} MB)", bytes as f64 / MIB),
                ));
            }
            None if !self.rules.fail_open_on_unknown_size => {
                return Verdict::Reject(RejectionRecord::new(label, "size unknown"));
            }
            _ => {}
        }

        Verdict::Accept(ValidatedMediaItem {
            uri: classify::normalize_uri(&asset.uri),
            is_video,
            file_name: classify::file_name(asset, &ext, is_video, now),
            mime: classify::mime(&ext, is_video).to_string(),
            duration: asset.duration,
            size,
        })
    }

    async fn resolve_size(&self, asset: &RawMediaAsset) -> Option<u64> {
        if let Some(size) = asset.file_size.filter(|s| *s > 0) {
            return Some(size);
        }
        match self.probe.probe(&asset.uri).await {
            Ok(size) => Some(size),
            Err(e) => {
                tracing::warn!("Could not determine file size for {}: {e:#}", asset.uri);
                None
            }
        }
    }
}
