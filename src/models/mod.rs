//! Data models for Lookbook

mod asset;
mod item;
mod remote;
mod tag;

pub use asset::{AssetKind, RawMediaAsset};
pub use item::{RejectionRecord, ValidatedMediaItem};
pub use remote::{FeedResponse, RemoteMedia};
pub use tag::{Tag, TAG_CHOICES};
