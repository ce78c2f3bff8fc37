//! # Lookbook
//!
//! A terminal client for browsing and uploading tagged style media.
//!
//! ## Overview
//!
//! Lookbook talks to a media service that files images and short videos
//! under tags. You can browse a tag's feed, like and share items, and pick
//! local files for upload. Picked files are checked on the client before
//! anything is sent: videos longer than the duration ceiling and files
//! larger than the size ceiling are rejected with a readable report.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                           App                               │
//! │        Upload session and tag feed, owned by the caller     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!          ┌───────────────────┼───────────────────┐
//!          ▼                   ▼                   ▼
//! ┌─────────────────┐ ┌─────────────────┐ ┌─────────────────┐
//! │     Intake      │ │       API       │ │   Preferences   │
//! │                 │ │                 │ │                 │
//! │ • Pickers       │ │ • Feed          │ │ • Policy seen   │
//! │ • Validation    │ │ • Upload        │ │ • Likes         │
//! │ • Selection     │ │                 │ │ • Review/share  │
//! └─────────────────┘ └─────────────────┘ └─────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`api`] — Media service client
//! - [`app`] — Upload session and feed state
//! - [`config`] — Configuration management
//! - [`db`] — `SQLite` key-value store for preference flags
//! - [`intake`] — Client-side media validation
//! - [`models`] — Data models (assets, validated items, remote media)
//! - [`policy`] — Content policy gate
//!
//! ## Example
//!
//! ```no_run
//! use lookbook::intake::{IntakeRules, IntakeValidator, NoProbe};
//! use lookbook::models::RawMediaAsset;
//!
//! # async fn demo() {
//! let validator = IntakeValidator::new(IntakeRules::default(), NoProbe);
//! let report = validator
//!     .validate(&[RawMediaAsset::new("/photos/look.png")])
//!     .await;
//! assert_eq!(report.accepted[0].mime, "image/png");
//! # }
//! ```

#![doc(html_root_url = "https://docs.rs/lookbook/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::unused_async)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::if_not_else)]
#![allow(clippy::single_match_else)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::use_self)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::should_implement_trait)]
#![allow(clippy::future_not_send)]
#![allow(clippy::return_self_not_must_use)]

pub mod api;
pub mod app;
pub mod config;
pub mod db;
pub mod error;
pub mod intake;
pub mod models;
pub mod paths;
pub mod policy;
pub mod prefs;
pub mod review;
pub mod share;

#[cfg(test)]
mod test_support;

// Re-export main types for convenience
pub use app::{Feed, Notice, UploadSession};
pub use config::Config;
pub use db::Database;
pub use error::{PickError, PolicyError, SubmitError};
pub use intake::{IntakeReport, IntakeRules, IntakeValidator, Selection};
pub use models::{RawMediaAsset, RejectionRecord, RemoteMedia, Tag, ValidatedMediaItem};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
