//! Screen flows: the upload session and the tag feed.
//!
//! Each flow owns its state explicitly; callers keep the struct and pass the
//! collaborators (picker, validator, service) in per call.

pub mod feed;
pub mod upload;

pub use feed::{Feed, FeedEntry};
pub use upload::{IntakeOutcome, UploadSession};

/// Transient message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Informational or success message
    Info(String),
    /// Something did not work
    Error(String),
}

impl Notice {
    /// Message text
    pub fn text(&self) -> &str {
        match self {
            Self::Info(text) | Self::Error(text) => text,
        }
    }

    /// Whether this reports a failure
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.text())
    }
}
