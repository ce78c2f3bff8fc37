//! Error types the caller needs to branch on
//!
//! Glue code uses `anyhow`; these enums cover the failures that end up as
//! distinct user notices.

use thiserror::Error;

/// Failure to obtain a batch from a picker
#[derive(Debug, Error)]
pub enum PickError {
    /// Access to the media library was refused
    #[error("permission denied for {0}")]
    PermissionDenied(String),
    /// A selected path does not exist
    #[error("no such file: {0}")]
    NotFound(String),
    /// Nothing was picked
    #[error("selection cancelled")]
    Cancelled,
    /// The picker itself failed
    #[error("picker failed: {0}")]
    Other(#[from] anyhow::Error),
}

/// Failure to submit a selection to the media service
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The service answered with a non-success status
    #[error("upload rejected with status {status}")]
    Rejected {
        /// HTTP status code
        status: u16,
        /// `message` field of the JSON body, if any
        message: Option<String>,
    },
    /// The file behind a selected item could not be read
    #[error("could not read {uri}: {source}")]
    Unreadable {
        /// Item locator
        uri: String,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// A remote item answered with a non-success status when fetched
    #[error("could not fetch {uri}: status {status}")]
    Unfetchable {
        /// Item locator
        uri: String,
        /// HTTP status code
        status: u16,
    },
    /// The item's locator is neither a file nor an http(s) URL
    #[error("cannot upload from {0}")]
    UnsupportedLocator(String),
    /// The service was unreachable or the request failed in flight
    #[error("upload request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl SubmitError {
    /// Message to show the user
    pub fn notice(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            Self::Rejected { .. } => "Upload failed.".to_string(),
            Self::UnsupportedLocator(uri) => {
                format!("Could not upload {uri}: only files and web links can be sent.")
            }
            Self::Unreadable { .. } | Self::Unfetchable { .. } | Self::Transport(_) => {
                "An error occurred while uploading.".to_string()
            }
        }
    }
}

/// Failure to get past the content policy
#[derive(Debug, Error)]
pub enum PolicyError {
    /// The user did not tick the agreement box
    #[error("Please check \"I agree to follow the upload rules\" before continuing.")]
    AgreementRequired,
    /// The seen flag could not be stored
    #[error("could not store policy flag: {0}")]
    Store(#[from] anyhow::Error),
}
