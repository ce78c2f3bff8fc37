//! Sources of raw intake batches

use anyhow::Context;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::PickError;
use crate::models::RawMediaAsset;

/// Produces a batch of raw assets from the user's media
#[allow(async_fn_in_trait)]
pub trait MediaPicker {
    /// Pick at most `limit` assets
    async fn pick(&self, limit: usize) -> Result<Vec<RawMediaAsset>, PickError>;
}

/// Picks the files named on the command line
#[derive(Debug, Clone)]
pub struct PathPicker {
    paths: Vec<PathBuf>,
}

impl PathPicker {
    /// Create a picker over the given paths
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    async fn asset_for(path: &Path) -> Result<RawMediaAsset, PickError> {
        let display = path.display().to_string();
        let meta = tokio::fs::metadata(path).await.map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => PickError::PermissionDenied(display.clone()),
            ErrorKind::NotFound => PickError::NotFound(display.clone()),
            _ => PickError::Other(anyhow::Error::new(e).context(format!("Failed to stat {display}"))),
        })?;

        let absolute = std::path::absolute(path)
            .with_context(|| format!("Failed to resolve {display}"))?;

        let mut asset = RawMediaAsset::new(absolute.to_string_lossy());
        asset.file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string());
        asset.file_size = Some(meta.len());
        Ok(asset)
    }
}

impl MediaPicker for PathPicker {
    async fn pick(&self, limit: usize) -> Result<Vec<RawMediaAsset>, PickError> {
        if self.paths.is_empty() {
            return Err(PickError::Cancelled);
        }
        if self.paths.len() > limit {
            tracing::info!("Only the first {limit} of {} files are picked", self.paths.len());
        }

        let mut assets = Vec::new();
        for path in self.paths.iter().take(limit) {
            assets.push(Self::asset_for(path).await?);
        }
        Ok(assets)
    }
}

/// Picks the assets listed in a JSON manifest
#[derive(Debug, Clone)]
pub struct ManifestPicker {
    path: PathBuf,
}

impl ManifestPicker {
    /// Create a picker reading `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl MediaPicker for ManifestPicker {
    async fn pick(&self, limit: usize) -> Result<Vec<RawMediaAsset>, PickError> {
        let display = self.path.display().to_string();
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::PermissionDenied => PickError::PermissionDenied(display.clone()),
                ErrorKind::NotFound => PickError::NotFound(display.clone()),
                _ => PickError::Other(anyhow::Error::new(e).context("Failed to read manifest")),
            })?;

        let mut assets: Vec<RawMediaAsset> =
            serde_json::from_str(&content).context("Failed to parse manifest")?;
        if assets.is_empty() {
            return Err(PickError::Cancelled);
        }
        assets.truncate(limit);
        Ok(assets)
    }
}
