//! Best-effort size determination for assets without a known size.

use anyhow::{Context, Result, bail};
use std::time::Duration;

/// Something that can measure the byte size behind a locator
#[allow(async_fn_in_trait)]
pub trait SizeProbe {
    /// Return the size in bytes, or an error when it cannot be determined
    async fn probe(&self, uri: &str) -> Result<u64>;
}

/// Probe that never determines a size
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProbe;

impl SizeProbe for NoProbe {
    async fn probe(&self, uri: &str) -> Result<u64> {
        bail!("size probing disabled for {uri}")
    }
}

/// Default probe: file metadata for local locators, a download for remote ones
#[derive(Debug, Clone)]
pub struct DefaultProbe {
    client: reqwest::Client,
}

impl Default for DefaultProbe {
    fn default() -> Self {
        Self::new(Duration::from_secs(30))
    }
}

impl DefaultProbe {
    /// Create a probe whose remote fetches give up after `timeout`
    pub fn new(timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    async fn probe_local(path: &str) -> Result<u64> {
        let meta = tokio::fs::metadata(path)
            .await
            .with_context(|| format!("Failed to stat {path}"))?;
        Ok(meta.len())
    }

    async fn probe_remote(&self, url: &str) -> Result<u64> {
        let mut response = self
            .client
            .get(url)
            .send()
            .await
            .context("Failed to fetch media")?;

        if !response.status().is_success() {
            bail!("HTTP {}", response.status());
        }

        // Length of the retrieved payload, not the advertised header.
        // Chunks are counted and dropped so large videos are never buffered.
        let mut total: u64 = 0;
        while let Some(chunk) = response.chunk().await.context("Failed to read media body")? {
            total += chunk.len() as u64;
        }
        Ok(total)
    }
}

impl SizeProbe for DefaultProbe {
    async fn probe(&self, uri: &str) -> Result<u64> {
        if let Some(path) = uri.strip_prefix("file://") {
            Self::probe_local(path).await
        } else if uri.starts_with('/') {
            Self::probe_local(uri).await
        } else if uri.starts_with("http://") || uri.starts_with("https://") {
            self.probe_remote(uri).await
        } else {
            bail!("unsupported locator: {uri}")
        }
    }
}
