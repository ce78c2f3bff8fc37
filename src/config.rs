//! Configuration module for Lookbook

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::path::PathBuf;

use crate::intake::IntakeRules;
use crate::paths;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the media service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Longest accepted video, in seconds
    #[serde(default = "default_max_video_duration")]
    pub max_video_duration_secs: f64,

    /// Largest accepted file, in bytes
    #[serde(default = "default_max_file_size")]
    pub max_file_size_bytes: u64,

    /// Accept items whose size cannot be determined
    #[serde(default = "default_fail_open")]
    pub fail_open_on_unknown_size: bool,

    /// Timeout for size probes and service requests, in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Store page opened by the review prompt
    #[serde(default)]
    pub app_store_url: Option<String>,

    /// Link included in referral messages
    #[serde(default = "default_app_link")]
    pub app_link: String,

    /// Skip the content policy once it has been accepted with "don't show again"
    #[serde(default = "default_auto_skip_policy")]
    pub auto_skip_policy: bool,
}

fn default_base_url() -> String {
    "https://ankara.prospercode.xyz".to_string()
}

fn default_max_video_duration() -> f64 {
    60.0
}

fn default_max_file_size() -> u64 {
    50 * 1024 * 1024
}

fn default_fail_open() -> bool {
    true
}

fn default_timeout() -> u64 {
    30
}

fn default_app_link() -> String {
    "https://apps.apple.com/app/lookbook".to_string()
}

fn default_auto_skip_policy() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            max_video_duration_secs: default_max_video_duration(),
            max_file_size_bytes: default_max_file_size(),
            fail_open_on_unknown_size: default_fail_open(),
            timeout_secs: default_timeout(),
            app_store_url: None,
            app_link: default_app_link(),
            auto_skip_policy: default_auto_skip_policy(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        paths::config_path()
    }

    /// Load config from the default path or create default
    pub fn load() -> Result<Self> {
        let path = Self::default_path()?;
        Self::load_from(&path)
    }

    /// Load config from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path).context("Failed to read config file")?;
            toml::from_str(&content).context("Failed to parse config file")
        } else {
            Ok(Self::default())
        }
    }

    /// Save config to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;

        Ok(())
    }

    /// Validation ceilings derived from this config
    pub const fn intake_rules(&self) -> IntakeRules {
        IntakeRules {
            max_video_duration_secs: self.max_video_duration_secs,
            max_file_size_bytes: self.max_file_size_bytes,
            fail_open_on_unknown_size: self.fail_open_on_unknown_size,
        }
    }

    /// Request timeout as a `Duration`
    pub const fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}
