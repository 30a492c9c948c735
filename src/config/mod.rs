//! Configuration system
//!
//! Handles TOML config file parsing and CLI argument merging.

pub mod builder;
pub mod file;

pub use builder::ConfigBuilder;
pub use file::ConfigFile;

use crate::domain::{DownloadRequest, DEFAULT_FORMAT, DEFAULT_OUTPUT_DIR};
use crate::extractor::ytdlp::DEFAULT_PROGRAM;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Download defaults
    pub download: DownloadConfig,
}

/// Download defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    /// Directory downloads are written to
    pub output_dir: PathBuf,
    /// Format selector for video downloads
    pub format: String,
    /// yt-dlp executable
    pub ytdlp: PathBuf,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            format: DEFAULT_FORMAT.to_string(),
            ytdlp: PathBuf::from(DEFAULT_PROGRAM),
        }
    }
}

impl Config {
    /// Build the download request for a URL from the merged settings
    pub fn to_request(
        &self,
        url: &str,
        audio_only: bool,
    ) -> Result<DownloadRequest, crate::error::DomainError> {
        DownloadRequest::new(
            url,
            self.download.output_dir.clone(),
            audio_only,
            self.download.format.clone(),
        )
    }
}

impl DownloadConfig {
    /// Replace a leading `~` in the output directory with the home directory
    pub fn expand_home(&mut self) {
        let Some(dir) = self.output_dir.to_str() else {
            return;
        };
        if !dir.starts_with('~') {
            return;
        }
        let Some(home) = dirs::home_dir() else {
            log::warn!("Could not locate the home directory to expand {}", dir);
            return;
        };

        if dir == "~" {
            self.output_dir = home;
        } else if let Some(rest) = dir.strip_prefix("~/") {
            self.output_dir = home.join(rest);
        }
        // `~user/` is left as is.
    }
}
