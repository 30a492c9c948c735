//! Downloader options
//!
//! The option mapping handed to the downloader. Field names serialize to the
//! downloader's own option keys so `--dry-run` output can be read against its
//! documentation.

use crate::domain::DownloadRequest;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Output file name template, relative to the output directory
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Selector used when only audio is requested
pub const AUDIO_FORMAT: &str = "bestaudio/best";

/// Post-processor key for audio extraction
pub const EXTRACT_AUDIO_KEY: &str = "FFmpegExtractAudio";

/// Target codec for extracted audio
pub const AUDIO_CODEC: &str = "mp3";

/// Target quality for extracted audio, in kbps
pub const AUDIO_QUALITY: &str = "192";

/// A post-processing step run by the downloader after retrieval
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostProcessor {
    pub key: String,
    #[serde(rename = "preferredcodec")]
    pub preferred_codec: String,
    #[serde(rename = "preferredquality")]
    pub preferred_quality: String,
}

impl PostProcessor {
    /// Audio extraction to MP3 at 192 kbps
    pub fn extract_audio() -> Self {
        Self {
            key: EXTRACT_AUDIO_KEY.to_string(),
            preferred_codec: AUDIO_CODEC.to_string(),
            preferred_quality: AUDIO_QUALITY.to_string(),
        }
    }

    /// Check if this step extracts audio
    pub fn is_extract_audio(&self) -> bool {
        self.key == EXTRACT_AUDIO_KEY
    }
}

/// Options passed to the downloader for one request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadOptions {
    /// Output path template rooted at the output directory
    #[serde(rename = "outtmpl")]
    pub output_template: PathBuf,
    /// Format selector
    pub format: String,
    /// Download only the referenced item when the URL points into a playlist
    #[serde(rename = "noplaylist")]
    pub no_playlist: bool,
    /// Post-processing steps, in order
    #[serde(rename = "postprocessors", default, skip_serializing_if = "Vec::is_empty")]
    pub post_processors: Vec<PostProcessor>,
}

impl DownloadOptions {
    /// Build the options for a request
    pub fn from_request(request: &DownloadRequest) -> Self {
        let mut options = Self {
            output_template: output_template(request.output_dir()),
            format: request.format_selector().to_string(),
            no_playlist: true,
            post_processors: Vec::new(),
        };

        if request.audio_only() {
            options.format = AUDIO_FORMAT.to_string();
            options.post_processors.push(PostProcessor::extract_audio());
        }

        options
    }
}

/// Output template for files written under `dir`
pub fn output_template(dir: &Path) -> PathBuf {
    dir.join(OUTPUT_TEMPLATE)
}
