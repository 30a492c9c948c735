//! Download request domain type
//!
//! One request is built per invocation and never changes afterwards.

use crate::error::DomainError;
use std::fmt;
use std::path::{Path, PathBuf};

/// Default directory downloads are written to
pub const DEFAULT_OUTPUT_DIR: &str = "downloads";

/// Default format selector: best video and audio merged, else best single file
pub const DEFAULT_FORMAT: &str = "bestvideo+bestaudio/best";

/// A single validated download request
///
/// Fields are private so the request stays immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    url: String,
    output_dir: PathBuf,
    audio_only: bool,
    format_selector: String,
}

impl DownloadRequest {
    /// Create a new request
    ///
    /// # Errors
    /// Returns `DomainError::EmptyUrl` if the URL is empty or whitespace.
    pub fn new(
        url: impl Into<String>,
        output_dir: impl Into<PathBuf>,
        audio_only: bool,
        format_selector: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(DomainError::EmptyUrl);
        }

        Ok(Self {
            url,
            output_dir: output_dir.into(),
            audio_only,
            format_selector: format_selector.into(),
        })
    }

    /// The source media locator
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Directory the media is written to
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Whether only the audio track is wanted
    pub fn audio_only(&self) -> bool {
        self.audio_only
    }

    /// Format selector as given by the user
    ///
    /// Ignored by the downloader when `audio_only` is set.
    pub fn format_selector(&self) -> &str {
        &self.format_selector
    }
}

impl fmt::Display for DownloadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {}{}",
            self.url,
            self.output_dir.display(),
            if self.audio_only { " (audio only)" } else { "" }
        )
    }
}
