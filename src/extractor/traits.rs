//! Trait definitions for the downloader seam
//!
//! These traits abstract over the external downloader to enable testing with mocks.

use crate::error::DownloadError;
use crate::extractor::options::DownloadOptions;

/// A configured downloader session
///
/// Sessions are scoped: dropping one releases whatever it holds, whether the
/// download succeeded, failed, or was never attempted.
pub trait Session {
    /// Download a single URL, running any configured post-processing
    fn download(&mut self, url: &str) -> Result<(), DownloadError>;
}

/// Trait for opening downloader sessions
pub trait Extractor {
    /// The session type returned by this extractor
    type Session: Session;

    /// Open a session configured with `options`
    fn open(&self, options: &DownloadOptions) -> Result<Self::Session, DownloadError>;
}
