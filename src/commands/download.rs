//! Download command implementation
//!
//! Ensures the output directory, builds the downloader options and runs one
//! download through a scoped session.

use crate::domain::DownloadRequest;
use crate::error::{AppError, Result};
use crate::extractor::{DownloadOptions, Extractor, Session};

use std::fs;
use std::path::Path;

/// Execute a download request against an extractor
///
/// Returns the options the extractor was opened with.
pub fn run_download<E: Extractor>(
    request: &DownloadRequest,
    extractor: &E,
) -> Result<DownloadOptions> {
    ensure_output_dir(request.output_dir())?;

    let options = DownloadOptions::from_request(request);
    log::debug!("Download options: {:?}", options);

    // The session is released when it goes out of scope, on every path.
    let mut session = extractor.open(&options)?;
    log::info!("Downloading {}", request);
    session.download(request.url())?;

    Ok(options)
}

/// Build the options for a request without touching the filesystem
pub fn plan_download(request: &DownloadRequest) -> DownloadOptions {
    DownloadOptions::from_request(request)
}

/// Create the output directory and any missing parents
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|source| AppError::OutputDir {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Output directory ready: {}", path.display());
    Ok(())
}
