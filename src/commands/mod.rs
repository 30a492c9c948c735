//! Command handlers
//!
//! Each command handler orchestrates the execution of a CLI command.

pub mod download;

pub use download::{ensure_output_dir, plan_download, run_download};

/// How a successful run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The downloader finished the download
    Downloaded,
    /// Options were printed, nothing was downloaded
    Planned,
}
