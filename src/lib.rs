//! ytgrab - download a video or its audio track through yt-dlp
//!
//! The library turns command-line arguments into a validated download
//! request, maps it onto yt-dlp options and runs exactly one download.
//!
//! # Modules
//!
//! - [`cli`]: Command-line interface definitions and console output
//! - [`commands`]: Command handlers
//! - [`config`]: Configuration system
//! - [`domain`]: Domain models with validation
//! - [`error`]: Error types
//! - [`extractor`]: Downloader abstraction layer

pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod extractor;

#[cfg(test)]
pub mod mock;

pub use error::{AppError, Result};
