//! Unified error types for ytgrab
//!
//! This module defines all error types used throughout the application.
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from the external downloader
    #[error("{0}")]
    Download(#[from] DownloadError),

    /// Error from configuration parsing/validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Error from request validation
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// The output directory could not be created
    #[error("Could not create output directory {}: {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization error (options preview)
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error (console output)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors reported by the external downloader
#[derive(Error, Debug)]
pub enum DownloadError {
    /// The downloader executable could not be located
    #[error("{0} not found. Is yt-dlp installed and on PATH?")]
    ProgramNotFound(String),

    /// The downloader process could not be started
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The downloader ran and reported a failure
    #[error("{0}")]
    Failed(String),

    /// The downloader was killed before it finished
    #[error("{0} was terminated by a signal")]
    Terminated(String),

    /// IO error while talking to the downloader
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors from request validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The URL argument was empty
    #[error("URL must not be empty")]
    EmptyUrl,
}

/// Errors from configuration parsing and validation
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;
