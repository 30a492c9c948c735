//! Domain models for ytgrab
//!
//! Types are validated on construction (fail-fast pattern).

pub mod request;

pub use request::{DownloadRequest, DEFAULT_FORMAT, DEFAULT_OUTPUT_DIR};
