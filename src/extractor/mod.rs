//! Downloader abstraction layer
//!
//! Provides trait-based abstractions over the external downloader for testability.

pub mod options;
pub mod traits;
pub mod ytdlp;

pub use options::{DownloadOptions, PostProcessor};
pub use traits::{Extractor, Session};
pub use ytdlp::{YtDlp, YtDlpSession};
