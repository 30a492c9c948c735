//! Mock implementations for testing
//!
//! Provides a recording extractor so the download flow can be tested without
//! the real downloader installed.

use crate::error::DownloadError;
use crate::extractor::{DownloadOptions, Extractor, Session};

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;

/// What the mock saw during a run
#[derive(Debug, Default)]
pub struct MockLog {
    /// Options each session was opened with
    pub opened: Vec<DownloadOptions>,
    /// URLs passed to `download`
    pub downloaded: Vec<String>,
    /// Number of sessions dropped
    pub released: usize,
    /// Whether the output directory existed when the session was opened
    pub dir_existed_on_open: Option<bool>,
}

/// Mock extractor for testing
#[derive(Debug, Clone, Default)]
pub struct MockExtractor {
    log: Rc<RefCell<MockLog>>,
    fail_open: Option<String>,
    fail_download: Option<String>,
    watch_dir: Option<PathBuf>,
}

impl MockExtractor {
    /// Create a mock that succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: fail when opening a session
    pub fn failing_open(mut self, message: impl Into<String>) -> Self {
        self.fail_open = Some(message.into());
        self
    }

    /// Builder: fail the download call
    pub fn failing_download(mut self, message: impl Into<String>) -> Self {
        self.fail_download = Some(message.into());
        self
    }

    /// Builder: record whether `dir` exists when a session is opened
    pub fn watching_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.watch_dir = Some(dir.into());
        self
    }

    /// Shared view of what the mock saw
    pub fn log(&self) -> std::cell::Ref<'_, MockLog> {
        self.log.borrow()
    }
}

impl Extractor for MockExtractor {
    type Session = MockSession;

    fn open(&self, options: &DownloadOptions) -> Result<Self::Session, DownloadError> {
        let mut log = self.log.borrow_mut();
        log.opened.push(options.clone());
        if let Some(dir) = &self.watch_dir {
            log.dir_existed_on_open = Some(dir.is_dir());
        }

        if let Some(message) = &self.fail_open {
            return Err(DownloadError::Failed(message.clone()));
        }

        Ok(MockSession {
            log: Rc::clone(&self.log),
            fail_download: self.fail_download.clone(),
        })
    }
}

/// Mock session for testing
#[derive(Debug)]
pub struct MockSession {
    log: Rc<RefCell<MockLog>>,
    fail_download: Option<String>,
}

impl Session for MockSession {
    fn download(&mut self, url: &str) -> Result<(), DownloadError> {
        self.log.borrow_mut().downloaded.push(url.to_string());
        match &self.fail_download {
            Some(message) => Err(DownloadError::Failed(message.clone())),
            None => Ok(()),
        }
    }
}

impl Drop for MockSession {
    fn drop(&mut self) {
        self.log.borrow_mut().released += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DownloadRequest, DEFAULT_FORMAT};

    fn options() -> DownloadOptions {
        let request = DownloadRequest::new("u", "d", false, DEFAULT_FORMAT).unwrap();
        DownloadOptions::from_request(&request)
    }

    #[test]
    fn test_mock_records_and_releases() {
        let mock = MockExtractor::new();
        {
            let mut session = mock.open(&options()).unwrap();
            session.download("u").unwrap();
        }
        let log = mock.log();
        assert_eq!(log.opened.len(), 1);
        assert_eq!(log.downloaded, vec!["u".to_string()]);
        assert_eq!(log.released, 1);
    }

    #[test]
    fn test_mock_download_failure() {
        let mock = MockExtractor::new().failing_download("boom");
        let mut session = mock.open(&options()).unwrap();
        assert_eq!(session.download("u").unwrap_err().to_string(), "boom");
    }
}
