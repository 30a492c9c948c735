//! yt-dlp extractor implementation
//!
//! Drives the `yt-dlp` executable. Each session owns at most one child
//! process, which is killed and reaped if the session is dropped while the
//! process is still running.

use crate::error::DownloadError;
use crate::extractor::options::DownloadOptions;
use crate::extractor::traits::{Extractor, Session};

use std::ffi::OsString;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

/// Default executable name, resolved on `PATH`
pub const DEFAULT_PROGRAM: &str = "yt-dlp";

const ERROR_PREFIX: &str = "ERROR:";
const WARNING_PREFIX: &str = "WARNING:";

/// Extractor backed by the yt-dlp executable
#[derive(Debug, Clone)]
pub struct YtDlp {
    program: PathBuf,
}

impl YtDlp {
    /// Create an extractor for the given executable
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Query the executable's version string
    pub fn version(&self) -> Result<String, DownloadError> {
        let output = Command::new(&self.program)
            .arg("--version")
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .map_err(|e| spawn_error(&self.program, e))?;

        if !output.status.success() {
            return Err(DownloadError::Failed(format!(
                "{} --version exited with {}",
                self.program.display(),
                output.status
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl Default for YtDlp {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM)
    }
}

impl Extractor for YtDlp {
    type Session = YtDlpSession;

    fn open(&self, options: &DownloadOptions) -> Result<Self::Session, DownloadError> {
        let version = self.version()?;
        log::debug!("Using {} {}", self.program.display(), version);

        Ok(YtDlpSession {
            program: self.program.clone(),
            args: build_args(options),
            child: None,
        })
    }
}

/// A yt-dlp session with its arguments resolved
#[derive(Debug)]
pub struct YtDlpSession {
    program: PathBuf,
    args: Vec<OsString>,
    child: Option<Child>,
}

impl YtDlpSession {
    /// Arguments passed before the URL
    pub fn args(&self) -> &[OsString] {
        &self.args
    }
}

impl Session for YtDlpSession {
    fn download(&mut self, url: &str) -> Result<(), DownloadError> {
        let mut command = Command::new(&self.program);
        command
            .args(&self.args)
            .arg("--")
            .arg(url)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::piped());

        log::debug!("Running {:?}", command);

        let child = command
            .spawn()
            .map_err(|e| spawn_error(&self.program, e))?;
        let child = self.child.insert(child);

        let mut errors = match child.stderr.take() {
            Some(stderr) => scan_stderr(BufReader::new(stderr))?,
            None => Vec::new(),
        };

        let status = child.wait()?;
        self.child = None;

        if status.success() {
            for message in &errors {
                log::warn!("{}", message);
            }
            return Ok(());
        }

        let last_error = errors.pop();
        for message in &errors {
            log::warn!("{}", message);
        }

        let name = self.program.display().to_string();
        match (last_error, status.code()) {
            (Some(message), _) => Err(DownloadError::Failed(message)),
            (None, Some(code)) => Err(DownloadError::Failed(format!(
                "{} exited with status {}",
                name, code
            ))),
            (None, None) => Err(DownloadError::Terminated(name)),
        }
    }
}

impl Drop for YtDlpSession {
    fn drop(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Ok(None) = child.try_wait() {
                log::debug!("Stopping unfinished {} process", self.program.display());
                let _ = child.kill();
                let _ = child.wait();
            }
        }
    }
}

/// Translate options into yt-dlp command-line arguments
pub fn build_args(options: &DownloadOptions) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        "-o".into(),
        options.output_template.clone().into_os_string(),
        "-f".into(),
        options.format.clone().into(),
    ];

    if options.no_playlist {
        args.push("--no-playlist".into());
    }

    for step in &options.post_processors {
        if step.is_extract_audio() {
            args.push("--extract-audio".into());
            args.push("--audio-format".into());
            args.push(step.preferred_codec.clone().into());
            args.push("--audio-quality".into());
            args.push(format!("{}K", step.preferred_quality).into());
        } else {
            log::warn!("Ignoring unsupported post-processor {}", step.key);
        }
    }

    args
}

/// Forward yt-dlp diagnostics to the log and collect its error messages in order
fn scan_stderr<R: BufRead>(mut reader: R) -> io::Result<Vec<String>> {
    let mut errors = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end();

        if let Some(message) = line.strip_prefix(ERROR_PREFIX) {
            log::debug!("yt-dlp: {}", line);
            errors.push(message.trim().to_string());
        } else if let Some(message) = line.strip_prefix(WARNING_PREFIX) {
            log::warn!("{}", message.trim());
        } else if !line.is_empty() {
            log::debug!("yt-dlp: {}", line);
        }
    }

    Ok(errors)
}

fn spawn_error(program: &Path, source: io::Error) -> DownloadError {
    if source.kind() == io::ErrorKind::NotFound {
        DownloadError::ProgramNotFound(program.display().to_string())
    } else {
        DownloadError::Spawn {
            program: program.display().to_string(),
            source,
        }
    }
}
