//! Console output
//!
//! Success and failure lines, plus the options preview for `--dry-run`.

use crate::commands::Outcome;
use crate::error::{AppError, Result};
use crate::extractor::DownloadOptions;
use std::fmt::Display;
use std::io::{self, Write};

/// Printed to stdout after a successful download
pub const SUCCESS_MESSAGE: &str = "Download completed successfully.";

/// Prefix of the failure line printed to stderr
pub const FAILURE_PREFIX: &str = "Download failed: ";

/// Report the outcome of a run and return the process exit code
///
/// Success writes the completion line to `out`; any error writes the failure
/// line to `err`. A dry run prints nothing here.
pub fn report<O: Write, E: Write>(result: &Result<Outcome>, out: &mut O, err: &mut E) -> i32 {
    let failure = match result {
        Ok(Outcome::Planned) => return 0,
        Ok(Outcome::Downloaded) => match write_success(out) {
            Ok(()) => return 0,
            Err(e) => AppError::from(e),
        },
        Err(e) => {
            // Nothing sensible is left to do if stderr is gone.
            let _ = write_failure(err, e);
            return 1;
        }
    };
    let _ = write_failure(err, &failure);
    1
}

/// Print downloader options as pretty JSON to stdout
pub fn print_options(options: &DownloadOptions) -> Result<()> {
    write_options(&mut io::stdout().lock(), options)
}

fn write_success<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", SUCCESS_MESSAGE)
}

fn write_failure<W: Write>(out: &mut W, err: &impl Display) -> io::Result<()> {
    writeln!(out, "{}{}", FAILURE_PREFIX, err)
}

fn write_options<W: Write>(out: &mut W, options: &DownloadOptions) -> Result<()> {
    let json = serde_json::to_string_pretty(options)?;
    writeln!(out, "{}", json)?;
    Ok(())
}
