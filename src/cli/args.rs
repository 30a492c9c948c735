//! CLI argument definitions using clap derive

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use std::path::PathBuf;

/// Download a video, or just its audio, with yt-dlp
#[derive(Parser, Debug)]
#[command(name = "ytgrab")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Video URL to download
    #[arg(required_unless_present = "completions")]
    pub url: Option<String>,

    /// Directory for downloaded files [default: downloads]
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Extract audio only (MP3, 192 kbps)
    #[arg(long)]
    pub audio_only: bool,

    /// yt-dlp format selector [default: bestvideo+bestaudio/best]
    #[arg(long, value_name = "SELECTOR")]
    pub format: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file
    #[arg(short, long, env = "YTGRAB_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// yt-dlp executable to run [default: yt-dlp]
    #[arg(long, env = "YTGRAB_YTDLP", value_name = "PATH")]
    pub ytdlp: Option<PathBuf>,

    /// Print the yt-dlp options as JSON without downloading
    #[arg(long)]
    pub dry_run: bool,

    /// Generate shell completions and exit
    #[arg(
        long,
        value_enum,
        value_name = "SHELL",
        conflicts_with_all = ["output_dir", "audio_only", "format", "dry_run"]
    )]
    pub completions: Option<Shell>,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_parse_url_only() {
        let args = Cli::try_parse_from(["ytgrab", "https://example.com/v"]).unwrap();
        assert_eq!(args.url.as_deref(), Some("https://example.com/v"));
        assert!(args.output_dir.is_none());
        assert!(args.format.is_none());
        assert!(!args.audio_only);
        assert!(!args.dry_run);
    }

    #[test]
    fn test_cli_parse_all_flags() {
        let args = Cli::try_parse_from([
            "ytgrab",
            "https://example.com/v",
            "-o",
            "custom/path",
            "--audio-only",
            "--format",
            "worst",
            "--dry-run",
            "-v",
        ])
        .unwrap();

        assert_eq!(args.output_dir, Some(PathBuf::from("custom/path")));
        assert!(args.audio_only);
        assert_eq!(args.format.as_deref(), Some("worst"));
        assert!(args.dry_run);
        assert!(args.verbose);
    }

    #[test]
    fn test_cli_long_output_dir() {
        let args = Cli::try_parse_from(["ytgrab", "--output-dir", "media", "u"]).unwrap();
        assert_eq!(args.output_dir, Some(PathBuf::from("media")));
    }

    #[test]
    fn test_cli_missing_url() {
        let err = Cli::try_parse_from(["ytgrab"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_cli_unknown_flag() {
        let err = Cli::try_parse_from(["ytgrab", "u", "--bogus"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn test_cli_completions_without_url() {
        let args = Cli::try_parse_from(["ytgrab", "--completions", "bash"]).unwrap();
        assert!(matches!(args.completions, Some(Shell::Bash)));
        assert!(args.url.is_none());
    }

    #[test]
    fn test_cli_completions_conflict_with_download_flags() {
        let err = Cli::try_parse_from(["ytgrab", "--completions", "bash", "--dry-run"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }
}
