//! ytgrab - download a video or its audio track through yt-dlp

use clap::Parser;
use ytgrab::cli::args::{generate_completions, Cli};
use ytgrab::cli::output::{print_options, report};
use ytgrab::commands::{plan_download, run_download, Outcome};
use ytgrab::config::ConfigBuilder;
use ytgrab::extractor::YtDlp;
use ytgrab::Result;

fn main() {
    // Parse CLI arguments; clap exits with status 2 on bad usage
    let cli = Cli::parse();

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    if let Some(shell) = cli.completions {
        generate_completions(shell);
        return;
    }

    let result = run(&cli);
    if let Err(e) = &result {
        log::debug!("{:?}", e);
    }

    let code = report(
        &result,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    );
    std::process::exit(code);
}

fn run(cli: &Cli) -> Result<Outcome> {
    let config = ConfigBuilder::new()
        .with_file(cli.config.as_deref())?
        .with_output_dir(cli.output_dir.clone())
        .with_format(cli.format.clone())
        .with_ytdlp(cli.ytdlp.clone())
        .build();

    let url = cli.url.as_deref().unwrap_or_default();
    let request = config.to_request(url, cli.audio_only)?;

    if cli.dry_run {
        print_options(&plan_download(&request))?;
        return Ok(Outcome::Planned);
    }

    let extractor = YtDlp::new(config.download.ytdlp);
    run_download(&request, &extractor)?;

    Ok(Outcome::Downloaded)
}
