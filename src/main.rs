use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use drafterino::cli::{run_release_workflow, PullRequestAccess};
use drafterino::config::{load_config, ConfigSource};
use drafterino::git::Git2Repository;
use drafterino::github::client::DEFAULT_API_URL;
use drafterino::github::{ContextResolution, GitHubClient, GitHubContext};
use drafterino::output::{GithubOutputFile, OutputSink, StdoutSink};
use drafterino::ui;

#[derive(clap::Parser)]
#[command(
    name = "drafterino",
    version,
    about = "Compute the next release version and draft release notes from labeled pull requests"
)]
struct Args {
    #[arg(short, long, help = "Configuration file (YAML or TOML)")]
    config: Option<PathBuf>,

    #[arg(
        long,
        env = "CONFIG",
        hide_env_values = true,
        help = "Inline YAML configuration, overrides --config"
    )]
    config_yaml: Option<String>,

    #[arg(short, long, default_value = ".", help = "Path inside the git repository")]
    repo: PathBuf,

    #[arg(long, env = "GITHUB_EVENT_PATH", help = "Workflow event payload (JSON)")]
    event_path: Option<PathBuf>,

    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, help = "GitHub API token")]
    token: Option<String>,

    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL, help = "GitHub API base URL")]
    api_url: String,

    #[arg(short, long, env = "GITHUB_OUTPUT", help = "File to append release outputs to")]
    output: Option<PathBuf>,

    #[arg(long, help = "Print outputs instead of writing them")]
    dry_run: bool,

    #[arg(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "drafterino=warn",
        1 => "drafterino=debug",
        _ => "drafterino=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args) -> Result<()> {
    let source = match (args.config_yaml, args.config) {
        (Some(yaml), _) => ConfigSource::Inline(yaml),
        (None, Some(path)) => ConfigSource::File(path),
        (None, None) => ConfigSource::Discover,
    };
    let config = load_config(source)?;

    let repo = Git2Repository::open(&args.repo)?;

    let client;
    let pulls = match GitHubContext::resolve(args.event_path.as_deref(), args.token.as_deref())? {
        ContextResolution::Ready(context) => {
            client = GitHubClient::new(&context, args.api_url)?;
            PullRequestAccess::Available(&client)
        }
        ContextResolution::Missing(warning) => PullRequestAccess::Unavailable(warning),
    };

    let mut sink: Box<dyn OutputSink> = match args.output {
        Some(path) if !args.dry_run => Box::new(GithubOutputFile::new(path)),
        _ => Box::new(StdoutSink),
    };

    run_release_workflow(config, &repo, pulls, sink.as_mut())?;
    Ok(())
}
