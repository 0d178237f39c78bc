use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};

use gh_release_cut::cli::{run_release_workflow, ReleaseWorkflowArgs};
use gh_release_cut::config::{self, Overrides, Settings};
use gh_release_cut::github::GitHubClient;
use gh_release_cut::ui;

#[derive(Debug, clap::Parser)]
#[command(
    name = "gh-release-cut",
    version,
    about = "Create the next semantic-version GitHub release with generated notes"
)]
struct Args {
    /// Repository owner
    #[arg(long, env = "GITHUB_OWNER")]
    owner: Option<String>,

    /// Repository name
    #[arg(long, env = "GITHUB_REPO")]
    repo: Option<String>,

    /// Repository as owner/name, used when owner or name is not given
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// Version component to increment: major, minor or patch
    #[arg(short, long, env = "INCREMENT")]
    increment: Option<String>,

    /// Additional notes appended to the release body
    #[arg(short, long, env = "ADD_DESCRIPTION")]
    notes: Option<String>,

    /// File to append latest_version/new_version to
    #[arg(long, env = "GITHUB_OUTPUT")]
    output_file: Option<PathBuf>,

    /// Branch the release targets
    #[arg(short, long, env = "TARGET_BRANCH")]
    branch: Option<String>,

    /// GitHub API root
    #[arg(long, env = "GITHUB_API_URL")]
    api_url: Option<String>,

    /// Custom configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Preview the release without creating it
    #[arg(long)]
    dry_run: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn into_overrides(self) -> Overrides {
        Overrides {
            owner: self.owner,
            repo: self.repo,
            repository: self.repository,
            token: config::token_from_env(),
            increment: self.increment,
            notes: self.notes,
            output_file: self.output_file,
            branch: self.branch,
            api_url: self.api_url,
        }
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbosity {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

fn run(args: Args) -> Result<()> {
    let dry_run = args.dry_run;
    let file_config =
        config::load_config(args.config.as_deref()).context("Error loading config")?;
    let settings = Settings::resolve(file_config, args.into_overrides())?;
    tracing::debug!(?settings, "resolved settings");

    let client = GitHubClient::new(
        &settings.api_url,
        &settings.owner,
        &settings.repo,
        &settings.token,
    );

    ui::display_status(&format!(
        "Preparing release for {}/{} ({})",
        settings.owner, settings.repo, settings.branch
    ));

    let workflow_args = ReleaseWorkflowArgs::from_settings(&settings, dry_run);
    let result = run_release_workflow(&client, &workflow_args)?;

    if let Some(url) = result.release_url {
        ui::display_status(&format!("View it at {}", url));
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}
