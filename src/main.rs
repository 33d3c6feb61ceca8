use anyhow::Result;
use clap::Parser;

use release_sync::cli::{ReleaseOrchestrator, SyncOutcome};
use release_sync::config;
use release_sync::git::Git2Repository;
use release_sync::ui;

#[derive(clap::Parser)]
#[command(
    name = "release-sync",
    version,
    about = "Check for new upstream releases and create the matching downstream tags"
)]
struct Args {
    #[arg(
        long,
        default_value = "",
        help = "Do not check versions older than this, expected format: vX.Y"
    )]
    minimal_version: String,

    #[arg(
        long,
        default_value = "",
        help = "Comma separated list of upstream release versions"
    )]
    existing_tags: String,

    #[arg(long, default_value = "", help = "URL of the downstream tag repository")]
    repository_url: String,

    #[arg(
        long,
        default_value_t = true,
        action = clap::ArgAction::Set,
        num_args = 0..=1,
        default_missing_value = "true",
        help = "Report what would be created without creating anything"
    )]
    dry_run: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Error loading config: {}", e);
            std::process::exit(1);
        }
    };

    let pattern = match config.tag_pattern() {
        Ok(pattern) => pattern,
        Err(e) => {
            ui::display_error(&format!("Invalid tag pattern: {}", e));
            std::process::exit(1);
        }
    };

    // An unparseable floor makes the whole run meaningless
    let orchestrator = match ReleaseOrchestrator::new(&args.minimal_version, pattern, args.dry_run)
    {
        Ok(orchestrator) => orchestrator,
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    };

    // Clone the downstream repository into a throwaway checkout
    let checkout = tempfile::tempdir()?;
    ui::display_status(&format!("Cloning {} ...", args.repository_url));
    let repo = match Git2Repository::clone_from(&args.repository_url, checkout.path(), config.tagger)
    {
        Ok(repo) => repo,
        Err(e) => {
            ui::display_error(&format!("Repository error: {}", e));
            std::process::exit(1);
        }
    };

    match orchestrator.run(&repo, &args.existing_tags) {
        Ok(SyncOutcome::UpToDate) => ui::display_nothing_to_do(),
        Ok(SyncOutcome::Planned(tags)) => ui::display_planned_tags(&tags),
        Ok(SyncOutcome::Created(tags)) => ui::display_created_tags(&tags),
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }

    Ok(())
}
