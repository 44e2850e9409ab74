//! Refresh the cached Python release cycle from peps.python.org.
//!
//! Meant to run from the repository root on a schedule; the checker itself
//! never fetches.

use clap::Parser;
use eol_check::refresh::{CACHE_SOURCE, fetch_release_cycle, user_agent};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "bump-eol-cache", version, about)]
struct Cli {
    /// Where to write the refreshed cache
    #[arg(
        long,
        value_name = "FILE",
        default_value = "crates/eol-check/data/cached_release_cycle.json"
    )]
    output: PathBuf,

    /// Alternate source URL for the release cycle dataset
    #[arg(long, value_name = "URL", default_value = CACHE_SOURCE)]
    source: String,
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match bump(&cli).await {
        Ok(()) => {
            tracing::info!(output = %cli.output.display(), "release cycle cache refreshed");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("failed to refresh the release cycle cache: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn bump(cli: &Cli) -> eol_check::Result<()> {
    let client = reqwest::Client::builder()
        .user_agent(user_agent())
        .build()?;

    let pretty = fetch_release_cycle(&client, &cli.source).await?;
    std::fs::write(&cli.output, pretty)?;
    Ok(())
}
