use clap::Parser;
use eol_check::{CheckError, CheckOptions, check_file, load_release_cycle};
use eol_core::{CheckOutcome, joined_versions};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Check pyproject.toml `requires-python` for overlap with EOL Python
/// versions.
#[derive(Debug, Parser)]
#[command(name = "check-python-eol", version, about)]
struct Cli {
    /// pyproject.toml files to check
    filenames: Vec<PathBuf>,

    /// Trust only the cached dataset phases; skip the date-based check
    #[arg(long)]
    cache_only: bool,

    /// Rewrite offending specifiers to exclude EOL versions
    #[arg(long)]
    fix: bool,

    /// Release cycle JSON cache to read instead of the bundled snapshot
    #[arg(long, value_name = "FILE")]
    cache: Option<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let cycle = match load_release_cycle(cli.cache.as_deref()) {
        Ok(cycle) => cycle,
        Err(e) => {
            eprintln!("failed to load the release cycle cache: {e}");
            return ExitCode::FAILURE;
        }
    };

    let options = CheckOptions {
        use_current_date: !cli.cache_only,
        fix: cli.fix,
    };

    let mut failed = false;
    for file in &cli.filenames {
        match check_file(file, &cycle, options) {
            Ok(CheckOutcome::Clean) => {}
            Ok(CheckOutcome::Violation { eol_releases }) => {
                println!(
                    "{}: EOL Python support found: {}",
                    file.display(),
                    joined_versions(&eol_releases)
                );
                failed = true;
            }
            Ok(CheckOutcome::Fixed {
                new_specifier,
                eol_releases,
            }) => {
                println!(
                    "{}: rewrote 'requires-python' to \"{}\" (EOL Python support found: {})",
                    file.display(),
                    new_specifier,
                    joined_versions(&eol_releases)
                );
                failed = true;
            }
            Err(CheckError::RequiresPythonNotFound { .. }) => {
                println!(
                    "{}: 'requires-python' could not be located, or it is empty.",
                    file.display()
                );
                failed = true;
            }
            Err(e) => {
                println!("{}: {e}", file.display());
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
