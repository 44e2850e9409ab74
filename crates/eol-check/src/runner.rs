//! Per-file check orchestration.

use crate::error::Result;
use crate::manifest::Pyproject;
use eol_core::{CheckOutcome, ReleaseCycle, evaluate_requires_python};
use std::path::Path;

/// Knobs for one check run, shared across all files.
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    /// Also treat releases whose EOL date has passed as EOL, even when the
    /// dataset phase lags. Off means cache-only, reproducible results.
    pub use_current_date: bool,
    /// Rewrite the manifest when the specifier admits EOL releases.
    pub fix: bool,
}

impl Default for CheckOptions {
    fn default() -> Self {
        Self {
            use_current_date: true,
            fix: false,
        }
    }
}

/// Check one pyproject.toml, persisting the rewritten specifier on a fix.
///
/// Pure evaluation happens in `eol-core`; this adds the read side (load the
/// manifest, extract the declared specifier) and the write side (save the
/// replacement on [`CheckOutcome::Fixed`]). Files are independent: an error
/// here is reported by the caller and never stops a multi-file run.
pub fn check_file(
    path: &Path,
    cycle: &ReleaseCycle,
    options: CheckOptions,
) -> Result<CheckOutcome> {
    let mut pyproject = Pyproject::load(path)?;
    let requires_python = pyproject.requires_python()?.to_string();

    tracing::debug!(
        file = %path.display(),
        specifier = %requires_python,
        "checking requires-python"
    );

    let outcome = evaluate_requires_python(
        &requires_python,
        cycle,
        options.use_current_date,
        options.fix,
    )?;

    if let CheckOutcome::Fixed { new_specifier, .. } = &outcome {
        pyproject.set_requires_python(new_specifier);
        pyproject.save()?;
        tracing::info!(
            file = %path.display(),
            new_specifier = %new_specifier,
            "rewrote requires-python"
        );
    }

    Ok(outcome)
}
