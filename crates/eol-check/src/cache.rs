//! Cached release cycle dataset location handling.
//!
//! The checker never talks to the network: it reads a local snapshot of the
//! PEPs release cycle, either the one bundled at compile time or a file the
//! caller points it at. The `bump-eol-cache` binary refreshes the snapshot.

use crate::error::Result;
use eol_core::ReleaseCycle;
use std::fs;
use std::path::Path;

/// Snapshot of <https://peps.python.org/api/release-cycle.json> bundled at
/// compile time, used when no cache path is given.
pub const BUNDLED_RELEASE_CYCLE: &str = include_str!("../data/cached_release_cycle.json");

/// Load the release cycle from `path`, or from the bundled snapshot when no
/// path is given.
///
/// # Examples
///
/// ```
/// use eol_check::load_release_cycle;
///
/// let cycle = load_release_cycle(None).unwrap();
/// assert!(!cycle.is_empty());
/// ```
pub fn load_release_cycle(path: Option<&Path>) -> Result<ReleaseCycle> {
    let cycle = match path {
        Some(path) => {
            tracing::debug!(cache = %path.display(), "loading release cycle from file");
            ReleaseCycle::from_json_str(&fs::read_to_string(path)?)?
        }
        None => ReleaseCycle::from_json_str(BUNDLED_RELEASE_CYCLE)?,
    };
    Ok(cycle)
}
