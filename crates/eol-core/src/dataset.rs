//! Loading the cached release cycle dataset.

use crate::error::{EolError, Result};
use crate::types::PythonRelease;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Raw dataset entry, in the shape served by the PEPs API
/// (<https://peps.python.org/api/release-cycle.json>).
///
/// Upstream carries more fields (`branch`, `pep`, `first_release`,
/// `release_manager`); only the two consumed here are deserialized.
#[derive(Debug, Deserialize)]
struct RawEntry {
    status: String,
    end_of_life: String,
}

/// The known Python releases, sorted by version descending.
///
/// Built fresh from the cached dataset on each check invocation and
/// read-only afterward; evaluations may share it freely.
///
/// # Examples
///
/// ```
/// use eol_core::ReleaseCycle;
///
/// let data = r#"{
///     "3.12": {"status": "security", "end_of_life": "2028-10"},
///     "3.13": {"status": "bugfix", "end_of_life": "2029-10"}
/// }"#;
///
/// let cycle = ReleaseCycle::from_json_str(data).unwrap();
/// assert_eq!(cycle.len(), 2);
/// assert_eq!(cycle.releases()[0].version().to_string(), "3.13");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseCycle {
    releases: Vec<PythonRelease>,
}

impl ReleaseCycle {
    /// Deserialize a release cycle from its JSON representation.
    ///
    /// Any entry with an unknown phase, malformed date, or invalid version
    /// key fails the whole load with [`EolError::MalformedEntry`]; a
    /// partially loaded dataset would make the EOL determination quietly
    /// wrong.
    ///
    /// The result is re-sorted version-descending even though the upstream
    /// data is expected to arrive ordered; the repair cutoff depends on
    /// that order.
    pub fn from_json_str(data: &str) -> Result<Self> {
        let raw: BTreeMap<String, RawEntry> = serde_json::from_str(data)?;

        let mut releases = raw
            .into_iter()
            .map(|(version, entry)| {
                PythonRelease::from_entry(&version, &entry.status, &entry.end_of_life)
                    .map_err(|e| EolError::malformed_entry(version, e))
            })
            .collect::<Result<Vec<_>>>()?;
        releases.sort_by(|a, b| b.version().cmp(a.version()));

        tracing::debug!(releases = releases.len(), "loaded release cycle");

        Ok(Self { releases })
    }

    /// The releases, newest first.
    pub fn releases(&self) -> &[PythonRelease] {
        &self.releases
    }

    /// Iterate over the releases, newest first.
    pub fn iter(&self) -> std::slice::Iter<'_, PythonRelease> {
        self.releases.iter()
    }

    /// Number of known releases.
    pub fn len(&self) -> usize {
        self.releases.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.releases.is_empty()
    }
}

impl<'a> IntoIterator for &'a ReleaseCycle {
    type Item = &'a PythonRelease;
    type IntoIter = std::slice::Iter<'a, PythonRelease>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
