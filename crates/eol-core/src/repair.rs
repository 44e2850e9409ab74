//! Rewriting a `requires-python` lower bound past the newest EOL release.

use crate::error::{EolError, Result};
use crate::types::PythonRelease;
use pep440_rs::{Operator, VersionSpecifiers};

/// Compute a replacement specifier that excludes every release in
/// `eol_overlap`.
///
/// Only the common lower-bound-only shape is rewritten: exactly one clause,
/// operator `>=`. Compound or upper-bounded specifiers carry intent this
/// tool cannot infer, so anything else fails with
/// [`EolError::UnsupportedRepair`] instead of producing a guessed bound.
///
/// `eol_overlap` must be ascending by version, as produced by
/// [`eol_overlap`](crate::evaluator::eol_overlap), and non-empty. The cutoff
/// is its last entry, the newest EOL release the original specifier still
/// admits; the new bound is the minor version right after it. With a single
/// `>=` clause every known EOL release at or above the bound is in the
/// overlap, so the bump lands above all of them. When the cutoff is the last
/// release of its major line (say 2.7), the bound names a minor that never
/// shipped; that still excludes every EOL release, it just reads oddly.
///
/// # Examples
///
/// ```
/// use eol_core::{PythonRelease, repaired_specifier};
/// use pep440_rs::VersionSpecifiers;
/// use std::str::FromStr;
///
/// let overlap = vec![
///     PythonRelease::from_entry("3.8", "end-of-life", "2024-10-07").unwrap(),
///     PythonRelease::from_entry("3.9", "end-of-life", "2025-10").unwrap(),
/// ];
///
/// let specifiers = VersionSpecifiers::from_str(">=3.8").unwrap();
/// assert_eq!(repaired_specifier(&specifiers, &overlap).unwrap(), ">=3.10");
///
/// let specifiers = VersionSpecifiers::from_str(">=3.8,<4.0").unwrap();
/// assert!(repaired_specifier(&specifiers, &overlap).is_err());
/// ```
pub fn repaired_specifier(
    specifiers: &VersionSpecifiers,
    eol_overlap: &[PythonRelease],
) -> Result<String> {
    // Only a single specifier clause is supported
    if specifiers.len() != 1 {
        return Err(EolError::UnsupportedRepair);
    }
    let clause = &specifiers[0];

    // Only the >= operator is supported
    if !matches!(clause.operator(), Operator::GreaterThanEqual) {
        return Err(EolError::UnsupportedRepair);
    }

    let Some(cutoff) = eol_overlap.last() else {
        return Err(EolError::UnsupportedRepair);
    };

    let release = cutoff.version().release();
    let major = release.first().copied().unwrap_or(0);
    let minor = release.get(1).copied().unwrap_or(0);

    Ok(format!(">={}.{}", major, minor + 1))
}
