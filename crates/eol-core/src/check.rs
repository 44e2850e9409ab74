//! Per-manifest outcome computation.

use crate::dataset::ReleaseCycle;
use crate::error::{EolError, Result};
use crate::evaluator::eol_overlap;
use crate::repair::repaired_specifier;
use crate::types::PythonRelease;
use pep440_rs::VersionSpecifiers;
use std::str::FromStr;

/// Result of checking one manifest's `requires-python` declaration.
///
/// One variant per outcome so call sites handle every case exhaustively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The specifier admits no EOL release.
    Clean,
    /// EOL releases are admitted and no rewrite was requested.
    Violation {
        /// Offending releases, ascending by version.
        eol_releases: Vec<PythonRelease>,
    },
    /// EOL releases were admitted and a replacement specifier was computed.
    /// Persisting it into the manifest is the caller's job.
    Fixed {
        new_specifier: String,
        /// Offending releases, ascending by version.
        eol_releases: Vec<PythonRelease>,
    },
}

/// Evaluate a `requires-python` declaration against the release cycle.
///
/// A deterministic single pass: parse the specifier, collect the EOL
/// overlap, and, when `attempt_fix` is set, compute the replacement bound.
/// An unsupported specifier shape under `attempt_fix` is an error, never a
/// silent pass.
///
/// # Errors
///
/// * [`EolError::InvalidSpecifier`] if `requires_python` is not a valid
///   PEP 440 specifier set
/// * [`EolError::UnsupportedRepair`] if a fix was requested for anything
///   but a single `>=` clause
///
/// # Examples
///
/// ```
/// use eol_core::{CheckOutcome, ReleaseCycle, evaluate_requires_python};
///
/// let cycle = ReleaseCycle::from_json_str(
///     r#"{
///         "3.6": {"status": "end-of-life", "end_of_life": "2021-12-23"},
///         "3.7": {"status": "end-of-life", "end_of_life": "2023-06-27"},
///         "3.8": {"status": "security", "end_of_life": "2999-10"}
///     }"#,
/// )
/// .unwrap();
///
/// let outcome = evaluate_requires_python(">=3.6", &cycle, false, true).unwrap();
/// let CheckOutcome::Fixed { new_specifier, .. } = outcome else {
///     panic!("expected a fix");
/// };
/// assert_eq!(new_specifier, ">=3.8");
/// ```
pub fn evaluate_requires_python(
    requires_python: &str,
    cycle: &ReleaseCycle,
    use_current_date: bool,
    attempt_fix: bool,
) -> Result<CheckOutcome> {
    let specifiers = VersionSpecifiers::from_str(requires_python)
        .map_err(|e| EolError::invalid_specifier(requires_python, e))?;

    let eol_releases = eol_overlap(&specifiers, cycle, use_current_date);
    if eol_releases.is_empty() {
        return Ok(CheckOutcome::Clean);
    }

    if attempt_fix {
        let new_specifier = repaired_specifier(&specifiers, &eol_releases)?;
        Ok(CheckOutcome::Fixed {
            new_specifier,
            eol_releases,
        })
    } else {
        Ok(CheckOutcome::Violation { eol_releases })
    }
}

/// Comma-joined version list for one-line reporting, e.g. `"3.6, 3.7"`.
pub fn joined_versions(releases: &[PythonRelease]) -> String {
    releases
        .iter()
        .map(|r| r.version().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle() -> ReleaseCycle {
        ReleaseCycle::from_json_str(
            r#"{
                "3.6": {"status": "end-of-life", "end_of_life": "2021-12-23"},
                "3.7": {"status": "end-of-life", "end_of_life": "2023-06-27"},
                "3.8": {"status": "security", "end_of_life": "2999-10"},
                "3.9": {"status": "security", "end_of_life": "2999-10"},
                "3.11": {"status": "bugfix", "end_of_life": "2999-10"}
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_clean_when_no_overlap() {
        let outcome = evaluate_requires_python(">=3.11", &cycle(), false, false).unwrap();
        assert_eq!(outcome, CheckOutcome::Clean);
    }

    #[test]
    fn test_violation_lists_ascending_versions() {
        let outcome = evaluate_requires_python(">=3.6", &cycle(), false, false).unwrap();
        let CheckOutcome::Violation { eol_releases } = outcome else {
            panic!("expected a violation");
        };
        assert_eq!(joined_versions(&eol_releases), "3.6, 3.7");
    }

    #[test]
    fn test_fix_rewrites_to_first_supported() {
        let outcome = evaluate_requires_python(">=3.6", &cycle(), false, true).unwrap();
        let CheckOutcome::Fixed {
            new_specifier,
            eol_releases,
        } = outcome
        else {
            panic!("expected a fix");
        };
        assert_eq!(new_specifier, ">=3.8");
        assert_eq!(joined_versions(&eol_releases), "3.6, 3.7");
    }

    #[test]
    fn test_fix_on_clean_specifier_is_still_clean() {
        let outcome = evaluate_requires_python(">=3.8", &cycle(), false, true).unwrap();
        assert_eq!(outcome, CheckOutcome::Clean);
    }

    #[test]
    fn test_unsupported_fix_propagates() {
        let err = evaluate_requires_python(">=3.6,<4.0", &cycle(), false, true).unwrap_err();
        assert!(matches!(err, EolError::UnsupportedRepair));
    }

    #[test]
    fn test_unsupported_shape_without_fix_is_a_violation() {
        // The same compound specifier is fine to evaluate; only repair
        // rejects it.
        let outcome = evaluate_requires_python(">=3.6,<4.0", &cycle(), false, false).unwrap();
        assert!(matches!(outcome, CheckOutcome::Violation { .. }));
    }

    #[test]
    fn test_invalid_specifier_string() {
        let err = evaluate_requires_python("not a specifier", &cycle(), false, false).unwrap_err();
        assert!(matches!(err, EolError::InvalidSpecifier { .. }));
    }
}
