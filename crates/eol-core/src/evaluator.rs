//! Evaluation of a `requires-python` specifier against the release cycle.

use crate::dataset::ReleaseCycle;
use crate::types::PythonRelease;
use pep440_rs::VersionSpecifiers;

/// Releases covered by `specifiers` that are EOL, sorted ascending by
/// version.
///
/// An empty result means the specifier excludes every known EOL release.
/// Ascending is the presentation and repair order: messages list the oldest
/// offender first, and the repair cutoff is the last element.
///
/// # Examples
///
/// ```
/// use eol_core::{ReleaseCycle, eol_overlap};
/// use pep440_rs::VersionSpecifiers;
/// use std::str::FromStr;
///
/// let cycle = ReleaseCycle::from_json_str(
///     r#"{
///         "3.8": {"status": "end-of-life", "end_of_life": "2024-10-07"},
///         "3.9": {"status": "end-of-life", "end_of_life": "2025-10"},
///         "3.13": {"status": "bugfix", "end_of_life": "2029-10"}
///     }"#,
/// )
/// .unwrap();
///
/// let specifiers = VersionSpecifiers::from_str(">=3.8").unwrap();
/// let overlap = eol_overlap(&specifiers, &cycle, false);
/// let versions: Vec<String> = overlap.iter().map(|r| r.version().to_string()).collect();
/// assert_eq!(versions, ["3.8", "3.9"]);
///
/// let specifiers = VersionSpecifiers::from_str(">=3.13").unwrap();
/// assert!(eol_overlap(&specifiers, &cycle, false).is_empty());
/// ```
pub fn eol_overlap(
    specifiers: &VersionSpecifiers,
    cycle: &ReleaseCycle,
    use_current_date: bool,
) -> Vec<PythonRelease> {
    let mut overlap: Vec<PythonRelease> = cycle
        .iter()
        .filter(|release| {
            specifiers.contains(release.version()) && release.is_eol(use_current_date)
        })
        .cloned()
        .collect();

    // The cycle is stored newest-first; consumers want oldest-first.
    overlap.sort_by(|a, b| a.version().cmp(b.version()));
    overlap
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn cycle() -> ReleaseCycle {
        ReleaseCycle::from_json_str(
            r#"{
                "3.6": {"status": "end-of-life", "end_of_life": "2021-12-23"},
                "3.7": {"status": "end-of-life", "end_of_life": "2023-06-27"},
                "3.8": {"status": "end-of-life", "end_of_life": "2024-10-07"},
                "3.9": {"status": "end-of-life", "end_of_life": "2025-10"},
                "3.12": {"status": "security", "end_of_life": "2999-10"},
                "3.13": {"status": "bugfix", "end_of_life": "2999-10"}
            }"#,
        )
        .unwrap()
    }

    fn versions(overlap: &[PythonRelease]) -> Vec<String> {
        overlap.iter().map(|r| r.version().to_string()).collect()
    }

    #[test]
    fn test_overlap_is_ascending() {
        let specifiers = VersionSpecifiers::from_str(">=3.6").unwrap();
        let overlap = eol_overlap(&specifiers, &cycle(), false);
        assert_eq!(versions(&overlap), ["3.6", "3.7", "3.8", "3.9"]);
    }

    #[test]
    fn test_overlap_respects_lower_bound() {
        let specifiers = VersionSpecifiers::from_str(">=3.8").unwrap();
        let overlap = eol_overlap(&specifiers, &cycle(), false);
        assert_eq!(versions(&overlap), ["3.8", "3.9"]);
    }

    #[test]
    fn test_overlap_respects_compound_specifier() {
        let specifiers = VersionSpecifiers::from_str(">=3.6,<3.8").unwrap();
        let overlap = eol_overlap(&specifiers, &cycle(), false);
        assert_eq!(versions(&overlap), ["3.6", "3.7"]);
    }

    #[test]
    fn test_no_overlap_is_empty() {
        let specifiers = VersionSpecifiers::from_str(">=3.12").unwrap();
        assert!(eol_overlap(&specifiers, &cycle(), false).is_empty());
    }

    #[test]
    fn test_exact_pin_on_supported_release() {
        let specifiers = VersionSpecifiers::from_str("==3.13").unwrap();
        assert!(eol_overlap(&specifiers, &cycle(), false).is_empty());
    }

    #[test]
    fn test_exact_pin_on_eol_release() {
        let specifiers = VersionSpecifiers::from_str("==3.7").unwrap();
        let overlap = eol_overlap(&specifiers, &cycle(), false);
        assert_eq!(versions(&overlap), ["3.7"]);
    }

    #[test]
    fn test_date_check_catches_lagging_phase() {
        // Dataset still says "security" but the date is long past.
        let cycle = ReleaseCycle::from_json_str(
            r#"{"3.9": {"status": "security", "end_of_life": "2020-10-05"}}"#,
        )
        .unwrap();
        let specifiers = VersionSpecifiers::from_str(">=3.9").unwrap();

        assert!(eol_overlap(&specifiers, &cycle, false).is_empty());
        assert_eq!(versions(&eol_overlap(&specifiers, &cycle, true)), ["3.9"]);
    }
}
