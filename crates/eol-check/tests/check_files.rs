//! End-to-end checks over on-disk pyproject.toml files.
//!
//! These tests drive the same lib path the `check-python-eol` binary uses:
//! load the manifest, evaluate against a release cycle, persist fixes.

use eol_check::{CheckError, CheckOptions, check_file, load_release_cycle};
use eol_core::{CheckOutcome, EolError, joined_versions};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const RELEASE_CYCLE: &str = r#"{
    "3.6": {"status": "end-of-life", "end_of_life": "2021-12-23"},
    "3.7": {"status": "end-of-life", "end_of_life": "2023-06-27"},
    "3.8": {"status": "security", "end_of_life": "2999-10"},
    "3.9": {"status": "security", "end_of_life": "2999-10"},
    "3.11": {"status": "bugfix", "end_of_life": "2999-10"},
    "3.12": {"status": "bugfix", "end_of_life": "2999-10"}
}"#;

const CACHE_ONLY: CheckOptions = CheckOptions {
    use_current_date: false,
    fix: false,
};

const CACHE_ONLY_FIX: CheckOptions = CheckOptions {
    use_current_date: false,
    fix: true,
};

struct Workspace {
    _dir: TempDir,
    pyproject: PathBuf,
    cache: PathBuf,
}

impl Workspace {
    fn new(pyproject_contents: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let pyproject = dir.path().join("pyproject.toml");
        let cache = dir.path().join("cached_release_cycle.json");
        fs::write(&pyproject, pyproject_contents).unwrap();
        fs::write(&cache, RELEASE_CYCLE).unwrap();
        Self {
            _dir: dir,
            pyproject,
            cache,
        }
    }

    fn cycle(&self) -> eol_core::ReleaseCycle {
        load_release_cycle(Some(&self.cache)).unwrap()
    }

    fn pyproject_contents(&self) -> String {
        fs::read_to_string(&self.pyproject).unwrap()
    }
}

#[test]
fn test_eol_support_is_a_violation() {
    let ws = Workspace::new(
        r#"[project]
name = "sample"
requires-python = ">=3.6"
"#,
    );

    let outcome = check_file(&ws.pyproject, &ws.cycle(), CACHE_ONLY).unwrap();
    let CheckOutcome::Violation { eol_releases } = outcome else {
        panic!("expected a violation");
    };
    assert_eq!(joined_versions(&eol_releases), "3.6, 3.7");
}

#[test]
fn test_clean_file_is_left_untouched() {
    let contents = r#"[project]
name = "sample"
requires-python = ">=3.11"
"#;
    let ws = Workspace::new(contents);

    let outcome = check_file(&ws.pyproject, &ws.cycle(), CACHE_ONLY_FIX).unwrap();
    assert_eq!(outcome, CheckOutcome::Clean);
    assert_eq!(ws.pyproject_contents(), contents);
}

#[test]
fn test_fix_rewrites_manifest() {
    let ws = Workspace::new(
        r#"# project metadata
[project]
name = "sample"
requires-python = ">=3.6"

[tool.mypy]
strict = true
"#,
    );

    let outcome = check_file(&ws.pyproject, &ws.cycle(), CACHE_ONLY_FIX).unwrap();
    let CheckOutcome::Fixed {
        new_specifier,
        eol_releases,
    } = outcome
    else {
        panic!("expected a fix");
    };
    assert_eq!(new_specifier, ">=3.8");
    assert_eq!(joined_versions(&eol_releases), "3.6, 3.7");

    let written = ws.pyproject_contents();
    assert!(written.contains("requires-python = \">=3.8\""));
    assert!(written.contains("# project metadata"));
    assert!(written.contains("[tool.mypy]"));
}

#[test]
fn test_fixed_file_checks_clean_afterwards() {
    let ws = Workspace::new(
        r#"[project]
requires-python = ">=3.6"
"#,
    );

    let cycle = ws.cycle();
    check_file(&ws.pyproject, &cycle, CACHE_ONLY_FIX).unwrap();

    let outcome = check_file(&ws.pyproject, &cycle, CACHE_ONLY_FIX).unwrap();
    assert_eq!(outcome, CheckOutcome::Clean);
}

#[test]
fn test_unsupported_fix_leaves_file_untouched() {
    let contents = r#"[project]
requires-python = ">=3.6,<4.0"
"#;
    let ws = Workspace::new(contents);

    let err = check_file(&ws.pyproject, &ws.cycle(), CACHE_ONLY_FIX).unwrap_err();
    assert!(matches!(err, CheckError::Eol(EolError::UnsupportedRepair)));
    assert_eq!(ws.pyproject_contents(), contents);
}

#[test]
fn test_missing_requires_python_is_reported() {
    let ws = Workspace::new("[project]\nname = \"sample\"\n");

    let err = check_file(&ws.pyproject, &ws.cycle(), CACHE_ONLY).unwrap_err();
    assert!(matches!(err, CheckError::RequiresPythonNotFound { .. }));
}

#[test]
fn test_missing_file_is_io_error() {
    let ws = Workspace::new("[project]\n");
    let missing = ws.pyproject.with_file_name("absent.toml");

    let err = check_file(&missing, &ws.cycle(), CACHE_ONLY).unwrap_err();
    assert!(matches!(err, CheckError::Io(_)));
}

#[test]
fn test_one_bad_file_does_not_poison_others() {
    // The runner returns per-file results; a failure for one path must not
    // affect a later check against the same shared cycle.
    let bad = Workspace::new("[project]\nname = \"sample\"\n");
    let good = Workspace::new(
        r#"[project]
requires-python = ">=3.11"
"#,
    );

    let cycle = bad.cycle();
    assert!(check_file(&bad.pyproject, &cycle, CACHE_ONLY).is_err());
    assert_eq!(
        check_file(&good.pyproject, &cycle, CACHE_ONLY).unwrap(),
        CheckOutcome::Clean
    );
}
