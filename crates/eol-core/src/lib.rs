//! EOL determination and `requires-python` repair.
//!
//! This crate decides whether a project's declared minimum-supported-Python
//! specifier still admits a Python release that has reached end-of-life, and
//! computes a corrected lower bound when asked to.
//!
//! # Architecture
//!
//! * **Types**: [`PythonRelease`], [`ReleasePhase`], and the `is_eol` policy
//! * **Dataset**: [`ReleaseCycle`] loaded from the cached PEPs release cycle
//! * **Evaluator**: [`eol_overlap`] - which covered releases are EOL
//! * **Repair**: [`repaired_specifier`] - a new lower bound past the newest
//!   EOL release, for single-clause `>=` specifiers only
//! * **Check**: [`evaluate_requires_python`] - the per-manifest decision,
//!   returned as a [`CheckOutcome`]
//!
//! Everything here is a pure computation over already-loaded data. Reading
//! manifests, writing fixes back, and refreshing the cached dataset live in
//! the `eol-check` crate.
//!
//! # Examples
//!
//! ```
//! use eol_core::{CheckOutcome, ReleaseCycle, evaluate_requires_python};
//!
//! let cycle = ReleaseCycle::from_json_str(
//!     r#"{
//!         "3.7": {"status": "end-of-life", "end_of_life": "2023-06-27"},
//!         "3.12": {"status": "security", "end_of_life": "2028-10"}
//!     }"#,
//! )
//! .unwrap();
//!
//! // A bound below 3.7 still admits an EOL release.
//! let outcome = evaluate_requires_python(">=3.7", &cycle, false, false).unwrap();
//! assert!(matches!(outcome, CheckOutcome::Violation { .. }));
//!
//! // A bound above it is clean.
//! let outcome = evaluate_requires_python(">=3.12", &cycle, false, false).unwrap();
//! assert!(matches!(outcome, CheckOutcome::Clean));
//! ```

pub mod check;
pub mod dataset;
pub mod error;
pub mod evaluator;
pub mod repair;
pub mod types;

// Re-export commonly used types
pub use check::{CheckOutcome, evaluate_requires_python, joined_versions};
pub use dataset::ReleaseCycle;
pub use error::{EolError, Result};
pub use evaluator::eol_overlap;
pub use repair::repaired_specifier;
pub use types::{PythonRelease, ReleasePhase, parse_eol_date};
