//! Frontend for the python-eol pre-commit hook.
//!
//! `eol-core` owns the pure decision logic; this crate owns everything that
//! touches the outside world:
//!
//! * **Manifest**: [`Pyproject`] - extract and rewrite
//!   `project.requires-python` with formatting preserved
//! * **Cache**: [`load_release_cycle`] - bundled snapshot or an explicit
//!   path
//! * **Runner**: [`check_file`] - per-file load/evaluate/persist
//! * **Refresh**: [`refresh::fetch_release_cycle`] - pull a new snapshot
//!   from the PEPs API
//!
//! Two binaries sit on top: `check-python-eol` (the hook itself) and
//! `bump-eol-cache` (dataset refresh).

pub mod cache;
pub mod error;
pub mod manifest;
pub mod refresh;
pub mod runner;

// Re-export commonly used types
pub use cache::{BUNDLED_RELEASE_CYCLE, load_release_cycle};
pub use error::{CheckError, Result};
pub use manifest::Pyproject;
pub use runner::{CheckOptions, check_file};
