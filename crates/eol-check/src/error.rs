use std::path::PathBuf;
use thiserror::Error;

/// Errors from manifest handling and per-file orchestration.
///
/// Core evaluation errors pass through as [`CheckError::Eol`]; everything
/// else here is about getting data into and out of files. One file's error
/// is reported and never aborts the rest of a run.
#[derive(Error, Debug)]
pub enum CheckError {
    /// `project.requires-python` is missing or empty
    #[error("'requires-python' could not be located in {}, or it is empty", .path.display())]
    RequiresPythonNotFound { path: PathBuf },

    /// pyproject.toml is not valid TOML
    #[error("failed to parse {}: {source}", .path.display())]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: toml_edit::TomlError,
    },

    /// Release cycle fetch failed
    #[error("release cycle request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Core evaluation error
    #[error(transparent)]
    Eol(#[from] eol_core::EolError),
}

/// Convenience type alias for `Result<T, CheckError>`.
pub type Result<T> = std::result::Result<T, CheckError>;

impl CheckError {
    /// Create a requires-python-not-found error.
    pub fn requires_python_not_found(path: impl Into<PathBuf>) -> Self {
        Self::RequiresPythonNotFound { path: path.into() }
    }

    /// Create a manifest parse error.
    pub fn manifest_parse(path: impl Into<PathBuf>, source: toml_edit::TomlError) -> Self {
        Self::ManifestParse {
            path: path.into(),
            source,
        }
    }
}
