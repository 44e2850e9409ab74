use thiserror::Error;

/// Errors raised while loading the release cycle dataset or evaluating a
/// `requires-python` declaration against it.
///
/// Each failure mode gets its own variant so callers can match on the exact
/// condition instead of inspecting message strings.
///
/// # Examples
///
/// ```
/// use eol_core::error::EolError;
///
/// let err = "2023".parse::<eol_core::ReleasePhase>().unwrap_err();
/// assert!(matches!(err, EolError::UnknownReleasePhase { .. }));
/// ```
#[derive(Error, Debug)]
pub enum EolError {
    /// Date string is neither `YYYY-MM-DD` nor `YYYY-MM`
    #[error("unknown date format: '{value}'")]
    MalformedDate { value: String },

    /// Phase string outside the dataset vocabulary
    #[error("unknown release phase: '{phase}'")]
    UnknownReleasePhase { phase: String },

    /// Version key is not valid PEP 440
    #[error("invalid Python version '{version}': {source}")]
    InvalidVersion {
        version: String,
        #[source]
        source: pep440_rs::VersionParseError,
    },

    /// A dataset entry could not be converted into a release; the whole
    /// load fails, never a partial dataset
    #[error("malformed release cycle entry for '{version}': {source}")]
    MalformedEntry {
        version: String,
        #[source]
        source: Box<EolError>,
    },

    /// `requires-python` value is not a valid PEP 440 specifier set
    #[error("invalid version specifier '{specifier}': {source}")]
    InvalidSpecifier {
        specifier: String,
        #[source]
        source: pep440_rs::VersionSpecifiersParseError,
    },

    /// Fix requested for a specifier shape the repair does not handle
    #[error("fixing EOL Python versions is only supported for simple '>=3.x' specifiers")]
    UnsupportedRepair,

    /// Release cycle JSON could not be deserialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for `Result<T, EolError>`.
pub type Result<T> = std::result::Result<T, EolError>;

impl EolError {
    /// Create a malformed date error.
    pub fn malformed_date(value: impl Into<String>) -> Self {
        Self::MalformedDate {
            value: value.into(),
        }
    }

    /// Create an invalid version error.
    pub fn invalid_version(
        version: impl Into<String>,
        source: pep440_rs::VersionParseError,
    ) -> Self {
        Self::InvalidVersion {
            version: version.into(),
            source,
        }
    }

    /// Wrap a per-entry failure with the offending dataset key.
    pub fn malformed_entry(version: impl Into<String>, source: EolError) -> Self {
        Self::MalformedEntry {
            version: version.into(),
            source: Box::new(source),
        }
    }

    /// Create an invalid specifier error.
    pub fn invalid_specifier(
        specifier: impl Into<String>,
        source: pep440_rs::VersionSpecifiersParseError,
    ) -> Self {
        Self::InvalidSpecifier {
            specifier: specifier.into(),
            source,
        }
    }
}
