//! Python release model: lifecycle phase, EOL date, and the EOL policy.

use crate::error::{EolError, Result};
use chrono::{NaiveDate, Utc};
use pep440_rs::Version;
use std::fmt;
use std::str::FromStr;

/// Python release phase, as published by the release cycle dataset.
///
/// The vocabulary is fixed; an unrecognized phase string is a load error,
/// not a silent default.
///
/// See: <https://devguide.python.org/versions/#status-key>
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReleasePhase {
    /// In development, before the first beta
    Feature,
    /// Beta/release-candidate stage
    Prerelease,
    /// Receives bugfix and security updates
    Bugfix,
    /// Receives security updates only
    Security,
    /// Receives no updates of any kind
    EndOfLife,
}

impl ReleasePhase {
    /// The dataset's string form of this phase.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Prerelease => "prerelease",
            Self::Bugfix => "bugfix",
            Self::Security => "security",
            Self::EndOfLife => "end-of-life",
        }
    }
}

impl FromStr for ReleasePhase {
    type Err = EolError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "feature" => Ok(Self::Feature),
            "prerelease" => Ok(Self::Prerelease),
            "bugfix" => Ok(Self::Bugfix),
            "security" => Ok(Self::Security),
            "end-of-life" => Ok(Self::EndOfLife),
            other => Err(EolError::UnknownReleasePhase {
                phase: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for ReleasePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse an EOL date from one of the two dataset formats.
///
/// * `YYYY-MM-DD` is parsed as-is
/// * `YYYY-MM` is parsed as the 1st of that year and month
///
/// Anything else fails with [`EolError::MalformedDate`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use eol_core::parse_eol_date;
///
/// assert_eq!(
///     parse_eol_date("2023-06-27").unwrap(),
///     NaiveDate::from_ymd_opt(2023, 6, 27).unwrap()
/// );
/// assert_eq!(
///     parse_eol_date("2023-06").unwrap(),
///     NaiveDate::from_ymd_opt(2023, 6, 1).unwrap()
/// );
/// assert!(parse_eol_date("2023").is_err());
/// ```
pub fn parse_eol_date(value: &str) -> Result<NaiveDate> {
    let malformed = || EolError::malformed_date(value);

    match value.split('-').count() {
        3 => NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| malformed()),
        2 => {
            let (year, month) = value.split_once('-').ok_or_else(malformed)?;
            let year: i32 = year.parse().map_err(|_| malformed())?;
            let month: u32 = month.parse().map_err(|_| malformed())?;
            NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(malformed)
        }
        _ => Err(malformed()),
    }
}

/// A single Python release from the release cycle dataset.
///
/// Immutable once constructed. EOL-ness is derived via
/// [`PythonRelease::is_eol`], never stored, so a release compares and hashes
/// on its recorded data alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PythonRelease {
    version: Version,
    phase: ReleasePhase,
    end_of_life: NaiveDate,
}

impl PythonRelease {
    /// Create a release from already-parsed components.
    pub fn new(version: Version, phase: ReleasePhase, end_of_life: NaiveDate) -> Self {
        Self {
            version,
            phase,
            end_of_life,
        }
    }

    /// Build a release from the raw dataset strings.
    ///
    /// Components are assumed to be in the format served by the PEPs API:
    /// <https://peps.python.org/api/release-cycle.json>
    pub fn from_entry(version: &str, status: &str, end_of_life: &str) -> Result<Self> {
        Ok(Self {
            version: Version::from_str(version)
                .map_err(|e| EolError::invalid_version(version, e))?,
            phase: status.parse()?,
            end_of_life: parse_eol_date(end_of_life)?,
        })
    }

    /// The PEP 440 version of this release.
    pub fn version(&self) -> &Version {
        &self.version
    }

    /// The lifecycle phase recorded in the dataset.
    pub fn phase(&self) -> ReleasePhase {
        self.phase
    }

    /// The (scheduled or actual) end-of-life date.
    pub fn end_of_life(&self) -> NaiveDate {
        self.end_of_life
    }

    /// Whether this release is end-of-life.
    ///
    /// An explicit `end-of-life` phase always counts. When
    /// `use_current_date` is set, a release whose EOL date has already
    /// passed (UTC, day granularity) counts too, even if the dataset's
    /// phase field lags behind the calendar. Disabling the date check gives
    /// a reproducible, cache-only determination.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use eol_core::{PythonRelease, ReleasePhase};
    /// use pep440_rs::Version;
    /// use std::str::FromStr;
    ///
    /// let release = PythonRelease::new(
    ///     Version::from_str("3.7").unwrap(),
    ///     ReleasePhase::EndOfLife,
    ///     NaiveDate::from_ymd_opt(2023, 6, 27).unwrap(),
    /// );
    /// assert!(release.is_eol(false));
    /// assert!(release.is_eol(true));
    /// ```
    pub fn is_eol(&self, use_current_date: bool) -> bool {
        if self.phase == ReleasePhase::EndOfLife {
            return true;
        }

        use_current_date && self.end_of_life <= Utc::now().date_naive()
    }
}

impl fmt::Display for PythonRelease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Python {} - Status: {}, EOL: {}",
            self.version, self.phase, self.end_of_life
        )
    }
}
