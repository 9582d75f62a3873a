//! The version value type: formatting, precedence and equality.
//!
//! `less` uses build metadata as the final tiebreak while `equal` ignores it,
//! so two versions differing only in build are `equal` yet one is `less`
//! than the other. Callers depend on this ordering; keep both as they are.

use serde::{Deserialize, Serialize};

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ParseError;
use crate::parser::parse_version;
use crate::precedence::{identifiers_equal, identifiers_less};

/// A parsed version. `None` for prerelease or build means the section was
/// absent, which is not the same as present and empty.
///
/// The derived `PartialEq` is structural; use [`Version::equal`] for semver
/// equality and [`Version::less`] or [`Version::precedence`] for ordering.
#[derive(Eq, PartialEq, Hash, Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub prerelease: Option<Vec<String>>,
    pub build: Option<Vec<String>>,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
            prerelease: None,
            build: None,
        }
    }

    /// Identifiers are taken as given; only [`Version::parse`] validates them.
    pub fn with_prerelease<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerelease = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_build<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.build = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_version(input)
    }

    pub fn is_prerelease(&self) -> bool {
        self.prerelease.is_some()
    }

    /// Whether `self` comes strictly before `other`. Decided by major, minor
    /// and patch, then prerelease (a release outranks any of its
    /// prereleases), then build identifiers.
    pub fn less(&self, other: &Version) -> bool {
        if self.major != other.major {
            return self.major < other.major;
        }
        if self.minor != other.minor {
            return self.minor < other.minor;
        }
        if self.patch != other.patch {
            return self.patch < other.patch;
        }

        let (pre, other_pre) = (self.prerelease_ids(), other.prerelease_ids());
        if !identifiers_equal(pre, other_pre) {
            return match (&self.prerelease, &other.prerelease) {
                (Some(_), None) => true,
                (None, Some(_)) => false,
                _ => identifiers_less(pre, other_pre),
            };
        }

        let (build, other_build) = (self.build_ids(), other.build_ids());
        if !identifiers_equal(build, other_build) {
            return identifiers_less(build, other_build);
        }

        false
    }

    /// Semver equality: core numbers and prerelease. Build is ignored.
    /// Prerelease identifiers compare by precedence rather than byte for
    /// byte, so `rc.007` equals `rc.7`.
    pub fn equal(&self, other: &Version) -> bool {
        self.major == other.major
            && self.minor == other.minor
            && self.patch == other.patch
            && identifiers_equal(self.prerelease_ids(), other.prerelease_ids())
    }

    /// Total precedence derived from [`Version::less`] in both directions,
    /// for use with `sort_by` and friends.
    pub fn precedence(&self, other: &Version) -> Ordering {
        if self.less(other) {
            Ordering::Less
        } else if other.less(self) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn prerelease_ids(&self) -> &[String] {
        self.prerelease.as_deref().unwrap_or_default()
    }

    fn build_ids(&self) -> &[String] {
        self.build.as_deref().unwrap_or_default()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if let Some(prerelease) = &self.prerelease {
            write!(f, "-{}", prerelease.join("."))?;
        }
        if let Some(build) = &self.build {
            write!(f, "+{}", build.join("."))?;
        }

        Ok(())
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

impl TryFrom<String> for Version {
    type Error = ParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        parse_version(&s)
    }
}

impl From<Version> for String {
    fn from(version: Version) -> Self {
        version.to_string()
    }
}
