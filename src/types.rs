#![forbid(unsafe_code)]

//! Core domain types for bumpver
//!
//! `Version` is the strict MAJOR.MINOR.PATCH triple, `BumpKind` selects the
//! component to increment, and `PackageName` identifies the lockfile entry
//! kept in sync with the manifest.

use crate::error::VersionError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static VERSION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)\.([0-9]+)\.([0-9]+)$").expect("version pattern is valid")
});

/// Which version component to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl BumpKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BumpKind::Major => "major",
            BumpKind::Minor => "minor",
            BumpKind::Patch => "patch",
        }
    }
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BumpKind {
    type Err = VersionError;

    /// Parses a bump kind, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "major" => Ok(BumpKind::Major),
            "minor" => Ok(BumpKind::Minor),
            "patch" => Ok(BumpKind::Patch),
            _ => Err(VersionError::InvalidBumpKind(s.to_string())),
        }
    }
}

/// A strict semantic version without pre-release or build metadata
///
/// Components are unbounded in the text format but stored as `u64`; a
/// component that does not fit is rejected as an invalid format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Returns the next version for `kind`
    ///
    /// Lower-order components reset to zero: a major bump zeroes minor and
    /// patch, a minor bump zeroes patch.
    pub fn bump(&self, kind: BumpKind) -> Result<Version, VersionError> {
        let overflow = |component| VersionError::ComponentOverflow {
            component,
            version: self.to_string(),
        };

        let next = match kind {
            BumpKind::Major => Version::new(
                self.major.checked_add(1).ok_or_else(|| overflow("major"))?,
                0,
                0,
            ),
            BumpKind::Minor => Version::new(
                self.major,
                self.minor.checked_add(1).ok_or_else(|| overflow("minor"))?,
                0,
            ),
            BumpKind::Patch => Version::new(
                self.major,
                self.minor,
                self.patch.checked_add(1).ok_or_else(|| overflow("patch"))?,
            ),
        };
        Ok(next)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    /// Parses `MAJOR.MINOR.PATCH`, ignoring surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || VersionError::InvalidFormat(s.to_string());

        let caps = VERSION_PATTERN.captures(s.trim()).ok_or_else(invalid)?;
        let component = |i: usize| caps[i].parse::<u64>().map_err(|_| invalid());

        Ok(Version::new(component(1)?, component(2)?, component(3)?))
    }
}

/// Computes the bumped version string for `current` and a textual `kind`
///
/// This is the string-in, string-out form used by the command layer.
pub fn bump(current: &str, kind: &str) -> Result<String, VersionError> {
    let version: Version = current.parse()?;
    let kind: BumpKind = kind.parse()?;
    Ok(version.bump(kind)?.to_string())
}

/// A validated package name as it appears in `name = "..."` lines
///
/// Names must be non-empty and contain only alphanumeric characters,
/// hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    /// Creates a new PackageName, returning None for invalid input
    pub fn new(name: impl Into<String>) -> Option<Self> {
        let name = name.into();
        if name.is_empty() {
            return None;
        }
        if !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(PackageName(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PackageName {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        PackageName::new(value.clone()).ok_or_else(|| format!("Invalid package name '{}'", value))
    }
}

impl From<PackageName> for String {
    fn from(name: PackageName) -> Self {
        name.0
    }
}
