use crate::error::{ReleaseError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Version assumed when the repository has neither a release nor a tag
pub const BASELINE_VERSION: &str = "0.0.0";

const SEMVER_PATTERN: &str = r"^(\d+)\.(\d+)\.(\d+)$";

/// Semantic version representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version string, accepting one optional leading 'v'
    /// ("v1.2.3" -> Version(1,2,3)). Pre-release and build metadata are rejected.
    pub fn parse(input: &str) -> Result<Self> {
        let clean = input.strip_prefix('v').unwrap_or(input);

        let captures = Regex::new(SEMVER_PATTERN)
            .ok()
            .and_then(|re| re.captures(clean))
            .ok_or_else(|| ReleaseError::version(input))?;

        let component = |index: usize| -> Result<u64> {
            captures[index].parse::<u64>().map_err(|_| {
                ReleaseError::version(format!("{} (component {} out of range)", input, index))
            })
        };

        Ok(Version {
            major: component(1)?,
            minor: component(2)?,
            patch: component(3)?,
        })
    }

    /// Bump version according to bump type.
    ///
    /// Fails when the incremented component would exceed `u64::MAX`.
    pub fn bump(&self, bump_type: VersionBump) -> Result<Self> {
        let next = |component: u64| -> Result<u64> {
            component.checked_add(1).ok_or_else(|| {
                ReleaseError::version(format!("{} ({} component overflows)", self, bump_type))
            })
        };

        Ok(match bump_type {
            VersionBump::Major => Version {
                major: next(self.major)?,
                minor: 0,
                patch: 0,
            },
            VersionBump::Minor => Version {
                major: self.major,
                minor: next(self.minor)?,
                patch: 0,
            },
            VersionBump::Patch => Version {
                major: self.major,
                minor: self.minor,
                patch: next(self.patch)?,
            },
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Which component of the version to increment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VersionBump {
    Major,
    Minor,
    #[default]
    Patch,
}

impl FromStr for VersionBump {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "major" => Ok(VersionBump::Major),
            "minor" => Ok(VersionBump::Minor),
            "patch" => Ok(VersionBump::Patch),
            other => Err(ReleaseError::config(format!(
                "Unknown increment '{}' - expected major, minor or patch",
                other
            ))),
        }
    }
}

impl fmt::Display for VersionBump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VersionBump::Major => "major",
            VersionBump::Minor => "minor",
            VersionBump::Patch => "patch",
        };
        f.write_str(name)
    }
}

/// Parses `current` and returns the next version for the given increment.
///
/// # Example
/// ```
/// use gh_release_cut::domain::{increment_version, Version, VersionBump};
///
/// let next = increment_version("v2.3.4", VersionBump::Minor).unwrap();
/// assert_eq!(next, Version::new(2, 4, 0));
/// assert!(increment_version("1.2.3-beta", VersionBump::Patch).is_err());
/// ```
pub fn increment_version(current: &str, bump_type: VersionBump) -> Result<Version> {
    Version::parse(current)?.bump(bump_type)
}
