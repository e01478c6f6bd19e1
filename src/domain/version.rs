use std::fmt;

use crate::domain::tag;
use crate::error::{BumpError, Result};

/// Semantic version carried by a version tag.
///
/// The default value is `v0.0.0`, the version published on the
/// first-release bootstrap path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub bugfix: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, bugfix: u64) -> Self {
        Version {
            major,
            minor,
            bugfix,
        }
    }

    /// Parse a version from a tag string (e.g. "v1.2.3" -> Version(1,2,3)).
    ///
    /// The tag must match the full version-tag format; anything else is a
    /// `VersionFormat` error. A component whose digits pass the format
    /// check but overflow `u64` surfaces the underlying conversion error.
    pub fn parse(tag: &str) -> Result<Self> {
        tag::validate_version_tag(tag)?;

        let digits = tag.strip_prefix('v').unwrap_or(tag);
        let mut parts = digits.split('.');

        let major = parts.next().unwrap_or("").parse()?;
        let minor = parts.next().unwrap_or("").parse()?;
        let bugfix = parts.next().unwrap_or("").parse()?;

        Ok(Version {
            major,
            minor,
            bugfix,
        })
    }

    /// Produce the version that follows this one for the given bump kind.
    pub fn bump(&self, kind: BumpKind) -> Self {
        match kind {
            BumpKind::Major => Version {
                major: self.major + 1,
                minor: 0,
                bugfix: 0,
            },
            BumpKind::Minor => Version {
                major: self.major,
                minor: self.minor + 1,
                bugfix: 0,
            },
            BumpKind::BugFix => Version {
                major: self.major,
                minor: self.minor,
                bugfix: self.bugfix + 1,
            },
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}.{}.{}", self.major, self.minor, self.bugfix)
    }
}

/// Which release component a bump increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    BugFix,
}

impl BumpKind {
    /// Resolve the bump kind from the two CLI flags.
    ///
    /// Both flags set is a user error; neither set means a bug-fix bump.
    pub fn from_flags(major: bool, minor: bool) -> Result<Self> {
        match (major, minor) {
            (true, true) => Err(BumpError::CannotIncrementMajAndMin),
            (true, false) => Ok(BumpKind::Major),
            (false, true) => Ok(BumpKind::Minor),
            (false, false) => Ok(BumpKind::BugFix),
        }
    }
}
