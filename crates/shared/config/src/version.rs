use serde::Serialize;
use std::fmt;

/// Whether a build is production-ready or meant for testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildKind {
    /// Production build (release flag `0`).
    Release,
    /// Test or debug build (release flag `1`).
    Test,
}

impl BuildKind {
    /// Maps the numeric release flag to a build kind; anything but `0` or `1` is rejected.
    #[must_use]
    pub const fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(Self::Release),
            1 => Some(Self::Test),
            _ => None,
        }
    }

    #[must_use]
    pub const fn flag(self) -> u8 {
        match self {
            Self::Release => 0,
            Self::Test => 1,
        }
    }

    #[must_use]
    pub const fn is_release(self) -> bool {
        matches!(self, Self::Release)
    }
}

/// Software version fixed at build time.
///
/// Renders as `X.Y.Z` for release builds and `X.Y.Z-test` for test builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub build: BuildKind,
}

impl Version {
    #[must_use]
    pub const fn new(major: u32, minor: u32, patch: u32, build: BuildKind) -> Self {
        Self { major, minor, patch, build }
    }

    /// Shorthand for a [`BuildKind::Release`] version.
    #[must_use]
    pub const fn release(major: u32, minor: u32, patch: u32) -> Self {
        Self::new(major, minor, patch, BuildKind::Release)
    }

    /// Numeric release flag: `0` for release, `1` for test builds.
    #[must_use]
    pub const fn release_flag(&self) -> u8 {
        self.build.flag()
    }

    /// The identity line reported by diagnostics, e.g. `Version: 1.2.0-test`.
    #[must_use]
    pub fn label(&self) -> String {
        format!("Version: {self}")
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)?;
        if self.build == BuildKind::Test {
            f.write_str("-test")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_maps_both_ways() {
        for kind in [BuildKind::Release, BuildKind::Test] {
            assert_eq!(BuildKind::from_flag(kind.flag()), Some(kind));
        }
        assert_eq!(BuildKind::from_flag(2), None);
    }

    #[test]
    fn display_has_no_padding() {
        assert_eq!(Version::release(10, 0, 7).to_string(), "10.0.7");
        assert_eq!(Version::new(0, 0, 0, BuildKind::Test).to_string(), "0.0.0-test");
    }
}
