//! Conformance levels — `AA` (minimum) and `AAA` (enhanced).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A WCAG/APCA conformance tier.
///
/// Parsing via [`FromStr`] is exact and case-sensitive, matching
/// [`is_valid_accessibility_level`](crate::is_valid_accessibility_level).
/// Case folding belongs to
/// [`sanitize_accessibility_level`](crate::sanitize_accessibility_level).
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Level {
    /// Minimum conformance.
    #[default]
    AA,
    /// Enhanced conformance.
    AAA,
}

impl Level {
    /// Both levels, weakest first.
    pub const ALL: [Self; 2] = [Self::AA, Self::AAA];

    /// Canonical uppercase name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AA => "AA",
            Self::AAA => "AAA",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Rejected level text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("unknown conformance level {0:?} (expected \"AA\" or \"AAA\")")]
    Unknown(String),
}

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AA" => Ok(Self::AA),
            "AAA" => Ok(Self::AAA),
            other => Err(LevelError::Unknown(other.to_owned())),
        }
    }
}
