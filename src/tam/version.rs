use crate::errors::ScoringError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// TAM instrument version.
///
/// Stored records carry the version as a bare number (`"tamVersion": 2`);
/// older exports use strings such as `"2"` or `"tam-2"`. All three forms
/// parse, anything else is rejected rather than silently defaulted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(try_from = "VersionRepr", into = "u8")]
pub enum TamVersion {
    #[default]
    V1,
    V2,
    V3,
}

impl TamVersion {
    pub const ALL: [TamVersion; 3] = [Self::V1, Self::V2, Self::V3];

    /// Parse a numeric version. Integral floats such as `2.0` are accepted.
    pub fn from_number(n: f64) -> Result<Self, ScoringError> {
        if n.fract() != 0.0 || !(0.0..=f64::from(u8::MAX)).contains(&n) {
            return Err(ScoringError::UnsupportedVersion(n.to_string()));
        }
        TamVersion::try_from(n as u8)
    }

    pub fn number(self) -> u8 {
        match self {
            Self::V1 => 1,
            Self::V2 => 2,
            Self::V3 => 3,
        }
    }
}

impl TryFrom<u8> for TamVersion {
    type Error = ScoringError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::V1),
            2 => Ok(Self::V2),
            3 => Ok(Self::V3),
            other => Err(ScoringError::UnsupportedVersion(other.to_string())),
        }
    }
}

impl From<TamVersion> for u8 {
    fn from(version: TamVersion) -> u8 {
        version.number()
    }
}

impl FromStr for TamVersion {
    type Err = ScoringError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("tam-")
            .or_else(|| trimmed.strip_prefix("TAM-"))
            .unwrap_or(trimmed);
        digits
            .parse::<u8>()
            .map_err(|_| ScoringError::UnsupportedVersion(s.to_string()))
            .and_then(TamVersion::try_from)
    }
}

impl fmt::Display for TamVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TAM-{}", self.number())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum VersionRepr {
    Number(f64),
    Text(String),
}

impl TryFrom<VersionRepr> for TamVersion {
    type Error = ScoringError;

    fn try_from(repr: VersionRepr) -> Result<Self, Self::Error> {
        match repr {
            VersionRepr::Number(n) => TamVersion::from_number(n),
            VersionRepr::Text(s) => s.parse(),
        }
    }
}
