//! Raw answer values as they arrive from stored response records.
//!
//! Stored records are loosely typed: an answer slot can hold a number, a
//! string typed into a free-text box, `null` for a question that was shown
//! but not answered, or anything else a client happened to write. Scoring
//! code decides per instrument how strict to be with each shape.

use serde::{Deserialize, Serialize};

/// One raw answer slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Number(f64),
    Text(String),
    /// A declared slot with no answer (`null`)
    Missing,
    Other(serde_json::Value),
}

impl RawAnswer {
    /// The value if this is a finite number. Strings are never coerced.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(v) if v.is_finite() => Some(*v),
            _ => None,
        }
    }

    /// Lenient numeric reading: numbers as-is, strings by their leading
    /// numeric prefix (`"10 hours"` reads as `10`).
    pub fn parse_float(&self) -> Option<f64> {
        match self {
            Self::Number(v) if v.is_finite() => Some(*v),
            Self::Text(s) => parse_leading_float(s),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }
}

fn parse_leading_float(s: &str) -> Option<f64> {
    let trimmed = s.trim_start();
    let candidate: &str = {
        let end = trimmed
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E')))
            .map_or(trimmed.len(), |(i, _)| i);
        &trimmed[..end]
    };

    (1..=candidate.len())
        .rev()
        .filter(|&end| candidate.is_char_boundary(end))
        .find_map(|end| candidate[..end].parse::<f64>().ok())
        .filter(|v| v.is_finite())
}

impl From<f64> for RawAnswer {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for RawAnswer {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for RawAnswer {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl<T: Into<RawAnswer>> From<Option<T>> for RawAnswer {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Build a `Vec<RawAnswer>` from mixed literals.
///
/// ```rust
/// use uxmetrics::answers;
/// use uxmetrics::answer::RawAnswer;
///
/// let row = answers![5, "10", None::<f64>];
/// assert_eq!(row[2], RawAnswer::Missing);
/// ```
#[macro_export]
macro_rules! answers {
    ($($value:expr),* $(,)?) => {
        vec![$($crate::answer::RawAnswer::from($value)),*]
    };
}
