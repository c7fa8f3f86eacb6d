//! Error types for instrument scoring.
//!
//! Two kinds of failure exist in this crate and they are kept apart:
//!
//! - **Hard failures** are represented by [`ScoringError`]: a raw score of the
//!   wrong type or outside its declared range, an unknown dimension key, an
//!   unsupported instrument version, an invalid Likert scale.
//! - **Absence of data** is never an error. Statistics that cannot be computed
//!   (no valid answers, fewer than two values for a deviation) are returned as
//!   `None` and flow through aggregation untouched.
//!
//! # Example
//!
//! ```rust
//! use uxmetrics::errors::ScoringError;
//!
//! let err = ScoringError::out_of_range("arousal", 9.0, 1.0, 7.0);
//! assert!(err.is_user_fixable());
//! assert_eq!(err.code(), "E020");
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scoring operations
#[derive(Debug, Error)]
pub enum ScoringError {
    /// A raw score was not a number (type error)
    #[error("Invalid score for {dimension}: must be a number")]
    NotANumber { dimension: String },

    /// A raw score fell outside the instrument's declared range
    #[error("Score {value} for {dimension} out of range. Must be between {min} and {max}")]
    OutOfRange {
        dimension: String,
        value: f64,
        min: f64,
        max: f64,
    },

    /// Interpretation was requested for a dimension that does not exist
    #[error("Unknown dimension: {0}")]
    UnknownDimension(String),

    /// An instrument version outside the supported set
    #[error("Unsupported TAM version: {0} (expected 1, 2 or 3)")]
    UnsupportedVersion(String),

    /// A Likert scale whose maximum cannot be normalized against
    #[error("Invalid Likert scale maximum {0}: must be a finite number greater than 1")]
    InvalidScale(f64),

    /// An operation that requires at least one response received none
    #[error("{0} requires at least one response")]
    EmptyInput(&'static str),

    /// A persisted record did not have the expected shape
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Configuration errors
    #[error(
        "Configuration error{}: {message}",
        path.as_ref().map(|p| format!(" in {}", p.display())).unwrap_or_default()
    )]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl ScoringError {
    pub fn not_a_number(dimension: impl Into<String>) -> Self {
        Self::NotANumber {
            dimension: dimension.into(),
        }
    }

    pub fn out_of_range(dimension: impl Into<String>, value: f64, min: f64, max: f64) -> Self {
        Self::OutOfRange {
            dimension: dimension.into(),
            value,
            min,
            max,
        }
    }

    /// Create a configuration error, optionally tied to the file it came from
    pub fn config(message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Config {
            message: message.into(),
            path,
        }
    }

    /// Stable error code for programmatic handling.
    ///
    /// - E01x: type errors
    /// - E02x: range errors
    /// - E03x: lookup errors
    /// - E04x: input shape errors
    /// - E05x: configuration and I/O
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotANumber { .. } => "E010",
            Self::OutOfRange { .. } => "E020",
            Self::InvalidScale(_) => "E021",
            Self::UnknownDimension(_) => "E030",
            Self::UnsupportedVersion(_) => "E031",
            Self::EmptyInput(_) => "E040",
            Self::InvalidRecord(_) => "E041",
            Self::Json(_) => "E042",
            Self::Config { .. } => "E050",
            Self::Io(_) => "E051",
        }
    }

    /// Whether the person supplying the data can fix this by correcting input.
    #[must_use]
    pub fn is_user_fixable(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, ScoringError>;
