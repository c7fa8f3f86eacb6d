//! Response-pattern checks that flag careless or automated answers.

use super::dimensions::{SCORE_MAX, SCORE_MIN};
use super::response::SartResponse;
use crate::config::QualityThresholds;
use crate::stats::population_variance;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityRating {
    Incomplete,
    /// All 1s or all 7s
    SuspiciousExtreme,
    /// Every dimension has the same score
    SuspiciousUniform,
    /// Two values alternating across the form
    SuspiciousPattern,
    LowVariance,
    HighVariance,
    Good,
}

impl QualityRating {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::SuspiciousExtreme => "suspicious_extreme",
            Self::SuspiciousUniform => "suspicious_uniform",
            Self::SuspiciousPattern => "suspicious_pattern",
            Self::LowVariance => "low_variance",
            Self::HighVariance => "high_variance",
            Self::Good => "good",
        }
    }

    pub fn is_suspicious(self) -> bool {
        matches!(
            self,
            Self::SuspiciousExtreme | Self::SuspiciousUniform | Self::SuspiciousPattern
        )
    }
}

impl fmt::Display for QualityRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_alternating(scores: &[u8]) -> bool {
    scores.len() > 2
        && scores
            .iter()
            .enumerate()
            .all(|(i, s)| *s == scores[i % 2])
}

/// Classify a response pattern. Checks run in priority order and the first
/// match wins.
pub fn rate_scores(scores: &[u8], complete: bool, thresholds: &QualityThresholds) -> QualityRating {
    if !complete || scores.is_empty() {
        return QualityRating::Incomplete;
    }
    if scores.iter().all(|s| *s == SCORE_MIN) || scores.iter().all(|s| *s == SCORE_MAX) {
        return QualityRating::SuspiciousExtreme;
    }
    if scores.iter().all(|s| *s == scores[0]) {
        return QualityRating::SuspiciousUniform;
    }
    if is_alternating(scores) {
        return QualityRating::SuspiciousPattern;
    }

    let values: Vec<f64> = scores.iter().map(|s| f64::from(*s)).collect();
    match population_variance(&values) {
        Some(v) if v < thresholds.low_variance => QualityRating::LowVariance,
        Some(v) if v > thresholds.high_variance => QualityRating::HighVariance,
        _ => QualityRating::Good,
    }
}

impl SartResponse {
    pub fn quality_rating(&self) -> QualityRating {
        self.quality_rating_with(&QualityThresholds::default())
    }

    pub fn quality_rating_with(&self, thresholds: &QualityThresholds) -> QualityRating {
        rate_scores(&self.raw_scores(), self.is_complete(), thresholds)
    }
}
