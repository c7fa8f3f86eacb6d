//! Likert dimension normalization.
//!
//! Converts the raw answers given to one dimension into a count, an average
//! on the original scale and a 0-100 score. All scales are assumed to be
//! 1-based Likert scales (`1..=scale_max`).

use crate::answer::RawAnswer;
use crate::errors::{Result, ScoringError};
use crate::stats::round_to;
use serde::Serialize;

/// Usage frequency codes run from 0 (never) to this value.
pub const USAGE_FREQUENCY_MAX: f64 = 5.0;

/// Decimals kept for the mean on the original scale.
pub const AVERAGE_DECIMALS: u32 = 2;

/// Score of one dimension.
///
/// When no valid answers exist `score` is `None`, `count` is 0 and
/// `average` is 0. Callers treat `None` as "no data", not as a failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScore {
    pub name: String,
    /// 0-100, one decimal
    pub score: Option<f64>,
    pub count: usize,
    /// Mean on the original Likert scale, two decimals
    pub average: f64,
}

impl DimensionScore {
    fn no_data(name: &str) -> Self {
        Self {
            name: name.to_string(),
            score: None,
            count: 0,
            average: 0.0,
        }
    }
}

/// Normalize the answers of one dimension against a `1..=scale_max` scale.
///
/// Non-numeric and missing entries are dropped, not treated as zero.
///
/// # Errors
///
/// Returns [`ScoringError::InvalidScale`] when `scale_max` is not a finite
/// number greater than 1.
pub fn normalize(name: &str, responses: &[RawAnswer], scale_max: f64) -> Result<DimensionScore> {
    if !scale_max.is_finite() || scale_max <= 1.0 {
        return Err(ScoringError::InvalidScale(scale_max));
    }

    let valid: Vec<f64> = responses.iter().filter_map(RawAnswer::as_number).collect();
    if valid.is_empty() {
        return Ok(DimensionScore::no_data(name));
    }

    let average = valid.iter().sum::<f64>() / valid.len() as f64;
    let normalized = ((average - 1.0) / (scale_max - 1.0)) * 100.0;

    Ok(DimensionScore {
        name: name.to_string(),
        score: Some(round_to(normalized, 1)),
        count: valid.len(),
        average: round_to(average, AVERAGE_DECIMALS),
    })
}

/// Score of a usage construct ("Actual System Use" style questions).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageScore {
    pub name: String,
    /// Frequency code normalized to 0-100; `None` without a numeric code
    pub score: Option<f64>,
    pub count: usize,
    pub frequency: f64,
    /// Reported, never scored
    pub hours_per_week: f64,
}

/// Normalize a `[frequency code 0..5, hours per week]` usage answer.
///
/// Only the frequency code is scored. Hours are read leniently (numbers or
/// numeric strings) and rounded to one decimal; unreadable hours become 0.
pub fn normalize_usage(name: &str, usage: &[RawAnswer]) -> UsageScore {
    let hours_per_week = usage
        .get(1)
        .and_then(RawAnswer::parse_float)
        .map_or(0.0, |h| round_to(h, 1));

    match usage.first().and_then(RawAnswer::as_number) {
        Some(frequency) => UsageScore {
            name: name.to_string(),
            score: Some(round_to((frequency / USAGE_FREQUENCY_MAX) * 100.0, 1)),
            count: 1,
            frequency,
            hours_per_week,
        },
        None => UsageScore {
            name: name.to_string(),
            score: None,
            count: 0,
            frequency: 0.0,
            hours_per_week,
        },
    }
}
