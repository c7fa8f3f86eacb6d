//! Scoring of a single TAM response.

use super::dimensions::TamDimension;
use super::interpretation::{interpret_score, AcceptanceLevel};
use super::response::TamResponse;
use super::version::TamVersion;
use crate::answer::RawAnswer;
use crate::config::TamScales;
use crate::errors::Result;
use crate::normalizer::{normalize, normalize_usage, DimensionScore, UsageScore};
use crate::stats::{average_of, round_to, MEAN_DECIMALS};
use serde::Serialize;
use std::collections::BTreeMap;

/// Result for one construct: a Likert score or a usage score.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum TamDimensionResult {
    Likert(DimensionScore),
    Usage(UsageScore),
}

impl TamDimensionResult {
    /// 0-100 score, `None` without data
    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Likert(d) => d.score,
            Self::Usage(u) => u.score,
        }
    }

    /// Mean answer on the original Likert scale. Usage constructs have none.
    pub fn raw_average(&self) -> Option<f64> {
        match self {
            Self::Likert(d) if d.count > 0 => Some(d.average),
            _ => None,
        }
    }

    pub fn count(&self) -> usize {
        match self {
            Self::Likert(d) => d.count,
            Self::Usage(u) => u.count,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Likert(d) => &d.name,
            Self::Usage(u) => &u.name,
        }
    }
}

/// How much of the questionnaire was answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Completion {
    /// Declared answer slots of the version's constructs, answered or not
    pub total_items: usize,
    /// Slots holding a number
    pub completed_items: usize,
    /// Whole percent, 0 when nothing was declared
    pub percentage: u32,
    pub is_complete: bool,
}

impl Completion {
    fn count(response: &TamResponse, version: TamVersion) -> Self {
        let (total_items, completed_items) = version
            .dimensions()
            .iter()
            .filter_map(|&dim| response.answers(dim).map(|items| slots(dim, items)))
            .fold((0, 0), |(total, done), (t, d)| (total + t, done + d));

        let percentage = if total_items == 0 {
            0
        } else {
            round_to(completed_items as f64 / total_items as f64 * 100.0, 0) as u32
        };

        Self {
            total_items,
            completed_items,
            percentage,
            is_complete: total_items > 0 && completed_items == total_items,
        }
    }
}

/// (declared, answered) slots of one construct. Usage constructs only count
/// their frequency slot; hours per week is free text.
fn slots(dimension: TamDimension, items: &[RawAnswer]) -> (usize, usize) {
    if dimension.is_usage() {
        let answered = items.first().and_then(RawAnswer::as_number).is_some();
        (usize::from(!items.is_empty()), usize::from(answered))
    } else {
        let answered = items.iter().filter(|a| a.as_number().is_some()).count();
        (items.len(), answered)
    }
}

/// Scores of one TAM response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TamAnalysis {
    pub version: TamVersion,
    /// Constructs of the version present in the response
    pub dimensions: BTreeMap<TamDimension, TamDimensionResult>,
    /// Mean of the dimension scores with data, clamped to 0-100
    pub overall_score: Option<f64>,
    pub completion: Completion,
}

impl TamAnalysis {
    pub fn score_of(&self, dimension: TamDimension) -> Option<f64> {
        self.dimensions.get(&dimension).and_then(TamDimensionResult::score)
    }

    pub fn raw_average_of(&self, dimension: TamDimension) -> Option<f64> {
        self.dimensions
            .get(&dimension)
            .and_then(TamDimensionResult::raw_average)
    }

    pub fn acceptance_level(&self) -> Option<AcceptanceLevel> {
        self.overall_score.map(AcceptanceLevel::from_score)
    }

    pub fn interpretation(&self) -> &'static str {
        interpret_score(self.overall_score)
    }
}

/// Analyze a response with the default scale widths.
pub fn analyze(response: &TamResponse) -> Result<TamAnalysis> {
    analyze_with(response, &TamScales::default())
}

/// Analyze a response.
///
/// Constructs the response's version does not ask about are ignored, and
/// constructs missing from the response are left out of the result rather
/// than scored as zero.
///
/// # Errors
///
/// [`crate::errors::ScoringError::InvalidScale`] when the configured scale
/// for the version cannot be normalized against.
pub fn analyze_with(response: &TamResponse, scales: &TamScales) -> Result<TamAnalysis> {
    analyze_as(response, response.version(), scales)
}

/// Analyze a response against the constructs of `version`, whatever version
/// the response itself declares.
pub(crate) fn analyze_as(
    response: &TamResponse,
    version: TamVersion,
    scales: &TamScales,
) -> Result<TamAnalysis> {
    let scale_max = scales.scale_for(version);

    let mut dimensions = BTreeMap::new();
    for &dim in version.dimensions() {
        let Some(items) = response.answers(dim) else {
            continue;
        };
        let result = if dim.is_usage() {
            TamDimensionResult::Usage(normalize_usage(dim.name(), items))
        } else {
            TamDimensionResult::Likert(normalize(dim.name(), items, scale_max)?)
        };
        dimensions.insert(dim, result);
    }

    for (dim, _) in response.answered() {
        if !dimensions.contains_key(&dim) {
            log::debug!("{} is not part of {}; ignoring its answers", dim, version);
        }
    }

    let scores: Vec<f64> = dimensions
        .values()
        .filter_map(TamDimensionResult::score)
        .collect();
    let overall_score =
        average_of(&scores).map(|mean| round_to(mean, MEAN_DECIMALS).clamp(0.0, 100.0));

    Ok(TamAnalysis {
        version,
        dimensions,
        overall_score,
        completion: Completion::count(response, version),
    })
}
