//! SART statistics across many respondents.

use super::dimensions::{SartCategory, SartDimension};
use super::response::SartResponse;
use crate::aggregate::AggregateReport;
use crate::errors::{Result, ScoringError};
use crate::stats::{average_of, round_to, standard_deviation, MEAN_DECIMALS};
use serde::Serialize;
use std::collections::BTreeMap;

fn column(responses: &[SartResponse], dimension: SartDimension) -> Vec<f64> {
    responses
        .iter()
        .map(|r| f64::from(r.score(dimension)))
        .collect()
}

/// A synthetic response holding each dimension's mean, rounded to one
/// decimal and then validated like any other response (so rounded to an
/// integer score).
///
/// # Errors
///
/// [`ScoringError::EmptyInput`] when `responses` is empty.
pub fn average_response(responses: &[SartResponse]) -> Result<SartResponse> {
    if responses.is_empty() {
        return Err(ScoringError::EmptyInput("Averaging SART responses"));
    }
    let means = SartDimension::ALL.into_iter().map(|dim| {
        let mean = average_of(&column(responses, dim)).unwrap_or(f64::NAN);
        (dim, round_to(mean, MEAN_DECIMALS))
    });
    SartResponse::new(means)
}

/// Population standard deviation of each dimension, one decimal.
///
/// Empty when fewer than two responses are given.
pub fn dimension_standard_deviations(responses: &[SartResponse]) -> BTreeMap<SartDimension, f64> {
    if responses.len() < 2 {
        return BTreeMap::new();
    }
    SartDimension::ALL
        .into_iter()
        .filter_map(|dim| {
            standard_deviation(&column(responses, dim))
                .map(|sd| (dim, round_to(sd, 1)))
        })
        .collect()
}

/// Dashboard-level SART statistics.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SartAnalytics {
    pub total_respondents: usize,
    pub average_sa_score: Option<f64>,
    pub average_demand: Option<f64>,
    pub average_supply: Option<f64>,
    pub average_understanding: Option<f64>,
    pub highest_sa_dimension: Option<SartDimension>,
    pub lowest_sa_dimension: Option<SartDimension>,
    /// Per-dimension raw-score statistics and SA-score summary
    pub report: AggregateReport<SartDimension>,
}

fn category_mean(responses: &[SartResponse], pick: impl Fn(&SartResponse) -> f64) -> Option<f64> {
    let values: Vec<f64> = responses.iter().map(pick).collect();
    average_of(&values).map(|m| round_to(m, MEAN_DECIMALS))
}

/// Compute SART analytics for a set of responses.
///
/// An empty slice yields zero respondents and `None` for every statistic.
pub fn analyze_responses(responses: &[SartResponse]) -> SartAnalytics {
    log::debug!("Aggregating {} SART responses", responses.len());

    let sa_scores: Vec<f64> = responses.iter().map(|r| f64::from(r.sa_score())).collect();
    let report = AggregateReport::build(
        responses.len(),
        SartDimension::ALL
            .into_iter()
            .map(|dim| (dim, column(responses, dim))),
        &sa_scores,
    );
    let extremes = report.extremes();

    SartAnalytics {
        total_respondents: responses.len(),
        average_sa_score: report.overall.mean,
        average_demand: category_mean(responses, |r| f64::from(r.demand())),
        average_supply: category_mean(responses, |r| f64::from(r.supply())),
        average_understanding: category_mean(responses, |r| f64::from(r.understanding())),
        highest_sa_dimension: extremes.as_ref().map(|e| e.highest),
        lowest_sa_dimension: extremes.as_ref().map(|e| e.lowest),
        report,
    }
}

impl SartAnalytics {
    /// Mean category average (1-7 scale) of a category across respondents.
    pub fn category_mean(&self, category: SartCategory) -> Option<f64> {
        let means: Vec<f64> = category
            .dimensions()
            .filter_map(|d| self.report.mean_of(&d))
            .collect();
        average_of(&means).map(|m| round_to(m, MEAN_DECIMALS))
    }
}
