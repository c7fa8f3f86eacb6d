//! Population-level report shared by every instrument.

use crate::stats::{self, round_to, Extremes, Summary, MEAN_DECIMALS, STD_DEV_DECIMALS};
use serde::Serialize;
use std::collections::BTreeMap;

/// Statistics of one dimension across respondents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionAggregate {
    /// Respondents with a value for this dimension
    pub respondents: usize,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
}

impl DimensionAggregate {
    fn of(values: &[f64]) -> Self {
        Self {
            respondents: values.iter().filter(|v| v.is_finite()).count(),
            mean: stats::average_of(values).map(|m| round_to(m, MEAN_DECIMALS)),
            std_dev: stats::standard_deviation(values).map(|sd| round_to(sd, STD_DEV_DECIMALS)),
        }
    }
}

/// Read-only view over N responses of one instrument.
///
/// Recomputed from scratch on every call; nothing is maintained
/// incrementally.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateReport<K: Ord> {
    pub respondents: usize,
    pub dimensions: BTreeMap<K, DimensionAggregate>,
    /// Summary of each respondent's overall score
    pub overall: Summary,
}

impl<K: Ord + Clone> AggregateReport<K> {
    /// Build a report from per-dimension value columns and one overall
    /// value per respondent. Non-finite values count as "no answer".
    pub fn build<I>(respondents: usize, columns: I, overall: &[f64]) -> Self
    where
        I: IntoIterator<Item = (K, Vec<f64>)>,
    {
        let dimensions = columns
            .into_iter()
            .map(|(key, values)| (key, DimensionAggregate::of(&values)))
            .collect();
        Self {
            respondents,
            dimensions,
            overall: stats::summarize(overall),
        }
    }

    pub fn mean_of(&self, key: &K) -> Option<f64> {
        self.dimensions.get(key).and_then(|d| d.mean)
    }

    /// Highest- and lowest-scoring dimension by mean, in key order for ties.
    pub fn extremes(&self) -> Option<Extremes<K>> {
        let ranked: Vec<(K, f64)> = self
            .dimensions
            .iter()
            .filter_map(|(k, d)| d.mean.map(|m| (k.clone(), m)))
            .collect();
        stats::rank_extremes(&ranked)
    }
}
