//! Cross-respondent statistics shared by every instrument.
//!
//! Both the SART and TAM reporting paths go through these functions so that
//! rounding and the handling of missing data never diverge between them.
//!
//! Every function excludes non-finite values before doing any math, so a
//! single "no data" entry never poisons a batch. Results that cannot be
//! computed are `None`:
//!
//! | function | `None` when |
//! |---|---|
//! | [`average_of`] | no finite values |
//! | [`population_variance`] | no finite values |
//! | [`standard_deviation`] | fewer than two finite values |
//! | [`rank_extremes`] | no finite values |

use serde::Serialize;

/// Decimal places used for reported means.
pub const MEAN_DECIMALS: u32 = 1;

/// Decimal places used for reported standard deviations.
pub const STD_DEV_DECIMALS: u32 = 2;

/// Round half toward positive infinity, matching the rounding used by the
/// stored records (`-2.5` rounds to `-2`, `2.5` to `3`).
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor + 0.5).floor() / factor
}

fn finite(values: &[f64]) -> impl Iterator<Item = f64> + '_ {
    values.iter().copied().filter(|v| v.is_finite())
}

/// Arithmetic mean of the finite values.
pub fn average_of(values: &[f64]) -> Option<f64> {
    let (sum, count) = finite(values).fold((0.0, 0usize), |(s, c), v| (s + v, c + 1));
    (count > 0).then(|| sum / count as f64)
}

/// Population variance (divide by N) of the finite values.
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let mean = average_of(values)?;
    let valid: Vec<f64> = finite(values).collect();
    let squared = valid.iter().map(|v| (v - mean).powi(2)).sum::<f64>();
    Some(squared / valid.len() as f64)
}

/// Population standard deviation (divide by N), unrounded.
///
/// Undefined for fewer than two finite values.
pub fn standard_deviation(values: &[f64]) -> Option<f64> {
    if finite(values).count() < 2 {
        return None;
    }
    population_variance(values).map(f64::sqrt)
}

/// Smallest and largest finite value.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    finite(values).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Population-level summary of one statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    /// Number of finite values that contributed
    pub count: usize,
    pub mean: Option<f64>,
    pub std_dev: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Summary {
    pub fn empty() -> Self {
        Self {
            count: 0,
            mean: None,
            std_dev: None,
            min: None,
            max: None,
        }
    }
}

/// Summarize a batch: mean rounded to [`MEAN_DECIMALS`], deviation to
/// [`STD_DEV_DECIMALS`]. Min and max are reported as-is.
pub fn summarize(values: &[f64]) -> Summary {
    let bounds = min_max(values);
    Summary {
        count: finite(values).count(),
        mean: average_of(values).map(|m| round_to(m, MEAN_DECIMALS)),
        std_dev: standard_deviation(values).map(|sd| round_to(sd, STD_DEV_DECIMALS)),
        min: bounds.map(|(lo, _)| lo),
        max: bounds.map(|(_, hi)| hi),
    }
}

/// Highest and lowest entry of a ranking.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Extremes<K> {
    pub highest: K,
    pub lowest: K,
}

/// Rank entries by value, descending, keeping source order among ties.
///
/// The highest entry is the first maximum in source order and the lowest is
/// the last minimum, which is what a stable descending sort yields at its two
/// ends. Entries with non-finite values are skipped.
pub fn rank_extremes<K: Clone>(entries: &[(K, f64)]) -> Option<Extremes<K>> {
    let mut ranked: Vec<&(K, f64)> = entries.iter().filter(|(_, v)| v.is_finite()).collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    let highest = ranked.first()?.0.clone();
    let lowest = ranked.last()?.0.clone();
    Some(Extremes { highest, lowest })
}
