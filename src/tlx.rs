//! NASA Task Load Index (raw TLX).
//!
//! Six subscales rated 0-100. Weighted TLX (pairwise comparisons) is not
//! collected, so the workload score is the unweighted mean of the answered
//! subscales.

use crate::aggregate::AggregateReport;
use crate::errors::{Result, ScoringError};
use crate::stats::{average_of, round_to, MEAN_DECIMALS};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

pub const RATING_MIN: f64 = 0.0;
pub const RATING_MAX: f64 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TlxSubscale {
    MentalDemand,
    PhysicalDemand,
    TemporalDemand,
    Performance,
    Effort,
    Frustration,
}

impl TlxSubscale {
    pub const ALL: [TlxSubscale; 6] = [
        Self::MentalDemand,
        Self::PhysicalDemand,
        Self::TemporalDemand,
        Self::Performance,
        Self::Effort,
        Self::Frustration,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::MentalDemand => "mentalDemand",
            Self::PhysicalDemand => "physicalDemand",
            Self::TemporalDemand => "temporalDemand",
            Self::Performance => "performance",
            Self::Effort => "effort",
            Self::Frustration => "frustration",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MentalDemand => "Mental Demand",
            Self::PhysicalDemand => "Physical Demand",
            Self::TemporalDemand => "Temporal Demand",
            Self::Performance => "Performance",
            Self::Effort => "Effort",
            Self::Frustration => "Frustration",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for TlxSubscale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum WorkloadLevel {
    Low,
    Medium,
    #[serde(rename = "Somewhat High")]
    SomewhatHigh,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl WorkloadLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::SomewhatHigh => "Somewhat High",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

impl fmt::Display for WorkloadLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Band a 0-100 workload score: Low 0-9, Medium 10-29, Somewhat High 30-49,
/// High 50-79, Very High 80-100.
pub fn workload_level(score: f64) -> WorkloadLevel {
    match score {
        s if s < 10.0 => WorkloadLevel::Low,
        s if s < 30.0 => WorkloadLevel::Medium,
        s if s < 50.0 => WorkloadLevel::SomewhatHigh,
        s if s < 80.0 => WorkloadLevel::High,
        _ => WorkloadLevel::VeryHigh,
    }
}

fn validate_rating(value: f64, subscale: TlxSubscale) -> Result<f64> {
    if value.is_nan() {
        return Err(ScoringError::not_a_number(subscale.key()));
    }
    if !(RATING_MIN..=RATING_MAX).contains(&value) {
        return Err(ScoringError::out_of_range(
            subscale.key(),
            value,
            RATING_MIN,
            RATING_MAX,
        ));
    }
    Ok(value)
}

/// One participant's NASA-TLX ratings. Unanswered subscales are `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "NasaTlxRecord", try_from = "Value")]
pub struct NasaTlxResponse {
    ratings: [Option<f64>; 6],
}

impl NasaTlxResponse {
    /// # Errors
    ///
    /// [`ScoringError::NotANumber`] or [`ScoringError::OutOfRange`] for a
    /// rating that is not in 0-100.
    pub fn new<I>(ratings: I) -> Result<Self>
    where
        I: IntoIterator<Item = (TlxSubscale, f64)>,
    {
        let mut response = Self::default();
        for (subscale, value) in ratings {
            response.ratings[subscale.index()] = Some(validate_rating(value, subscale)?);
        }
        Ok(response)
    }

    /// Parse a stored record; `null` and absent subscales are unanswered.
    pub fn from_record(record: &Value) -> Result<Self> {
        let map = match record {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(ScoringError::InvalidRecord(format!(
                    "NASA-TLX record must be an object, got {}",
                    other
                )))
            }
        };

        let mut response = Self::default();
        for subscale in TlxSubscale::ALL {
            match map.get(subscale.key()) {
                None | Some(Value::Null) => {}
                Some(Value::Number(n)) => {
                    let value = n.as_f64().unwrap_or(f64::NAN);
                    response.ratings[subscale.index()] = Some(validate_rating(value, subscale)?);
                }
                Some(_) => return Err(ScoringError::not_a_number(subscale.key())),
            }
        }
        Ok(response)
    }

    pub fn rating(&self, subscale: TlxSubscale) -> Option<f64> {
        self.ratings[subscale.index()]
    }

    pub fn answered(&self) -> usize {
        self.ratings.iter().flatten().count()
    }

    pub fn is_complete(&self) -> bool {
        self.answered() == TlxSubscale::ALL.len()
    }

    /// Unweighted mean of the answered subscales, one decimal.
    pub fn raw_tlx(&self) -> Option<f64> {
        let answered: Vec<f64> = self.ratings.iter().flatten().copied().collect();
        average_of(&answered).map(|m| round_to(m, MEAN_DECIMALS))
    }

    pub fn workload_level(&self) -> Option<WorkloadLevel> {
        self.raw_tlx().map(workload_level)
    }

    pub fn to_record(&self) -> NasaTlxRecord {
        (*self).into()
    }

    /// Scored view for reports.
    pub fn score(&self) -> TlxScore {
        TlxScore {
            ratings: self.to_record(),
            raw_tlx: self.raw_tlx(),
            workload_level: self.workload_level(),
            answered: self.answered(),
            is_complete: self.is_complete(),
        }
    }
}

/// Stored shape of a NASA-TLX answer. Unanswered subscales are `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NasaTlxRecord {
    pub mental_demand: Option<f64>,
    pub physical_demand: Option<f64>,
    pub temporal_demand: Option<f64>,
    pub performance: Option<f64>,
    pub effort: Option<f64>,
    pub frustration: Option<f64>,
}

impl From<NasaTlxResponse> for NasaTlxRecord {
    fn from(response: NasaTlxResponse) -> Self {
        let [mental_demand, physical_demand, temporal_demand, performance, effort, frustration] =
            response.ratings;
        Self {
            mental_demand,
            physical_demand,
            temporal_demand,
            performance,
            effort,
            frustration,
        }
    }
}

impl TryFrom<Value> for NasaTlxResponse {
    type Error = ScoringError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_record(&value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TlxScore {
    #[serde(flatten)]
    pub ratings: NasaTlxRecord,
    pub raw_tlx: Option<f64>,
    pub workload_level: Option<WorkloadLevel>,
    pub answered: usize,
    pub is_complete: bool,
}

/// Per-subscale means and a summary of raw TLX across respondents.
pub fn aggregate(responses: &[NasaTlxResponse]) -> AggregateReport<TlxSubscale> {
    log::debug!("Aggregating {} NASA-TLX responses", responses.len());

    let columns = TlxSubscale::ALL.into_iter().map(|subscale| {
        let values = responses
            .iter()
            .map(|r| r.rating(subscale).unwrap_or(f64::NAN))
            .collect();
        (subscale, values)
    });
    let overall: Vec<f64> = responses
        .iter()
        .map(|r| r.raw_tlx().unwrap_or(f64::NAN))
        .collect();

    AggregateReport::build(responses.len(), columns, &overall)
}
