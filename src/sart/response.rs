//! The SART response value type.
//!
//! A [`SartResponse`] holds the ten validated raw scores of one participant
//! for one task. It is immutable: derived scores are computed once at
//! construction and [`SartResponse::update`] returns a new value.

use super::dimensions::{SartCategory, SartDimension, SCORE_DEFAULT, SCORE_MAX, SCORE_MIN};
use super::legacy::remap_legacy_fields;
use crate::errors::{Result, ScoringError};
use crate::stats::round_to;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

pub const RECORD_VERSION: &str = "2.0";
pub const CALCULATION_METHOD: &str = "sart-10d";

/// Category sums and the composite situation-awareness score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedScores {
    /// instability + complexity + variability, in [3, 21]
    pub demand: u8,
    /// arousal + concentration + division + spareCapacity, in [4, 28]
    pub supply: u8,
    /// informationQuantity + informationQuality + familiarity, in [3, 21]
    pub understanding: u8,
    /// understanding - demand + supply
    pub sa_score: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SartMetadata {
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default = "default_calculation_method")]
    pub calculation_method: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

fn default_version() -> String {
    RECORD_VERSION.to_string()
}

fn default_calculation_method() -> String {
    CALCULATION_METHOD.to_string()
}

impl Default for SartMetadata {
    fn default() -> Self {
        Self {
            version: default_version(),
            calculation_method: default_calculation_method(),
            extra: BTreeMap::new(),
        }
    }
}

/// Validate one raw score: must be a number in `[1, 7]`; fractional values
/// are rounded half-up after the range check.
pub fn validate_dimension_score(value: f64, dimension: SartDimension) -> Result<u8> {
    if value.is_nan() {
        return Err(ScoringError::not_a_number(dimension.key()));
    }
    let (min, max) = (f64::from(SCORE_MIN), f64::from(SCORE_MAX));
    if value < min || value > max {
        return Err(ScoringError::out_of_range(dimension.key(), value, min, max));
    }
    Ok(round_to(value, 0) as u8)
}

fn validate_json_score(value: &Value, dimension: SartDimension) -> Result<u8> {
    match value.as_f64() {
        Some(v) => validate_dimension_score(v, dimension),
        None => Err(ScoringError::not_a_number(dimension.key())),
    }
}

/// One participant's SART answer for one task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "SartRecord", try_from = "Value")]
pub struct SartResponse {
    scores: [u8; 10],
    derived: DerivedScores,
    timestamp: DateTime<Utc>,
    metadata: SartMetadata,
}

impl Default for SartResponse {
    fn default() -> Self {
        Self::from_validated([SCORE_DEFAULT; 10], Utc::now(), SartMetadata::default())
    }
}

impl SartResponse {
    /// Build a response from explicit dimension values. Dimensions not
    /// listed default to the scale midpoint.
    ///
    /// # Errors
    ///
    /// [`ScoringError::NotANumber`] for NaN input and
    /// [`ScoringError::OutOfRange`] for values outside `[1, 7]`.
    pub fn new<I>(values: I) -> Result<Self>
    where
        I: IntoIterator<Item = (SartDimension, f64)>,
    {
        let scores = apply_updates([SCORE_DEFAULT; 10], values)?;
        Ok(Self::from_validated(scores, Utc::now(), SartMetadata::default()))
    }

    /// Rebuild a response from a stored record.
    ///
    /// Legacy field names are remapped first, absent dimensions default to
    /// the midpoint, then every dimension is validated. Stored derived
    /// scores are ignored and recomputed. A `null` record yields the
    /// all-midpoint response.
    pub fn from_record(record: &Value) -> Result<Self> {
        let map = match record {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => remap_legacy_fields(map.clone()),
            other => {
                return Err(ScoringError::InvalidRecord(format!(
                    "SART record must be an object, got {}",
                    json_kind(other)
                )))
            }
        };

        let mut scores = [SCORE_DEFAULT; 10];
        for dim in SartDimension::ALL {
            if let Some(value) = map.get(dim.key()) {
                scores[dim.index()] = validate_json_score(value, dim)?;
            }
        }

        Ok(Self::from_validated(
            scores,
            read_timestamp(&map),
            read_metadata(&map),
        ))
    }

    fn from_validated(scores: [u8; 10], timestamp: DateTime<Utc>, metadata: SartMetadata) -> Self {
        Self {
            scores,
            derived: calculate_derived_scores(&scores),
            timestamp,
            metadata,
        }
    }

    /// Replace the timestamp, mainly for reproducible records.
    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// A new response with the given dimensions replaced and every derived
    /// score recomputed. `self` is left untouched.
    pub fn update<I>(&self, updates: I) -> Result<Self>
    where
        I: IntoIterator<Item = (SartDimension, f64)>,
    {
        let scores = apply_updates(self.scores, updates)?;
        Ok(Self::from_validated(
            scores,
            self.timestamp,
            self.metadata.clone(),
        ))
    }

    /// Recompute the derived scores from the raw scores.
    ///
    /// Pure; always equal to the values computed at construction.
    pub fn calculate_derived_scores(&self) -> DerivedScores {
        calculate_derived_scores(&self.scores)
    }

    pub fn score(&self, dimension: SartDimension) -> u8 {
        self.scores[dimension.index()]
    }

    /// All raw scores in canonical dimension order.
    pub fn scores(&self) -> impl Iterator<Item = (SartDimension, u8)> + '_ {
        SartDimension::ALL.into_iter().map(|d| (d, self.score(d)))
    }

    pub fn raw_scores(&self) -> [u8; 10] {
        self.scores
    }

    pub fn derived(&self) -> DerivedScores {
        self.derived
    }

    pub fn demand(&self) -> u8 {
        self.derived.demand
    }

    pub fn supply(&self) -> u8 {
        self.derived.supply
    }

    pub fn understanding(&self) -> u8 {
        self.derived.understanding
    }

    pub fn sa_score(&self) -> i16 {
        self.derived.sa_score
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn metadata(&self) -> &SartMetadata {
        &self.metadata
    }

    pub fn scores_by_category(&self, category: SartCategory) -> BTreeMap<SartDimension, u8> {
        category.dimensions().map(|d| (d, self.score(d))).collect()
    }

    /// Mean raw score of a category, rounded to one decimal.
    pub fn category_average(&self, category: SartCategory) -> f64 {
        let values: Vec<f64> = category
            .dimensions()
            .map(|d| f64::from(self.score(d)))
            .collect();
        let sum: f64 = values.iter().sum();
        round_to(sum / values.len() as f64, 1)
    }

    /// Every dimension holds a score inside the scale.
    pub fn is_complete(&self) -> bool {
        self.scores
            .iter()
            .all(|s| (SCORE_MIN..=SCORE_MAX).contains(s))
    }

    /// Flat record for the document store.
    pub fn to_record(&self) -> SartRecord {
        self.clone().into()
    }
}

fn apply_updates<I>(mut scores: [u8; 10], updates: I) -> Result<[u8; 10]>
where
    I: IntoIterator<Item = (SartDimension, f64)>,
{
    for (dim, value) in updates {
        scores[dim.index()] = validate_dimension_score(value, dim)?;
    }
    Ok(scores)
}

fn calculate_derived_scores(scores: &[u8; 10]) -> DerivedScores {
    let sum = |category: SartCategory| -> u8 {
        category.dimensions().map(|d| scores[d.index()]).sum()
    };
    let demand = sum(SartCategory::Demand);
    let supply = sum(SartCategory::Supply);
    let understanding = sum(SartCategory::Understanding);
    DerivedScores {
        demand,
        supply,
        understanding,
        sa_score: i16::from(understanding) - i16::from(demand) + i16::from(supply),
    }
}

fn read_timestamp(map: &Map<String, Value>) -> DateTime<Utc> {
    match map.get("timestamp") {
        Some(Value::String(raw)) => match DateTime::parse_from_rfc3339(raw) {
            Ok(ts) => ts.with_timezone(&Utc),
            Err(e) => {
                log::warn!("Ignoring unparsable SART timestamp '{}': {}", raw, e);
                Utc::now()
            }
        },
        _ => Utc::now(),
    }
}

fn read_metadata(map: &Map<String, Value>) -> SartMetadata {
    let Some(Value::Object(fields)) = map.get("metadata") else {
        return SartMetadata::default();
    };

    let mut metadata = SartMetadata::default();
    for (key, value) in fields {
        match key.as_str() {
            "version" => {
                if let Some(version) = metadata_string(key, value) {
                    metadata.version = version;
                }
            }
            "calculationMethod" => {
                if let Some(method) = metadata_string(key, value) {
                    metadata.calculation_method = method;
                }
            }
            _ => {
                metadata.extra.insert(key.clone(), value.clone());
            }
        }
    }
    metadata
}

fn metadata_string(key: &str, value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        other => {
            log::warn!(
                "Ignoring SART metadata field '{}': expected a string, got {}",
                key,
                json_kind(other)
            );
            None
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Flat stored form of a [`SartResponse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SartRecord {
    pub instability: u8,
    pub complexity: u8,
    pub variability: u8,
    pub arousal: u8,
    pub concentration: u8,
    pub division: u8,
    pub spare_capacity: u8,
    pub information_quantity: u8,
    pub information_quality: u8,
    pub familiarity: u8,
    pub demand: u8,
    pub supply: u8,
    pub understanding: u8,
    pub sa_score: i16,
    pub timestamp: DateTime<Utc>,
    pub metadata: SartMetadata,
}

impl From<SartResponse> for SartRecord {
    fn from(response: SartResponse) -> Self {
        let [instability, complexity, variability, arousal, concentration, division, spare_capacity, information_quantity, information_quality, familiarity] =
            response.scores;
        let DerivedScores {
            demand,
            supply,
            understanding,
            sa_score,
        } = response.derived;
        Self {
            instability,
            complexity,
            variability,
            arousal,
            concentration,
            division,
            spare_capacity,
            information_quantity,
            information_quality,
            familiarity,
            demand,
            supply,
            understanding,
            sa_score,
            timestamp: response.timestamp,
            metadata: response.metadata,
        }
    }
}

impl TryFrom<Value> for SartResponse {
    type Error = ScoringError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_record(&value)
    }
}
