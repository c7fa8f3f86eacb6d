use super::dimensions::TamDimension;
use super::version::TamVersion;
use crate::answer::RawAnswer;
use crate::errors::{Result, ScoringError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Answers one participant gave to a TAM questionnaire.
///
/// Each construct maps to the answers given to its items, in item order.
/// Unanswered items that were shown are kept as [`RawAnswer::Missing`] so
/// completion can count them.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(into = "TamRecord", try_from = "Value")]
pub struct TamResponse {
    version: TamVersion,
    answers: BTreeMap<TamDimension, Vec<RawAnswer>>,
}

impl TamResponse {
    pub fn new(version: TamVersion) -> Self {
        Self {
            version,
            answers: BTreeMap::new(),
        }
    }

    /// Replace the answers of one construct.
    pub fn with_answers<I, A>(mut self, dimension: TamDimension, answers: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<RawAnswer>,
    {
        self.answers
            .insert(dimension, answers.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_version(mut self, version: TamVersion) -> Self {
        self.version = version;
        self
    }

    /// Parse a stored record.
    ///
    /// A missing `tamVersion` means version 1. Keys that are not TAM
    /// constructs (ids, timestamps) are ignored and `null` constructs are
    /// treated as absent.
    ///
    /// # Errors
    ///
    /// [`ScoringError::UnsupportedVersion`] for a version outside 1-3 and
    /// [`ScoringError::InvalidRecord`] when the record or a construct has the
    /// wrong shape.
    pub fn from_record(record: &Value) -> Result<Self> {
        let map = match record {
            Value::Null => return Ok(Self::default()),
            Value::Object(map) => map,
            other => {
                return Err(ScoringError::InvalidRecord(format!(
                    "TAM record must be an object, got {}",
                    other
                )))
            }
        };

        let version = match map.get("tamVersion") {
            None | Some(Value::Null) => TamVersion::default(),
            Some(value) => parse_version(value)?,
        };

        let mut answers = BTreeMap::new();
        for (key, value) in map.iter().filter(|(k, _)| k.as_str() != "tamVersion") {
            let Some(dimension) = TamDimension::from_key(key) else {
                log::debug!("Ignoring non-TAM field '{}'", key);
                continue;
            };
            match value {
                Value::Null => {}
                Value::Array(items) => {
                    let items = items
                        .iter()
                        .cloned()
                        .map(serde_json::from_value)
                        .collect::<std::result::Result<Vec<RawAnswer>, _>>()?;
                    answers.insert(dimension, items);
                }
                other => {
                    return Err(ScoringError::InvalidRecord(format!(
                        "{} must be an array of answers, got {}",
                        key, other
                    )))
                }
            }
        }

        Ok(Self { version, answers })
    }

    pub fn version(&self) -> TamVersion {
        self.version
    }

    pub fn answers(&self, dimension: TamDimension) -> Option<&[RawAnswer]> {
        self.answers.get(&dimension).map(Vec::as_slice)
    }

    /// Constructs present in this response, in key order.
    pub fn answered(&self) -> impl Iterator<Item = (TamDimension, &[RawAnswer])> {
        self.answers.iter().map(|(d, a)| (*d, a.as_slice()))
    }

    /// Persisted form with unanswered (`null`) slots stripped.
    pub fn to_record(&self) -> TamRecord {
        self.record(|a| !a.is_missing())
    }

    fn record(&self, keep: impl Fn(&RawAnswer) -> bool) -> TamRecord {
        TamRecord {
            tam_version: self.version,
            answers: self
                .answers
                .iter()
                .map(|(d, items)| {
                    let kept = items.iter().filter(|a| keep(a)).cloned().collect();
                    (d.key().to_string(), kept)
                })
                .collect(),
        }
    }
}

fn parse_version(value: &Value) -> Result<TamVersion> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| ScoringError::UnsupportedVersion(n.to_string()))
            .and_then(TamVersion::from_number),
        Value::String(s) => s.parse(),
        other => Err(ScoringError::UnsupportedVersion(other.to_string())),
    }
}

/// Flat stored shape of a [`TamResponse`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TamRecord {
    #[serde(rename = "tamVersion")]
    pub tam_version: TamVersion,
    #[serde(flatten)]
    pub answers: BTreeMap<String, Vec<RawAnswer>>,
}

impl From<TamResponse> for TamRecord {
    fn from(response: TamResponse) -> Self {
        response.record(|_| true)
    }
}

impl TryFrom<Value> for TamResponse {
    type Error = ScoringError;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_record(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_from_record() {
        let response = TamResponse::from_record(&json!({
            "tamVersion": 2,
            "perceivedUsefulness": [5, null, 6],
            "image": null,
            "participantId": "p-17"
        }))
        .unwrap();

        assert_eq!(response.version(), TamVersion::V2);
        assert_eq!(
            response.answers(TamDimension::PerceivedUsefulness).unwrap().len(),
            3
        );
        assert_eq!(response.answers(TamDimension::Image), None);
        assert_eq!(response.answered().count(), 1);
    }

    #[test]
    fn test_missing_version_defaults_to_one() {
        let response = TamResponse::from_record(&json!({"perceivedEaseOfUse": [4]})).unwrap();
        assert_eq!(response.version(), TamVersion::V1);
        assert_eq!(
            TamResponse::from_record(&json!({"tamVersion": "tam-3"}))
                .unwrap()
                .version(),
            TamVersion::V3
        );
    }

    #[test]
    fn test_rejects_bad_shapes() {
        assert!(matches!(
            TamResponse::from_record(&json!({"tamVersion": 4})),
            Err(ScoringError::UnsupportedVersion(_))
        ));
        assert!(matches!(
            TamResponse::from_record(&json!({"perceivedUsefulness": 5})),
            Err(ScoringError::InvalidRecord(_))
        ));
        assert!(TamResponse::from_record(&json!([1, 2])).is_err());
        assert!(matches!(
            TamResponse::from_record(&json!({"tamVersion": 2.5})),
            Err(ScoringError::UnsupportedVersion(_))
        ));
    }

    #[test]
    fn test_integral_float_version() {
        let response =
            TamResponse::from_record(&json!({"tamVersion": 2.0, "image": [5]})).unwrap();
        assert_eq!(response.version(), TamVersion::V2);
        assert_eq!(response.answers(TamDimension::Image).unwrap().len(), 1);
    }

    #[test]
    fn test_to_record_strips_nulls() {
        let response = TamResponse::new(TamVersion::V1)
            .with_answers(TamDimension::PerceivedUsefulness, [Some(5.0), None, Some(6.0)])
            .with_answers(TamDimension::ActualSystemUse, [RawAnswer::from(3), RawAnswer::from("10")]);

        let record = serde_json::to_value(response.to_record()).unwrap();
        assert_eq!(
            record,
            json!({
                "tamVersion": 1,
                "perceivedUsefulness": [5.0, 6.0],
                "actualSystemUse": [3.0, "10"]
            })
        );
    }

    #[test]
    fn test_serialization_keeps_structural_slots() {
        let response = TamResponse::new(TamVersion::V3)
            .with_answers(TamDimension::Experience, [None, Some(2.0)]);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["experience"], json!([null, 2.0]));

        let back: TamResponse = serde_json::from_value(value).unwrap();
        assert_eq!(back, response);
    }
}
