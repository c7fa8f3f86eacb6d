use super::analysis::{analyze_as, TamAnalysis};
use super::dimensions::TamDimension;
use super::response::TamResponse;
use super::version::TamVersion;
use crate::aggregate::AggregateReport;
use crate::config::TamScales;
use crate::errors::Result;
use crate::normalizer::AVERAGE_DECIMALS;
use crate::stats::{average_of, round_to};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;

/// Population statistics of TAM responses scored as one version.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TamAggregate {
    pub version: TamVersion,
    /// Per-construct mean of normalized scores plus the overall-score summary
    #[serde(flatten)]
    pub report: AggregateReport<TamDimension>,
    /// Per-construct mean of the respondents' answers on the original
    /// Likert scale, two decimals. `None` for usage constructs and
    /// constructs nobody answered.
    pub raw_means: BTreeMap<TamDimension, Option<f64>>,
}

impl TamAggregate {
    pub fn average_overall_score(&self) -> Option<f64> {
        self.report.overall.mean
    }
}

pub fn aggregate_responses(responses: &[TamResponse], version: TamVersion) -> Result<TamAggregate> {
    aggregate_responses_with(responses, version, &TamScales::default())
}

/// Aggregate many responses, each scored as `version`.
///
/// Construct means only include respondents who answered the construct.
/// Responses are analyzed in parallel; the result does not depend on
/// scheduling.
pub fn aggregate_responses_with(
    responses: &[TamResponse],
    version: TamVersion,
    scales: &TamScales,
) -> Result<TamAggregate> {
    log::debug!("Aggregating {} TAM responses as {}", responses.len(), version);

    let mismatched = responses.iter().filter(|r| r.version() != version).count();
    if mismatched > 0 {
        log::warn!(
            "{} response(s) declare a different TAM version; scoring them as {}",
            mismatched,
            version
        );
    }

    let analyses: Vec<TamAnalysis> = responses
        .par_iter()
        .map(|response| analyze_as(response, version, scales))
        .collect::<Result<_>>()?;

    let columns = version.dimensions().iter().map(|&dim| {
        let values = analyses
            .iter()
            .map(|a| a.score_of(dim).unwrap_or(f64::NAN))
            .collect();
        (dim, values)
    });
    let overall: Vec<f64> = analyses
        .iter()
        .map(|a| a.overall_score.unwrap_or(f64::NAN))
        .collect();

    let raw_means = version
        .dimensions()
        .iter()
        .map(|&dim| {
            let values: Vec<f64> = analyses.iter().filter_map(|a| a.raw_average_of(dim)).collect();
            (dim, average_of(&values).map(|m| round_to(m, AVERAGE_DECIMALS)))
        })
        .collect();

    Ok(TamAggregate {
        version,
        report: AggregateReport::build(responses.len(), columns, &overall),
        raw_means,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn respondent(pu: &[i32], peou: &[i32]) -> TamResponse {
        TamResponse::new(TamVersion::V1)
            .with_answers(TamDimension::PerceivedUsefulness, pu.iter().copied())
            .with_answers(TamDimension::PerceivedEaseOfUse, peou.iter().copied())
    }

    #[test]
    fn test_aggregate_two_respondents() {
        let responses = vec![respondent(&[7, 7], &[4]), respondent(&[1], &[4, 4])];
        let aggregate = aggregate_responses(&responses, TamVersion::V1).unwrap();

        assert_eq!(aggregate.report.respondents, 2);
        // 100 and 0 average to 50
        assert_eq!(aggregate.report.mean_of(&TamDimension::PerceivedUsefulness), Some(50.0));
        assert_eq!(aggregate.report.mean_of(&TamDimension::PerceivedEaseOfUse), Some(50.0));
        // overall scores 75 and 25
        assert_eq!(aggregate.average_overall_score(), Some(50.0));
        assert_eq!(aggregate.report.overall.std_dev, Some(25.0));
        assert_eq!(aggregate.report.overall.min, Some(25.0));
        assert_eq!(aggregate.report.overall.max, Some(75.0));
    }

    #[test]
    fn test_raw_means_stay_on_likert_scale() {
        let responses = vec![
            respondent(&[7, 7], &[4]),
            respondent(&[1], &[4, 5]),
            TamResponse::new(TamVersion::V1).with_answers(TamDimension::ActualSystemUse, [3]),
        ];
        let aggregate = aggregate_responses(&responses, TamVersion::V1).unwrap();

        assert_eq!(aggregate.raw_means[&TamDimension::PerceivedUsefulness], Some(4.0));
        // 4 and 4.5
        assert_eq!(aggregate.raw_means[&TamDimension::PerceivedEaseOfUse], Some(4.25));
        assert_eq!(aggregate.raw_means[&TamDimension::AttitudeTowardUsing], None);
        assert_eq!(aggregate.raw_means[&TamDimension::ActualSystemUse], None);
        assert_eq!(
            aggregate.report.mean_of(&TamDimension::ActualSystemUse),
            Some(60.0)
        );
    }

    #[test]
    fn test_unanswered_constructs_are_ignored() {
        let responses = vec![
            respondent(&[4], &[]),
            TamResponse::new(TamVersion::V1).with_answers(TamDimension::PerceivedUsefulness, [7]),
        ];
        let aggregate = aggregate_responses(&responses, TamVersion::V1).unwrap();
        let peou = aggregate.report.dimensions[&TamDimension::PerceivedEaseOfUse];
        assert_eq!(peou.respondents, 0);
        assert_eq!(peou.mean, None);
        assert_eq!(aggregate.report.dimensions[&TamDimension::PerceivedUsefulness].respondents, 2);
        assert_eq!(aggregate.report.dimensions.len(), 4);
    }

    #[test]
    fn test_single_respondent_has_no_deviation() {
        let aggregate = aggregate_responses(&[respondent(&[5, 5], &[5, 5])], TamVersion::V1).unwrap();
        assert_eq!(aggregate.average_overall_score(), Some(66.7));
        assert_eq!(aggregate.report.overall.std_dev, None);
    }

    #[test]
    fn test_empty_input() {
        let aggregate = aggregate_responses(&[], TamVersion::V2).unwrap();
        assert_eq!(aggregate.report.respondents, 0);
        assert_eq!(aggregate.average_overall_score(), None);
        assert_eq!(aggregate.report.overall.min, None);
    }

    #[test]
    fn test_serializes_flat_with_nulls() {
        let aggregate = aggregate_responses(&[], TamVersion::V1).unwrap();
        let json = serde_json::to_value(&aggregate).unwrap();
        assert_eq!(json["version"], 1);
        assert_eq!(json["respondents"], 0);
        assert!(json["overall"]["mean"].is_null());
        assert!(json["dimensions"]["perceivedUsefulness"]["mean"].is_null());
        assert!(json["rawMeans"]["perceivedUsefulness"].is_null());
    }
}
