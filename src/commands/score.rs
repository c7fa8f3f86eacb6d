use crate::config::UxMetricsConfig;
use crate::io::Report;
use crate::sart::SartResponse;
use crate::tam::{analyze_with, TamResponse, TamVersion};
use crate::tlx::NasaTlxResponse;
use anyhow::{Context, Result};
use serde_json::Value;

pub fn score_sart(records: &[Value], config: &UxMetricsConfig) -> Result<Report> {
    let reports = parse_sart(records)?
        .iter()
        .map(|response| response.analysis_report_with(config))
        .collect();
    Ok(Report::Sart(reports))
}

/// Analyze TAM records, optionally forcing every record to `version`.
pub fn score_tam(
    records: &[Value],
    version: Option<TamVersion>,
    config: &UxMetricsConfig,
) -> Result<Report> {
    let scales = config.tam_scales();
    let analyses = parse_tam(records, version)?
        .iter()
        .map(|response| analyze_with(response, &scales))
        .collect::<crate::errors::Result<Vec<_>>>()?;
    Ok(Report::Tam(analyses))
}

pub fn score_tlx(records: &[Value]) -> Result<Report> {
    let scores = parse_tlx(records)?
        .iter()
        .map(NasaTlxResponse::score)
        .collect();
    Ok(Report::Tlx(scores))
}

pub(crate) fn parse_sart(records: &[Value]) -> Result<Vec<SartResponse>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            SartResponse::from_record(record)
                .with_context(|| format!("SART record {} is invalid", i + 1))
        })
        .collect()
}

pub(crate) fn parse_tam(records: &[Value], version: Option<TamVersion>) -> Result<Vec<TamResponse>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let response = TamResponse::from_record(record)
                .with_context(|| format!("TAM record {} is invalid", i + 1))?;
            Ok(match version {
                Some(v) => response.with_version(v),
                None => response,
            })
        })
        .collect()
}

pub(crate) fn parse_tlx(records: &[Value]) -> Result<Vec<NasaTlxResponse>> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| {
            NasaTlxResponse::from_record(record)
                .with_context(|| format!("NASA-TLX record {} is invalid", i + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_score_sart_reports_each_record() {
        let records = vec![json!({"instability": 7}), json!(null)];
        match score_sart(&records, &UxMetricsConfig::default()).unwrap() {
            Report::Sart(reports) => {
                assert_eq!(reports.len(), 2);
                assert_eq!(reports[0].summary.demand_score, 15);
                assert_eq!(reports[1].summary.sa_score, 16);
            }
            other => panic!("expected SART report, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_record_names_its_position() {
        let records = vec![json!({}), json!({"arousal": 9})];
        let err = score_sart(&records, &UxMetricsConfig::default()).unwrap_err();
        assert!(err.to_string().contains("SART record 2"));
    }

    #[test]
    fn test_tam_version_override() {
        let records = vec![json!({"tamVersion": 1, "computerAnxiety": [3]})];
        match score_tam(&records, Some(TamVersion::V3), &UxMetricsConfig::default()).unwrap() {
            Report::Tam(analyses) => {
                assert_eq!(analyses[0].version, TamVersion::V3);
                assert_eq!(analyses[0].overall_score, Some(50.0));
            }
            other => panic!("expected TAM report, got {:?}", other),
        }
    }

    #[test]
    fn test_score_tlx() {
        let records = vec![json!({"mentalDemand": 60, "effort": 40})];
        match score_tlx(&records).unwrap() {
            Report::Tlx(scores) => assert_eq!(scores[0].raw_tlx, Some(50.0)),
            other => panic!("expected TLX report, got {:?}", other),
        }
    }
}
