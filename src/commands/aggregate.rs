use super::score::{parse_sart, parse_tam, parse_tlx};
use crate::cli::Instrument;
use crate::config::UxMetricsConfig;
use crate::io::Report;
use crate::sart::analyze_responses;
use crate::tam::{aggregate_responses_with, TamVersion};
use crate::tlx;
use anyhow::Result;
use serde_json::Value;

/// Population report for one instrument.
///
/// TAM records are scored as `tam_version` when given, otherwise as the
/// version the first record declares.
pub fn aggregate_records(
    instrument: Instrument,
    records: &[Value],
    tam_version: Option<TamVersion>,
    config: &UxMetricsConfig,
) -> Result<Report> {
    let report = match instrument {
        Instrument::Sart => {
            let responses = parse_sart(records)?;
            Report::SartAggregate(Box::new(analyze_responses(&responses)))
        }
        Instrument::Tam => {
            let responses = parse_tam(records, None)?;
            let version = tam_version
                .or_else(|| responses.first().map(|r| r.version()))
                .unwrap_or_default();
            Report::TamAggregate(aggregate_responses_with(
                &responses,
                version,
                &config.tam_scales(),
            )?)
        }
        Instrument::Tlx => Report::TlxAggregate(tlx::aggregate(&parse_tlx(records)?)),
    };
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tam_version_from_first_record() {
        let records = vec![
            json!({"tamVersion": 2, "image": [7]}),
            json!({"tamVersion": 2, "image": [1]}),
        ];
        match aggregate_records(Instrument::Tam, &records, None, &UxMetricsConfig::default())
            .unwrap()
        {
            Report::TamAggregate(aggregate) => {
                assert_eq!(aggregate.version, TamVersion::V2);
                assert_eq!(aggregate.average_overall_score(), Some(50.0));
                assert_eq!(aggregate.report.overall.std_dev, Some(50.0));
            }
            other => panic!("expected TAM aggregate, got {:?}", other),
        }
    }

    #[test]
    fn test_sart_aggregate() {
        let records = vec![json!({}), json!({"familiarity": 7})];
        match aggregate_records(Instrument::Sart, &records, None, &UxMetricsConfig::default())
            .unwrap()
        {
            Report::SartAggregate(analytics) => {
                assert_eq!(analytics.total_respondents, 2);
                assert_eq!(analytics.average_sa_score, Some(17.5));
            }
            other => panic!("expected SART aggregate, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_tlx_aggregate() {
        match aggregate_records(Instrument::Tlx, &[], None, &UxMetricsConfig::default()).unwrap() {
            Report::TlxAggregate(report) => {
                assert_eq!(report.respondents, 0);
                assert_eq!(report.overall.mean, None);
            }
            other => panic!("expected TLX aggregate, got {:?}", other),
        }
    }
}
