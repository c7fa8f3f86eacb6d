use pretty_assertions::assert_eq;
use serde_json::json;
use uxmetrics::tlx::{aggregate, workload_level, NasaTlxResponse, TlxSubscale, WorkloadLevel};
use uxmetrics::ScoringError;

#[test]
fn test_complete_record_scores_raw_tlx() {
    let record = json!({
        "mentalDemand": 80, "physicalDemand": 10, "temporalDemand": 60,
        "performance": 30, "effort": 70, "frustration": 50
    });
    let response = NasaTlxResponse::from_record(&record).unwrap();

    assert!(response.is_complete());
    assert_eq!(response.raw_tlx(), Some(50.0));
    assert_eq!(response.workload_level(), Some(WorkloadLevel::High));
}

#[test]
fn test_unanswered_subscales_are_skipped() {
    let record = json!({ "mentalDemand": 15, "effort": null });
    let score = NasaTlxResponse::from_record(&record).unwrap().score();

    assert_eq!(score.answered, 1);
    assert!(!score.is_complete);
    assert_eq!(score.raw_tlx, Some(15.0));
    assert_eq!(score.workload_level, Some(WorkloadLevel::Medium));
    assert_eq!(score.ratings.effort, None);
}

#[test]
fn test_empty_record_has_no_workload() {
    let response = NasaTlxResponse::from_record(&json!({})).unwrap();
    assert_eq!(response.raw_tlx(), None);
    assert_eq!(response.workload_level(), None);
}

#[test]
fn test_invalid_ratings_are_rejected() {
    let err = NasaTlxResponse::from_record(&json!({ "frustration": 101 })).unwrap_err();
    assert!(matches!(err, ScoringError::OutOfRange { .. }));

    let err = NasaTlxResponse::from_record(&json!({ "effort": "high" })).unwrap_err();
    assert_eq!(err.to_string(), "Invalid score for effort: must be a number");

    let err = NasaTlxResponse::from_record(&json!([50])).unwrap_err();
    assert!(matches!(err, ScoringError::InvalidRecord(_)));
}

#[test]
fn test_workload_band_edges() {
    assert_eq!(workload_level(9.9), WorkloadLevel::Low);
    assert_eq!(workload_level(10.0), WorkloadLevel::Medium);
    assert_eq!(workload_level(30.0), WorkloadLevel::SomewhatHigh);
    assert_eq!(workload_level(50.0), WorkloadLevel::High);
    assert_eq!(workload_level(80.0), WorkloadLevel::VeryHigh);
    assert_eq!(WorkloadLevel::SomewhatHigh.label(), "Somewhat High");
}

#[test]
fn test_score_serializes_with_record_field_names() {
    let response = NasaTlxResponse::new([(TlxSubscale::TemporalDemand, 40.0)]).unwrap();
    let value = serde_json::to_value(response.score()).unwrap();

    assert_eq!(value["temporalDemand"], json!(40.0));
    assert_eq!(value["mentalDemand"], json!(null));
    assert_eq!(value["rawTlx"], json!(40.0));
    assert_eq!(value["workloadLevel"], json!("Somewhat High"));
    assert_eq!(value["isComplete"], json!(false));
}

#[test]
fn test_aggregate_per_subscale() {
    let responses = vec![
        NasaTlxResponse::new([(TlxSubscale::MentalDemand, 20.0), (TlxSubscale::Effort, 40.0)])
            .unwrap(),
        NasaTlxResponse::new([(TlxSubscale::MentalDemand, 60.0)]).unwrap(),
    ];
    let report = aggregate(&responses);

    assert_eq!(report.respondents, 2);
    let mental = report.dimensions[&TlxSubscale::MentalDemand];
    assert_eq!(mental.mean, Some(40.0));
    assert_eq!(mental.std_dev, Some(20.0));
    assert_eq!(report.dimensions[&TlxSubscale::Effort].respondents, 1);
    assert_eq!(report.dimensions[&TlxSubscale::Frustration].mean, None);
    // raw TLX 30 and 60
    assert_eq!(report.overall.mean, Some(45.0));
    assert_eq!(report.overall.min, Some(30.0));
}
