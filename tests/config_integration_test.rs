use indoc::indoc;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;
use uxmetrics::config::{
    load_config_from, load_config_from_path, QualityThresholds, RecommendationThresholds,
    CONFIG_FILE_NAME,
};
use uxmetrics::sart::{Priority, QualityRating, SartDimension, SartResponse};
use uxmetrics::tam::TamVersion;

#[test]
fn test_config_is_discovered_from_nested_directory() {
    let root = TempDir::new().unwrap();
    fs::write(
        root.path().join(CONFIG_FILE_NAME),
        indoc! {r#"
            [tam.scales]
            v3 = 7
        "#},
    )
    .unwrap();
    let nested = root.path().join("study").join("session-1");
    fs::create_dir_all(&nested).unwrap();

    let config = load_config_from(nested);
    let scales = config.tam_scales();
    assert_eq!(scales.scale_for(TamVersion::V3), 7.0);
    assert_eq!(scales.scale_for(TamVersion::V1), 7.0);
}

#[test]
fn test_invalid_section_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            [quality]
            low_variance = 8.0
            high_variance = 2.0

            [recommendations]
            low_dimension_ceiling = 3
        "#},
    )
    .unwrap();

    let config = load_config_from_path(&path).unwrap();
    assert_eq!(config.quality_thresholds(), QualityThresholds::default());
    assert_eq!(config.recommendation_thresholds().low_dimension_ceiling, 3);
    assert_eq!(
        config.recommendation_thresholds().understanding_floor,
        RecommendationThresholds::default().understanding_floor
    );
}

#[test]
fn test_unparsable_explicit_config_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[tam.scales\nv1 = ").unwrap();

    let err = load_config_from_path(&path).unwrap_err();
    assert!(err.to_string().starts_with("Configuration error in "));
    assert!(err.to_string().contains("broken.toml"));
    assert!(load_config_from_path(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_thresholds_change_sart_report() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(CONFIG_FILE_NAME);
    fs::write(
        &path,
        indoc! {r#"
            [quality]
            low_variance = 0.1
            high_variance = 1.0

            [recommendations]
            low_dimension_ceiling = 3
        "#},
    )
    .unwrap();
    let config = load_config_from_path(&path).unwrap();

    let response = SartResponse::new([
        (SartDimension::Arousal, 3.0),
        (SartDimension::Concentration, 7.0),
        (SartDimension::SpareCapacity, 3.0),
    ])
    .unwrap();

    let default_report = response.analysis_report();
    assert!(default_report.recommendations.is_empty());
    assert_eq!(default_report.quality, QualityRating::Good);

    let report = response.analysis_report_with(&config);
    // variance 1.09; arousal and spare capacity sit at the raised ceiling
    assert_eq!(report.quality, QualityRating::HighVariance);
    assert_eq!(report.recommendations.len(), 2);
    assert!(report
        .recommendations
        .iter()
        .all(|r| r.priority == Priority::Low));
}
