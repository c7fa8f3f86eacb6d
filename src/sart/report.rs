//! Complete analysis of one SART response, as shown to an evaluator.

use super::dimensions::{CategoryRange, SartCategory, SartDimension};
use super::interpretation::{DimensionInterpretation, SaInterpretation};
use super::quality::QualityRating;
use super::recommendations::Recommendation;
use super::response::{SartMetadata, SartResponse};
use crate::config::UxMetricsConfig;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportSummary {
    pub sa_score: i16,
    pub demand_score: u8,
    pub supply_score: u8,
    pub understanding_score: u8,
    pub sa_interpretation: SaInterpretation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryBlock {
    pub scores: BTreeMap<SartDimension, u8>,
    pub average: f64,
    pub range: CategoryRange,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportMetadata {
    pub timestamp: DateTime<Utc>,
    #[serde(flatten)]
    pub record: SartMetadata,
}

/// Full analysis of one SART response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SartReport {
    pub summary: ReportSummary,
    pub dimensions: Vec<DimensionInterpretation>,
    pub categories: BTreeMap<SartCategory, CategoryBlock>,
    pub quality: QualityRating,
    pub recommendations: Vec<Recommendation>,
    pub metadata: ReportMetadata,
}

impl SartResponse {
    pub fn analysis_report(&self) -> SartReport {
        self.analysis_report_with(&UxMetricsConfig::default())
    }

    pub fn analysis_report_with(&self, config: &UxMetricsConfig) -> SartReport {
        let categories = SartCategory::ALL
            .into_iter()
            .map(|category| {
                let block = CategoryBlock {
                    scores: self.scores_by_category(category),
                    average: self.category_average(category),
                    range: category.range(),
                };
                (category, block)
            })
            .collect();

        SartReport {
            summary: ReportSummary {
                sa_score: self.sa_score(),
                demand_score: self.demand(),
                supply_score: self.supply(),
                understanding_score: self.understanding(),
                sa_interpretation: self.sa_interpretation(),
            },
            dimensions: SartDimension::ALL
                .into_iter()
                .map(|d| self.interpret_dimension(d))
                .collect(),
            categories,
            quality: self.quality_rating_with(&config.quality_thresholds()),
            recommendations: self.recommendations_with(&config.recommendation_thresholds()),
            metadata: ReportMetadata {
                timestamp: self.timestamp(),
                record: self.metadata().clone(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_shape() {
        let report = SartResponse::default().analysis_report();
        assert_eq!(report.dimensions.len(), 10);
        assert_eq!(report.categories.len(), 3);
        assert_eq!(report.categories[&SartCategory::Supply].average, 4.0);
        assert_eq!(report.categories[&SartCategory::Supply].range.max, 28);
        assert_eq!(report.quality, QualityRating::SuspiciousUniform);
        assert_eq!(report.summary.sa_interpretation.score, report.summary.sa_score);
    }

    #[test]
    fn test_report_serializes_with_record_field_names() {
        let json = serde_json::to_value(SartResponse::default().analysis_report()).unwrap();
        assert_eq!(json["summary"]["saScore"], 16);
        assert_eq!(json["categories"]["demand"]["range"]["min"], 3);
        assert_eq!(json["quality"], "suspicious_uniform");
        assert_eq!(json["metadata"]["calculationMethod"], "sart-10d");
    }
}
