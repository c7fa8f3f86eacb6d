//! Follow-up actions suggested by a SART response.
//!
//! A poor overall SA band is high priority. Demand outweighing supply and
//! weak understanding are medium. Each very low dimension adds a low-priority
//! item. Results are ordered by priority, then by the order rules fire.

use super::dimensions::{SartCategory, SartDimension};
use super::interpretation::SaLevel;
use super::response::SartResponse;
use crate::config::RecommendationThresholds;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecommendedAction {
    ReviewTraining,
    ReduceWorkload,
    EnhanceInformation,
    TargetedImprovement,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    pub priority: Priority,
    pub area: String,
    pub message: String,
    pub action: RecommendedAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<SartCategory>,
}

/// "Spare Mental Capacity" -> "spare_mental_capacity"
fn area_slug(label: &str) -> String {
    label
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

impl SartResponse {
    pub fn recommendations(&self) -> Vec<Recommendation> {
        self.recommendations_with(&RecommendationThresholds::default())
    }

    /// Guidance derived from the response, ordered high, medium, low.
    /// Within a priority the order of the checks is kept: SA band, workload
    /// balance, understanding, then dimensions in record order.
    pub fn recommendations_with(&self, thresholds: &RecommendationThresholds) -> Vec<Recommendation> {
        let mut recommendations = Vec::new();

        let sa = self.sa_interpretation();
        if matches!(sa.level, SaLevel::Critical | SaLevel::Poor) {
            recommendations.push(Recommendation {
                priority: Priority::High,
                area: "situation_awareness".into(),
                message: format!(
                    "Low SA score detected ({}). Consider additional training on situation monitoring and information processing.",
                    self.sa_score()
                ),
                action: RecommendedAction::ReviewTraining,
                details: Some(format!(
                    "Demand: {}, Supply: {}, Understanding: {}",
                    self.demand(),
                    self.supply(),
                    self.understanding()
                )),
                category: None,
            });
        }

        let demand_avg = self.category_average(SartCategory::Demand);
        let supply_avg = self.category_average(SartCategory::Supply);
        let understanding_avg = self.category_average(SartCategory::Understanding);

        if demand_avg > supply_avg + thresholds.imbalance_margin {
            recommendations.push(Recommendation {
                priority: Priority::Medium,
                area: "workload_balance".into(),
                message: format!(
                    "Task demand ({demand_avg}) exceeds operator supply ({supply_avg}). Consider workload reduction or enhanced support."
                ),
                action: RecommendedAction::ReduceWorkload,
                details: None,
                category: None,
            });
        }

        if understanding_avg < thresholds.understanding_floor {
            recommendations.push(Recommendation {
                priority: Priority::Medium,
                area: "information_processing".into(),
                message: format!(
                    "Low understanding score ({understanding_avg}). Consider improving information availability and quality."
                ),
                action: RecommendedAction::EnhanceInformation,
                details: None,
                category: None,
            });
        }

        for dim in SartDimension::ALL {
            let score = self.score(dim);
            if score <= thresholds.low_dimension_ceiling {
                recommendations.push(Recommendation {
                    priority: Priority::Low,
                    area: area_slug(dim.label()),
                    message: format!("Very low score in {} ({}).", dim.label(), score),
                    action: RecommendedAction::TargetedImprovement,
                    details: None,
                    category: Some(dim.category()),
                });
            }
        }

        // sort_by_key is stable
        recommendations.sort_by_key(|r| r.priority);
        recommendations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SartDimension::*;

    #[test]
    fn test_balanced_response_has_no_recommendations() {
        assert!(SartResponse::default().recommendations().is_empty());
    }

    #[test]
    fn test_overloaded_response_orders_by_priority() {
        let response = SartResponse::new([
            (Instability, 7.0),
            (Complexity, 7.0),
            (Variability, 7.0),
            (Arousal, 2.0),
            (Concentration, 2.0),
            (Division, 3.0),
            (SpareCapacity, 1.0),
            (InformationQuantity, 3.0),
            (InformationQuality, 3.0),
            (Familiarity, 2.0),
        ])
        .unwrap();
        // demand 21, supply 8, understanding 8 -> SA -5 (Poor)
        assert_eq!(response.sa_score(), -5);

        let recs = response.recommendations();
        let priorities: Vec<Priority> = recs.iter().map(|r| r.priority).collect();
        assert_eq!(
            priorities,
            vec![
                Priority::High,
                Priority::Medium,
                Priority::Medium,
                Priority::Low,
                Priority::Low,
                Priority::Low,
                Priority::Low,
            ]
        );
        assert_eq!(recs[0].area, "situation_awareness");
        assert_eq!(
            recs[0].details.as_deref(),
            Some("Demand: 21, Supply: 8, Understanding: 8")
        );
        assert_eq!(recs[1].action, RecommendedAction::ReduceWorkload);
        assert!(recs[1].message.contains("(7) exceeds operator supply (2)"));
        assert_eq!(recs[2].action, RecommendedAction::EnhanceInformation);

        let low_areas: Vec<&str> = recs[3..].iter().map(|r| r.area.as_str()).collect();
        assert_eq!(
            low_areas,
            vec![
                "arousal",
                "concentration_of_attention",
                "spare_mental_capacity",
                "familiarity_with_situation"
            ]
        );
        assert_eq!(recs[6].category, Some(SartCategory::Understanding));
    }

    #[test]
    fn test_single_low_dimension_only() {
        let response = SartResponse::new([(Division, 2.0)]).unwrap();
        let recs = response.recommendations();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].priority, Priority::Low);
        assert_eq!(recs[0].message, "Very low score in Division of Attention (2).");
    }

    #[test]
    fn test_area_slug() {
        assert_eq!(area_slug("Spare Mental Capacity"), "spare_mental_capacity");
    }
}
