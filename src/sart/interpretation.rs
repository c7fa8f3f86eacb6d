//! Banding of SA scores and single-dimension scores.

use super::dimensions::{SartCategory, SartDimension};
use super::response::SartResponse;
use crate::errors::{Result, ScoringError};
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum SaLevel {
    Critical,
    Poor,
    Moderate,
    Good,
    Excellent,
}

impl SaLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Poor => "Poor",
            Self::Moderate => "Moderate",
            Self::Good => "Good",
            Self::Excellent => "Excellent",
        }
    }
}

/// One row of an inclusive banding table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<L> {
    pub min: f64,
    pub max: f64,
    pub level: L,
    pub color: &'static str,
    pub description: &'static str,
}

impl<L: Copy> Band<L> {
    pub fn contains(&self, score: f64) -> bool {
        score >= self.min && score <= self.max
    }
}

/// Find the first band containing `score`; when none does, the last band of
/// the table is used. Scores outside the table therefore land in the lowest
/// band instead of failing.
fn classify<L: Copy>(table: &[Band<L>], score: f64) -> Band<L> {
    let fallback = table[table.len() - 1];
    table
        .iter()
        .find(|band| band.contains(score))
        .copied()
        .unwrap_or(fallback)
}

/// SA score bands, highest first. The theoretical range is [-30, 46].
pub const SA_LEVELS: [Band<SaLevel>; 5] = [
    Band {
        min: 25.0,
        max: 49.0,
        level: SaLevel::Excellent,
        color: "success",
        description: "Superior situation awareness",
    },
    Band {
        min: 15.0,
        max: 24.0,
        level: SaLevel::Good,
        color: "info",
        description: "Adequate situation awareness",
    },
    Band {
        min: 5.0,
        max: 14.0,
        level: SaLevel::Moderate,
        color: "warning",
        description: "Marginal situation awareness",
    },
    Band {
        min: -10.0,
        max: 4.0,
        level: SaLevel::Poor,
        color: "error",
        description: "Inadequate situation awareness",
    },
    Band {
        min: -30.0,
        max: -11.0,
        level: SaLevel::Critical,
        color: "error-dark",
        description: "Critical situation awareness failure",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum DimensionLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Moderate,
    High,
}

impl DimensionLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

/// Raw-score bands on a continuous 1-7 scale, highest first.
pub const DIMENSION_LEVELS: [Band<DimensionLevel>; 4] = [
    Band {
        min: 6.0,
        max: 7.0,
        level: DimensionLevel::High,
        color: "success",
        description: "",
    },
    Band {
        min: 4.0,
        max: 5.9,
        level: DimensionLevel::Moderate,
        color: "info",
        description: "",
    },
    Band {
        min: 2.0,
        max: 3.9,
        level: DimensionLevel::Low,
        color: "warning",
        description: "",
    },
    Band {
        min: 1.0,
        max: 1.9,
        level: DimensionLevel::VeryLow,
        color: "error",
        description: "",
    },
];

/// Band for an arbitrary SA score.
pub fn sa_level(score: f64) -> Band<SaLevel> {
    classify(&SA_LEVELS, score)
}

/// Band for an arbitrary raw dimension score.
pub fn dimension_level(score: f64) -> Band<DimensionLevel> {
    classify(&DIMENSION_LEVELS, score)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaInterpretation {
    pub score: i16,
    pub level: SaLevel,
    pub color: &'static str,
    pub description: &'static str,
    pub demand_score: u8,
    pub supply_score: u8,
    pub understanding_score: u8,
    pub demand_dimensions: BTreeMap<SartDimension, u8>,
    pub supply_dimensions: BTreeMap<SartDimension, u8>,
    pub understanding_dimensions: BTreeMap<SartDimension, u8>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionInterpretation {
    pub key: SartDimension,
    pub dimension: &'static str,
    pub category: SartCategory,
    pub score: u8,
    pub level: DimensionLevel,
    pub color: &'static str,
    pub min_label: &'static str,
    pub max_label: &'static str,
    pub description: &'static str,
}

impl SartResponse {
    pub fn sa_interpretation(&self) -> SaInterpretation {
        let band = sa_level(f64::from(self.sa_score()));
        SaInterpretation {
            score: self.sa_score(),
            level: band.level,
            color: band.color,
            description: band.description,
            demand_score: self.demand(),
            supply_score: self.supply(),
            understanding_score: self.understanding(),
            demand_dimensions: self.scores_by_category(SartCategory::Demand),
            supply_dimensions: self.scores_by_category(SartCategory::Supply),
            understanding_dimensions: self.scores_by_category(SartCategory::Understanding),
        }
    }

    pub fn interpret_dimension(&self, dimension: SartDimension) -> DimensionInterpretation {
        let score = self.score(dimension);
        let band = dimension_level(f64::from(score));
        let info = dimension.info();
        DimensionInterpretation {
            key: dimension,
            dimension: info.label,
            category: info.category,
            score,
            level: band.level,
            color: band.color,
            min_label: info.min_label,
            max_label: info.max_label,
            description: info.description,
        }
    }

    /// Interpretation for a dimension given by its record key.
    ///
    /// # Errors
    ///
    /// [`ScoringError::UnknownDimension`] when `key` names no SART dimension.
    pub fn dimension_interpretation(&self, key: &str) -> Result<DimensionInterpretation> {
        SartDimension::from_key(key)
            .map(|d| self.interpret_dimension(d))
            .ok_or_else(|| ScoringError::UnknownDimension(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sa_bands_cover_practical_range_exactly_once() {
        for score in -30..=49 {
            let matches = SA_LEVELS
                .iter()
                .filter(|b| b.contains(f64::from(score)))
                .count();
            assert_eq!(matches, 1, "score {score} matched {matches} bands");
        }
    }

    #[test]
    fn test_sa_band_boundaries() {
        assert_eq!(sa_level(-11.0).level, SaLevel::Critical);
        assert_eq!(sa_level(-10.0).level, SaLevel::Poor);
        assert_eq!(sa_level(4.0).level, SaLevel::Poor);
        assert_eq!(sa_level(5.0).level, SaLevel::Moderate);
        assert_eq!(sa_level(14.0).level, SaLevel::Moderate);
        assert_eq!(sa_level(15.0).level, SaLevel::Good);
        assert_eq!(sa_level(24.0).level, SaLevel::Good);
        assert_eq!(sa_level(25.0).level, SaLevel::Excellent);
        assert_eq!(sa_level(49.0).level, SaLevel::Excellent);
    }

    #[test]
    fn test_out_of_table_scores_fall_to_lowest_band() {
        assert_eq!(sa_level(-31.0).level, SaLevel::Critical);
        assert_eq!(sa_level(50.0).level, SaLevel::Critical);
        assert_eq!(sa_level(4.5).level, SaLevel::Critical);
    }

    #[test]
    fn test_dimension_levels() {
        assert_eq!(dimension_level(1.0).level, DimensionLevel::VeryLow);
        assert_eq!(dimension_level(2.0).level, DimensionLevel::Low);
        assert_eq!(dimension_level(3.0).level, DimensionLevel::Low);
        assert_eq!(dimension_level(4.0).level, DimensionLevel::Moderate);
        assert_eq!(dimension_level(5.0).level, DimensionLevel::Moderate);
        assert_eq!(dimension_level(6.0).level, DimensionLevel::High);
        assert_eq!(dimension_level(7.0).level, DimensionLevel::High);
    }

    #[test]
    fn test_unknown_dimension_key_fails() {
        let response = SartResponse::default();
        let err = response.dimension_interpretation("information").unwrap_err();
        assert_eq!(err.to_string(), "Unknown dimension: information");
    }

    #[test]
    fn test_dimension_interpretation_carries_labels() {
        let response = SartResponse::new([(SartDimension::Familiarity, 2.0)]).unwrap();
        let interp = response.dimension_interpretation("familiarity").unwrap();
        assert_eq!(interp.dimension, "Familiarity with Situation");
        assert_eq!(interp.category, SartCategory::Understanding);
        assert_eq!(interp.level, DimensionLevel::Low);
        assert_eq!(interp.min_label, "Very Unfamiliar");
    }

    #[test]
    fn test_interpretation_score_matches_sa_score() {
        let response = SartResponse::default();
        let interp = response.sa_interpretation();
        assert_eq!(interp.score, response.sa_score());
        assert_eq!(interp.level, SaLevel::Good);
        assert_eq!(interp.demand_dimensions.len(), 3);
        assert_eq!(interp.supply_dimensions.len(), 4);
    }
}
