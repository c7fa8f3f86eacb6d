use crate::tam::TamVersion;
use serde::{Deserialize, Serialize};

/// Likert scale width (highest point) used for each TAM version.
///
/// Applied to every caller alike; there is no per-caller override.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TamScales {
    #[serde(default = "default_v1_scale")]
    pub v1: u8,
    #[serde(default = "default_v2_scale")]
    pub v2: u8,
    #[serde(default = "default_v3_scale")]
    pub v3: u8,
}

pub fn default_v1_scale() -> u8 {
    7
}
pub fn default_v2_scale() -> u8 {
    7
}
pub fn default_v3_scale() -> u8 {
    5
}

impl Default for TamScales {
    fn default() -> Self {
        Self {
            v1: default_v1_scale(),
            v2: default_v2_scale(),
            v3: default_v3_scale(),
        }
    }
}

impl TamScales {
    pub fn scale_for(&self, version: TamVersion) -> f64 {
        let points = match version {
            TamVersion::V1 => self.v1,
            TamVersion::V2 => self.v2,
            TamVersion::V3 => self.v3,
        };
        f64::from(points)
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, points) in [("v1", self.v1), ("v2", self.v2), ("v3", self.v3)] {
            if points < 2 {
                return Err(format!(
                    "TAM {} scale must have at least 2 points, got {}",
                    name, points
                ));
            }
        }
        Ok(())
    }
}

/// Variance cut-offs for SART response-quality checks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityThresholds {
    #[serde(default = "default_low_variance")]
    pub low_variance: f64,
    #[serde(default = "default_high_variance")]
    pub high_variance: f64,
}

pub fn default_low_variance() -> f64 {
    0.5
}
pub fn default_high_variance() -> f64 {
    6.0
}

impl Default for QualityThresholds {
    fn default() -> Self {
        Self {
            low_variance: default_low_variance(),
            high_variance: default_high_variance(),
        }
    }
}

impl QualityThresholds {
    pub fn validate(&self) -> Result<(), String> {
        if self.low_variance < 0.0 {
            return Err("low_variance must not be negative".to_string());
        }
        if self.low_variance >= self.high_variance {
            return Err(format!(
                "low_variance ({}) must be below high_variance ({})",
                self.low_variance, self.high_variance
            ));
        }
        Ok(())
    }
}

/// Trigger points for SART recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Demand average must exceed supply average by more than this
    #[serde(default = "default_imbalance_margin")]
    pub imbalance_margin: f64,
    /// Understanding averages below this get a recommendation
    #[serde(default = "default_understanding_floor")]
    pub understanding_floor: f64,
    /// Raw dimension scores at or below this get a recommendation
    #[serde(default = "default_low_dimension_ceiling")]
    pub low_dimension_ceiling: u8,
}

pub fn default_imbalance_margin() -> f64 {
    1.0
}
pub fn default_understanding_floor() -> f64 {
    4.0
}
pub fn default_low_dimension_ceiling() -> u8 {
    2
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            imbalance_margin: default_imbalance_margin(),
            understanding_floor: default_understanding_floor(),
            low_dimension_ceiling: default_low_dimension_ceiling(),
        }
    }
}

impl RecommendationThresholds {
    pub fn validate(&self) -> Result<(), String> {
        if self.imbalance_margin < 0.0 {
            return Err("imbalance_margin must not be negative".to_string());
        }
        if !(1.0..=7.0).contains(&self.understanding_floor) {
            return Err(format!(
                "understanding_floor must be on the 1-7 scale, got {}",
                self.understanding_floor
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scales() {
        let scales = TamScales::default();
        assert_eq!(scales.scale_for(TamVersion::V1), 7.0);
        assert_eq!(scales.scale_for(TamVersion::V2), 7.0);
        assert_eq!(scales.scale_for(TamVersion::V3), 5.0);
        assert!(scales.validate().is_ok());
    }

    #[test]
    fn test_degenerate_scale_is_invalid() {
        let scales = TamScales {
            v3: 1,
            ..TamScales::default()
        };
        assert!(scales.validate().unwrap_err().contains("v3"));
    }

    #[test]
    fn test_inverted_variance_thresholds_are_invalid() {
        let thresholds = QualityThresholds {
            low_variance: 6.0,
            high_variance: 0.5,
        };
        assert!(thresholds.validate().is_err());
        assert!(QualityThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_recommendation_thresholds() {
        assert!(RecommendationThresholds::default().validate().is_ok());
        let bad = RecommendationThresholds {
            understanding_floor: 9.0,
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }
}
