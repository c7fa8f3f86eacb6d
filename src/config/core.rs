use serde::{Deserialize, Serialize};

use super::scoring::{QualityThresholds, RecommendationThresholds, TamScales};

/// Root configuration structure, read from `.uxmetrics.toml`
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct UxMetricsConfig {
    /// TAM scoring configuration
    #[serde(default)]
    pub tam: Option<TamConfig>,

    /// SART response-quality thresholds
    #[serde(default)]
    pub quality: Option<QualityThresholds>,

    /// SART recommendation thresholds
    #[serde(default)]
    pub recommendations: Option<RecommendationThresholds>,

    /// Output configuration
    #[serde(default)]
    pub output: Option<OutputConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct TamConfig {
    #[serde(default)]
    pub scales: TamScales,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default output format when none is given on the command line
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_format() -> String {
    "terminal".to_string()
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: default_format(),
        }
    }
}

impl UxMetricsConfig {
    pub fn tam_scales(&self) -> TamScales {
        self.tam.as_ref().map(|t| t.scales).unwrap_or_default()
    }

    pub fn quality_thresholds(&self) -> QualityThresholds {
        self.quality.unwrap_or_default()
    }

    pub fn recommendation_thresholds(&self) -> RecommendationThresholds {
        self.recommendations.unwrap_or_default()
    }

    pub fn default_format(&self) -> String {
        self.output
            .as_ref()
            .map(|o| o.default_format.clone())
            .unwrap_or_else(default_format)
    }
}
