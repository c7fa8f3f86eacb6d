use serde::Serialize;
use std::fmt;

/// Technology acceptance band of a 0-100 TAM score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum AcceptanceLevel {
    #[serde(rename = "Very Low")]
    VeryLow,
    Low,
    Moderate,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

/// Lower bounds (inclusive), highest band first.
const THRESHOLDS: [(f64, AcceptanceLevel); 4] = [
    (80.0, AcceptanceLevel::VeryHigh),
    (60.0, AcceptanceLevel::High),
    (40.0, AcceptanceLevel::Moderate),
    (20.0, AcceptanceLevel::Low),
];

impl AcceptanceLevel {
    pub fn from_score(score: f64) -> Self {
        THRESHOLDS
            .iter()
            .find(|(min, _)| score >= *min)
            .map_or(Self::VeryLow, |(_, level)| *level)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low Acceptance",
            Self::Low => "Low Acceptance",
            Self::Moderate => "Moderate Acceptance",
            Self::High => "High Acceptance",
            Self::VeryHigh => "Very High Acceptance",
        }
    }

    /// Chart colour for the band
    pub fn color(self) -> &'static str {
        match self {
            Self::VeryHigh => "#4caf50",
            Self::High => "#2196f3",
            Self::Moderate => "#ffc107",
            Self::Low => "#ff5722",
            Self::VeryLow => "#f44336",
        }
    }
}

impl fmt::Display for AcceptanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Neutral colour for a missing score.
pub const NO_SCORE_COLOR: &str = "#757575";

/// Human-readable interpretation of an optional TAM score.
pub fn interpret_score(score: Option<f64>) -> &'static str {
    score.map_or("No score calculated", |s| {
        AcceptanceLevel::from_score(s).description()
    })
}

pub fn score_color(score: Option<f64>) -> &'static str {
    score.map_or(NO_SCORE_COLOR, |s| AcceptanceLevel::from_score(s).color())
}
