//! The ten SART dimensions and the three categories they roll up into.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lowest raw score on the SART scale.
pub const SCORE_MIN: u8 = 1;
/// Highest raw score on the SART scale.
pub const SCORE_MAX: u8 = 7;
/// Scale midpoint, used for dimensions a record does not mention.
pub const SCORE_DEFAULT: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SartCategory {
    /// External task factors
    Demand,
    /// Internal operator resources
    Supply,
    Understanding,
}

impl SartCategory {
    pub const ALL: [SartCategory; 3] = [Self::Demand, Self::Supply, Self::Understanding];

    pub fn key(self) -> &'static str {
        match self {
            Self::Demand => "demand",
            Self::Supply => "supply",
            Self::Understanding => "understanding",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Demand => "Demand",
            Self::Supply => "Supply",
            Self::Understanding => "Understanding",
        }
    }

    pub fn dimensions(self) -> impl Iterator<Item = SartDimension> {
        SartDimension::ALL
            .into_iter()
            .filter(move |d| d.category() == self)
    }

    /// Inclusive range of the category sum.
    pub fn range(self) -> CategoryRange {
        let n = self.dimensions().count() as u8;
        CategoryRange {
            min: n * SCORE_MIN,
            max: n * SCORE_MAX,
        }
    }
}

impl fmt::Display for SartCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryRange {
    pub min: u8,
    pub max: u8,
}

/// One SART dimension. Declaration order is the canonical record order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SartDimension {
    Instability,
    Complexity,
    Variability,
    Arousal,
    Concentration,
    Division,
    SpareCapacity,
    InformationQuantity,
    InformationQuality,
    Familiarity,
}

/// Display metadata for a dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionInfo {
    pub key: &'static str,
    pub label: &'static str,
    pub min_label: &'static str,
    pub max_label: &'static str,
    pub description: &'static str,
    pub category: SartCategory,
}

impl SartDimension {
    pub const ALL: [SartDimension; 10] = [
        Self::Instability,
        Self::Complexity,
        Self::Variability,
        Self::Arousal,
        Self::Concentration,
        Self::Division,
        Self::SpareCapacity,
        Self::InformationQuantity,
        Self::InformationQuality,
        Self::Familiarity,
    ];

    /// Position in [`SartDimension::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn key(self) -> &'static str {
        self.info().key
    }

    pub fn label(self) -> &'static str {
        self.info().label
    }

    pub fn category(self) -> SartCategory {
        self.info().category
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }

    pub fn info(self) -> DimensionInfo {
        use SartCategory::*;
        let (key, label, min_label, max_label, description, category) = match self {
            Self::Instability => (
                "instability",
                "Instability of Situation",
                "Very Stable",
                "Very Unstable",
                "Rate how stable or unstable the operational situation was",
                Demand,
            ),
            Self::Complexity => (
                "complexity",
                "Complexity of Situation",
                "Very Simple",
                "Very Complex",
                "Rate how simple or complex the operational elements and their relationships were",
                Demand,
            ),
            Self::Variability => (
                "variability",
                "Variability of Situation",
                "Very Constant",
                "Very Variable",
                "Rate how constant or variable the situation parameters were over time",
                Demand,
            ),
            Self::Arousal => (
                "arousal",
                "Arousal",
                "Very Low",
                "Very High",
                "Rate your level of mental alertness and readiness during the task",
                Supply,
            ),
            Self::Concentration => (
                "concentration",
                "Concentration of Attention",
                "Very Difficult",
                "Very Easy",
                "Rate how difficult or easy it was to maintain concentration on the task",
                Supply,
            ),
            Self::Division => (
                "division",
                "Division of Attention",
                "Very Focused",
                "Very Divided",
                "Rate how focused or divided your attention was across multiple task elements",
                Supply,
            ),
            Self::SpareCapacity => (
                "spareCapacity",
                "Spare Mental Capacity",
                "Very Little",
                "Very Much",
                "Rate how much spare mental capacity you had available beyond task requirements",
                Supply,
            ),
            Self::InformationQuantity => (
                "informationQuantity",
                "Information Quantity",
                "Very Little",
                "Very Much",
                "Rate the amount of information available for making decisions",
                Understanding,
            ),
            Self::InformationQuality => (
                "informationQuality",
                "Information Quality",
                "Very Poor",
                "Very Good",
                "Rate the quality, relevance, and usefulness of available information",
                Understanding,
            ),
            Self::Familiarity => (
                "familiarity",
                "Familiarity with Situation",
                "Very Unfamiliar",
                "Very Familiar",
                "Rate how familiar you were with the operational situation and procedures",
                Understanding,
            ),
        };
        DimensionInfo {
            key,
            label,
            min_label,
            max_label,
            description,
            category,
        }
    }
}

impl fmt::Display for SartDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
