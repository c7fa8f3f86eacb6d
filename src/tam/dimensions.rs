//! TAM constructs and the sets of them each version asks about.

use super::version::TamVersion;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Every construct that appears in any TAM version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TamDimension {
    PerceivedUsefulness,
    PerceivedEaseOfUse,
    AttitudeTowardUsing,
    ActualSystemUse,
    IntentionToUse,
    BehavioralIntention,
    UsePatterns,
    SubjectiveNorm,
    Voluntariness,
    Image,
    JobRelevance,
    OutputQuality,
    ResultDemonstrability,
    ComputerSelfEfficacy,
    PerceptionsOfExternalControl,
    ComputerAnxiety,
    ComputerPlayfulness,
    PerceivedEnjoyment,
    ObjectiveUsability,
    Experience,
}

const TAM1: &[TamDimension] = &[
    TamDimension::PerceivedUsefulness,
    TamDimension::PerceivedEaseOfUse,
    TamDimension::AttitudeTowardUsing,
    TamDimension::ActualSystemUse,
];

const TAM2: &[TamDimension] = &[
    TamDimension::IntentionToUse,
    TamDimension::PerceivedUsefulness,
    TamDimension::PerceivedEaseOfUse,
    TamDimension::SubjectiveNorm,
    TamDimension::Voluntariness,
    TamDimension::Image,
    TamDimension::JobRelevance,
    TamDimension::OutputQuality,
    TamDimension::ResultDemonstrability,
];

const TAM3: &[TamDimension] = &[
    TamDimension::PerceivedUsefulness,
    TamDimension::PerceivedEaseOfUse,
    TamDimension::BehavioralIntention,
    TamDimension::UsePatterns,
    TamDimension::SubjectiveNorm,
    TamDimension::Image,
    TamDimension::JobRelevance,
    TamDimension::OutputQuality,
    TamDimension::ResultDemonstrability,
    TamDimension::ComputerSelfEfficacy,
    TamDimension::PerceptionsOfExternalControl,
    TamDimension::ComputerAnxiety,
    TamDimension::ComputerPlayfulness,
    TamDimension::PerceivedEnjoyment,
    TamDimension::ObjectiveUsability,
    TamDimension::Experience,
    TamDimension::Voluntariness,
];

impl TamDimension {
    pub const ALL: [TamDimension; 20] = [
        Self::PerceivedUsefulness,
        Self::PerceivedEaseOfUse,
        Self::AttitudeTowardUsing,
        Self::ActualSystemUse,
        Self::IntentionToUse,
        Self::BehavioralIntention,
        Self::UsePatterns,
        Self::SubjectiveNorm,
        Self::Voluntariness,
        Self::Image,
        Self::JobRelevance,
        Self::OutputQuality,
        Self::ResultDemonstrability,
        Self::ComputerSelfEfficacy,
        Self::PerceptionsOfExternalControl,
        Self::ComputerAnxiety,
        Self::ComputerPlayfulness,
        Self::PerceivedEnjoyment,
        Self::ObjectiveUsability,
        Self::Experience,
    ];

    /// Field name in stored records.
    pub fn key(self) -> &'static str {
        match self {
            Self::PerceivedUsefulness => "perceivedUsefulness",
            Self::PerceivedEaseOfUse => "perceivedEaseOfUse",
            Self::AttitudeTowardUsing => "attitudeTowardUsing",
            Self::ActualSystemUse => "actualSystemUse",
            Self::IntentionToUse => "intentionToUse",
            Self::BehavioralIntention => "behavioralIntention",
            Self::UsePatterns => "usePatterns",
            Self::SubjectiveNorm => "subjectiveNorm",
            Self::Voluntariness => "voluntariness",
            Self::Image => "image",
            Self::JobRelevance => "jobRelevance",
            Self::OutputQuality => "outputQuality",
            Self::ResultDemonstrability => "resultDemonstrability",
            Self::ComputerSelfEfficacy => "computerSelfEfficacy",
            Self::PerceptionsOfExternalControl => "perceptionsOfExternalControl",
            Self::ComputerAnxiety => "computerAnxiety",
            Self::ComputerPlayfulness => "computerPlayfulness",
            Self::PerceivedEnjoyment => "perceivedEnjoyment",
            Self::ObjectiveUsability => "objectiveUsability",
            Self::Experience => "experience",
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::PerceivedUsefulness => "Perceived Usefulness",
            Self::PerceivedEaseOfUse => "Perceived Ease of Use",
            Self::AttitudeTowardUsing => "Attitude Toward Using",
            Self::ActualSystemUse => "Actual System Use",
            Self::IntentionToUse => "Intention to Use",
            Self::BehavioralIntention => "Behavioral Intention",
            Self::UsePatterns => "Use Behavior",
            Self::SubjectiveNorm => "Subjective Norm",
            Self::Voluntariness => "Voluntariness",
            Self::Image => "Image",
            Self::JobRelevance => "Job Relevance",
            Self::OutputQuality => "Output Quality",
            Self::ResultDemonstrability => "Result Demonstrability",
            Self::ComputerSelfEfficacy => "Computer Self-Efficacy",
            Self::PerceptionsOfExternalControl => "Perceptions of External Control",
            Self::ComputerAnxiety => "Computer Anxiety",
            Self::ComputerPlayfulness => "Computer Playfulness",
            Self::PerceivedEnjoyment => "Perceived Enjoyment",
            Self::ObjectiveUsability => "Objective Usability",
            Self::Experience => "Experience",
        }
    }

    /// Usage constructs are answered as `[frequency code, hours per week]`
    /// rather than as Likert items.
    pub fn is_usage(self) -> bool {
        matches!(self, Self::ActualSystemUse)
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }
}

impl fmt::Display for TamDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Constructs asked about by `version`, in questionnaire order.
pub fn dimensions_for(version: TamVersion) -> &'static [TamDimension] {
    match version {
        TamVersion::V1 => TAM1,
        TamVersion::V2 => TAM2,
        TamVersion::V3 => TAM3,
    }
}

impl TamVersion {
    pub fn dimensions(self) -> &'static [TamDimension] {
        dimensions_for(self)
    }
}
