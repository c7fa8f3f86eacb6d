//! Situation Awareness Rating Technique (10-dimension SART).
//!
//! Ten raw 1-7 ratings roll up into three category sums:
//!
//! - **Demand** = instability + complexity + variability
//! - **Supply** = arousal + concentration + division + spareCapacity
//! - **Understanding** = informationQuantity + informationQuality + familiarity
//!
//! and the composite `SA = Understanding - Demand + Supply`.
//!
//! ```rust
//! use uxmetrics::sart::{SartDimension, SartResponse};
//!
//! let base = SartResponse::default();
//! let updated = base.update([(SartDimension::Instability, 7.0)])?;
//! assert_eq!(updated.demand(), base.demand() + 3);
//! assert_eq!(base.score(SartDimension::Instability), 4);
//! # Ok::<(), uxmetrics::errors::ScoringError>(())
//! ```

pub mod analytics;
pub mod dimensions;
pub mod interpretation;
pub mod legacy;
pub mod quality;
pub mod recommendations;
pub mod report;
pub mod response;

pub use analytics::{analyze_responses, average_response, dimension_standard_deviations, SartAnalytics};
pub use dimensions::{SartCategory, SartDimension, SCORE_DEFAULT, SCORE_MAX, SCORE_MIN};
pub use interpretation::{
    dimension_level, sa_level, DimensionInterpretation, DimensionLevel, SaInterpretation, SaLevel,
};
pub use legacy::{remap_legacy_fields, LEGACY_FIELD_RULES};
pub use quality::QualityRating;
pub use recommendations::{Priority, Recommendation, RecommendedAction};
pub use report::SartReport;
pub use response::{DerivedScores, SartMetadata, SartRecord, SartResponse};
