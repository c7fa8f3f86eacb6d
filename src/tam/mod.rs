//! Technology Acceptance Model (TAM-1, TAM-2, TAM-3).
//!
//! Each construct's Likert answers are normalized to 0-100 against the
//! version's scale width; the overall score is the mean of the constructs
//! that have data.
//!
//! ```rust
//! use uxmetrics::tam::{analyze, TamDimension, TamResponse, TamVersion};
//!
//! let response = TamResponse::new(TamVersion::V1)
//!     .with_answers(TamDimension::PerceivedUsefulness, [5, 5])
//!     .with_answers(TamDimension::PerceivedEaseOfUse, [5, 5]);
//! let analysis = analyze(&response)?;
//! assert_eq!(analysis.overall_score, Some(66.7));
//! # Ok::<(), uxmetrics::errors::ScoringError>(())
//! ```

pub mod aggregate;
pub mod analysis;
pub mod dimensions;
pub mod interpretation;
pub mod response;
pub mod version;

pub use aggregate::{aggregate_responses, aggregate_responses_with, TamAggregate};
pub use analysis::{analyze, analyze_with, Completion, TamAnalysis, TamDimensionResult};
pub use dimensions::{dimensions_for, TamDimension};
pub use interpretation::{interpret_score, score_color, AcceptanceLevel};
pub use response::{TamRecord, TamResponse};
pub use version::TamVersion;
