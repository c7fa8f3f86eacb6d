//! Scoring and analysis for standardized usability questionnaires.
//!
//! Raw answers go in as loosely typed records; structured, serializable
//! reports come out:
//!
//! - [`sart`]: Situation Awareness Rating Technique (10 dimensions)
//! - [`tam`]: Technology Acceptance Model, versions 1 to 3
//! - [`tlx`]: NASA Task Load Index (raw TLX)
//!
//! Missing data is `None` everywhere and serializes to `null`; only invalid
//! input is an error.

// Export modules for library usage
pub mod aggregate;
pub mod answer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod normalizer;
pub mod sart;
pub mod stats;
pub mod tam;
pub mod tlx;

// Re-export commonly used types
pub use crate::aggregate::{AggregateReport, DimensionAggregate};
pub use crate::answer::RawAnswer;
pub use crate::config::UxMetricsConfig;
pub use crate::errors::{Result, ScoringError};
pub use crate::io::output::{create_writer, OutputFormat, OutputWriter, Report};
pub use crate::normalizer::{normalize, normalize_usage, DimensionScore, UsageScore};
pub use crate::sart::{SartDimension, SartResponse};
pub use crate::stats::{round_to, standard_deviation, summarize, Summary};
pub use crate::tam::{TamAnalysis, TamDimension, TamResponse, TamVersion};
pub use crate::tlx::{NasaTlxResponse, TlxSubscale};
