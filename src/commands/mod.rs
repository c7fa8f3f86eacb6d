//! CLI command implementations.
//!
//! - **sart / tam / tlx**: score each record of a JSON file
//! - **aggregate**: population statistics for one instrument
//! - **init**: write a default `.uxmetrics.toml`

pub mod aggregate;
pub mod init;
pub mod score;

pub use aggregate::aggregate_records;
pub use init::init_config;
pub use score::{score_sart, score_tam, score_tlx};

use crate::errors::ScoringError;
use crate::io::{create_writer, OutputFormat, Report};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a report to `output`, or stdout when none is given.
pub fn emit(report: &Report, format: OutputFormat, output: Option<&Path>) -> Result<()> {
    let destination: Box<dyn Write> = match output {
        Some(path) => {
            // No ANSI escapes in files
            colored::control::set_override(false);
            let file = File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(std::io::stdout().lock()),
    };
    create_writer(format, destination).write_report(report)
}

/// Exit status for a failed run: 2 when the input can be corrected, 1 otherwise.
pub const EXIT_INPUT_ERROR: u8 = 2;
pub const EXIT_FAILURE: u8 = 1;

/// The scoring error underneath any context layers, if there is one.
pub fn scoring_error(err: &anyhow::Error) -> Option<&ScoringError> {
    err.chain().find_map(|cause| cause.downcast_ref::<ScoringError>())
}

/// Render a failed run for stderr and pick its exit status.
pub fn describe_error(err: &anyhow::Error) -> (String, u8) {
    let mut message = format!("Error: {:#}", err);
    let status = match scoring_error(err) {
        Some(scoring) => {
            message.push_str(&format!(" [{}]", scoring.code()));
            if scoring.is_user_fixable() {
                message.push_str("\nFix the input data and run again.");
                EXIT_INPUT_ERROR
            } else {
                EXIT_FAILURE
            }
        }
        None => EXIT_FAILURE,
    };
    (message, status)
}
