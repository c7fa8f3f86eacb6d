use crate::aggregate::AggregateReport;
use crate::sart::{SartAnalytics, SartReport};
use crate::tam::{TamAggregate, TamAnalysis};
use crate::tlx::{TlxScore, TlxSubscale};
use serde::Serialize;
use std::fmt;
use std::io::Write;
use std::str::FromStr;

use super::writers::{JsonWriter, TerminalWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "terminal" => Ok(Self::Terminal),
            other => Err(format!(
                "Unknown output format '{}' (expected json or terminal)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Terminal => f.write_str("terminal"),
        }
    }
}

/// Everything a command can hand to a writer.
///
/// Per-response reports are always lists, even for a single record.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Report {
    Sart(Vec<SartReport>),
    Tam(Vec<TamAnalysis>),
    Tlx(Vec<TlxScore>),
    SartAggregate(Box<SartAnalytics>),
    TamAggregate(TamAggregate),
    TlxAggregate(AggregateReport<TlxSubscale>),
}

pub trait OutputWriter {
    fn write_report(&mut self, report: &Report) -> anyhow::Result<()>;
}

pub fn create_writer<'a>(format: OutputFormat, out: Box<dyn Write + 'a>) -> Box<dyn OutputWriter + 'a> {
    match format {
        OutputFormat::Json => Box::new(JsonWriter::new(out)),
        OutputFormat::Terminal => Box::new(TerminalWriter::new(out)),
    }
}
