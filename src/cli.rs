use crate::tam::TamVersion;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "uxmetrics")]
#[command(about = "Scoring engine for SART, TAM and NASA-TLX usability questionnaires", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (defaults to `output.default_format` from the config)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Output file (defaults to stdout)
    #[arg(short, long, global = true)]
    pub output: Option<PathBuf>,

    /// Configuration file (defaults to the nearest .uxmetrics.toml)
    #[arg(short, long, global = true, env = "UXMETRICS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score SART responses (one record or an array)
    Sart {
        /// JSON file with the response records
        file: PathBuf,
    },

    /// Analyze TAM responses
    Tam {
        /// JSON file with the response records
        file: PathBuf,

        /// Score every record as this version (1, 2, 3 or tam-N)
        #[arg(long = "tam-version", value_parser = parse_tam_version)]
        tam_version: Option<TamVersion>,
    },

    /// Score NASA-TLX responses
    Tlx {
        /// JSON file with the response records
        file: PathBuf,
    },

    /// Population statistics across many responses
    Aggregate {
        /// Instrument the records belong to
        #[arg(value_enum)]
        instrument: Instrument,

        /// JSON file with an array of response records
        file: PathBuf,

        /// TAM version to score as (defaults to the first record's version)
        #[arg(long = "tam-version", value_parser = parse_tam_version)]
        tam_version: Option<TamVersion>,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum Instrument {
    Sart,
    Tam,
    Tlx,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Terminal,
}

impl From<OutputFormat> for crate::io::output::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Json => crate::io::output::OutputFormat::Json,
            OutputFormat::Terminal => crate::io::output::OutputFormat::Terminal,
        }
    }
}

fn parse_tam_version(s: &str) -> Result<TamVersion, String> {
    s.parse().map_err(|e: crate::errors::ScoringError| e.to_string())
}
