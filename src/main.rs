use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use uxmetrics::cli::{Cli, Commands};
use std::process::ExitCode;
use uxmetrics::commands::{
    self, aggregate_records, describe_error, init_config, score_sart, score_tam, score_tlx,
};
use uxmetrics::config::{load_config, load_config_from_path, UxMetricsConfig};
use uxmetrics::io::{read_records, OutputFormat};

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG, when set, overrides the -v level
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn resolve_format(cli: &Cli, config: &UxMetricsConfig) -> OutputFormat {
    if let Some(format) = cli.format {
        return format.into();
    }
    config.default_format().parse().unwrap_or_else(|e| {
        log::warn!("{}. Using terminal output.", e);
        OutputFormat::Terminal
    })
}

fn load(cli: &Cli) -> Result<UxMetricsConfig> {
    Ok(match &cli.config {
        Some(path) => load_config_from_path(path)?,
        None => load_config(),
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let (message, status) = describe_error(&err);
            eprintln!("{}", message);
            ExitCode::from(status)
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let (report, config) = match &cli.command {
        Commands::Init { force } => {
            let path = init_config(&std::env::current_dir()?, *force)?;
            println!("Created {} configuration file", path.display());
            return Ok(());
        }
        Commands::Sart { file } => {
            let config = load(cli)?;
            (score_sart(&read_records(file)?, &config)?, config)
        }
        Commands::Tam { file, tam_version } => {
            let config = load(cli)?;
            (score_tam(&read_records(file)?, *tam_version, &config)?, config)
        }
        Commands::Tlx { file } => (score_tlx(&read_records(file)?)?, load(cli)?),
        Commands::Aggregate {
            instrument,
            file,
            tam_version,
        } => {
            let config = load(cli)?;
            let records = read_records(file)?;
            (
                aggregate_records(*instrument, &records, *tam_version, &config)?,
                config,
            )
        }
    };

    let format = resolve_format(cli, &config);
    commands::emit(&report, format, cli.output.as_deref())
}
