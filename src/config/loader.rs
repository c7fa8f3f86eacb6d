use std::fs;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use super::core::UxMetricsConfig;
use crate::errors::{Result, ScoringError};

/// Name of the configuration file searched for in the working directory and
/// its ancestors.
pub const CONFIG_FILE_NAME: &str = ".uxmetrics.toml";

const MAX_TRAVERSAL_DEPTH: usize = 10;

/// Pure function to read config file contents
pub(crate) fn read_config_file(path: &Path) -> std::result::Result<String, std::io::Error> {
    let file = fs::File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    Ok(contents)
}

/// Parse config from a TOML string and validate each section.
///
/// A section that fails validation is replaced by its defaults with a
/// warning; only unparsable TOML is an error.
pub fn parse_and_validate_config(contents: &str) -> std::result::Result<UxMetricsConfig, String> {
    let mut config = toml::from_str::<UxMetricsConfig>(contents)
        .map_err(|e| format!("Failed to parse {}: {}", CONFIG_FILE_NAME, e))?;

    if let Some(tam) = config.tam.as_mut() {
        if let Err(e) = tam.scales.validate() {
            log::warn!("Invalid TAM scales: {}. Using defaults.", e);
            tam.scales = Default::default();
        }
    }

    if let Some(quality) = config.quality {
        if let Err(e) = quality.validate() {
            log::warn!("Invalid quality thresholds: {}. Using defaults.", e);
            config.quality = None;
        }
    }

    if let Some(recommendations) = config.recommendations {
        if let Err(e) = recommendations.validate() {
            log::warn!("Invalid recommendation thresholds: {}. Using defaults.", e);
            config.recommendations = None;
        }
    }

    Ok(config)
}

/// Try loading config from a specific path, logging rather than failing
pub(crate) fn try_load_config_from_path(config_path: &Path) -> Option<UxMetricsConfig> {
    let contents = match read_config_file(config_path) {
        Ok(contents) => contents,
        Err(e) => {
            handle_read_error(config_path, &e);
            return None;
        }
    };

    match parse_and_validate_config(&contents) {
        Ok(config) => {
            log::debug!("Loaded config from {}", config_path.display());
            Some(config)
        }
        Err(e) => {
            log::warn!("{}. Using defaults.", e);
            None
        }
    }
}

/// Handle file read errors with appropriate logging
pub(crate) fn handle_read_error(config_path: &Path, error: &std::io::Error) {
    // Only log actual errors, not "file not found"
    if error.kind() != std::io::ErrorKind::NotFound {
        log::warn!(
            "Failed to read config file {}: {}",
            config_path.display(),
            error
        );
    }
}

/// Directory ancestors of `start` (inclusive), up to `max_depth` entries
pub fn directory_ancestors(start: PathBuf, max_depth: usize) -> impl Iterator<Item = PathBuf> {
    std::iter::successors(Some(start), |dir| {
        let mut parent = dir.clone();
        if parent.pop() {
            Some(parent)
        } else {
            None
        }
    })
    .take(max_depth)
}

/// Load configuration from an explicit file. Unlike discovery, a missing or
/// unparsable file here is an error.
pub fn load_config_from_path(path: &Path) -> Result<UxMetricsConfig> {
    let contents = read_config_file(path).map_err(|e| {
        ScoringError::config(format!("cannot read file: {}", e), Some(path.to_path_buf()))
    })?;
    parse_and_validate_config(&contents)
        .map_err(|e| ScoringError::config(e, Some(path.to_path_buf())))
}

/// Discover `.uxmetrics.toml` starting at `start` and walking up.
pub fn load_config_from(start: PathBuf) -> UxMetricsConfig {
    directory_ancestors(start, MAX_TRAVERSAL_DEPTH)
        .map(|dir| dir.join(CONFIG_FILE_NAME))
        .find_map(|path| try_load_config_from_path(&path))
        .unwrap_or_else(|| {
            log::debug!(
                "No config found after checking {} directories. Using default config.",
                MAX_TRAVERSAL_DEPTH
            );
            UxMetricsConfig::default()
        })
}

/// Discover configuration from the current directory upwards.
pub fn load_config() -> UxMetricsConfig {
    match std::env::current_dir() {
        Ok(dir) => load_config_from(dir),
        Err(e) => {
            log::warn!(
                "Failed to get current directory: {}. Using default config.",
                e
            );
            UxMetricsConfig::default()
        }
    }
}
