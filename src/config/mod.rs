//! Configuration for scoring and output.
//!
//! Every section of `.uxmetrics.toml` is optional; accessors on
//! [`UxMetricsConfig`] return the built-in defaults for anything the file
//! leaves out.

mod core;
mod loader;
mod scoring;

pub use core::{OutputConfig, TamConfig, UxMetricsConfig};

pub use loader::{
    directory_ancestors, load_config, load_config_from, load_config_from_path,
    parse_and_validate_config, CONFIG_FILE_NAME,
};

pub use scoring::{
    default_high_variance, default_imbalance_margin, default_low_dimension_ceiling,
    default_low_variance, default_understanding_floor, default_v1_scale, default_v2_scale,
    default_v3_scale, QualityThresholds, RecommendationThresholds, TamScales,
};

/// Default configuration file contents written by `uxmetrics init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# uxmetrics configuration

# Likert scale width (highest point) per TAM version
[tam.scales]
v1 = 7
v2 = 7
v3 = 5

# SART response-quality variance thresholds
[quality]
low_variance = 0.5
high_variance = 6.0

# SART recommendation triggers
[recommendations]
imbalance_margin = 1.0
understanding_floor = 4.0
low_dimension_ceiling = 2

[output]
default_format = "terminal"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file_matches_defaults() {
        let parsed = parse_and_validate_config(DEFAULT_CONFIG_TOML).unwrap();
        assert_eq!(parsed.tam_scales(), TamScales::default());
        assert_eq!(parsed.quality_thresholds(), QualityThresholds::default());
        assert_eq!(
            parsed.recommendation_thresholds(),
            RecommendationThresholds::default()
        );
        assert_eq!(parsed.default_format(), "terminal");
    }
}
