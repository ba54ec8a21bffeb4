use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level aeolus configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AeolusConfig {
    /// Trend analysis settings.
    #[serde(default)]
    pub trend: TrendToml,

    /// Synthetic input generation settings.
    #[serde(default)]
    pub synthetic: SyntheticToml,
}

/// Loads a TOML config file, or the defaults when no path is given.
pub fn load(path: Option<&Path>) -> Result<AeolusConfig> {
    match path {
        Some(path) => {
            let toml_str = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {}", path.display()))?;
            toml::from_str(&toml_str).context("failed to parse TOML config")
        }
        None => Ok(AeolusConfig::default()),
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrendToml {
    #[serde(default = "default_moving_average_window")]
    pub moving_average_window: usize,
    #[serde(default = "default_change_point_window")]
    pub change_point_window: usize,
}

impl Default for TrendToml {
    fn default() -> Self {
        Self {
            moving_average_window: default_moving_average_window(),
            change_point_window: default_change_point_window(),
        }
    }
}

fn default_moving_average_window() -> usize {
    aeolus_trend::DEFAULT_MOVING_AVERAGE_WINDOW
}
fn default_change_point_window() -> usize {
    aeolus_trend::DEFAULT_CHANGE_POINT_WINDOW
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyntheticToml {
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default = "default_n_years")]
    pub n_years: usize,
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_base_value")]
    pub base_value: f64,
    #[serde(default = "default_annual_slope")]
    pub annual_slope: f64,
    #[serde(default = "default_noise_sd")]
    pub noise_sd: f64,
    #[serde(default = "default_surface_temperature")]
    pub surface_temperature: f64,
    #[serde(default = "default_surface_dewpoint")]
    pub surface_dewpoint: f64,
}

impl Default for SyntheticToml {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            n_years: default_n_years(),
            start_year: default_start_year(),
            base_value: default_base_value(),
            annual_slope: default_annual_slope(),
            noise_sd: default_noise_sd(),
            surface_temperature: default_surface_temperature(),
            surface_dewpoint: default_surface_dewpoint(),
        }
    }
}

fn default_seed() -> u64 {
    42
}
fn default_n_years() -> usize {
    45
}
fn default_start_year() -> i32 {
    1980
}
fn default_base_value() -> f64 {
    12.0
}
fn default_annual_slope() -> f64 {
    0.03
}
fn default_noise_sd() -> f64 {
    0.4
}
fn default_surface_temperature() -> f64 {
    27.0
}
fn default_surface_dewpoint() -> f64 {
    21.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_library_constants() {
        let config = AeolusConfig::default();
        assert_eq!(
            config.trend.moving_average_window,
            aeolus_trend::DEFAULT_MOVING_AVERAGE_WINDOW
        );
        assert_eq!(
            config.trend.change_point_window,
            aeolus_trend::DEFAULT_CHANGE_POINT_WINDOW
        );
    }

    #[test]
    fn parses_partial_toml() {
        let config: AeolusConfig = toml::from_str(
            r#"
            [trend]
            moving_average_window = 7

            [synthetic]
            seed = 7
            n_years = 60
            "#,
        )
        .unwrap();

        assert_eq!(config.trend.moving_average_window, 7);
        // Unset fields fall back to defaults.
        assert_eq!(
            config.trend.change_point_window,
            aeolus_trend::DEFAULT_CHANGE_POINT_WINDOW
        );
        assert_eq!(config.synthetic.seed, 7);
        assert_eq!(config.synthetic.n_years, 60);
        assert_eq!(config.synthetic.start_year, 1980);
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: std::result::Result<AeolusConfig, _> = toml::from_str(
            r#"
            [trend]
            moving_avg_window = 7
            "#,
        );
        assert!(result.is_err());
    }
}
