//! Owned JSON input shapes for the CLI boundary.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use aeolus_sounding::{Sounding, SoundingError};
use aeolus_trend::AnnualObservation;

/// Owned sounding data as read from (or generated for) a JSON file.
///
/// Mirrors the six-array profile structure; [`SoundingFile::as_sounding`]
/// builds the validated borrowed view the analyzer consumes.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SoundingFile {
    /// Pressure per level, hPa.
    pub pressure: Vec<f64>,
    /// Temperature per level, degrees C.
    pub temperature: Vec<f64>,
    /// Dewpoint per level, degrees C.
    pub dewpoint: Vec<f64>,
    /// Height per level, m.
    pub height: Vec<f64>,
    /// Wind speed per level, m/s.
    pub wind_speed: Vec<f64>,
    /// Wind direction per level, degrees.
    pub wind_direction: Vec<f64>,
}

impl SoundingFile {
    /// Reads a sounding from a JSON file.
    pub fn read(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read sounding file: {}", path.display()))?;
        serde_json::from_str(&json)
            .with_context(|| format!("failed to parse sounding JSON: {}", path.display()))
    }

    /// Builds the validated borrowed view over this data.
    ///
    /// # Errors
    ///
    /// Propagates the profile validation errors (empty profile, length
    /// mismatches).
    pub fn as_sounding(&self) -> Result<Sounding<'_>, SoundingError> {
        Sounding::new(
            &self.pressure,
            &self.temperature,
            &self.dewpoint,
            &self.height,
            &self.wind_speed,
            &self.wind_direction,
        )
    }
}

/// Reads an annual series from a JSON file: an array of
/// `{"year": ..., "value": ...}` objects.
pub fn read_series(path: &Path) -> Result<Vec<AnnualObservation>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read series file: {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("failed to parse series JSON: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sounding_file_deserializes_and_validates() {
        let json = r#"{
            "pressure": [1000.0, 850.0],
            "temperature": [25.0, 16.0],
            "dewpoint": [20.0, 14.0],
            "height": [0.0, 1500.0],
            "wind_speed": [5.0, 15.0],
            "wind_direction": [180.0, 200.0]
        }"#;
        let file: SoundingFile = serde_json::from_str(json).unwrap();
        let sounding = file.as_sounding().unwrap();
        assert_eq!(sounding.len(), 2);
    }

    #[test]
    fn mismatched_file_fails_validation() {
        let json = r#"{
            "pressure": [1000.0, 850.0],
            "temperature": [25.0],
            "dewpoint": [20.0, 14.0],
            "height": [0.0, 1500.0],
            "wind_speed": [5.0, 15.0],
            "wind_direction": [180.0, 200.0]
        }"#;
        let file: SoundingFile = serde_json::from_str(json).unwrap();
        assert!(matches!(
            file.as_sounding(),
            Err(SoundingError::LengthMismatch {
                field: "temperature",
                ..
            })
        ));
    }

    #[test]
    fn series_deserializes_from_array() {
        let json = r#"[{"year": 1990, "value": 10.0}, {"year": 1991, "value": 10.1}]"#;
        let series: Vec<AnnualObservation> = serde_json::from_str(json).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].year, 1990);
    }
}
