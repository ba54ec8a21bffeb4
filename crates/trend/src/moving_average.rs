//! Centered moving average over an annual series.

use aeolus_stats::sliding_mean;

use crate::error::TrendError;
use crate::series::{AnnualObservation, validate_series, values};

/// Default smoothing window, years.
pub const DEFAULT_MOVING_AVERAGE_WINDOW: usize = 5;

/// Centered moving average with a clamped window.
///
/// Each output point averages up to `window` input points centered on it;
/// near the boundaries the window shrinks to the valid range rather than
/// padding. The output has the same length and year ordering as the
/// input.
///
/// # Errors
///
/// Returns [`TrendError::InvalidWindow`] for a zero window and the usual
/// series-precondition errors for malformed input.
pub fn moving_average(
    series: &[AnnualObservation],
    window: usize,
) -> Result<Vec<AnnualObservation>, TrendError> {
    if window == 0 {
        return Err(TrendError::InvalidWindow { window });
    }
    validate_series(series)?;

    let smoothed = sliding_mean(&values(series), window);
    Ok(series
        .iter()
        .zip(smoothed)
        .map(|(obs, value)| AnnualObservation::new(obs.year, value))
        .collect())
}
