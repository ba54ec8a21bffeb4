//! Sliding dual-window change-point detection.

use tracing::debug;

use aeolus_stats::{mean, population_sd_about};

use crate::error::TrendError;
use crate::series::{AnnualObservation, validate_series, values};

/// Default comparison window, years.
pub const DEFAULT_CHANGE_POINT_WINDOW: usize = 10;

/// Detects change points with the default 10-year window.
///
/// See [`detect_change_points_with_window`].
pub fn detect_change_points(series: &[AnnualObservation]) -> Result<Vec<i32>, TrendError> {
    detect_change_points_with_window(series, DEFAULT_CHANGE_POINT_WINDOW)
}

/// Detects years where the series' level shifts.
///
/// For each index `i` in `[window, n - window)`, the mean of the
/// preceding `window` values is compared to the mean of the following
/// `window` values; `year[i]` is flagged when the absolute difference
/// exceeds the standard deviation of the *entire* series measured about
/// the *before*-window's mean. Consecutive indices can all be flagged as
/// a shift slides through the windows; no deduplication is applied.
///
/// The mixed baseline (before-window mean, whole-series spread) is the
/// reference behavior and is kept as is.
///
/// Returns an ascending list of flagged years; empty when the series is
/// shorter than `2 * window`.
///
/// # Errors
///
/// Returns [`TrendError::InvalidWindow`] for a zero window and the usual
/// series-precondition errors for malformed input.
pub fn detect_change_points_with_window(
    series: &[AnnualObservation],
    window: usize,
) -> Result<Vec<i32>, TrendError> {
    if window == 0 {
        return Err(TrendError::InvalidWindow { window });
    }
    validate_series(series)?;

    let n = series.len();
    if n < 2 * window {
        return Ok(Vec::new());
    }

    let data = values(series);
    let mut change_years = Vec::new();

    for i in window..(n - window) {
        let mean_before = mean(&data[i - window..i]);
        let mean_after = mean(&data[i..i + window]);
        let threshold = population_sd_about(&data, mean_before);

        if (mean_after - mean_before).abs() > threshold {
            change_years.push(series[i].year);
        }
    }

    debug!(
        n,
        window,
        n_change_points = change_years.len(),
        "change-point sweep finished"
    );
    Ok(change_years)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(values: &[f64]) -> Vec<AnnualObservation> {
        values
            .iter()
            .enumerate()
            .map(|(i, &v)| AnnualObservation::new(1980 + i as i32, v))
            .collect()
    }

    #[test]
    fn level_shift_is_flagged() {
        // 15 years at 10, then 15 years at 20.
        let mut data = vec![10.0; 15];
        data.extend(vec![20.0; 15]);
        let input = series(&data);

        let points = detect_change_points(&input).unwrap();
        // The exact shift year (index 15 -> 1995) must be flagged.
        assert!(points.contains(&1995), "points = {points:?}");
    }

    #[test]
    fn flagged_years_stay_inside_window_bounds() {
        let mut data = vec![0.0; 12];
        data.extend(vec![50.0; 12]);
        let input = series(&data);

        let points = detect_change_points(&input).unwrap();
        let n = input.len();
        for year in points {
            let idx = (year - 1980) as usize;
            assert!(idx >= DEFAULT_CHANGE_POINT_WINDOW);
            assert!(idx < n - DEFAULT_CHANGE_POINT_WINDOW);
        }
    }

    #[test]
    fn constant_series_has_no_change_points() {
        let input = series(&[5.0; 40]);
        assert!(detect_change_points(&input).unwrap().is_empty());
    }

    #[test]
    fn gentle_linear_drift_is_not_a_change_point() {
        // A steady ramp spreads its variance over the whole series; no
        // window pair clears the global-spread threshold.
        let data: Vec<f64> = (0..40).map(|i| i as f64 * 0.1).collect();
        let input = series(&data);
        assert!(detect_change_points(&input).unwrap().is_empty());
    }

    #[test]
    fn short_series_yields_empty() {
        let input = series(&[1.0; 19]);
        assert!(detect_change_points(&input).unwrap().is_empty());
    }

    #[test]
    fn output_is_ascending() {
        let mut data = vec![0.0; 20];
        data.extend(vec![30.0; 20]);
        let input = series(&data);

        let points = detect_change_points(&input).unwrap();
        assert!(points.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn custom_window() {
        let mut data = vec![1.0; 6];
        data.extend(vec![9.0; 6]);
        let input = series(&data);

        // Too short for the default window, detectable with 5.
        assert!(detect_change_points(&input).unwrap().is_empty());
        let points = detect_change_points_with_window(&input, 5).unwrap();
        assert!(points.contains(&1986), "points = {points:?}");
    }

    #[test]
    fn zero_window_rejected() {
        let input = series(&[1.0; 25]);
        assert!(matches!(
            detect_change_points_with_window(&input, 0),
            Err(TrendError::InvalidWindow { window: 0 })
        ));
    }
}
