//! Trend regression, bucketed significance and interpretation.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use aeolus_stats::{linear_regression, slope_standard_error};

use crate::error::TrendError;
use crate::series::{AnnualObservation, validate_series, values, years};

/// Minimum number of observations for a regression; shorter series get a
/// degenerate result instead.
pub const MIN_TREND_POINTS: usize = 10;

/// Direction of a detected trend.
///
/// A non-significant slope is reported as `NoTrend` even when it is
/// non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrendDirection {
    /// Significant positive slope.
    Increasing,
    /// Significant negative slope.
    Decreasing,
    /// No statistically significant trend.
    #[serde(rename = "No Trend")]
    NoTrend,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrendDirection::Increasing => "Increasing",
            TrendDirection::Decreasing => "Decreasing",
            TrendDirection::NoTrend => "No Trend",
        };
        f.write_str(s)
    }
}

/// The climate variable a series describes, for units and wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendVariable {
    /// Annual mean temperature, degrees C.
    Temperature,
    /// Annual precipitation total, mm.
    Precipitation,
}

impl TrendVariable {
    fn noun(self) -> &'static str {
        match self {
            TrendVariable::Temperature => "temperature",
            TrendVariable::Precipitation => "precipitation",
        }
    }

    fn unit(self) -> &'static str {
        match self {
            TrendVariable::Temperature => "degrees C",
            TrendVariable::Precipitation => "mm",
        }
    }

    fn direction_word(self, increasing: bool) -> &'static str {
        match (self, increasing) {
            (TrendVariable::Temperature, true) => "warming",
            (TrendVariable::Temperature, false) => "cooling",
            (TrendVariable::Precipitation, true) => "wetter",
            (TrendVariable::Precipitation, false) => "drier",
        }
    }
}

/// Regression statistics for one annual series. Produced fresh per call.
#[derive(Debug, Clone, Serialize)]
pub struct TrendAnalysis {
    /// Fitted slope, value units per year.
    pub slope: f64,
    /// Fitted intercept.
    pub intercept: f64,
    /// Coefficient of determination.
    pub r_squared: f64,
    /// Bucketed p-value approximation (0.01 / 0.05 / 0.10 / 0.20, or 1.0
    /// for a degenerate analysis).
    pub p_value: f64,
    /// True iff `p_value < 0.05`.
    pub is_significant: bool,
    /// Trend direction; `NoTrend` unless significant.
    pub trend_direction: TrendDirection,
    /// Percent change over the record, from the fitted line's endpoints.
    pub percent_change: f64,
    /// Templated natural-language summary.
    pub interpretation: String,
}

/// Analyzes an annual mean temperature series.
///
/// # Errors
///
/// Returns [`TrendError`] only for structurally malformed input (unsorted
/// years, non-finite values). A series with fewer than
/// [`MIN_TREND_POINTS`] observations yields `Ok` with a degenerate
/// result.
pub fn analyze_temperature_trend(
    series: &[AnnualObservation],
) -> Result<TrendAnalysis, TrendError> {
    analyze_trend(series, TrendVariable::Temperature)
}

/// Analyzes an annual precipitation series. Same contract as
/// [`analyze_temperature_trend`].
pub fn analyze_precipitation_trend(
    series: &[AnnualObservation],
) -> Result<TrendAnalysis, TrendError> {
    analyze_trend(series, TrendVariable::Precipitation)
}

fn analyze_trend(
    series: &[AnnualObservation],
    variable: TrendVariable,
) -> Result<TrendAnalysis, TrendError> {
    validate_series(series)?;

    if series.len() < MIN_TREND_POINTS {
        debug!(n = series.len(), ?variable, "series too short for regression");
        return Ok(degenerate(series.len(), variable));
    }

    let x = years(series);
    let y = values(series);

    // Validation guarantees strictly ascending years, so a zero-variance
    // axis cannot occur; a degenerate fit still maps to the short-series
    // result rather than an error.
    let Some(fit) = linear_regression(&x, &y) else {
        return Ok(degenerate(series.len(), variable));
    };

    let t_stat = match slope_standard_error(&x, &y, &fit) {
        _ if fit.slope == 0.0 => 0.0,
        Some(se) if se > 0.0 => (fit.slope / se).abs(),
        // A perfect fit with a non-zero slope: maximal confidence.
        Some(_) => f64::INFINITY,
        None => 0.0,
    };
    let p_value = p_bucket(t_stat);
    let is_significant = p_value < 0.05;

    let fitted_first = fit.predict(x[0]);
    let fitted_last = fit.predict(x[x.len() - 1]);
    let percent_change = if fitted_first.abs() < f64::EPSILON {
        0.0
    } else {
        (fitted_last - fitted_first) / fitted_first.abs() * 100.0
    };

    let trend_direction = if !is_significant {
        TrendDirection::NoTrend
    } else if fit.slope > 0.0 {
        TrendDirection::Increasing
    } else {
        TrendDirection::Decreasing
    };

    debug!(
        ?variable,
        slope = fit.slope,
        r_squared = fit.r_squared,
        t_stat,
        p_value,
        "trend regression computed"
    );

    let interpretation = interpret(variable, fit.slope, p_value, is_significant, percent_change);

    Ok(TrendAnalysis {
        slope: fit.slope,
        intercept: fit.intercept,
        r_squared: fit.r_squared,
        p_value,
        is_significant,
        trend_direction,
        percent_change,
        interpretation,
    })
}

/// Maps a t statistic to a fixed p-value bucket.
///
/// A coarse stand-in for the Student-t distribution: the cutoffs are the
/// large-sample two-sided critical values for p = 0.01, 0.05 and 0.10.
fn p_bucket(t: f64) -> f64 {
    if t > 2.576 {
        0.01
    } else if t > 1.96 {
        0.05
    } else if t > 1.645 {
        0.10
    } else {
        0.20
    }
}

fn degenerate(n: usize, variable: TrendVariable) -> TrendAnalysis {
    TrendAnalysis {
        slope: 0.0,
        intercept: 0.0,
        r_squared: 0.0,
        p_value: 1.0,
        is_significant: false,
        trend_direction: TrendDirection::NoTrend,
        percent_change: 0.0,
        interpretation: format!(
            "Insufficient data for {} trend analysis: {n} observations, need at least {MIN_TREND_POINTS}.",
            variable.noun(),
        ),
    }
}

fn interpret(
    variable: TrendVariable,
    slope: f64,
    p_value: f64,
    is_significant: bool,
    percent_change: f64,
) -> String {
    if is_significant {
        let word = variable.direction_word(slope > 0.0);
        format!(
            "Significant {word} trend of {:.4} {}/year (p < {p_value:.2}), {percent_change:+.1}% over the period.",
            slope.abs(),
            variable.unit(),
        )
    } else {
        format!(
            "No statistically significant {} trend (p = {p_value:.2}), {percent_change:+.1}% over the period.",
            variable.noun(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn linear_series(n: usize, start_year: i32, base: f64, slope: f64) -> Vec<AnnualObservation> {
        (0..n)
            .map(|i| AnnualObservation::new(start_year + i as i32, base + slope * i as f64))
            .collect()
    }

    #[test]
    fn noiseless_warming_trend() {
        let series = linear_series(30, 1990, 10.0, 0.05);
        let analysis = analyze_temperature_trend(&series).unwrap();

        assert_relative_eq!(analysis.slope, 0.05, epsilon = 1e-9);
        assert_relative_eq!(analysis.r_squared, 1.0, epsilon = 1e-9);
        assert_eq!(analysis.p_value, 0.01);
        assert!(analysis.is_significant);
        assert_eq!(analysis.trend_direction, TrendDirection::Increasing);
        // Fitted endpoints: 10.0 and 11.45.
        assert_relative_eq!(analysis.percent_change, 14.5, epsilon = 1e-6);
        assert!(analysis.interpretation.contains("warming"));
    }

    #[test]
    fn noiseless_drying_trend() {
        let series = linear_series(30, 1990, 800.0, -4.0);
        let analysis = analyze_precipitation_trend(&series).unwrap();

        assert!(analysis.is_significant);
        assert_eq!(analysis.trend_direction, TrendDirection::Decreasing);
        assert!(analysis.percent_change < 0.0);
        assert!(analysis.interpretation.contains("drier"));
    }

    #[test]
    fn constant_series_has_no_trend() {
        let series = linear_series(20, 2000, 15.0, 0.0);
        let analysis = analyze_temperature_trend(&series).unwrap();

        assert_relative_eq!(analysis.slope, 0.0, epsilon = 1e-12);
        assert!(!analysis.is_significant);
        assert_eq!(analysis.trend_direction, TrendDirection::NoTrend);
        assert_relative_eq!(analysis.percent_change, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn short_series_is_degenerate_regardless_of_values() {
        let series = linear_series(9, 1990, 0.0, 100.0);
        let analysis = analyze_temperature_trend(&series).unwrap();

        assert_eq!(analysis.slope, 0.0);
        assert_eq!(analysis.p_value, 1.0);
        assert!(!analysis.is_significant);
        assert_eq!(analysis.trend_direction, TrendDirection::NoTrend);
        assert!(analysis.interpretation.contains("Insufficient data"));
    }

    #[test]
    fn noisy_flat_series_is_not_significant() {
        // Alternating +-1 around a constant: slope ~ 0, large residuals.
        let series: Vec<AnnualObservation> = (0..40)
            .map(|i| {
                AnnualObservation::new(1980 + i, 12.0 + if i % 2 == 0 { 1.0 } else { -1.0 })
            })
            .collect();
        let analysis = analyze_temperature_trend(&series).unwrap();

        assert!(!analysis.is_significant);
        assert_eq!(analysis.trend_direction, TrendDirection::NoTrend);
        assert!(analysis.interpretation.contains("No statistically significant"));
    }

    #[test]
    fn rejects_unsorted_series() {
        let mut series = linear_series(12, 2000, 10.0, 0.1);
        series.swap(3, 4);
        assert!(matches!(
            analyze_temperature_trend(&series),
            Err(TrendError::UnsortedYears { .. })
        ));
    }

    #[test]
    fn p_bucket_cutoffs() {
        assert_eq!(p_bucket(3.0), 0.01);
        assert_eq!(p_bucket(2.576), 0.05);
        assert_eq!(p_bucket(2.0), 0.05);
        assert_eq!(p_bucket(1.96), 0.10);
        assert_eq!(p_bucket(1.7), 0.10);
        assert_eq!(p_bucket(1.645), 0.20);
        assert_eq!(p_bucket(0.0), 0.20);
        assert_eq!(p_bucket(f64::INFINITY), 0.01);
    }

    #[test]
    fn only_the_smallest_bucket_is_significant() {
        // p = 0.05 fails the strict p < 0.05 test.
        assert!(p_bucket(2.0) >= 0.05);
    }

    #[test]
    fn direction_display() {
        assert_eq!(TrendDirection::Increasing.to_string(), "Increasing");
        assert_eq!(TrendDirection::Decreasing.to_string(), "Decreasing");
        assert_eq!(TrendDirection::NoTrend.to_string(), "No Trend");
    }

    #[test]
    fn direction_serializes_with_space() {
        let json = serde_json::to_string(&TrendDirection::NoTrend).unwrap();
        assert_eq!(json, "\"No Trend\"");
    }

    #[test]
    fn analysis_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<TrendAnalysis>();
    }
}
