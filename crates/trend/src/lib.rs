//! Climate-trend statistics for the aeolus analyzer suite.
//!
//! This crate turns an annual time series (one [`AnnualObservation`] per
//! calendar year, sorted ascending) into:
//!
//! - a [`TrendAnalysis`]: least-squares regression plus a bucketed
//!   significance approximation and a templated interpretation,
//! - a centered moving average with clamped boundary windows,
//! - a list of change-point years from a dual-window mean comparison.
//!
//! The p-value is a coarse bucket lookup on the slope's t statistic, not
//! an exact Student-t computation. Insufficient data is never an error:
//! short series produce a well-typed degenerate [`TrendAnalysis`] so
//! presentation code always has a renderable object. Errors are reserved
//! for structurally malformed input (unsorted years, non-finite values,
//! zero windows).
//!
//! # Quick start
//!
//! ```
//! use aeolus_trend::{AnnualObservation, analyze_temperature_trend};
//!
//! let series: Vec<AnnualObservation> = (1990..2020)
//!     .map(|year| AnnualObservation::new(year, 10.0 + 0.05 * (year - 1990) as f64))
//!     .collect();
//!
//! let analysis = analyze_temperature_trend(&series)?;
//! assert!(analysis.is_significant);
//! # Ok::<(), aeolus_trend::TrendError>(())
//! ```

mod analysis;
mod change_point;
mod error;
mod moving_average;
mod series;

pub use analysis::{
    MIN_TREND_POINTS, TrendAnalysis, TrendDirection, TrendVariable,
    analyze_precipitation_trend, analyze_temperature_trend,
};
pub use change_point::{
    DEFAULT_CHANGE_POINT_WINDOW, detect_change_points, detect_change_points_with_window,
};
pub use error::TrendError;
pub use moving_average::{DEFAULT_MOVING_AVERAGE_WINDOW, moving_average};
pub use series::AnnualObservation;
