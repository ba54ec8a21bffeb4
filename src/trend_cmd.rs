//! Trend command: one annual series in, one combined report out.

use anyhow::{Context, Result, anyhow};
use serde::Serialize;
use tracing::{info, info_span};

use aeolus_trend::{
    AnnualObservation, TrendAnalysis, analyze_precipitation_trend, analyze_temperature_trend,
    detect_change_points_with_window, moving_average,
};

use crate::cli::{TrendArgs, VariableArg};
use crate::{config, input, output, synthetic};

/// Combined trend report for one series.
#[derive(Debug, Serialize)]
struct TrendReport {
    /// Regression and significance statistics.
    analysis: TrendAnalysis,
    /// Smoothed series, same length and years as the input.
    moving_average: Vec<AnnualObservation>,
    /// Years flagged as level shifts.
    change_points: Vec<i32>,
}

/// Run the trend analysis pipeline.
pub fn run(args: TrendArgs) -> Result<()> {
    let _cmd = info_span!("trend").entered();

    // 1. Load config
    let config = config::load(args.config.as_deref())?;

    // 2. Obtain a series
    let series = if let Some(n_years) = args.synthetic_years {
        let seed = args.seed.unwrap_or(config.synthetic.seed);
        info!(seed, n_years, "generating synthetic series");
        synthetic::series(&config.synthetic, seed, n_years)
    } else {
        let path = args
            .input
            .ok_or_else(|| anyhow!("no input: pass --input <FILE> or --synthetic-years <N>"))?;
        info!(path = %path.display(), "reading series");
        input::read_series(&path)?
    };
    info!(n_years = series.len(), "series loaded");

    // 3. Analyze
    let analysis = match args.variable {
        VariableArg::Temperature => analyze_temperature_trend(&series),
        VariableArg::Precipitation => analyze_precipitation_trend(&series),
    }
    .context("trend analysis failed")?;

    let moving_average = moving_average(&series, config.trend.moving_average_window)
        .context("moving average failed")?;
    let change_points = detect_change_points_with_window(&series, config.trend.change_point_window)
        .context("change-point detection failed")?;

    info!(
        slope = analysis.slope,
        direction = %analysis.trend_direction,
        n_change_points = change_points.len(),
        "series analyzed"
    );

    // 4. Emit the report
    output::write_json(
        args.output,
        &TrendReport {
            analysis,
            moving_average,
            change_points,
        },
    )
}
