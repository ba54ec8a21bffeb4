use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Aeolus atmospheric diagnostics and climate-trend statistics.
#[derive(Parser)]
#[command(
    name = "aeolus",
    version,
    about = "Severe-weather sounding diagnostics and climate-trend statistics"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Compute severe-weather indices for one atmospheric sounding.
    Sounding(SoundingArgs),
    /// Analyze an annual climate series for trend, smoothing and shifts.
    Trend(TrendArgs),
}

/// Arguments for the `sounding` subcommand.
#[derive(clap::Args)]
pub struct SoundingArgs {
    /// Path to a JSON sounding file.
    #[arg(short, long, conflicts_with = "synthetic")]
    pub input: Option<PathBuf>,

    /// Generate a seeded synthetic demo profile instead of reading a file.
    #[arg(long)]
    pub synthetic: bool,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the indices JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the synthetic-profile RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Arguments for the `trend` subcommand.
#[derive(clap::Args)]
pub struct TrendArgs {
    /// Path to a JSON annual series file.
    #[arg(short, long, conflicts_with = "synthetic_years")]
    pub input: Option<PathBuf>,

    /// Generate a seeded synthetic series of this many years.
    #[arg(long, value_name = "YEARS")]
    pub synthetic_years: Option<usize>,

    /// Climate variable the series describes.
    #[arg(long, value_enum, default_value = "temperature")]
    pub variable: VariableArg,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the report JSON here instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override the synthetic-series RNG seed from config.
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Climate variable selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariableArg {
    /// Annual mean temperature.
    Temperature,
    /// Annual precipitation total.
    Precipitation,
}
