mod cli;
mod config;
mod input;
mod logging;
mod output;
mod sounding_cmd;
mod synthetic;
mod trend_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Sounding(args) => sounding_cmd::run(args),
        Command::Trend(args) => trend_cmd::run(args),
    }
}
