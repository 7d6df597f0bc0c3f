//! # outplot
//!
//! A command-line tool for turning whitespace-delimited `.out` time-series
//! files into plot-ready, downsampled series.
//!
//! ## Usage
//!
//! ```bash
//! # Inspect a file
//! outplot info turbine.out
//!
//! # Stacks for two parameters across every .out file in a directory
//! outplot plot runs/ -p GenPwr -p "Rot*" -o stacks.json
//!
//! # Downsampled columns as CSV
//! outplot downsample turbine.out --threshold 500 -o turbine.csv
//! ```

use anyhow::Result;
use clap::Parser;

mod cli;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_logging(cli.verbosity());
    cli::dispatch(cli)
}
