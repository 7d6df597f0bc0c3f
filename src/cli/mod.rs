use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod config;
mod downsample;
mod info;
mod list;
mod plot;

/// outplot - Plot-ready series from whitespace-delimited .out files
#[derive(Parser)]
#[command(name = "outplot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display headers, units and parse statistics of a .out file
    Info {
        /// Input .out file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },

    /// Build chart stacks for the selected parameters as JSON
    Plot {
        /// Input .out files or directories to search
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Parameter to plot; `*` wildcards allowed, repeatable (default: all)
        #[arg(short = 'p', long = "param", value_name = "PARAM")]
        params: Vec<String>,

        /// Maximum points per series
        #[arg(short = 't', long)]
        threshold: Option<usize>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output JSON path (defaults to stdout)
        #[arg(short = 'o', long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Only plot file keys matching this search pattern
        #[arg(short = 'f', long, value_name = "PATTERN")]
        filter: Option<String>,

        /// Trace id to mark as hidden, repeatable
        #[arg(long, value_name = "TRACE_ID")]
        hide: Vec<String>,
    },

    /// Write each column's downsampled series as CSV
    Downsample {
        /// Input .out file path
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Maximum points per series
        #[arg(short = 't', long)]
        threshold: Option<usize>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output CSV path (defaults to stdout)
        #[arg(short = 'o', long, value_name = "OUTPUT")]
        output: Option<PathBuf>,
    },

    /// List file keys, versions and available parameters
    List {
        /// Input .out files or directories to search
        #[arg(value_name = "INPUT", required = true)]
        inputs: Vec<PathBuf>,

        /// Only list file keys matching this search pattern
        #[arg(short = 'f', long, value_name = "PATTERN")]
        filter: Option<String>,

        /// Load settings from a TOML config file
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,
    },
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }
}

pub fn init_logging(verbosity: u8) {
    let log_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Info { file, config } => info::run(file, config),
        Commands::Plot {
            inputs,
            params,
            threshold,
            config,
            output,
            pretty,
            filter,
            hide,
        } => plot::run(
            inputs, params, threshold, config, output, pretty, filter, hide,
        ),
        Commands::Downsample {
            file,
            threshold,
            config,
            output,
        } => downsample::run(file, threshold, config, output),
        Commands::List {
            inputs,
            filter,
            config,
        } => list::run(inputs, filter, config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_plot_args() {
        let cli = Cli::try_parse_from([
            "outplot", "-vv", "plot", "runs/", "-p", "Gen*", "-p", "RotSpeed", "-t", "500",
            "--hide", "a.out__0__RotSpeed",
        ])
        .unwrap();
        assert_eq!(cli.verbosity(), 2);

        match cli.command {
            Commands::Plot {
                inputs,
                params,
                threshold,
                hide,
                pretty,
                ..
            } => {
                assert_eq!(inputs, [PathBuf::from("runs/")]);
                assert_eq!(params, ["Gen*", "RotSpeed"]);
                assert_eq!(threshold, Some(500));
                assert_eq!(hide, ["a.out__0__RotSpeed"]);
                assert!(!pretty);
            }
            _ => panic!("expected plot command"),
        }
    }

    #[test]
    fn test_plot_requires_input() {
        assert!(Cli::try_parse_from(["outplot", "plot"]).is_err());
    }
}
