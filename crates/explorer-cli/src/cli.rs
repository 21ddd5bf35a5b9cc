//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "titanic-explorer",
    version,
    about = "Explore Titanic passenger survival and simulate beer queue wait times",
    long_about = "Load and prepare the Titanic passenger list, aggregate survival rates,\n\
                  emit chart data as JSON and simulate bar wait times.\n\n\
                  Defaults come from ./explorer.toml (or --config); flags override them."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Configuration file (default: ./explorer.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Load and prepare the passenger table.
    Prepare(PrepareArgs),

    /// Print survival rates, overall or grouped by a column.
    Survival(SurvivalArgs),

    /// Emit a box-plot chart specification as JSON.
    Chart(ChartArgs),

    /// Build the four exploration charts.
    Explore(ExploreArgs),

    /// Simulate beer queue wait times.
    WaitTimes(WaitTimeArgs),
}

/// Input options shared by every passenger command.
#[derive(Args)]
pub struct DataArgs {
    /// Passenger CSV (default: `[data] path` from the config).
    #[arg(value_name = "CSV")]
    pub csv: Option<PathBuf>,

    /// Simulated load delay in seconds.
    #[arg(long = "delay-secs", value_name = "S")]
    pub delay_secs: Option<f64>,
}

#[derive(Args)]
pub struct PrepareArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Write the prepared table to this CSV file.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct SurvivalArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Group by this column of the prepared table.
    #[arg(long = "by", value_name = "COLUMN")]
    pub by: Option<String>,
}

#[derive(Args)]
pub struct ChartArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Category (x axis) column.
    #[arg(long = "category", value_name = "COLUMN")]
    pub category: String,

    /// Numeric value (y axis) column.
    #[arg(long = "value", value_name = "COLUMN")]
    pub value: String,

    /// Write the JSON here instead of stdout.
    #[arg(long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct ExploreArgs {
    #[command(flatten)]
    pub data: DataArgs,

    /// Write one `<topic>.json` chart per topic into this directory.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,
}

#[derive(Args)]
pub struct WaitTimeArgs {
    /// Number of attendees.
    #[arg(long = "people", value_name = "N")]
    pub people: Option<u32>,

    /// Number of bar staff.
    #[arg(long = "staff", value_name = "S")]
    pub staff: Option<u32>,

    /// Seed for reproducible samples.
    #[arg(long = "seed", value_name = "X")]
    pub seed: Option<u64>,

    /// Histogram bin count.
    #[arg(long = "bins", value_name = "B")]
    pub bins: Option<usize>,

    /// Write the histogram JSON to this file.
    #[arg(long = "histogram", value_name = "FILE")]
    pub histogram: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
