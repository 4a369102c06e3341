//! CLI argument definitions for ride-insight.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "ride-insight",
    version,
    about = "Terminal reports over bike-share trip and weather exports",
    long_about = "Normalize bike-share exports into a canonical daily series and render\n\
                  terminal reports: daily trips vs temperature, station popularity,\n\
                  weekday profile, and headline figures.\n\n\
                  Accepts pre-aggregated daily exports and raw trip-level exports;\n\
                  the schema variant is detected from the column set."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

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
    /// Render the full report: summary, daily series, stations, weekdays.
    Report(ReportArgs),

    /// Print the normalized daily series only.
    Daily(TableArgs),

    /// Print the station popularity ranking only.
    Stations(StationArgs),

    /// Show a file's shape: headers, column hints, matching schema variant.
    Inspect(TableArgs),

    /// List the recognized schema variants in resolution order.
    Variants,
}

#[derive(Parser)]
pub struct ReportArgs {
    /// Trips export (pre-aggregated daily or trip-level CSV).
    #[arg(value_name = "TRIPS_CSV")]
    pub trips_csv: PathBuf,

    /// Separate pre-ranked station export; default is to rank from the
    /// trips file.
    #[arg(long = "stations-csv", value_name = "PATH")]
    pub stations_csv: Option<PathBuf>,

    /// Number of stations to keep in the ranking.
    #[arg(long = "top", value_name = "N", default_value_t = 20)]
    pub top: usize,

    /// Keep only these rider types (values of the member_casual column).
    /// Repeat the flag for multiple types.
    #[arg(long = "rider-type", value_name = "TYPE")]
    pub rider_types: Vec<String>,
}

#[derive(Parser)]
pub struct TableArgs {
    /// CSV export to load.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,
}

#[derive(Parser)]
pub struct StationArgs {
    /// Station or trips CSV export.
    #[arg(value_name = "CSV")]
    pub csv: PathBuf,

    /// Number of stations to keep in the ranking.
    #[arg(long = "top", value_name = "N", default_value_t = 20)]
    pub top: usize,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
