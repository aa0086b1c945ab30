//! Command implementations for the WQ CLI.
//!
//! Each subcommand loads the dataset (a file or the bundled default),
//! builds a filter from the shared flags and recomputes its output from
//! scratch.

use chrono::NaiveDate;
use clap::{Args, Subcommand};
use std::path::PathBuf;

pub mod dashboard;
pub mod export;
pub mod load;
pub mod summary;

/// Dataset selection shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Input CSV file (optionally .gz); the bundled sample dataset is used when omitted
    #[arg(short, long, global = true)]
    pub input: Option<PathBuf>,

    /// Station to include; repeat for several. All stations when omitted
    #[arg(short, long = "station", global = true)]
    pub stations: Vec<String>,

    /// First day to include (inclusive). Defaults to the earliest date in the data
    #[arg(long, global = true, value_parser = parse_date_arg)]
    pub start: Option<NaiveDate>,

    /// Last day to include (inclusive). Defaults to the latest date in the data
    #[arg(long, global = true, value_parser = parse_date_arg)]
    pub end: Option<NaiveDate>,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    wq_utils::dates::parse_timestamp(s)
        .map(|t| t.date())
        .map_err(|e| e.to_string())
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the record count and key indicator averages
    Summary,

    /// List stations and the date span of the dataset
    Stations,

    /// Write the downloadable derived tables as CSV files
    Export {
        /// Directory to write into (created if missing)
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },

    /// Write the full dashboard model as JSON for a chart front end
    Dashboard {
        /// Output path for the JSON file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

pub fn run(filter: FilterArgs, command: Command) -> anyhow::Result<()> {
    let dataset = load::load_dataset(filter.input.as_deref())?;
    let spec = load::build_filter(&dataset, &filter);
    match command {
        Command::Summary => summary::run_summary(&dataset, &spec),
        Command::Stations => summary::run_stations(&dataset),
        Command::Export { out_dir } => export::run_export(&dataset, &spec, &out_dir),
        Command::Dashboard { output } => dashboard::run_dashboard(&dataset, &spec, output.as_deref()),
    }
}
