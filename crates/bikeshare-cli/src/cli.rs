//! CLI argument definitions using clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Bikeshare: bike-rental dashboard metrics from a daily data file
#[derive(Parser)]
#[command(name = "bikeshare")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Dashboard configuration file (TOML); falls back to $BIKESHARE_CONFIG
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show total and average rentals for a date range
    Summary {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// First day of the range (YYYY-MM-DD)
        #[arg(short, long)]
        start: Option<String>,

        /// Last day of the range (YYYY-MM-DD)
        #[arg(short, long)]
        end: Option<String>,

        /// Print the daily trend as well
        #[arg(long)]
        trend: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show season, weekday, rider, and volume breakdowns of the whole dataset
    Breakdown {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show file metadata and the dataset's date bounds
    Inspect {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Serve dashboard data as JSON over HTTP
    Serve {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Port for web server
        #[arg(short, long, default_value = "8501")]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per line
    Json,
}
