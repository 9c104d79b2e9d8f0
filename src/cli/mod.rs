//! CLI argument parsing for msgram
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod format;
pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use msgram_core::config::{KeyOrder, WeightSumMode};
pub use msgram_core::format::OutputFormat;
use parse::{parse_key_order, parse_output_format, parse_weight_sum_mode};

/// msgram - validate MeasureSoftGram pre-configurations and Sonar exports
#[derive(Parser, Debug)]
#[command(name = "msgram")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format: human, json, or records
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level (error, warn, info, debug, trace) or a full filter directive
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Reader configuration file (TOML)
    #[arg(long, global = true, env = "MSGRAM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the sibling weight sum mode (per_group or cumulative)
    #[arg(long, global = true, value_parser = parse_weight_sum_mode)]
    pub weight_sum_mode: Option<WeightSumMode>,

    /// Override the Sonar attribute order policy (strict or any)
    #[arg(long, global = true, value_parser = parse_key_order)]
    pub key_order: Option<KeyOrder>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate a pre-configuration file and print its weight indexes
    Preconfig {
        /// Path to the pre-configuration JSON file
        path: PathBuf,
    },

    /// Validate a Sonar export and print its components
    Components {
        /// Path to the Sonar metrics JSON file
        path: PathBuf,
    },

    /// List the Sonar metrics the scoring pipeline reads
    Metrics,

    /// Show the reply of a metrics upload
    Response {
        /// HTTP status returned by the service
        #[arg(long)]
        status: u16,

        /// JSON file with the response body (field -> message)
        #[arg(long)]
        body: Option<PathBuf>,
    },
}
