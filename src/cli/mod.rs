//! CLI argument parsing for negcycle
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod args;
pub mod parse;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use args::{ArbitrageArgs, CompareArgs, RunArgs};
pub use negcycle_core::format::OutputFormat;
use parse::parse_format;

/// Negcycle - negative-cycle detection and shortest paths over dense graphs
#[derive(Parser, Debug)]
#[command(name = "negcycle")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Explicit log level (error, warn, info, debug, trace)
    #[arg(long, global = true, env = "NEGCYCLE_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Config file (defaults to ~/.config/negcycle/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List built-in scenarios
    Scenarios,

    /// Run one strategy on a scenario and print its paths
    Run(RunArgs),

    /// Run every strategy on a scenario and check that they agree
    Compare(CompareArgs),

    /// List currencies reachable from a profitable exchange loop
    Arbitrage(ArbitrageArgs),

    /// Run every scenario with its strategies
    Demo,
}
