//! Command argument structures

use clap::Args;

use crate::cli::parse::{parse_strategy, parse_tolerance};
use negcycle_core::graph::StrategyKind;

/// Arguments for the run command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Scenario name (see `negcycle scenarios`)
    pub scenario: String,

    /// Relaxation strategy (early-exit, exact-passes, cycle-membership, fifo)
    #[arg(long, short, value_parser = parse_strategy)]
    pub strategy: Option<StrategyKind>,

    /// Source node index (defaults to the scenario's source)
    #[arg(long)]
    pub source: Option<usize>,

    /// Only print the path to this node
    #[arg(long)]
    pub to: Option<usize>,

    /// Relaxation tolerance (overrides config)
    #[arg(long, value_parser = parse_tolerance)]
    pub tolerance: Option<f64>,
}

/// Arguments for the compare command.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Scenario name
    pub scenario: String,

    /// Source node index (defaults to the scenario's source)
    #[arg(long)]
    pub source: Option<usize>,

    /// Relaxation tolerance (overrides config)
    #[arg(long, value_parser = parse_tolerance)]
    pub tolerance: Option<f64>,
}

/// Arguments for the arbitrage command.
#[derive(Args, Debug)]
pub struct ArbitrageArgs {
    /// Scenario name
    pub scenario: String,

    /// Relaxation tolerance (overrides config)
    #[arg(long, value_parser = parse_tolerance)]
    pub tolerance: Option<f64>,
}
