//! Relaxation strategy implementations
//!
//! All four strategies compute the same object (a shortest-path tree or a
//! negative-cycle witness) with different iteration and termination
//! policies:
//! - `early_exit`: up to `n-1` passes, stop at a fixed point, one
//!   verification pass for cycle presence
//! - `exact_passes`: exactly `n` passes over reachable nodes; an update in
//!   the last pass means a cycle
//! - `cycle_membership`: two rounds of `n-1` passes; the second marks every
//!   node reachable from a negative cycle
//! - `fifo`: worklist relaxation with a round bound, no cycle protection
//! - `shared`: relaxation primitives used by all of them

pub mod cycle_membership;
pub mod early_exit;
pub mod exact_passes;
pub mod fifo;
pub mod shared;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{NegCycleError, Result};
use crate::graph::model::Graph;
use crate::graph::solution::Solution;

pub use cycle_membership::CycleMembership;
pub use early_exit::EarlyExit;
pub use exact_passes::ExactPasses;
pub use fifo::Fifo;
pub use shared::RelaxOptions;

/// Detect negative cycles and/or compute shortest paths from a source.
///
/// `solve` validates the graph and source, then returns freshly computed
/// arrays; it never mutates the graph.
pub trait RelaxationStrategy: Send + Sync {
    fn kind(&self) -> StrategyKind;

    fn solve(&self, graph: &Graph, source: usize) -> Result<Solution>;
}

/// Names of the available strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    EarlyExit,
    ExactPasses,
    #[default]
    CycleMembership,
    Fifo,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 4] = [
        StrategyKind::EarlyExit,
        StrategyKind::ExactPasses,
        StrategyKind::CycleMembership,
        StrategyKind::Fifo,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StrategyKind::EarlyExit => "early-exit",
            StrategyKind::ExactPasses => "exact-passes",
            StrategyKind::CycleMembership => "cycle-membership",
            StrategyKind::Fifo => "fifo",
        }
    }

    /// Whether the strategy can prove the absence of a negative cycle
    pub fn detects_cycles(self) -> bool {
        !matches!(self, StrategyKind::Fifo)
    }

    pub fn build(self, opts: RelaxOptions) -> Box<dyn RelaxationStrategy> {
        match self {
            StrategyKind::EarlyExit => Box::new(EarlyExit::new(opts)),
            StrategyKind::ExactPasses => Box::new(ExactPasses::new(opts)),
            StrategyKind::CycleMembership => Box::new(CycleMembership::new(opts)),
            StrategyKind::Fifo => Box::new(Fifo::new(opts)),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = NegCycleError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "early-exit" | "simple" => Ok(StrategyKind::EarlyExit),
            "exact-passes" | "sedgewick" => Ok(StrategyKind::ExactPasses),
            "cycle-membership" | "membership" => Ok(StrategyKind::CycleMembership),
            "fifo" | "path-only" => Ok(StrategyKind::Fifo),
            other => Err(NegCycleError::UnknownStrategy(other.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
