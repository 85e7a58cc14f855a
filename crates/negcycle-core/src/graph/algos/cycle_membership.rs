use tracing::debug;

use crate::error::Result;
use crate::graph::algos::shared::{admits, relax_all, RelaxOptions};
use crate::graph::algos::{RelaxationStrategy, StrategyKind};
use crate::graph::model::Graph;
use crate::graph::solution::Solution;
use crate::graph::types::{Distance, Outcome, Predecessor};

/// Two rounds of `n-1` passes that identify which destinations are unsafe.
///
/// Round one builds the shortest-path tree as if no negative cycle existed.
/// Round two repeats the passes over the same arrays; any edge that still
/// relaxes marks its target as `NegativeInfinity`. Marked nodes keep
/// relaxing their successors, so contamination spreads to everything
/// reachable from a cycle within the round.
///
/// With a single node both rounds are empty, so a negative self-loop on
/// that node goes unseen and the run reports `NoNegativeCycle`.
#[derive(Debug, Clone, Default)]
pub struct CycleMembership {
    opts: RelaxOptions,
}

impl CycleMembership {
    pub fn new(opts: RelaxOptions) -> Self {
        Self { opts }
    }

    fn mark_pass(&self, graph: &Graph, solution: &mut Solution) -> usize {
        let mut marked = 0;
        for from in 0..graph.node_count() {
            for (to, weight) in graph.outgoing(from) {
                if admits(solution, from, to, weight, &self.opts) {
                    solution.distance[to] = Distance::NegativeInfinity;
                    solution.predecessor[to] = Predecessor::NegativeCycle;
                    marked += 1;
                }
            }
        }
        marked
    }
}

impl RelaxationStrategy for CycleMembership {
    fn kind(&self) -> StrategyKind {
        StrategyKind::CycleMembership
    }

    #[tracing::instrument(skip(self, graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
    fn solve(&self, graph: &Graph, source: usize) -> Result<Solution> {
        graph.check_source(source)?;
        let n = graph.node_count();
        let mut solution = Solution::start(n, source);

        for _ in 1..n {
            relax_all(graph, &mut solution, &self.opts);
        }

        for pass in 1..n {
            let marked = self.mark_pass(graph, &mut solution);
            if marked > 0 {
                debug!(pass, marked, "negative cycle contamination");
            }
        }

        let affected = solution.contaminated();
        solution.outcome = if affected.is_empty() {
            Outcome::NoNegativeCycle
        } else {
            Outcome::NegativeCycleMarked { affected }
        };

        debug!(outcome = ?solution.outcome, "cycle_membership");
        Ok(solution)
    }
}

#[cfg(test)]
mod tests;
