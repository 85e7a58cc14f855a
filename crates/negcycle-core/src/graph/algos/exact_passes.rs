use tracing::debug;

use crate::error::Result;
use crate::graph::algos::shared::{relax, RelaxOptions};
use crate::graph::algos::{RelaxationStrategy, StrategyKind};
use crate::graph::model::Graph;
use crate::graph::solution::Solution;
use crate::graph::types::{Outcome, Predecessor};

/// Exactly `n` passes, relaxing only from nodes already reached.
///
/// A shortest path uses at most `n-1` edges, so an update during pass `n`
/// proves a negative cycle. Like [`super::EarlyExit`] this reports
/// presence only.
#[derive(Debug, Clone, Default)]
pub struct ExactPasses {
    opts: RelaxOptions,
}

impl ExactPasses {
    pub fn new(opts: RelaxOptions) -> Self {
        Self { opts }
    }
}

impl RelaxationStrategy for ExactPasses {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ExactPasses
    }

    #[tracing::instrument(skip(self, graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
    fn solve(&self, graph: &Graph, source: usize) -> Result<Solution> {
        graph.check_source(source)?;
        let n = graph.node_count();
        let mut solution = Solution::start(n, source);

        let mut last_pass_updated = false;
        for pass in 0..n {
            let mut updated = false;
            for from in 0..n {
                if from != source && solution.predecessor[from] == Predecessor::Unreached {
                    continue;
                }
                for (to, weight) in graph.outgoing(from) {
                    updated |= relax(&mut solution, from, to, weight, &self.opts);
                }
            }
            if pass == n - 1 {
                last_pass_updated = updated;
            }
        }

        solution.outcome = if last_pass_updated {
            Outcome::NegativeCycle
        } else {
            Outcome::NoNegativeCycle
        };

        debug!(passes = n, outcome = ?solution.outcome, "exact_passes");
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Distance;

    #[test]
    fn test_negative_self_loop_is_a_cycle() {
        let graph = Graph::from_weights(&["A"], &[vec![Some(-1.0)]]).unwrap();
        let solution = ExactPasses::default().solve(&graph, 0).unwrap();
        assert_eq!(solution.outcome, Outcome::NegativeCycle);
    }

    #[test]
    fn test_unreachable_cycle_is_ignored() {
        // B <-> C is negative but nothing reaches it from A
        let graph = Graph::from_weights(
            &["A", "B", "C"],
            &[
                vec![Some(0.0), None, None],
                vec![None, Some(0.0), Some(-3.0)],
                vec![None, Some(1.0), Some(0.0)],
            ],
        )
        .unwrap();
        let solution = ExactPasses::default().solve(&graph, 0).unwrap();
        assert_eq!(solution.outcome, Outcome::NoNegativeCycle);
        assert_eq!(solution.distance[1], Distance::Unreached);
        assert_eq!(solution.predecessor[2], Predecessor::Unreached);
    }
}
