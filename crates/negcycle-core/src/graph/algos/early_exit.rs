use tracing::debug;

use crate::error::Result;
use crate::graph::algos::shared::{any_edge_relaxes, relax_all, RelaxOptions};
use crate::graph::algos::{RelaxationStrategy, StrategyKind};
use crate::graph::model::Graph;
use crate::graph::solution::Solution;
use crate::graph::types::Outcome;

/// Full relaxation with early exit.
///
/// Runs up to `n-1` passes over every edge and stops at the first pass
/// that changes nothing. If the last executed pass still changed
/// something, one verification pass decides whether a negative cycle
/// exists. Only presence is reported: affected nodes are not marked and
/// the arrays are left as they were, so path queries report "not solved".
///
/// With a single node no pass runs at all, so a negative self-loop on that
/// node is not detected.
#[derive(Debug, Clone, Default)]
pub struct EarlyExit {
    opts: RelaxOptions,
}

impl EarlyExit {
    pub fn new(opts: RelaxOptions) -> Self {
        Self { opts }
    }
}

impl RelaxationStrategy for EarlyExit {
    fn kind(&self) -> StrategyKind {
        StrategyKind::EarlyExit
    }

    #[tracing::instrument(skip(self, graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
    fn solve(&self, graph: &Graph, source: usize) -> Result<Solution> {
        graph.check_source(source)?;
        let n = graph.node_count();
        let mut solution = Solution::start(n, source);

        let mut updated = false;
        let mut passes = 0;
        for _ in 1..n {
            passes += 1;
            updated = relax_all(graph, &mut solution, &self.opts);
            if !updated {
                break;
            }
        }

        solution.outcome = if updated && any_edge_relaxes(graph, &solution, &self.opts) {
            Outcome::NegativeCycle
        } else {
            Outcome::NoNegativeCycle
        };

        debug!(passes, outcome = ?solution.outcome, "early_exit");
        Ok(solution)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::{Distance, PathOutcome};

    #[test]
    fn test_stops_at_fixed_point() {
        let graph = Graph::from_weights(
            &["A", "B"],
            &[vec![Some(0.0), Some(-1.0)], vec![None, Some(0.0)]],
        )
        .unwrap();
        let solution = EarlyExit::default().solve(&graph, 0).unwrap();
        assert_eq!(solution.outcome, Outcome::NoNegativeCycle);
        assert_eq!(solution.distance[1], Distance::Finite(-1.0));
    }

    #[test]
    fn test_two_node_negative_cycle() {
        let graph = Graph::from_weights(
            &["A", "B"],
            &[vec![Some(0.0), Some(1.0)], vec![Some(-2.0), Some(0.0)]],
        )
        .unwrap();
        let solution = EarlyExit::default().solve(&graph, 0).unwrap();
        assert_eq!(solution.outcome, Outcome::NegativeCycle);
        assert_eq!(
            solution.reconstruct_path(0, 1).unwrap(),
            PathOutcome::NotSolved
        );
    }

    #[test]
    fn test_single_node_has_no_passes() {
        let graph = Graph::from_weights(&["A"], &[vec![Some(0.0)]]).unwrap();
        let solution = EarlyExit::default().solve(&graph, 0).unwrap();
        assert_eq!(solution.outcome, Outcome::NoNegativeCycle);
        assert_eq!(solution.reconstruct_path(0, 0).unwrap().nodes(), &[0]);
    }
}
