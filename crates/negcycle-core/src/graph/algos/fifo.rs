use std::collections::VecDeque;

use tracing::{debug, warn};

use crate::error::Result;
use crate::graph::algos::shared::{relax, RelaxOptions};
use crate::graph::algos::{RelaxationStrategy, StrategyKind};
use crate::graph::model::Graph;
use crate::graph::solution::Solution;
use crate::graph::types::Outcome;

/// Worklist entries; `RoundEnd` delimits one round of relaxation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Entry {
    Node(usize),
    RoundEnd,
}

/// FIFO worklist relaxation (path only).
///
/// Only nodes whose distance improved are re-examined. The run stops when
/// the queue drains (a true fixed point) or after more than `n` rounds.
///
/// This strategy has no negative-cycle protection. On a graph with a
/// reachable negative cycle it ends with [`Outcome::RoundLimitExceeded`]
/// and the arrays are not shortest paths. Use it only on graphs already
/// known to be free of negative cycles.
#[derive(Debug, Clone, Default)]
pub struct Fifo {
    opts: RelaxOptions,
}

impl Fifo {
    pub fn new(opts: RelaxOptions) -> Self {
        Self { opts }
    }
}

impl RelaxationStrategy for Fifo {
    fn kind(&self) -> StrategyKind {
        StrategyKind::Fifo
    }

    #[tracing::instrument(skip(self, graph), fields(nodes = graph.node_count(), edges = graph.edge_count()))]
    fn solve(&self, graph: &Graph, source: usize) -> Result<Solution> {
        graph.check_source(source)?;
        let n = graph.node_count();
        let mut solution = Solution::start(n, source);

        let mut queued = vec![false; n];
        let mut queue = VecDeque::from([Entry::Node(source), Entry::RoundEnd]);
        queued[source] = true;
        let mut rounds = 0;

        while let Some(entry) = queue.pop_front() {
            match entry {
                Entry::RoundEnd => {
                    if queue.is_empty() {
                        break;
                    }
                    rounds += 1;
                    if rounds > n {
                        warn!(
                            rounds,
                            "round limit exceeded; result is not a fixed point (negative cycle?)"
                        );
                        solution.outcome = Outcome::RoundLimitExceeded { rounds };
                        return Ok(solution);
                    }
                    queue.push_back(Entry::RoundEnd);
                }
                Entry::Node(from) => {
                    queued[from] = false;
                    for (to, weight) in graph.outgoing(from) {
                        if relax(&mut solution, from, to, weight, &self.opts) && !queued[to] {
                            queued[to] = true;
                            queue.push_back(Entry::Node(to));
                        }
                    }
                }
            }
        }

        solution.outcome = Outcome::NoNegativeCycle;
        debug!(rounds, "fifo converged");
        Ok(solution)
    }
}
