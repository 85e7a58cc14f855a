//! Result state of one strategy run and path reconstruction over it

use serde::Serialize;

use crate::error::{NegCycleError, Result};
use crate::graph::types::{Distance, Outcome, PathOutcome, Predecessor, ShortestPath};

/// Distance and predecessor arrays produced by a strategy, indexed by node
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Solution {
    pub source: usize,
    pub distance: Vec<Distance>,
    pub predecessor: Vec<Predecessor>,
    pub outcome: Outcome,
}

impl Solution {
    /// Fresh arrays for a run from `source`: everything unreached except
    /// the source itself.
    ///
    /// The outcome starts as `NoNegativeCycle` and is overwritten by the
    /// strategy when it finishes.
    pub(crate) fn start(node_count: usize, source: usize) -> Self {
        let mut distance = vec![Distance::Unreached; node_count];
        let mut predecessor = vec![Predecessor::Unreached; node_count];
        distance[source] = Distance::Finite(0.0);
        predecessor[source] = Predecessor::Source;
        Self {
            source,
            distance,
            predecessor,
            outcome: Outcome::NoNegativeCycle,
        }
    }

    pub fn node_count(&self) -> usize {
        self.distance.len()
    }

    /// Nodes whose distance was contaminated by a negative cycle
    pub fn contaminated(&self) -> Vec<usize> {
        self.distance
            .iter()
            .enumerate()
            .filter(|(_, d)| d.is_negative_infinity())
            .map(|(index, _)| index)
            .collect()
    }

    /// Rebuild the path from `start` to `finish` by walking predecessors.
    pub fn reconstruct_path(&self, start: usize, finish: usize) -> Result<PathOutcome> {
        let n = self.node_count();
        for index in [start, finish] {
            if index >= n {
                return Err(NegCycleError::node_out_of_range(index, n));
            }
        }

        Ok(self.walk(start, finish))
    }

    /// Predecessor walk for two in-range indexes
    fn walk(&self, start: usize, finish: usize) -> PathOutcome {
        let n = self.node_count();
        if !self.outcome.is_solved() {
            return PathOutcome::NotSolved;
        }

        let cost = match self.distance[finish] {
            Distance::NegativeInfinity => return PathOutcome::NegativeCycle,
            Distance::Unreached => return PathOutcome::NoPath,
            Distance::Finite(cost) => cost,
        };

        let mut nodes = Vec::new();
        let mut at = finish;
        loop {
            nodes.push(at);
            if at == start {
                break;
            }
            if nodes.len() > n {
                // Only an unconverged run can leave a loop in the predecessors
                return PathOutcome::NegativeCycle;
            }
            match self.predecessor[at] {
                Predecessor::Node(previous) => at = previous,
                Predecessor::Source | Predecessor::Unreached | Predecessor::NegativeCycle => {
                    break
                }
            }
        }

        if at != start {
            return PathOutcome::NoPath;
        }

        nodes.reverse();
        let cost = match self.distance[start] {
            Distance::Finite(offset) => cost - offset,
            _ => cost,
        };
        PathOutcome::Found(ShortestPath { nodes, cost })
    }

    /// One path outcome per destination, from this run's source
    pub fn reconstruct_all(&self) -> Vec<PathOutcome> {
        (0..self.node_count())
            .map(|finish| self.walk(self.source, finish))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 0 -> 1 -> 2, node 3 unreached
    fn chain() -> Solution {
        let mut solution = Solution::start(4, 0);
        solution.distance[1] = Distance::Finite(2.0);
        solution.distance[2] = Distance::Finite(-1.0);
        solution.predecessor[1] = Predecessor::Node(0);
        solution.predecessor[2] = Predecessor::Node(1);
        solution
    }

    #[test]
    fn test_start_initializes_arrays() {
        let solution = Solution::start(3, 1);
        assert_eq!(
            solution.distance,
            vec![Distance::Unreached, Distance::Finite(0.0), Distance::Unreached]
        );
        assert_eq!(solution.predecessor[1], Predecessor::Source);
        assert_eq!(solution.predecessor[0], Predecessor::Unreached);
    }

    #[test]
    fn test_reconstruct_found() {
        let outcome = chain().reconstruct_path(0, 2).unwrap();
        assert_eq!(
            outcome,
            PathOutcome::Found(ShortestPath {
                nodes: vec![0, 1, 2],
                cost: -1.0
            })
        );
    }

    #[test]
    fn test_reconstruct_self_path() {
        assert_eq!(chain().reconstruct_path(0, 0).unwrap().nodes(), &[0]);
    }

    #[test]
    fn test_reconstruct_unreached_is_no_path() {
        assert_eq!(chain().reconstruct_path(0, 3).unwrap(), PathOutcome::NoPath);
    }

    #[test]
    fn test_reconstruct_from_other_start_is_no_path() {
        assert_eq!(chain().reconstruct_path(1, 0).unwrap(), PathOutcome::NoPath);
        assert_eq!(
            chain().reconstruct_path(1, 2).unwrap(),
            PathOutcome::Found(ShortestPath {
                nodes: vec![1, 2],
                cost: -3.0
            })
        );
    }

    #[test]
    fn test_reconstruct_contaminated() {
        let mut solution = chain();
        solution.distance[2] = Distance::NegativeInfinity;
        solution.predecessor[2] = Predecessor::NegativeCycle;
        solution.outcome = Outcome::NegativeCycleMarked { affected: vec![2] };
        assert_eq!(
            solution.reconstruct_path(0, 2).unwrap(),
            PathOutcome::NegativeCycle
        );
        assert_eq!(solution.reconstruct_path(0, 1).unwrap().nodes(), &[0, 1]);
        assert_eq!(solution.contaminated(), vec![2]);
    }

    #[test]
    fn test_reconstruct_presence_only_cycle_is_not_solved() {
        let mut solution = chain();
        solution.outcome = Outcome::NegativeCycle;
        assert_eq!(
            solution.reconstruct_path(0, 1).unwrap(),
            PathOutcome::NotSolved
        );
    }

    #[test]
    fn test_reconstruct_predecessor_loop_is_bounded() {
        let mut solution = Solution::start(3, 0);
        solution.distance[1] = Distance::Finite(-5.0);
        solution.distance[2] = Distance::Finite(-6.0);
        solution.predecessor[1] = Predecessor::Node(2);
        solution.predecessor[2] = Predecessor::Node(1);
        solution.outcome = Outcome::RoundLimitExceeded { rounds: 4 };
        assert_eq!(
            solution.reconstruct_path(0, 2).unwrap(),
            PathOutcome::NegativeCycle
        );
    }

    #[test]
    fn test_reconstruct_out_of_range() {
        assert!(matches!(
            chain().reconstruct_path(0, 9),
            Err(NegCycleError::NodeOutOfRange { index: 9, .. })
        ));
    }

    #[test]
    fn test_reconstruct_all() {
        let all = chain().reconstruct_all();
        assert_eq!(all.len(), 4);
        assert_eq!(all[2].nodes(), &[0, 1, 2]);
        assert_eq!(all[3], PathOutcome::NoPath);
    }

    #[test]
    fn test_reconstruct_all_presence_only_is_not_solved() {
        let mut solution = chain();
        solution.outcome = Outcome::NegativeCycle;
        assert!(solution
            .reconstruct_all()
            .iter()
            .all(|p| *p == PathOutcome::NotSolved));
    }
}
