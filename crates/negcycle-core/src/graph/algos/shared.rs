use serde::{Deserialize, Serialize};

use crate::graph::model::Graph;
use crate::graph::solution::Solution;
use crate::graph::types::Predecessor;

/// Knobs shared by every strategy
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelaxOptions {
    /// Minimum improvement for an edge to relax; 0.0 is the exact strict
    /// comparison
    #[serde(default)]
    pub tolerance: f64,
}

impl RelaxOptions {
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self { tolerance }
    }
}

/// Relax the edge `from -> to`, returning whether it improved `to`
pub(crate) fn relax(
    solution: &mut Solution,
    from: usize,
    to: usize,
    weight: f64,
    opts: &RelaxOptions,
) -> bool {
    let candidate = solution.distance[from].extend(weight);
    if candidate.improves_on(solution.distance[to], opts.tolerance) {
        solution.distance[to] = candidate;
        solution.predecessor[to] = Predecessor::Node(from);
        true
    } else {
        false
    }
}

/// Whether the edge `from -> to` would still improve `to`
pub(crate) fn admits(solution: &Solution, from: usize, to: usize, weight: f64, opts: &RelaxOptions) -> bool {
    solution.distance[from]
        .extend(weight)
        .improves_on(solution.distance[to], opts.tolerance)
}

/// One pass over every existing edge in matrix order
pub(crate) fn relax_all(graph: &Graph, solution: &mut Solution, opts: &RelaxOptions) -> bool {
    let mut updated = false;
    for from in 0..graph.node_count() {
        for (to, weight) in graph.outgoing(from) {
            updated |= relax(solution, from, to, weight, opts);
        }
    }
    updated
}

/// Whether any existing edge still relaxes, without changing anything
pub(crate) fn any_edge_relaxes(graph: &Graph, solution: &Solution, opts: &RelaxOptions) -> bool {
    (0..graph.node_count()).any(|from| {
        graph
            .outgoing(from)
            .any(|(to, weight)| admits(solution, from, to, weight, opts))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::types::Distance;

    #[test]
    fn test_relax_updates_distance_and_predecessor() {
        let mut solution = Solution::start(2, 0);
        assert!(relax(&mut solution, 0, 1, 4.0, &RelaxOptions::default()));
        assert_eq!(solution.distance[1], Distance::Finite(4.0));
        assert_eq!(solution.predecessor[1], Predecessor::Node(0));
        assert!(!relax(&mut solution, 0, 1, 4.0, &RelaxOptions::default()));
    }

    #[test]
    fn test_relax_from_unreached_never_updates() {
        let mut solution = Solution::start(3, 0);
        assert!(!relax(&mut solution, 1, 2, -100.0, &RelaxOptions::default()));
        assert_eq!(solution.distance[2], Distance::Unreached);
    }

    #[test]
    fn test_relax_respects_tolerance() {
        let mut solution = Solution::start(2, 0);
        solution.distance[1] = Distance::Finite(1.0);
        let opts = RelaxOptions::with_tolerance(0.01);
        assert!(!relax(&mut solution, 0, 1, 0.995, &opts));
        assert!(relax(&mut solution, 0, 1, 0.5, &opts));
    }

    #[test]
    fn test_relax_all_and_any_edge_relaxes() {
        let graph = Graph::from_weights(
            &["A", "B", "C"],
            &[
                vec![Some(0.0), Some(1.0), None],
                vec![None, Some(0.0), Some(2.0)],
                vec![None, None, Some(0.0)],
            ],
        )
        .unwrap();
        let mut solution = Solution::start(3, 0);
        let opts = RelaxOptions::default();
        assert!(relax_all(&graph, &mut solution, &opts));
        assert_eq!(solution.distance[2], Distance::Finite(3.0));
        assert!(!any_edge_relaxes(&graph, &solution, &opts));
        assert!(!relax_all(&graph, &mut solution, &opts));
    }
}
