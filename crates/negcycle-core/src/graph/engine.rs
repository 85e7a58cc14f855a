//! Stateful driver: owns one strategy and the result of its last run

use std::time::Instant;

use tracing::info;

use crate::error::Result;
use crate::graph::algos::{RelaxOptions, RelaxationStrategy, StrategyKind};
use crate::graph::model::Graph;
use crate::graph::solution::Solution;
use crate::graph::types::{Outcome, PathOutcome};
use crate::trace_time;

/// Runs a strategy over a graph and answers path queries on the result.
///
/// Each `run` replaces the previous result. Queries before the first run
/// report [`PathOutcome::NotSolved`].
pub struct Engine {
    strategy: Box<dyn RelaxationStrategy>,
    solution: Option<Solution>,
}

impl Engine {
    pub fn new(kind: StrategyKind, opts: RelaxOptions) -> Self {
        Self::with_strategy(kind.build(opts))
    }

    pub fn with_strategy(strategy: Box<dyn RelaxationStrategy>) -> Self {
        Self {
            strategy,
            solution: None,
        }
    }

    pub fn kind(&self) -> StrategyKind {
        self.strategy.kind()
    }

    /// Solve from `source`, keeping the result for later queries
    pub fn run(&mut self, graph: &Graph, source: usize) -> Result<Outcome> {
        self.solution = None;
        let start = Instant::now();
        let solution = self.strategy.solve(graph, source)?;
        trace_time!(start, "engine_run", strategy = self.kind().as_str());

        match &solution.outcome {
            Outcome::RoundLimitExceeded { rounds } => {
                info!(
                    strategy = self.kind().as_str(),
                    rounds, "run stopped before a fixed point"
                );
            }
            outcome if outcome.has_negative_cycle() => {
                info!(strategy = self.kind().as_str(), source, "negative cycle detected");
            }
            _ => {}
        }

        let outcome = solution.outcome.clone();
        self.solution = Some(solution);
        Ok(outcome)
    }

    /// Whether the last run left arrays that paths can be read from
    pub fn is_solved(&self) -> bool {
        self.solution
            .as_ref()
            .is_some_and(|solution| solution.outcome.is_solved())
    }

    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }

    pub fn reconstruct_path(&self, start: usize, finish: usize) -> Result<PathOutcome> {
        match &self.solution {
            Some(solution) => solution.reconstruct_path(start, finish),
            None => Ok(PathOutcome::NotSolved),
        }
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("strategy", &self.kind())
            .field("solution", &self.solution)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NegCycleError;
    use crate::graph::types::Distance;

    fn triangle() -> Graph {
        Graph::from_weights(
            &["A", "B", "C"],
            &[
                vec![Some(0.0), Some(4.0), Some(1.0)],
                vec![None, Some(0.0), None],
                vec![None, Some(2.0), Some(0.0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_query_before_run_is_not_solved() {
        let engine = Engine::new(StrategyKind::CycleMembership, RelaxOptions::default());
        assert!(!engine.is_solved());
        assert_eq!(engine.reconstruct_path(0, 1).unwrap(), PathOutcome::NotSolved);
    }

    #[test]
    fn test_run_then_query() {
        let mut engine = Engine::new(StrategyKind::EarlyExit, RelaxOptions::default());
        let outcome = engine.run(&triangle(), 0).unwrap();
        assert_eq!(outcome, Outcome::NoNegativeCycle);
        assert!(engine.is_solved());
        assert_eq!(engine.reconstruct_path(0, 1).unwrap().nodes(), &[0, 2, 1]);
    }

    fn two_cycle() -> Graph {
        Graph::from_weights(
            &["A", "B", "C"],
            &[
                vec![Some(0.0), Some(1.0), None],
                vec![Some(-2.0), Some(0.0), Some(3.0)],
                vec![None, None, Some(0.0)],
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rerun_is_idempotent() {
        for graph in [triangle(), two_cycle()] {
            for kind in StrategyKind::ALL {
                let mut engine = Engine::new(kind, RelaxOptions::default());
                let first_outcome = engine.run(&graph, 0).unwrap();
                let first = engine.solution().cloned();
                let second_outcome = engine.run(&graph, 0).unwrap();
                assert_eq!(second_outcome, first_outcome, "{kind}");
                assert_eq!(engine.solution().cloned(), first, "{kind}");
            }
        }
    }

    #[test]
    fn test_rerun_overwrites_previous_source() {
        let graph = triangle();
        let mut engine = Engine::new(StrategyKind::Fifo, RelaxOptions::default());
        engine.run(&graph, 0).unwrap();
        engine.run(&graph, 2).unwrap();
        let solution = engine.solution().unwrap();
        assert_eq!(solution.source, 2);
        assert_eq!(solution.distance[0], Distance::Unreached);
        assert_eq!(solution.distance[1], Distance::Finite(2.0));
    }

    #[test]
    fn test_failed_run_clears_previous_result() {
        let mut engine = Engine::new(StrategyKind::CycleMembership, RelaxOptions::default());
        engine.run(&triangle(), 0).unwrap();
        let err = engine.run(&triangle(), 7).unwrap_err();
        assert!(matches!(err, NegCycleError::NodeOutOfRange { index: 7, .. }));
        assert!(engine.solution().is_none());
    }

    #[test]
    fn test_presence_only_cycle_is_not_solved() {
        let graph = Graph::from_weights(
            &["A", "B"],
            &[vec![Some(0.0), Some(1.0)], vec![Some(-2.0), Some(0.0)]],
        )
        .unwrap();
        let mut engine = Engine::new(StrategyKind::EarlyExit, RelaxOptions::default());
        assert_eq!(engine.run(&graph, 0).unwrap(), Outcome::NegativeCycle);
        assert!(!engine.is_solved());
        assert_eq!(engine.reconstruct_path(0, 1).unwrap(), PathOutcome::NotSolved);
    }
}
