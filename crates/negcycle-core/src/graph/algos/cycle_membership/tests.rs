use super::*;
use crate::graph::types::PathOutcome;

/// USD -> CHF -> YEN -> CNY -> GBP -> YEN is a cycle of weight -1;
/// EUR, XXX, and YYY hang off CHF and are not reachable from it.
fn membership_graph() -> Graph {
    const X: Option<f64> = None;
    Graph::from_weights(
        &["USD", "CHF", "YEN", "GBP", "CNY", "EUR", "XXX", "YYY"],
        &[
            vec![Some(0.0), Some(1.0), X, X, X, X, X, X],
            vec![X, Some(0.0), Some(1.0), X, X, Some(4.0), Some(4.0), X],
            vec![X, X, Some(0.0), X, Some(1.0), X, X, X],
            vec![X, X, Some(1.0), Some(0.0), X, X, X, X],
            vec![X, X, X, Some(-3.0), Some(0.0), X, X, X],
            vec![X, X, X, X, X, Some(0.0), Some(5.0), Some(3.0)],
            vec![X, X, X, X, X, X, Some(0.0), Some(4.0)],
            vec![X, X, X, X, X, X, X, Some(0.0)],
        ],
    )
    .unwrap()
}

#[test]
fn test_marks_only_cycle_reachable_nodes() {
    let graph = membership_graph();
    let solution = CycleMembership::default().solve(&graph, 0).unwrap();

    assert_eq!(
        solution.outcome,
        Outcome::NegativeCycleMarked {
            affected: vec![2, 3, 4]
        }
    );
    for node in [2, 3, 4] {
        assert_eq!(solution.distance[node], Distance::NegativeInfinity);
        assert_eq!(solution.predecessor[node], Predecessor::NegativeCycle);
    }
    assert_eq!(solution.distance[5], Distance::Finite(5.0));
    assert_eq!(solution.distance[6], Distance::Finite(5.0));
    assert_eq!(solution.distance[7], Distance::Finite(8.0));
}

#[test]
fn test_paths_around_the_cycle() {
    let graph = membership_graph();
    let solution = CycleMembership::default().solve(&graph, 0).unwrap();

    assert_eq!(solution.reconstruct_path(0, 0).unwrap().nodes(), &[0]);
    assert_eq!(solution.reconstruct_path(0, 1).unwrap().nodes(), &[0, 1]);
    for node in [2, 3, 4] {
        assert_eq!(
            solution.reconstruct_path(0, node).unwrap(),
            PathOutcome::NegativeCycle
        );
    }
    assert_eq!(solution.reconstruct_path(0, 5).unwrap().nodes(), &[0, 1, 5]);
    assert_eq!(solution.reconstruct_path(0, 6).unwrap().nodes(), &[0, 1, 6]);
    assert_eq!(
        solution.reconstruct_path(0, 7).unwrap().nodes(),
        &[0, 1, 5, 7]
    );
}

#[test]
fn test_contamination_propagates_downstream() {
    // A -> B <-> C (negative) -> D -> E
    const X: Option<f64> = None;
    let graph = Graph::from_weights(
        &["A", "B", "C", "D", "E"],
        &[
            vec![Some(0.0), Some(1.0), X, X, X],
            vec![X, Some(0.0), Some(-2.0), X, X],
            vec![X, Some(1.0), Some(0.0), Some(10.0), X],
            vec![X, X, X, Some(0.0), Some(10.0)],
            vec![X, X, X, X, Some(0.0)],
        ],
    )
    .unwrap();
    let solution = CycleMembership::default().solve(&graph, 0).unwrap();

    assert_eq!(
        solution.outcome,
        Outcome::NegativeCycleMarked {
            affected: vec![1, 2, 3, 4]
        }
    );
    assert_eq!(solution.distance[0], Distance::Finite(0.0));
}

#[test]
fn test_whole_graph_contaminated_when_source_on_cycle() {
    let graph = Graph::from_weights(
        &["USD", "CHF", "YEN"],
        &[
            vec![Some(0.0), Some(0.1), Some(-5.01)],
            vec![Some(-0.09), Some(0.0), Some(-5.1)],
            vec![Some(5.0), Some(5.09), Some(0.0)],
        ],
    )
    .unwrap();
    let solution = CycleMembership::default().solve(&graph, 0).unwrap();

    assert!(solution.outcome.has_negative_cycle());
    assert_eq!(solution.contaminated(), vec![0, 1, 2]);
    assert_eq!(
        solution.reconstruct_path(0, 0).unwrap(),
        PathOutcome::NegativeCycle
    );
}

#[test]
fn test_clean_graph_matches_plain_relaxation() {
    let graph = Graph::from_weights(
        &["A", "B", "C"],
        &[
            vec![Some(0.0), Some(4.0), Some(1.0)],
            vec![None, Some(0.0), None],
            vec![None, Some(2.0), Some(0.0)],
        ],
    )
    .unwrap();
    let solution = CycleMembership::default().solve(&graph, 0).unwrap();

    assert_eq!(solution.outcome, Outcome::NoNegativeCycle);
    assert_eq!(solution.distance[1], Distance::Finite(3.0));
    assert_eq!(solution.reconstruct_path(0, 1).unwrap().nodes(), &[0, 2, 1]);
}
