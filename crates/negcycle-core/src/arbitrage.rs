//! Currency arbitrage on top of the shortest-path engine
//!
//! An exchange rate `r` for `from -> to` becomes the edge weight `-ln(r)`.
//! A cycle whose rates multiply to more than 1 then has negative total
//! weight, so every arbitrage loop is a negative cycle.

use std::collections::BTreeSet;

use tracing::debug;

use crate::error::{NegCycleError, Result};
use crate::graph::algos::{CycleMembership, RelaxOptions, RelaxationStrategy};
use crate::graph::model::Graph;
use crate::graph::types::EdgeWeight;

/// Convert an exchange rate to an edge weight.
///
/// Rates must be positive and finite.
pub fn rate_to_weight(rate: f64) -> Option<f64> {
    if rate.is_finite() && rate > 0.0 {
        Some(-rate.ln())
    } else {
        None
    }
}

/// Build a graph from currency names and a row-major rate table.
///
/// `rates[from][to]` is how many units of `to` one unit of `from` buys;
/// `None` means the pair does not trade. The diagonal is always weight 0.
pub fn graph_from_rates<S: AsRef<str>>(names: &[S], rates: &[Vec<Option<f64>>]) -> Result<Graph> {
    let mut graph = Graph::new();
    for name in names {
        graph.add_node(name.as_ref());
    }

    let mut matrix = Vec::with_capacity(rates.len());
    for (from, row) in rates.iter().enumerate() {
        let mut weights = Vec::with_capacity(row.len());
        for (to, rate) in row.iter().enumerate() {
            let weight = match rate {
                _ if from == to => EdgeWeight::Finite(0.0),
                None => EdgeWeight::Absent,
                Some(rate) => match rate_to_weight(*rate) {
                    Some(w) => EdgeWeight::Finite(w),
                    None => {
                        return Err(NegCycleError::InvalidRate {
                            from: graph.name(from).to_string(),
                            to: graph.name(to).to_string(),
                            rate: *rate,
                        })
                    }
                },
            };
            weights.push(weight);
        }
        matrix.push(weights);
    }

    graph.set_matrix(matrix);
    graph.validate()?;
    Ok(graph)
}

/// Currencies reachable from a profitable exchange loop.
///
/// Runs cycle-membership detection from every currency that an earlier run
/// has not already covered, so loops unreachable from the first currency
/// are found too. Returns node indexes in ascending order.
pub fn opportunities(graph: &Graph, opts: RelaxOptions) -> Result<Vec<usize>> {
    let strategy = CycleMembership::new(opts);
    let mut covered = vec![false; graph.node_count()];
    let mut affected = BTreeSet::new();

    for source in 0..graph.node_count() {
        if covered[source] {
            continue;
        }
        let solution = strategy.solve(graph, source)?;
        for (node, distance) in solution.distance.iter().enumerate() {
            if distance.is_reached() {
                covered[node] = true;
            }
        }
        affected.extend(solution.contaminated());
    }

    debug!(affected = affected.len(), "arbitrage scan");
    Ok(affected.into_iter().collect())
}
