//! Built-in scenario graphs
//!
//! Small currency graphs with known answers, used by the demo driver, the
//! CLI, and the tests. Weights are either given directly (log-rate tables)
//! or derived from raw exchange rates through [`crate::arbitrage`].

use crate::arbitrage::graph_from_rates;
use crate::error::{NegCycleError, Result};
use crate::graph::algos::StrategyKind;
use crate::graph::model::Graph;

const X: Option<f64> = None;

const ALL_STRATEGIES: &[StrategyKind] = &StrategyKind::ALL;
const MEMBERSHIP_ONLY: &[StrategyKind] = &[StrategyKind::CycleMembership];

/// A named graph with the source and strategies it is meant to be run with
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub name: &'static str,
    pub description: &'static str,
    pub source: usize,
    pub strategies: &'static [StrategyKind],
    pub expect_negative_cycle: bool,
    build: fn() -> Result<Graph>,
}

impl Scenario {
    pub fn graph(&self) -> Result<Graph> {
        (self.build)()
    }
}

static SCENARIOS: [Scenario; 11] = [
    Scenario {
        name: "currency-basic",
        description: "5 currencies, negative edges, no negative cycle",
        source: 0,
        strategies: ALL_STRATEGIES,
        expect_negative_cycle: false,
        build: currency_basic,
    },
    Scenario {
        name: "sedgewick-tree",
        description: "6 currencies with negative edges, solved from CNY",
        source: 4,
        strategies: ALL_STRATEGIES,
        expect_negative_cycle: false,
        build: sedgewick_tree,
    },
    Scenario {
        name: "negative-cycle-membership",
        description: "8 nodes; YEN -> CNY -> GBP -> YEN is negative, EUR/XXX/YYY stay finite",
        source: 0,
        strategies: MEMBERSHIP_ONLY,
        expect_negative_cycle: true,
        build: negative_cycle_membership,
    },
    Scenario {
        name: "arbitrage-sedgewick-log",
        description: "5-currency log-rate table; every currency sits on an arbitrage loop",
        source: 0,
        strategies: MEMBERSHIP_ONLY,
        expect_negative_cycle: true,
        build: arbitrage_sedgewick_log,
    },
    Scenario {
        name: "arbitrage-three-cycle",
        description: "3-currency log-rate table with an arbitrage loop",
        source: 0,
        strategies: MEMBERSHIP_ONLY,
        expect_negative_cycle: true,
        build: arbitrage_three_cycle,
    },
    Scenario {
        name: "arbitrage-three-equal",
        description: "3-currency table adjusted to remove the loop; direct and indirect USD -> CHF tie",
        source: 0,
        strategies: MEMBERSHIP_ONLY,
        expect_negative_cycle: false,
        build: arbitrage_three_equal,
    },
    Scenario {
        name: "arbitrage-three-clean",
        description: "3-currency table without a loop; USD -> CHF is cheaper via YEN",
        source: 0,
        strategies: MEMBERSHIP_ONLY,
        expect_negative_cycle: false,
        build: arbitrage_three_clean,
    },
    Scenario {
        name: "arbitrage-five-clean",
        description: "5-currency table without a loop; every path goes through YEN",
        source: 0,
        strategies: MEMBERSHIP_ONLY,
        expect_negative_cycle: false,
        build: arbitrage_five_clean,
    },
    Scenario {
        name: "real-rates-cycle",
        description: "USD/CHF/YEN log rates containing a negative cycle",
        source: 0,
        strategies: MEMBERSHIP_ONLY,
        expect_negative_cycle: true,
        build: real_rates_cycle,
    },
    Scenario {
        name: "real-rates-clean",
        description: "USD/CHF/YEN log rates without a negative cycle",
        source: 0,
        strategies: MEMBERSHIP_ONLY,
        expect_negative_cycle: false,
        build: real_rates_clean,
    },
    Scenario {
        name: "sedgewick-rates",
        description: "5-currency raw exchange-rate table converted with -ln(rate)",
        source: 0,
        strategies: MEMBERSHIP_ONLY,
        expect_negative_cycle: true,
        build: sedgewick_rates,
    },
];

pub fn all() -> &'static [Scenario] {
    &SCENARIOS
}

pub fn find(name: &str) -> Result<&'static Scenario> {
    SCENARIOS
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| NegCycleError::UnknownScenario(name.to_string()))
}

fn currency_basic() -> Result<Graph> {
    Graph::from_weights(
        &["USD", "CHF", "YEN", "GBP", "CNY"],
        &[
            vec![Some(0.0), Some(6.0), Some(7.0), X, X],
            vec![X, Some(0.0), Some(8.0), Some(-4.0), Some(5.0)],
            vec![X, X, Some(0.0), Some(9.0), Some(-3.0)],
            vec![X, X, X, Some(0.0), Some(7.0)],
            vec![X, Some(-2.0), X, X, Some(0.0)],
        ],
    )
}

fn sedgewick_tree() -> Result<Graph> {
    Graph::from_weights(
        &["USD", "CHF", "YEN", "GBP", "CNY", "EUR"],
        &[
            vec![Some(0.0), Some(0.41), X, X, X, Some(0.29)],
            vec![X, Some(0.0), Some(0.51), X, Some(0.32), X],
            vec![X, X, Some(0.0), Some(0.50), X, X],
            vec![Some(0.45), X, X, Some(0.0), X, Some(-0.38)],
            vec![X, X, Some(0.32), Some(0.36), Some(0.0), X],
            vec![X, Some(-0.29), X, X, Some(0.21), Some(0.0)],
        ],
    )
}

fn negative_cycle_membership() -> Result<Graph> {
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
}

fn arbitrage_sedgewick_log() -> Result<Graph> {
    Graph::from_weights(
        &["USD", "CHF", "YEN", "GBP", "CNY"],
        &[
            vec![Some(0.0), Some(0.489), Some(-0.402), Some(-4.791), Some(-0.378)],
            vec![Some(-0.489), Some(0.0), Some(-0.891), Some(-5.278), Some(-0.865)],
            vec![Some(0.402), Some(0.89), Some(0.0), Some(-4.391), Some(0.027)],
            vec![Some(4.791), Some(5.285), Some(4.392), Some(0.0), Some(4.418)],
            vec![Some(0.378), Some(0.865), Some(-0.027), Some(-4.415), Some(0.0)],
        ],
    )
}

fn three_currencies(rows: [[f64; 3]; 3]) -> Result<Graph> {
    let rows: Vec<Vec<Option<f64>>> = rows
        .iter()
        .map(|row| row.iter().copied().map(Some).collect())
        .collect();
    Graph::from_weights(&["USD", "CHF", "YEN"], &rows)
}

fn arbitrage_three_cycle() -> Result<Graph> {
    three_currencies([
        [0.0, 0.489, -0.402],
        [-0.489, 0.0, -0.891],
        [0.402, 0.89, 0.0],
    ])
}

fn arbitrage_three_equal() -> Result<Graph> {
    three_currencies([
        [0.0, 0.490, -0.402],
        [-0.489, 0.0, -0.891],
        [0.403, 0.892, 0.0],
    ])
}

fn arbitrage_three_clean() -> Result<Graph> {
    three_currencies([
        [0.0, 0.490, -0.402],
        [-0.489, 0.0, -0.891],
        [0.403, 0.891, 0.0],
    ])
}

fn arbitrage_five_clean() -> Result<Graph> {
    Graph::from_weights(
        &["USD", "CHF", "YEN", "GBP", "CNY"],
        &[
            vec![Some(0.0), Some(0.490), Some(-0.402), Some(0.7), Some(0.413)],
            vec![Some(-0.489), Some(0.0), Some(-0.891), Some(0.89), Some(0.360)],
            vec![Some(0.403), Some(0.891), Some(0.0), Some(0.91), Some(0.581)],
            vec![Some(0.340), Some(0.405), Some(0.607), Some(0.0), Some(0.72)],
            vec![Some(0.403), Some(0.350), Some(0.571), Some(0.71), Some(0.0)],
        ],
    )
}

fn real_rates_cycle() -> Result<Graph> {
    three_currencies([[0.0, 0.1, -5.01], [-0.09, 0.0, -5.1], [5.0, 5.09, 0.0]])
}

fn real_rates_clean() -> Result<Graph> {
    three_currencies([[0.0, 0.12, -5.01], [-0.09, 0.0, -5.1], [5.02, 5.11, 0.0]])
}

fn sedgewick_rates() -> Result<Graph> {
    graph_from_rates(
        &["USD", "CHF", "YEN", "GBP", "CNY"],
        &[
            vec![Some(1.0), Some(1.631), Some(0.669), Some(0.008), Some(0.686)],
            vec![Some(0.613), Some(1.0), Some(0.411), Some(0.005), Some(0.421)],
            vec![Some(1.495), Some(2.436), Some(1.0), Some(0.012), Some(1.027)],
            vec![Some(120.5), Some(197.4), Some(80.82), Some(1.0), Some(82.91)],
            vec![Some(1.459), Some(2.376), Some(0.973), Some(0.012), Some(1.0)],
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_scenario_builds_a_valid_graph() {
        for scenario in all() {
            let graph = scenario.graph().unwrap();
            assert!(graph.check_source(scenario.source).is_ok(), "{}", scenario.name);
            assert!(!scenario.strategies.is_empty());
        }
    }

    #[test]
    fn test_scenario_names_are_unique() {
        let mut names: Vec<&str> = all().iter().map(|s| s.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_find() {
        assert_eq!(find("currency-basic").unwrap().source, 0);
        assert!(matches!(
            find("nope"),
            Err(NegCycleError::UnknownScenario(ref n)) if n == "nope"
        ));
    }

    #[test]
    fn test_fifo_only_listed_for_cycle_free_scenarios() {
        for scenario in all() {
            if scenario.strategies.contains(&StrategyKind::Fifo) {
                assert!(!scenario.expect_negative_cycle, "{}", scenario.name);
            }
        }
    }
}
