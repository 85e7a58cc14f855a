//! Human-readable output formatting for run command

use negcycle_core::graph::Outcome;

use crate::cli::Cli;
use crate::commands::format::path_line;
use crate::commands::run::RunReport;

/// Report lines: cycle status, then one line per destination
pub fn human_lines(report: &RunReport, show_distances: bool) -> Vec<String> {
    let mut lines = Vec::new();

    match &report.outcome {
        outcome if outcome.has_negative_cycle() => {
            lines.push("Graph contains negative cycle.".to_string());
        }
        Outcome::RoundLimitExceeded { rounds } => {
            lines.push(format!(
                "Warning: stopped after {} rounds; distances may not be shortest paths.",
                rounds
            ));
        }
        _ => {}
    }

    for (to, outcome) in &report.paths {
        lines.push(path_line(
            &report.graph,
            report.source,
            *to,
            outcome,
            show_distances,
        ));
    }

    lines
}

/// Output in human-readable format
pub fn output_human(cli: &Cli, report: &RunReport, show_distances: bool) {
    if !cli.quiet {
        println!(
            "{} ({} nodes, source {}, strategy {})",
            report.scenario.name,
            report.graph.node_count(),
            report.source,
            report.strategy
        );
    }
    for line in human_lines(report, show_distances) {
        println!("{}", line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::run::solve;
    use negcycle_core::graph::{RelaxOptions, StrategyKind};
    use negcycle_core::scenarios;

    fn report(name: &str, strategy: StrategyKind) -> RunReport {
        let scenario = scenarios::find(name).unwrap();
        solve(scenario, strategy, RelaxOptions::default(), scenario.source, None).unwrap()
    }

    #[test]
    fn test_clean_graph_lines() {
        let lines = human_lines(&report("currency-basic", StrategyKind::EarlyExit), false);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "Path from 0 to 0 is : 0(USD) ");
        assert_eq!(
            lines[1],
            "Path from 0 to 1 is : 0(USD) 2(YEN) 4(CNY) 1(CHF) "
        );
    }

    #[test]
    fn test_membership_lines() {
        let lines = human_lines(
            &report("negative-cycle-membership", StrategyKind::CycleMembership),
            false,
        );
        assert_eq!(lines[0], "Graph contains negative cycle.");
        assert_eq!(
            lines[3],
            "Path from 0 to 2 is : Infinite number of shortest paths (negative cycle)."
        );
        assert_eq!(lines[8], "Path from 0 to 7 is : 0(USD) 1(CHF) 5(EUR) 7(YYY) ");
    }

    #[test]
    fn test_presence_only_lines() {
        let lines = human_lines(
            &report("negative-cycle-membership", StrategyKind::ExactPasses),
            false,
        );
        assert_eq!(lines[0], "Graph contains negative cycle.");
        assert!(lines[1..].iter().all(|l| l == "Not solved."));
    }

    #[test]
    fn test_show_distances() {
        let lines = human_lines(&report("currency-basic", StrategyKind::Fifo), true);
        assert_eq!(lines[3], "Path from 0 to 3 is : 0(USD) 2(YEN) 4(CNY) 1(CHF) 3(GBP) (cost -2)");
    }
}
