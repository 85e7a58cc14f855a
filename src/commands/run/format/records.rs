//! Records output formatting for run command

use negcycle_core::format::escape_quotes;
use negcycle_core::graph::{Outcome, PathOutcome};

use crate::commands::format::index_csv;
use crate::commands::run::RunReport;

/// Header, outcome, per-node distance, and per-path records
pub fn records_lines(report: &RunReport) -> Vec<String> {
    let mut lines = vec![format!(
        "H negcycle=1 records=1 mode=run scenario={} strategy={} source={} nodes={}",
        report.scenario.name,
        report.strategy,
        report.source,
        report.graph.node_count()
    )];

    let affected = match &report.outcome {
        Outcome::NegativeCycleMarked { affected } => index_csv(affected),
        _ => "-".to_string(),
    };
    lines.push(format!("O {} affected={}", report.outcome.as_str(), affected));

    for (index, distance) in report.distances.iter().enumerate() {
        lines.push(format!(
            "N {} \"{}\" distance={}",
            index,
            escape_quotes(report.graph.name(index)),
            distance
        ));
    }

    for (to, outcome) in &report.paths {
        let mut line = format!("P {} {} {}", report.source, to, outcome.status());
        if let PathOutcome::Found(path) = outcome {
            line.push_str(&format!(" cost={} nodes={}", path.cost, index_csv(&path.nodes)));
        }
        lines.push(line);
    }

    lines
}

/// Output in records format
pub fn output_records(report: &RunReport) {
    for line in records_lines(report) {
        println!("{}", line);
    }
}
