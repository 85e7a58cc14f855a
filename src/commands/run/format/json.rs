//! JSON output formatting for run command

use negcycle_core::error::Result;

use crate::commands::format::nodes_json;
use crate::commands::run::RunReport;

/// Build the JSON document for one run
pub fn report_json(report: &RunReport) -> Result<serde_json::Value> {
    let paths = report
        .paths
        .iter()
        .map(|(to, outcome)| -> Result<serde_json::Value> {
            let mut json = serde_json::to_value(outcome)?;
            if let Some(obj) = json.as_object_mut() {
                obj.insert("from".to_string(), serde_json::json!(report.source));
                obj.insert("to".to_string(), serde_json::json!(to));
            }
            Ok(json)
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(serde_json::json!({
        "scenario": report.scenario.name,
        "strategy": report.strategy,
        "source": report.source,
        "outcome": report.outcome,
        "nodes": nodes_json(report.graph.nodes()),
        "distances": report.distances,
        "paths": paths,
    }))
}

/// Output in JSON format
pub fn output_json(report: &RunReport) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&report_json(report)?)?);
    Ok(())
}
