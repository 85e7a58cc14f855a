//! `negcycle scenarios` command - list built-in scenarios

use negcycle_core::error::Result;
use negcycle_core::format::escape_quotes;
use negcycle_core::scenarios::{self, Scenario};

use crate::cli::OutputFormat;
use crate::commands::dispatch::CommandContext;

fn strategies_csv(scenario: &Scenario) -> String {
    scenario
        .strategies
        .iter()
        .map(|s| s.as_str())
        .collect::<Vec<_>>()
        .join(",")
}

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let all = scenarios::all();

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = all
                .iter()
                .map(|s| -> Result<serde_json::Value> {
                    Ok(serde_json::json!({
                        "name": s.name,
                        "description": s.description,
                        "source": s.source,
                        "nodes": s.graph()?.node_count(),
                        "strategies": s.strategies,
                        "negative_cycle": s.expect_negative_cycle,
                    }))
                })
                .collect::<Result<Vec<_>>>()?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for s in all {
                println!("{:<28} {}", s.name, s.description);
            }
        }
        OutputFormat::Records => {
            println!("H negcycle=1 records=1 mode=scenarios scenarios={}", all.len());
            for s in all {
                println!(
                    "S {} source={} nodes={} strategies={} \"{}\"",
                    s.name,
                    s.source,
                    s.graph()?.node_count(),
                    strategies_csv(s),
                    escape_quotes(s.description)
                );
            }
        }
    }

    Ok(())
}
