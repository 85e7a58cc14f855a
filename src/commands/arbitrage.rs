//! `negcycle arbitrage` command - currencies reachable from a profitable loop

use negcycle_core::arbitrage::opportunities;
use negcycle_core::error::Result;
use negcycle_core::format::escape_quotes;
use negcycle_core::graph::RelaxOptions;
use negcycle_core::scenarios;

use crate::cli::{ArbitrageArgs, OutputFormat};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::format::node_label;

pub fn execute(ctx: &CommandContext, args: &ArbitrageArgs) -> Result<()> {
    let scenario = scenarios::find(&args.scenario)?;
    let graph = scenario.graph()?;
    let opts = args
        .tolerance
        .map_or_else(|| ctx.config.relax_options(), RelaxOptions::with_tolerance);

    let affected = opportunities(&graph, opts)?;
    trace_command!(ctx.cli, ctx.start, "arbitrage_scan");

    match ctx.cli.format {
        OutputFormat::Json => {
            let currencies: Vec<_> = affected
                .iter()
                .filter_map(|&index| graph.node(index))
                .collect();
            let output = serde_json::json!({
                "scenario": scenario.name,
                "opportunity": !affected.is_empty(),
                "currencies": currencies,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if affected.is_empty() {
                println!("No arbitrage opportunity.");
            } else {
                let labels: Vec<String> =
                    affected.iter().map(|&i| node_label(&graph, i)).collect();
                println!("Arbitrage opportunities: {}", labels.join(" "));
            }
        }
        OutputFormat::Records => {
            println!(
                "H negcycle=1 records=1 mode=arbitrage scenario={} currencies={}",
                scenario.name,
                affected.len()
            );
            for &index in &affected {
                println!("A {} \"{}\"", index, escape_quotes(graph.name(index)));
            }
        }
    }

    Ok(())
}
