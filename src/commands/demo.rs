//! `negcycle demo` command - every scenario with each of its strategies

use negcycle_core::error::Result;
use negcycle_core::scenarios;

use crate::cli::OutputFormat;
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::run::format::{human_lines, records_lines, report_json};
use crate::commands::run::{solve, RunReport};

fn demo_reports(ctx: &CommandContext) -> Result<Vec<RunReport>> {
    let opts = ctx.config.relax_options();
    let mut reports = Vec::new();
    for scenario in scenarios::all() {
        for &strategy in scenario.strategies {
            reports.push(solve(scenario, strategy, opts, scenario.source, None)?);
        }
    }
    Ok(reports)
}

pub fn execute(ctx: &CommandContext) -> Result<()> {
    let reports = demo_reports(ctx)?;
    trace_command!(ctx.cli, ctx.start, "demo_runs");

    match ctx.cli.format {
        OutputFormat::Json => {
            let output = reports
                .iter()
                .map(report_json)
                .collect::<Result<Vec<_>>>()?;
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            let mut current = "";
            for report in &reports {
                if report.scenario.name != current {
                    current = report.scenario.name;
                    if !ctx.cli.quiet {
                        println!();
                    }
                    println!("=== {}: {} ===", current, report.scenario.description);
                }
                println!("///////{}///////", report.strategy);
                for line in human_lines(report, ctx.config.report.show_distances) {
                    println!("{}", line);
                }
            }
        }
        OutputFormat::Records => {
            for report in &reports {
                for line in records_lines(report) {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}
