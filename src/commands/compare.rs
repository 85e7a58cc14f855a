//! `negcycle compare` command - run every strategy on one scenario
//!
//! Reports each strategy's outcome and whether the strategies that reached
//! a proven fixed point agree on every distance.

use negcycle_core::error::Result;
use negcycle_core::graph::{Distance, RelaxOptions, StrategyKind};
use negcycle_core::scenarios::{self, Scenario};

use crate::cli::{CompareArgs, OutputFormat};
use crate::commands::dispatch::{trace_command, CommandContext};
use crate::commands::run::{solve, RunReport};

/// Smallest distance difference treated as disagreement
const MIN_EPSILON: f64 = 1e-9;

#[derive(Debug)]
pub struct Comparison {
    pub runs: Vec<RunReport>,
    /// Converged strategies whose distances differ from the first converged one
    pub disagreeing: Vec<StrategyKind>,
    /// Whether every cycle-detecting strategy gave the same verdict
    pub verdicts_agree: bool,
}

impl Comparison {
    pub fn converged(&self) -> impl Iterator<Item = &RunReport> {
        self.runs.iter().filter(|r| r.outcome.is_trusted())
    }
}

fn distances_agree(a: &[Distance], b: &[Distance], epsilon: f64) -> bool {
    a.len() == b.len()
        && a.iter().zip(b).all(|(x, y)| match (x, y) {
            (Distance::Finite(x), Distance::Finite(y)) => (x - y).abs() <= epsilon,
            _ => x == y,
        })
}

pub fn compare(scenario: &'static Scenario, opts: RelaxOptions, source: usize) -> Result<Comparison> {
    let runs = StrategyKind::ALL
        .iter()
        .map(|&kind| solve(scenario, kind, opts, source, None))
        .collect::<Result<Vec<_>>>()?;

    let epsilon = opts.tolerance.max(MIN_EPSILON);
    let mut converged = runs.iter().filter(|r| r.outcome.is_trusted());
    let disagreeing = match converged.next() {
        Some(reference) => converged
            .filter(|r| !distances_agree(&reference.distances, &r.distances, epsilon))
            .map(|r| r.strategy)
            .collect(),
        None => Vec::new(),
    };

    let mut verdicts = runs
        .iter()
        .filter(|r| r.strategy.detects_cycles())
        .map(|r| r.outcome.has_negative_cycle());
    let first = verdicts.next();
    let verdicts_agree = verdicts.all(|v| Some(v) == first);

    Ok(Comparison {
        runs,
        disagreeing,
        verdicts_agree,
    })
}

pub fn execute(ctx: &CommandContext, args: &CompareArgs) -> Result<()> {
    let scenario = scenarios::find(&args.scenario)?;
    let opts = args
        .tolerance
        .map_or_else(|| ctx.config.relax_options(), RelaxOptions::with_tolerance);
    let source = args.source.unwrap_or(scenario.source);

    let comparison = compare(scenario, opts, source)?;
    trace_command!(ctx.cli, ctx.start, "compare");

    match ctx.cli.format {
        OutputFormat::Json => {
            let runs: Vec<_> = comparison
                .runs
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "strategy": r.strategy,
                        "outcome": r.outcome,
                        "distances": r.distances,
                    })
                })
                .collect();
            let output = serde_json::json!({
                "scenario": scenario.name,
                "source": source,
                "runs": runs,
                "converged": comparison.converged().count(),
                "disagreeing": comparison.disagreeing,
                "verdicts_agree": comparison.verdicts_agree,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !ctx.cli.quiet {
                println!("{} (source {})", scenario.name, source);
            }
            for r in &comparison.runs {
                println!("{:<18} {}", r.strategy.as_str(), r.outcome.as_str());
            }
            println!("{}", summary(&comparison));
        }
        OutputFormat::Records => {
            println!(
                "H negcycle=1 records=1 mode=compare scenario={} source={} strategies={}",
                scenario.name,
                source,
                comparison.runs.len()
            );
            for r in &comparison.runs {
                println!("R {} {}", r.strategy, r.outcome.as_str());
            }
            let disagreeing: Vec<&str> =
                comparison.disagreeing.iter().map(|k| k.as_str()).collect();
            println!(
                "A converged={} verdicts_agree={} disagreeing={}",
                comparison.converged().count(),
                comparison.verdicts_agree,
                if disagreeing.is_empty() {
                    "-".to_string()
                } else {
                    disagreeing.join(",")
                }
            );
        }
    }

    Ok(())
}

fn summary(comparison: &Comparison) -> String {
    let converged = comparison.converged().count();
    let mut summary = if converged == 0 {
        "No strategy converged; distances not compared.".to_string()
    } else if comparison.disagreeing.is_empty() {
        format!("Distances agree across {} converged strategies.", converged)
    } else {
        let names: Vec<&str> = comparison.disagreeing.iter().map(|k| k.as_str()).collect();
        format!("Distances disagree: {}.", names.join(", "))
    };
    if !comparison.verdicts_agree {
        summary.push_str(" Cycle verdicts disagree.");
    }
    summary
}
