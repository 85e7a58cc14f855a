//! `negcycle run` command - run one strategy on a scenario
//!
//! Prints the cycle status followed by the reconstructed path from the
//! source to every destination (or to the single `--to` node).

pub mod format;

use negcycle_core::error::Result;
use negcycle_core::graph::{
    Distance, Engine, Graph, Outcome, PathOutcome, RelaxOptions, StrategyKind,
};
use negcycle_core::scenarios::{self, Scenario};

use crate::cli::{OutputFormat, RunArgs};
use crate::commands::dispatch::{trace_command, CommandContext};

use self::format::{output_human, output_json, output_records};

/// Everything one strategy run produced, ready for any output format
#[derive(Debug)]
pub struct RunReport {
    pub scenario: &'static Scenario,
    pub graph: Graph,
    pub strategy: StrategyKind,
    pub source: usize,
    pub outcome: Outcome,
    pub distances: Vec<Distance>,
    pub paths: Vec<(usize, PathOutcome)>,
}

/// Solve `scenario` with `strategy` and collect the paths to `destinations`
/// (every node when `None`)
pub fn solve(
    scenario: &'static Scenario,
    strategy: StrategyKind,
    opts: RelaxOptions,
    source: usize,
    destinations: Option<&[usize]>,
) -> Result<RunReport> {
    let graph = scenario.graph()?;
    let mut engine = Engine::new(strategy, opts);
    let outcome = engine.run(&graph, source)?;

    let all: Vec<usize> = (0..graph.node_count()).collect();
    let destinations = destinations.unwrap_or(&all);
    let paths = destinations
        .iter()
        .map(|&to| Ok((to, engine.reconstruct_path(source, to)?)))
        .collect::<Result<Vec<_>>>()?;

    let distances = engine
        .solution()
        .map(|solution| solution.distance.clone())
        .unwrap_or_default();

    Ok(RunReport {
        scenario,
        graph,
        strategy,
        source,
        outcome,
        distances,
        paths,
    })
}

/// Execute the run command
pub fn execute(ctx: &CommandContext, args: &RunArgs) -> Result<()> {
    let scenario = scenarios::find(&args.scenario)?;
    let strategy = args.strategy.unwrap_or(ctx.config.engine.default_strategy);
    let opts = args
        .tolerance
        .map_or_else(|| ctx.config.relax_options(), RelaxOptions::with_tolerance);
    let source = args.source.unwrap_or(scenario.source);

    let to = args.to.map(|to| vec![to]);
    let report = solve(scenario, strategy, opts, source, to.as_deref())?;
    trace_command!(ctx.cli, ctx.start, "solve");

    match ctx.cli.format {
        OutputFormat::Json => output_json(&report)?,
        OutputFormat::Human => output_human(ctx.cli, &report, ctx.config.report.show_distances),
        OutputFormat::Records => output_records(&report),
    }

    Ok(())
}
