//! Command implementations for all negcycle commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::{arbitrage, compare, demo, run, scenarios};
use negcycle_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Scenarios => scenarios::execute(ctx),
            Commands::Run(args) => run::execute(ctx, args),
            Commands::Compare(args) => compare::execute(ctx, args),
            Commands::Arbitrage(args) => arbitrage::execute(ctx, args),
            Commands::Demo => demo::execute(ctx),
        }
    }
}
