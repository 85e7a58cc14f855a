//! Command trait and context for dispatching commands

use std::time::Instant;

use crate::cli::Cli;
use negcycle_core::config::EngineConfig;
use negcycle_core::error::Result;

/// Load the config named by `--config`, or the default one
pub fn load_config(cli: &Cli) -> Result<EngineConfig> {
    match &cli.config {
        Some(path) => EngineConfig::load(path),
        None => EngineConfig::load_default(),
    }
}

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub config: EngineConfig,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Result<Self> {
        Ok(Self {
            cli,
            config: load_config(cli)?,
            start,
        })
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}

/// No-op command (when no subcommand is provided)
pub struct NoCommand;

impl Command for NoCommand {
    fn execute(&self, _ctx: &CommandContext) -> Result<()> {
        println!("negcycle {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Negative-cycle detection and shortest paths over dense graphs.");
        println!();
        println!("Run `negcycle --help` for usage information.");
        Ok(())
    }
}
