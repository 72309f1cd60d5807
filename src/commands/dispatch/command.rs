//! Command trait and context for dispatching commands

use std::time::Instant;

use chrono::{DateTime, Utc};

use crate::cli::Cli;
use forgetit_core::config::EngineConfig;
use forgetit_core::error::Result;
use forgetit_core::store::ResourceStore;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// The instant commands evaluate at: `--now`, else the wall clock
    pub fn now(&self) -> DateTime<Utc> {
        self.cli.now.unwrap_or_else(Utc::now)
    }

    /// Engine configuration with the `--model` override applied
    pub fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = EngineConfig::resolve(self.cli.config.as_deref())?;
        if let Some(model) = self.cli.model {
            config.model = model;
        }
        Ok(config)
    }

    pub fn open_store(&self) -> Result<ResourceStore> {
        ResourceStore::open(&self.cli.store, self.engine_config()?)
    }

    pub fn save_store(&self, store: &ResourceStore) -> Result<()> {
        store.save(&self.cli.store)
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
        println!("forgetit {}", env!("CARGO_PKG_VERSION"));
        println!();
        println!("Managed forgetting: relevance decay and progressive condensation.");
        println!();
        println!("Run `forgetit --help` for usage information.");
        Ok(())
    }
}
