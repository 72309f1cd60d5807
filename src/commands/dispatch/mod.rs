//! Command dispatch logic for forgetit

use std::time::Instant;

use crate::cli::Cli;
use forgetit_core::error::Result;
use tracing::debug;

mod command;
mod commands;
mod handlers;
mod macros;

use command::{Command, CommandContext, NoCommand};
pub(crate) use macros::trace_command;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let ctx = CommandContext::new(cli, start);
    debug!(store = %cli.store.display(), "dispatch");

    match &cli.command {
        None => NoCommand.execute(&ctx),
        Some(cmd) => cmd.execute(&ctx),
    }
}
