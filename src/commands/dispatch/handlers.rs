//! Handlers for store-backed commands
//!
//! Each handler opens the store, runs one command against it, and writes it
//! back when the command changed anything.

use forgetit_core::error::Result;
use forgetit_core::resource::{AccessKind, ResourceId};

use crate::cli::{AddArgs, CandidateKind, EditArgs, ListArgs};
use crate::commands;

use super::command::CommandContext;
use super::trace_command;

pub(super) fn handle_add(ctx: &CommandContext, args: &AddArgs) -> Result<()> {
    let mut store = ctx.open_store()?;
    trace_command!(ctx.cli, ctx.start, "open_store");
    commands::add::execute(ctx.cli, &mut store, args, ctx.now())?;
    ctx.save_store(&store)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_show(ctx: &CommandContext, id: &ResourceId, peek: bool) -> Result<()> {
    let mut store = ctx.open_store()?;
    trace_command!(ctx.cli, ctx.start, "open_store");
    commands::show::execute(ctx.cli, &mut store, id, peek, ctx.now())?;
    if !peek {
        ctx.save_store(&store)?;
    }
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_edit(ctx: &CommandContext, args: &EditArgs) -> Result<()> {
    let mut store = ctx.open_store()?;
    trace_command!(ctx.cli, ctx.start, "open_store");
    commands::edit::execute(ctx.cli, &mut store, args, ctx.now())?;
    ctx.save_store(&store)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_delete(ctx: &CommandContext, id: &ResourceId) -> Result<()> {
    let mut store = ctx.open_store()?;
    commands::delete::execute(ctx.cli, &mut store, id)?;
    ctx.save_store(&store)
}

pub(super) fn handle_access(ctx: &CommandContext, id: &ResourceId, kind: &AccessKind) -> Result<()> {
    let mut store = ctx.open_store()?;
    commands::access::execute(ctx.cli, &mut store, id, kind.clone(), ctx.now())?;
    ctx.save_store(&store)
}

pub(super) fn handle_list(ctx: &CommandContext, args: &ListArgs) -> Result<()> {
    let store = ctx.open_store()?;
    trace_command!(ctx.cli, ctx.start, "open_store");
    commands::list::execute(ctx.cli, &store, args)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_recompute(ctx: &CommandContext) -> Result<()> {
    let mut store = ctx.open_store()?;
    trace_command!(ctx.cli, ctx.start, "open_store");
    commands::recompute::execute(ctx.cli, &mut store, ctx.now())?;
    ctx.save_store(&store)?;
    trace_command!(ctx.cli, ctx.start, "execute_command");
    Ok(())
}

pub(super) fn handle_advance(ctx: &CommandContext, days: f64) -> Result<()> {
    let mut store = ctx.open_store()?;
    commands::advance::execute(ctx.cli, &mut store, days, ctx.now())?;
    ctx.save_store(&store)
}

pub(super) fn handle_candidates(
    ctx: &CommandContext,
    kind: CandidateKind,
    threshold: Option<f64>,
) -> Result<()> {
    let store = ctx.open_store()?;
    commands::candidates::execute(ctx.cli, &store, kind, threshold)
}

pub(super) fn handle_snapshot(ctx: &CommandContext, id: &ResourceId) -> Result<()> {
    let mut store = ctx.open_store()?;
    commands::snapshot::execute(ctx.cli, &mut store, id, ctx.now())?;
    ctx.save_store(&store)
}

pub(super) fn handle_history(ctx: &CommandContext, id: &ResourceId) -> Result<()> {
    let store = ctx.open_store()?;
    commands::history::execute(ctx.cli, &store, id)
}
