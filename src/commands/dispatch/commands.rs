//! Command implementations for all forgetit commands

use crate::cli::Commands;
use crate::commands::dispatch::command::{Command, CommandContext};
use crate::commands::dispatch::handlers;
use forgetit_core::dynamics::RelevanceModel;
use forgetit_core::error::Result;

impl Command for Commands {
    fn execute(&self, ctx: &CommandContext) -> Result<()> {
        match self {
            Commands::Add(args) => handlers::handle_add(ctx, args),
            Commands::Show { id, peek } => handlers::handle_show(ctx, id, *peek),
            Commands::Edit(args) => handlers::handle_edit(ctx, args),
            Commands::Delete { id } => handlers::handle_delete(ctx, id),
            Commands::Access { id, kind } => handlers::handle_access(ctx, id, kind),
            Commands::List(args) => handlers::handle_list(ctx, args),
            Commands::Recompute => handlers::handle_recompute(ctx),
            Commands::Advance { days } => handlers::handle_advance(ctx, *days),
            Commands::Candidates { kind, threshold } => {
                handlers::handle_candidates(ctx, *kind, *threshold)
            }
            Commands::Condense(args) => crate::commands::condense::execute(ctx.cli, args),
            Commands::Classify { score } => crate::commands::classify::execute(ctx.cli, *score),
            Commands::Snapshot { id } => handlers::handle_snapshot(ctx, id),
            Commands::History { id } => handlers::handle_history(ctx, id),
            Commands::Simulate => {
                let mut config = ctx.engine_config()?;
                if ctx.cli.model.is_none() {
                    config.model = RelevanceModel::Evolving;
                }
                crate::commands::simulate::execute(ctx.cli, config, ctx.now())
            }
        }
    }
}
