//! `forgetit edit` command - apply attribute edits atomically

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use forgetit_core::error::Result;
use forgetit_core::resource::{ContextMap, ResourceUpdate};
use forgetit_core::store::ResourceStore;

use crate::cli::{Cli, EditArgs};
use crate::commands::format::print_resource;

/// Translate CLI flags into a partial update
pub fn build_update(args: &EditArgs) -> Result<ResourceUpdate> {
    let tags = if args.clear_tags {
        Some(BTreeSet::new())
    } else if args.tag.is_empty() {
        None
    } else {
        Some(args.tag.iter().cloned().collect())
    };
    let context = if args.context.is_empty() {
        None
    } else {
        Some(args.context.iter().cloned().collect::<ContextMap>())
    };

    let update = ResourceUpdate {
        title: args.title.clone(),
        content: args.content.clone(),
        tags,
        context,
    };
    if update.title.is_none()
        && update.content.is_none()
        && update.tags.is_none()
        && update.context.is_none()
    {
        forgetit_core::bail_usage!("nothing to edit (use --title, --content, --tag, or --context)");
    }
    Ok(update)
}

/// Execute the edit command
pub fn execute(
    cli: &Cli,
    store: &mut ResourceStore,
    args: &EditArgs,
    now: DateTime<Utc>,
) -> Result<()> {
    let update = build_update(args)?;
    let resource = store.update(&args.id, update, now)?;
    print_resource(cli, "Updated", resource)
}
