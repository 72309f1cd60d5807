//! `forgetit list` command - filtered, sorted listing

use forgetit_core::error::Result;
use forgetit_core::store::{ResourceFilter, ResourceStore};

use crate::cli::{Cli, ListArgs};
use crate::commands::format::print_resources;

/// Execute the list command
pub fn execute(cli: &Cli, store: &ResourceStore, args: &ListArgs) -> Result<()> {
    let filter = ResourceFilter::new()
        .with_min_relevance(args.min_relevance)
        .with_min_preservation(args.min_preservation)
        .with_category(args.category.clone())
        .with_tag(args.tag.as_deref())
        .with_sort(args.sort);

    let resources = store.list(&filter);
    tracing::debug!(count = resources.len(), sort = %args.sort, "list");
    print_resources(cli, "list", &resources)
}
