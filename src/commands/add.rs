//! `forgetit add` command - create a resource

use std::io::{self, Read};

use chrono::{DateTime, Utc};
use forgetit_core::error::Result;
use forgetit_core::resource::NewResource;
use forgetit_core::store::ResourceStore;

use crate::cli::{AddArgs, Cli};
use crate::commands::format::print_resource;

/// Execute the add command
pub fn execute(
    cli: &Cli,
    store: &mut ResourceStore,
    args: &AddArgs,
    now: DateTime<Utc>,
) -> Result<()> {
    let content = match &args.content {
        Some(content) => content.clone(),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let mut new = NewResource::new(args.title.as_str(), args.category.clone(), content)
        .with_tags(args.tag.iter().map(String::as_str));
    new.context.extend(args.context.iter().cloned());
    if let Some(relevance) = args.relevance {
        new = new.with_initial_relevance(relevance);
    }

    let resource = store.create(new, now)?;
    print_resource(cli, "Created", resource)
}
