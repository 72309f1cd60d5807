//! `forgetit advance` command - let simulated time pass

use chrono::{DateTime, Utc};
use forgetit_core::error::Result;
use forgetit_core::store::{ResourceFilter, ResourceStore};

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::print_resources;

/// Execute the advance command, then list the updated resources
pub fn execute(
    cli: &Cli,
    store: &mut ResourceStore,
    days: f64,
    now: DateTime<Utc>,
) -> Result<()> {
    let count = store.advance_time(days, now)?;
    if cli.format == OutputFormat::Human && !cli.quiet {
        println!(
            "Advanced {} resources by {} days ({} model)",
            count,
            days,
            store.config().model
        );
    }
    let resources = store.list(&ResourceFilter::new());
    print_resources(cli, "advance", &resources)
}
