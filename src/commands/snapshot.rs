//! `forgetit snapshot` command - capture a condensation snapshot

use chrono::{DateTime, Utc};
use forgetit_core::error::Result;
use forgetit_core::resource::ResourceId;
use forgetit_core::store::ResourceStore;

use crate::cli::Cli;
use crate::commands::history::print_snapshot;

/// Execute the snapshot command
pub fn execute(
    cli: &Cli,
    store: &mut ResourceStore,
    id: &ResourceId,
    now: DateTime<Utc>,
) -> Result<()> {
    let snapshot = store.capture_snapshot(id, now)?;
    print_snapshot(cli, id, snapshot)
}
