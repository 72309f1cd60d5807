//! `forgetit delete` command - remove a resource

use forgetit_core::error::Result;
use forgetit_core::resource::ResourceId;
use forgetit_core::store::ResourceStore;

use crate::cli::{Cli, OutputFormat};

/// Execute the delete command. The access log keeps the resource's events.
pub fn execute(cli: &Cli, store: &mut ResourceStore, id: &ResourceId) -> Result<()> {
    let removed = store.delete(id)?;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": removed.id,
                "title": removed.title,
                "deleted": true,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Deleted {} {}", removed.id, removed.title);
            }
        }
        OutputFormat::Records => {
            println!("H forgetit=1 records=1 mode=delete");
            println!("D {}", removed.id);
        }
    }
    Ok(())
}
