//! `forgetit access` command - record an access event

use chrono::{DateTime, Utc};
use forgetit_core::error::Result;
use forgetit_core::format::format_score;
use forgetit_core::resource::{AccessEvent, AccessKind, ResourceId};
use forgetit_core::store::ResourceStore;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{resource_json, resource_record};

/// Execute the access command
pub fn execute(
    cli: &Cli,
    store: &mut ResourceStore,
    id: &ResourceId,
    kind: AccessKind,
    now: DateTime<Utc>,
) -> Result<()> {
    let before = store.get(id)?.relevance;
    let resource = store.log_access(AccessEvent {
        resource_id: id.clone(),
        timestamp: now,
        kind: kind.clone(),
    })?;

    match cli.format {
        OutputFormat::Json => {
            let mut output = resource_json(resource);
            if let Some(obj) = output.as_object_mut() {
                obj.insert("access_kind".to_string(), serde_json::json!(kind));
                obj.insert("previous_relevance".to_string(), serde_json::json!(before));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "{} {}: relevance {} -> {}, level {}",
                    kind,
                    resource.id,
                    format_score(before),
                    format_score(resource.relevance),
                    resource.level()
                );
            }
        }
        OutputFormat::Records => {
            println!("H forgetit=1 records=1 mode=access kind={}", kind);
            println!("{}", resource_record(resource));
        }
    }
    Ok(())
}
