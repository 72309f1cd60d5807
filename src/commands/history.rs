//! `forgetit history` command - snapshots and access log for a resource

use forgetit_core::condensation::CondensationSnapshot;
use forgetit_core::error::Result;
use forgetit_core::format::format_score;
use forgetit_core::resource::ResourceId;
use forgetit_core::store::ResourceStore;

use crate::cli::{Cli, OutputFormat};

/// Print a single captured snapshot
pub fn print_snapshot(cli: &Cli, id: &ResourceId, snapshot: &CondensationSnapshot) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(snapshot)?);
        }
        OutputFormat::Human => {
            println!("{}", snapshot_heading(snapshot));
            println!("{}", snapshot.content);
        }
        OutputFormat::Records => {
            println!("H forgetit=1 records=1 mode=snapshot");
            println!("{}", snapshot_record(id, snapshot));
        }
    }
    Ok(())
}

fn snapshot_heading(snapshot: &CondensationSnapshot) -> String {
    format!(
        "{}  relevance {}  level {}",
        snapshot.timestamp.format("%Y-%m-%d"),
        format_score(snapshot.relevance),
        snapshot.level
    )
}

fn snapshot_record(id: &ResourceId, snapshot: &CondensationSnapshot) -> String {
    format!(
        "S {} at={} relevance={} level={}",
        id,
        snapshot.timestamp.to_rfc3339(),
        format_score(snapshot.relevance),
        snapshot.level.as_u8()
    )
}

/// Execute the history command
pub fn execute(cli: &Cli, store: &ResourceStore, id: &ResourceId) -> Result<()> {
    let resource = store.get(id)?;
    let snapshots = store.snapshots(id);
    let events: Vec<_> = store.events_for(id).collect();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": resource.id,
                "title": resource.title,
                "snapshots": snapshots,
                "events": events,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{} {}", resource.id, resource.title);
            if snapshots.is_empty() && events.is_empty() && !cli.quiet {
                println!("No history recorded");
            }
            for snapshot in snapshots {
                println!();
                println!("{}", snapshot_heading(snapshot));
                println!("{}", snapshot.content);
            }
            if !events.is_empty() {
                println!();
                println!("Accesses:");
                for event in &events {
                    println!("  {} {}", event.timestamp.to_rfc3339(), event.kind);
                }
            }
        }
        OutputFormat::Records => {
            println!(
                "H forgetit=1 records=1 mode=history snapshots={} events={}",
                snapshots.len(),
                events.len()
            );
            for snapshot in snapshots {
                println!("{}", snapshot_record(id, snapshot));
            }
            for event in &events {
                println!("A {} at={} kind={}", id, event.timestamp.to_rfc3339(), event.kind);
            }
        }
    }
    Ok(())
}
