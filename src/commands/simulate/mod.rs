//! `forgetit simulate` command - progressive condensation walkthrough
//!
//! Runs a fixed year-long timeline against four sample resources in an
//! in-memory store and prints how each one's content condenses as its
//! relevance decays and recovers.

pub mod scenario;

use chrono::{DateTime, Duration, Utc};
use forgetit_core::config::EngineConfig;
use forgetit_core::error::Result;
use forgetit_core::format::format_score;
use forgetit_core::resource::ResourceId;
use forgetit_core::store::ResourceStore;
use tracing::debug;

use crate::cli::{Cli, OutputFormat};

use self::scenario::{samples, Step, TIMELINE};

/// Play the timeline from `start`. Returns the store and the sample ids.
pub fn run_scenario(
    config: EngineConfig,
    start: DateTime<Utc>,
) -> Result<(ResourceStore, Vec<ResourceId>)> {
    let mut store = ResourceStore::new(config);
    let mut ids = Vec::new();
    for new in samples() {
        ids.push(store.create(new, start)?.id.clone());
    }

    let mut now = start;
    for step in TIMELINE {
        match *step {
            Step::Advance(days) => {
                store.advance_time(f64::from(days), now)?;
                now += Duration::days(i64::from(days));
            }
            Step::Access(index) => {
                store.read(&ids[index], now)?;
            }
            Step::Capture => {
                for id in &ids {
                    store.capture_snapshot(id, now)?;
                }
            }
        }
        debug!(?step, at = %now, "simulate_step");
    }

    Ok((store, ids))
}

/// Execute the simulate command
pub fn execute(cli: &Cli, config: EngineConfig, start: DateTime<Utc>) -> Result<()> {
    let (store, ids) = run_scenario(config, start)?;

    match cli.format {
        OutputFormat::Json => output_json(&store, &ids, start)?,
        OutputFormat::Human => output_human(&store, &ids, start)?,
        OutputFormat::Records => output_records(&store, &ids, start)?,
    }
    Ok(())
}

fn output_json(store: &ResourceStore, ids: &[ResourceId], start: DateTime<Utc>) -> Result<()> {
    let mut output = Vec::new();
    for id in ids {
        let resource = store.get(id)?;
        let snapshots: Vec<_> = store
            .snapshots(id)
            .iter()
            .map(|s| {
                serde_json::json!({
                    "day": (s.timestamp - start).num_days(),
                    "relevance": s.relevance,
                    "level": s.level.as_u8(),
                    "level_label": s.level.label(),
                    "content": s.content,
                })
            })
            .collect();
        output.push(serde_json::json!({
            "id": resource.id,
            "title": resource.title,
            "category": resource.category,
            "model": store.config().model,
            "snapshots": snapshots,
        }));
    }
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn output_human(store: &ResourceStore, ids: &[ResourceId], start: DateTime<Utc>) -> Result<()> {
    for (i, id) in ids.iter().enumerate() {
        let resource = store.get(id)?;
        if i > 0 {
            println!();
            println!("{}", "=".repeat(80));
            println!();
        }
        println!("{} ({})", resource.title, resource.category);
        for snapshot in store.snapshots(id) {
            println!();
            println!(
                "day {:>3}  relevance {}  level {}",
                (snapshot.timestamp - start).num_days(),
                format_score(snapshot.relevance),
                snapshot.level
            );
            for line in snapshot.content.lines() {
                println!("    {}", line);
            }
        }
    }
    Ok(())
}

fn output_records(store: &ResourceStore, ids: &[ResourceId], start: DateTime<Utc>) -> Result<()> {
    println!(
        "H forgetit=1 records=1 mode=simulate model={} resources={}",
        store.config().model,
        ids.len()
    );
    for id in ids {
        let resource = store.get(id)?;
        println!(
            "R {} {} \"{}\"",
            resource.id,
            resource.category,
            forgetit_core::format::escape_quotes(&resource.title)
        );
        for snapshot in store.snapshots(id) {
            println!(
                "S {} day={} relevance={} level={}",
                id,
                (snapshot.timestamp - start).num_days(),
                format_score(snapshot.relevance),
                snapshot.level.as_u8()
            );
        }
    }
    Ok(())
}
