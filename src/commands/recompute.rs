//! `forgetit recompute` command - bulk score refresh

use chrono::{DateTime, Utc};
use forgetit_core::error::Result;
use forgetit_core::store::ResourceStore;

use crate::cli::{Cli, OutputFormat};

/// Execute the recompute command
pub fn execute(cli: &Cli, store: &mut ResourceStore, now: DateTime<Utc>) -> Result<()> {
    let count = store.recompute_all(now);
    let model = store.config().model;

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "recomputed": count,
                "model": model,
                "at": now,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("Recomputed {} resources ({} model)", count, model);
            }
        }
        OutputFormat::Records => {
            println!(
                "H forgetit=1 records=1 mode=recompute model={} resources={}",
                model, count
            );
        }
    }
    Ok(())
}
