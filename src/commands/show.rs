//! `forgetit show` command - display a resource at its condensation level

use chrono::{DateTime, Utc};
use forgetit_core::error::Result;
use forgetit_core::format::format_score;
use forgetit_core::resource::{Resource, ResourceId};
use forgetit_core::store::ResourceStore;

use crate::cli::{Cli, OutputFormat};
use crate::commands::format::{resource_json, resource_record};

/// Execute the show command. Unless `peek` is set this logs a view.
pub fn execute(
    cli: &Cli,
    store: &mut ResourceStore,
    id: &ResourceId,
    peek: bool,
    now: DateTime<Utc>,
) -> Result<()> {
    let resource = if peek {
        store.get(id)?
    } else {
        store.read(id, now)?
    };
    let condensed = resource.condensed();

    match cli.format {
        OutputFormat::Json => {
            let mut output = resource_json(resource);
            if let Some(obj) = output.as_object_mut() {
                obj.insert("content".to_string(), serde_json::json!(resource.content));
                obj.insert("condensed".to_string(), serde_json::json!(condensed));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => print_human(resource, &condensed),
        OutputFormat::Records => {
            println!("H forgetit=1 records=1 mode=show");
            println!("{}", resource_record(resource));
            println!("B {}", resource.id);
            println!("{}", condensed);
            println!("B-END");
        }
    }
    Ok(())
}

fn print_human(resource: &Resource, condensed: &str) {
    println!("{} {}", resource.id, resource.title);
    println!(
        "category: {}  level: {}",
        resource.category,
        resource.level()
    );
    println!(
        "relevance: {}  preservation: {}",
        format_score(resource.relevance),
        format_score(resource.preservation)
    );
    println!(
        "accesses: {}  last accessed: {}",
        resource.access_count,
        resource.last_accessed.to_rfc3339()
    );
    println!("tags: {}", resource.format_tags());
    println!("---");
    println!("{}", condensed);
}
