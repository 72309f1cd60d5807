//! Shared resource rendering for human, JSON, and records output

use forgetit_core::error::Result;
use forgetit_core::format::{escape_quotes, format_score};
use forgetit_core::resource::Resource;

use crate::cli::{Cli, OutputFormat};

/// Build the JSON object for a resource (without content)
pub fn resource_json(resource: &Resource) -> serde_json::Value {
    let level = resource.level();
    serde_json::json!({
        "id": resource.id,
        "title": resource.title,
        "category": resource.category,
        "tags": resource.tags,
        "context": resource.context,
        "created_at": resource.created_at,
        "last_accessed": resource.last_accessed,
        "access_count": resource.access_count,
        "relevance": resource.relevance,
        "preservation": resource.preservation,
        "level": level.as_u8(),
        "level_label": level.label(),
    })
}

/// One `R` line per resource
pub fn resource_record(resource: &Resource) -> String {
    format!(
        "R {} {} relevance={} preservation={} level={} accesses={} tags={} \"{}\"",
        resource.id,
        resource.category,
        format_score(resource.relevance),
        format_score(resource.preservation),
        resource.level().as_u8(),
        resource.access_count,
        resource.format_tags(),
        escape_quotes(&resource.title)
    )
}

/// Compact single-line summary
pub fn resource_line(resource: &Resource) -> String {
    format!(
        "{} [{}] {} (relevance {}, preservation {})",
        resource.id,
        resource.level().as_u8(),
        resource.title,
        format_score(resource.relevance),
        format_score(resource.preservation)
    )
}

/// Print a resource listing in the selected format
pub fn print_resources(cli: &Cli, mode: &str, resources: &[&Resource]) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = resources.iter().map(|r| resource_json(r)).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if resources.is_empty() {
                if !cli.quiet {
                    println!("No resources found");
                }
                return Ok(());
            }
            for resource in resources {
                println!("{}", resource_line(resource));
            }
        }
        OutputFormat::Records => {
            println!(
                "H forgetit=1 records=1 mode={} resources={}",
                mode,
                resources.len()
            );
            for resource in resources {
                println!("{}", resource_record(resource));
            }
        }
    }
    Ok(())
}

/// Print one resource after a mutation: id only when quiet
pub fn print_resource(cli: &Cli, action: &str, resource: &Resource) -> Result<()> {
    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&resource_json(resource))?);
        }
        OutputFormat::Human => {
            if cli.quiet {
                println!("{}", resource.id);
            } else {
                println!("{} {}", action, resource_line(resource));
            }
        }
        OutputFormat::Records => {
            println!("H forgetit=1 records=1 mode={}", action.to_lowercase());
            println!("{}", resource_record(resource));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use forgetit_core::resource::{Category, NewResource};

    fn sample() -> Resource {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut resource = Resource::new(
            NewResource::new("Say \"hi\"", Category::Note, "hello").with_tags(["b", "a"]),
            now,
        );
        resource.relevance = 0.45;
        resource.preservation = 0.125;
        resource
    }

    #[test]
    fn test_resource_record() {
        let resource = sample();
        let record = resource_record(&resource);
        assert!(record.starts_with(&format!("R {} note ", resource.id)));
        assert!(record.contains("relevance=0.45"));
        assert!(record.contains("level=2"));
        assert!(record.contains("tags=a,b"));
        assert!(record.ends_with(r#""Say \"hi\"""#));
    }

    #[test]
    fn test_resource_json_level() {
        let json = resource_json(&sample());
        assert_eq!(json["level"], 2);
        assert_eq!(json["level_label"], "medium");
        assert_eq!(json["category"], "note");
        assert_eq!(json["tags"], serde_json::json!(["a", "b"]));
    }
}
