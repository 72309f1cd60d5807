//! `forgetit condense` command - stateless condensation of stdin

use std::io::{self, Read};

use forgetit_core::condensation::{classify, condense};
use forgetit_core::error::Result;

use crate::cli::{Cli, CondenseArgs, OutputFormat};

/// Execute the condense command
pub fn execute(cli: &Cli, args: &CondenseArgs) -> Result<()> {
    let level = match (args.level, args.score) {
        (Some(level), _) => level,
        (None, Some(score)) => classify(score),
        (None, None) => forgetit_core::bail_usage!("either --level or --score is required"),
    };

    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    let condensed = condense(&content, &args.category, level);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "category": args.category,
                "level": level.as_u8(),
                "level_label": level.label(),
                "content": condensed,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", condensed),
        OutputFormat::Records => {
            println!(
                "H forgetit=1 records=1 mode=condense category={} level={}",
                args.category,
                level.as_u8()
            );
            println!("B");
            println!("{}", condensed);
            println!("B-END");
        }
    }
    Ok(())
}
