//! `forgetit classify` command - map a score to its condensation level

use forgetit_core::condensation::classify;
use forgetit_core::error::Result;

use crate::cli::{Cli, OutputFormat};

/// Execute the classify command
pub fn execute(cli: &Cli, score: f64) -> Result<()> {
    let level = classify(score);
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "score": score,
                "level": level.as_u8(),
                "level_label": level.label(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => println!("{}", level),
        OutputFormat::Records => println!("L score={} level={}", score, level.as_u8()),
    }
    Ok(())
}
