//! CLI argument parsing for forgetit
//!
//! Global flags: --store, --config, --model, --now, --format, --quiet, --verbose

pub mod args;
pub mod parse;

use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use forgetit_core::dynamics::RelevanceModel;
use forgetit_core::resource::{AccessKind, ResourceId};
use forgetit_core::store::io::DEFAULT_STORE_FILE;

pub use args::{AddArgs, CandidateKind, CondenseArgs, EditArgs, ListArgs};
pub use forgetit_core::format::OutputFormat;
use parse::{parse_access_kind, parse_format, parse_model, parse_resource_id, parse_timestamp};

/// ForgetIt - managed forgetting for personal information
#[derive(Parser, Debug)]
#[command(name = "forgetit")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Store file holding resources and the access log
    #[arg(long, global = true, env = "FORGETIT_STORE", default_value = DEFAULT_STORE_FILE)]
    pub store: PathBuf,

    /// Engine configuration file (TOML)
    #[arg(long, global = true, env = "FORGETIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured relevance model (recomputed, evolving)
    #[arg(long, global = true, value_parser = parse_model)]
    pub model: Option<RelevanceModel>,

    /// Evaluate at this instant instead of the current time (RFC 3339)
    #[arg(long, global = true, value_parser = parse_timestamp)]
    pub now: Option<DateTime<Utc>>,

    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing for major phases
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. debug, forgetit_core=trace)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a resource (content from --content or stdin)
    Add(AddArgs),

    /// Show a resource and its condensed content (logs a view)
    Show {
        /// Resource ID
        #[arg(value_parser = parse_resource_id)]
        id: ResourceId,

        /// Do not record a view access
        #[arg(long)]
        peek: bool,
    },

    /// Edit a resource's attributes (logs an edit)
    Edit(EditArgs),

    /// Delete a resource
    Delete {
        /// Resource ID
        #[arg(value_parser = parse_resource_id)]
        id: ResourceId,
    },

    /// Record an access to a resource
    Access {
        /// Resource ID
        #[arg(value_parser = parse_resource_id)]
        id: ResourceId,

        /// Access kind (view, edit, share, or any label)
        #[arg(long, short, default_value = "view", value_parser = parse_access_kind)]
        kind: AccessKind,
    },

    /// List resources
    List(ListArgs),

    /// Recompute cached scores for every resource
    Recompute,

    /// Let simulated days pass for every resource
    Advance {
        /// Number of days
        days: f64,
    },

    /// Managed-forgetting recommendations
    Candidates {
        /// Recommendation kind
        #[arg(value_enum)]
        kind: CandidateKind,

        /// Relevance threshold for `low` (defaults to the configured value)
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Condense content from stdin without touching the store
    Condense(CondenseArgs),

    /// Map a relevance score to its condensation level
    Classify {
        /// Relevance score in [0,1]
        score: f64,
    },

    /// Capture a condensation snapshot of a resource
    Snapshot {
        /// Resource ID
        #[arg(value_parser = parse_resource_id)]
        id: ResourceId,
    },

    /// Show snapshots and access history for a resource
    History {
        /// Resource ID
        #[arg(value_parser = parse_resource_id)]
        id: ResourceId,
    },

    /// Run the built-in progressive condensation scenario in memory
    /// (evolving model unless --model is given)
    Simulate,
}
