use clap::{Args, ValueEnum};

use super::parse::{
    parse_category, parse_context_pair, parse_level, parse_resource_id, parse_sort_key,
    parse_unit,
};
use forgetit_core::condensation::CondensationLevel;
use forgetit_core::resource::{Category, ResourceId};
use forgetit_core::store::SortKey;

#[derive(Args, Debug, Clone)]
pub struct AddArgs {
    /// Resource title
    pub title: String,

    /// Content category (document, image, email, code, note, or any label)
    #[arg(long, short, default_value = "document", value_parser = parse_category)]
    pub category: Category,

    /// Content or reference string (read from stdin when omitted)
    #[arg(long)]
    pub content: Option<String>,

    /// Tags (can be specified multiple times)
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub tag: Vec<String>,

    /// Context annotation as key=value (can be specified multiple times)
    #[arg(long = "context", short = 'x', value_parser = parse_context_pair)]
    pub context: Vec<(String, serde_json::Value)>,

    /// Seed the starting relevance instead of computing it
    #[arg(long, value_parser = parse_unit)]
    pub relevance: Option<f64>,
}

#[derive(Args, Debug, Clone)]
pub struct EditArgs {
    /// Resource ID
    #[arg(value_parser = parse_resource_id)]
    pub id: ResourceId,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New content
    #[arg(long)]
    pub content: Option<String>,

    /// Replace tags (can be specified multiple times)
    #[arg(long, short, action = clap::ArgAction::Append)]
    pub tag: Vec<String>,

    /// Remove every tag
    #[arg(long, conflicts_with = "tag")]
    pub clear_tags: bool,

    /// Replace the context map with these key=value annotations
    #[arg(long = "context", short = 'x', value_parser = parse_context_pair)]
    pub context: Vec<(String, serde_json::Value)>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ListArgs {
    /// Only resources with relevance >= this value
    #[arg(long, value_parser = parse_unit)]
    pub min_relevance: Option<f64>,

    /// Only resources with preservation >= this value
    #[arg(long, value_parser = parse_unit)]
    pub min_preservation: Option<f64>,

    /// Filter by category
    #[arg(long, short, value_parser = parse_category)]
    pub category: Option<Category>,

    /// Filter by tag (exact match)
    #[arg(long, short)]
    pub tag: Option<String>,

    /// Sort key: relevance, preservation, last-accessed (descending)
    #[arg(long, short, default_value = "relevance", value_parser = parse_sort_key)]
    pub sort: SortKey,
}

#[derive(Args, Debug, Clone)]
pub struct CondenseArgs {
    /// Content category
    #[arg(long, short, value_parser = parse_category)]
    pub category: Category,

    /// Condensation level 0-5
    #[arg(
        long,
        short,
        value_parser = parse_level,
        conflicts_with = "score",
        required_unless_present = "score"
    )]
    pub level: Option<CondensationLevel>,

    /// Relevance score to classify into a level
    #[arg(long, value_parser = parse_unit)]
    pub score: Option<f64>,
}

/// Managed-forgetting recommendation kinds
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateKind {
    /// Relevance below the threshold, least relevant first
    Low,
    /// Low relevance but high preservation value
    Archive,
    /// Low relevance and low preservation value
    Deletion,
}
