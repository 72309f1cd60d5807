use chrono::{DateTime, Utc};

use forgetit_core::condensation::CondensationLevel;
use forgetit_core::dynamics::RelevanceModel;
use forgetit_core::format::OutputFormat;
use forgetit_core::resource::{AccessKind, Category, ResourceId};
use forgetit_core::store::SortKey;

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse relevance model from string
pub fn parse_model(s: &str) -> std::result::Result<RelevanceModel, String> {
    s.parse::<RelevanceModel>().map_err(|e| e.to_string())
}

/// Parse resource id from string
pub fn parse_resource_id(s: &str) -> std::result::Result<ResourceId, String> {
    s.parse::<ResourceId>().map_err(|e| e.to_string())
}

/// Parse category; unknown labels are kept and left uncondensed
pub fn parse_category(s: &str) -> std::result::Result<Category, String> {
    Ok(Category::parse(s))
}

/// Parse access kind; unknown labels are kept verbatim
pub fn parse_access_kind(s: &str) -> std::result::Result<AccessKind, String> {
    Ok(AccessKind::from(s.to_string()))
}

/// Parse sort key from string
pub fn parse_sort_key(s: &str) -> std::result::Result<SortKey, String> {
    s.parse::<SortKey>().map_err(|e| e.to_string())
}

/// Parse condensation level 0-5
pub fn parse_level(s: &str) -> std::result::Result<CondensationLevel, String> {
    let value: u8 = s
        .parse()
        .map_err(|_| format!("invalid condensation level '{}' (expected 0-5)", s))?;
    CondensationLevel::try_from(value).map_err(|e| e.to_string())
}

/// Parse a score in [0,1]
pub fn parse_unit(s: &str) -> std::result::Result<f64, String> {
    let value: f64 = s
        .parse()
        .map_err(|_| format!("invalid number '{}'", s))?;
    if !(0.0..=1.0).contains(&value) {
        return Err(format!("{} is outside [0,1]", value));
    }
    Ok(value)
}

/// Parse an RFC 3339 timestamp
pub fn parse_timestamp(s: &str) -> std::result::Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("invalid timestamp '{}': {}", s, e))
}

/// Parse a `key=value` context annotation.
/// The value is read as JSON when it parses, otherwise kept as a string.
pub fn parse_context_pair(
    s: &str,
) -> std::result::Result<(String, serde_json::Value), String> {
    let (key, raw) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid context '{}' (expected key=value)", s))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("invalid context '{}': empty key", s));
    }
    let value = serde_json::from_str(raw.trim())
        .unwrap_or_else(|_| serde_json::Value::String(raw.to_string()));
    Ok((key.to_string(), value))
}
