use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ForgetItError;

/// Context key read as the relevance importance factor
pub const IMPORTANCE_KEY: &str = "importance";
/// Context key read as the preservation importance factor
pub const PRESERVATION_IMPORTANCE_KEY: &str = "preservation_importance";

/// Free-form annotations attached to a resource
pub type ContextMap = BTreeMap<String, serde_json::Value>;

/// Content category, selecting both scoring weights and the condensation strategy
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Category {
    #[default]
    Document,
    Image,
    Email,
    Code,
    Note,
    /// Any unrecognized label, kept verbatim. Never condensed.
    Other(String),
}

impl Category {
    pub const DOCUMENT: &'static str = "document";
    pub const IMAGE: &'static str = "image";
    pub const EMAIL: &'static str = "email";
    pub const CODE: &'static str = "code";
    pub const NOTE: &'static str = "note";

    /// Parse a label case-insensitively. Unknown labels map to `Other`.
    pub fn parse(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            Self::DOCUMENT => Category::Document,
            Self::IMAGE => Category::Image,
            Self::EMAIL => Category::Email,
            Self::CODE => Category::Code,
            Self::NOTE => Category::Note,
            _ => Category::Other(label.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Category::Document => Self::DOCUMENT,
            Category::Image => Self::IMAGE,
            Category::Email => Self::EMAIL,
            Category::Code => Self::CODE,
            Category::Note => Self::NOTE,
            Category::Other(label) => label,
        }
    }

    /// Compare categories by label, ignoring case for unrecognized labels too
    pub fn same_as(&self, other: &Category) -> bool {
        self.as_str().eq_ignore_ascii_case(other.as_str())
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, Category::Other(_))
    }
}

impl FromStr for Category {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Category::parse(s))
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::parse(&s)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.as_str().to_string()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Resource identifier with the `fg-` prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(String);

impl ResourceId {
    /// The standard ID prefix
    pub const PREFIX: &'static str = "fg-";

    /// Generate a fresh time-ordered id
    pub fn generate() -> Self {
        ResourceId(format!(
            "{}{}",
            Self::PREFIX,
            ulid::Ulid::new().to_string().to_lowercase()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ResourceId {
    type Err = ForgetItError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() <= Self::PREFIX.len() || !s.starts_with(Self::PREFIX) {
            return Err(ForgetItError::invalid_value("resource id", s));
        }
        Ok(ResourceId(s.to_string()))
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The unit of management
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: ResourceId,
    pub title: String,
    pub category: Category,
    /// Raw content or an opaque reference string
    pub content: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub context: ContextMap,
    pub created_at: DateTime<Utc>,
    pub last_accessed: DateTime<Utc>,
    pub access_count: u64,
    /// Cached relevance score (memory buoyancy) in [0,1]
    pub relevance: f64,
    /// Cached preservation score in [0,1]
    pub preservation: f64,
}

impl Resource {
    /// Build a fresh resource. Scores start at zero until the caller computes them.
    pub fn new(new: NewResource, now: DateTime<Utc>) -> Self {
        Resource {
            id: ResourceId::generate(),
            title: new.title,
            category: new.category,
            content: new.content,
            tags: new.tags,
            context: new.context,
            created_at: now,
            last_accessed: now,
            access_count: 0,
            relevance: 0.0,
            preservation: 0.0,
        }
    }

    /// Numeric context value, if present
    pub fn context_number(&self, key: &str) -> Option<f64> {
        self.context.get(key).and_then(serde_json::Value::as_f64)
    }

    /// Record one access: bump the count and move the last-access timestamp
    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.last_accessed = now;
        self.access_count = self.access_count.saturating_add(1);
    }

    /// Apply every field of an edit at once
    pub fn apply_update(&mut self, update: ResourceUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(context) = update.context {
            self.context = context;
        }
    }

    /// Format tags as comma-separated values, using "-" for empty tags
    pub fn format_tags(&self) -> String {
        if self.tags.is_empty() {
            "-".to_string()
        } else {
            self.tags.iter().cloned().collect::<Vec<_>>().join(",")
        }
    }
}

/// Attributes supplied when creating a resource
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewResource {
    pub title: String,
    pub category: Category,
    pub content: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub context: ContextMap,
    /// Starting relevance for simulations; computed from attributes when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_relevance: Option<f64>,
}

impl NewResource {
    pub fn new(title: impl Into<String>, category: Category, content: impl Into<String>) -> Self {
        NewResource {
            title: title.into(),
            category,
            content: content.into(),
            ..Default::default()
        }
    }

    /// Add tags
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Set a numeric context annotation
    pub fn with_context(mut self, key: impl Into<String>, value: f64) -> Self {
        self.context.insert(key.into(), serde_json::json!(value));
        self
    }

    /// Seed the starting relevance
    pub fn with_initial_relevance(mut self, relevance: f64) -> Self {
        self.initial_relevance = Some(relevance);
        self
    }
}

/// Partial edit; `None` fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResourceUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<BTreeSet<String>>,
    pub context: Option<ContextMap>,
}

/// Kind of access recorded in the event log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AccessKind {
    View,
    Edit,
    Share,
    Other(String),
}

impl From<String> for AccessKind {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "view" => AccessKind::View,
            "edit" => AccessKind::Edit,
            "share" => AccessKind::Share,
            _ => AccessKind::Other(s),
        }
    }
}

impl From<AccessKind> for String {
    fn from(kind: AccessKind) -> Self {
        kind.to_string()
    }
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AccessKind::View => write!(f, "view"),
            AccessKind::Edit => write!(f, "edit"),
            AccessKind::Share => write!(f, "share"),
            AccessKind::Other(kind) => write!(f, "{}", kind),
        }
    }
}

/// One immutable access log entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessEvent {
    pub resource_id: ResourceId,
    pub timestamp: DateTime<Utc>,
    pub kind: AccessKind,
}
