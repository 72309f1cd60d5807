//! Resource listing and managed-forgetting recommendations

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ForgetItError;
use crate::resource::{Category, Resource};

use super::ResourceStore;

/// Field used to order listings (always descending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Relevance,
    Preservation,
    LastAccessed,
}

impl FromStr for SortKey {
    type Err = ForgetItError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "relevance" | "memory_buoyancy" => Ok(SortKey::Relevance),
            "preservation" | "preservation_value" => Ok(SortKey::Preservation),
            "last_accessed" => Ok(SortKey::LastAccessed),
            other => Err(ForgetItError::unsupported(
                "sort key",
                other,
                "relevance, preservation, last-accessed",
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortKey::Relevance => write!(f, "relevance"),
            SortKey::Preservation => write!(f, "preservation"),
            SortKey::LastAccessed => write!(f, "last-accessed"),
        }
    }
}

/// Filter configuration for listings
#[derive(Debug, Clone, Default)]
pub struct ResourceFilter<'a> {
    /// Keep resources with relevance >= this value
    pub min_relevance: Option<f64>,
    /// Keep resources with preservation >= this value
    pub min_preservation: Option<f64>,
    pub category: Option<Category>,
    /// Exact (case-sensitive) tag match
    pub tag: Option<&'a str>,
    pub sort: SortKey,
}

impl<'a> ResourceFilter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_relevance(mut self, min: Option<f64>) -> Self {
        self.min_relevance = min;
        self
    }

    pub fn with_min_preservation(mut self, min: Option<f64>) -> Self {
        self.min_preservation = min;
        self
    }

    pub fn with_category(mut self, category: Option<Category>) -> Self {
        self.category = category;
        self
    }

    pub fn with_tag(mut self, tag: Option<&'a str>) -> Self {
        self.tag = tag;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Check whether a resource passes every configured filter
    pub fn matches(&self, resource: &Resource) -> bool {
        if self.min_relevance.is_some_and(|min| resource.relevance < min) {
            return false;
        }
        if self
            .min_preservation
            .is_some_and(|min| resource.preservation < min)
        {
            return false;
        }
        if self
            .category
            .as_ref()
            .is_some_and(|category| !resource.category.same_as(category))
        {
            return false;
        }
        if let Some(tag) = self.tag {
            if !resource.tags.contains(tag) {
                return false;
            }
        }
        true
    }
}

fn by_score(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

impl ResourceStore {
    /// Filtered, sorted listing
    pub fn list(&self, filter: &ResourceFilter<'_>) -> Vec<&Resource> {
        let mut resources: Vec<&Resource> =
            self.resources().filter(|r| filter.matches(r)).collect();

        resources.sort_by(|a, b| {
            match filter.sort {
                SortKey::Relevance => by_score(b.relevance, a.relevance),
                SortKey::Preservation => by_score(b.preservation, a.preservation),
                SortKey::LastAccessed => b.last_accessed.cmp(&a.last_accessed),
            }
            .then_with(|| a.id.cmp(&b.id))
        });
        resources
    }

    /// Resources with relevance below `threshold`, least relevant first
    pub fn low_relevance(&self, threshold: f64) -> Vec<&Resource> {
        let mut resources: Vec<&Resource> = self
            .resources()
            .filter(|r| r.relevance < threshold)
            .collect();
        resources.sort_by(|a, b| by_score(a.relevance, b.relevance).then_with(|| a.id.cmp(&b.id)));
        resources
    }

    /// Not currently relevant but worth keeping: most valuable first
    pub fn archive_candidates(&self) -> Vec<&Resource> {
        let t = &self.config().thresholds;
        let mut resources: Vec<&Resource> = self
            .resources()
            .filter(|r| r.relevance < t.archive_max_relevance)
            .filter(|r| r.preservation > t.archive_min_preservation)
            .collect();
        resources.sort_by(|a, b| {
            by_score(b.preservation, a.preservation).then_with(|| a.id.cmp(&b.id))
        });
        resources
    }

    /// Neither relevant nor worth keeping: lowest combined score first
    pub fn deletion_candidates(&self) -> Vec<&Resource> {
        let t = &self.config().thresholds;
        let mut resources: Vec<&Resource> = self
            .resources()
            .filter(|r| r.relevance < t.deletion_max_relevance)
            .filter(|r| r.preservation < t.deletion_max_preservation)
            .collect();
        resources.sort_by(|a, b| {
            by_score(a.relevance + a.preservation, b.relevance + b.preservation)
                .then_with(|| a.id.cmp(&b.id))
        });
        resources
    }
}
