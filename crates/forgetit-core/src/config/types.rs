//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::dynamics::RelevanceModel;
use crate::resource::Category;

/// Engine configuration, loaded from `config.toml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Which relevance update strategy the store applies
    #[serde(default)]
    pub model: RelevanceModel,

    /// Relevance score weights and defaults
    #[serde(default)]
    pub relevance: RelevanceConfig,

    /// Preservation score weights and defaults
    #[serde(default)]
    pub preservation: PreservationConfig,

    /// Decay and access-boost parameters for the evolving model
    #[serde(default)]
    pub dynamics: DynamicsConfig,

    /// Cutoffs for managed-forgetting recommendations
    #[serde(default)]
    pub thresholds: CandidateThresholds,
}

/// One value per content category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryTable {
    pub document: f64,
    pub image: f64,
    pub email: f64,
    pub code: f64,
    pub note: f64,
    /// Used for unrecognized categories
    pub other: f64,
}

impl CategoryTable {
    /// Look up the value for a category
    pub fn get(&self, category: &Category) -> f64 {
        match category {
            Category::Document => self.document,
            Category::Image => self.image,
            Category::Email => self.email,
            Category::Code => self.code,
            Category::Note => self.note,
            Category::Other(_) => self.other,
        }
    }
}

/// Relevance score (memory buoyancy) parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelevanceConfig {
    pub recency_weight: f64,
    pub frequency_weight: f64,
    pub importance_weight: f64,
    pub tag_weight: f64,
    /// Exponential decay rate per day of inactivity
    pub recency_rate: f64,
    /// Access count at which frequency saturates
    pub frequency_saturation: f64,
    /// Tag count at which tag density saturates
    pub tag_saturation: f64,
    /// Used when the context map has no `importance`
    pub default_importance: f64,
}

impl Default for RelevanceConfig {
    fn default() -> Self {
        Self {
            recency_weight: 0.4,
            frequency_weight: 0.3,
            importance_weight: 0.2,
            tag_weight: 0.1,
            recency_rate: 0.1,
            frequency_saturation: 10.0,
            tag_saturation: 5.0,
            default_importance: 0.5,
        }
    }
}

/// Preservation score parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreservationConfig {
    pub age_weight: f64,
    pub category_weight: f64,
    pub importance_weight: f64,
    pub tag_weight: f64,
    /// Age in days at which the age factor saturates
    pub age_saturation_days: f64,
    /// Used when the context map has no `preservation_importance`
    pub default_importance: f64,
    /// Matching tag count at which the tag factor saturates
    pub tag_saturation: f64,
    /// Tags (matched case-insensitively) that mark archival worth
    pub tags: Vec<String>,
    pub category_weights: CategoryTable,
}

impl Default for PreservationConfig {
    fn default() -> Self {
        Self {
            age_weight: 0.3,
            category_weight: 0.2,
            importance_weight: 0.3,
            tag_weight: 0.2,
            age_saturation_days: 365.0,
            default_importance: 0.5,
            tag_saturation: 2.0,
            tags: ["important", "archive", "historical", "reference"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
            category_weights: CategoryTable {
                document: 0.7,
                image: 0.8,
                email: 0.5,
                code: 0.6,
                note: 0.4,
                other: 0.5,
            },
        }
    }
}

/// Decay/boost parameters for the evolving relevance model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DynamicsConfig {
    /// Yearly decay rate before category and preservation adjustments
    pub base_decay_rate: f64,
    /// How strongly preservation value slows decay
    pub preservation_damping: f64,
    /// Fraction of the remaining headroom recovered per access
    pub boost_factor: f64,
    pub floor: f64,
    pub ceiling: f64,
    pub category_factors: CategoryTable,
}

impl Default for DynamicsConfig {
    fn default() -> Self {
        Self {
            base_decay_rate: 0.1,
            preservation_damping: 0.5,
            boost_factor: 0.2,
            floor: 0.01,
            ceiling: 0.99,
            category_factors: CategoryTable {
                document: 1.0,
                image: 0.8,
                email: 1.2,
                code: 0.9,
                note: 1.3,
                other: 1.0,
            },
        }
    }
}

/// Cutoffs used for low-relevance, archive, and deletion recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateThresholds {
    pub low_relevance: f64,
    pub archive_max_relevance: f64,
    pub archive_min_preservation: f64,
    pub deletion_max_relevance: f64,
    pub deletion_max_preservation: f64,
}

impl Default for CandidateThresholds {
    fn default() -> Self {
        Self {
            low_relevance: 0.3,
            archive_max_relevance: 0.3,
            archive_min_preservation: 0.7,
            deletion_max_relevance: 0.2,
            deletion_max_preservation: 0.2,
        }
    }
}
