//! Progressive condensation
//!
//! Relevance maps to a discrete [`CondensationLevel`]; each content category
//! has a strategy that shortens content for a given level. Level 0 is always
//! the original content and unrecognized categories are never condensed.

mod code;
mod document;
mod email;
mod image;
mod note;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ForgetItError;
use crate::resource::{Category, Resource};

/// How aggressively content is shortened (0 = original, 5 = maximum)
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(into = "u8", try_from = "u8")]
pub enum CondensationLevel {
    #[default]
    Original = 0,
    Light = 1,
    Medium = 2,
    Heavy = 3,
    Severe = 4,
    Maximum = 5,
}

impl CondensationLevel {
    pub const ALL: [CondensationLevel; 6] = [
        CondensationLevel::Original,
        CondensationLevel::Light,
        CondensationLevel::Medium,
        CondensationLevel::Heavy,
        CondensationLevel::Severe,
        CondensationLevel::Maximum,
    ];

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn label(self) -> &'static str {
        match self {
            CondensationLevel::Original => "original",
            CondensationLevel::Light => "light",
            CondensationLevel::Medium => "medium",
            CondensationLevel::Heavy => "heavy",
            CondensationLevel::Severe => "severe",
            CondensationLevel::Maximum => "maximum",
        }
    }
}

impl From<CondensationLevel> for u8 {
    fn from(level: CondensationLevel) -> u8 {
        level as u8
    }
}

impl TryFrom<u8> for CondensationLevel {
    type Error = ForgetItError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        CondensationLevel::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| ForgetItError::invalid_value("condensation level", value))
    }
}

impl fmt::Display for CondensationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.as_u8(), self.label())
    }
}

/// Map a relevance score to a condensation level.
///
/// Lower bounds are exclusive: 0.8 is Light, anything above it is Original.
/// Scores at or below 0.1 (and NaN) are Maximum.
pub fn classify(score: f64) -> CondensationLevel {
    if score > 0.8 {
        CondensationLevel::Original
    } else if score > 0.6 {
        CondensationLevel::Light
    } else if score > 0.4 {
        CondensationLevel::Medium
    } else if score > 0.2 {
        CondensationLevel::Heavy
    } else if score > 0.1 {
        CondensationLevel::Severe
    } else {
        CondensationLevel::Maximum
    }
}

/// Shorten content for the given category and level
pub fn condense(content: &str, category: &Category, level: CondensationLevel) -> String {
    if level == CondensationLevel::Original {
        return content.to_string();
    }

    match category {
        Category::Document => document::condense(content, level),
        Category::Image => image::condense(content, level),
        Category::Email => email::condense(content, level),
        Category::Code => code::condense(content, level),
        Category::Note => note::condense(content, level),
        Category::Other(_) => content.to_string(),
    }
}

/// Point-in-time capture of a resource's condensation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CondensationSnapshot {
    pub timestamp: DateTime<Utc>,
    pub relevance: f64,
    pub level: CondensationLevel,
    pub content: String,
}

impl CondensationSnapshot {
    pub fn capture(resource: &Resource, timestamp: DateTime<Utc>) -> Self {
        CondensationSnapshot {
            timestamp,
            relevance: resource.relevance,
            level: resource.level(),
            content: resource.condensed(),
        }
    }
}
