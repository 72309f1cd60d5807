//! Relevance dynamics: time decay and access boost
//!
//! Two update strategies exist for relevance and they are kept apart:
//!
//! - [`RelevanceModel::Recomputed`] derives relevance from scratch on every
//!   event with [`compute_relevance`].
//! - [`RelevanceModel::Evolving`] carries relevance forward as state, decaying
//!   it multiplicatively as days pass and boosting it on each access.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{DynamicsConfig, EngineConfig};
use crate::error::ForgetItError;
use crate::metrics::{compute_preservation, compute_relevance, compute_relevance_after};
use crate::resource::Resource;

const DAYS_PER_YEAR: f64 = 365.0;

/// Strategy used to update a resource's relevance score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RelevanceModel {
    /// Stateless: recompute from access history and metadata
    #[default]
    Recomputed,
    /// Stateful: multiplicative decay plus diminishing-returns boost
    Evolving,
}

impl FromStr for RelevanceModel {
    type Err = ForgetItError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "recomputed" => Ok(RelevanceModel::Recomputed),
            "evolving" => Ok(RelevanceModel::Evolving),
            other => Err(ForgetItError::unsupported(
                "relevance model",
                other,
                "recomputed, evolving",
            )),
        }
    }
}

impl fmt::Display for RelevanceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RelevanceModel::Recomputed => write!(f, "recomputed"),
            RelevanceModel::Evolving => write!(f, "evolving"),
        }
    }
}

/// Yearly decay rate for a resource, slowed by its preservation score
pub fn decay_rate(resource: &Resource, cfg: &DynamicsConfig) -> f64 {
    let category_factor = cfg.category_factors.get(&resource.category);
    let preservation_factor = 1.0 - cfg.preservation_damping * resource.preservation;
    cfg.base_decay_rate * category_factor * preservation_factor
}

/// Relevance after `days` simulated days without access.
/// The result stays within `[floor, ceiling]`.
pub fn advance_time(resource: &Resource, days: f64, cfg: &DynamicsConfig) -> f64 {
    let days = days.max(0.0);
    let decayed = resource.relevance * (1.0 - decay_rate(resource, cfg) * days / DAYS_PER_YEAR);
    decayed.clamp(cfg.floor, cfg.ceiling)
}

/// Relevance after one access: recovers a fixed share of the remaining headroom.
pub fn apply_access(resource: &Resource, cfg: &DynamicsConfig) -> f64 {
    let boost = cfg.boost_factor * (1.0 - resource.relevance);
    (resource.relevance + boost).min(cfg.ceiling)
}

impl RelevanceModel {
    /// Record an access at `now` and update relevance accordingly
    pub fn on_access(self, resource: &mut Resource, now: DateTime<Utc>, cfg: &EngineConfig) {
        match self {
            RelevanceModel::Recomputed => {
                resource.touch(now);
                resource.relevance = compute_relevance(resource, now, &cfg.relevance);
            }
            RelevanceModel::Evolving => {
                resource.relevance = apply_access(resource, &cfg.dynamics);
                resource.touch(now);
            }
        }
    }

    /// Refresh cached scores during a bulk sweep.
    /// Evolving relevance is state, so only preservation is refreshed for it.
    pub fn on_sweep(self, resource: &mut Resource, now: DateTime<Utc>, cfg: &EngineConfig) {
        if self == RelevanceModel::Recomputed {
            resource.relevance = compute_relevance(resource, now, &cfg.relevance);
        }
        resource.preservation = compute_preservation(resource, now, &cfg.preservation);
    }

    /// Let `days` pass for a resource last evaluated at `now`
    pub fn advance(self, resource: &mut Resource, days: f64, now: DateTime<Utc>, cfg: &EngineConfig) {
        match self {
            RelevanceModel::Recomputed => {
                resource.relevance = compute_relevance_after(resource, now, days, &cfg.relevance);
            }
            RelevanceModel::Evolving => {
                resource.relevance = advance_time(resource, days, &cfg.dynamics);
            }
        }
    }
}
