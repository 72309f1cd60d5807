//! Relevance and preservation scoring
//!
//! Both scores are pure functions of the resource's current attributes and a
//! "now" instant. Context values are trusted to lie in [0,1]; the store
//! validates them before they reach this module.

use chrono::{DateTime, Utc};

use crate::config::{PreservationConfig, RelevanceConfig};
use crate::resource::{Resource, IMPORTANCE_KEY, PRESERVATION_IMPORTANCE_KEY};

const MS_PER_DAY: f64 = 86_400_000.0;

/// Clamp a value into [0,1]
pub fn clamp01(x: f64) -> f64 {
    x.clamp(0.0, 1.0)
}

/// Fractional days from `earlier` to `now`, never negative
pub fn days_between(earlier: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    ((now - earlier).num_milliseconds() as f64 / MS_PER_DAY).max(0.0)
}

/// Relevance score (memory buoyancy):
/// weighted recency, access frequency, context importance, and tag density.
pub fn compute_relevance(resource: &Resource, now: DateTime<Utc>, cfg: &RelevanceConfig) -> f64 {
    compute_relevance_after(resource, now, 0.0, cfg)
}

/// Relevance as it will be `extra_days` after `now` with no further access
pub fn compute_relevance_after(
    resource: &Resource,
    now: DateTime<Utc>,
    extra_days: f64,
    cfg: &RelevanceConfig,
) -> f64 {
    let idle_days = days_between(resource.last_accessed, now) + extra_days.max(0.0);
    let recency = (-cfg.recency_rate * idle_days).exp();
    let frequency = (resource.access_count as f64 / cfg.frequency_saturation).min(1.0);
    let importance = resource
        .context_number(IMPORTANCE_KEY)
        .unwrap_or(cfg.default_importance);
    let tag_density = (resource.tags.len() as f64 / cfg.tag_saturation).min(1.0);

    clamp01(
        cfg.recency_weight * recency
            + cfg.frequency_weight * frequency
            + cfg.importance_weight * importance
            + cfg.tag_weight * tag_density,
    )
}

/// Count tags matching the preservation vocabulary, ignoring case
fn preservation_tag_matches(resource: &Resource, cfg: &PreservationConfig) -> usize {
    resource
        .tags
        .iter()
        .filter(|tag| cfg.tags.iter().any(|p| p.eq_ignore_ascii_case(tag)))
        .count()
}

/// Preservation score: weighted age, category weight, context preservation
/// importance, and preservation-tag density.
pub fn compute_preservation(
    resource: &Resource,
    now: DateTime<Utc>,
    cfg: &PreservationConfig,
) -> f64 {
    // Whole days, matching how age is reported elsewhere.
    let age_days = days_between(resource.created_at, now).floor();
    let age = (age_days / cfg.age_saturation_days).min(1.0);
    let category_weight = cfg.category_weights.get(&resource.category);
    let importance = resource
        .context_number(PRESERVATION_IMPORTANCE_KEY)
        .unwrap_or(cfg.default_importance);
    let tag_density =
        (preservation_tag_matches(resource, cfg) as f64 / cfg.tag_saturation).min(1.0);

    clamp01(
        cfg.age_weight * age
            + cfg.category_weight * category_weight
            + cfg.importance_weight * importance
            + cfg.tag_weight * tag_density,
    )
}
