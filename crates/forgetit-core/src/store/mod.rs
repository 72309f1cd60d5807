//! Resource store for forgetit
//!
//! The store owns every [`Resource`] plus an append-only access log, and is
//! the only place where engine outputs are written back onto resources.
//! Mutations take `&mut self`, so each read-modify-write of a resource's
//! counters and scores is serialized by the borrow checker.

pub mod io;
mod query;

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::condensation::CondensationSnapshot;
use crate::config::EngineConfig;
use crate::error::{ForgetItError, Result};
use crate::metrics::{compute_preservation, compute_relevance};
use crate::resource::{
    AccessEvent, AccessKind, ContextMap, NewResource, Resource, ResourceId, ResourceUpdate,
    IMPORTANCE_KEY, PRESERVATION_IMPORTANCE_KEY,
};

pub use query::{ResourceFilter, SortKey};

/// In-memory resource store with access history
#[derive(Debug, Default)]
pub struct ResourceStore {
    config: EngineConfig,
    resources: BTreeMap<ResourceId, Resource>,
    events: Vec<AccessEvent>,
    snapshots: BTreeMap<ResourceId, Vec<CondensationSnapshot>>,
}

/// Reject context annotations the scoring formulas cannot take
pub fn validate_context(context: &ContextMap) -> Result<()> {
    for key in [IMPORTANCE_KEY, PRESERVATION_IMPORTANCE_KEY] {
        if let Some(value) = context.get(key) {
            match value.as_f64() {
                Some(n) if (0.0..=1.0).contains(&n) => {}
                _ => crate::bail_invalid!(key, value),
            }
        }
    }
    Ok(())
}

impl ResourceStore {
    /// Create an empty store
    pub fn new(config: EngineConfig) -> Self {
        ResourceStore {
            config,
            ..Default::default()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    /// All resources in id order
    pub fn resources(&self) -> impl Iterator<Item = &Resource> {
        self.resources.values()
    }

    /// Look up a resource without recording an access
    pub fn get(&self, id: &ResourceId) -> Result<&Resource> {
        self.resources
            .get(id)
            .ok_or_else(|| ForgetItError::resource_not_found(id))
    }

    /// Create a resource and compute its initial scores
    #[tracing::instrument(skip(self, new), fields(title = %new.title, category = %new.category))]
    pub fn create(&mut self, new: NewResource, now: DateTime<Utc>) -> Result<&Resource> {
        validate_context(&new.context)?;
        if let Some(seed) = new.initial_relevance {
            if !(0.0..=1.0).contains(&seed) {
                crate::bail_invalid!("initial relevance", seed);
            }
        }

        let seed = new.initial_relevance;
        let mut resource = Resource::new(new, now);
        resource.preservation = compute_preservation(&resource, now, &self.config.preservation);
        resource.relevance =
            seed.unwrap_or_else(|| compute_relevance(&resource, now, &self.config.relevance));

        debug!(
            id = %resource.id,
            relevance = resource.relevance,
            preservation = resource.preservation,
            "create_resource"
        );

        let id = resource.id.clone();
        Ok(self.resources.entry(id).or_insert(resource))
    }

    /// Read a resource, logging a `view` access
    pub fn read(&mut self, id: &ResourceId, now: DateTime<Utc>) -> Result<&Resource> {
        self.log_access(AccessEvent {
            resource_id: id.clone(),
            timestamp: now,
            kind: AccessKind::View,
        })
    }

    /// Apply an edit atomically, then log an `edit` access and recompute both scores
    #[tracing::instrument(skip(self, update), fields(id = %id))]
    pub fn update(
        &mut self,
        id: &ResourceId,
        update: ResourceUpdate,
        now: DateTime<Utc>,
    ) -> Result<&Resource> {
        if let Some(context) = &update.context {
            validate_context(context)?;
        }

        let resource = self
            .resources
            .get_mut(id)
            .ok_or_else(|| ForgetItError::resource_not_found(id))?;
        resource.apply_update(update);
        self.config.model.on_access(resource, now, &self.config);
        resource.preservation = compute_preservation(resource, now, &self.config.preservation);

        self.events.push(AccessEvent {
            resource_id: id.clone(),
            timestamp: now,
            kind: AccessKind::Edit,
        });
        self.get(id)
    }

    /// Record an access event and update relevance. Preservation is untouched.
    pub fn log_access(&mut self, event: AccessEvent) -> Result<&Resource> {
        let resource = self
            .resources
            .get_mut(&event.resource_id)
            .ok_or_else(|| ForgetItError::resource_not_found(&event.resource_id))?;
        self.config.model.on_access(resource, event.timestamp, &self.config);

        debug!(
            id = %event.resource_id,
            kind = %event.kind,
            relevance = resource.relevance,
            access_count = resource.access_count,
            "log_access"
        );

        let id = event.resource_id.clone();
        self.events.push(event);
        self.get(&id)
    }

    /// Delete a resource and its snapshots. Logged events are kept.
    pub fn delete(&mut self, id: &ResourceId) -> Result<Resource> {
        let resource = self
            .resources
            .remove(id)
            .ok_or_else(|| ForgetItError::resource_not_found(id))?;
        self.snapshots.remove(id);
        debug!(%id, "delete_resource");
        Ok(resource)
    }

    /// Refresh cached scores for every resource; returns the number refreshed
    pub fn recompute_all(&mut self, now: DateTime<Utc>) -> usize {
        let start = std::time::Instant::now();
        let model = self.config.model;
        for resource in self.resources.values_mut() {
            model.on_sweep(resource, now, &self.config);
        }
        crate::trace_time!(start, "recompute_all", count = self.resources.len());
        self.resources.len()
    }

    /// Let `days` pass for every resource; returns the number updated
    pub fn advance_time(&mut self, days: f64, now: DateTime<Utc>) -> Result<usize> {
        if !days.is_finite() || days < 0.0 {
            crate::bail_invalid!("elapsed days", days);
        }
        let model = self.config.model;
        for resource in self.resources.values_mut() {
            model.advance(resource, days, now, &self.config);
        }
        debug!(days, %model, count = self.resources.len(), "advance_time");
        Ok(self.resources.len())
    }

    /// Condensed content at the resource's current level
    pub fn condensed(&self, id: &ResourceId) -> Result<String> {
        Ok(self.get(id)?.condensed())
    }

    /// Record the resource's current condensation state
    pub fn capture_snapshot(
        &mut self,
        id: &ResourceId,
        now: DateTime<Utc>,
    ) -> Result<&CondensationSnapshot> {
        let snapshot = CondensationSnapshot::capture(self.get(id)?, now);
        let history = self.snapshots.entry(id.clone()).or_default();
        history.push(snapshot);
        history
            .last()
            .ok_or_else(|| ForgetItError::failed("capture snapshot", "history is empty"))
    }

    /// Captured snapshots for a resource, oldest first
    pub fn snapshots(&self, id: &ResourceId) -> &[CondensationSnapshot] {
        self.snapshots.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The full access log in arrival order
    pub fn events(&self) -> &[AccessEvent] {
        &self.events
    }

    /// Access log entries for one resource
    pub fn events_for<'a>(&'a self, id: &'a ResourceId) -> impl Iterator<Item = &'a AccessEvent> {
        self.events.iter().filter(move |e| &e.resource_id == id)
    }
}
