//! Resource model for forgetit
//!
//! A resource is the unit of managed forgetting: content plus the usage
//! history that drives its relevance and preservation scores.

mod types;

pub use types::{
    AccessEvent, AccessKind, Category, ContextMap, NewResource, Resource, ResourceId,
    ResourceUpdate, IMPORTANCE_KEY, PRESERVATION_IMPORTANCE_KEY,
};

use crate::condensation::{classify, CondensationLevel};

impl Resource {
    /// Current condensation level, always derived from the relevance score
    pub fn level(&self) -> CondensationLevel {
        classify(self.relevance)
    }

    /// Condensed view of the content at the current level
    pub fn condensed(&self) -> String {
        crate::condensation::condense(&self.content, &self.category, self.level())
    }
}
