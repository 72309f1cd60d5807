//! JSON snapshot persistence for the resource store

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::condensation::CondensationSnapshot;
use crate::config::EngineConfig;
use crate::error::{ForgetItError, Result};
use crate::resource::{AccessEvent, Resource, ResourceId};

use super::ResourceStore;

/// Current store file format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Default store file name
pub const DEFAULT_STORE_FILE: &str = "forgetit.json";

#[derive(Debug, Serialize, Deserialize)]
struct StoreFile {
    version: u32,
    #[serde(default)]
    resources: Vec<Resource>,
    #[serde(default)]
    events: Vec<AccessEvent>,
    #[serde(default)]
    snapshots: BTreeMap<ResourceId, Vec<CondensationSnapshot>>,
}

impl ResourceStore {
    /// Open a store file. A missing file yields an empty store.
    #[tracing::instrument(skip(path, config), fields(path = %path.display()))]
    pub fn open(path: &Path, config: EngineConfig) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("store file missing, starting empty");
            return Ok(ResourceStore::new(config));
        }

        let content = fs::read_to_string(path)?;
        let file: StoreFile =
            serde_json::from_str(&content).map_err(|e| ForgetItError::InvalidStore {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if file.version != STORE_FORMAT_VERSION {
            return Err(ForgetItError::InvalidStore {
                path: path.to_path_buf(),
                reason: format!(
                    "unsupported format version {} (expected {})",
                    file.version, STORE_FORMAT_VERSION
                ),
            });
        }

        let mut store = ResourceStore::new(config);
        store.resources = file
            .resources
            .into_iter()
            .map(|r| (r.id.clone(), r))
            .collect();
        store.events = file.events;
        store.snapshots = file.snapshots;
        tracing::debug!(resources = store.len(), events = store.events.len(), "open_store");
        Ok(store)
    }

    /// Write the store to `path`, replacing it via a temporary sibling file
    pub fn save(&self, path: &Path) -> Result<()> {
        let file = StoreFile {
            version: STORE_FORMAT_VERSION,
            resources: self.resources.values().cloned().collect(),
            events: self.events.clone(),
            snapshots: self.snapshots.clone(),
        };
        let content = serde_json::to_string_pretty(&file)?;

        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, content)
            .map_err(|e| ForgetItError::failed(&format!("write {}", tmp.display()), e))?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}
