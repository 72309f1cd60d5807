//! Engine configuration for forgetit
//!
//! Every scoring weight, default, and threshold lives in [`EngineConfig`].
//! The default location is `~/.config/forgetit/config.toml`; a missing file
//! yields the built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ForgetItError, Result};

pub use types::{
    CandidateThresholds, CategoryTable, DynamicsConfig, EngineConfig, PreservationConfig,
    RelevanceConfig,
};

const CONFIG_DIR: &str = "forgetit";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "FORGETIT_CONFIG_DIR";

impl EngineConfig {
    /// Default config path, honouring `FORGETIT_CONFIG_DIR`
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    ForgetItError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load from an explicit path, or the default path when `None`.
    /// A missing file at the default location is not an error.
    pub fn resolve(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load(&path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), model = %config.model, "load_config");
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings that would break the [0,1] score invariants
    pub fn validate(&self) -> Result<()> {
        let unit = [
            ("relevance.default_importance", self.relevance.default_importance),
            (
                "preservation.default_importance",
                self.preservation.default_importance,
            ),
            ("dynamics.floor", self.dynamics.floor),
            ("dynamics.ceiling", self.dynamics.ceiling),
            ("dynamics.boost_factor", self.dynamics.boost_factor),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                crate::bail_invalid!(name, value);
            }
        }

        if self.dynamics.floor >= self.dynamics.ceiling {
            crate::bail_invalid!(
                "dynamics bounds",
                format!("floor {} >= ceiling {}", self.dynamics.floor, self.dynamics.ceiling)
            );
        }

        let saturations = [
            ("relevance.frequency_saturation", self.relevance.frequency_saturation),
            ("relevance.tag_saturation", self.relevance.tag_saturation),
            ("preservation.age_saturation_days", self.preservation.age_saturation_days),
            ("preservation.tag_saturation", self.preservation.tag_saturation),
        ];
        for (name, value) in saturations {
            if value <= 0.0 {
                crate::bail_invalid!(name, value);
            }
        }

        Ok(())
    }
}
