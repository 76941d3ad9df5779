//! Application configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Work factor used for password hashing when nothing overrides it.
pub const DEFAULT_HASH_COST: u32 = 12;

/// Process-scoped configuration, loaded once at startup and passed by
/// reference into whatever needs it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Base directory for record storage; the platform data dir when unset
    pub storage_dir: Option<PathBuf>,
    /// bcrypt work factor for password hashing
    pub hash_cost: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            hash_cost: DEFAULT_HASH_COST,
        }
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    ///
    /// A missing or empty file yields the defaults; a present but
    /// malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: AppConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
