//! Global configuration management
//!
//! Config is stored at `<config_dir>/itemtrack/config.toml`. A missing file
//! means defaults.
//!
//! ```toml
//! [storage]
//! data_file = "/home/me/items.json"
//! load_policy = "skip-invalid"
//! pretty = true
//!
//! [search]
//! case_sensitive = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::list::SearchMode;
use crate::paths;
use crate::storage::LoadPolicy;

/// Global itemtrack configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where and how the store is persisted
    #[serde(default)]
    pub storage: StorageConfig,
    /// Search behaviour
    #[serde(default)]
    pub search: SearchConfig,
}

/// Storage preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Store document path (defaults to the platform data directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    /// How invalid records are treated on load
    #[serde(default)]
    pub load_policy: LoadPolicy,
    /// Write indented JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

const fn default_pretty() -> bool {
    true
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_file: None,
            load_policy: LoadPolicy::default(),
            pretty: default_pretty(),
        }
    }
}

/// Search preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Match descriptions case-sensitively
    #[serde(default = "default_case_sensitive")]
    pub case_sensitive: bool,
}

const fn default_case_sensitive() -> bool {
    true
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            case_sensitive: default_case_sensitive(),
        }
    }
}

impl Config {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the default location, or defaults if missing or
    /// unreadable
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            Self::load_from(&path).unwrap_or_else(|err| {
                log::warn!("Ignoring config at {}: {err}", path.display());
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Load config from `path`; a missing file yields defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Store document path, falling back to the platform data directory
    #[must_use]
    pub fn data_file(&self) -> PathBuf {
        self.storage.data_file.clone().unwrap_or_else(paths::default_data_file)
    }

    /// Search mode implied by `search.case_sensitive`
    #[must_use]
    pub const fn search_mode(&self) -> SearchMode {
        SearchMode::ignoring_case(!self.search.case_sensitive)
    }
}
