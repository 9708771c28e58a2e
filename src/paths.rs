//! Centralized path definitions for itemtrack
//!
//! ## Storage Layout
//!
//! ```text
//! <config_dir>/itemtrack/
//! └── config.toml               # User preferences (load policy, search)
//!
//! <data_dir>/itemtrack/
//! └── items.json                # The item store document
//! ```
//!
//! `<config_dir>` and `<data_dir>` are the platform directories reported by
//! the `dirs` crate (`~/.config` and `~/.local/share` on Linux). When the
//! platform has none, the current directory is used.

use std::path::PathBuf;

/// Application directory name under the platform directories
pub const APP_DIR: &str = "itemtrack";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Store document filename
const DATA_FILE: &str = "items.json";

/// Get the global config directory.
///
/// Returns `<config_dir>/itemtrack/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Get the global config file path.
///
/// Returns `<config_dir>/itemtrack/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(CONFIG_FILE)
}

/// Get the data directory holding the store document.
///
/// Returns `<data_dir>/itemtrack/`.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::data_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Get the default store document path.
///
/// Returns `<data_dir>/itemtrack/items.json`.
#[must_use]
pub fn default_data_file() -> PathBuf {
    data_dir().join(DATA_FILE)
}
