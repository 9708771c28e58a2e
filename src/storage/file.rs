//! File-backed persistence for the item store
//!
//! The store document is a single JSON array. Writes go to a sibling
//! temporary file first and are renamed into place.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use super::{ItemStore, LoadPolicy, LoadSummary};
use crate::models::Item;

/// Location of a store document on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Use the document at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the document exists yet
    #[must_use]
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load the store; a missing file is an empty store
    pub fn load(&self, policy: LoadPolicy) -> anyhow::Result<(ItemStore<Item>, LoadSummary)> {
        if !self.path.exists() {
            debug!("No store at {}, starting empty", self.path.display());
            return Ok((ItemStore::new(), LoadSummary::default()));
        }

        let content = fs::read_to_string(&self.path)?;
        let (store, summary) = ItemStore::from_json_with(&content, policy)?;
        debug!(
            "Loaded {} item(s) from {} ({} duplicate, {} invalid)",
            summary.loaded,
            self.path.display(),
            summary.duplicates,
            summary.skipped_invalid
        );
        Ok((store, summary))
    }

    /// Write the store, replacing any previous document
    pub fn save(&self, store: &ItemStore<Item>, pretty: bool) -> anyhow::Result<()> {
        // Ensure directory exists
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let content = if pretty { store.to_json_pretty()? } else { store.to_json()? };

        let staging = self.staging_path();
        fs::write(&staging, content)?;
        fs::rename(&staging, &self.path)?;

        debug!("Saved {} item(s) to {}", store.len(), self.path.display());
        Ok(())
    }

    fn staging_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(std::ffi::OsStr::to_os_string).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
