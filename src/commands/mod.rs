//! Command implementations

mod check;
mod event;
mod item;

use std::path::{Path, PathBuf};

use anyhow::Context;
use itemtrack::config::Config;
use itemtrack::models::Item;
use itemtrack::storage::{FileStore, ItemStore, LoadSummary};

pub use check::check;
pub use event::events;
pub use item::{ItemChanges, add, edit, find, list, remove};

/// Config and store document for one command invocation
#[derive(Debug)]
pub struct Session {
    config: Config,
    file: FileStore,
    discard_invalid: bool,
}

impl Session {
    /// Resolve config and store paths, honouring command-line overrides.
    ///
    /// `discard_invalid` lets commands that rewrite the store drop records
    /// the load policy skipped.
    pub fn open(
        file: Option<PathBuf>,
        config_path: Option<&Path>,
        discard_invalid: bool,
    ) -> anyhow::Result<Self> {
        let config = match config_path {
            Some(path) => Config::load_from(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?,
            None => Config::load(),
        };
        let file = FileStore::new(file.unwrap_or_else(|| config.data_file()));
        log::debug!("Using store {}", file.path().display());

        Ok(Self {
            config,
            file,
            discard_invalid,
        })
    }

    /// Load the store under the configured policy
    pub fn load(&self) -> anyhow::Result<ItemStore<Item>> {
        self.load_with_summary().map(|(store, _)| store)
    }

    /// Load a store that is about to be saved back.
    ///
    /// Saving rewrites the whole document, so records skipped as invalid
    /// would be lost. That is refused unless `--discard-invalid` was given.
    pub fn load_for_update(&self) -> anyhow::Result<ItemStore<Item>> {
        let (store, summary) = self.load_with_summary()?;
        if summary.skipped_invalid > 0 {
            if !self.discard_invalid {
                anyhow::bail!(
                    "{} invalid record(s) in {} were skipped while loading; saving would delete \
                     them. Fix the document (see 'itemtrack check') or pass --discard-invalid",
                    summary.skipped_invalid,
                    self.file.path().display()
                );
            }
            log::warn!(
                "Discarding {} invalid record(s) from {}",
                summary.skipped_invalid,
                self.file.path().display()
            );
        }
        Ok(store)
    }

    fn load_with_summary(&self) -> anyhow::Result<(ItemStore<Item>, LoadSummary)> {
        self.file
            .load(self.config.storage.load_policy)
            .with_context(|| format!("Failed to load {}", self.file.path().display()))
    }

    /// Persist the store
    pub fn save(&self, store: &ItemStore<Item>) -> anyhow::Result<()> {
        self.file
            .save(store, self.config.storage.pretty)
            .with_context(|| format!("Failed to save {}", self.file.path().display()))
    }
}

/// Convert a 1-based item number into a store index
fn store_index(number: usize) -> anyhow::Result<usize> {
    number.checked_sub(1).ok_or_else(|| anyhow::anyhow!("Item numbers start at 1"))
}
