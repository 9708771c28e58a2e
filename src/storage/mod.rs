//! Storage for items
//!
//! - `item_store`: the in-memory deduplicated store and its JSON codec
//! - `file`: reading and writing the JSON document on disk

/// JSON document on disk
pub mod file;
/// Deduplicated in-memory store
pub mod item_store;

use serde::{Deserialize, Serialize};

/// Result of adding an item to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was appended
    Inserted,
    /// An equal item was already stored; nothing changed
    SkippedDuplicate,
}

impl AddOutcome {
    /// Whether the store changed
    #[must_use]
    pub const fn inserted(self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// What to do with a record that cannot be converted while loading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LoadPolicy {
    /// Fail the whole load on the first invalid record (default)
    #[default]
    AbortOnInvalid,
    /// Drop invalid records and keep going
    SkipInvalid,
}

impl std::fmt::Display for LoadPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AbortOnInvalid => write!(f, "abort-on-invalid"),
            Self::SkipInvalid => write!(f, "skip-invalid"),
        }
    }
}

impl std::str::FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('_', "-").as_str() {
            "abort-on-invalid" | "abort" | "strict" => Ok(Self::AbortOnInvalid),
            "skip-invalid" | "skip" | "lenient" => Ok(Self::SkipInvalid),
            _ => Err(format!("Unknown load policy: {s}. Use 'abort-on-invalid' or 'skip-invalid'")),
        }
    }
}

/// Counts gathered while loading a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct LoadSummary {
    /// Records that became store items
    pub loaded: usize,
    /// Records dropped because an equal item was already loaded
    pub duplicates: usize,
    /// Records dropped as invalid (only under `SkipInvalid`)
    pub skipped_invalid: usize,
}

pub use file::FileStore;
pub use item_store::ItemStore;
