//! Error types for the item store and its views

use thiserror::Error;

/// Where in a persisted document a conversion failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLocation {
    /// The document as a whole (not JSON, or not an array)
    Document,
    /// The record at this zero-based array position
    Record(usize),
}

impl std::fmt::Display for RecordLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Document => write!(f, "document"),
            Self::Record(index) => write!(f, "record {index}"),
        }
    }
}

/// Errors raised by the store and the list views
#[derive(Debug, Error)]
pub enum StoreError {
    /// Persisted JSON could not be turned into items
    #[error("data conversion failed at {location}: {source}")]
    DataConversion {
        /// Which part of the document was rejected
        location: RecordLocation,
        /// Underlying parse error
        source: serde_json::Error,
    },

    /// An item could not be written as JSON
    #[error("serialization failed: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Index outside `[0, len)`
    #[error("index {index} out of range (store has {len} items)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of items at the time of the call
        len: usize,
    },

    /// An event operation met an item without event attributes
    #[error("item has no event data: {description}")]
    MissingEventData {
        /// Description of the offending item
        description: String,
    },

    /// A checked replacement would duplicate another item
    #[error("an equal item already exists at index {index}")]
    DuplicateItem {
        /// Index of the existing equal item
        index: usize,
    },
}

impl StoreError {
    /// Whether this error came from loading persisted data
    #[must_use]
    pub const fn is_data_conversion(&self) -> bool {
        matches!(self, Self::DataConversion { .. })
    }
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
