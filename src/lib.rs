//! itemtrack - A single-user item and event tracker
//!
//! This library provides the item store (a deduplicated, JSON-persisted
//! collection), the ordered list types built on it, and the event view that
//! sorts and searches scheduled items.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod error;
pub mod list;
pub mod models;
pub mod output;
pub mod paths;
pub mod storage;

pub use error::{RecordLocation, StoreError, StoreResult};
pub use list::{EventList, EventSource, ItemList, Listable, SearchMode};
pub use models::{Event, Item, Priority};
pub use storage::{AddOutcome, FileStore, ItemStore, LoadPolicy, LoadSummary};
