//! Item store
//!
//! The authoritative, deduplicated list of every item in a session, plus
//! whole-collection JSON persistence.
//!
//! # Invariants
//! - `add` never inserts an item equal to one already stored.
//! - `set_item` does not check uniqueness; `replace` does.
//! - A failed load never yields a partially filled store.

use log::{info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::{AddOutcome, LoadPolicy, LoadSummary};
use crate::error::{RecordLocation, StoreError, StoreResult};
use crate::list::{EventList, EventSource, ItemList};
use crate::models::Item;

/// Ordered collection of unique items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemStore<T = Item> {
    items: Vec<T>,
}

impl<T> Default for ItemStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ItemStore<T> {
    /// Create an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of items
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the store has no items
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only view of the items in store order
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Iterate in store order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Item at `index`
    pub fn get(&self, index: usize) -> StoreResult<&T> {
        self.items.get(index).ok_or(StoreError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Remove the item at `index`
    pub fn remove_at(&mut self, index: usize) -> StoreResult<T> {
        self.check_index(index)?;
        Ok(self.items.remove(index))
    }

    /// Overwrite the item at `index`, returning the old one.
    ///
    /// This does not check uniqueness and can leave two equal items in the
    /// store. Use [`ItemStore::replace`] to keep the invariant.
    pub fn set_item(&mut self, index: usize, item: T) -> StoreResult<T> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.items[index], item))
    }

    const fn check_index(&self, index: usize) -> StoreResult<()> {
        if index < self.items.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.items.len(),
            })
        }
    }
}

impl<T: PartialEq> ItemStore<T> {
    /// Append `item` unless an equal item is already stored
    pub fn add(&mut self, item: T) -> AddOutcome {
        if self.contains(&item) {
            AddOutcome::SkippedDuplicate
        } else {
            self.items.push(item);
            AddOutcome::Inserted
        }
    }

    /// Whether an equal item is stored
    #[must_use]
    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Position of the first equal item
    #[must_use]
    pub fn index_of(&self, item: &T) -> Option<usize> {
        self.items.iter().position(|existing| existing == item)
    }

    /// Remove the first equal item, returning it if one was found
    pub fn remove(&mut self, item: &T) -> Option<T> {
        let index = self.index_of(item)?;
        Some(self.items.remove(index))
    }

    /// Overwrite the item at `index` unless that would duplicate another
    /// stored item. Replacing an item with an equal value is allowed.
    pub fn replace(&mut self, index: usize, item: T) -> StoreResult<T> {
        self.check_index(index)?;
        if let Some(existing) =
            self.items.iter().enumerate().position(|(i, existing)| i != index && *existing == item)
        {
            return Err(StoreError::DuplicateItem { index: existing });
        }
        Ok(std::mem::replace(&mut self.items[index], item))
    }
}

impl<T: PartialEq + Clone> ItemStore<T> {
    /// Independent copy of the store.
    ///
    /// Items are re-added one by one, so duplicates left behind by
    /// `set_item` collapse in the copy.
    #[must_use]
    pub fn deep_copy(&self) -> Self {
        let mut copy = Self::new();
        for item in &self.items {
            copy.add(item.clone());
        }
        copy
    }
}

impl<T: Clone> ItemStore<T> {
    /// Snapshot as a plain list
    #[must_use]
    pub fn to_list(&self) -> ItemList<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T: EventSource + Clone> ItemStore<T> {
    /// Snapshot of the event items, in store order
    #[must_use]
    pub fn events(&self) -> EventList<T> {
        EventList::events_in(self.items.iter().cloned())
    }
}

impl<T: Serialize> ItemStore<T> {
    /// Serialize all items as a compact JSON array
    pub fn to_json(&self) -> StoreResult<String> {
        serde_json::to_string(&self.items).map_err(StoreError::Serialization)
    }

    /// Serialize all items as an indented JSON array
    pub fn to_json_pretty(&self) -> StoreResult<String> {
        serde_json::to_string_pretty(&self.items).map_err(StoreError::Serialization)
    }
}

impl<T: DeserializeOwned + PartialEq> ItemStore<T> {
    /// Build a store from a JSON array, aborting on the first invalid record.
    ///
    /// Duplicate records are dropped silently.
    pub fn from_json(json: &str) -> StoreResult<Self> {
        Self::from_json_with(json, LoadPolicy::AbortOnInvalid).map(|(store, _)| store)
    }

    /// Build a store from a JSON array under an explicit load policy
    pub fn from_json_with(json: &str, policy: LoadPolicy) -> StoreResult<(Self, LoadSummary)> {
        let document: Value =
            serde_json::from_str(json).map_err(|source| StoreError::DataConversion {
                location: RecordLocation::Document,
                source,
            })?;

        let Value::Array(records) = document else {
            return Err(StoreError::DataConversion {
                location: RecordLocation::Document,
                source: <serde_json::Error as serde::de::Error>::custom(
                    "expected a JSON array of items",
                ),
            });
        };

        let mut store = Self::new();
        let mut summary = LoadSummary::default();

        for (index, record) in records.into_iter().enumerate() {
            let item = match serde_json::from_value::<T>(record) {
                Ok(item) => item,
                Err(source) => match policy {
                    LoadPolicy::AbortOnInvalid => {
                        return Err(StoreError::DataConversion {
                            location: RecordLocation::Record(index),
                            source,
                        });
                    },
                    LoadPolicy::SkipInvalid => {
                        warn!("Skipping invalid record {index}: {source}");
                        summary.skipped_invalid += 1;
                        continue;
                    },
                },
            };

            match store.add(item) {
                AddOutcome::Inserted => summary.loaded += 1,
                AddOutcome::SkippedDuplicate => {
                    info!("Record {index} duplicates an earlier item. Skipping...");
                    summary.duplicates += 1;
                },
            }
        }

        Ok((store, summary))
    }
}

impl<'a, T> IntoIterator for &'a ItemStore<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
