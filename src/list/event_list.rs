//! Event view over an item list
//!
//! Queries never modify the receiver: `sort` and `find` build new lists.

use super::{EventSource, ItemList, SearchMode, sort_by_schedule};
use crate::error::{StoreError, StoreResult};
use crate::models::Item;

/// Items that carry event attributes, orderable by schedule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventList<T = Item> {
    inner: ItemList<T>,
}

impl<T> Default for EventList<T> {
    fn default() -> Self {
        Self {
            inner: ItemList::new(),
        }
    }
}

impl<T: EventSource + Clone> EventList<T> {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: ItemList::new(),
        }
    }

    /// Copy every item across without filtering.
    ///
    /// Items lacking event data are kept; `sort` reports them.
    pub fn from_items<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self {
            inner: items.into_iter().collect(),
        }
    }

    /// Copy only the items that carry event data
    pub fn events_in<I: IntoIterator<Item = T>>(items: I) -> Self {
        Self {
            inner: items.into_iter().filter(|item| item.event().is_some()).collect(),
        }
    }

    /// Append an event item, rejecting items without event data
    pub fn add(&mut self, item: T) -> StoreResult<()> {
        if item.event().is_none() {
            return Err(StoreError::MissingEventData {
                description: item.description().to_string(),
            });
        }
        self.inner.add(item);
        Ok(())
    }

    /// New list ordered by start time, ties broken by priority
    pub fn sort(&self) -> StoreResult<Self> {
        let sorted = sort_by_schedule(self.inner.as_slice())?;
        Ok(Self {
            inner: sorted.into_iter().collect(),
        })
    }

    /// Case-sensitive description search into a new list
    #[must_use]
    pub fn find(&self, query: &str) -> Self {
        self.find_with(query, SearchMode::CaseSensitive)
    }

    /// Description search into a new list using `mode`
    #[must_use]
    pub fn find_with(&self, query: &str, mode: SearchMode) -> Self {
        Self {
            inner: self.inner.find_into(query, mode, ItemList::new()),
        }
    }
}

impl<T> EventList<T> {
    /// Number of items
    #[must_use]
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Whether the list has no items
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Item at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.inner.get(index)
    }

    /// Iterate in list order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.inner.iter()
    }

    /// Borrow the items as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    /// Unwrap into the underlying list
    #[must_use]
    pub fn into_inner(self) -> ItemList<T> {
        self.inner
    }
}

impl<'a, T> IntoIterator for &'a EventList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.inner.iter()
    }
}
