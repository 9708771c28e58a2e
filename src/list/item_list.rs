//! Base ordered collection

use super::{Listable, SearchMode, find_matching};
use crate::models::Item;

/// Insertion-ordered list of items; duplicates are allowed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemList<T = Item> {
    items: Vec<T>,
}

impl<T> Default for ItemList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ItemList<T> {
    /// Create an empty list
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append an item to the end
    pub fn add(&mut self, item: T) {
        self.items.push(item);
    }

    /// Number of items
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, if any
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Iterate in list order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrow the items as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: Listable + Clone> ItemList<T> {
    /// Append every item whose description contains `query` to `into`,
    /// then hand `into` back. The receiver is never modified.
    pub fn find_into<C: Extend<T>>(&self, query: &str, mode: SearchMode, mut into: C) -> C {
        into.extend(find_matching(self.items.as_slice(), query, mode).cloned());
        into
    }

    /// Case-sensitive search into a new list
    #[must_use]
    pub fn find(&self, query: &str) -> Self {
        self.find_with(query, SearchMode::CaseSensitive)
    }

    /// Search into a new list using `mode`
    #[must_use]
    pub fn find_with(&self, query: &str, mode: SearchMode) -> Self {
        self.find_into(query, mode, Self::new())
    }
}

impl<T> FromIterator<T> for ItemList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ItemList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for ItemList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ItemList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
