//! Ordered item collections
//!
//! - [`ItemList`]: insertion-ordered, duplicates allowed, substring search
//! - [`EventList`]: an `ItemList` of event items with schedule ordering
//!
//! The algorithms live in free functions ([`find_matching`],
//! [`sort_by_schedule`]) so both lists share one implementation.

mod event_list;
mod item_list;

use serde::{Deserialize, Serialize};

pub use event_list::EventList;
pub use item_list::ItemList;

use crate::error::{StoreError, StoreResult};
use crate::models::Event;

/// Anything a list can search by description
pub trait Listable {
    /// Text matched by `find`
    fn description(&self) -> &str;
}

/// Items that may carry an event projection
pub trait EventSource: Listable {
    /// Event attributes, if this item is an event
    fn event(&self) -> Option<&Event>;
}

/// How `find` compares descriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Exact substring match
    #[default]
    CaseSensitive,
    /// Substring match ignoring case
    CaseInsensitive,
}

impl SearchMode {
    /// Pick a mode from an "ignore case" flag
    #[must_use]
    pub const fn ignoring_case(ignore_case: bool) -> Self {
        if ignore_case { Self::CaseInsensitive } else { Self::CaseSensitive }
    }

    fn matches(self, haystack: &str, needle: &str) -> bool {
        match self {
            Self::CaseSensitive => haystack.contains(needle),
            Self::CaseInsensitive => haystack.to_lowercase().contains(&needle.to_lowercase()),
        }
    }
}

/// Items whose description contains `query`, in their original order
pub fn find_matching<'a, T: Listable>(
    items: &'a [T],
    query: &'a str,
    mode: SearchMode,
) -> impl Iterator<Item = &'a T> + 'a {
    items.iter().filter(move |item| mode.matches(item.description(), query))
}

/// Copy `items` into schedule order: start time, then priority.
///
/// The sort is stable, so entries equal on both keys keep their relative
/// order. Fails on the first item that has no event attributes.
pub fn sort_by_schedule<T: EventSource + Clone>(items: &[T]) -> StoreResult<Vec<T>> {
    let mut keyed = Vec::with_capacity(items.len());
    for item in items {
        let event = item.event().ok_or_else(|| StoreError::MissingEventData {
            description: item.description().to_string(),
        })?;
        keyed.push((event.start, event.priority, item));
    }

    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    Ok(keyed.into_iter().map(|(_, _, item)| item.clone()).collect())
}
