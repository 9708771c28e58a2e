//! Item model
//!
//! An item is the unit the store tracks: a description, some free-form tags
//! and, for calendar entries, an [`Event`] projection.

use serde::{Deserialize, Serialize, Serializer};

use super::Event;
use crate::list::{EventSource, Listable};

/// A tracked item
///
/// Both directions of the JSON mapping validate: an item with a blank
/// description or an inverted event fails to serialize as well as to load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "ItemEntry")]
pub struct Item {
    /// What the item is about (never blank)
    pub description: String,

    /// Free-form labels, in insertion order
    pub tags: Vec<String>,

    /// Scheduling attributes, present only for events
    pub event: Option<Event>,
}

/// Borrowed view written to disk
#[derive(Serialize)]
struct ItemRecord<'a> {
    description: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    tags: Option<&'a [String]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    event: Option<&'a Event>,
}

/// Item as it appears on disk, before validation
#[derive(Debug, Deserialize)]
struct ItemEntry {
    description: String,
    #[serde(default)]
    tags: Vec<String>,
    #[serde(default)]
    event: Option<Event>,
}

impl TryFrom<ItemEntry> for Item {
    type Error = String;

    fn try_from(entry: ItemEntry) -> Result<Self, Self::Error> {
        let item = Self {
            description: entry.description,
            tags: entry.tags,
            event: entry.event,
        };
        item.validate()?;
        Ok(item)
    }
}

impl Serialize for Item {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.validate().map_err(<S::Error as serde::ser::Error>::custom)?;
        ItemRecord {
            description: &self.description,
            tags: (!self.tags.is_empty()).then_some(self.tags.as_slice()),
            event: self.event.as_ref(),
        }
        .serialize(serializer)
    }
}

impl Item {
    /// Create a plain item with no tags and no event
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            tags: Vec::new(),
            event: None,
        }
    }

    /// Create an event item
    #[must_use]
    pub fn scheduled(description: impl Into<String>, event: Event) -> Self {
        Self {
            event: Some(event),
            ..Self::new(description)
        }
    }

    /// Attach tags, keeping their order
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Parse a single item from its JSON representation
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check the description is not blank and the event, if any, is ordered
    pub fn validate(&self) -> Result<(), String> {
        if self.description.trim().is_empty() {
            return Err("item description must not be blank".to_string());
        }
        if let Some(event) = &self.event {
            event.validate()?;
        }
        Ok(())
    }

    /// Whether this item carries event attributes
    #[must_use]
    pub const fn is_event(&self) -> bool {
        self.event.is_some()
    }
}

impl Listable for Item {
    fn description(&self) -> &str {
        &self.description
    }
}

impl EventSource for Item {
    fn event(&self) -> Option<&Event> {
        self.event.as_ref()
    }
}
