//! Event projection
//!
//! An event is the scheduling part of an item: when it starts, when it ends
//! (optionally) and how urgent it is. Items without an event are plain
//! entries and never take part in schedule ordering.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::Priority;

/// Accepted input formats for date-times, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Scheduling attributes carried by event items
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    /// When the event starts
    pub start: NaiveDateTime,

    /// When the event ends, if known (never before `start`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<NaiveDateTime>,

    /// Tie-break when two events start at the same time
    #[serde(default)]
    pub priority: Priority,
}

impl Event {
    /// Create an open-ended event at `start`
    #[must_use]
    pub const fn new(start: NaiveDateTime, priority: Priority) -> Self {
        Self {
            start,
            end: None,
            priority,
        }
    }

    /// Set the end time, rejecting an end that precedes the start
    pub fn with_end(mut self, end: NaiveDateTime) -> Result<Self, String> {
        self.end = Some(end);
        self.validate()?;
        Ok(self)
    }

    /// Check the start/end ordering
    pub fn validate(&self) -> Result<(), String> {
        match self.end {
            Some(end) if end < self.start => Err(format!(
                "event ends ({end}) before it starts ({start})",
                start = self.start
            )),
            _ => Ok(()),
        }
    }
}

/// Parse a user-supplied date-time.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM[:SS]` and a bare
/// `YYYY-MM-DD`, which is read as midnight.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, String> {
    let input = input.trim();

    for format in DATETIME_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(parsed);
        }
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| {
            format!("Invalid date-time: {input}. Use: YYYY-MM-DD, YYYY-MM-DD HH:MM[:SS]")
        })
}
