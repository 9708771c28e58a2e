//! Data models for itemtrack
//!
//! Core abstractions:
//! - Item: "something to keep track of" (description + tags)
//! - Event: "when it happens" (start, optional end, priority)
//! - Priority: "how urgent it is" (p0 = critical, p3 = low)

mod event;
mod item;
mod priority;

pub use event::{Event, parse_datetime};
pub use item::Item;
pub use priority::Priority;
