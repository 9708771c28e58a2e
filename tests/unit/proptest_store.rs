//! Property-based tests for the item store
//!
//! Uses proptest to verify properties that should hold for all inputs.

use itemtrack::models::{Event, Item, Priority};
use itemtrack::{EventList, ItemStore};
use proptest::prelude::*;

use crate::common::at;

fn arb_priority() -> impl Strategy<Value = Priority> {
    prop_oneof![Just(Priority::P0), Just(Priority::P1), Just(Priority::P2), Just(Priority::P3)]
}

fn arb_item() -> impl Strategy<Value = Item> {
    (
        "[a-z ]{0,12}",
        prop::collection::vec("[a-z]{1,5}", 0..3),
        prop::option::of((1u32..28, 0u32..24, arb_priority())),
    )
        .prop_map(|(description, tags, event)| {
            let item = Item::new(description).with_tags(tags);
            match event {
                Some((day, hour, priority)) => Item {
                    event: Some(Event::new(at(2026, 2, day, hour, 0), priority)),
                    ..item
                },
                None => item,
            }
        })
}

proptest! {
    /// Whatever saves successfully loads back into an equal store, and only
    /// stores holding a blank description refuse to save
    #[test]
    fn json_round_trip(items in prop::collection::vec(arb_item(), 0..12)) {
        let mut store = ItemStore::new();
        for item in items {
            store.add(item);
        }
        let has_blank = store.iter().any(|item| item.description.trim().is_empty());

        match store.to_json() {
            Ok(json) => {
                prop_assert!(!has_blank);
                let loaded: ItemStore<Item> = ItemStore::from_json(&json).unwrap();
                prop_assert_eq!(loaded, store);
            },
            Err(_) => prop_assert!(has_blank),
        }
    }

    /// Adding every item twice gives the same store as adding once
    #[test]
    fn add_is_idempotent(items in prop::collection::vec(arb_item(), 0..12)) {
        let mut once = ItemStore::new();
        let mut twice = ItemStore::new();
        for item in &items {
            once.add(item.clone());
            twice.add(item.clone());
            twice.add(item.clone());
        }
        prop_assert_eq!(once, twice);
    }

    /// Sorted events are ordered by (start, priority) and keep every item
    #[test]
    fn sort_orders_by_schedule(items in prop::collection::vec(arb_item(), 0..12)) {
        let events = EventList::events_in(items);
        let sorted = events.sort().unwrap();
        prop_assert_eq!(sorted.len(), events.len());

        let keys: Vec<_> = sorted
            .iter()
            .filter_map(|item| item.event.map(|e| (e.start, e.priority)))
            .collect();
        prop_assert!(keys.windows(2).all(|w| w[0] <= w[1]));
    }
}
