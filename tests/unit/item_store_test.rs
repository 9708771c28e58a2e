//! Tests for the deduplicated item store and its JSON codec

use itemtrack::models::{Event, Item};
use itemtrack::{AddOutcome, ItemStore, LoadPolicy, RecordLocation, StoreError};

use crate::common::{at, event, plain, prio};

fn store_of(items: impl IntoIterator<Item = Item>) -> ItemStore {
    let mut store = ItemStore::new();
    for item in items {
        store.add(item);
    }
    store
}

// =============================================================================
// ADD / LOOKUP TESTS
// =============================================================================

#[test]
fn test_add_is_idempotent() {
    let mut store = ItemStore::new();
    assert_eq!(store.add(plain("water plants")), AddOutcome::Inserted);
    assert_eq!(store.add(plain("water plants")), AddOutcome::SkippedDuplicate);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_add_outcome_inserted_flag() {
    assert!(AddOutcome::Inserted.inserted());
    assert!(!AddOutcome::SkippedDuplicate.inserted());
}

#[test]
fn test_contains_and_index_of() {
    let store = store_of([plain("a"), plain("b")]);

    assert!(store.contains(&plain("b")));
    assert_eq!(store.index_of(&plain("b")), Some(1));
    assert_eq!(store.index_of(&plain("zzz")), None);
    assert!(!store.contains(&plain("zzz")));
}

#[test]
fn test_items_snapshot_in_order() {
    let store = store_of([plain("x"), plain("y")]);
    let descriptions: Vec<_> = store.items().iter().map(|i| i.description.as_str()).collect();
    assert_eq!(descriptions, ["x", "y"]);
}

// =============================================================================
// BOUNDS TESTS
// =============================================================================

#[test]
fn test_get_out_of_range_on_empty_store() {
    let store: ItemStore = ItemStore::new();
    assert!(matches!(store.get(0), Err(StoreError::IndexOutOfRange { index: 0, len: 0 })));
    assert!(matches!(store.get(usize::MAX), Err(StoreError::IndexOutOfRange { .. })));
}

#[test]
fn test_get_at_size_fails() {
    let store = store_of([plain("only")]);
    assert_eq!(store.get(0).unwrap().description, "only");
    assert!(matches!(store.get(store.len()), Err(StoreError::IndexOutOfRange { index: 1, len: 1 })));
}

#[test]
fn test_set_item_out_of_range() {
    let mut store = store_of([plain("a")]);
    assert!(matches!(store.set_item(5, plain("b")), Err(StoreError::IndexOutOfRange { .. })));
    assert_eq!(store.get(0).unwrap().description, "a");
}

// =============================================================================
// REMOVE / REPLACE TESTS
// =============================================================================

#[test]
fn test_remove_reports_found() {
    let mut store = store_of([plain("a"), plain("b")]);

    assert_eq!(store.remove(&plain("a")), Some(plain("a")));
    assert_eq!(store.len(), 1);
    assert_eq!(store.remove(&plain("a")), None);
    assert_eq!(store.len(), 1);
}

#[test]
fn test_remove_at() {
    let mut store = store_of([plain("a"), plain("b"), plain("c")]);
    assert_eq!(store.remove_at(1).unwrap().description, "b");
    assert_eq!(store.index_of(&plain("c")), Some(1));
    assert!(store.remove_at(2).is_err());
}

#[test]
fn test_set_item_does_not_enforce_uniqueness() {
    let mut store = store_of([plain("a"), plain("b")]);
    let old = store.set_item(1, plain("a")).unwrap();

    assert_eq!(old, plain("b"));
    assert_eq!(store.len(), 2);
    assert_eq!(store.get(1).unwrap(), &plain("a"));
}

#[test]
fn test_replace_rejects_duplicate() {
    let mut store = store_of([plain("a"), plain("b")]);
    let err = store.replace(1, plain("a")).unwrap_err();

    assert!(matches!(err, StoreError::DuplicateItem { index: 0 }));
    assert_eq!(store.get(1).unwrap(), &plain("b"));
}

#[test]
fn test_replace_with_equal_value_in_place() {
    let mut store = store_of([plain("a"), plain("b")]);
    assert!(store.replace(1, plain("b")).is_ok());
    assert!(store.replace(0, plain("c")).is_ok());
    assert_eq!(store.get(0).unwrap(), &plain("c"));
}

// =============================================================================
// EQUALITY / COPY TESTS
// =============================================================================

#[test]
fn test_equality_is_order_sensitive() {
    let ab = store_of([plain("a"), plain("b")]);
    let ba = store_of([plain("b"), plain("a")]);
    assert_ne!(ab, ba);
    assert_eq!(ab, store_of([plain("a"), plain("b")]));
}

#[test]
fn test_deep_copy_is_equal_and_independent() {
    let original = store_of([plain("a"), event("b", at(2026, 1, 1, 9, 0), prio(1))]);
    let mut copy = original.deep_copy();
    assert_eq!(copy, original);

    let mut changed = copy.get(0).unwrap().clone();
    changed.description = "changed".to_string();
    changed.tags.push("new".to_string());
    copy.set_item(0, changed).unwrap();

    assert_eq!(original.get(0).unwrap(), &plain("a"));
    assert_ne!(copy, original);
}

#[test]
fn test_deep_copy_collapses_duplicates_from_set_item() {
    let mut store = store_of([plain("a"), plain("b")]);
    store.set_item(1, plain("a")).unwrap();

    let copy = store.deep_copy();
    assert_eq!(copy.len(), 1);
}

#[test]
fn test_events_projection() {
    let store = store_of([
        plain("plain"),
        event("late", at(2026, 1, 2, 0, 0), prio(1)),
        event("early", at(2026, 1, 1, 0, 0), prio(1)),
    ]);

    let events = store.events();
    assert_eq!(events.len(), 2);
    let sorted = events.sort().unwrap();
    assert_eq!(sorted.get(0).unwrap().description, "early");
    assert_eq!(store.to_list().len(), 3);
}

// =============================================================================
// JSON TESTS
// =============================================================================

#[test]
fn test_json_round_trip() {
    let end = at(2026, 10, 19, 10, 0);
    let store = store_of([
        plain("buy milk").with_tags(["errand", "shop"]),
        Item::scheduled(
            "standup",
            Event::new(at(2026, 10, 19, 9, 0), prio(0)).with_end(end).unwrap(),
        ),
        event("review", at(2026, 10, 20, 14, 0), prio(3)),
    ]);

    let json = store.to_json().unwrap();
    let loaded: ItemStore = ItemStore::from_json(&json).unwrap();
    assert_eq!(loaded, store);

    let pretty = store.to_json_pretty().unwrap();
    assert_eq!(ItemStore::<Item>::from_json(&pretty).unwrap(), store);
}

#[test]
fn test_empty_store_json() {
    let store: ItemStore = ItemStore::new();
    assert_eq!(store.to_json().unwrap(), "[]");
    assert!(ItemStore::<Item>::from_json("[]").unwrap().is_empty());
}

#[test]
fn test_to_json_rejects_blank_description() {
    let mut store = store_of([plain("fine")]);
    store.add(plain("   "));

    let err = store.to_json().unwrap_err();
    assert!(matches!(err, StoreError::Serialization(_)));
    assert!(err.to_string().contains("must not be blank"));
    assert!(matches!(store.to_json_pretty(), Err(StoreError::Serialization(_))));
}

#[test]
fn test_to_json_rejects_event_ending_before_start() {
    let start = at(2026, 1, 2, 0, 0);
    let inverted = Item::scheduled(
        "backwards",
        Event {
            end: Some(start - chrono::TimeDelta::hours(1)),
            ..Event::new(start, prio(1))
        },
    );
    let store = store_of([inverted]);

    let err = store.to_json().unwrap_err();
    assert!(matches!(err, StoreError::Serialization(_)));
    assert!(err.to_string().contains("before it starts"));
}

#[test]
fn test_to_json_rejects_invalid_item_placed_by_set_item() {
    let mut store = store_of([plain("a"), plain("b")]);
    let mut blank = plain("b");
    blank.description.clear();
    store.set_item(1, blank).unwrap();

    assert!(store.to_json().is_err());
}

#[test]
fn test_from_json_invalid_record_aborts() {
    let json = r#"[{"description":"ok"},{"tags":["no description"]},{"description":"after"}]"#;
    match ItemStore::<Item>::from_json(json) {
        Err(StoreError::DataConversion { location, .. }) => {
            assert_eq!(location, RecordLocation::Record(1));
        },
        other => panic!("expected DataConversion, got {other:?}"),
    }
}

#[test]
fn test_from_json_duplicate_records_are_dropped() {
    let json = r#"[{"description":"same","tags":["t"]},{"description":"same","tags":["t"]}]"#;
    let (store, summary) = ItemStore::<Item>::from_json_with(json, LoadPolicy::default()).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(summary.loaded, 1);
    assert_eq!(summary.duplicates, 1);
    assert_eq!(summary.skipped_invalid, 0);
}

#[test]
fn test_from_json_skip_invalid_policy() {
    let json = r#"[{"description":"ok"},{"description":""},42,{"description":"after"}]"#;
    let (store, summary) = ItemStore::<Item>::from_json_with(json, LoadPolicy::SkipInvalid).unwrap();

    assert_eq!(store.len(), 2);
    assert_eq!(store.get(1).unwrap().description, "after");
    assert_eq!(summary.skipped_invalid, 2);
}

#[test]
fn test_from_json_malformed_document() {
    let err = ItemStore::<Item>::from_json("[{\"description\":").unwrap_err();
    assert!(err.is_data_conversion());
    assert!(matches!(err, StoreError::DataConversion { location: RecordLocation::Document, .. }));
}

#[test]
fn test_from_json_non_array_document() {
    for policy in [LoadPolicy::AbortOnInvalid, LoadPolicy::SkipInvalid] {
        let err = ItemStore::<Item>::from_json_with(r#"{"description":"x"}"#, policy).unwrap_err();
        assert!(matches!(err, StoreError::DataConversion { location: RecordLocation::Document, .. }));
    }
}

#[test]
fn test_load_policy_parse_and_display() {
    assert_eq!("skip".parse::<LoadPolicy>().unwrap(), LoadPolicy::SkipInvalid);
    assert_eq!("abort_on_invalid".parse::<LoadPolicy>().unwrap(), LoadPolicy::AbortOnInvalid);
    assert!("maybe".parse::<LoadPolicy>().is_err());
    assert_eq!(LoadPolicy::SkipInvalid.to_string(), "skip-invalid");
}

#[test]
fn test_error_messages() {
    let err = StoreError::IndexOutOfRange { index: 3, len: 2 };
    assert_eq!(err.to_string(), "index 3 out of range (store has 2 items)");

    let err = ItemStore::<Item>::from_json(r#"[{"nope":1}]"#).unwrap_err();
    assert!(err.to_string().starts_with("data conversion failed at record 0"));
}
