//! Integration Tests for the public cache API
//!
//! Replays the demo driver's scenarios end to end against the wall clock.

use std::thread::sleep;
use std::time::Duration;

use serde::Serialize;
use serde_json::json;
use ttl_slot_cache::cache::ManualClock;
use ttl_slot_cache::{CacheConfig, CacheError, Lookup, TtlCache, WriteOutcome};

const HOUR: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone, PartialEq, Serialize)]
struct UserInfo {
    age: u32,
    address: String,
}

fn user(age: u32, address: &str) -> UserInfo {
    UserInfo {
        age,
        address: address.to_string(),
    }
}

// == Scenarios ==

#[test]
fn test_plain_set_then_get() {
    let mut users = TtlCache::new(1, HOUR).unwrap();

    assert_eq!(users.set("John", user(20, "here")), WriteOutcome::Created);
    assert_eq!(users.get("John"), Lookup::Hit(user(20, "here")));
}

#[test]
fn test_get_unknown_key() {
    let mut users = TtlCache::new(1, HOUR).unwrap();
    users.set("John", user(20, "here"));

    assert_eq!(users.get("Brandon"), Lookup::Miss);
}

#[test]
fn test_stale_slot_reuse_reports_created() {
    let mut users = TtlCache::new(1, Duration::from_millis(100)).unwrap();
    users.set("John", user(20, "here"));

    sleep(Duration::from_millis(200));

    // The slot is reused for a key that was never resident
    assert_eq!(users.set("David", user(18, "here")), WriteOutcome::Created);
    assert_eq!(users.len(), 1);
    assert_eq!(users.get("John"), Lookup::Miss);
    assert_eq!(users.get("David"), Lookup::Hit(user(18, "here")));
}

#[test]
fn test_eviction_at_capacity() {
    let mut users = TtlCache::new(1, HOUR).unwrap();
    users.set("John", user(20, "here"));

    assert_eq!(users.set("David", user(18, "here")), WriteOutcome::Created);
    assert_eq!(users.get("John"), Lookup::Miss);
    assert_eq!(users.len(), 1);
}

// == Properties through the public API ==

#[test]
fn test_expired_entry_stays_resident() {
    let mut cache = TtlCache::new(4, Duration::from_millis(50)).unwrap();
    cache.set("k", 1);

    sleep(Duration::from_millis(100));

    assert_eq!(cache.get("k"), Lookup::Miss);
    assert!(cache.contains_key("k"));
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_eviction_prefers_lightly_used() {
    let clock = ManualClock::new(0);
    let mut cache = TtlCache::with_clock(2, HOUR, clock.clone()).unwrap();

    cache.set("A", "a");
    clock.advance(Duration::from_millis(10));
    cache.set("B", "b");
    for _ in 0..3 {
        assert!(cache.get("B").is_hit());
    }

    cache.set("C", "c");

    assert_eq!(cache.get("A"), Lookup::Miss);
    assert_eq!(cache.get("B"), Lookup::Hit("b"));
    assert_eq!(cache.get("C"), Lookup::Hit("c"));
}

#[test]
fn test_update_never_reports_created() {
    let clock = ManualClock::new(0);
    let mut cache = TtlCache::with_clock(1, Duration::from_millis(10), clock.clone()).unwrap();

    assert_eq!(cache.set("k", 1), WriteOutcome::Created);
    assert_eq!(cache.set("k", 2), WriteOutcome::Updated);
    clock.advance(Duration::from_millis(50));
    assert_eq!(cache.set("k", 3), WriteOutcome::Updated);
    assert_eq!(cache.get("k"), Lookup::Hit(3));
}

#[test]
fn test_zero_capacity_rejected() {
    assert!(matches!(
        TtlCache::<u8>::new(0, HOUR),
        Err(CacheError::ZeroCapacity)
    ));

    let config = CacheConfig {
        capacity: 0,
        ttl_ms: 1_000,
    };
    assert!(matches!(
        TtlCache::<u8>::from_config(&config),
        Err(CacheError::ZeroCapacity)
    ));
}

#[test]
fn test_outcomes_serialize_like_the_driver_prints() {
    let mut users = TtlCache::new(2, HOUR).unwrap();

    let created = serde_json::to_value(users.set("John", user(20, "here"))).unwrap();
    let updated = serde_json::to_value(users.set("John", user(21, "here"))).unwrap();
    let hit = serde_json::to_value(users.get("John")).unwrap();
    let miss = serde_json::to_value(users.get("Brandon")).unwrap();

    assert_eq!(created, json!({ "created": true }));
    assert_eq!(updated, json!({ "updated": true }));
    assert_eq!(hit, json!({ "hit": true, "value": { "age": 21, "address": "here" } }));
    assert_eq!(miss, json!({ "hit": false }));
}
