//! Slot Selection Module
//!
//! Picks which existing slot a new key should take over: a stale slot when one
//! exists, otherwise an eviction victim.

use crate::cache::CacheEntry;

/// Slots read fewer times than this since their last write count as lightly used.
pub const LIGHT_USE_THRESHOLD: u32 = 2;

// == Find Stale ==
/// Returns the key of the first slot that is stale at `now`, in iteration order.
pub fn find_stale<'a, V: 'a>(
    entries: impl IntoIterator<Item = (&'a String, &'a CacheEntry<V>)>,
    now: u64,
) -> Option<&'a String> {
    entries
        .into_iter()
        .find(|(_, entry)| entry.is_stale(now))
        .map(|(key, _)| key)
}

// == Select Victim ==
/// Chooses the slot to evict when the cache is full and nothing is stale.
///
/// Slots are ordered by `expire_at` ascending with a stable sort, so ties keep
/// iteration order. The earliest-expiring lightly used slot wins; if every
/// slot is heavily used, the earliest-expiring slot overall is taken.
///
/// Returns None only for an empty cache.
pub fn select_victim<'a, V: 'a>(
    entries: impl IntoIterator<Item = (&'a String, &'a CacheEntry<V>)>,
) -> Option<&'a String> {
    let mut by_expiry: Vec<(&String, &CacheEntry<V>)> = entries.into_iter().collect();
    by_expiry.sort_by_key(|(_, entry)| entry.expire_at);

    by_expiry
        .iter()
        .find(|(_, entry)| entry.hit_count < LIGHT_USE_THRESHOLD)
        .or_else(|| by_expiry.first())
        .map(|(key, _)| *key)
}
