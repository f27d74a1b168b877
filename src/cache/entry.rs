//! Cache Entry Module
//!
//! Defines the structure for individual cache slots with TTL support.

// == Cache Entry ==
/// A single cache slot: the stored value plus its expiry and hit bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Successful reads since the last write
    pub hit_count: u32,
    /// Expiration timestamp (Unix milliseconds)
    pub expire_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a fresh slot expiring at `expire_at`.
    pub fn new(value: V, expire_at: u64) -> Self {
        Self {
            value,
            hit_count: 0,
            expire_at,
        }
    }

    // == Is Stale ==
    /// Checks if the slot has expired at `now`.
    ///
    /// Boundary condition: a slot is stale once `now >= expire_at`, so a zero
    /// TTL makes the slot stale the instant it is written.
    pub fn is_stale(&self, now: u64) -> bool {
        now >= self.expire_at
    }

    // == Rewrite ==
    /// Overwrites the slot in place for a new write, resetting the hit count.
    pub fn rewrite(&mut self, value: V, expire_at: u64) {
        self.value = value;
        self.expire_at = expire_at;
        self.hit_count = 0;
    }

    // == Record Hit ==
    pub fn record_hit(&mut self) {
        self.hit_count = self.hit_count.saturating_add(1);
    }
}
