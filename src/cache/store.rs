//! Cache Store Module
//!
//! Main cache engine: a bounded HashMap of slots with lazy TTL expiry and
//! slot reuse on write.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, trace};

use crate::cache::clock::duration_ms;
use crate::cache::eviction::{find_stale, select_victim};
use crate::cache::{CacheEntry, CacheStats, Clock, Lookup, SystemClock, WriteOutcome};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};

// == TTL Cache ==
/// Bounded key-value cache with a fixed TTL.
///
/// Stale entries are never swept in the background. They keep their slot,
/// and count against capacity, until a later write reuses it.
#[derive(Debug)]
pub struct TtlCache<V, C = SystemClock> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Lifetime given to every write
    ttl: Duration,
    clock: C,
}

impl<V> TtlCache<V, SystemClock> {
    // == Constructor ==
    /// Creates a cache backed by the wall clock.
    ///
    /// # Errors
    /// `CacheError::ZeroCapacity` if `capacity` is 0.
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        Self::with_clock(capacity, ttl, SystemClock)
    }

    /// Creates a cache from a loaded configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.capacity, config.ttl())
    }
}

impl<V, C: Clock> TtlCache<V, C> {
    /// Creates a cache reading time from `clock`.
    pub fn with_clock(capacity: usize, ttl: Duration, clock: C) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::ZeroCapacity);
        }

        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            stats: CacheStats::new(),
            capacity,
            ttl,
            clock,
        })
    }

    // == Get ==
    /// Retrieves a clone of the value stored under `key`.
    ///
    /// A live entry has its hit count bumped. A missing or stale entry is a
    /// miss and is left untouched in the map.
    pub fn get(&mut self, key: &str) -> Lookup<V>
    where
        V: Clone,
    {
        let now = self.clock.now_ms();

        match self.entries.get_mut(key) {
            Some(entry) if !entry.is_stale(now) => {
                entry.record_hit();
                self.stats.record_hit();
                trace!(key, hit_count = entry.hit_count, "cache hit");
                Lookup::Hit(entry.value.clone())
            }
            _ => {
                self.stats.record_miss();
                trace!(key, "cache miss");
                Lookup::Miss
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key`, reusing a slot when the cache cannot grow.
    ///
    /// The first matching rule wins:
    /// 1. `key` is resident (live or stale): overwrite it, `Updated`.
    /// 2. another slot is stale: hand that slot to `key`, `Created`.
    /// 3. the cache is full: hand the eviction victim's slot to `key`, `Created`.
    /// 4. otherwise insert a fresh slot, `Created`.
    ///
    /// Every write sets the expiry to now + TTL and resets the hit count.
    pub fn set(&mut self, key: impl Into<String>, value: V) -> WriteOutcome {
        let key = key.into();
        let now = self.clock.now_ms();
        let expire_at = now.saturating_add(duration_ms(self.ttl));

        if let Some(entry) = self.entries.get_mut(&key) {
            entry.rewrite(value, expire_at);
            self.stats.record_update();
            return WriteOutcome::Updated;
        }

        if let Some(stale_key) = find_stale(&self.entries, now).cloned() {
            debug!(old_key = %stale_key, new_key = %key, "reclaiming stale slot");
            self.reuse_slot(&stale_key, key, value, expire_at);
            self.stats.record_reclaim();
            return WriteOutcome::Created;
        }

        if self.entries.len() >= self.capacity {
            if let Some(victim) = select_victim(&self.entries).cloned() {
                debug!(old_key = %victim, new_key = %key, "evicting slot at capacity");
                self.reuse_slot(&victim, key, value, expire_at);
                self.stats.record_eviction();
                return WriteOutcome::Created;
            }
        }

        self.entries.insert(key, CacheEntry::new(value, expire_at));
        self.stats.record_insert();
        self.stats.set_total_entries(self.entries.len());
        WriteOutcome::Created
    }

    /// Moves the slot stored under `old_key` to `new_key` and rewrites it.
    fn reuse_slot(&mut self, old_key: &str, new_key: String, value: V, expire_at: u64) {
        match self.entries.remove(old_key) {
            Some(mut entry) => {
                entry.rewrite(value, expire_at);
                self.entries.insert(new_key, entry);
            }
            None => {
                self.entries.insert(new_key, CacheEntry::new(value, expire_at));
            }
        }
    }

    // == Contains Key ==
    /// Returns true if `key` occupies a slot, whether live or stale.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the number of occupied slots, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    #[cfg(test)]
    pub(crate) fn entry(&self, key: &str) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }
}
