//! TTL Slot Cache - a bounded in-process key-value cache
//!
//! Entries expire a fixed TTL after their last write. When the cache cannot
//! grow, writes reuse a stale slot or evict the lightly used slot closest to
//! expiry.
//!
//! ```
//! use std::time::Duration;
//! use ttl_slot_cache::{Lookup, TtlCache, WriteOutcome};
//!
//! let mut users = TtlCache::new(1, Duration::from_secs(3600)).unwrap();
//! assert_eq!(users.set("John", 20), WriteOutcome::Created);
//! assert_eq!(users.get("John"), Lookup::Hit(20));
//! assert_eq!(users.get("Brandon"), Lookup::Miss);
//! ```

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheStats, Lookup, TtlCache, WriteOutcome};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
