//! Cache Module
//!
//! Provides a bounded in-memory cache with lazy TTL expiry and slot reuse.

mod clock;
mod entry;
mod eviction;
mod outcome;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use outcome::{Lookup, WriteOutcome};
pub use stats::CacheStats;
pub use store::TtlCache;
