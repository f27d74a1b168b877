//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Errors surfaced when building a cache.
///
/// Once constructed, `get` and `set` never fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity must allow at least one entry
    #[error("Cache capacity must be at least 1")]
    ZeroCapacity,

    /// A configuration value could not be parsed
    #[error("Invalid config value for {name}: {value}")]
    InvalidConfig { name: &'static str, value: String },
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
