//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Default maximum number of entries.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Default time-to-live in milliseconds (one hour).
pub const DEFAULT_TTL_MS: u64 = 60 * 60 * 1000;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// Time-to-live in milliseconds applied on every write
    pub ttl_ms: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries (default: 1000)
    /// - `CACHE_TTL_MS` - TTL in milliseconds (default: 3600000)
    ///
    /// Unset variables fall back to their defaults; values that fail to parse
    /// are reported rather than silently replaced.
    pub fn from_env() -> Result<Self> {
        let config = Self {
            capacity: parse_var(
                "CACHE_CAPACITY",
                env::var("CACHE_CAPACITY").ok(),
                DEFAULT_CAPACITY,
            )?,
            ttl_ms: parse_var("CACHE_TTL_MS", env::var("CACHE_TTL_MS").ok(), DEFAULT_TTL_MS)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations the cache cannot honour.
    pub fn validate(&self) -> Result<()> {
        if self.capacity == 0 {
            return Err(CacheError::ZeroCapacity);
        }
        Ok(())
    }

    /// TTL as a `Duration`.
    pub fn ttl(&self) -> Duration {
        Duration::from_millis(self.ttl_ms)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ttl_ms: DEFAULT_TTL_MS,
        }
    }
}

fn parse_var<T: FromStr>(name: &'static str, raw: Option<String>, default: T) -> Result<T> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| CacheError::InvalidConfig { name, value }),
    }
}
