//! TTL Slot Cache demo driver
//!
//! Exercises the cache the way an application would: read first, fall back to
//! a slow source on a miss, then populate the cache. Each outcome is printed
//! as JSON.

use std::thread::sleep;
use std::time::Duration;

use anyhow::Result;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ttl_slot_cache::{CacheConfig, Lookup, TtlCache};

const HOUR: Duration = Duration::from_secs(60 * 60);

#[derive(Debug, Clone, Serialize)]
struct UserInfo {
    age: u32,
    address: String,
}

impl UserInfo {
    fn new(age: u32, address: &str) -> Self {
        Self {
            age,
            address: address.to_string(),
        }
    }
}

fn main() -> Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ttl_slot_cache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = CacheConfig::from_env()?;
    info!(
        "Configuration loaded: capacity={}, ttl={}ms",
        config.capacity, config.ttl_ms
    );

    read_through(&config)?;
    plain_set()?;
    reuse_stale_slot()?;
    evict_at_capacity()?;

    Ok(())
}

/// Stand-in for a database read.
fn load_user(name: &str) -> UserInfo {
    info!(name, "loading user from backing store");
    UserInfo::new(28, "there")
}

fn print<T: Serialize>(label: &str, outcome: &T) -> Result<()> {
    println!("{label}: {}", serde_json::to_string(outcome)?);
    Ok(())
}

fn read_through(config: &CacheConfig) -> Result<()> {
    let mut users = TtlCache::from_config(config)?;

    for name in ["Brandon", "Brandon", "Alice", "Brandon"] {
        let user = match users.get(name) {
            Lookup::Hit(user) => user,
            Lookup::Miss => {
                let user = load_user(name);
                users.set(name, user.clone());
                user
            }
        };
        print(&format!("read-through {name}"), &user)?;
    }

    let stats = users.stats();
    info!("read-through hit rate: {:.2}", stats.hit_rate());
    print("read-through stats", &stats)
}

fn plain_set() -> Result<()> {
    let mut users = TtlCache::new(1, HOUR)?;

    print("set John", &users.set("John", UserInfo::new(20, "here")))?;
    print("get John", &users.get("John"))?;
    print("get Brandon", &users.get("Brandon"))
}

fn reuse_stale_slot() -> Result<()> {
    let mut users = TtlCache::new(1, Duration::from_secs(1))?;
    users.set("John", UserInfo::new(20, "here"));

    sleep(Duration::from_secs(2));

    // John is stale, so David takes over his slot as a new key
    print("set David over stale John", &users.set("David", UserInfo::new(18, "here")))
}

fn evict_at_capacity() -> Result<()> {
    let mut users = TtlCache::new(1, HOUR)?;
    users.set("John", UserInfo::new(20, "here"));

    print("set David at capacity", &users.set("David", UserInfo::new(18, "here")))?;
    print("get John after eviction", &users.get("John"))
}
