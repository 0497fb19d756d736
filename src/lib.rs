//! kuki_cache - An embeddable in-memory cache
//!
//! Thread-safe key-value storage with lazy TTL expiration and a pluggable
//! eviction policy (FIFO, LIFO, LRU or custom), plus JSON snapshot
//! persistence.
//!
//! ```
//! use std::time::Duration;
//! use kuki_cache::{Cache, EvictionPolicy};
//!
//! let cache = Cache::new(Duration::from_secs(60), 2, EvictionPolicy::Lru).unwrap();
//! cache.set("a", 1, None);
//! cache.set("b", 2, None);
//! cache.get("a");
//! cache.set("c", 3, None);
//!
//! assert_eq!(cache.get("b"), None);
//! assert_eq!(cache.get("a"), Some(1));
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod eviction;
pub mod models;
pub mod persistence;

pub use cache::{Cache, CacheEntry, CacheStats};
pub use config::CacheConfig;
pub use error::{CacheError, Result};
pub use eviction::{EvictionPolicy, EvictionStrategy, PolicyKind};
pub use persistence::{FilePersistence, Persistable};
