//! Cache Module
//!
//! Provides in-memory caching with lazy TTL expiration and pluggable eviction.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::{CacheStats, StatsRecorder};
pub use store::{Cache, EvictionListener};
