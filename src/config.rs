//! Configuration Module
//!
//! Handles loading cache configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{CacheError, Result};
use crate::eviction::PolicyKind;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheConfig {
    /// Maximum number of entries the cache can hold
    pub max_size: usize,
    /// TTL for entries set without an explicit one
    pub default_ttl: Duration,
    /// Eviction policy selector
    pub policy: PolicyKind,
    /// File used by snapshot persistence
    pub snapshot_path: PathBuf,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_MAX_SIZE` - Maximum cache entries (default: 1000)
    /// - `CACHE_DEFAULT_TTL` - Default TTL in seconds (default: 300)
    /// - `CACHE_EVICTION_POLICY` - fifo, lifo, lru or custom (default: lru)
    /// - `CACHE_SNAPSHOT_PATH` - Snapshot file (default: cache_data.json)
    ///
    /// Unparseable numbers fall back to their defaults. An unknown policy or a
    /// zero size is an error.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let max_size = env::var("CACHE_MAX_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_size);
        if max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "CACHE_MAX_SIZE must be greater than zero".to_string(),
            ));
        }

        let default_ttl = env::var("CACHE_DEFAULT_TTL")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(defaults.default_ttl);

        let policy = match env::var("CACHE_EVICTION_POLICY") {
            Ok(value) => value.parse()?,
            Err(_) => defaults.policy,
        };

        let snapshot_path = env::var("CACHE_SNAPSHOT_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.snapshot_path);

        Ok(Self {
            max_size,
            default_ttl,
            policy,
            snapshot_path,
        })
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_size: 1000,
            default_ttl: Duration::from_secs(300),
            policy: PolicyKind::Lru,
            snapshot_path: PathBuf::from("cache_data.json"),
        }
    }
}
