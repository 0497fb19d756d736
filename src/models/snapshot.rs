//! Snapshot DTO
//!
//! On-disk layout of a persisted cache.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cache::CacheEntry;

/// File body written by `FilePersistence::save`.
///
/// ```json
/// { "saved_at": "2024-01-01T00:00:00Z",
///   "entries": { "key1": { "value": "v", "expires_at": 1704067500000,
///                          "ttl": { "secs": 300, "nanos": 0 } } } }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotFile<V> {
    /// When the snapshot was taken
    pub saved_at: DateTime<Utc>,
    /// Entries keyed by cache key
    pub entries: HashMap<String, CacheEntry<V>>,
}

impl<V> SnapshotFile<V> {
    /// Creates a snapshot stamped with the current time.
    pub fn now(entries: HashMap<String, CacheEntry<V>>) -> Self {
        Self {
            saved_at: Utc::now(),
            entries,
        }
    }
}
