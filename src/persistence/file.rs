//! File Persistence
//!
//! JSON snapshot file backed by tokio's async filesystem API.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::info;

use crate::cache::{current_timestamp_ms, CacheEntry};
use crate::error::Result;
use crate::models::SnapshotFile;
use crate::persistence::Persistable;

// == File Persistence ==
/// Reads and writes cache snapshots at a fixed path.
///
/// Concurrent saves and loads through the same instance are serialized.
#[derive(Debug)]
pub struct FilePersistence {
    path: PathBuf,
    io_lock: Mutex<()>,
}

impl FilePersistence {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            io_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // == Save ==
    /// Writes `items` to the file, replacing previous contents.
    ///
    /// Returns the number of entries written.
    pub async fn save<V: Serialize>(&self, items: HashMap<String, CacheEntry<V>>) -> Result<usize> {
        let _guard = self.io_lock.lock().await;

        let count = items.len();
        let snapshot = SnapshotFile::now(items);
        let json = serde_json::to_vec(&snapshot)?;
        tokio::fs::write(&self.path, json).await?;

        info!(path = %self.path.display(), entries = count, "saved cache snapshot");
        Ok(count)
    }

    // == Load ==
    /// Reads the file and restarts every entry's TTL from now.
    pub async fn load<V: DeserializeOwned>(&self) -> Result<HashMap<String, CacheEntry<V>>> {
        let _guard = self.io_lock.lock().await;

        let bytes = tokio::fs::read(&self.path).await?;
        let snapshot: SnapshotFile<V> = serde_json::from_slice(&bytes)?;

        let now = current_timestamp_ms();
        let mut entries = snapshot.entries;
        for entry in entries.values_mut() {
            entry.restart_at(now);
        }

        info!(
            path = %self.path.display(),
            entries = entries.len(),
            saved_at = %snapshot.saved_at.to_rfc3339(),
            "loaded cache snapshot"
        );
        Ok(entries)
    }

    // == Save Cache ==
    /// Snapshots `cache` to the file.
    pub async fn save_cache<V, C>(&self, cache: &C) -> Result<usize>
    where
        V: Serialize,
        C: Persistable<V>,
    {
        self.save(cache.items()).await
    }

    // == Restore Into ==
    /// Loads the file into `cache`. Returns the number of entries loaded.
    pub async fn restore_into<V, C>(&self, cache: &C) -> Result<usize>
    where
        V: DeserializeOwned,
        C: Persistable<V>,
    {
        let entries = self.load().await?;
        let count = entries.len();
        cache.set_items(entries);
        Ok(count)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::cache::Cache;
    use crate::error::CacheError;
    use crate::eviction::EvictionPolicy;

    fn cache() -> Cache<String> {
        Cache::new(Duration::from_secs(300), 100, EvictionPolicy::Lru).unwrap()
    }

    #[tokio::test]
    async fn test_save_and_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = FilePersistence::new(dir.path().join("cache.json"));

        let source = cache();
        source.set("key1", "value1".to_string(), None);
        source.set("key2", "value2".to_string(), Some(Duration::from_secs(60)));

        let written = persistence.save_cache(&source).await.unwrap();
        assert_eq!(written, 2);

        let loaded: HashMap<String, CacheEntry<String>> = persistence.load().await.unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded["key1"].value, "value1");
        assert_eq!(loaded["key2"].ttl, Duration::from_secs(60));
    }

    #[tokio::test]
    async fn test_load_restarts_ttl() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = FilePersistence::new(dir.path().join("cache.json"));

        // Already expired when saved
        let mut items = HashMap::new();
        items.insert(
            "old".to_string(),
            CacheEntry::starting_at(1u32, Duration::from_secs(30), 0),
        );
        persistence.save(items).await.unwrap();

        let before = current_timestamp_ms();
        let loaded: HashMap<String, CacheEntry<u32>> = persistence.load().await.unwrap();
        let entry = &loaded["old"];

        assert!(entry.expires_at >= before + 30_000);
        assert!(!entry.is_expired_at(current_timestamp_ms()));
    }

    #[tokio::test]
    async fn test_restore_into_cache() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = FilePersistence::new(dir.path().join("cache.json"));

        let source = cache();
        source.set("key1", "value1".to_string(), None);
        persistence.save_cache(&source).await.unwrap();

        let target = cache();
        let restored = persistence.restore_into(&target).await.unwrap();

        assert_eq!(restored, 1);
        assert_eq!(target.get("key1"), Some("value1".to_string()));
        assert_eq!(target.tracked_keys(), vec!["key1"]);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = FilePersistence::new(dir.path().join("absent.json"));

        let result = persistence.load::<String>().await;
        assert!(matches!(result, Err(CacheError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("corrupt.json");
        tokio::fs::write(&path, b"{not json").await.unwrap();
        let persistence = FilePersistence::new(&path);

        let result = persistence.load::<String>().await;
        assert!(matches!(result, Err(CacheError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_save_overwrites_previous_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let persistence = FilePersistence::new(dir.path().join("cache.json"));

        let source = cache();
        source.set("a", "1".to_string(), None);
        persistence.save_cache(&source).await.unwrap();

        source.delete("a");
        source.set("b", "2".to_string(), None);
        persistence.save_cache(&source).await.unwrap();

        let loaded: HashMap<String, CacheEntry<String>> = persistence.load().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert!(loaded.contains_key("b"));
    }
}
