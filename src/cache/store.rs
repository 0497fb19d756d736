//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with a pluggable eviction
//! policy and lazy TTL expiration.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, warn};

use crate::cache::entry::current_timestamp_ms;
use crate::cache::{CacheEntry, CacheStats, StatsRecorder};
use crate::config::CacheConfig;
use crate::error::{CacheError, Result};
use crate::eviction::{EvictionPolicy, EvictionStrategy};

/// Callback invoked with the key and value of every removed entry.
pub type EvictionListener<V> = Box<dyn Fn(&str, &V) + Send + Sync>;

type Store<V> = HashMap<String, CacheEntry<V>>;

// == Cache ==
/// Thread-safe key-value cache with TTL expiration and bounded size.
///
/// # Locking
/// The store sits behind a `RwLock` and the eviction strategy behind a
/// `Mutex`. The strategy lock is only taken while the store lock is held,
/// store first. Writers hold the store write lock for the whole operation.
///
/// `get` reads optimistically under the shared lock. When it finds an
/// expired entry it releases the shared lock, takes the write lock and
/// checks again before removing, since another caller may have removed or
/// refreshed the entry in between.
///
/// Expired entries are only removed when `get` reaches them or when capacity
/// eviction picks them; there is no background sweep.
pub struct Cache<V> {
    /// Key-value storage
    store: RwLock<Store<V>>,
    /// Eviction candidacy tracker
    policy: Mutex<Box<dyn EvictionStrategy>>,
    /// Hit/miss/expiration counters
    stats: StatsRecorder,
    /// Maximum number of entries allowed
    max_size: usize,
    /// TTL applied when a caller does not pass one
    default_ttl: Duration,
    /// Removal notification
    on_evicted: Option<EvictionListener<V>>,
}

impl<V> Cache<V> {
    // == Constructor ==
    /// Creates a new cache.
    ///
    /// # Arguments
    /// * `default_ttl` - TTL for entries set without an explicit one
    /// * `max_size` - Maximum number of entries, must be positive
    /// * `policy` - Eviction policy, fixed for the life of the cache
    pub fn new(default_ttl: Duration, max_size: usize, policy: EvictionPolicy) -> Result<Self> {
        if max_size == 0 {
            return Err(CacheError::InvalidConfig(
                "max_size must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            store: RwLock::new(HashMap::new()),
            policy: Mutex::new(policy.into_strategy()),
            stats: StatsRecorder::new(),
            max_size,
            default_ttl,
            on_evicted: None,
        })
    }

    /// Creates a cache from configuration.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(config.default_ttl, config.max_size, config.policy.into())
    }

    /// Registers a callback fired on capacity eviction, expiry and delete.
    ///
    /// It runs while the cache's write lock is held and must not call back
    /// into the same cache.
    pub fn with_eviction_listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(&str, &V) + Send + Sync + 'static,
    {
        self.on_evicted = Some(Box::new(listener));
        self
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// Returns `true` if an entry was removed. Deleting a missing key is a
    /// no-op and does not fire the listener.
    pub fn delete(&self, key: &str) -> bool {
        let mut store = self.store.write();
        let Some(entry) = store.remove(key) else {
            return false;
        };
        self.policy.lock().remove(key);
        self.notify(key, &entry.value);
        true
    }

    // == Length ==
    /// Returns the number of stored entries, expired ones included.
    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    /// Returns true if `key` is stored and not expired. Never removes anything.
    pub fn contains_key(&self, key: &str) -> bool {
        let now = current_timestamp_ms();
        self.store
            .read()
            .get(key)
            .is_some_and(|entry| !entry.is_expired_at(now))
    }

    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Name of the eviction strategy in use.
    pub fn policy_name(&self) -> String {
        let store = self.store.read();
        let name = self.policy.lock().name().to_string();
        drop(store);
        name
    }

    /// Keys tracked by the eviction strategy, in its eviction order.
    pub fn tracked_keys(&self) -> Vec<String> {
        let store = self.store.read();
        let keys = self.policy.lock().keys();
        drop(store);
        keys
    }

    // == Stats ==
    pub fn hits(&self) -> u64 {
        self.stats.hits()
    }

    pub fn misses(&self) -> u64 {
        self.stats.misses()
    }

    /// Entries removed by TTL expiry or capacity eviction.
    pub fn expired(&self) -> u64 {
        self.stats.expired()
    }

    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    // == Insert (locked) ==
    /// Shared insertion path for `set`, `batch_set` and `set_items`.
    ///
    /// A new key arriving at a full cache triggers one eviction. Overwriting
    /// an existing key skips the capacity check and re-queues the key.
    fn insert_locked(
        &self,
        store: &mut Store<V>,
        policy: &mut dyn EvictionStrategy,
        key: String,
        entry: CacheEntry<V>,
    ) {
        if store.contains_key(&key) {
            policy.remove(&key);
        } else if store.len() >= self.max_size {
            self.evict_one(store, policy);
        }

        policy.add(&key);
        store.insert(key, entry);
    }

    fn evict_one(&self, store: &mut Store<V>, policy: &mut dyn EvictionStrategy) {
        let Some(victim) = policy.evict() else {
            debug!(policy = policy.name(), "no eviction candidate, cache grows past max size");
            return;
        };

        match store.remove(&victim) {
            Some(entry) => {
                self.stats.record_eviction();
                debug!(key = %victim, policy = policy.name(), "evicted entry");
                self.notify(&victim, &entry.value);
            }
            None => {
                warn!(key = %victim, policy = policy.name(), "eviction victim not present in cache");
            }
        }
    }

    fn notify(&self, key: &str, value: &V) {
        if let Some(listener) = &self.on_evicted {
            listener(key, value);
        }
    }

    // == Remove If Expired ==
    /// Exclusive half of the lazy expiry path. Re-checks before removing.
    fn remove_if_expired(&self, key: &str) {
        let mut store = self.store.write();
        let now = current_timestamp_ms();

        let still_expired = store
            .get(key)
            .is_some_and(|entry| entry.is_expired_at(now));
        if !still_expired {
            return;
        }

        if let Some(entry) = store.remove(key) {
            self.policy.lock().remove(key);
            self.stats.record_expiration();
            debug!(key, "removed expired entry");
            self.notify(key, &entry.value);
        }
    }
}

impl<V: Clone> Cache<V> {
    // == Set ==
    /// Stores a key-value pair.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL (uses the default TTL if None)
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let entry = CacheEntry::new(value, ttl.unwrap_or(self.default_ttl));

        let mut store = self.store.write();
        let mut policy = self.policy.lock();
        self.insert_locked(&mut store, &mut **policy, key.into(), entry);
    }

    // == Get ==
    /// Retrieves a clone of the value stored under `key`.
    ///
    /// Missing and expired keys return `None` and count as misses. An expired
    /// entry is removed and reported to the listener.
    pub fn get(&self, key: &str) -> Option<V> {
        let now = current_timestamp_ms();
        {
            let store = self.store.read();
            match store.get(key) {
                None => {
                    self.stats.record_miss();
                    return None;
                }
                Some(entry) if !entry.is_expired_at(now) => {
                    let value = entry.value.clone();
                    self.policy.lock().touch(key);
                    self.stats.record_hit();
                    return Some(value);
                }
                Some(_) => {}
            }
        }

        self.stats.record_miss();
        self.remove_if_expired(key);
        None
    }

    // == Batch Set ==
    /// Stores every pair with one TTL, under a single write lock.
    pub fn batch_set<K, I>(&self, items: I, ttl: Option<Duration>)
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let ttl = ttl.unwrap_or(self.default_ttl);
        let now = current_timestamp_ms();

        let mut store = self.store.write();
        let mut policy = self.policy.lock();
        for (key, value) in items {
            let entry = CacheEntry::starting_at(value, ttl, now);
            self.insert_locked(&mut store, &mut **policy, key.into(), entry);
        }
    }

    // == Batch Get ==
    /// Returns the live values among `keys`.
    ///
    /// Unlike `get`, expired entries are skipped but left in place, and
    /// reads do not refresh recency. Only the counters change.
    pub fn batch_get<I>(&self, keys: I) -> HashMap<String, V>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let now = current_timestamp_ms();
        let store = self.store.read();

        let mut results = HashMap::new();
        for key in keys {
            let key = key.as_ref();
            match store.get(key) {
                Some(entry) if !entry.is_expired_at(now) => {
                    results.insert(key.to_string(), entry.value.clone());
                    self.stats.record_hit();
                }
                _ => self.stats.record_miss(),
            }
        }
        results
    }

    // == Items ==
    /// Returns a copy of every stored entry, expired ones included.
    pub fn items(&self) -> HashMap<String, CacheEntry<V>> {
        self.store.read().clone()
    }

    // == Set Items ==
    /// Loads entries verbatim, keeping their `expires_at`.
    ///
    /// Used to restore a snapshot. Capacity is enforced as in `set`.
    pub fn set_items<I>(&self, items: I)
    where
        I: IntoIterator<Item = (String, CacheEntry<V>)>,
    {
        let mut store = self.store.write();
        let mut policy = self.policy.lock();
        for (key, entry) in items {
            self.insert_locked(&mut store, &mut **policy, key, entry);
        }
    }
}

impl<V> fmt::Debug for Cache<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cache")
            .field("len", &self.len())
            .field("max_size", &self.max_size)
            .field("default_ttl", &self.default_ttl)
            .field("policy", &self.policy_name())
            .field("has_listener", &self.on_evicted.is_some())
            .finish()
    }
}
