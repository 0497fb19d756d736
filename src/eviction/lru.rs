//! LRU Eviction Module
//!
//! Implements Least Recently Used tracking for cache eviction.

use super::order::KeyOrder;
use super::EvictionStrategy;

// == LRU ==
/// Tracks access order for LRU eviction.
///
/// Keys are kept in a `KeyOrder` where:
/// - Front = Least recently used
/// - Back = Most recently used
///
/// Each key is tracked at most once. Both `add` and `touch` move an already
/// tracked key to the back, so a cache read counts as a use.
#[derive(Debug)]
pub struct Lru {
    order: KeyOrder,
}

impl Lru {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            order: KeyOrder::new(),
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.order.contains(key)
    }
}

impl Default for Lru {
    fn default() -> Self {
        Self::new()
    }
}

impl EvictionStrategy for Lru {
    fn name(&self) -> &str {
        "lru"
    }

    // == Add ==
    /// Marks a key as most recently used, inserting it if new.
    fn add(&mut self, key: &str) {
        self.order.remove_oldest(key);
        self.order.push_back(key);
    }

    // == Remove ==
    fn remove(&mut self, key: &str) {
        self.order.remove_oldest(key);
    }

    // == Evict ==
    /// Returns and removes the least recently used key.
    fn evict(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Touch ==
    /// Refreshes recency of a tracked key. Untracked keys are left alone.
    fn touch(&mut self, key: &str) {
        if self.order.remove_oldest(key) {
            self.order.push_back(key);
        }
    }

    fn keys(&self) -> Vec<String> {
        self.order.keys()
    }

    fn len(&self) -> usize {
        self.order.len()
    }
}
