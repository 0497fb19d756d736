//! Persistence Module
//!
//! Saves cache contents to a JSON file and restores them later. TTLs restart
//! relative to load time rather than keeping the original expiry.

mod file;

use std::collections::HashMap;

use crate::cache::{Cache, CacheEntry};

pub use file::FilePersistence;

// == Persistable ==
/// A cache that can hand out and take back a full copy of its entries.
pub trait Persistable<V> {
    /// Copy of every stored entry.
    fn items(&self) -> HashMap<String, CacheEntry<V>>;

    /// Loads entries verbatim.
    fn set_items(&self, items: HashMap<String, CacheEntry<V>>);
}

impl<V: Clone> Persistable<V> for Cache<V> {
    fn items(&self) -> HashMap<String, CacheEntry<V>> {
        Cache::items(self)
    }

    fn set_items(&self, items: HashMap<String, CacheEntry<V>>) {
        Cache::set_items(self, items)
    }
}
