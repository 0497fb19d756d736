//! FIFO Eviction Module
//!
//! Evicts keys in the order they were inserted.

use super::order::KeyOrder;
use super::EvictionStrategy;

// == FIFO ==
/// First-In, First-Out eviction.
///
/// Reads never change the order. Adding a key that is already tracked appends
/// a second occurrence, so callers remove before re-adding.
#[derive(Debug)]
pub struct Fifo {
    queue: KeyOrder,
}

impl Fifo {
    pub fn new() -> Self {
        Self {
            queue: KeyOrder::new(),
        }
    }
}

impl Default for Fifo {
    fn default() -> Self {
        Self::new()
    }
}

impl EvictionStrategy for Fifo {
    fn name(&self) -> &str {
        "fifo"
    }

    fn add(&mut self, key: &str) {
        self.queue.push_back(key);
    }

    fn remove(&mut self, key: &str) {
        self.queue.remove_oldest(key);
    }

    fn evict(&mut self) -> Option<String> {
        self.queue.pop_front()
    }

    fn keys(&self) -> Vec<String> {
        self.queue.keys()
    }

    fn len(&self) -> usize {
        self.queue.len()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fifo_evicts_oldest() {
        let mut fifo = Fifo::new();
        fifo.add("a");
        fifo.add("b");
        fifo.add("c");

        assert_eq!(fifo.evict(), Some("a".to_string()));
        assert_eq!(fifo.evict(), Some("b".to_string()));
        assert_eq!(fifo.evict(), Some("c".to_string()));
        assert_eq!(fifo.evict(), None);
    }

    #[test]
    fn test_fifo_touch_is_ignored() {
        let mut fifo = Fifo::new();
        fifo.add("a");
        fifo.add("b");

        fifo.touch("a");

        assert_eq!(fifo.keys(), vec!["a", "b"]);
        assert_eq!(fifo.evict(), Some("a".to_string()));
    }

    #[test]
    fn test_fifo_remove() {
        let mut fifo = Fifo::new();
        fifo.add("a");
        fifo.add("b");
        fifo.add("c");

        fifo.remove("b");
        fifo.remove("missing");

        assert_eq!(fifo.len(), 2);
        assert_eq!(fifo.keys(), vec!["a", "c"]);
    }

    #[test]
    fn test_fifo_does_not_deduplicate() {
        let mut fifo = Fifo::new();
        fifo.add("a");
        fifo.add("a");

        assert_eq!(fifo.len(), 2);
        assert_eq!(fifo.evict(), Some("a".to_string()));
        assert_eq!(fifo.evict(), Some("a".to_string()));
        assert!(fifo.is_empty());
    }
}
