//! LIFO Eviction Module
//!
//! Evicts the most recently inserted key first.

use super::order::KeyOrder;
use super::EvictionStrategy;

// == LIFO ==
/// Last-In, First-Out eviction. Reads never change the order.
#[derive(Debug)]
pub struct Lifo {
    stack: KeyOrder,
}

impl Lifo {
    pub fn new() -> Self {
        Self {
            stack: KeyOrder::new(),
        }
    }
}

impl Default for Lifo {
    fn default() -> Self {
        Self::new()
    }
}

impl EvictionStrategy for Lifo {
    fn name(&self) -> &str {
        "lifo"
    }

    fn add(&mut self, key: &str) {
        self.stack.push_back(key);
    }

    // Searches from the top of the stack.
    fn remove(&mut self, key: &str) {
        self.stack.remove_newest(key);
    }

    fn evict(&mut self) -> Option<String> {
        self.stack.pop_back()
    }

    fn keys(&self) -> Vec<String> {
        self.stack.keys()
    }

    fn len(&self) -> usize {
        self.stack.len()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_evicts_newest() {
        let mut lifo = Lifo::new();
        lifo.add("a");
        lifo.add("b");
        lifo.add("c");

        assert_eq!(lifo.evict(), Some("c".to_string()));
        assert_eq!(lifo.evict(), Some("b".to_string()));
        assert_eq!(lifo.evict(), Some("a".to_string()));
        assert_eq!(lifo.evict(), None);
    }

    #[test]
    fn test_lifo_remove_then_evict() {
        let mut lifo = Lifo::new();
        lifo.add("a");
        lifo.add("b");
        lifo.add("c");

        lifo.remove("c");

        assert_eq!(lifo.evict(), Some("b".to_string()));
        assert_eq!(lifo.len(), 1);
    }

    #[test]
    fn test_lifo_touch_is_ignored() {
        let mut lifo = Lifo::new();
        lifo.add("a");
        lifo.add("b");

        lifo.touch("a");

        assert_eq!(lifo.evict(), Some("b".to_string()));
    }

    #[test]
    fn test_lifo_remove_nonexistent() {
        let mut lifo = Lifo::new();
        lifo.add("a");

        lifo.remove("missing");

        assert_eq!(lifo.keys(), vec!["a"]);
    }
}
