//! No-op Eviction Module

use super::EvictionStrategy;

// == Noop Eviction ==
/// Placeholder strategy for `EvictionPolicy::Custom`.
///
/// Tracks nothing and never yields a victim. A cache built with it does not
/// evict on capacity, so it may grow past its configured maximum size.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopEviction;

impl EvictionStrategy for NoopEviction {
    fn name(&self) -> &str {
        "custom"
    }

    fn add(&mut self, _key: &str) {}

    fn remove(&mut self, _key: &str) {}

    fn evict(&mut self) -> Option<String> {
        None
    }

    fn keys(&self) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_noop_never_evicts() {
        let mut noop = NoopEviction;
        noop.add("a");
        noop.add("b");

        assert_eq!(noop.evict(), None);
        assert!(noop.is_empty());
        assert!(noop.keys().is_empty());
    }
}
