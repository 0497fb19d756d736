//! Eviction Module
//!
//! Pluggable eviction strategies deciding which key leaves a full cache.
//!
//! # Strategies
//! - `Fifo` - oldest insertion first, reads ignored
//! - `Lifo` - newest insertion first, reads ignored
//! - `Lru` - least recently used first, reads refresh recency
//! - `Custom` - any user `EvictionStrategy`; `NoopEviction` disables eviction

mod fifo;
mod lifo;
mod lru;
mod noop;
mod order;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CacheError;

pub use fifo::Fifo;
pub use lifo::Lifo;
pub use lru::Lru;
pub use noop::NoopEviction;

// == Eviction Strategy ==
/// Ordering structure tracking eviction candidacy for keys in a cache.
///
/// The cache calls these methods while holding its own locks; a strategy
/// needs no synchronization of its own and is not meant to be shared.
pub trait EvictionStrategy: Send {
    /// Short identifier used in logs.
    fn name(&self) -> &str {
        "custom"
    }

    /// Records that `key` was inserted.
    fn add(&mut self, key: &str);

    /// Stops tracking `key`. No-op if absent.
    fn remove(&mut self, key: &str);

    /// Removes and returns the next victim, or `None` if nothing is tracked.
    fn evict(&mut self) -> Option<String>;

    /// Records a read of `key`. Ignored unless the strategy is recency-based.
    fn touch(&mut self, _key: &str) {}

    /// Tracked keys in eviction order, next victim first for FIFO and LRU.
    fn keys(&self) -> Vec<String>;

    fn len(&self) -> usize {
        self.keys().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// == Eviction Policy ==
/// Eviction policy chosen once when a cache is built.
pub enum EvictionPolicy {
    Fifo,
    Lifo,
    Lru,
    /// User-supplied strategy. Use `NoopEviction` to turn eviction off.
    Custom(Box<dyn EvictionStrategy>),
}

impl EvictionPolicy {
    /// Wraps a user strategy.
    pub fn custom<S: EvictionStrategy + 'static>(strategy: S) -> Self {
        Self::Custom(Box::new(strategy))
    }

    pub(crate) fn into_strategy(self) -> Box<dyn EvictionStrategy> {
        match self {
            Self::Fifo => Box::new(Fifo::new()),
            Self::Lifo => Box::new(Lifo::new()),
            Self::Lru => Box::new(Lru::new()),
            Self::Custom(strategy) => strategy,
        }
    }
}

impl fmt::Debug for EvictionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fifo => write!(f, "Fifo"),
            Self::Lifo => write!(f, "Lifo"),
            Self::Lru => write!(f, "Lru"),
            Self::Custom(strategy) => write!(f, "Custom({})", strategy.name()),
        }
    }
}

impl From<PolicyKind> for EvictionPolicy {
    fn from(kind: PolicyKind) -> Self {
        match kind {
            PolicyKind::Fifo => Self::Fifo,
            PolicyKind::Lifo => Self::Lifo,
            PolicyKind::Lru => Self::Lru,
            PolicyKind::Custom => Self::custom(NoopEviction),
        }
    }
}

// == Policy Kind ==
/// Textual policy selector used by configuration.
///
/// `Custom` maps to `NoopEviction`. Unknown names are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PolicyKind {
    Fifo,
    Lifo,
    Lru,
    Custom,
}

impl FromStr for PolicyKind {
    type Err = CacheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(Self::Fifo),
            "lifo" => Ok(Self::Lifo),
            "lru" => Ok(Self::Lru),
            "custom" => Ok(Self::Custom),
            other => Err(CacheError::UnsupportedPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Fifo => "fifo",
            Self::Lifo => "lifo",
            Self::Lru => "lru",
            Self::Custom => "custom",
        };
        f.write_str(name)
    }
}
