//! Error types for the cache
//!
//! Provides unified error handling using thiserror. A missing key is never an
//! error; these variants cover configuration and persistence failures only.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache crate.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Eviction policy selector is not recognized
    #[error("Unsupported eviction policy: {0}")]
    UnsupportedPolicy(String),

    /// Construction parameters are out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Snapshot file could not be read or written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

// == Result Type Alias ==
/// Convenience Result type for the cache crate.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CacheError::UnsupportedPolicy("mru".to_string());
        assert_eq!(err.to_string(), "Unsupported eviction policy: mru");

        let err = CacheError::InvalidConfig("max_size must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: max_size must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CacheError = io.into();
        assert!(matches!(err, CacheError::Io(_)));
    }
}
