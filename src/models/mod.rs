//! Models Module
//!
//! Serializable data transfer objects written to and read from disk.

mod snapshot;

pub use snapshot::SnapshotFile;
