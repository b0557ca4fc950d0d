//! Persistence layer
//!
//! The run's merged records are kept as a single pretty-printed JSON array.

mod error;
mod json_snapshot_store;

pub use error::PersistenceError;
pub use json_snapshot_store::JsonSnapshotStore;
