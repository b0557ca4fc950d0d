//! Snapshot persistence port

use std::path::PathBuf;

use async_trait::async_trait;
use domain::CityRecord;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for persisting the merged records of a run
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SnapshotPort: Send + Sync {
    /// Persist all records in order, replacing any previous snapshot
    async fn save(&self, records: &[CityRecord]) -> Result<PathBuf, ApplicationError>;

    /// Read the last snapshot back
    async fn load(&self) -> Result<Vec<CityRecord>, ApplicationError>;
}
