//! JSON snapshot store - Implements SnapshotPort

use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::SnapshotPort;
use async_trait::async_trait;
use domain::CityRecord;
use tracing::{debug, instrument};

use super::PersistenceError;

/// Stores all records of a run as one pretty-printed JSON array
///
/// The file is replaced on every save; record order and field names are kept.
#[derive(Debug, Clone)]
pub struct JsonSnapshotStore {
    path: PathBuf,
}

impl JsonSnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialize `records` with two-space indentation and write them out
    pub async fn write(&self, records: &[CityRecord]) -> Result<(), PersistenceError> {
        let json =
            serde_json::to_string_pretty(records).map_err(|source| PersistenceError::Serialization {
                path: self.path.clone(),
                source,
            })?;

        tokio::fs::write(&self.path, json)
            .await
            .map_err(|source| PersistenceError::Io {
                path: self.path.clone(),
                source,
            })
    }

    /// Read a snapshot back
    pub async fn read(&self) -> Result<Vec<CityRecord>, PersistenceError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|source| PersistenceError::Io {
                path: self.path.clone(),
                source,
            })?;

        serde_json::from_slice(&raw).map_err(|source| PersistenceError::Serialization {
            path: self.path.clone(),
            source,
        })
    }
}

#[async_trait]
impl SnapshotPort for JsonSnapshotStore {
    #[instrument(skip(self, records), fields(path = %self.path.display(), records = records.len()))]
    async fn save(&self, records: &[CityRecord]) -> Result<PathBuf, ApplicationError> {
        self.write(records).await?;
        debug!("Snapshot written");
        Ok(self.path.clone())
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Vec<CityRecord>, ApplicationError> {
        let records = self.read().await?;
        debug!(records = records.len(), "Snapshot loaded");
        Ok(records)
    }
}
