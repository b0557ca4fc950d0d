//! Persistence errors and their mapping to the application layer

use std::path::PathBuf;

use application::error::ApplicationError;
use thiserror::Error;

/// Errors reading or writing a snapshot
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot data in {path}: {source}")]
    Serialization {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<PersistenceError> for ApplicationError {
    fn from(e: PersistenceError) -> Self {
        match e {
            PersistenceError::Io { .. } => Self::Io(e.to_string()),
            PersistenceError::Serialization { .. } => Self::Serialization(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_maps_to_application_io() {
        let err = PersistenceError::Io {
            path: PathBuf::from("weather_news_data.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let app: ApplicationError = err.into();
        assert!(matches!(app, ApplicationError::Io(ref m) if m.contains("weather_news_data.json")));
    }
}
