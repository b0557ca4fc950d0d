//! Application-level errors

use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// External service error
    #[error("External service error: {0}")]
    ExternalService(String),

    /// Reading or writing an artifact failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Serializing or deserializing data failed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Chart or report rendering failed
    #[error("Rendering error: {0}")]
    Rendering(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<std::io::Error> for ApplicationError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
