//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// City name is empty or whitespace only
    #[error("Invalid city name: {0:?}")]
    InvalidCityName(String),

    /// Country code is not a two-letter ISO 3166-1 alpha-2 code
    #[error("Invalid country code: {0:?}")]
    InvalidCountryCode(String),
}
