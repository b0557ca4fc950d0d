//! City request value object

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// A city to collect weather and news for
///
/// The country code is carried with every request but no provider query
/// uses it; lookups are made by city name alone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityRequest {
    name: String,
    country_code: String,
}

impl CityRequest {
    /// Create a new city request with validation
    ///
    /// The name is trimmed; the country code is lowercased.
    ///
    /// # Errors
    ///
    /// Returns `InvalidCityName` if the name is blank and
    /// `InvalidCountryCode` unless the code is exactly two ASCII letters.
    pub fn new(
        name: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidCityName(name));
        }

        let country_code = country_code.into();
        if country_code.len() != 2 || !country_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidCountryCode(country_code));
        }

        Ok(Self {
            name: trimmed.to_string(),
            country_code: country_code.to_ascii_lowercase(),
        })
    }

    /// Create a request from the compiled-in table without validation
    pub(crate) fn new_unchecked(name: &str, country_code: &str) -> Self {
        Self {
            name: name.to_string(),
            country_code: country_code.to_string(),
        }
    }

    /// Get the city name used in provider queries
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the ISO 3166-1 alpha-2 country code (lowercase)
    pub fn country_code(&self) -> &str {
        &self.country_code
    }
}

impl fmt::Display for CityRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.country_code)
    }
}
