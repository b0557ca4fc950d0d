//! Weather service port
//!
//! Current conditions plus the 3-hour forecast series for a city.

use async_trait::async_trait;
use domain::{CityRequest, CurrentConditions};
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ApplicationError;

/// One forecast slot as reported by the provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    /// Provider timestamp text, e.g. "2024-01-15 12:00:00"
    pub timestamp: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Condition description
    pub description: String,
}

/// Forecast slots at 3-hour resolution, in provider order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastSeries {
    pub entries: Vec<ForecastEntry>,
}

impl ForecastSeries {
    #[must_use]
    pub fn new(entries: Vec<ForecastEntry>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Port for weather data retrieval
#[allow(clippy::struct_field_names)] // automock generates struct with `get_*` prefixes
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Get current conditions for a city
    async fn get_current(&self, city: &CityRequest)
    -> Result<CurrentConditions, ApplicationError>;

    /// Get the 5-day/3-hour forecast for a city
    async fn get_forecast(&self, city: &CityRequest) -> Result<ForecastSeries, ApplicationError>;

    /// Fetch both halves independently
    ///
    /// A failure of either call yields `None` for that half only and is
    /// logged; the forecast is requested even when current conditions failed.
    async fn fetch_weather(
        &self,
        city: &CityRequest,
    ) -> (Option<CurrentConditions>, Option<ForecastSeries>) {
        let current = match self.get_current(city).await {
            Ok(current) => Some(current),
            Err(e) => {
                warn!(city = %city.name(), error = %e, "Failed to fetch current weather");
                None
            },
        };

        let forecast = match self.get_forecast(city).await {
            Ok(forecast) => Some(forecast),
            Err(e) => {
                warn!(city = %city.name(), error = %e, "Failed to fetch forecast");
                None
            },
        };

        (current, forecast)
    }
}
