//! Weather adapter - Implements WeatherPort using integration_openweather

use application::error::ApplicationError;
use application::ports::{ForecastEntry, ForecastSeries, WeatherPort};
use async_trait::async_trait;
use domain::{CityRequest, CurrentConditions};
use integration_openweather::{
    CurrentWeather, Forecast, OpenWeatherClient, WeatherClient, WeatherConfig, WeatherError,
};
use tracing::{debug, instrument};

/// Adapter for weather data using the OpenWeatherMap API
pub struct WeatherAdapter {
    client: OpenWeatherClient,
}

impl std::fmt::Debug for WeatherAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeatherAdapter")
            .field("client", &"OpenWeatherClient")
            .finish()
    }
}

impl WeatherAdapter {
    /// Create with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the key is blank or the HTTP client fails to
    /// initialize.
    pub fn with_config(config: WeatherConfig) -> Result<Self, ApplicationError> {
        let client = OpenWeatherClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    /// Map integration weather error to application error
    fn map_error(err: WeatherError) -> ApplicationError {
        match err {
            WeatherError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }

    fn map_current(current: CurrentWeather) -> CurrentConditions {
        CurrentConditions {
            temperature: current.temperature,
            description: current.description,
        }
    }

    fn map_forecast(forecast: Forecast) -> ForecastSeries {
        ForecastSeries::new(
            forecast
                .slots
                .into_iter()
                .map(|slot| ForecastEntry {
                    timestamp: slot.time_text,
                    temperature: slot.temperature,
                    description: slot.description,
                })
                .collect(),
        )
    }
}

#[async_trait]
impl WeatherPort for WeatherAdapter {
    #[instrument(skip(self), fields(city = %city.name()))]
    async fn get_current(
        &self,
        city: &CityRequest,
    ) -> Result<CurrentConditions, ApplicationError> {
        let result = self
            .client
            .get_current(city.name())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(current) => {
                debug!(
                    resolved = current.location_name.as_deref().unwrap_or("unknown"),
                    temperature = current.temperature,
                    description = %current.description,
                    "Retrieved current weather"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get current weather");
            },
        }

        result.map(Self::map_current)
    }

    #[instrument(skip(self), fields(city = %city.name()))]
    async fn get_forecast(&self, city: &CityRequest) -> Result<ForecastSeries, ApplicationError> {
        let result = self
            .client
            .get_forecast(city.name())
            .await
            .map_err(Self::map_error);

        match &result {
            Ok(forecast) => {
                debug!(
                    resolved = forecast.location_name.as_deref().unwrap_or("unknown"),
                    slots = forecast.slots.len(),
                    "Retrieved weather forecast"
                );
            },
            Err(e) => {
                debug!(error = %e, "Failed to get weather forecast");
            },
        }

        result.map(Self::map_forecast)
    }
}
