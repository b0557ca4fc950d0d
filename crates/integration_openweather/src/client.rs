//! OpenWeatherMap client
//!
//! HTTP client for the OpenWeatherMap current-conditions and forecast endpoints.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    CurrentResponse, CurrentWeather, Forecast, ForecastResponse, ForecastSlot, primary_description,
};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The request did not complete within the configured timeout
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// API key was rejected
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// The provider does not know the city
    #[error("City not found: {0}")]
    CityNotFound(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Failed to parse response from weather service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Client configuration is unusable
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Weather service configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct WeatherConfig {
    /// OpenWeatherMap API key (`appid`)
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// API base URL (default: <https://api.openweathermap.org/data/2.5>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl fmt::Debug for WeatherConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeatherConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Weather client trait for fetching weather data by city name
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Get current conditions for a city
    async fn get_current(&self, city: &str) -> Result<CurrentWeather, WeatherError>;

    /// Get the 5-day/3-hour forecast for a city
    async fn get_forecast(&self, city: &str) -> Result<Forecast, WeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: WeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is blank or the HTTP client cannot be
    /// initialized.
    pub fn new(config: WeatherConfig) -> Result<Self, WeatherError> {
        if config.api_key.trim().is_empty() {
            return Err(WeatherError::ConfigurationError(
                "OpenWeatherMap API key is required".to_string(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// Issue a GET with the standard city query and map transport/status errors
    async fn get(&self, path: &str, city: &str) -> Result<Response, WeatherError> {
        let url = self.endpoint(path);
        debug!(url = %url, city = %city, "Sending OpenWeatherMap request");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("q", city),
                ("appid", self.config.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await
            .map_err(|e| self.map_transport_error(&e))?;

        let status = response.status();
        debug!(status = %status, "Received OpenWeatherMap response");

        match status {
            s if s.is_success() => Ok(response),
            StatusCode::UNAUTHORIZED => Err(WeatherError::Unauthorized(
                "Invalid OpenWeatherMap API key".to_string(),
            )),
            StatusCode::NOT_FOUND => Err(WeatherError::CityNotFound(city.to_string())),
            s if s.is_server_error() => Err(WeatherError::ServiceUnavailable(format!("HTTP {s}"))),
            s => Err(WeatherError::RequestFailed(format!("HTTP {s}"))),
        }
    }

    fn map_transport_error(&self, e: &reqwest::Error) -> WeatherError {
        if e.is_timeout() {
            WeatherError::Timeout {
                timeout_secs: self.config.timeout_secs,
            }
        } else if e.is_connect() {
            WeatherError::ConnectionFailed(e.to_string())
        } else {
            WeatherError::RequestFailed(e.to_string())
        }
    }

    /// Parse current conditions from the wire response
    fn parse_current(data: CurrentResponse) -> Result<CurrentWeather, WeatherError> {
        let description = primary_description(&data.weather)
            .ok_or_else(|| {
                WeatherError::ParseError("No weather condition in response".to_string())
            })?
            .to_string();

        Ok(CurrentWeather {
            temperature: data.main.temp,
            description,
            location_name: data.name,
        })
    }

    /// Parse forecast slots from the wire response, preserving order
    fn parse_forecast(data: ForecastResponse) -> Result<Forecast, WeatherError> {
        let slots = data
            .list
            .into_iter()
            .map(|item| {
                let description = primary_description(&item.weather)
                    .ok_or_else(|| {
                        WeatherError::ParseError(format!(
                            "No weather condition for forecast slot {}",
                            item.dt_txt
                        ))
                    })?
                    .to_string();

                Ok(ForecastSlot {
                    time_text: item.dt_txt,
                    temperature: item.main.temp,
                    description,
                })
            })
            .collect::<Result<Vec<_>, WeatherError>>()?;

        Ok(Forecast {
            location_name: data.city.map(|c| c.name),
            slots,
        })
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn get_current(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let response = self.get("weather", city).await?;

        let data: CurrentResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        Self::parse_current(data)
    }

    #[instrument(skip(self))]
    async fn get_forecast(&self, city: &str) -> Result<Forecast, WeatherError> {
        let response = self.get("forecast", city).await?;

        let data: ForecastResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let forecast = Self::parse_forecast(data)?;
        debug!(slots = forecast.slots.len(), "Parsed forecast");
        Ok(forecast)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> WeatherConfig {
        WeatherConfig {
            api_key: "test-key".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_config_defaults() {
        let config = WeatherConfig::default();
        assert_eq!(config.base_url, "https://api.openweathermap.org/data/2.5");
        assert_eq!(config.timeout_secs, 10);
        assert!(config.api_key.is_empty());
    }

    #[test]
    fn test_client_requires_api_key() {
        let result = OpenWeatherClient::new(WeatherConfig::default());
        assert!(matches!(result, Err(WeatherError::ConfigurationError(_))));
    }

    #[test]
    fn test_client_creation() {
        assert!(OpenWeatherClient::new(test_config()).is_ok());
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = WeatherConfig {
            base_url: "http://localhost:8080/data/2.5/".to_string(),
            ..test_config()
        };
        let client = OpenWeatherClient::new(config).unwrap();
        assert_eq!(
            client.endpoint("forecast"),
            "http://localhost:8080/data/2.5/forecast"
        );
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let debug = format!("{:?}", test_config());
        assert!(!debug.contains("test-key"));
        assert!(debug.contains("REDACTED"));
    }

    #[test]
    fn test_config_serialization_skips_api_key() {
        let json = serde_json::to_string(&test_config()).unwrap();
        assert!(!json.contains("test-key"));

        let parsed: WeatherConfig = serde_json::from_str(&json).unwrap();
        assert!(parsed.api_key.is_empty());
        assert_eq!(parsed.timeout_secs, 10);
    }

    #[test]
    fn test_parse_current_weather() {
        let data: CurrentResponse = serde_json::from_value(serde_json::json!({
            "name": "Tokyo",
            "dt": 1_705_320_000,
            "main": { "temp": 7.3 },
            "weather": [
                { "description": "light rain" },
                { "description": "mist" }
            ]
        }))
        .unwrap();

        let current = OpenWeatherClient::parse_current(data).unwrap();
        assert!((current.temperature - 7.3).abs() < f64::EPSILON);
        assert_eq!(current.description, "light rain");
        assert_eq!(current.location_name.as_deref(), Some("Tokyo"));
    }

    #[test]
    fn test_parse_current_without_condition_fails() {
        let data: CurrentResponse = serde_json::from_value(serde_json::json!({
            "main": { "temp": 7.3 },
            "weather": []
        }))
        .unwrap();

        let result = OpenWeatherClient::parse_current(data);
        assert!(matches!(result, Err(WeatherError::ParseError(_))));
    }

    #[test]
    fn test_parse_forecast_preserves_order() {
        let data: ForecastResponse = serde_json::from_value(serde_json::json!({
            "list": [
                { "dt": 1_705_320_000, "dt_txt": "2024-01-15 12:00:00",
                  "main": { "temp": 5.0 }, "weather": [{ "description": "clear sky" }] },
                { "dt": 1_705_330_800, "dt_txt": "2024-01-15 15:00:00",
                  "main": { "temp": 6.5 }, "weather": [{ "description": "few clouds" }] }
            ],
            "city": { "name": "Tokyo" }
        }))
        .unwrap();

        let forecast = OpenWeatherClient::parse_forecast(data).unwrap();
        assert_eq!(forecast.location_name.as_deref(), Some("Tokyo"));
        assert_eq!(forecast.slots.len(), 2);
        assert_eq!(forecast.slots[0].time_text, "2024-01-15 12:00:00");
        assert_eq!(forecast.slots[1].description, "few clouds");
    }

    #[test]
    fn test_weather_error_display() {
        let err = WeatherError::Timeout { timeout_secs: 10 };
        assert!(err.to_string().contains("10 seconds"));

        let err = WeatherError::CityNotFound("Atlantis".to_string());
        assert!(err.to_string().contains("Atlantis"));
    }
}
