//! Weather data models
//!
//! Wire schemas for the OpenWeatherMap responses and the normalized types
//! handed to callers.

use serde::{Deserialize, Serialize};

/// Current conditions for a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Temperature in Celsius (metric units are always requested)
    pub temperature: f64,
    /// Description of the primary condition, e.g. "light rain"
    pub description: String,
    /// Location name as resolved by the provider
    pub location_name: Option<String>,
}

/// One 3-hour forecast slot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastSlot {
    /// Provider timestamp text, e.g. "2024-01-15 12:00:00"
    pub time_text: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Description of the primary condition
    pub description: String,
}

/// 5-day forecast at 3-hour resolution, in provider order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Forecast {
    /// Location name as resolved by the provider
    pub location_name: Option<String>,
    /// Forecast slots
    pub slots: Vec<ForecastSlot>,
}

// ============================================================================
// Wire schemas
// ============================================================================

/// `GET /weather` response
#[derive(Debug, Deserialize)]
pub(crate) struct CurrentResponse {
    #[serde(default)]
    pub name: Option<String>,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
}

/// `GET /forecast` response
#[derive(Debug, Deserialize)]
pub(crate) struct ForecastResponse {
    pub list: Vec<ForecastItem>,
    #[serde(default)]
    pub city: Option<ForecastCity>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastItem {
    pub dt_txt: String,
    pub main: MainReadings,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ForecastCity {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct MainReadings {
    pub temp: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ConditionEntry {
    pub description: String,
}

/// First condition entry's description; the provider lists the primary one first
pub(crate) fn primary_description(entries: &[ConditionEntry]) -> Option<&str> {
    entries.first().map(|e| e.description.as_str())
}
