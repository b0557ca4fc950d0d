//! Merged per-city record
//!
//! The canonical output of a run. Field names are part of the JSON snapshot
//! format and must not be renamed.

use serde::{Deserialize, Serialize};

/// Headline used when no news could be obtained for a city
pub const NO_NEWS_HEADLINE: &str = "No news available";

/// Maximum number of headlines kept per city
pub const MAX_HEADLINES: usize = 3;

/// Forecast entries per day at 3-hour resolution
pub const FORECAST_SAMPLE_STRIDE: usize = 8;

/// Current conditions for a city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Temperature in Celsius
    pub temperature: f64,
    /// Provider description, e.g. "scattered clouds"
    pub description: String,
}

/// One sampled forecast entry, roughly one per day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Provider timestamp text, e.g. "2024-01-15 12:00:00"
    pub date: String,
    /// Temperature in Celsius
    pub temperature: f64,
    /// Provider description
    pub description: String,
}

/// Weather, forecast and headlines for one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityRecord {
    /// City name as queried
    pub city: String,
    /// Current conditions
    pub current_weather: CurrentConditions,
    /// Sampled forecast in provider order
    pub forecast: Vec<ForecastPoint>,
    /// Up to [`MAX_HEADLINES`] titles, or the single [`NO_NEWS_HEADLINE`]
    pub news_headlines: Vec<String>,
}

impl CityRecord {
    /// Current temperature with unit, e.g. "21.53°C"
    #[must_use]
    pub fn temperature_display(&self) -> String {
        format_celsius(self.current_weather.temperature)
    }
}

impl ForecastPoint {
    /// Temperature with unit, e.g. "18.0°C"
    #[must_use]
    pub fn temperature_display(&self) -> String {
        format_celsius(self.temperature)
    }
}

/// Provider value at full precision; whole numbers keep a trailing ".0"
fn format_celsius(value: f64) -> String {
    let mut text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        text.push_str(".0");
    }
    format!("{text}°C")
}
