//! Application configuration
//!
//! Loaded from an optional `citycast.toml` (or an explicit path) and then
//! overridden by `CITYCAST__SECTION__KEY` environment variables. API keys are
//! never read from the file; see [`Credentials`].

mod credentials;

pub use credentials::Credentials;

use std::path::{Path, PathBuf};

use integration_newsapi::NewsConfig;
use integration_openweather::WeatherConfig;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default config file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "citycast";

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "CITYCAST";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// One or more API keys are missing or blank
    #[error("Missing credentials: set {}", .0.join(", "))]
    MissingCredentials(Vec<&'static str>),

    /// Sources could not be read or deserialized
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value is out of range
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Weather provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherAppConfig {
    /// API base URL
    #[serde(default = "default_weather_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_weather_base_url() -> String {
    WeatherConfig::default().base_url
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_weather_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WeatherAppConfig {
    /// Client configuration carrying the given key
    #[must_use]
    pub fn client_config(&self, api_key: &SecretString) -> WeatherConfig {
        WeatherConfig {
            api_key: api_key.expose_secret().to_string(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
        }
    }
}

/// News provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsAppConfig {
    /// API base URL
    #[serde(default = "default_news_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Article language
    #[serde(default = "default_language")]
    pub language: String,

    /// Result ordering
    #[serde(default = "default_sort_by")]
    pub sort_by: String,

    /// Optional page size (1-100)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

fn default_news_base_url() -> String {
    NewsConfig::default().base_url
}

fn default_language() -> String {
    "en".to_string()
}

fn default_sort_by() -> String {
    "relevancy".to_string()
}

impl Default for NewsAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_news_base_url(),
            timeout_secs: default_timeout_secs(),
            language: default_language(),
            sort_by: default_sort_by(),
            page_size: None,
        }
    }
}

impl NewsAppConfig {
    /// Client configuration carrying the given key
    #[must_use]
    pub fn client_config(&self, api_key: &SecretString) -> NewsConfig {
        NewsConfig {
            api_key: api_key.expose_secret().to_string(),
            base_url: self.base_url.clone(),
            timeout_secs: self.timeout_secs,
            language: self.language.clone(),
            sort_by: self.sort_by.clone(),
            page_size: self.page_size,
        }
    }
}

/// Artifact locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_report_path")]
    pub report_path: PathBuf,

    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: PathBuf,

    #[serde(default = "default_chart_path")]
    pub chart_path: PathBuf,

    /// Write the SVG chart (disable for headless runs that only need data)
    #[serde(default = "default_true")]
    pub render_chart: bool,
}

fn default_report_path() -> PathBuf {
    PathBuf::from("summary_report.txt")
}

fn default_snapshot_path() -> PathBuf {
    PathBuf::from("weather_news_data.json")
}

fn default_chart_path() -> PathBuf {
    PathBuf::from("temperature_chart.svg")
}

const fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            report_path: default_report_path(),
            snapshot_path: default_snapshot_path(),
            chart_path: default_chart_path(),
            render_chart: true,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// One JSON object per event
    Json,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when neither `RUST_LOG` nor `-v` is given
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub weather: WeatherAppConfig,

    #[serde(default)]
    pub news: NewsAppConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from file and environment
    ///
    /// With `path`, that file must exist; otherwise `citycast.toml` is used
    /// when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::with_name(DEFAULT_CONFIG_FILE).required(false),
        };

        let config = config::Config::builder()
            .add_source(file)
            // e.g. CITYCAST__OUTPUT__REPORT_PATH
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?;

        config.validate()?;
        Ok(config)
    }

    /// Check value ranges the deserializer cannot express
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.weather.timeout_secs == 0 || self.news.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        if !["relevancy", "popularity", "publishedAt"].contains(&self.news.sort_by.as_str()) {
            return Err(ConfigError::Invalid(format!(
                "news.sort_by must be relevancy, popularity or publishedAt, got {:?}",
                self.news.sort_by
            )));
        }

        if matches!(self.news.page_size, Some(size) if size == 0 || size > 100) {
            return Err(ConfigError::Invalid(
                "news.page_size must be between 1 and 100".to_string(),
            ));
        }

        let output = &self.output;
        for (name, path) in [
            ("report_path", &output.report_path),
            ("snapshot_path", &output.snapshot_path),
            ("chart_path", &output.chart_path),
        ] {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::Invalid(format!("output.{name} is empty")));
            }
        }

        Ok(())
    }
}
