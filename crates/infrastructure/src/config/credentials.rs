//! API credentials
//!
//! Resolved once at startup from the process environment (after `.env` has
//! been loaded) and validated before any network activity.

use std::env;
use std::fmt;

use secrecy::SecretString;

use super::ConfigError;

/// Both provider API keys
#[derive(Clone)]
pub struct Credentials {
    pub openweather_api_key: SecretString,
    pub news_api_key: SecretString,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("openweather_api_key", &"[REDACTED]")
            .field("news_api_key", &"[REDACTED]")
            .finish()
    }
}

impl Credentials {
    pub const OPENWEATHER_ENV: &'static str = "OPENWEATHER_API_KEY";
    pub const NEWS_ENV: &'static str = "NEWS_API_KEY";

    /// Read both keys from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Resolve both keys through `lookup`; blank values count as missing
    ///
    /// Every missing variable is reported, not just the first.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        match (fetch(Self::OPENWEATHER_ENV), fetch(Self::NEWS_ENV)) {
            (Some(weather), Some(news)) => Ok(Self {
                openweather_api_key: SecretString::from(weather),
                news_api_key: SecretString::from(news),
            }),
            (weather, news) => {
                let mut missing = Vec::new();
                if weather.is_none() {
                    missing.push(Self::OPENWEATHER_ENV);
                }
                if news.is_none() {
                    missing.push(Self::NEWS_ENV);
                }
                Err(ConfigError::MissingCredentials(missing))
            },
        }
    }
}
