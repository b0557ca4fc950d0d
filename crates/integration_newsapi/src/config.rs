//! NewsAPI configuration

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::NewsError;

/// Configuration for the NewsAPI client
#[derive(Clone, Serialize, Deserialize)]
pub struct NewsConfig {
    /// NewsAPI key, sent as the `apiKey` query parameter
    #[serde(default, skip_serializing)]
    pub api_key: String,

    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Article language (ISO 639-1)
    #[serde(default = "default_language")]
    pub language: String,

    /// Sort order: "relevancy", "popularity" or "publishedAt"
    #[serde(default = "default_sort_by")]
    pub sort_by: String,

    /// Optional `pageSize`; the provider default applies when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

fn default_base_url() -> String {
    "https://newsapi.org/v2".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

fn default_language() -> String {
    "en".to_string()
}

fn default_sort_by() -> String {
    "relevancy".to_string()
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            language: default_language(),
            sort_by: default_sort_by(),
            page_size: None,
        }
    }
}

impl fmt::Debug for NewsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewsConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .field("language", &self.language)
            .field("sort_by", &self.sort_by)
            .field("page_size", &self.page_size)
            .finish()
    }
}

impl NewsConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is blank, the sort order is unknown or
    /// the page size is outside 1..=100.
    pub fn validate(&self) -> Result<(), NewsError> {
        if self.api_key.trim().is_empty() {
            return Err(NewsError::ConfigurationError(
                "NewsAPI key is required".to_string(),
            ));
        }

        if !["relevancy", "popularity", "publishedAt"].contains(&self.sort_by.as_str()) {
            return Err(NewsError::ConfigurationError(format!(
                "Unsupported sort order: {}",
                self.sort_by
            )));
        }

        if let Some(size) = self.page_size {
            if size == 0 || size > 100 {
                return Err(NewsError::ConfigurationError(format!(
                    "page_size must be between 1 and 100, got {size}"
                )));
            }
        }

        Ok(())
    }
}
