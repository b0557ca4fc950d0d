//! NewsAPI response models

use serde::{Deserialize, Serialize};

/// Body of `GET /everything`
///
/// On failure the provider still answers with this envelope, setting
/// `status` to `"error"` and filling `code`/`message` instead of `articles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    /// "ok" or "error"
    pub status: String,
    /// Total number of matches across all pages
    #[serde(default)]
    pub total_results: u64,
    /// Articles on this page, in provider order
    #[serde(default)]
    pub articles: Vec<Article>,
    /// Error code, present when `status` is "error"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Error message, present when `status` is "error"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl NewsResponse {
    /// Whether the provider reported success
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

/// Publisher reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSource {
    pub id: Option<String>,
    pub name: Option<String>,
}

/// A single article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub source: Option<ArticleSource>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

impl Article {
    /// Title as provided, or an empty string when the provider sent none
    #[must_use]
    pub fn title_or_default(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    /// Publisher name, if any
    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        self.source.as_ref().and_then(|s| s.name.as_deref())
    }
}
