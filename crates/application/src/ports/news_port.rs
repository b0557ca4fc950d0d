//! News search port

use async_trait::async_trait;
use domain::CityRequest;
#[cfg(test)]
use mockall::automock;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ApplicationError;

/// A single article reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    /// Headline as provided (may be empty or "[Removed]")
    pub title: String,
    /// Publisher name
    pub source: Option<String>,
    /// Link to the article
    pub url: Option<String>,
}

impl NewsArticle {
    /// Article with only a title
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            source: None,
            url: None,
        }
    }
}

/// Articles for a query, in provider relevance order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsFeed {
    pub articles: Vec<NewsArticle>,
}

/// Port for headline search
#[cfg_attr(test, automock)]
#[async_trait]
pub trait NewsPort: Send + Sync {
    /// Search articles mentioning the city
    async fn search_news(&self, city: &CityRequest) -> Result<NewsFeed, ApplicationError>;

    /// Search, logging and swallowing any failure
    async fn fetch_news(&self, city: &CityRequest) -> Option<NewsFeed> {
        match self.search_news(city).await {
            Ok(feed) => Some(feed),
            Err(e) => {
                warn!(city = %city.name(), error = %e, "Failed to fetch news");
                None
            },
        }
    }
}
