//! News adapter - Implements NewsPort using integration_newsapi

use application::error::ApplicationError;
use application::ports::{NewsArticle, NewsFeed, NewsPort};
use async_trait::async_trait;
use domain::CityRequest;
use integration_newsapi::{NewsApiClient, NewsClient, NewsConfig, NewsError, NewsResponse};
use tracing::{debug, instrument};

/// Adapter for headline search using NewsAPI
pub struct NewsAdapter {
    client: NewsApiClient,
}

impl std::fmt::Debug for NewsAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsAdapter")
            .field("client", &"NewsApiClient")
            .finish()
    }
}

impl NewsAdapter {
    /// Create with the given client configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// fails to initialize.
    pub fn with_config(config: NewsConfig) -> Result<Self, ApplicationError> {
        let client = NewsApiClient::new(config).map_err(Self::map_error)?;
        Ok(Self { client })
    }

    fn map_error(err: NewsError) -> ApplicationError {
        match err {
            NewsError::ConfigurationError(e) => ApplicationError::Configuration(e),
            other => ApplicationError::ExternalService(other.to_string()),
        }
    }

    fn map_response(response: NewsResponse) -> NewsFeed {
        NewsFeed {
            articles: response
                .articles
                .into_iter()
                .map(|article| NewsArticle {
                    title: article.title_or_default().to_string(),
                    source: article.source_name().map(str::to_string),
                    url: article.url,
                })
                .collect(),
        }
    }
}

#[async_trait]
impl NewsPort for NewsAdapter {
    #[instrument(skip(self), fields(city = %city.name()))]
    async fn search_news(&self, city: &CityRequest) -> Result<NewsFeed, ApplicationError> {
        let response = self
            .client
            .search(city.name())
            .await
            .map_err(Self::map_error)?;

        debug!(
            articles = response.articles.len(),
            total = response.total_results,
            "Retrieved news"
        );
        Ok(Self::map_response(response))
    }
}
