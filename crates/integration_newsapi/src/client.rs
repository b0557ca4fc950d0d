//! NewsAPI HTTP client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::{debug, instrument};

use crate::{NewsConfig, NewsError, NewsResponse};

/// Headline search by free-text query
#[async_trait]
pub trait NewsClient: Send + Sync {
    /// Search articles mentioning `query`
    async fn search(&self, query: &str) -> Result<NewsResponse, NewsError>;
}

/// NewsAPI `everything` endpoint client
#[derive(Debug)]
pub struct NewsApiClient {
    client: Client,
    config: NewsConfig,
}

impl NewsApiClient {
    /// Create a new client
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be initialized.
    pub fn new(config: NewsConfig) -> Result<Self, NewsError> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| NewsError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn query_params(&self, query: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("q", query.to_string()),
            ("apiKey", self.config.api_key.clone()),
            ("language", self.config.language.clone()),
            ("sortBy", self.config.sort_by.clone()),
        ];
        if let Some(size) = self.config.page_size {
            params.push(("pageSize", size.to_string()));
        }
        params
    }

    /// Turn an error envelope into a typed error
    fn check_envelope(response: NewsResponse) -> Result<NewsResponse, NewsError> {
        if response.is_ok() {
            return Ok(response);
        }

        Err(NewsError::ApiError {
            code: response.code.unwrap_or_else(|| "unknown".to_string()),
            message: response
                .message
                .unwrap_or_else(|| format!("status {}", response.status)),
        })
    }
}

#[async_trait]
impl NewsClient for NewsApiClient {
    #[instrument(skip(self))]
    async fn search(&self, query: &str) -> Result<NewsResponse, NewsError> {
        let url = format!("{}/everything", self.config.base_url.trim_end_matches('/'));
        debug!(url = %url, "Sending NewsAPI request");

        let response = self
            .client
            .get(&url)
            .query(&self.query_params(query))
            .send()
            .await
            .map_err(|e| NewsError::from_reqwest(&e, self.config.timeout_secs))?;

        let status = response.status();
        debug!(status = %status, "Received NewsAPI response");

        if status == StatusCode::UNAUTHORIZED {
            return Err(NewsError::AuthenticationFailed(
                "NewsAPI rejected the API key".to_string(),
            ));
        }
        if status.is_server_error() {
            return Err(NewsError::ServiceUnavailable(format!("HTTP {status}")));
        }

        // Error envelopes come with 4xx codes; prefer the provider's own message.
        let body = response
            .text()
            .await
            .map_err(|e| NewsError::from_reqwest(&e, self.config.timeout_secs))?;

        match serde_json::from_str::<NewsResponse>(&body) {
            Ok(parsed) => {
                let checked = Self::check_envelope(parsed)?;
                if !status.is_success() {
                    return Err(NewsError::RequestFailed(format!("HTTP {status}")));
                }
                debug!(
                    articles = checked.articles.len(),
                    total = checked.total_results,
                    "Parsed NewsAPI response"
                );
                Ok(checked)
            },
            Err(_) if !status.is_success() => {
                Err(NewsError::RequestFailed(format!("HTTP {status}")))
            },
            Err(e) => Err(NewsError::ParseError(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keyed() -> NewsConfig {
        NewsConfig {
            api_key: "news-key".to_string(),
            ..NewsConfig::default()
        }
    }

    #[test]
    fn new_rejects_invalid_config() {
        assert!(NewsApiClient::new(NewsConfig::default()).is_err());
        assert!(NewsApiClient::new(keyed()).is_ok());
    }

    #[test]
    fn query_params_follow_config() {
        let client = NewsApiClient::new(keyed()).unwrap();
        let params = client.query_params("Tokyo");
        assert_eq!(
            params,
            vec![
                ("q", "Tokyo".to_string()),
                ("apiKey", "news-key".to_string()),
                ("language", "en".to_string()),
                ("sortBy", "relevancy".to_string()),
            ]
        );
    }

    #[test]
    fn query_params_include_page_size_when_set() {
        let config = NewsConfig {
            page_size: Some(20),
            ..keyed()
        };
        let client = NewsApiClient::new(config).unwrap();
        assert!(
            client
                .query_params("Tokyo")
                .contains(&("pageSize", "20".to_string()))
        );
    }

    #[test]
    fn error_envelope_becomes_api_error() {
        let envelope = NewsResponse {
            status: "error".to_string(),
            total_results: 0,
            articles: vec![],
            code: Some("rateLimited".to_string()),
            message: Some("slow down".to_string()),
        };

        match NewsApiClient::check_envelope(envelope) {
            Err(NewsError::ApiError { code, message }) => {
                assert_eq!(code, "rateLimited");
                assert_eq!(message, "slow down");
            },
            other => panic!("expected ApiError, got {other:?}"),
        }
    }
}
