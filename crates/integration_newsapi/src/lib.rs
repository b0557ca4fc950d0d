#![forbid(unsafe_code)]
//! NewsAPI integration
//!
//! Headline search via the NewsAPI `everything` endpoint
//! (<https://newsapi.org/docs/endpoints/everything>).
//!
//! # Example
//!
//! ```rust,ignore
//! use integration_newsapi::{NewsApiClient, NewsClient, NewsConfig};
//!
//! let config = NewsConfig { api_key: key, ..NewsConfig::default() };
//! let client = NewsApiClient::new(config)?;
//!
//! let response = client.search("Cairo").await?;
//! for article in response.articles {
//!     println!("{}", article.title_or_default());
//! }
//! ```

mod client;
mod config;
mod error;
mod models;

pub use client::{NewsApiClient, NewsClient};
pub use config::NewsConfig;
pub use error::NewsError;
pub use models::{Article, ArticleSource, NewsResponse};
