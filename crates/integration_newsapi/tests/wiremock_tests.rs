//! Integration tests for the NewsAPI client using wiremock

use std::time::Duration;

use integration_newsapi::{NewsApiClient, NewsClient, NewsConfig, NewsError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

fn articles_body(titles: &[&str]) -> serde_json::Value {
    let articles: Vec<_> = titles
        .iter()
        .map(|title| {
            serde_json::json!({
                "source": { "id": null, "name": "Wire Service" },
                "author": null,
                "title": title,
                "description": "…",
                "url": "https://example.com/story",
                "urlToImage": null,
                "publishedAt": "2024-01-15T08:30:00Z",
                "content": null
            })
        })
        .collect();

    serde_json::json!({
        "status": "ok",
        "totalResults": titles.len(),
        "articles": articles
    })
}

#[allow(clippy::expect_used)]
fn create_test_client(server: &MockServer) -> NewsApiClient {
    let config = NewsConfig {
        api_key: "news-key".to_string(),
        base_url: server.uri(),
        timeout_secs: 1,
        ..NewsConfig::default()
    };
    NewsApiClient::new(config).expect("client")
}

// ============================================================================
// Successful searches
// ============================================================================

#[tokio::test]
async fn search_sends_expected_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/everything"))
        .and(query_param("q", "Cairo"))
        .and(query_param("apiKey", "news-key"))
        .and(query_param("language", "en"))
        .and(query_param("sortBy", "relevancy"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(&["One", "Two"])))
        .expect(1)
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.search("Cairo").await.unwrap();

    assert_eq!(response.total_results, 2);
    let titles: Vec<_> = response
        .articles
        .iter()
        .map(|a| a.title_or_default())
        .collect();
    assert_eq!(titles, ["One", "Two"]);
}

#[tokio::test]
async fn empty_result_is_ok() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(articles_body(&[])))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.search("Nowhere").await.unwrap();
    assert!(response.articles.is_empty());
}

#[tokio::test]
async fn removed_articles_are_kept_in_order() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(articles_body(&["[Removed]", "Real story"])),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let response = client.search("Tokyo").await.unwrap();
    assert_eq!(response.articles[0].title_or_default(), "[Removed]");
    assert_eq!(response.articles[1].title_or_default(), "Real story");
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn error_envelope_on_ok_status_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "status": "error",
            "code": "parametersMissing",
            "message": "Required parameters are missing."
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    match client.search("Tokyo").await {
        Err(NewsError::ApiError { code, .. }) => assert_eq!(code, "parametersMissing"),
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn rate_limit_envelope_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "status": "error",
            "code": "rateLimited",
            "message": "You have made too many requests recently."
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.search("Tokyo").await;
    assert!(matches!(result, Err(NewsError::ApiError { .. })));
}

#[tokio::test]
async fn unauthorized_is_authentication_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "status": "error",
            "code": "apiKeyInvalid",
            "message": "Your API key is invalid or incorrect."
        })))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.search("Tokyo").await;
    assert!(matches!(result, Err(NewsError::AuthenticationFailed(_))));
}

#[tokio::test]
async fn server_error_is_service_unavailable() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.search("Tokyo").await;
    assert!(matches!(result, Err(NewsError::ServiceUnavailable(_))));
}

#[tokio::test]
async fn plain_client_error_is_request_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad request"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.search("Tokyo").await;
    assert!(matches!(result, Err(NewsError::RequestFailed(_))));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.search("Tokyo").await;
    assert!(matches!(result, Err(NewsError::ParseError(_))));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/everything"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(articles_body(&["Late"]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client = create_test_client(&server);
    let result = client.search("Tokyo").await;
    assert!(matches!(result, Err(NewsError::Timeout { timeout_secs: 1 })));
}
