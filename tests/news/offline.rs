use chrono::{TimeZone, Utc};
use goldwire::{GwError, NewsBuilder, SortOrder};
use httpmock::{Method::GET, MockServer};

use crate::common;

#[tokio::test]
async fn fetch_builds_query_and_maps_articles() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/everything")
            .query_param("q", "Gold Price OR Federal Reserve OR US Economy OR Trump")
            .query_param("language", "en")
            .query_param("sortBy", "relevancy")
            .query_param("pageSize", "5")
            .query_param_exists("from")
            .header("x-api-key", common::NEWS_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news_everything", "gold", "json"));
    });

    let client = common::client_for(&server);
    let articles = NewsBuilder::new(
        &client,
        ["Gold Price", "Federal Reserve", "US Economy", "Trump"],
    )
    .fetch()
    .await
    .unwrap();

    mock.assert();

    // The fixture carries four entries; the `[Removed]` tombstone is dropped.
    assert_eq!(articles.len(), 3);

    let first = &articles[0];
    assert_eq!(first.title, "Fed raises rates");
    assert_eq!(first.source.as_deref(), Some("Reuters"));
    assert_eq!(
        first.description.as_deref(),
        Some("The Federal Reserve lifted its benchmark rate by 25 basis points, citing sticky services inflation.")
    );
    assert_eq!(
        first.published_at,
        Some(Utc.with_ymd_and_hms(2025, 8, 12, 14, 30, 0).unwrap())
    );

    // Null description survives as None rather than an empty string.
    assert!(articles[1].description.is_none());
    assert_eq!(articles[1].source.as_deref(), Some("Bloomberg"));
}

#[tokio::test]
async fn builder_configures_request() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/everything")
            .query_param("q", "\"Gold Price\" OR \"Trump\"")
            .query_param("sortBy", "publishedAt")
            .query_param("pageSize", "10");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news_everything", "gold", "json"));
    });

    let client = common::client_for(&server);
    let _articles = NewsBuilder::new(&client, ["Gold Price", "Trump"])
        .exact_phrases(true)
        .sort(SortOrder::PublishedAt)
        .max_results(10)
        .window_days(7)
        .fetch()
        .await
        .unwrap();

    mock.assert();
}

#[tokio::test]
async fn oversized_window_clamps_instead_of_panicking() {
    let server = MockServer::start();
    let mock = common::mock_news(&server, "empty");

    let client = common::client_for(&server);
    let articles = NewsBuilder::new(&client, ["Gold Price"])
        .window_days(u32::MAX)
        .fetch()
        .await
        .unwrap();

    // The request still goes out, with `from` pinned to the range floor.
    mock.assert();
    assert!(articles.is_empty());
}

#[tokio::test]
async fn empty_window_is_ok_not_an_error() {
    let server = MockServer::start();
    let mock = common::mock_news(&server, "empty");

    let client = common::client_for(&server);
    let articles = NewsBuilder::new(&client, ["Gold Price"])
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert!(articles.is_empty());
}

#[tokio::test]
async fn error_envelope_maps_to_news_api_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/everything");
        then.status(401)
            .header("content-type", "application/json")
            .body(common::fixture("news_error", "apiKeyInvalid", "json"));
    });

    let client = common::client_for(&server);
    let err = NewsBuilder::new(&client, ["Gold Price"])
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    match err {
        GwError::NewsApi { code, message } => {
            assert_eq!(code, "apiKeyInvalid");
            assert!(message.contains("invalid or incorrect"));
        }
        other => panic!("expected NewsApi error, got {other:?}"),
    }
}

#[tokio::test]
async fn opaque_failure_maps_to_status_error() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/everything");
        then.status(500).body("upstream exploded");
    });

    let client = common::client_for(&server);
    let err = NewsBuilder::new(&client, ["Gold Price"])
        .fetch()
        .await
        .unwrap_err();

    // Exactly one request; a failed fetch is not retried.
    mock.assert();
    assert!(matches!(err, GwError::NewsStatus { status: 500, .. }));
}
