use goldwire::{AnalysisOutcome, Analyst, GwError, ModelSource, Sentiment, SortOrder};
use httpmock::{Method::GET, Method::POST, MockServer};

use crate::common;

#[tokio::test]
async fn full_run_produces_classified_report() {
    let server = MockServer::start();
    let models = common::mock_models(&server);
    let news = common::mock_news(&server, "gold");
    let generate = common::mock_generate(&server, "gemini-2.0-flash", "fenced");

    let client = common::client_for(&server);
    let outcome = Analyst::new(&client).analyze().await.unwrap();

    // Each endpoint is hit exactly once.
    models.assert();
    news.assert();
    generate.assert();

    let AnalysisOutcome::Report(report) = outcome else {
        panic!("expected a full report");
    };

    assert_eq!(report.model.id, "models/gemini-2.0-flash");
    assert_eq!(report.model.source, ModelSource::Catalog);
    assert_eq!(report.articles.len(), 3);

    assert_eq!(report.analysis.overall_sentiment_score, 72);
    assert_eq!(report.analysis.overall_sentiment, Sentiment::Bullish);
    assert!(!report.analysis.action_plan.is_empty());

    assert_eq!(report.analysis.individual_news.len(), 3);
    let first = &report.analysis.individual_news[0];
    assert_eq!(first.source_id, Some(1));
    assert_eq!(first.weight, 80);
    assert_eq!(first.sentiment, Sentiment::Bullish);
    // Paired items carry their source article's publish time.
    assert_eq!(first.published_at, report.articles[0].published_at);
}

#[tokio::test]
async fn no_fresh_news_short_circuits_before_generation() {
    let server = MockServer::start();
    let models = common::mock_models(&server);
    let news = common::mock_news(&server, "empty");
    // No generate mock: any POST would fail the test via the error path.

    let client = common::client_for(&server);
    let outcome = Analyst::new(&client).analyze().await.unwrap();

    models.assert();
    news.assert();
    assert_eq!(outcome, AnalysisOutcome::NoFreshNews);
}

#[tokio::test]
async fn catalog_outage_still_produces_report_on_fallback_model() {
    let server = MockServer::start();
    let models = server.mock(|when, then| {
        when.method(GET).path("/models");
        then.status(500).body("catalog down");
    });
    let news = common::mock_news(&server, "gold");
    // The generation call must target the hardcoded fallback id.
    let generate = common::mock_generate(&server, "gemini-1.5-flash", "fenced");

    let client = common::client_for(&server);
    let outcome = Analyst::new(&client).analyze().await.unwrap();

    models.assert();
    news.assert();
    generate.assert();

    let AnalysisOutcome::Report(report) = outcome else {
        panic!("expected a full report");
    };
    assert_eq!(report.model.id, "models/gemini-1.5-flash");
    assert_eq!(report.model.source, ModelSource::Fallback);
    assert!(report.model.is_fallback());
}

#[tokio::test]
async fn news_failure_propagates_and_skips_generation() {
    let server = MockServer::start();
    let _models = common::mock_models(&server);
    let news = server.mock(|when, then| {
        when.method(GET).path("/everything");
        then.status(500).body("news down");
    });

    let client = common::client_for(&server);
    let err = Analyst::new(&client).analyze().await.unwrap_err();

    news.assert();
    assert!(matches!(err, GwError::NewsStatus { status: 500, .. }));
}

#[tokio::test]
async fn generation_failure_yields_no_partial_report() {
    let server = MockServer::start();
    let _models = common::mock_models(&server);
    let _news = common::mock_news(&server, "gold");
    let generate = server.mock(|when, then| {
        when.method(POST)
            .path("/models/gemini-2.0-flash:generateContent");
        then.status(503).body(r#"{"error": {"status": "UNAVAILABLE"}}"#);
    });

    let client = common::client_for(&server);
    let err = Analyst::new(&client).analyze().await.unwrap_err();

    // One attempt, no retry, and the failure surfaces as-is.
    generate.assert();
    assert!(matches!(err, GwError::AnalysisStatus { status: 503, .. }));
}

#[tokio::test]
async fn unparseable_model_output_fails_the_run() {
    let server = MockServer::start();
    let _models = common::mock_models(&server);
    let _news = common::mock_news(&server, "gold");
    let generate = server.mock(|when, then| {
        when.method(POST)
            .path("/models/gemini-2.0-flash:generateContent");
        then.status(200)
            .header("content-type", "application/json")
            .body(
                r#"{"candidates": [{"content": {"parts": [{"text": "The market looks bullish to me."}], "role": "model"}, "finishReason": "STOP"}]}"#,
            );
    });

    let client = common::client_for(&server);
    let err = Analyst::new(&client).analyze().await.unwrap_err();

    generate.assert();
    match err {
        GwError::Parse { raw, .. } => assert_eq!(raw, "The market looks bullish to me."),
        other => panic!("expected Parse error, got {other:?}"),
    }
}

#[tokio::test]
async fn custom_settings_flow_into_the_news_query() {
    let server = MockServer::start();
    let _models = common::mock_models(&server);
    let news = server.mock(|when, then| {
        when.method(GET)
            .path("/everything")
            .query_param("q", "Gold Price OR Inflation")
            .query_param("sortBy", "publishedAt")
            .query_param("pageSize", "3");
        then.status(200)
            .header("content-type", "application/json")
            .body(common::fixture("news_everything", "empty", "json"));
    });

    let client = common::client_for(&server);
    let outcome = Analyst::new(&client)
        .keywords(["Gold Price", "Inflation"])
        .sort(SortOrder::PublishedAt)
        .max_results(3)
        .window_days(1)
        .analyze()
        .await
        .unwrap();

    news.assert();
    assert_eq!(outcome, AnalysisOutcome::NoFreshNews);
}
