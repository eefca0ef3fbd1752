use goldwire::NewsBuilder;

#[tokio::test]
#[ignore]
async fn live_news_smoke_and_or_record() {
    if !crate::common::live_or_record_enabled() {
        return;
    }
    let Some(client) = crate::common::live_client() else {
        return;
    };
    crate::common::init_tracing();

    // This call will record `tests/fixtures/news_everything_gold-price.json`
    // if GW_RECORD=1
    let articles = NewsBuilder::new(
        &client,
        ["Gold Price", "Federal Reserve", "US Economy", "Trump"],
    )
    .fetch()
    .await
    .unwrap();

    if !crate::common::is_recording() {
        assert!(articles.len() <= 5);
        for article in &articles {
            assert!(!article.title.is_empty());
        }
    }
}
