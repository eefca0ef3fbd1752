use goldwire::{ModelSource, ModelsBuilder, catalog};

#[tokio::test]
#[ignore]
async fn live_catalog_lists_and_resolves() {
    if !crate::common::live_or_record_enabled() {
        return;
    }
    let Some(client) = crate::common::live_client() else {
        return;
    };
    crate::common::init_tracing();

    // This call will record `tests/fixtures/models_list.json` if GW_RECORD=1
    let models = ModelsBuilder::new(&client).fetch().await.unwrap();

    if !crate::common::is_recording() {
        assert!(
            !models.is_empty(),
            "Expected the live catalog to list at least one model"
        );
    }

    let resolved = catalog::resolve(&client).await;
    if !crate::common::is_recording() {
        assert!(resolved.id.contains("gemini"));
        assert_eq!(resolved.source, ModelSource::Catalog);
    }
}
