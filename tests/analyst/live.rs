use goldwire::{AnalysisOutcome, Analyst};

#[tokio::test]
#[ignore]
async fn live_full_pipeline_smoke() {
    if !crate::common::live_or_record_enabled() {
        return;
    }
    let Some(client) = crate::common::live_client() else {
        return;
    };
    crate::common::init_tracing();

    // Costs one generation call; run deliberately via GW_LIVE=1.
    let outcome = Analyst::new(&client).analyze().await.unwrap();

    if !crate::common::is_recording() {
        match outcome {
            AnalysisOutcome::Report(report) => {
                assert!(report.analysis.overall_sentiment_score <= 100);
                assert!(!report.analysis.overall_summary.is_empty());
                assert!(!report.articles.is_empty());
            }
            // A quiet news window is a legitimate live outcome.
            AnalysisOutcome::NoFreshNews => {}
        }
    }
}
