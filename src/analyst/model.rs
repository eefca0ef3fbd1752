use serde::Serialize;

use crate::{catalog::ResolvedModel, news::Article, report::MarketAnalysis};

/// The terminal artifact of a successful pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketReport {
    /// The parsed, validated, classified model output.
    pub analysis: MarketAnalysis,
    /// The model the analysis call targeted, with its resolution provenance.
    pub model: ResolvedModel,
    /// The articles the analysis was built from, in request order.
    pub articles: Vec<Article>,
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AnalysisOutcome {
    /// A full report was produced.
    Report(MarketReport),
    /// The news window matched nothing; no generation traffic was sent.
    NoFreshNews,
}
