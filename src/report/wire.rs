use serde::Deserialize;

/// Numeric fields as models actually emit them: integers, the odd float,
/// or the number wrapped in a string.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum RawNum {
    Int(i64),
    Float(f64),
    Text(String),
}

#[derive(Deserialize)]
pub(crate) struct AnalysisNode {
    pub(crate) overall_sentiment_score: Option<RawNum>,
    pub(crate) overall_summary: Option<String>,
    pub(crate) action_plan: Option<String>,
    pub(crate) individual_news: Option<Vec<ItemNode>>,
}

#[derive(Deserialize)]
pub(crate) struct ItemNode {
    pub(crate) id: Option<RawNum>,
    pub(crate) title: Option<String>,
    pub(crate) summary: Option<String>,
    pub(crate) weight: Option<RawNum>,
}
