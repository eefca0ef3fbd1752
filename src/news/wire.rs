use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct NewsEnvelope {
    pub(crate) status: Option<String>,
    pub(crate) articles: Option<Vec<ArticleNode>>,
    // Populated on `status == "error"` responses.
    pub(crate) code: Option<String>,
    pub(crate) message: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct ArticleNode {
    pub(crate) source: Option<SourceNode>,
    pub(crate) title: Option<String>,
    pub(crate) description: Option<String>,
    pub(crate) url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub(crate) published_at: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct SourceNode {
    pub(crate) name: Option<String>,
}
