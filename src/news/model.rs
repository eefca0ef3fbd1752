use chrono::{DateTime, Utc};
use serde::Serialize;

/// Represents a single news article returned by the search API.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Article {
    /// The headline of the article.
    pub title: String,
    /// A short teaser or description, when the provider supplies one.
    pub description: Option<String>,
    /// A direct link to the article.
    pub url: Option<String>,
    /// The publisher of the article (e.g., "Reuters", "Bloomberg").
    pub source: Option<String>,
    /// When the article was published, when present and parseable.
    pub published_at: Option<DateTime<Utc>>,
}
