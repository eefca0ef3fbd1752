mod api;
mod model;
mod wire;

pub use model::Article;

use crate::{GwClient, GwError};

/// Server-side ordering for news results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Best query match first.
    #[default]
    Relevancy,
    /// Newest first.
    PublishedAt,
}

impl SortOrder {
    pub(crate) const fn as_str(self) -> &'static str {
        match self {
            SortOrder::Relevancy => "relevancy",
            SortOrder::PublishedAt => "publishedAt",
        }
    }
}

/// A builder for fetching recent articles matching a set of keywords.
pub struct NewsBuilder {
    client: GwClient,
    keywords: Vec<String>,
    window_days: u32,
    max_results: u32,
    sort: SortOrder,
    exact_phrases: bool,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` for the given keywords.
    ///
    /// Keywords are OR-combined into a single query.
    pub fn new(
        client: &GwClient,
        keywords: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            client: client.clone(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            window_days: 2,
            max_results: 5,
            sort: SortOrder::default(),
            exact_phrases: false,
        }
    }

    /// Restricts results to articles published within the last `days` days.
    #[must_use]
    pub const fn window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    /// Sets the maximum number of articles to return.
    #[must_use]
    pub const fn max_results(mut self, n: u32) -> Self {
        self.max_results = n;
        self
    }

    /// Sets the server-side sort order.
    #[must_use]
    pub const fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Quotes each keyword so it matches as an exact phrase.
    #[must_use]
    pub const fn exact_phrases(mut self, on: bool) -> Self {
        self.exact_phrases = on;
        self
    }

    /// Executes the request and fetches the matching articles.
    ///
    /// A window with zero matching articles is `Ok(vec![])`, not an error;
    /// the caller decides how to surface the no-data condition.
    ///
    /// # Errors
    ///
    /// Returns a `GwError` if the request fails, the API rejects it, or the
    /// response cannot be parsed.
    pub async fn fetch(self) -> Result<Vec<Article>, GwError> {
        api::fetch_news(
            &self.client,
            &self.keywords,
            self.window_days,
            self.max_results,
            self.sort,
            self.exact_phrases,
        )
        .await
    }
}
