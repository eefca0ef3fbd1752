mod model;

pub use model::{AnalysisOutcome, MarketReport};

use crate::{
    catalog,
    core::{GwClient, GwError},
    generate::GenerateBuilder,
    news::{NewsBuilder, SortOrder},
    prompt::PromptBuilder,
    report,
};

/// Default keyword set the news query is built from.
pub const DEFAULT_KEYWORDS: [&str; 4] = ["Gold Price", "Federal Reserve", "US Economy", "Trump"];

/// Default emphasis topic handed to the prompt.
const DEFAULT_EMPHASIS: [&str; 1] = ["XAU/USD"];

/// A high-level interface for running the whole pipeline in one call.
///
/// An `Analyst` is created with a [`GwClient`] and, optionally, a custom
/// keyword set and news window. [`analyze`](Analyst::analyze) then walks
/// the fixed stage order: resolve a model, fetch news, build the prompt,
/// request the analysis, and normalize the response into a
/// [`MarketReport`].
///
/// # Example
///
/// ```no_run
/// # use goldwire::{AnalysisOutcome, Analyst, GwClient};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GwClient::from_env()?;
/// match Analyst::new(&client).analyze().await? {
///     AnalysisOutcome::Report(report) => println!(
///         "{} ({}/100): {}",
///         report.analysis.overall_sentiment,
///         report.analysis.overall_sentiment_score,
///         report.analysis.action_plan,
///     ),
///     AnalysisOutcome::NoFreshNews => println!("no fresh news in the window"),
/// }
/// # Ok(())
/// # }
/// ```
pub struct Analyst {
    client: GwClient,
    keywords: Vec<String>,
    emphasis_topics: Vec<String>,
    window_days: u32,
    max_results: u32,
    sort: SortOrder,
    exact_phrases: bool,
    include_dates: bool,
}

impl Analyst {
    /// Creates a new `Analyst` with the default gold/macro keyword set.
    pub fn new(client: &GwClient) -> Self {
        Self {
            client: client.clone(),
            keywords: DEFAULT_KEYWORDS.iter().map(ToString::to_string).collect(),
            emphasis_topics: DEFAULT_EMPHASIS.iter().map(ToString::to_string).collect(),
            window_days: 2,
            max_results: 5,
            sort: SortOrder::Relevancy,
            exact_phrases: false,
            include_dates: true,
        }
    }

    /// Replaces the keyword set the news query is built from.
    #[must_use]
    pub fn keywords(mut self, keywords: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the topics the prompt asks the model to weigh especially.
    #[must_use]
    pub fn emphasis_topics(
        mut self,
        topics: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.emphasis_topics = topics.into_iter().map(Into::into).collect();
        self
    }

    /// Restricts news to articles published within the last `days` days.
    #[must_use]
    pub const fn window_days(mut self, days: u32) -> Self {
        self.window_days = days;
        self
    }

    /// Sets the maximum number of articles fed into the analysis.
    #[must_use]
    pub const fn max_results(mut self, n: u32) -> Self {
        self.max_results = n;
        self
    }

    /// Sets the server-side sort order for the news query.
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

    /// Renders publish dates next to headlines in the prompt (on by default).
    #[must_use]
    pub const fn include_dates(mut self, on: bool) -> Self {
        self.include_dates = on;
        self
    }

    /// Runs the full pipeline once.
    ///
    /// Stage order is fixed: resolve a model, fetch news, short-circuit to
    /// [`AnalysisOutcome::NoFreshNews`] when the window matched nothing,
    /// otherwise build the prompt, request the analysis, normalize and
    /// classify the response, and link items back to their source
    /// articles.
    ///
    /// Model resolution never fails (it falls back to
    /// [`catalog::FALLBACK_MODEL`]); every other stage failure propagates
    /// unchanged, and no partial report is ever produced. Each network
    /// call is made exactly once.
    ///
    /// # Errors
    ///
    /// Returns a `GwError` if news retrieval, the generation call, or
    /// response normalization fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn analyze(&self) -> Result<AnalysisOutcome, GwError> {
        let model = catalog::resolve(&self.client).await;

        let articles = NewsBuilder::new(&self.client, self.keywords.iter().cloned())
            .window_days(self.window_days)
            .max_results(self.max_results)
            .sort(self.sort)
            .exact_phrases(self.exact_phrases)
            .fetch()
            .await?;

        if articles.is_empty() {
            return Ok(AnalysisOutcome::NoFreshNews);
        }

        let prompt = PromptBuilder::new()
            .emphasis_topics(self.emphasis_topics.iter().cloned())
            .include_dates(self.include_dates)
            .render(&articles);

        let raw = GenerateBuilder::new(&self.client, model.id.as_str(), prompt)
            .send()
            .await?;

        let mut analysis = report::normalize(&raw)?;
        report::attach_sources(&mut analysis, &articles);

        Ok(AnalysisOutcome::Report(MarketReport {
            analysis,
            model,
            articles,
        }))
    }
}
