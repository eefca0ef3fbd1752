//! Deterministic prompt assembly for the analysis request.
//!
//! The rendered prompt is plain text: a strategist preamble, the numbered
//! headline list, and the JSON shape the model must answer in. Article text
//! is interpolated verbatim; the shape is a parsing target for
//! [`crate::report::normalize`], not a security boundary.

use std::fmt::Write;

use crate::news::Article;

const PREAMBLE: &str =
    "You are a gold market strategist. Judge how the news below moves the gold market.";

/// JSON shape the model is instructed to answer in.
///
/// Field names here must stay in lockstep with the response mapping in
/// `report::wire`.
const RESPONSE_SHAPE: &str = r#"{
  "overall_sentiment_score": <integer 0-100, higher = more bullish for gold>,
  "overall_summary": "<two or three sentences on the market mood>",
  "action_plan": "<one short, actionable recommendation>",
  "individual_news": [
    {
      "id": <the number of the headline in the list above>,
      "title": "<the headline, restated briefly>",
      "summary": "<one sentence on why it matters for gold>",
      "weight": <integer 0-100, higher = more bullish for gold>
    }
  ]
}"#;

/// A builder for the analysis prompt.
///
/// Rendering is pure and deterministic: the same articles and settings
/// always produce the same string.
#[derive(Debug, Clone)]
pub struct PromptBuilder {
    emphasis_topics: Vec<String>,
    include_dates: bool,
}

impl Default for PromptBuilder {
    fn default() -> Self {
        Self {
            emphasis_topics: Vec::new(),
            include_dates: true,
        }
    }
}

impl PromptBuilder {
    /// Creates a new `PromptBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Topics the model should weigh with particular attention.
    #[must_use]
    pub fn emphasis_topics(
        mut self,
        topics: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.emphasis_topics = topics.into_iter().map(Into::into).collect();
        self
    }

    /// Renders publish dates next to headlines (on by default).
    #[must_use]
    pub const fn include_dates(mut self, on: bool) -> Self {
        self.include_dates = on;
        self
    }

    /// Renders the full instruction for the given articles.
    ///
    /// Headlines are numbered from 1; the model is told to echo each number
    /// back as `id` so answers can be traced to their source article.
    #[must_use]
    pub fn render(&self, articles: &[Article]) -> String {
        let mut out = String::new();
        out.push_str(PREAMBLE);
        out.push_str("\n\nNews headlines:\n");

        for (i, article) in articles.iter().enumerate() {
            let _ = write!(out, "{}. {}", i + 1, article.title);
            if self.include_dates
                && let Some(ts) = article.published_at
            {
                let _ = write!(out, " ({})", ts.format("%Y-%m-%d"));
            }
            out.push('\n');
            if let Some(desc) = article.description.as_deref()
                && !desc.trim().is_empty()
            {
                let _ = writeln!(out, "   {desc}");
            }
        }

        if !self.emphasis_topics.is_empty() {
            let _ = writeln!(
                out,
                "\nWeigh especially the implications for: {}.",
                self.emphasis_topics.join(", ")
            );
        }

        out.push_str(
            "\nRespond in English with JSON ONLY, exactly in this shape, \
             with no surrounding prose and no code fences:\n",
        );
        out.push_str(RESPONSE_SHAPE);
        out.push('\n');
        out.push_str(
            "Echo each headline's number from the list above as its \"id\" \
             so every item can be traced back to its source.\n",
        );
        out
    }
}

/// Renders the default prompt for `articles`.
#[must_use]
pub fn build_prompt(
    articles: &[Article],
    emphasis_topics: impl IntoIterator<Item = impl Into<String>>,
) -> String {
    PromptBuilder::new()
        .emphasis_topics(emphasis_topics)
        .render(articles)
}
