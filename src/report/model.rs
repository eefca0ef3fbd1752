use chrono::{DateTime, Utc};
use serde::Serialize;

/// Tri-state market direction classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    /// Score 60 or above: upward pressure.
    Bullish,
    /// Score strictly between 40 and 60.
    Neutral,
    /// Score 40 or below: downward pressure.
    Bearish,
}

impl Sentiment {
    /// Classifies a 0-100 score (>= 60 bullish, <= 40 bearish, neutral in
    /// between).
    #[must_use]
    pub const fn from_score(score: u8) -> Self {
        if score >= 60 {
            Self::Bullish
        } else if score <= 40 {
            Self::Bearish
        } else {
            Self::Neutral
        }
    }

    /// Display label ("Bullish" / "Neutral" / "Bearish").
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bullish => "Bullish",
            Self::Neutral => "Neutral",
            Self::Bearish => "Bearish",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The model's take on a single headline, classified and (when the echoed
/// id matches an input article) linked back to its source.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewsItemAnalysis {
    /// 1-based number of the source headline, as echoed by the model.
    /// `None` when the echo was missing or matched no input article.
    pub source_id: Option<usize>,
    /// The headline, as restated by the model.
    pub title: String,
    /// One-line reasoning for the weight.
    pub summary: String,
    /// Per-headline sentiment score, 0-100.
    pub weight: u8,
    /// Classification of `weight`.
    pub sentiment: Sentiment,
    /// Publish time copied from the matched source article.
    pub published_at: Option<DateTime<Utc>>,
}

/// The parsed, validated, classified model output for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketAnalysis {
    /// Overall sentiment score, 0-100; higher is more bullish.
    pub overall_sentiment_score: u8,
    /// Classification of `overall_sentiment_score`.
    pub overall_sentiment: Sentiment,
    /// A few sentences on the market mood.
    pub overall_summary: String,
    /// One short, actionable recommendation.
    pub action_plan: String,
    /// Per-headline breakdown, in the order the model produced it.
    pub individual_news: Vec<NewsItemAnalysis>,
}
