//! Turning raw model text into a validated [`MarketAnalysis`].
//!
//! Models asked for "JSON only" still wrap their answer in markdown code
//! fences often enough that stripping them is the first, unconditional
//! step. Everything after that is strict on the fields a report cannot
//! exist without and tolerant on the rest.

mod model;
mod wire;

pub use model::{MarketAnalysis, NewsItemAnalysis, Sentiment};

use crate::{GwError, news::Article};

/// Removes leading/trailing markdown code fences (with or without a
/// language tag) and surrounding whitespace.
///
/// Text without fencing passes through untouched; applying the function
/// twice gives the same result as applying it once.
#[must_use]
pub fn strip_code_fences(raw: &str) -> &str {
    let mut text = raw.trim();
    if let Some(rest) = text.strip_prefix("```") {
        // Drop the language tag riding on the opening fence, if any.
        let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
        text = rest.trim_start();
    }
    if let Some(rest) = text.strip_suffix("```") {
        text = rest.trim_end();
    }
    text
}

/// Parses raw model text into a validated, classified [`MarketAnalysis`].
///
/// The overall score, summary, and action plan are required; the
/// per-headline list is optional and defaults to empty. Scores arriving
/// as numeric strings are coerced, out-of-range values clamp to 0-100,
/// and anything non-numeric fails the whole response.
///
/// Pairing items with their source articles is a separate step; see
/// [`attach_sources`].
///
/// # Errors
///
/// Returns [`GwError::Parse`] when the text is not JSON, a required field
/// is missing, or a score cannot be read as a number. The raw text rides
/// along in the error for diagnostics.
pub fn normalize(raw: &str) -> Result<MarketAnalysis, GwError> {
    let text = strip_code_fences(raw);

    let node: wire::AnalysisNode =
        serde_json::from_str(text).map_err(|e| parse_err(format!("invalid JSON: {e}"), raw))?;

    let score_node = node
        .overall_sentiment_score
        .ok_or_else(|| parse_err("missing field `overall_sentiment_score`", raw))?;
    let overall_summary = node
        .overall_summary
        .ok_or_else(|| parse_err("missing field `overall_summary`", raw))?;
    let action_plan = node
        .action_plan
        .ok_or_else(|| parse_err("missing field `action_plan`", raw))?;

    let overall_sentiment_score = coerce_score(&score_node, "overall_sentiment_score", raw)?;

    let mut individual_news = Vec::new();
    for (idx, item) in node.individual_news.unwrap_or_default().into_iter().enumerate() {
        let weight_node = item.weight.ok_or_else(|| {
            parse_err(format!("individual_news[{idx}]: missing field `weight`"), raw)
        })?;
        let weight = coerce_score(&weight_node, &format!("individual_news[{idx}].weight"), raw)?;

        individual_news.push(NewsItemAnalysis {
            source_id: item.id.as_ref().and_then(coerce_id),
            title: item.title.unwrap_or_default(),
            summary: item.summary.unwrap_or_default(),
            weight,
            sentiment: Sentiment::from_score(weight),
            published_at: None,
        });
    }

    Ok(MarketAnalysis {
        overall_sentiment_score,
        overall_sentiment: Sentiment::from_score(overall_sentiment_score),
        overall_summary,
        action_plan,
        individual_news,
    })
}

/// Links analysis items back to their source articles by echoed id.
///
/// Matched items pick up the source article's publish time. Items whose
/// id falls outside the input range lose it, so a surviving `source_id`
/// always indexes into `articles` (1-based). Length mismatches in either
/// direction are expected and tolerated.
pub fn attach_sources(analysis: &mut MarketAnalysis, articles: &[Article]) {
    for item in &mut analysis.individual_news {
        match item.source_id {
            Some(id) if id >= 1 && id <= articles.len() => {
                item.published_at = articles[id - 1].published_at;
            }
            _ => item.source_id = None,
        }
    }
}

fn parse_err(reason: impl Into<String>, raw: &str) -> GwError {
    GwError::Parse {
        reason: reason.into(),
        raw: raw.to_string(),
    }
}

fn coerce_score(raw_num: &wire::RawNum, field: &str, raw: &str) -> Result<u8, GwError> {
    let n = match raw_num {
        wire::RawNum::Int(n) => Some(*n),
        wire::RawNum::Float(f) if f.is_finite() => Some(f.round() as i64),
        wire::RawNum::Float(_) => None,
        wire::RawNum::Text(s) => parse_numeric(s),
    };
    let Some(n) = n else {
        return Err(parse_err(format!("{field}: not a number"), raw));
    };
    // The instruction says 0-100; out-of-range but parseable values clamp.
    Ok(n.clamp(0, 100) as u8)
}

fn coerce_id(raw_num: &wire::RawNum) -> Option<usize> {
    let n = match raw_num {
        wire::RawNum::Int(n) => *n,
        wire::RawNum::Float(f) if f.is_finite() && f.fract() == 0.0 => *f as i64,
        wire::RawNum::Float(_) => return None,
        wire::RawNum::Text(s) => parse_numeric(s)?,
    };
    usize::try_from(n).ok().filter(|&id| id >= 1)
}

fn parse_numeric(s: &str) -> Option<i64> {
    let t = s.trim();
    t.parse::<i64>().ok().or_else(|| {
        t.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(|f| f.round() as i64)
    })
}
