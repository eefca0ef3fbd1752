use chrono::{DateTime, Duration, Utc};

use crate::{
    core::{GwClient, GwError, net},
    news::{SortOrder, model::Article, wire},
};

pub(super) async fn fetch_news(
    client: &GwClient,
    keywords: &[String],
    window_days: u32,
    max_results: u32,
    sort: SortOrder,
    exact_phrases: bool,
) -> Result<Vec<Article>, GwError> {
    let mut url = client.base_news().join("everything")?;

    // Oversized windows clamp to chrono's floor instead of overflowing.
    let from = Utc::now()
        .checked_sub_signed(Duration::days(i64::from(window_days)))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
        .format("%Y-%m-%d")
        .to_string();

    url.query_pairs_mut()
        .append_pair("q", &combine_keywords(keywords, exact_phrases))
        .append_pair("from", &from)
        .append_pair("language", "en")
        .append_pair("sortBy", sort.as_str())
        .append_pair("pageSize", &max_results.to_string());

    let resp = client
        .http()
        .get(url)
        .header("X-Api-Key", client.news_api_key())
        .send()
        .await?;

    let status = resp.status();
    let final_url = resp.url().to_string();
    let body = net::get_text(resp, "news_everything", &slug(keywords), "json").await?;

    if !status.is_success() {
        // NewsAPI ships machine-readable errors in the body; prefer those.
        if let Ok(envelope) = serde_json::from_str::<wire::NewsEnvelope>(&body)
            && envelope.status.as_deref() == Some("error")
        {
            return Err(news_api_error(&envelope));
        }
        return Err(GwError::NewsStatus {
            status: status.as_u16(),
            url: final_url,
        });
    }

    let envelope: wire::NewsEnvelope =
        serde_json::from_str(&body).map_err(|e| GwError::Data(format!("news json parse: {e}")))?;
    if envelope.status.as_deref() == Some("error") {
        return Err(news_api_error(&envelope));
    }

    Ok(map_articles(envelope, max_results))
}

fn news_api_error(envelope: &wire::NewsEnvelope) -> GwError {
    GwError::NewsApi {
        code: envelope.code.clone().unwrap_or_else(|| "unknown".into()),
        message: envelope
            .message
            .clone()
            .unwrap_or_else(|| "no message provided".into()),
    }
}

fn map_articles(envelope: wire::NewsEnvelope, max_results: u32) -> Vec<Article> {
    let mut articles: Vec<Article> = envelope
        .articles
        .unwrap_or_default()
        .into_iter()
        .filter_map(|node| {
            let title = node.title?;
            // NewsAPI keeps tombstones for retracted articles.
            if title == "[Removed]" {
                return None;
            }

            Some(Article {
                title,
                description: node.description,
                url: node.url,
                source: node.source.and_then(|s| s.name),
                published_at: node.published_at.as_deref().and_then(parse_timestamp),
            })
        })
        .collect();

    // The server honors pageSize, but don't trust it.
    articles.truncate(max_results as usize);
    articles
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn combine_keywords(keywords: &[String], exact_phrases: bool) -> String {
    keywords
        .iter()
        .map(|kw| {
            if exact_phrases {
                format!("\"{kw}\"")
            } else {
                kw.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(" OR ")
}

fn slug(keywords: &[String]) -> String {
    keywords.first().map_or_else(
        || "all".to_string(),
        |kw| kw.to_ascii_lowercase().replace(' ', "-"),
    )
}
