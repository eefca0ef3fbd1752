#[cfg(feature = "test-mode")]
use std::env;

use url::Url;

/// Render a URL for error messages with the query string dropped.
///
/// Request URLs for the generation API carry the key as a query
/// parameter; it must never end up in error text.
pub(crate) fn redacted_url(url: &Url) -> String {
    let mut url = url.clone();
    url.set_query(None);
    url.to_string()
}

/// Read the response body as text.
/// In `test-mode`, if `GW_RECORD=1`, the body is saved as a fixture via `fixtures`.
pub(crate) async fn get_text(
    resp: reqwest::Response,
    _endpoint: &str,
    _tag: &str,
    _ext: &str,
) -> Result<String, reqwest::Error> {
    let text = resp.text().await?;

    #[cfg(feature = "test-mode")]
    {
        if env::var("GW_RECORD").ok().as_deref() == Some("1")
            && let Err(e) = crate::core::fixtures::record_fixture(_endpoint, _tag, _ext, &text)
        {
            eprintln!("GW_RECORD: failed to write fixture for {_tag}: {e}");
        }
    }

    Ok(text)
}
