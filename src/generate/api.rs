use crate::{
    core::{GwClient, GwError, net},
    generate::wire,
};

pub(super) async fn request_generation(
    client: &GwClient,
    model: &str,
    prompt: &str,
) -> Result<String, GwError> {
    // Catalog ids carry a `models/` prefix; the request path wants the bare id.
    let bare = model.strip_prefix("models/").unwrap_or(model);
    let mut url = client
        .base_gemini()
        .join(&format!("models/{bare}:generateContent"))?;
    url.query_pairs_mut()
        .append_pair("key", client.gemini_api_key());

    let payload = wire::GenerateRequest {
        contents: vec![wire::ContentPayload {
            parts: vec![wire::PartPayload { text: prompt }],
        }],
    };

    // The request URL carries the key; errors must not.
    let resp = client
        .http()
        .post(url)
        .json(&payload)
        .send()
        .await
        .map_err(reqwest::Error::without_url)?;

    if !resp.status().is_success() {
        return Err(GwError::AnalysisStatus {
            status: resp.status().as_u16(),
            url: net::redacted_url(resp.url()),
        });
    }

    let body = net::get_text(resp, "generate", bare, "json")
        .await
        .map_err(reqwest::Error::without_url)?;
    let envelope: wire::GenerateEnvelope = serde_json::from_str(&body)
        .map_err(|e| GwError::Data(format!("generate json parse: {e}")))?;

    first_text(envelope)
        .filter(|t| !t.trim().is_empty())
        .ok_or_else(|| GwError::Data("generate response carried no text part".into()))
}

fn first_text(envelope: wire::GenerateEnvelope) -> Option<String> {
    envelope
        .candidates?
        .into_iter()
        .next()?
        .content?
        .parts?
        .into_iter()
        .next()?
        .text
}
