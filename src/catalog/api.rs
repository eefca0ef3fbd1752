use crate::{
    catalog::{model::ModelInfo, wire},
    core::{GwClient, GwError, net},
};

pub(super) async fn fetch_models(client: &GwClient) -> Result<Vec<ModelInfo>, GwError> {
    let mut url = client.base_gemini().join("models")?;
    url.query_pairs_mut()
        .append_pair("key", client.gemini_api_key());

    // The request URL carries the key; errors must not.
    let resp = client
        .http()
        .get(url)
        .send()
        .await
        .map_err(reqwest::Error::without_url)?;

    if !resp.status().is_success() {
        return Err(GwError::Status {
            status: resp.status().as_u16(),
            url: net::redacted_url(resp.url()),
        });
    }

    let body = net::get_text(resp, "models", "list", "json")
        .await
        .map_err(reqwest::Error::without_url)?;
    let envelope: wire::ModelsEnvelope = serde_json::from_str(&body)
        .map_err(|e| GwError::Data(format!("model catalog json parse: {e}")))?;

    let models = envelope
        .models
        .unwrap_or_default()
        .into_iter()
        .filter_map(|node| {
            let id = node.name?;
            Some(ModelInfo {
                id,
                display_name: node.display_name,
                generation_methods: node.supported_generation_methods.unwrap_or_default(),
            })
        })
        .collect();

    Ok(models)
}
