mod api;
mod wire;

use crate::{GwClient, GwError};

/// A builder for a single text-generation request.
pub struct GenerateBuilder {
    client: GwClient,
    model: String,
    prompt: String,
}

impl GenerateBuilder {
    /// Creates a request against `model` (with or without the catalog's
    /// `models/` prefix), carrying `prompt` as the sole input turn.
    pub fn new(client: &GwClient, model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            client: client.clone(),
            model: model.into(),
            prompt: prompt.into(),
        }
    }

    /// Executes the request and returns the first candidate's text.
    ///
    /// Exactly one attempt is made; there is no retry. The client's
    /// configured timeouts bound the call.
    ///
    /// # Errors
    ///
    /// Returns a `GwError` if the request fails, the endpoint answers with
    /// a non-success status, or the response carries no text part.
    pub async fn send(self) -> Result<String, GwError> {
        api::request_generation(&self.client, &self.model, &self.prompt).await
    }
}
