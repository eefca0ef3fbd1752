mod api;
mod model;
mod wire;

pub use model::{ModelInfo, ModelSource, ResolvedModel};

use crate::{GwClient, GwError};

/// Hardcoded default used whenever the catalog cannot supply a usable model.
pub const FALLBACK_MODEL: &str = "models/gemini-1.5-flash";

/// Substring a usable model id must carry.
pub(crate) const MODEL_FAMILY_MARKER: &str = "gemini";

/// Capability a usable model must advertise.
pub(crate) const GENERATE_METHOD: &str = "generateContent";

/// A builder for listing the generation-model catalog.
pub struct ModelsBuilder {
    client: GwClient,
}

impl ModelsBuilder {
    /// Creates a new `ModelsBuilder`.
    pub fn new(client: &GwClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    /// Executes the request and fetches the model catalog.
    ///
    /// # Errors
    ///
    /// Returns a `GwError` if the request fails, the server answers with a
    /// non-success status, or the response cannot be parsed.
    pub async fn fetch(self) -> Result<Vec<ModelInfo>, GwError> {
        api::fetch_models(&self.client).await
    }
}

/// Picks the model id the analysis call should target.
///
/// Scans the catalog in server order and returns the first entry whose id
/// names the gemini family and which advertises `generateContent`.
///
/// This call never fails: any transport, status, or parse problem resolves
/// to [`FALLBACK_MODEL`] with [`ModelSource::Fallback`], so an interactive
/// run keeps going on a known-good id.
pub async fn resolve(client: &GwClient) -> ResolvedModel {
    match ModelsBuilder::new(client).fetch().await {
        Ok(models) => {
            for m in models {
                if m.id.contains(MODEL_FAMILY_MARKER) && m.supports_generation() {
                    return ResolvedModel {
                        id: m.id,
                        source: ModelSource::Catalog,
                    };
                }
            }
            if std::env::var("GW_DEBUG").ok().as_deref() == Some("1") {
                eprintln!("GW_DEBUG: no usable model in catalog; using {FALLBACK_MODEL}");
            }
            ResolvedModel::fallback()
        }
        Err(e) => {
            if std::env::var("GW_DEBUG").ok().as_deref() == Some("1") {
                eprintln!("GW_DEBUG: model catalog unavailable ({e}); using {FALLBACK_MODEL}");
            }
            ResolvedModel::fallback()
        }
    }
}
