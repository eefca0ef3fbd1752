use serde::Serialize;

use crate::catalog::{FALLBACK_MODEL, GENERATE_METHOD};

/// One entry from the generation-model catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    /// Catalog identifier (e.g., `models/gemini-2.0-flash`).
    pub id: String,
    /// Human-readable name, when the catalog provides one.
    pub display_name: Option<String>,
    /// Generation methods the entry advertises (e.g., `generateContent`).
    pub generation_methods: Vec<String>,
}

impl ModelInfo {
    /// Whether this entry can serve a text-generation request.
    #[must_use]
    pub fn supports_generation(&self) -> bool {
        self.generation_methods.iter().any(|m| m == GENERATE_METHOD)
    }
}

/// How the pipeline arrived at the model id it will use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModelSource {
    /// Picked from the live model catalog.
    Catalog,
    /// The hardcoded default; the catalog was unreachable or had no usable entry.
    Fallback,
}

/// The model identifier the analysis call will target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedModel {
    /// Full model id, including the `models/` prefix.
    pub id: String,
    /// Where the id came from.
    pub source: ModelSource,
}

impl ResolvedModel {
    pub(crate) fn fallback() -> Self {
        Self {
            id: FALLBACK_MODEL.to_string(),
            source: ModelSource::Fallback,
        }
    }

    /// `true` when the resolver had to fall back to the default id.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == ModelSource::Fallback
    }
}
