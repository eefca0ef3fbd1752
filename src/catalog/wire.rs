use serde::Deserialize;

#[derive(Deserialize)]
pub(crate) struct ModelsEnvelope {
    pub(crate) models: Option<Vec<ModelNode>>,
}

#[derive(Deserialize)]
pub(crate) struct ModelNode {
    pub(crate) name: Option<String>,
    #[serde(rename = "displayName")]
    pub(crate) display_name: Option<String>,
    #[serde(rename = "supportedGenerationMethods")]
    pub(crate) supported_generation_methods: Option<Vec<String>>,
}
