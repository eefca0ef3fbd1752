use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub(crate) struct GenerateRequest<'a> {
    pub(crate) contents: Vec<ContentPayload<'a>>,
}

#[derive(Serialize)]
pub(crate) struct ContentPayload<'a> {
    pub(crate) parts: Vec<PartPayload<'a>>,
}

#[derive(Serialize)]
pub(crate) struct PartPayload<'a> {
    pub(crate) text: &'a str,
}

#[derive(Deserialize)]
pub(crate) struct GenerateEnvelope {
    pub(crate) candidates: Option<Vec<CandidateNode>>,
}

#[derive(Deserialize)]
pub(crate) struct CandidateNode {
    pub(crate) content: Option<ContentNode>,
}

#[derive(Deserialize)]
pub(crate) struct ContentNode {
    pub(crate) parts: Option<Vec<PartNode>>,
}

#[derive(Deserialize)]
pub(crate) struct PartNode {
    pub(crate) text: Option<String>,
}
