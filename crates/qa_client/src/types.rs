use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractRequest<'a> {
    pub urls: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExtractResponse {
    pub content: String,
    #[serde(default)]
    pub summary: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnswerRequest<'a> {
    pub question: &'a str,
    pub urls: &'a [String],
    pub model_type: &'a str,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    pub confidence: f64,
    #[serde(default)]
    pub context: Option<String>,
    pub model_used: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelInfo {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelsResponse {
    pub models: BTreeMap<String, ModelInfo>,
    pub default: String,
}

/// Body the backend sends alongside non-2xx statuses.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
