use serde::{Serialize, Deserialize};

/// Normalized design directives handed to the prompt composer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DesignRequest {
    pub project_name: String,
    pub website_brief: String,
    pub stage: String,
    pub audience: String,
    pub visual_style: String,
    pub color_palette: String,
    pub typography_style: String,
    pub tech_stack: String,
    pub components: Vec<String>,
    pub constraints: Vec<String>,
    pub motion: u8,
}

/// Body the form controller posts to `/api/generate`. Option keys are already resolved to labels.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BuilderPayload {
    pub project_name: String,
    pub website_brief: String,
    pub stage: String,
    pub audience: String,
    pub visual_style: String,
    pub color_palette: String,
    pub typography_style: String,
    pub tech_stack: String,
    pub components: Vec<String>,
    pub constraints: Vec<String>,
    pub motion: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct GenerateResponse {
    pub prompt: String,
    pub model: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Lenient view of a `/api/generate` reply as seen by the client; every field may be missing.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct GenerateReply {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}
