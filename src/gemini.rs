use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::{info, error};

pub const TEMPERATURE: f64 = 0.62;
pub const TOP_P: f64 = 0.9;
pub const MAX_OUTPUT_TOKENS: u32 = 1500;

#[derive(Debug, Error)]
pub enum GeminiError {
    #[error("{message}")]
    Provider { status: Option<u16>, message: String },
    #[error("Gemini returned an empty response.")]
    EmptyResponse,
}

impl GeminiError {
    fn provider(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Provider { status, message: message.into() }
    }

    /// Provider-supplied status when it is a real HTTP error code, otherwise 502.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Provider { status: Some(code), .. } => StatusCode::from_u16(*code)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            _ => StatusCode::BAD_GATEWAY,
        }
    }
}

/// Anything that can turn a composed instruction into prompt text.
#[async_trait]
pub trait PromptGenerator: Send + Sync {
    async fn generate(&self, instruction: &str, api_key: &str) -> Result<String, GeminiError>;
}

pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// `generateContent` URL for the configured model, without credentials.
    fn endpoint(&self) -> Result<Url, GeminiError> {
        let model_path = if self.model.starts_with("models/") {
            self.model.clone()
        } else {
            format!("models/{}", self.model)
        };
        let endpoint = format!("{}/{}:generateContent", self.base_url.trim_end_matches('/'), model_path);
        Url::parse(&endpoint)
            .map_err(|e| GeminiError::provider(None, format!("invalid Gemini endpoint {endpoint}: {e}")))
    }
}

#[async_trait]
impl PromptGenerator for GeminiClient {
    async fn generate(&self, instruction: &str, api_key: &str) -> Result<String, GeminiError> {
        let mut url = self.endpoint()?;
        info!("🔗 Making request to: {}", url);
        url.query_pairs_mut().append_pair("key", api_key);

        let request_body = json!({
            "contents": [{
                "role": "user",
                "parts": [{"text": instruction}]
            }],
            "generationConfig": {
                "temperature": TEMPERATURE,
                "topP": TOP_P,
                "maxOutputTokens": MAX_OUTPUT_TOKENS
            }
        });

        let response = self.client
            .post(url)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| GeminiError::provider(e.status().map(|s| s.as_u16()), e.to_string()))?;

        let status = response.status();
        info!("📥 Response status: {}", status);
        let response_text = response.text().await
            .map_err(|e| GeminiError::provider(Some(status.as_u16()), e.to_string()))?;

        if !status.is_success() {
            error!("❌ Gemini API error response: {}", response_text);
            return Err(GeminiError::provider(Some(status.as_u16()), provider_message(status, &response_text)));
        }

        let parsed: GeminiResponse = serde_json::from_str(&response_text)
            .map_err(|e| GeminiError::provider(None, format!("Failed to parse Gemini response: {e}")))?;

        let text = parsed.text();
        if text.is_empty() {
            error!("❌ Gemini returned no text (finish reason: {:?})", parsed.finish_reason());
            return Err(GeminiError::EmptyResponse);
        }
        info!("✅ Gemini prompt generated ({} chars)", text.len());
        Ok(text)
    }
}

fn provider_message(status: StatusCode, body: &str) -> String {
    #[derive(Deserialize)]
    struct Envelope {
        error: Option<ErrorBody>,
    }
    #[derive(Deserialize)]
    struct ErrorBody {
        message: Option<String>,
    }

    serde_json::from_str::<Envelope>(body)
        .ok()
        .and_then(|e| e.error)
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| format!("Gemini API request failed with status {status}."))
}

// --- Response Parsing Helpers ---

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
    #[serde(default, rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct Content { #[serde(default)] parts: Vec<Part> }

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

impl GeminiResponse {
    /// Text parts of the first candidate, joined and trimmed.
    fn text(&self) -> String {
        self.candidates
            .first()
            .map(|c| c.content.parts.iter().filter_map(|p| p.text.as_deref()).collect::<String>())
            .unwrap_or_default()
            .trim()
            .to_string()
    }

    fn finish_reason(&self) -> Option<&str> {
        self.candidates.first().and_then(|c| c.finish_reason.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, extract::{Path, Query}, routing::post};
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use std::collections::HashMap;
    use std::sync::Arc;
    use parking_lot::Mutex;

    type Captured = Arc<Mutex<Vec<(String, String, Value)>>>;

    async fn mock_gemini(status: StatusCode, reply: Value) -> (String, Captured) {
        let captured: Captured = Arc::default();
        let sink = captured.clone();
        let app = Router::new().route(
            "/models/:call",
            post(move |Path(call): Path<String>, Query(q): Query<HashMap<String, String>>, Json(body): Json<Value>| {
                let sink = sink.clone();
                let reply = reply.clone();
                async move {
                    sink.lock().push((call, q.get("key").cloned().unwrap_or_default(), body));
                    (status, Json(reply))
                }
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        (format!("http://{addr}"), captured)
    }

    fn text_reply(parts: &[&str]) -> Value {
        let parts: Vec<Value> = parts.iter().map(|t| json!({ "text": t })).collect();
        json!({ "candidates": [{ "content": { "parts": parts }, "finishReason": "STOP" }] })
    }

    #[tokio::test]
    async fn sends_fixed_sampling_config_and_returns_trimmed_text() {
        let (base, captured) = mock_gemini(StatusCode::OK, text_reply(&["  Build a ", "bold hero.  "])).await;
        let client = GeminiClient::new(base, "gemini-test");

        let text = client.generate("compose this", "se+cr/et=").await.unwrap();
        assert_eq!(text, "Build a bold hero.");

        let calls = captured.lock();
        assert_eq!(calls.len(), 1);
        let (call, key, body) = &calls[0];
        assert_eq!(call, "gemini-test:generateContent");
        assert_eq!(key, "se+cr/et=");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "compose this");
        assert_eq!(body["generationConfig"]["temperature"], 0.62);
        assert_eq!(body["generationConfig"]["topP"], 0.9);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 1500);
    }

    #[tokio::test]
    async fn blank_text_is_an_empty_response() {
        let (base, _) = mock_gemini(StatusCode::OK, text_reply(&["   \n "])).await;
        let err = GeminiClient::new(base, "m").generate("x", "k").await.unwrap_err();
        assert!(matches!(err, GeminiError::EmptyResponse));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);

        let (base, _) = mock_gemini(StatusCode::OK, json!({})).await;
        let err = GeminiClient::new(base, "m").generate("x", "k").await.unwrap_err();
        assert!(matches!(err, GeminiError::EmptyResponse));
    }

    #[tokio::test]
    async fn provider_error_carries_status_and_message() {
        let reply = json!({ "error": { "code": 429, "message": "Quota exceeded.", "status": "RESOURCE_EXHAUSTED" } });
        let (base, captured) = mock_gemini(StatusCode::TOO_MANY_REQUESTS, reply).await;
        let err = GeminiClient::new(base, "m").generate("x", "k").await.unwrap_err();
        assert_eq!(err.to_string(), "Quota exceeded.");
        assert_eq!(err.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(captured.lock().len(), 1, "no retry after a failed attempt");
    }

    #[tokio::test]
    async fn unreachable_provider_maps_to_bad_gateway() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = GeminiClient::new(format!("http://{addr}"), "m").generate("x", "k").await.unwrap_err();
        assert!(matches!(err, GeminiError::Provider { status: None, .. }));
        assert_eq!(err.status_code(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn model_path_is_not_double_prefixed() {
        let client = GeminiClient::new("https://example.test/v1beta/", "models/gemini-x");
        let url = client.endpoint().unwrap();
        assert_eq!(url.as_str(), "https://example.test/v1beta/models/gemini-x:generateContent");
        assert!(url.query().is_none());
    }
}
