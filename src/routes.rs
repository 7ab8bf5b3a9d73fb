use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use bytes::Bytes;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::{Any, CorsLayer};
use uuid::Uuid;

use crate::{
    composer::build_instruction,
    config::Config,
    gemini::{GeminiError, PromptGenerator},
    models::{ErrorResponse, GenerateResponse},
    normalize::{normalize_payload, validate, ValidationError},
    site::{self, SiteConfig},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<dyn PromptGenerator>,
    pub site: Arc<SiteConfig>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Missing GEMINI_API_KEY.")]
    MissingCredential,
    #[error("Invalid JSON body.")]
    InvalidJson,
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Upstream(#[from] GeminiError),
    #[error("Method not allowed.")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::InvalidJson | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(e) => e.status_code(),
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorResponse { error: self.to_string() });
        (self.status(), body).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/generate", post(generate_prompt).get(generate_not_allowed))
        .route("/", get(site::index))
        .route("/sitemap.xml", get(site::sitemap))
        .route("/icon.svg", get(site::icon))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

pub async fn generate_prompt(State(state): State<AppState>, body: Bytes) -> Result<Json<GenerateResponse>, ApiError> {
    let request_id = Uuid::new_v4();
    let Some(api_key) = state.config.api_key.as_deref() else {
        tracing::error!(%request_id, "GEMINI_API_KEY is not configured");
        return Err(ApiError::MissingCredential);
    };

    let payload: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::warn!(%request_id, "rejecting malformed body: {}", e);
        ApiError::InvalidJson
    })?;

    let input = normalize_payload(&payload);
    validate(&input)?;

    tracing::info!(%request_id, "🚀 Generating prompt for project: {}", input.project_name);
    let instruction = build_instruction(&input);

    match state.generator.generate(&instruction, api_key).await {
        Ok(prompt) => {
            tracing::info!(%request_id, "✅ Prompt generated ({} chars)", prompt.len());
            Ok(Json(GenerateResponse { prompt, model: state.config.model.clone() }))
        }
        Err(e) => {
            tracing::error!(%request_id, "❌ Gemini request failed: {}", e);
            Err(e.into())
        }
    }
}

pub async fn generate_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
