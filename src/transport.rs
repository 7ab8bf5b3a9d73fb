use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::warn;

use crate::models::{BuilderPayload, GenerateReply};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SubmitError {
    /// The request never produced an HTTP response.
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-2xx status.
    #[error("{0}")]
    Rejected(String),
}

/// How the form controller reaches `/api/generate`.
#[async_trait]
pub trait GenerateTransport: Send + Sync {
    async fn send(&self, payload: &BuilderPayload) -> Result<GenerateReply, SubmitError>;
}

pub struct HttpTransport {
    client: Client,
    endpoint: String,
}

impl HttpTransport {
    /// `base_url` is the server origin, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!("{}/api/generate", base_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl GenerateTransport for HttpTransport {
    async fn send(&self, payload: &BuilderPayload) -> Result<GenerateReply, SubmitError> {
        let response = self.client
            .post(&self.endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        // An unreadable body is treated as an empty reply.
        let reply: GenerateReply = match response.json().await {
            Ok(reply) => reply,
            Err(e) => {
                warn!("generate reply was not JSON ({}): {}", status, e);
                GenerateReply::default()
            }
        };

        if !status.is_success() {
            return Err(SubmitError::Rejected(
                reply.error.unwrap_or_else(|| "Generation request failed.".to_string()),
            ));
        }
        Ok(reply)
    }
}
