use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::constants::{DEFAULT_EMBEDDING_API_BASE, DEFAULT_REQUEST_TIMEOUT_SECS};

use super::error::EmbeddingError;

/// Retrieves embedding vectors for free text.
pub trait Embedder: Send + Sync {
    /// Embeds `text` with `model`, returning one vector.
    fn embed(
        &self,
        text: &str,
        model: &str,
    ) -> impl std::future::Future<Output = Result<Vec<f32>, EmbeddingError>> + Send;
}

/// Embedding client for OpenAI-compatible `/embeddings` endpoints.
#[derive(Clone)]
pub struct OpenAiEmbedder {
    client: reqwest::Client,
    api_base: String,
    api_key: String,
    timeout_secs: u64,
}

impl std::fmt::Debug for OpenAiEmbedder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAiEmbedder")
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

#[derive(Serialize)]
struct EmbeddingRequest<'a> {
    input: &'a str,
    model: &'a str,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl OpenAiEmbedder {
    /// Creates a client against the default API base.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_api_base(api_key, DEFAULT_EMBEDDING_API_BASE)
    }

    /// Creates a client against a custom OpenAI-compatible API base.
    pub fn with_api_base(api_key: impl Into<String>, api_base: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Sets the per-call timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Returns the configured API base.
    pub fn api_base(&self) -> &str {
        &self.api_base
    }
}

impl Embedder for OpenAiEmbedder {
    async fn embed(&self, text: &str, model: &str) -> Result<Vec<f32>, EmbeddingError> {
        let url = format!("{}/embeddings", self.api_base);
        let body = EmbeddingRequest { input: text, model };

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(Duration::from_secs(self.timeout_secs))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    EmbeddingError::Timeout {
                        seconds: self.timeout_secs,
                    }
                } else {
                    EmbeddingError::RequestFailed {
                        message: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(EmbeddingError::HttpStatus {
                status: status.as_u16(),
            });
        }

        let parsed: EmbeddingResponse =
            response
                .json()
                .await
                .map_err(|e| EmbeddingError::RequestFailed {
                    message: e.to_string(),
                })?;

        let vector = parsed
            .data
            .into_iter()
            .next()
            .map(|entry| entry.embedding)
            .ok_or(EmbeddingError::EmptyResponse)?;

        debug!(model, dims = vector.len(), "Embedding retrieved");

        Ok(vector)
    }
}
