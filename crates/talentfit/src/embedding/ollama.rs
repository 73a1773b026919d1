//! Ollama embedding provider.
//!
//! Runs against a local Ollama server; no API key needed.
//! Install from: https://ollama.ai

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::{Result, TalentfitError};

use super::provider::Embedder;

/// Default Ollama embeddings endpoint.
const DEFAULT_API_URL: &str = "http://localhost:11434/api/embeddings";

/// Default embedding model. Pull it with `ollama pull nomic-embed-text`.
pub const DEFAULT_OLLAMA_MODEL: &str = "nomic-embed-text";

/// Embeddings from a local Ollama server.
pub struct OllamaEmbedder {
    client: Client,
    api_url: String,
    model: String,
}

impl OllamaEmbedder {
    /// Create an embedder for the default model.
    pub fn new() -> Result<Self> {
        Self::with_model(DEFAULT_OLLAMA_MODEL)
    }

    /// Create an embedder for a specific model.
    ///
    /// `OLLAMA_HOST` overrides the default `http://localhost:11434`.
    pub fn with_model(model: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| TalentfitError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let api_url = std::env::var("OLLAMA_HOST")
            .map(|host| format!("{}/api/embeddings", host.trim_end_matches('/')))
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Ok(Self {
            client,
            api_url,
            model: model.into(),
        })
    }

    /// Point the embedder at a different endpoint.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Model in use.
    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

impl Embedder for OllamaEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let body = json!({
            "model": self.model,
            "prompt": text,
        });

        let response = self
            .client
            .post(&self.api_url)
            .headers(self.build_headers())
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    TalentfitError::Embedding(
                        "Failed to connect to Ollama. Is it running? Start with: ollama serve"
                            .to_string(),
                    )
                } else {
                    TalentfitError::Embedding(format!("Ollama request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();

            if error_text.contains("not found") {
                return Err(TalentfitError::Embedding(format!(
                    "Model '{}' not found. Pull it with: ollama pull {}",
                    self.model, self.model
                )));
            }

            return Err(TalentfitError::Embedding(format!(
                "Ollama error ({}): {}",
                status, error_text
            )));
        }

        let parsed: EmbeddingResponse = response.json().map_err(|e| {
            TalentfitError::Embedding(format!("Failed to parse Ollama response: {}", e))
        })?;

        if parsed.embedding.is_empty() {
            return Err(TalentfitError::Embedding(format!(
                "Model '{}' returned an empty embedding",
                self.model
            )));
        }

        debug!(model = %self.model, dimensions = parsed.embedding.len(), "ollama embedding");
        Ok(parsed.embedding)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

/// Ollama embeddings response.
#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    #[serde(default)]
    embedding: Vec<f32>,
}
