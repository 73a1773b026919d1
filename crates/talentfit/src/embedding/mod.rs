//! Embedding providers for semantic similarity.
//!
//! Embeddings are optional: without an embedder the scorer measures semantic
//! similarity lexically. Providers are built once and shared read-only.
//!
//! # Providers
//!
//! - **Ollama**: local models, no API key needed (requires Ollama running)
//! - **Hashing**: deterministic bag-of-words vectors, always available
//! - **Mock**: predictable vectors for tests, optionally failing
//!
//! # Example
//!
//! ```no_run
//! use talentfit::{OllamaEmbedder, RelevanceScorer};
//!
//! let scorer = RelevanceScorer::new()
//!     .with_embedder(OllamaEmbedder::new().unwrap());
//! ```

mod hashing;
mod mock;
mod ollama;
mod provider;

use std::sync::Arc;

pub use hashing::{HashingEmbedder, DEFAULT_DIMENSIONS};
pub use mock::MockEmbedder;
pub use ollama::{OllamaEmbedder, DEFAULT_OLLAMA_MODEL};
pub use provider::{cosine_similarity, Embedder};

use crate::config::{EmbeddingConfig, EmbeddingProvider};
use crate::error::Result;

/// Build the embedder a configuration asks for (`None` for lexical-only).
pub fn from_config(config: &EmbeddingConfig) -> Result<Option<Arc<dyn Embedder>>> {
    let embedder: Option<Arc<dyn Embedder>> = match config.provider {
        EmbeddingProvider::None => None,
        EmbeddingProvider::Hashing => {
            Some(Arc::new(HashingEmbedder::with_dimensions(config.dimensions)?))
        }
        EmbeddingProvider::Ollama => Some(Arc::new(OllamaEmbedder::with_model(&config.model)?)),
    };
    Ok(embedder)
}
