//! Semantic similarity strategies and the fallback chain.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::embedding::{cosine_similarity, Embedder};
use crate::error::{Result, TalentfitError};
use crate::text::TfIdf;

/// Backend label reported when no strategy produced a score.
pub const NEUTRAL_BACKEND: &str = "neutral";

/// Score for a blank description or when every strategy failed.
pub const NEUTRAL_SCORE: f64 = 50.0;

/// Measures how similar a résumé is to a job description, in `[0, 1]`.
pub trait SimilarityStrategy: Send + Sync {
    fn similarity(&self, resume: &str, description: &str) -> Result<f64>;

    /// Backend name reported in the breakdown.
    fn name(&self) -> &str;
}

/// TF-IDF cosine similarity.
#[derive(Debug, Clone, Default)]
pub struct LexicalSimilarity {
    tfidf: TfIdf,
}

impl LexicalSimilarity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tfidf(tfidf: TfIdf) -> Self {
        Self { tfidf }
    }
}

impl SimilarityStrategy for LexicalSimilarity {
    fn similarity(&self, resume: &str, description: &str) -> Result<f64> {
        self.tfidf.similarity(resume, description)
    }

    fn name(&self) -> &str {
        "lexical"
    }
}

/// Cosine similarity of embedding vectors.
#[derive(Clone)]
pub struct EmbeddingSimilarity {
    embedder: Arc<dyn Embedder>,
}

impl EmbeddingSimilarity {
    pub fn new(embedder: Arc<dyn Embedder>) -> Self {
        Self { embedder }
    }
}

impl SimilarityStrategy for EmbeddingSimilarity {
    fn similarity(&self, resume: &str, description: &str) -> Result<f64> {
        let resume_vector = self.embedder.embed(resume)?;
        let description_vector = self.embedder.embed(description)?;
        let similarity = cosine_similarity(&resume_vector, &description_vector);
        if !similarity.is_finite() {
            return Err(TalentfitError::Embedding(format!(
                "{} produced a non-finite similarity",
                self.embedder.name()
            )));
        }
        Ok(similarity)
    }

    fn name(&self) -> &str {
        self.embedder.name()
    }
}

/// Semantic score with the backend that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct SemanticScore {
    /// Percentage in `[0, 100]`.
    pub score: f64,
    pub backend: String,
}

impl SemanticScore {
    fn neutral() -> Self {
        Self {
            score: NEUTRAL_SCORE,
            backend: NEUTRAL_BACKEND.to_string(),
        }
    }
}

/// Runs the primary strategy, then lexical, then the neutral score.
pub struct SemanticMatcher {
    primary: Option<Arc<dyn SimilarityStrategy>>,
    lexical: LexicalSimilarity,
}

impl SemanticMatcher {
    /// Lexical-only matcher.
    pub fn lexical() -> Self {
        Self {
            primary: None,
            lexical: LexicalSimilarity::new(),
        }
    }

    /// Matcher whose primary strategy embeds both texts.
    pub fn with_embedder(embedder: Arc<dyn Embedder>) -> Self {
        Self::with_strategy(Arc::new(EmbeddingSimilarity::new(embedder)))
    }

    /// Matcher with an arbitrary primary strategy.
    pub fn with_strategy(strategy: Arc<dyn SimilarityStrategy>) -> Self {
        Self {
            primary: Some(strategy),
            lexical: LexicalSimilarity::new(),
        }
    }

    /// Name of the strategy tried first.
    pub fn primary_name(&self) -> &str {
        self.primary
            .as_deref()
            .map_or_else(|| self.lexical.name(), |s| s.name())
    }

    /// Score `resume` against `description`. Never fails.
    pub fn score(&self, resume: &str, description: &str) -> SemanticScore {
        if description.trim().is_empty() {
            debug!("blank job description, semantic score is neutral");
            return SemanticScore::neutral();
        }

        if let Some(primary) = &self.primary {
            match primary.similarity(resume, description) {
                Ok(similarity) if similarity.is_finite() => {
                    return Self::scored(similarity, primary.name());
                }
                Ok(similarity) => warn!(
                    backend = primary.name(),
                    similarity,
                    "semantic similarity is not finite, falling back to lexical"
                ),
                Err(e) => warn!(
                    backend = primary.name(),
                    error = %e,
                    "semantic similarity failed, falling back to lexical"
                ),
            }
        }

        match self.lexical.similarity(resume, description) {
            Ok(similarity) => Self::scored(similarity, self.lexical.name()),
            Err(e) => {
                warn!(error = %e, "lexical similarity failed, using neutral score");
                SemanticScore::neutral()
            }
        }
    }

    fn scored(similarity: f64, backend: &str) -> SemanticScore {
        SemanticScore {
            score: (similarity * 100.0).clamp(0.0, 100.0),
            backend: backend.to_string(),
        }
    }
}

impl Default for SemanticMatcher {
    fn default() -> Self {
        Self::lexical()
    }
}

impl std::fmt::Debug for SemanticMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticMatcher")
            .field("primary", &self.primary_name())
            .finish()
    }
}
