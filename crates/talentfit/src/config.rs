//! Configuration for scoring and embedding.
//!
//! Every field has a default, so a JSON file only needs the keys it changes:
//!
//! ```json
//! { "scoring": { "verdict": { "high": 85.0 } }, "embedding": { "provider": "hashing" } }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TalentfitError};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TalentfitConfig {
    /// Relevance scoring parameters.
    pub scoring: ScoringConfig,
    /// Semantic similarity backend.
    pub embedding: EmbeddingConfig,
}

impl TalentfitConfig {
    /// Load a JSON configuration file and validate it.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| TalentfitError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&contents)
    }

    /// Parse a JSON configuration string and validate it.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        self.scoring.validate()?;
        if self.embedding.dimensions == 0 {
            return Err(TalentfitError::Config(
                "embedding.dimensions must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// SCORING
// =============================================================================

/// Weights of the four component scores in the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentWeights {
    pub hard: f64,
    pub semantic: f64,
    pub education: f64,
    pub experience: f64,
}

impl Default for ComponentWeights {
    fn default() -> Self {
        Self {
            hard: 0.6,
            semantic: 0.2,
            education: 0.1,
            experience: 0.1,
        }
    }
}

/// Hard-match blend and per-skill credit tiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HardMatchConfig {
    /// Weight of the TF-IDF cosine similarity (on its 0-1 scale).
    pub lexical_weight: f64,
    /// Weight of the skill coverage score.
    pub coverage_weight: f64,
    /// Share of must-have coverage when both categories are present.
    pub must_have_weight: f64,
    /// Share of nice-to-have coverage when both categories are present.
    pub nice_to_have_weight: f64,
    /// Credit for a skill in the résumé's skill set.
    pub exact_credit: f64,
    /// Credit for a skill appearing anywhere in the résumé text.
    pub substring_credit: f64,
    /// Credit for a fuzzy skill match.
    pub fuzzy_credit: f64,
    /// Minimum fuzzy ratio for `fuzzy_credit`.
    pub fuzzy_threshold: u8,
    /// Coverage at or above this earns `high_coverage_bonus`.
    pub high_coverage: f64,
    pub high_coverage_bonus: f64,
    /// Coverage at or above this (but below `high_coverage`) earns `good_coverage_bonus`.
    pub good_coverage: f64,
    pub good_coverage_bonus: f64,
}

impl Default for HardMatchConfig {
    fn default() -> Self {
        Self {
            lexical_weight: 0.1,
            coverage_weight: 0.9,
            must_have_weight: 0.7,
            nice_to_have_weight: 0.3,
            exact_credit: 1.0,
            substring_credit: 0.8,
            fuzzy_credit: 0.6,
            fuzzy_threshold: 80,
            high_coverage: 90.0,
            high_coverage_bonus: 5.0,
            good_coverage: 80.0,
            good_coverage_bonus: 3.0,
        }
    }
}

/// Bonuses applied to the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BonusConfig {
    /// Added when no skill is missing and the hard match reaches `complete_skills_min_hard`.
    pub complete_skills: f64,
    pub complete_skills_min_hard: f64,
    /// Added when the semantic score reaches `semantic_min`.
    pub semantic: f64,
    pub semantic_min: f64,
}

impl Default for BonusConfig {
    fn default() -> Self {
        Self {
            complete_skills: 10.0,
            complete_skills_min_hard: 80.0,
            semantic: 5.0,
            semantic_min: 70.0,
        }
    }
}

/// Overall-score cut-offs for the verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerdictThresholds {
    pub high: f64,
    pub medium: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            high: 80.0,
            medium: 55.0,
        }
    }
}

/// Relevance scoring parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub weights: ComponentWeights,
    pub hard_match: HardMatchConfig,
    pub bonuses: BonusConfig,
    pub verdict: VerdictThresholds,
    /// Minimum fuzzy ratio for a job skill to count as present.
    pub missing_fuzzy_threshold: u8,
    /// Cap on the number of suggestions.
    pub max_suggestions: usize,
    /// Résumés shorter than this (in characters) get a "more detail" suggestion.
    pub short_resume_chars: usize,
    /// Overall scores below this get the "quantify achievements" suggestions.
    pub achievement_hint_below: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ComponentWeights::default(),
            hard_match: HardMatchConfig::default(),
            bonuses: BonusConfig::default(),
            verdict: VerdictThresholds::default(),
            missing_fuzzy_threshold: 75,
            max_suggestions: 5,
            short_resume_chars: 500,
            achievement_hint_below: 70.0,
        }
    }
}

impl ScoringConfig {
    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        let weights = [w.hard, w.semantic, w.education, w.experience];
        if weights.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(TalentfitError::Config(
                "component weights must be finite and non-negative".to_string(),
            ));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(TalentfitError::Config(
                "component weights must not all be zero".to_string(),
            ));
        }

        let h = &self.hard_match;
        let blend = [
            h.lexical_weight,
            h.coverage_weight,
            h.must_have_weight,
            h.nice_to_have_weight,
            h.exact_credit,
            h.substring_credit,
            h.fuzzy_credit,
        ];
        if blend.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(TalentfitError::Config(
                "hard_match weights and credits must be finite and non-negative".to_string(),
            ));
        }
        if h.fuzzy_threshold > 100 || self.missing_fuzzy_threshold > 100 {
            return Err(TalentfitError::Config(
                "fuzzy thresholds must be within 0-100".to_string(),
            ));
        }

        if self.verdict.medium > self.verdict.high {
            return Err(TalentfitError::Config(format!(
                "verdict.medium ({}) must not exceed verdict.high ({})",
                self.verdict.medium, self.verdict.high
            )));
        }

        Ok(())
    }
}

// =============================================================================
// EMBEDDING
// =============================================================================

/// Which semantic similarity backend to build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingProvider {
    /// No embedder: semantic similarity is lexical (TF-IDF).
    #[default]
    None,
    /// Local hashing embedder.
    Hashing,
    /// Local Ollama server.
    Ollama,
}

impl std::str::FromStr for EmbeddingProvider {
    type Err = TalentfitError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "none" | "lexical" | "tfidf" => Ok(EmbeddingProvider::None),
            "hashing" => Ok(EmbeddingProvider::Hashing),
            "ollama" => Ok(EmbeddingProvider::Ollama),
            other => Err(TalentfitError::Config(format!(
                "unknown embedding provider '{}' (expected none, hashing or ollama)",
                other
            ))),
        }
    }
}

/// Semantic similarity backend settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub provider: EmbeddingProvider,
    /// Model name (Ollama only).
    pub model: String,
    /// Vector width (hashing only).
    pub dimensions: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            provider: EmbeddingProvider::None,
            model: crate::embedding::DEFAULT_OLLAMA_MODEL.to_string(),
            dimensions: crate::embedding::DEFAULT_DIMENSIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TalentfitConfig::default();
        assert_eq!(config.scoring.weights.hard, 0.6);
        assert_eq!(config.scoring.verdict.high, 80.0);
        assert_eq!(config.scoring.verdict.medium, 55.0);
        assert_eq!(config.scoring.max_suggestions, 5);
        assert_eq!(config.embedding.provider, EmbeddingProvider::None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = TalentfitConfig::from_json(
            r#"{"scoring": {"verdict": {"medium": 60.0}}, "embedding": {"provider": "hashing"}}"#,
        )
        .unwrap();
        assert_eq!(config.scoring.verdict.medium, 60.0);
        assert_eq!(config.scoring.verdict.high, 80.0);
        assert_eq!(config.scoring.hard_match.fuzzy_threshold, 80);
        assert_eq!(config.embedding.provider, EmbeddingProvider::Hashing);
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(TalentfitConfig::from_json("{}").unwrap(), TalentfitConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = TalentfitConfig::from_json(r#"{"scoring": {"verdict": {"medium": 90.0}}}"#)
            .unwrap_err();
        assert!(matches!(err, TalentfitError::Config(_)));

        let err = TalentfitConfig::from_json(r#"{"scoring": {"weights": {"hard": -1.0}}}"#)
            .unwrap_err();
        assert!(matches!(err, TalentfitError::Config(_)));

        let err = TalentfitConfig::from_json(r#"{"embedding": {"dimensions": 0}}"#).unwrap_err();
        assert!(matches!(err, TalentfitError::Config(_)));
    }

    #[test]
    fn test_malformed_json() {
        let err = TalentfitConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, TalentfitError::Json(_)));
    }

    #[test]
    fn test_provider_from_str() {
        assert_eq!("Ollama".parse::<EmbeddingProvider>().unwrap(), EmbeddingProvider::Ollama);
        assert_eq!("tfidf".parse::<EmbeddingProvider>().unwrap(), EmbeddingProvider::None);
        assert!("bert".parse::<EmbeddingProvider>().is_err());
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("talentfit.json");
        std::fs::write(&path, r#"{"scoring": {"max_suggestions": 3}}"#).unwrap();
        let config = TalentfitConfig::from_file(&path).unwrap();
        assert_eq!(config.scoring.max_suggestions, 3);

        let missing = TalentfitConfig::from_file(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(missing, TalentfitError::Io { .. }));
    }
}
