//! Offline bag-of-words embedder using the hashing trick.

use once_cell::sync::Lazy;
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::error::{Result, TalentfitError};

use super::provider::Embedder;

/// Default vector width.
pub const DEFAULT_DIMENSIONS: usize = 384;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w\w+").unwrap());

/// Deterministic local embedder.
///
/// Each lower-cased word (and each adjacent word pair) is hashed to a signed
/// bucket; the counts are L2-normalized. Needs no network or model files, so
/// it is always available.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dimensions: usize,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self {
            dimensions: DEFAULT_DIMENSIONS,
        }
    }
}

impl HashingEmbedder {
    /// Create an embedder with [`DEFAULT_DIMENSIONS`] buckets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an embedder with `dimensions` buckets.
    pub fn with_dimensions(dimensions: usize) -> Result<Self> {
        if dimensions == 0 {
            return Err(TalentfitError::Config(
                "embedding dimensions must be positive".to_string(),
            ));
        }
        Ok(Self { dimensions })
    }

    /// Vector width.
    pub fn dimensions(&self) -> usize {
        self.dimensions
    }

    fn bucket(&self, feature: &str) -> (usize, f32) {
        let digest = Sha256::digest(feature.as_bytes());
        let mut index_bytes = [0u8; 8];
        index_bytes.copy_from_slice(&digest[..8]);
        let index = (u64::from_le_bytes(index_bytes) % self.dimensions as u64) as usize;
        let sign = if digest[8] & 1 == 0 { 1.0 } else { -1.0 };
        (index, sign)
    }
}

impl Embedder for HashingEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = WORD.find_iter(&lowered).map(|m| m.as_str()).collect();

        let mut vector = vec![0.0f32; self.dimensions];
        for word in &words {
            let (index, sign) = self.bucket(word);
            vector[index] += sign;
        }
        for pair in words.windows(2) {
            let (index, sign) = self.bucket(&format!("{} {}", pair[0], pair[1]));
            vector[index] += sign * 0.5;
        }

        let norm = vector.iter().map(|v| v * v).sum::<f32>().sqrt();
        if norm > 0.0 {
            for value in &mut vector {
                *value /= norm;
            }
        }

        Ok(vector)
    }

    fn name(&self) -> &str {
        "hashing"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::cosine_similarity;

    #[test]
    fn test_dimensions_and_norm() {
        let embedder = HashingEmbedder::with_dimensions(64).unwrap();
        let v = embedder.embed("Rust systems programmer").unwrap();
        assert_eq!(v.len(), 64);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_deterministic_and_case_insensitive() {
        let embedder = HashingEmbedder::new();
        assert_eq!(
            embedder.embed("Python Developer").unwrap(),
            embedder.embed("python developer").unwrap()
        );
    }

    #[test]
    fn test_related_text_is_closer() {
        let embedder = HashingEmbedder::new();
        let job = embedder.embed("python backend developer with django").unwrap();
        let close = embedder.embed("django and python backend work").unwrap();
        let far = embedder.embed("watercolor painting and pottery").unwrap();
        assert!(cosine_similarity(&job, &close) > cosine_similarity(&job, &far));
    }

    #[test]
    fn test_empty_text_is_zero_vector() {
        let v = HashingEmbedder::new().embed("").unwrap();
        assert!(v.iter().all(|x| *x == 0.0));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(HashingEmbedder::with_dimensions(0).is_err());
    }
}
