//! Mock embedder for testing.

use std::collections::HashMap;

use crate::error::{Result, TalentfitError};

use super::provider::Embedder;

/// Mock embedder that returns predictable vectors.
///
/// Texts registered with [`MockEmbedder::with_vector`] get that vector; any
/// other text gets `[1.0, 0.0]`. A failing mock rejects every call so
/// fallback paths can be exercised.
#[derive(Debug, Clone, Default)]
pub struct MockEmbedder {
    vectors: HashMap<String, Vec<f32>>,
    fail: bool,
}

impl MockEmbedder {
    /// Create a mock that succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose every call fails.
    pub fn failing() -> Self {
        Self {
            vectors: HashMap::new(),
            fail: true,
        }
    }

    /// Return `vector` whenever exactly `text` is embedded.
    pub fn with_vector(mut self, text: impl Into<String>, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.into(), vector);
        self
    }
}

impl Embedder for MockEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>> {
        if self.fail {
            return Err(TalentfitError::Embedding("mock embedder failure".to_string()));
        }
        Ok(self
            .vectors
            .get(text)
            .cloned()
            .unwrap_or_else(|| vec![1.0, 0.0]))
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_and_default_vectors() {
        let mock = MockEmbedder::new().with_vector("job", vec![0.0, 1.0]);
        assert_eq!(mock.embed("job").unwrap(), vec![0.0, 1.0]);
        assert_eq!(mock.embed("anything else").unwrap(), vec![1.0, 0.0]);
    }

    #[test]
    fn test_failing_mock() {
        assert!(MockEmbedder::failing().embed("job").is_err());
    }
}
