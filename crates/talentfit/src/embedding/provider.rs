//! Embedder trait and vector helpers.

use crate::error::Result;

/// Turns text into a dense vector.
///
/// Implementations must be thread-safe (Send + Sync) so one embedder can be
/// shared by every scorer behind an `Arc`.
pub trait Embedder: Send + Sync {
    /// Embed `text`.
    fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Provider name, reported in score breakdowns and logs.
    fn name(&self) -> &str;
}

/// Cosine similarity of two vectors.
///
/// Returns 0.0 for empty vectors, mismatched lengths, or a zero-norm side.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f64 {
    if a.is_empty() || a.len() != b.len() {
        return 0.0;
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;
    for (x, y) in a.iter().zip(b) {
        let (x, y) = (*x as f64, *y as f64);
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot / (norm_a.sqrt() * norm_b.sqrt())
}
