//! TF-IDF vectorizer with cosine similarity.
//!
//! Refit on every call: the corpus is just the documents being compared.
//! Tokens are runs of two or more word characters, English stop words are
//! removed before n-grams are formed, IDF is smoothed
//! (`ln((1 + n) / (1 + df)) + 1`) and vectors are L2-normalized.
//!
//! Vectors are `BTreeMap`s so dot products sum in a fixed order and repeated
//! calls return bit-identical results.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TalentfitError};

static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

static STOP_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "a", "about", "above", "after", "again", "against", "all", "also", "am", "an", "and",
        "any", "are", "as", "at", "be", "because", "been", "before", "being", "below",
        "between", "both", "but", "by", "can", "could", "did", "do", "does", "doing", "down",
        "during", "each", "eg", "etc", "few", "for", "from", "further", "had", "has", "have",
        "having", "he", "her", "here", "hers", "herself", "him", "himself", "his", "how", "ie",
        "if", "in", "into", "is", "it", "its", "itself", "just", "may", "me", "more", "most",
        "must", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once", "only",
        "or", "other", "our", "ours", "ourselves", "out", "over", "own", "per", "same", "she",
        "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
        "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
        "under", "until", "up", "us", "very", "via", "was", "we", "were", "what", "when",
        "where", "which", "while", "who", "whom", "why", "will", "with", "within", "would",
        "yet", "you", "your", "yours", "yourself", "yourselves",
    ]
    .into_iter()
    .collect()
});

/// TF-IDF vectorizer configuration.
#[derive(Debug, Clone)]
pub struct TfIdf {
    /// Keep at most this many terms, by corpus frequency.
    max_features: usize,
    /// Largest n-gram size (1 = unigrams only).
    max_ngram: usize,
}

impl Default for TfIdf {
    fn default() -> Self {
        Self {
            max_features: 1000,
            max_ngram: 2,
        }
    }
}

impl TfIdf {
    /// Create a vectorizer with the default settings (1000 features, 1–2 grams).
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the vocabulary cap.
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features.max(1);
        self
    }

    /// Override the largest n-gram size.
    pub fn with_max_ngram(mut self, max_ngram: usize) -> Self {
        self.max_ngram = max_ngram.max(1);
        self
    }

    /// Cosine similarity of two documents in `[0, 1]`.
    ///
    /// Fails when neither document yields a single term (empty or
    /// stop-word-only text).
    pub fn similarity(&self, a: &str, b: &str) -> Result<f64> {
        let vectors = self.fit_transform(&[a, b])?;
        Ok(dot(&vectors[0], &vectors[1]).clamp(0.0, 1.0))
    }

    /// Fit on `documents` and return one L2-normalized vector per document.
    pub fn fit_transform(&self, documents: &[&str]) -> Result<Vec<BTreeMap<String, f64>>> {
        let term_counts: Vec<BTreeMap<String, usize>> =
            documents.iter().map(|d| self.count_terms(d)).collect();

        let vocabulary = self.build_vocabulary(&term_counts);
        if vocabulary.is_empty() {
            return Err(TalentfitError::Similarity(
                "empty vocabulary; documents contain only stop words".to_string(),
            ));
        }

        let n_docs = documents.len() as f64;
        let idf: BTreeMap<&str, f64> = vocabulary
            .iter()
            .map(|term| {
                let df = term_counts.iter().filter(|c| c.contains_key(term.as_str())).count() as f64;
                (term.as_str(), ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0)
            })
            .collect();

        let vectors = term_counts
            .iter()
            .map(|counts| {
                let mut vector: BTreeMap<String, f64> = counts
                    .iter()
                    .filter_map(|(term, &count)| {
                        idf.get(term.as_str())
                            .map(|weight| (term.clone(), count as f64 * weight))
                    })
                    .collect();

                let norm = vector.values().map(|v| v * v).sum::<f64>().sqrt();
                if norm > 0.0 {
                    for value in vector.values_mut() {
                        *value /= norm;
                    }
                }
                vector
            })
            .collect();

        Ok(vectors)
    }

    /// Count unigrams and higher n-grams for one document.
    fn count_terms(&self, document: &str) -> BTreeMap<String, usize> {
        let lowered = document.to_lowercase();
        let tokens: Vec<&str> = TOKEN_PATTERN
            .find_iter(&lowered)
            .map(|m| m.as_str())
            .filter(|t| !STOP_WORDS.contains(t))
            .collect();

        let mut counts = BTreeMap::new();
        for n in 1..=self.max_ngram {
            for window in tokens.windows(n) {
                *counts.entry(window.join(" ")).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Select the `max_features` most frequent terms across the corpus.
    fn build_vocabulary(&self, term_counts: &[BTreeMap<String, usize>]) -> BTreeSet<String> {
        let mut totals: BTreeMap<&str, usize> = BTreeMap::new();
        for counts in term_counts {
            for (term, count) in counts {
                *totals.entry(term.as_str()).or_insert(0) += count;
            }
        }

        let mut ranked: Vec<(&str, usize)> = totals.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        ranked
            .into_iter()
            .take(self.max_features)
            .map(|(term, _)| term.to_string())
            .collect()
    }
}

/// Dot product of two sparse vectors.
fn dot(a: &BTreeMap<String, f64>, b: &BTreeMap<String, f64>) -> f64 {
    a.iter()
        .filter_map(|(term, x)| b.get(term).map(|y| x * y))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_documents() {
        let tfidf = TfIdf::new();
        let sim = tfidf
            .similarity("rust systems engineer", "rust systems engineer")
            .unwrap();
        assert!((sim - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents() {
        let sim = TfIdf::new().similarity("python django", "kubernetes terraform").unwrap();
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_partial_overlap_is_between_bounds() {
        let sim = TfIdf::new()
            .similarity("python react developer", "python backend developer")
            .unwrap();
        assert!(sim > 0.0 && sim < 1.0, "got {sim}");
    }

    #[test]
    fn test_stop_words_only_fails() {
        let err = TfIdf::new().similarity("the and of", "").unwrap_err();
        assert!(matches!(err, TalentfitError::Similarity(_)));
    }

    #[test]
    fn test_one_empty_document_scores_zero() {
        let sim = TfIdf::new().similarity("python developer", "").unwrap();
        assert_eq!(sim, 0.0);
    }

    #[test]
    fn test_bigrams_are_counted() {
        let tfidf = TfIdf::new();
        let counts = tfidf.count_terms("Machine learning engineer");
        assert_eq!(counts.get("machine learning"), Some(&1));
        assert_eq!(counts.get("learning engineer"), Some(&1));
        assert_eq!(counts.get("machine"), Some(&1));
    }

    #[test]
    fn test_max_features_caps_vocabulary() {
        let tfidf = TfIdf::new().with_max_features(2).with_max_ngram(1);
        let counts = vec![tfidf.count_terms("rust rust rust go go python")];
        let vocab = tfidf.build_vocabulary(&counts);
        assert_eq!(vocab.len(), 2);
        assert!(vocab.contains("rust"));
        assert!(vocab.contains("go"));
    }

    #[test]
    fn test_repeatable() {
        let tfidf = TfIdf::new();
        let a = "Senior Python engineer with Django, PostgreSQL and AWS experience";
        let b = "We need a Python engineer comfortable with AWS and Docker";
        let first = tfidf.similarity(a, b).unwrap();
        let second = tfidf.similarity(a, b).unwrap();
        assert_eq!(first.to_bits(), second.to_bits());
    }
}
