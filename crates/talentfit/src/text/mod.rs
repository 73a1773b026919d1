//! Text utilities shared by the structurers and the scorer.
//!
//! - [`TextNormalizer`]: whitespace collapsing and boilerplate-line removal
//! - [`fuzzy`]: indel-based string similarity on a 0–100 scale
//! - [`TfIdf`]: fit-per-call TF-IDF vectors with cosine similarity

pub mod fuzzy;
mod normalize;
mod tfidf;

pub use normalize::{strip_posting_artifacts, TextNormalizer};
pub use tfidf::TfIdf;

/// Title-case a phrase: the first letter after any non-letter is uppercased,
/// every other letter lowercased (`"full-time"` → `"Full-Time"`).
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for c in text.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}

/// Check whether `term` occurs in `haystack` without alphanumeric characters
/// directly on either side. Both inputs are expected to be lower-cased.
pub fn contains_token(haystack: &str, term: &str) -> bool {
    if term.is_empty() {
        return false;
    }
    haystack.match_indices(term).any(|(start, matched)| {
        let end = start + matched.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        before_ok && after_ok
    })
}

/// Round a score to two decimals for reporting.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("full-time"), "Full-Time");
        assert_eq!(title_case("software engineer"), "Software Engineer");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_contains_token_respects_boundaries() {
        assert!(contains_token("i write go daily", "go"));
        assert!(contains_token("go", "go"));
        assert!(contains_token("skills: c#, sql", "c#"));
        assert!(!contains_token("a good engineer", "go"));
        assert!(!contains_token("mysql admin", "sql"));
        assert!(contains_token("mysql and sql", "sql"));
    }

    #[test]
    fn test_round2() {
        assert_eq!(round2(66.666_666), 66.67);
        assert_eq!(round2(50.0), 50.0);
    }
}
