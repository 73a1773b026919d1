//! Whitespace collapsing and header/footer suppression.

use once_cell::sync::Lazy;
use regex::Regex;

// Whole-line boilerplate, matched against the lower-cased line.
static BOILERPLATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d+$").unwrap(),                   // Page numbers
        Regex::new(r"^page \d+ of \d+$").unwrap(),       // "Page 2 of 3"
        Regex::new(r"^confidential$").unwrap(),
        Regex::new(r"^draft$").unwrap(),
        Regex::new(r"^internal use only$").unwrap(),
        Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").unwrap(), // US/EU date
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap(),     // ISO date
    ]
});

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static POSTING_ARTIFACTS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)apply now|apply here|click here to apply").unwrap());

/// Normalizes extracted document text.
///
/// Every line has its whitespace runs collapsed to a single space and is
/// trimmed; boilerplate lines (page numbers, "confidential", bare dates …)
/// are dropped. Pure and infallible.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextNormalizer {
    keep_paragraph_breaks: bool,
}

impl TextNormalizer {
    /// Create a normalizer that drops blank lines.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep a single empty line wherever the input had one or more blank
    /// lines between paragraphs.
    pub fn keep_paragraph_breaks(mut self) -> Self {
        self.keep_paragraph_breaks = true;
        self
    }

    /// Normalize `text`. Empty input yields empty output.
    pub fn normalize(&self, text: &str) -> String {
        let mut lines: Vec<String> = Vec::new();

        for raw_line in text.lines() {
            let line = WHITESPACE_RUN.replace_all(raw_line, " ");
            let line = line.trim();

            if line.is_empty() {
                if self.keep_paragraph_breaks && lines.last().is_some_and(|l| !l.is_empty()) {
                    lines.push(String::new());
                }
                continue;
            }

            if Self::is_boilerplate(line) {
                continue;
            }

            lines.push(line.to_string());
        }

        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }

        lines.join("\n")
    }

    /// Check whether a trimmed line is a header/footer artifact.
    pub fn is_boilerplate(line: &str) -> bool {
        let lower = line.to_lowercase();

        if BOILERPLATE_PATTERNS.iter().any(|p| p.is_match(&lower)) {
            return true;
        }

        // Single-digit lines left behind by page furniture
        line.chars().count() == 1 && line.chars().all(|c| c.is_ascii_digit())
    }
}

/// Remove job-board call-to-action artifacts ("Apply now", "Click here to
/// apply") from posting text.
pub fn strip_posting_artifacts(text: &str) -> String {
    POSTING_ARTIFACTS.replace_all(text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input() {
        assert_eq!(TextNormalizer::new().normalize(""), "");
        assert_eq!(TextNormalizer::new().normalize("   \n\t\n"), "");
    }

    #[test]
    fn test_collapses_whitespace() {
        let out = TextNormalizer::new().normalize("  Senior   Rust\tEngineer  \n\n  Berlin ");
        assert_eq!(out, "Senior Rust Engineer\nBerlin");
    }

    #[test]
    fn test_drops_boilerplate_lines() {
        let text = "Jane Doe\n3\nPage 2 of 4\nCONFIDENTIAL\nDraft\nInternal Use Only\n\
                    12/31/2023\n2024-01-15\nPython developer";
        let out = TextNormalizer::new().normalize(text);
        assert_eq!(out, "Jane Doe\nPython developer");
    }

    #[test]
    fn test_keeps_lines_that_merely_contain_boilerplate_words() {
        let out = TextNormalizer::new().normalize("Handled confidential data\n2019 - 2023");
        assert_eq!(out, "Handled confidential data\n2019 - 2023");
    }

    #[test]
    fn test_paragraph_breaks() {
        let text = "Requirements:\n- Python\n\n\n\nNice to have:\n- Docker\n\n";
        let out = TextNormalizer::new().keep_paragraph_breaks().normalize(text);
        assert_eq!(out, "Requirements:\n- Python\n\nNice to have:\n- Docker");

        let flat = TextNormalizer::new().normalize(text);
        assert_eq!(flat, "Requirements:\n- Python\nNice to have:\n- Docker");
    }

    #[test]
    fn test_strip_posting_artifacts() {
        assert_eq!(
            strip_posting_artifacts("Great role. Apply now! Or CLICK HERE TO APPLY."),
            "Great role. ! Or ."
        );
    }
}
