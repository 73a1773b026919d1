//! Degree mentions in résumé text.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// A degree phrase found on a single résumé line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationMention {
    /// The whole matched phrase, degree word through field.
    pub degree_text: String,
    /// Field of study (text after `in`/`of`, up to a comma or end of line).
    pub field: String,
    /// The trimmed line the mention came from.
    pub source_line: String,
}

// Spelled-out degree words first, then abbreviations.
static DEGREE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(
            r"(?i)\b(?:bachelor|master|phd|doctorate|diploma|certificate)s?\b.*?\b(?:in|of)\s+([^,\n]+)",
        )
        .unwrap(),
        Regex::new(r"(?i)\b(?:b\.?s\.?|m\.?s\.?|ph\.?d\.?|mba|bca|mca)\b.*?\b(?:in|of)\s+([^,\n]+)")
            .unwrap(),
    ]
});

/// Collect at most one mention per non-blank line.
pub fn extract_education(text: &str) -> Vec<EducationMention> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .filter_map(|line| {
            DEGREE_PATTERNS.iter().find_map(|pattern| {
                pattern.captures(line).map(|caps| EducationMention {
                    degree_text: caps[0].trim().to_string(),
                    field: caps[1].trim().to_string(),
                    source_line: line.to_string(),
                })
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spelled_out_degree() {
        let mentions = extract_education("Bachelor in Computer Science, MIT, 2018");
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].degree_text, "Bachelor in Computer Science");
        assert_eq!(mentions[0].field, "Computer Science");
        assert_eq!(mentions[0].source_line, "Bachelor in Computer Science, MIT, 2018");
    }

    #[test]
    fn test_abbreviated_degree() {
        let mentions = extract_education("M.S. in Statistics");
        assert_eq!(mentions.len(), 1);
        assert_eq!(mentions[0].field, "Statistics");
    }

    #[test]
    fn test_of_connector() {
        let mentions = extract_education("Master of Business Administration");
        assert_eq!(mentions[0].field, "Business Administration");
    }

    #[test]
    fn test_one_mention_per_line() {
        let mentions = extract_education("PhD in Physics and MBA in Finance\nDiploma of Design");
        assert_eq!(mentions.len(), 2);
        assert_eq!(mentions[0].field, "Physics and MBA in Finance");
        assert_eq!(mentions[1].field, "Design");
    }

    #[test]
    fn test_requires_connector_word() {
        assert!(extract_education("Bachelor degree").is_empty());
        assert!(extract_education("Worked on masterful things").is_empty());
        assert!(extract_education("").is_empty());
    }
}
