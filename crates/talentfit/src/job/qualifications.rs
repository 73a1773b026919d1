//! Educational qualification lines.

use once_cell::sync::Lazy;
use regex::Regex;

static QUALIFICATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // Degree words
        Regex::new(r"(?i)\b(?:bachelor|master|phd|doctorate|degree|diploma|certification)").unwrap(),
        // Abbreviations
        Regex::new(r"(?i)\b(?:b\.?s\.?|m\.?s\.?|ph\.?d\.?|mba|bca|mca)\b").unwrap(),
        // Fields
        Regex::new(
            r"(?i)\b(?:computer science|engineering|mathematics|statistics|business|information technology|data science)\b",
        )
        .unwrap(),
    ]
});

/// Whether a line states an educational qualification.
pub fn is_qualification_line(line: &str) -> bool {
    QUALIFICATION_PATTERNS.iter().any(|p| p.is_match(line))
}

/// Every trimmed line that mentions a degree, abbreviation, or field, verbatim
/// and in order. Duplicates are kept.
pub fn extract_qualifications(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && is_qualification_line(line))
        .map(str::to_string)
        .collect()
}
