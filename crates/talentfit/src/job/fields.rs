//! Scalar posting fields: title, location, salary, job type, experience.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::{COMMON_TITLES, JOB_TYPES};
use crate::text::title_case;

/// Sentinel for a field no pattern found.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Sentinel title when nothing matched.
pub const UNKNOWN_POSITION: &str = "Unknown Position";

// Only the first lines of a posting are searched for a title.
const TITLE_SCAN_LINES: usize = 10;

// =============================================================================
// PATTERNS
// =============================================================================

// Each title pattern captures the title in group 1.
static TITLE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\b(?:position|role|job):\s*([^,\n]+)").unwrap(),
        Regex::new(r"(?i)\b(?:we are looking for|seeking|hiring)\s+([^,\n]+)").unwrap(),
        Regex::new(
            r"^([A-Z][^,\n]{0,50}?\s(?i:developer|engineer|analyst|manager|specialist|scientist|designer|architect)s?)\b",
        )
        .unwrap(),
    ]
});

// Location patterns; a labelled value returns its capture, the rest the match.
static LOCATION_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\b(?:location|based in|office in):\s*([^,\n]+)").unwrap(),
        Regex::new(r"(?i)\b(?:remote|hybrid|onsite|on-site)\b").unwrap(),
        Regex::new(
            r"(?i)\b(?:New York|San Francisco|London|Berlin|Tokyo|Mumbai|Bangalore|Delhi|Toronto|Singapore|Seattle|Austin)\b",
        )
        .unwrap(),
    ]
});

static SALARY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\$[\d,]+[kK]?\s*[-–]\s*\$?[\d,]+[kK]?").unwrap(),
        Regex::new(r"\b[\d,]+[kK]\s*[-–]\s*[\d,]+[kK]\b").unwrap(),
        Regex::new(r"(?i)\b(?:salary|compensation|pay):\s*([^,\n]+)").unwrap(),
    ]
});

static EXPERIENCE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\b\d+\s*(?:to|-|–)\s*\d+\s*years?\s*(?:of\s*)?(?:experience|exp)\b").unwrap(),
        Regex::new(r"(?i)\b\d+\+?\s*years?\s*(?:of\s*)?(?:experience|exp)\b").unwrap(),
        Regex::new(r"(?i)\b(?:minimum|at least)\s*(?:of\s*)?\d+\s*years?").unwrap(),
        Regex::new(r"(?i)\b(?:senior|junior|mid-level|entry-level)\b").unwrap(),
    ]
});

/// First match across `patterns`, preferring a capture group when the
/// pattern has one.
fn first_match(patterns: &[Regex], text: &str) -> Option<String> {
    patterns.iter().find_map(|pattern| {
        pattern.captures(text).map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(0))
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default()
        })
    })
}

// =============================================================================
// EXTRACTORS
// =============================================================================

/// Job title from the first lines, then the common-title catalogue.
pub fn extract_title(text: &str) -> String {
    for line in text.lines().take(TITLE_SCAN_LINES).map(str::trim) {
        if line.is_empty() {
            continue;
        }
        if let Some(title) = first_match(&TITLE_PATTERNS, line).filter(|t| !t.is_empty()) {
            return title;
        }
    }

    let lowered = text.to_lowercase();
    COMMON_TITLES
        .iter()
        .find(|title| lowered.contains(*title))
        .map(|title| title_case(title))
        .unwrap_or_else(|| UNKNOWN_POSITION.to_string())
}

/// Work location, or [`NOT_SPECIFIED`].
pub fn extract_location(text: &str) -> String {
    first_match(&LOCATION_PATTERNS, text).unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// Salary range, or [`NOT_SPECIFIED`].
pub fn extract_salary_range(text: &str) -> String {
    first_match(&SALARY_PATTERNS, text).unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// Employment type (e.g. `Full-Time`), or [`NOT_SPECIFIED`].
pub fn extract_job_type(text: &str) -> String {
    let lowered = text.to_lowercase();
    JOB_TYPES
        .iter()
        .find(|job_type| lowered.contains(*job_type))
        .map(|job_type| title_case(job_type))
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

/// Experience requirement phrase as written, or [`NOT_SPECIFIED`].
pub fn extract_experience_required(text: &str) -> String {
    EXPERIENCE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}
