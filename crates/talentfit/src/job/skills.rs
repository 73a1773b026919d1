//! Must-have and nice-to-have skill extraction.
//!
//! A requirement section starts at a header cue and runs to the next blank
//! line, or the next line opening with an uppercase letter, or the end of
//! the text.

use indexmap::IndexSet;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::{mentions_term, JOB_SKILL_KEYWORDS};

static MUST_HAVE_HEADERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\b(?:must have|required|essential|mandatory)").unwrap(),
        Regex::new(r"(?i)\b(?:requirements|qualifications)").unwrap(),
    ]
});

static NICE_TO_HAVE_HEADERS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"(?i)\b(?:nice to have|preferred|bonus|plus)").unwrap(),
        Regex::new(r"(?i)\b(?:additional|extra|optional)").unwrap(),
    ]
});

static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"[•\-\*]\s*([^,\n]+)").unwrap());

/// Slice of `text` from the start of `header`'s first match to the section end.
pub fn section_after<'a>(text: &'a str, header: &Regex) -> Option<&'a str> {
    let m = header.find(text)?;
    let rest = &text[m.end()..];

    let bytes = rest.as_bytes();
    let end = bytes
        .iter()
        .enumerate()
        .find(|&(i, &b)| {
            b == b'\n'
                && bytes
                    .get(i + 1)
                    .is_some_and(|&next| next == b'\n' || next.is_ascii_uppercase())
        })
        .map(|(i, _)| i)
        .unwrap_or(rest.len());

    Some(&text[m.start()..m.end() + end])
}

/// Catalogue skills mentioned in `section`, in catalogue order.
///
/// The whole section is tested first, then each bullet item; with
/// set semantics the bullet pass can only confirm what the first pass found.
pub fn skills_in_section(section: &str) -> IndexSet<&'static str> {
    let lowered = section.to_lowercase();
    let mut skills: IndexSet<&'static str> = JOB_SKILL_KEYWORDS
        .iter()
        .copied()
        .filter(|term| mentions_term(&lowered, term))
        .collect();

    for caps in BULLET.captures_iter(section) {
        let item = caps[1].trim().to_lowercase();
        skills.extend(
            JOB_SKILL_KEYWORDS
                .iter()
                .copied()
                .filter(|term| mentions_term(&item, term)),
        );
    }

    skills
}

fn collect_sections(text: &str, headers: &[Regex]) -> Option<IndexSet<String>> {
    let mut found = false;
    let mut skills = IndexSet::new();

    for header in headers {
        if let Some(section) = section_after(text, header) {
            found = true;
            skills.extend(skills_in_section(section).into_iter().map(str::to_string));
        }
    }

    found.then_some(skills)
}

/// Skills listed under requirement headers, or across the whole posting when
/// no header (or no skill under any header) is found.
pub fn extract_must_have_skills(text: &str) -> IndexSet<String> {
    match collect_sections(text, &MUST_HAVE_HEADERS) {
        Some(skills) if !skills.is_empty() => skills,
        _ => skills_in_section(text).into_iter().map(str::to_string).collect(),
    }
}

/// Skills listed under preference headers, minus anything in `must_have`.
/// No whole-posting fallback.
pub fn extract_nice_to_have_skills(text: &str, must_have: &IndexSet<String>) -> IndexSet<String> {
    collect_sections(text, &NICE_TO_HAVE_HEADERS)
        .unwrap_or_default()
        .into_iter()
        .filter(|skill| !must_have.contains(skill))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const POSTING: &str = "Software Engineer - Full Stack Developer\n\n\
        We are looking for a talented Full Stack Developer to join our team.\n\n\
        Requirements:\n\
        • 3-5 years of experience in web development\n\
        • Strong knowledge of Python, JavaScript, and React\n\
        • Database experience with PostgreSQL or MySQL\n\n\
        Nice to have:\n\
        • Experience with Docker and Kubernetes\n\
        • Knowledge of Python scripting\n\n\
        Location: San Francisco, CA";

    fn list(set: &IndexSet<String>) -> Vec<&str> {
        set.iter().map(|s| s.as_str()).collect()
    }

    #[test]
    fn test_section_ends_at_blank_line() {
        let section = section_after(POSTING, &MUST_HAVE_HEADERS[1]).unwrap();
        assert!(section.starts_with("Requirements:"));
        assert!(section.ends_with("PostgreSQL or MySQL"));
    }

    #[test]
    fn test_section_ends_at_uppercase_line() {
        let text = "Required: Rust\nTeam culture matters";
        let header = &MUST_HAVE_HEADERS[0];
        assert_eq!(section_after(text, header), Some("Required: Rust"));
    }

    #[test]
    fn test_section_runs_to_end() {
        let text = "Preferred: Go and Docker";
        assert_eq!(section_after(text, &NICE_TO_HAVE_HEADERS[0]), Some(text));
    }

    #[test]
    fn test_must_have_from_requirements_section() {
        let must = extract_must_have_skills(POSTING);
        assert_eq!(
            list(&must),
            vec!["Python", "Java", "JavaScript", "React", "MySQL", "PostgreSQL"]
        );
    }

    #[test]
    fn test_nice_to_have_excludes_must_have() {
        let must = extract_must_have_skills(POSTING);
        let nice = extract_nice_to_have_skills(POSTING, &must);
        assert_eq!(list(&nice), vec!["Docker", "Kubernetes"]);
        assert!(nice.iter().all(|s| !must.contains(s)));
    }

    #[test]
    fn test_must_have_falls_back_to_whole_text() {
        let must = extract_must_have_skills("We use Rust and Terraform every day");
        assert_eq!(list(&must), vec!["Rust", "Terraform"]);
    }

    #[test]
    fn test_nice_to_have_has_no_fallback() {
        let nice = extract_nice_to_have_skills("We use Rust", &IndexSet::new());
        assert!(nice.is_empty());
    }

    #[test]
    fn test_short_terms_need_token_boundaries() {
        let must = extract_must_have_skills("Required: strong Go, R and C# skills");
        assert!(must.contains("Go"));
        assert!(must.contains("R"));
        assert!(must.contains("C#"));

        let must = extract_must_have_skills("Required: great communication");
        assert!(!must.contains("R"));
        assert!(!must.contains("Go"));
    }
}
