//! Skill extraction, coverage tiers, and missing-skill detection.
//!
//! The scorer derives résumé skills from raw text on its own, with a wider
//! vocabulary than the résumé structurer plus a free-form "Skills:" section
//! split. The two vocabularies overlap but are not identical, so job skills
//! can be matched even for résumés that were never structured.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::SCORING_SKILL_FAMILIES;
use crate::config::HardMatchConfig;
use crate::text::fuzzy;

static SKILLS_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)skills?[:\-]\s*([^\n]+(?:\n[^\n]+)*)").unwrap());

static SKILL_SEPARATORS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[,;|\n•\-\*]").unwrap());

/// Lower-cased skills found in résumé text.
pub fn extract_resume_skills(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();

    let mut skills: BTreeSet<String> = SCORING_SKILL_FAMILIES
        .iter()
        .flat_map(|family| family.find_all(&lowered))
        .collect();

    if let Some(caps) = SKILLS_LABEL.captures(&lowered) {
        skills.extend(
            SKILL_SEPARATORS
                .split(&caps[1])
                .map(str::trim)
                .filter(|piece| {
                    let len = piece.chars().count();
                    len > 2 && len < 50
                })
                .map(str::to_string),
        );
    }

    skills
}

/// Credit earned by one job skill.
fn skill_credit(
    skill: &str,
    resume_skills: &BTreeSet<String>,
    resume_lower: &str,
    config: &HardMatchConfig,
) -> f64 {
    if resume_skills.contains(skill) {
        return config.exact_credit;
    }
    if resume_lower.contains(skill) {
        return config.substring_credit;
    }
    match fuzzy::best_match(skill, resume_skills.iter().map(|s| s.as_str())) {
        Some((_, score)) if score >= config.fuzzy_threshold => config.fuzzy_credit,
        _ => 0.0,
    }
}

/// Summed credits and non-blank skill count for one category.
pub fn category_matches<'a, I>(
    skills: I,
    resume_skills: &BTreeSet<String>,
    resume_lower: &str,
    config: &HardMatchConfig,
) -> (f64, usize)
where
    I: IntoIterator<Item = &'a String>,
{
    let mut total = 0.0;
    let mut counted = 0;

    for skill in skills {
        let skill = skill.trim().to_lowercase();
        if skill.is_empty() {
            continue;
        }
        counted += 1;
        total += skill_credit(&skill, resume_skills, resume_lower, config);
    }

    (total, counted)
}

/// Combine must-have and nice-to-have category scores into a 0–100 coverage.
///
/// Each category score is its credit sum over its non-blank skill count.
/// An empty category is ignored; two empty categories give 0.
pub fn coverage_score(
    must: (f64, usize),
    nice: (f64, usize),
    config: &HardMatchConfig,
) -> f64 {
    let category = |(matches, count): (f64, usize)| {
        (count > 0).then(|| matches / count as f64 * 100.0)
    };

    match (category(must), category(nice)) {
        (Some(m), Some(n)) => m * config.must_have_weight + n * config.nice_to_have_weight,
        (Some(m), None) => m,
        (None, Some(n)) => n,
        (None, None) => 0.0,
    }
}

/// Whether a job skill counts as present among the résumé skills.
///
/// Exact match first; then containment in either direction, but only for
/// job skills longer than three characters; then a fuzzy ratio of at least
/// `fuzzy_threshold`.
pub fn is_skill_present(
    job_skill: &str,
    resume_skills: &BTreeSet<String>,
    fuzzy_threshold: u8,
) -> bool {
    let job_skill = job_skill.trim().to_lowercase();

    if resume_skills.contains(&job_skill) {
        return true;
    }

    let candidates = || {
        resume_skills
            .iter()
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    };

    if job_skill.chars().count() > 3
        && candidates().any(|r| job_skill.contains(r) || r.contains(job_skill.as_str()))
    {
        return true;
    }

    fuzzy::best_match(&job_skill, candidates()).is_some_and(|(_, score)| score >= fuzzy_threshold)
}

/// Job skills (in the given order) that are absent from the résumé.
pub fn find_missing_skills<'a, I>(
    job_skills: I,
    resume_skills: &BTreeSet<String>,
    fuzzy_threshold: u8,
) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    job_skills
        .into_iter()
        .filter(|skill| !skill.trim().is_empty())
        .filter(|skill| !is_skill_present(skill, resume_skills, fuzzy_threshold))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_catalogue_skills() {
        let skills = extract_resume_skills("Python, JavaScript, React, 3 years experience");
        assert_eq!(skills, set(&["javascript", "python", "react"]));
    }

    #[test]
    fn test_extract_skills_section_pieces() {
        let text = "Summary\nEngineer\nSkills: Rust; Distributed Systems | Go\nCloud infra\n\nOther";
        let skills = extract_resume_skills(text);
        assert!(skills.contains("rust"));
        assert!(skills.contains("go"));
        assert!(skills.contains("distributed systems"));
        assert!(skills.contains("cloud infra"));
        // Short pieces and text after the blank line are ignored.
        assert!(!skills.contains("other"));
    }

    #[test]
    fn test_skill_credit_tiers() {
        let config = HardMatchConfig::default();
        let resume_skills = set(&["kubernete", "python"]);
        let text = "python developer who knows graphql well";

        assert_eq!(skill_credit("python", &resume_skills, text, &config), 1.0);
        assert_eq!(skill_credit("graphql", &resume_skills, text, &config), 0.8);
        assert_eq!(skill_credit("kubernetes", &resume_skills, text, &config), 0.6);
        assert_eq!(skill_credit("cobol", &resume_skills, text, &config), 0.0);
    }

    #[test]
    fn test_category_skips_blank_skills() {
        let config = HardMatchConfig::default();
        let skills = vec!["Python".to_string(), "  ".to_string(), "SQL".to_string()];
        let (matches, count) = category_matches(&skills, &set(&["python"]), "python", &config);
        assert_eq!(count, 2);
        assert_eq!(matches, 1.0);
    }

    #[test]
    fn test_coverage_combinations() {
        let config = HardMatchConfig::default();
        assert_eq!(coverage_score((2.0, 2), (0.0, 1), &config), 70.0);
        assert_eq!(coverage_score((1.0, 2), (0.0, 0), &config), 50.0);
        assert_eq!(coverage_score((0.0, 0), (1.0, 1), &config), 100.0);
        assert_eq!(coverage_score((0.0, 0), (0.0, 0), &config), 0.0);
    }

    #[test]
    fn test_missing_skills_in_job_order() {
        let resume = set(&["python", "javascript", "react"]);
        let missing = find_missing_skills(["Python", "SQL", "React", "Docker"], &resume, 75);
        assert_eq!(missing, vec!["SQL", "Docker"]);
    }

    #[test]
    fn test_containment_only_for_long_skills() {
        let resume = set(&["mongodb", "reactjs"]);
        // "Go" is contained in "mongodb" but too short for containment.
        assert!(!is_skill_present("Go", &resume, 75));
        // "React" is long enough.
        assert!(is_skill_present("React", &resume, 75));
    }

    #[test]
    fn test_fuzzy_fallback() {
        let resume = set(&["postgres"]);
        // ratio("postgresql", "postgres") = 89, but containment already matches.
        assert!(is_skill_present("PostgreSQL", &resume, 75));
        // ratio("kubernetes", "kubernetis") = 90, no containment either way.
        let resume = set(&["kubernetis"]);
        assert!(is_skill_present("Kubernetes", &resume, 75));
        assert!(!is_skill_present("Kubernetes", &resume, 99));
    }
}
