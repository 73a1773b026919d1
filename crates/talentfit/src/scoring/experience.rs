//! Experience match: years stated in the résumé against the job requirement.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::job::NOT_SPECIFIED;
use crate::scoring::result::ExperienceMatchDetails;

static FIRST_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Résumé year patterns. The last capture group holds the years counted.
static RESUME_YEARS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        // "2 to 4 years", "3-5 years": upper bound
        Regex::new(r"(?i)(\d+)\s*(?:to|-)\s*(\d+)\s*years?").unwrap(),
        // "5+ years", "3 years"
        Regex::new(r"(?i)(\d+)\+?\s*years?").unwrap(),
        // "4 years of experience"
        Regex::new(r"(?i)(\d+)\s*years?\s*of\s*experience").unwrap(),
    ]
});

const NEUTRAL: f64 = 50.0;

/// Largest number of years the résumé claims (0 when none).
pub fn resume_years(text: &str) -> u32 {
    RESUME_YEARS
        .iter()
        .flat_map(|pattern| pattern.captures_iter(text))
        .filter_map(|caps| {
            caps.iter()
                .skip(1)
                .flatten()
                .last()
                .and_then(|m| m.as_str().parse::<u32>().ok())
        })
        .max()
        .unwrap_or(0)
}

/// Years the requirement asks for: its first integer.
pub fn required_years(requirement: &str) -> Option<u32> {
    FIRST_NUMBER
        .find(requirement)
        .and_then(|m| m.as_str().parse().ok())
}

/// Experience score in `[0, 100]` with its breakdown.
pub fn experience_match(resume_text: &str, requirement: &str) -> ExperienceMatchDetails {
    let trimmed = requirement.trim();
    let unspecified = trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NOT_SPECIFIED);

    let required = if unspecified {
        None
    } else {
        required_years(trimmed)
    };
    let years = resume_years(resume_text);

    let lowered = resume_text.to_lowercase();
    let resume_mentions_experience = lowered.contains("experience") || lowered.contains("years");

    ExperienceMatchDetails {
        experience_score: required.map_or(NEUTRAL, |req| bucket(years, req)),
        experience_required: requirement.to_string(),
        required_years: required,
        resume_years: years,
        resume_mentions_experience,
    }
}

fn bucket(resume_years: u32, required_years: u32) -> f64 {
    if required_years == 0 || resume_years >= required_years {
        return 100.0;
    }

    let ratio = resume_years as f64 / required_years as f64;
    if ratio >= 0.8 {
        80.0
    } else if ratio >= 0.6 {
        60.0
    } else if ratio >= 0.4 {
        40.0
    } else {
        20.0
    }
}
