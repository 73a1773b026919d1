//! Education match: résumé degree level against the job's qualifications.

use crate::catalog::{highest_degree_level, EDUCATION_EVIDENCE_KEYWORDS};
use crate::scoring::result::EducationMatchDetails;

/// Score for a job without stated qualifications or without a recognisable level.
const NEUTRAL: f64 = 50.0;

/// Education score in `[0, 100]` with its breakdown.
pub fn education_match(resume_text: &str, qualifications: &[String]) -> EducationMatchDetails {
    let resume_level = highest_degree_level(resume_text);
    let required_level = qualifications
        .iter()
        .map(|q| highest_degree_level(q))
        .max()
        .unwrap_or(0);

    let resume_lower = resume_text.to_lowercase();
    let resume_education_found = EDUCATION_EVIDENCE_KEYWORDS
        .iter()
        .filter(|keyword| resume_lower.contains(*keyword))
        .count();

    EducationMatchDetails {
        education_score: level_score(
            resume_level,
            required_level,
            !qualifications.is_empty(),
            resume_education_found > 0,
        ),
        resume_level,
        required_level,
        resume_education_found,
        job_education_requirements: qualifications.len(),
    }
}

/// A résumé with education evidence but no recognisable degree competes at level 0.
fn level_score(
    resume_level: u8,
    required_level: u8,
    has_requirements: bool,
    has_evidence: bool,
) -> f64 {
    if !has_requirements {
        return NEUTRAL;
    }
    if !has_evidence {
        return 0.0;
    }
    if required_level == 0 {
        return NEUTRAL;
    }

    match required_level.saturating_sub(resume_level) {
        0 => 100.0,
        1 => 75.0,
        2 => 50.0,
        _ => 25.0,
    }
}
