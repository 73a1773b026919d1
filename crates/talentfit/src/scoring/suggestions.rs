//! Improvement suggestions attached to a relevance result.

use crate::config::ScoringConfig;
use crate::scoring::result::Verdict;

/// How many missing skills a suggestion names at most.
const NAMED_MISSING_SKILLS: usize = 5;

/// Suggestions, most important first, capped at `config.max_suggestions`.
pub fn generate_suggestions(
    verdict: Verdict,
    overall_score: f64,
    missing_skills: &[String],
    resume_text: &str,
    config: &ScoringConfig,
) -> Vec<String> {
    let mut suggestions = Vec::new();

    if verdict == Verdict::Low {
        suggestions.push(
            "Consider gaining more relevant experience in the required field".to_string(),
        );
        suggestions
            .push("Focus on developing the core skills mentioned in the job description".to_string());
    }

    if !missing_skills.is_empty() {
        let named: Vec<&str> = missing_skills
            .iter()
            .take(NAMED_MISSING_SKILLS)
            .map(String::as_str)
            .collect();
        suggestions.push(format!(
            "Consider learning or highlighting these skills: {}",
            named.join(", ")
        ));
    }

    if overall_score < config.achievement_hint_below {
        suggestions.push("Add more specific examples of your achievements and impact".to_string());
        suggestions.push("Quantify your experience with metrics and numbers".to_string());
    }

    if resume_text.chars().count() < config.short_resume_chars {
        suggestions.push("Consider adding more detail to your resume sections".to_string());
    }

    suggestions.push("Tailor your resume to match the specific job requirements".to_string());
    suggestions.push("Use keywords from the job description in your resume".to_string());

    suggestions.truncate(config.max_suggestions);
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn long_text() -> String {
        "experienced engineer ".repeat(40)
    }

    #[test]
    fn test_strong_resume_gets_tailoring_only() {
        let config = ScoringConfig::default();
        let suggestions = generate_suggestions(Verdict::High, 92.0, &[], &long_text(), &config);
        assert_eq!(
            suggestions,
            vec![
                "Tailor your resume to match the specific job requirements",
                "Use keywords from the job description in your resume",
            ]
        );
    }

    #[test]
    fn test_missing_skills_named_up_to_five() {
        let config = ScoringConfig::default();
        let missing: Vec<String> = ["A1", "B2", "C3", "D4", "E5", "F6"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let suggestions = generate_suggestions(Verdict::High, 85.0, &missing, &long_text(), &config);
        assert_eq!(
            suggestions[0],
            "Consider learning or highlighting these skills: A1, B2, C3, D4, E5"
        );
    }

    #[test]
    fn test_low_verdict_truncated_to_cap() {
        let config = ScoringConfig::default();
        let missing = vec!["SQL".to_string()];
        let suggestions = generate_suggestions(Verdict::Low, 20.0, &missing, "short", &config);
        assert_eq!(suggestions.len(), 5);
        assert_eq!(
            suggestions[0],
            "Consider gaining more relevant experience in the required field"
        );
        assert_eq!(suggestions[2], "Consider learning or highlighting these skills: SQL");
        assert_eq!(suggestions[4], "Quantify your experience with metrics and numbers");
    }

    #[test]
    fn test_short_resume_hint() {
        let config = ScoringConfig::default();
        let suggestions = generate_suggestions(Verdict::Medium, 75.0, &[], "brief", &config);
        assert_eq!(
            suggestions[0],
            "Consider adding more detail to your resume sections"
        );
        assert_eq!(suggestions.len(), 3);
    }
}
