//! Scoring result types.

use serde::{Deserialize, Serialize};

/// Coarse relevance classification. Ordered `Low < Medium < High`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Low,
    Medium,
    High,
}

impl Verdict {
    /// Label as reported ("High", "Medium", "Low").
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Low => "Low",
            Verdict::Medium => "Medium",
            Verdict::High => "High",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Verdict {
    type Err = crate::error::TalentfitError;

    fn from_str(s: &str) -> crate::error::Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Verdict::Low),
            "medium" => Ok(Verdict::Medium),
            "high" => Ok(Verdict::High),
            other => Err(crate::error::TalentfitError::Config(format!(
                "unknown verdict '{}' (expected low, medium or high)",
                other
            ))),
        }
    }
}

/// Outcome of scoring one résumé against one job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelevanceResult {
    /// Weighted overall score with bonuses, in `[0, 100]`.
    pub overall_score: f64,
    pub hard_match_score: f64,
    pub semantic_match_score: f64,
    pub education_match_score: f64,
    pub experience_match_score: f64,
    pub verdict: Verdict,
    /// Job skills not found in the résumé, in job order.
    pub missing_skills: Vec<String>,
    /// Improvement suggestions, most important first.
    pub suggestions: Vec<String>,
    pub breakdown: Breakdown,
}

/// Diagnostic sub-scores and counts per scoring dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub hard_match: HardMatchDetails,
    pub semantic_match: SemanticMatchDetails,
    pub education_match: EducationMatchDetails,
    pub experience_match: ExperienceMatchDetails,
    pub skill_analysis: SkillAnalysis,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardMatchDetails {
    /// TF-IDF cosine between résumé and job text, as a percentage.
    pub lexical_similarity: f64,
    /// Summed tier credits over must-have skills.
    pub must_have_matches: f64,
    /// Summed tier credits over nice-to-have skills.
    pub nice_to_have_matches: f64,
    /// Skill coverage score before bonuses.
    pub skill_coverage: f64,
    /// Job skills present verbatim (case-insensitive) in the résumé skill set.
    pub exact_skill_matches: usize,
    pub total_required_skills: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SemanticMatchDetails {
    pub similarity_score: f64,
    /// Backend that produced the score: an embedder name, "lexical", or "neutral".
    pub backend: String,
    pub resume_length: usize,
    pub job_description_length: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationMatchDetails {
    pub education_score: f64,
    /// Highest degree level in the résumé (0 = none, 4 = doctorate).
    pub resume_level: u8,
    /// Highest degree level the job asks for (0 = none stated).
    pub required_level: u8,
    /// How many of "bachelor", "master", "phd", "degree" the résumé mentions.
    pub resume_education_found: usize,
    pub job_education_requirements: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceMatchDetails {
    pub experience_score: f64,
    pub experience_required: String,
    pub required_years: Option<u32>,
    pub resume_years: u32,
    pub resume_mentions_experience: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAnalysis {
    /// Skills the scorer found in the résumé, sorted.
    pub resume_skills: Vec<String>,
    /// Must-have then nice-to-have skills.
    pub job_skills: Vec<String>,
    /// Job skills found in the résumé by any matching tier.
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
}

/// One entry of a batch ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedCandidate {
    /// Caller-supplied label (e.g. a file name).
    pub label: String,
    pub result: RelevanceResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verdict_ordering() {
        assert!(Verdict::Low < Verdict::Medium);
        assert!(Verdict::Medium < Verdict::High);
    }

    #[test]
    fn test_verdict_parse_and_display() {
        assert_eq!("HIGH".parse::<Verdict>().unwrap(), Verdict::High);
        assert_eq!(Verdict::Medium.to_string(), "Medium");
        assert!("great".parse::<Verdict>().is_err());
        assert_eq!(serde_json::to_string(&Verdict::Low).unwrap(), "\"Low\"");
    }
}
