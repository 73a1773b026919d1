//! The relevance scorer.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{ScoringConfig, VerdictThresholds};
use crate::embedding::Embedder;
use crate::job::JobRequirement;
use crate::resume::ParsedResume;
use crate::scoring::education::education_match;
use crate::scoring::experience::experience_match;
use crate::scoring::result::{
    Breakdown, HardMatchDetails, RankedCandidate, RelevanceResult, SemanticMatchDetails,
    SkillAnalysis, Verdict,
};
use crate::scoring::semantic::{SemanticMatcher, SimilarityStrategy};
use crate::scoring::skills::{
    category_matches, coverage_score, extract_resume_skills, find_missing_skills,
};
use crate::scoring::suggestions::generate_suggestions;
use crate::text::{round2, TfIdf};

/// Scores résumés against job requirements.
///
/// Scoring never fails: a failing collaborator degrades to the next
/// strategy and finally to a neutral score. The scorer holds no mutable
/// state, so one instance can be shared across threads.
#[derive(Debug, Default)]
pub struct RelevanceScorer {
    config: ScoringConfig,
    tfidf: TfIdf,
    semantic: SemanticMatcher,
}

impl RelevanceScorer {
    /// Lexical-only scorer with default weights.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scorer with custom scoring parameters.
    pub fn with_config(config: ScoringConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Use embeddings for the semantic component.
    pub fn with_embedder(self, embedder: impl Embedder + 'static) -> Self {
        self.with_shared_embedder(Arc::new(embedder))
    }

    /// Use an embedder shared with other scorers.
    pub fn with_shared_embedder(mut self, embedder: Arc<dyn Embedder>) -> Self {
        self.semantic = SemanticMatcher::with_embedder(embedder);
        self
    }

    /// Use a custom primary similarity strategy for the semantic component.
    pub fn with_similarity(mut self, strategy: Arc<dyn SimilarityStrategy>) -> Self {
        self.semantic = SemanticMatcher::with_strategy(strategy);
        self
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Name of the semantic backend tried first.
    pub fn semantic_backend(&self) -> &str {
        self.semantic.primary_name()
    }

    /// Score a structured résumé against a job.
    pub fn score(&self, resume: &ParsedResume, job: &JobRequirement) -> RelevanceResult {
        self.score_text(&resume.text, job)
    }

    /// Score raw résumé text against a job.
    pub fn score_text(&self, resume_text: &str, job: &JobRequirement) -> RelevanceResult {
        let resume_skills = extract_resume_skills(resume_text);
        let resume_lower = resume_text.to_lowercase();

        let hard = self.hard_match(resume_text, &resume_lower, &resume_skills, job);
        let semantic = self.semantic.score(resume_text, &job.description);
        let education = education_match(resume_text, &job.qualifications);
        let experience = experience_match(resume_text, &job.experience_required);

        let job_skills: Vec<String> = job.all_skills().map(str::to_string).collect();
        let missing_skills = find_missing_skills(
            job_skills.iter().map(String::as_str),
            &resume_skills,
            self.config.missing_fuzzy_threshold,
        );

        let weights = &self.config.weights;
        let bonuses = &self.config.bonuses;
        let mut overall = hard.score * weights.hard
            + semantic.score * weights.semantic
            + education.education_score * weights.education
            + experience.experience_score * weights.experience;
        if missing_skills.is_empty() && hard.score >= bonuses.complete_skills_min_hard {
            overall += bonuses.complete_skills;
        }
        if semantic.score >= bonuses.semantic_min {
            overall += bonuses.semantic;
        }
        let overall_score = round2(overall.clamp(0.0, 100.0));
        let education_score = round2(education.education_score);
        let experience_score = round2(experience.experience_score);
        let verdict = classify(overall_score, &self.config.verdict);

        let suggestions = generate_suggestions(
            verdict,
            overall_score,
            &missing_skills,
            resume_text,
            &self.config,
        );

        debug!(
            overall = overall_score,
            hard = hard.score,
            semantic = semantic.score,
            backend = %semantic.backend,
            education = education_score,
            experience = experience_score,
            missing = missing_skills.len(),
            %verdict,
            "scored resume"
        );

        let exact_skill_matches = job_skills
            .iter()
            .filter(|s| resume_skills.contains(&s.trim().to_lowercase()))
            .count();
        let matched_skills: Vec<String> = job_skills
            .iter()
            .filter(|s| !s.trim().is_empty() && !missing_skills.contains(s))
            .cloned()
            .collect();

        let breakdown = Breakdown {
            hard_match: HardMatchDetails {
                lexical_similarity: round2(hard.lexical_pct),
                must_have_matches: round2(hard.must_matches),
                nice_to_have_matches: round2(hard.nice_matches),
                skill_coverage: round2(hard.coverage),
                exact_skill_matches,
                total_required_skills: job_skills.len(),
            },
            semantic_match: SemanticMatchDetails {
                similarity_score: round2(semantic.score),
                backend: semantic.backend.clone(),
                resume_length: resume_text.chars().count(),
                job_description_length: job.description.chars().count(),
            },
            education_match: education,
            experience_match: experience,
            skill_analysis: SkillAnalysis {
                resume_skills: resume_skills.iter().cloned().collect(),
                job_skills,
                matched_skills,
                missing_skills: missing_skills.clone(),
            },
        };

        RelevanceResult {
            overall_score,
            hard_match_score: round2(hard.score),
            semantic_match_score: round2(semantic.score),
            education_match_score: education_score,
            experience_match_score: experience_score,
            verdict,
            missing_skills,
            suggestions,
            breakdown,
        }
    }

    /// Score many résumés against one job, best first.
    ///
    /// Ties are broken by label. Candidates whose verdict is below
    /// `min_verdict` are dropped.
    pub fn rank<'a, S, I>(
        &self,
        job: &JobRequirement,
        candidates: I,
        min_verdict: Option<Verdict>,
    ) -> Vec<RankedCandidate>
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, &'a ParsedResume)>,
    {
        let mut ranked: Vec<RankedCandidate> = candidates
            .into_iter()
            .map(|(label, resume)| RankedCandidate {
                label: label.into(),
                result: self.score(resume, job),
            })
            .filter(|c| min_verdict.is_none_or(|min| c.result.verdict >= min))
            .collect();

        ranked.sort_by(|a, b| {
            b.result
                .overall_score
                .total_cmp(&a.result.overall_score)
                .then_with(|| a.label.cmp(&b.label))
        });

        ranked
    }

    fn hard_match(
        &self,
        resume_text: &str,
        resume_lower: &str,
        resume_skills: &BTreeSet<String>,
        job: &JobRequirement,
    ) -> HardMatch {
        let config = &self.config.hard_match;

        let job_text = job_text(job);
        let lexical = match self.tfidf.similarity(resume_text, &job_text) {
            Ok(similarity) => similarity,
            Err(e) => {
                warn!(error = %e, "lexical similarity failed, treating as zero");
                0.0
            }
        };
        let lexical_pct = lexical * 100.0;

        let must = category_matches(&job.must_have_skills, resume_skills, resume_lower, config);
        let nice = category_matches(&job.nice_to_have_skills, resume_skills, resume_lower, config);
        let coverage = coverage_score(must, nice, config);

        // The cosine stays on its 0-1 scale here; coverage carries the score.
        let mut score = lexical * config.lexical_weight + coverage * config.coverage_weight;
        if coverage >= config.high_coverage {
            score += config.high_coverage_bonus;
        } else if coverage >= config.good_coverage {
            score += config.good_coverage_bonus;
        }

        HardMatch {
            score: score.clamp(0.0, 100.0),
            lexical_pct,
            must_matches: must.0,
            nice_matches: nice.0,
            coverage,
        }
    }
}

/// Intermediate hard-match figures.
struct HardMatch {
    score: f64,
    lexical_pct: f64,
    must_matches: f64,
    nice_matches: f64,
    coverage: f64,
}

/// Job text compared lexically: description, skills, then qualifications.
fn job_text(job: &JobRequirement) -> String {
    let mut parts: Vec<&str> = vec![job.description.as_str()];
    parts.extend(job.must_have_skills.iter().map(String::as_str));
    parts.extend(job.nice_to_have_skills.iter().map(String::as_str));
    parts.extend(job.qualifications.iter().map(String::as_str));
    parts.join(" ")
}

/// Verdict for an overall score.
///
/// The scorer passes the overall score after rounding to two decimals, so a
/// raw 79.996 reported as 80.0 is High, while `classify(79.995, ..)` on its
/// own is Medium.
pub fn classify(overall_score: f64, thresholds: &VerdictThresholds) -> Verdict {
    if overall_score >= thresholds.high {
        Verdict::High
    } else if overall_score >= thresholds.medium {
        Verdict::Medium
    } else {
        Verdict::Low
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::MockEmbedder;
    use crate::resume::ResumeStructurer;

    const RESUME: &str =
        "Python, JavaScript, React, 3 years experience, Bachelor in Computer Science";

    fn scenario_job() -> JobRequirement {
        JobRequirement::new("")
            .with_must_have(["Python", "React", "SQL"])
            .with_qualifications(["Bachelor in Computer Science"])
            .with_experience("2-4 years")
    }

    #[test]
    fn test_scenario_scores() {
        let scorer = RelevanceScorer::new();
        let result = scorer.score_text(RESUME, &scenario_job());

        assert_eq!(result.semantic_match_score, 50.0);
        assert_eq!(result.education_match_score, 100.0);
        assert_eq!(result.experience_match_score, 100.0);
        // 0.9 * 66.67 coverage plus at most 0.1 from the cosine.
        assert!(
            result.hard_match_score >= 60.0 && result.hard_match_score <= 60.1,
            "hard = {}",
            result.hard_match_score
        );
        assert!(
            result.overall_score >= 66.0 && result.overall_score <= 66.06,
            "overall = {}",
            result.overall_score
        );
        assert_eq!(result.verdict, Verdict::Medium);
        assert_eq!(result.missing_skills, vec!["SQL"]);
        assert_eq!(result.breakdown.semantic_match.backend, "neutral");
    }

    #[test]
    fn test_scenario_breakdown() {
        let result = RelevanceScorer::new().score_text(RESUME, &scenario_job());
        let breakdown = &result.breakdown;

        assert_eq!(breakdown.hard_match.total_required_skills, 3);
        assert_eq!(breakdown.hard_match.exact_skill_matches, 2);
        assert_eq!(breakdown.hard_match.must_have_matches, 2.0);
        assert_eq!(breakdown.hard_match.skill_coverage, 66.67);
        assert_eq!(breakdown.education_match.resume_level, 2);
        assert_eq!(breakdown.education_match.required_level, 2);
        assert_eq!(breakdown.experience_match.required_years, Some(2));
        assert_eq!(breakdown.experience_match.resume_years, 3);
        assert_eq!(breakdown.skill_analysis.matched_skills, vec!["Python", "React"]);
        assert_eq!(
            breakdown.skill_analysis.resume_skills,
            vec!["javascript", "python", "react"]
        );
    }

    #[test]
    fn test_scenario_suggestions() {
        let result = RelevanceScorer::new().score_text(RESUME, &scenario_job());
        assert_eq!(
            result.suggestions,
            vec![
                "Consider learning or highlighting these skills: SQL",
                "Add more specific examples of your achievements and impact",
                "Quantify your experience with metrics and numbers",
                "Consider adding more detail to your resume sections",
                "Tailor your resume to match the specific job requirements",
            ]
        );
    }

    #[test]
    fn test_score_matches_score_text() {
        let scorer = RelevanceScorer::new();
        let parsed = ResumeStructurer::new().parse(RESUME);
        let job = scenario_job();
        assert_eq!(scorer.score(&parsed, &job), scorer.score_text(&parsed.text, &job));
    }

    #[test]
    fn test_lexical_similarity_adds_at_most_a_tenth() {
        let text = "Rust systems programmer building storage engines";
        let result = RelevanceScorer::new().score_text(text, &JobRequirement::new(text));

        assert_eq!(result.breakdown.hard_match.skill_coverage, 0.0);
        assert_eq!(result.breakdown.hard_match.lexical_similarity, 100.0);
        assert_eq!(result.hard_match_score, 0.1);
    }

    #[test]
    fn test_empty_job_is_neutral_except_coverage() {
        let result = RelevanceScorer::new().score_text(RESUME, &JobRequirement::new(""));
        assert_eq!(result.semantic_match_score, 50.0);
        assert_eq!(result.education_match_score, 50.0);
        assert_eq!(result.experience_match_score, 50.0);
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.breakdown.hard_match.skill_coverage, 0.0);
    }

    #[test]
    fn test_complete_skills_bonus() {
        let resume = "Python and React developer. Bachelor of Science. 5 years of experience.";
        let job = JobRequirement::new("")
            .with_must_have(["Python", "React"])
            .with_qualifications(["Bachelor's degree"])
            .with_experience("3+ years");
        let result = RelevanceScorer::new().score_text(resume, &job);

        assert!(result.missing_skills.is_empty());
        // Full coverage earns the +5 coverage bonus, so hard >= 80 for any lexical score.
        assert!(result.hard_match_score >= 95.0);
        // 0.6 * hard + 10 + 10 + 10 (neutral semantic), plus the complete-skills bonus.
        assert!(result.overall_score >= 87.0);
        assert_eq!(result.verdict, Verdict::High);
    }

    #[test]
    fn test_semantic_bonus_from_embedder() {
        let job = scenario_job();
        let mut job_with_text = job.clone();
        job_with_text.description = "Backend role".to_string();

        let plain = RelevanceScorer::new().score_text(RESUME, &job_with_text);
        let boosted = RelevanceScorer::new()
            .with_embedder(MockEmbedder::new())
            .score_text(RESUME, &job_with_text);

        assert_eq!(boosted.semantic_match_score, 100.0);
        assert_eq!(boosted.breakdown.semantic_match.backend, "mock");
        assert!(boosted.overall_score > plain.overall_score);
    }

    #[test]
    fn test_failing_embedder_never_fails_scoring() {
        let mut job = scenario_job();
        job.description = "Python engineer".to_string();
        let result = RelevanceScorer::new()
            .with_embedder(MockEmbedder::failing())
            .score_text(RESUME, &job);
        assert_eq!(result.breakdown.semantic_match.backend, "lexical");
        assert!((0.0..=100.0).contains(&result.semantic_match_score));
    }

    #[test]
    fn test_non_finite_embedding_keeps_scores_in_range() {
        let mut job = scenario_job();
        job.description = "Python engineer".to_string();
        let result = RelevanceScorer::new()
            .with_embedder(MockEmbedder::new().with_vector(RESUME, vec![f32::NAN, 1.0]))
            .score_text(RESUME, &job);

        assert_eq!(result.breakdown.semantic_match.backend, "lexical");
        assert!((0.0..=100.0).contains(&result.semantic_match_score));
        assert!((0.0..=100.0).contains(&result.overall_score));
        assert_eq!(result.verdict, Verdict::Medium);
    }

    #[test]
    fn test_classify_boundaries() {
        let thresholds = VerdictThresholds::default();
        assert_eq!(classify(80.0, &thresholds), Verdict::High);
        assert_eq!(classify(79.99, &thresholds), Verdict::Medium);
        assert_eq!(classify(55.0, &thresholds), Verdict::Medium);
        assert_eq!(classify(54.99, &thresholds), Verdict::Low);
        assert_eq!(classify(79.995, &thresholds), Verdict::Medium);
    }

    #[test]
    fn test_verdict_uses_rounded_score() {
        let result = RelevanceScorer::new().score_text(RESUME, &scenario_job());
        assert_eq!(result.verdict, classify(result.overall_score, &VerdictThresholds::default()));
    }

    #[test]
    fn test_custom_thresholds() {
        let mut config = ScoringConfig::default();
        config.verdict.medium = 70.0;
        let result = RelevanceScorer::with_config(config).score_text(RESUME, &scenario_job());
        assert_eq!(result.verdict, Verdict::Low);
        assert_eq!(
            result.suggestions[0],
            "Consider gaining more relevant experience in the required field"
        );
    }

    #[test]
    fn test_rank_orders_and_filters() {
        let structurer = ResumeStructurer::new();
        let strong = structurer.parse(
            "Python, React, SQL developer with 5 years of experience. Bachelor of Science.",
        );
        let weak = structurer.parse("Sales associate. Excellent communication.");
        let job = scenario_job();
        let scorer = RelevanceScorer::new();

        let ranked = scorer.rank(&job, [("weak", &weak), ("strong", &strong)], None);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].label, "strong");
        assert!(ranked[0].result.overall_score >= ranked[1].result.overall_score);

        let filtered = scorer.rank(&job, [("weak", &weak), ("strong", &strong)], Some(Verdict::Medium));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].label, "strong");
    }

    #[test]
    fn test_rank_ties_by_label() {
        let parsed = ResumeStructurer::new().parse(RESUME);
        let ranked = RelevanceScorer::new().rank(
            &scenario_job(),
            [("b.txt", &parsed), ("a.txt", &parsed)],
            None,
        );
        assert_eq!(ranked[0].label, "a.txt");
        assert_eq!(ranked[1].label, "b.txt");
    }

    #[test]
    fn test_scorer_shared_across_threads() {
        let scorer = RelevanceScorer::new().with_embedder(MockEmbedder::new());
        let job = scenario_job();
        let expected = scorer.score_text(RESUME, &job);

        std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| s.spawn(|| scorer.score_text(RESUME, &job)))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
