//! Relevance scoring of résumés against job requirements.
//!
//! The overall score blends four components:
//!
//! - **Hard match**: TF-IDF similarity plus tiered skill coverage
//! - **Semantic match**: embedding or lexical similarity to the description
//! - **Education match**: degree level against the stated qualifications
//! - **Experience match**: years claimed against years required
//!
//! Bonuses reward complete skill coverage and strong semantic similarity.

mod education;
mod experience;
mod result;
mod scorer;
mod semantic;
mod skills;
mod suggestions;

pub use education::education_match;
pub use experience::{experience_match, required_years, resume_years};
pub use result::{
    Breakdown, EducationMatchDetails, ExperienceMatchDetails, HardMatchDetails, RankedCandidate,
    RelevanceResult, SemanticMatchDetails, SkillAnalysis, Verdict,
};
pub use scorer::{classify, RelevanceScorer};
pub use semantic::{
    EmbeddingSimilarity, LexicalSimilarity, SemanticMatcher, SemanticScore, SimilarityStrategy,
};
pub use skills::{extract_resume_skills, find_missing_skills, is_skill_present};
pub use suggestions::generate_suggestions;
