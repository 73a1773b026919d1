//! Job-posting structuring.
//!
//! A posting is artifact-stripped and normalized (keeping paragraph breaks,
//! since requirement sections end at blank lines), then each field is
//! extracted independently. Absent fields get sentinels, never errors.

mod fields;
mod qualifications;
mod skills;

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::input::RawDocument;
use crate::text::{strip_posting_artifacts, TextNormalizer};

pub use fields::{
    extract_experience_required, extract_job_type, extract_location, extract_salary_range,
    extract_title, NOT_SPECIFIED, UNKNOWN_POSITION,
};
pub use qualifications::{extract_qualifications, is_qualification_line};
pub use skills::{
    extract_must_have_skills, extract_nice_to_have_skills, section_after, skills_in_section,
};

/// Structured job requirement: the only job type the scorer accepts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRequirement {
    /// Job title, or `"Unknown Position"`.
    pub title: String,
    /// Company name as supplied by the caller (may be empty).
    pub company: String,
    /// Normalized posting text.
    pub description: String,
    /// Location, or `"Not specified"`.
    pub location: String,
    /// Salary range, or `"Not specified"`.
    pub salary_range: String,
    /// Employment type, or `"Not specified"`.
    pub job_type: String,
    /// Experience requirement phrase, or `"Not specified"`.
    pub experience_required: String,
    /// Required skills, catalogue order.
    pub must_have_skills: IndexSet<String>,
    /// Preferred skills, catalogue order, disjoint from `must_have_skills`.
    pub nice_to_have_skills: IndexSet<String>,
    /// Qualification lines, verbatim.
    pub qualifications: Vec<String>,
}

impl JobRequirement {
    /// A requirement with the given description and sentinel fields.
    ///
    /// Useful for building requirements programmatically rather than by
    /// parsing a posting.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            title: UNKNOWN_POSITION.to_string(),
            company: String::new(),
            description: description.into(),
            location: NOT_SPECIFIED.to_string(),
            salary_range: NOT_SPECIFIED.to_string(),
            job_type: NOT_SPECIFIED.to_string(),
            experience_required: NOT_SPECIFIED.to_string(),
            must_have_skills: IndexSet::new(),
            nice_to_have_skills: IndexSet::new(),
            qualifications: Vec::new(),
        }
    }

    /// Set the required skills.
    pub fn with_must_have<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.must_have_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    /// Set the preferred skills. Skills already required are dropped.
    pub fn with_nice_to_have<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let must = &self.must_have_skills;
        self.nice_to_have_skills = skills
            .into_iter()
            .map(Into::into)
            .filter(|s| !must.contains(s))
            .collect();
        self
    }

    /// Set the qualification lines.
    pub fn with_qualifications<I, S>(mut self, qualifications: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.qualifications = qualifications.into_iter().map(Into::into).collect();
        self
    }

    /// Set the experience requirement phrase.
    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience_required = experience.into();
        self
    }

    /// Must-have then nice-to-have skills, in job order.
    pub fn all_skills(&self) -> impl Iterator<Item = &str> {
        self.must_have_skills
            .iter()
            .chain(self.nice_to_have_skills.iter())
            .map(|s| s.as_str())
    }
}

/// Extracts a [`JobRequirement`] from posting text.
#[derive(Debug, Clone)]
pub struct JobPostingStructurer {
    normalizer: TextNormalizer,
}

impl Default for JobPostingStructurer {
    fn default() -> Self {
        Self {
            normalizer: TextNormalizer::new().keep_paragraph_breaks(),
        }
    }
}

impl JobPostingStructurer {
    /// Create a structurer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a posting. `company` is copied through verbatim.
    pub fn parse(&self, text: &str, company: &str) -> JobRequirement {
        let description = self.normalizer.normalize(&strip_posting_artifacts(text));

        let must_have_skills = extract_must_have_skills(&description);
        let nice_to_have_skills = extract_nice_to_have_skills(&description, &must_have_skills);

        let job = JobRequirement {
            title: extract_title(&description),
            company: company.to_string(),
            location: extract_location(&description),
            salary_range: extract_salary_range(&description),
            job_type: extract_job_type(&description),
            experience_required: extract_experience_required(&description),
            must_have_skills,
            nice_to_have_skills,
            qualifications: extract_qualifications(&description),
            description,
        };

        debug!(
            title = %job.title,
            must_have = job.must_have_skills.len(),
            nice_to_have = job.nice_to_have_skills.len(),
            qualifications = job.qualifications.len(),
            "structured job posting"
        );

        job
    }

    /// Parse a decoded posting document.
    pub fn parse_document(&self, document: &RawDocument, company: &str) -> JobRequirement {
        self.parse(&document.text, company)
    }
}
