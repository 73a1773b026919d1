//! Résumé structuring: sections, skills, and education mentions.
//!
//! Structuring never fails on a string. Résumés without recognizable
//! headers end up entirely in [`SectionName::Other`]; missing skills or
//! degrees yield empty collections.

mod education;
mod sections;

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::RESUME_SKILL_FAMILIES;
use crate::input::RawDocument;
use crate::text::TextNormalizer;

pub use education::{extract_education, EducationMention};
pub use sections::{extract_sections, header_section, SectionName};

/// Structure extracted from one résumé.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredResume {
    /// All eight sections in enumeration order; absent sections are empty.
    pub sections: IndexMap<SectionName, String>,
    /// Lower-cased catalogue skills found in the text.
    pub skills: BTreeSet<String>,
    /// Degree mentions, in line order.
    pub education: Vec<EducationMention>,
}

impl StructuredResume {
    /// Text of one section (empty when absent).
    pub fn section(&self, name: SectionName) -> &str {
        self.sections.get(&name).map(|s| s.as_str()).unwrap_or("")
    }

    /// Sections that received at least one line.
    pub fn populated_sections(&self) -> impl Iterator<Item = (SectionName, &str)> {
        self.sections
            .iter()
            .filter(|(_, body)| !body.is_empty())
            .map(|(name, body)| (*name, body.as_str()))
    }
}

/// A normalized résumé together with its structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedResume {
    /// Normalized full text.
    pub text: String,
    /// Extracted structure.
    pub structure: StructuredResume,
}

/// Extracts structure from résumé text.
#[derive(Debug, Clone, Default)]
pub struct ResumeStructurer {
    normalizer: TextNormalizer,
}

impl ResumeStructurer {
    /// Create a structurer with the default normalizer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize `text` and extract its structure.
    pub fn parse(&self, text: &str) -> ParsedResume {
        let text = self.normalizer.normalize(text);
        let structure = self.structure(&text);

        debug!(
            chars = text.len(),
            skills = structure.skills.len(),
            education = structure.education.len(),
            sections = structure.populated_sections().count(),
            "structured resume"
        );

        ParsedResume { text, structure }
    }

    /// Structure a decoded document.
    pub fn parse_document(&self, document: &RawDocument) -> ParsedResume {
        self.parse(&document.text)
    }

    /// Extract structure from already-normalized text.
    pub fn structure(&self, text: &str) -> StructuredResume {
        StructuredResume {
            sections: extract_sections(text),
            skills: Self::extract_skills(text),
            education: extract_education(text),
        }
    }

    /// Catalogue skills present in `text`, lower-cased.
    pub fn extract_skills(text: &str) -> BTreeSet<String> {
        let lowered = text.to_lowercase();
        RESUME_SKILL_FAMILIES
            .iter()
            .flat_map(|family| family.find_all(&lowered))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "Jane Doe\n\
        Contact: jane@example.com | 555-0100\n\
        Summary\n\
        Backend engineer with 6 years of experience.\n\
        Work History\n\
        Senior Engineer, Acme (2019 - 2024)\n\
        Built services in Python and Django on AWS with Docker.\n\
        Education\n\
        Bachelor of Science in Computer Science, State University\n\
        Skills\n\
        Python, PostgreSQL, Kubernetes, Git, Machine Learning\n\
        Page 1 of 2\n";

    #[test]
    fn test_parse_sample() {
        let parsed = ResumeStructurer::new().parse(SAMPLE);

        assert!(!parsed.text.contains("Page 1 of 2"));
        assert_eq!(parsed.structure.section(SectionName::Other), "Jane Doe");
        assert!(parsed.structure.section(SectionName::Education).contains("Bachelor"));

        let expected: BTreeSet<String> = [
            "aws", "django", "docker", "git", "kubernetes", "machine learning", "postgresql",
            "python",
        ]
        .iter()
        .map(|s| s.to_string())
        .collect();
        assert_eq!(parsed.structure.skills, expected);

        assert_eq!(parsed.structure.education.len(), 1);
        assert_eq!(
            parsed.structure.education[0].field,
            "Science in Computer Science"
        );
    }

    #[test]
    fn test_skills_are_catalogue_members_only() {
        let skills = ResumeStructurer::extract_skills("Expert in COBOL and Fortran, some SQL");
        assert_eq!(skills.into_iter().collect::<Vec<_>>(), vec!["sql"]);
    }

    #[test]
    fn test_no_headers_goes_to_other() {
        let parsed = ResumeStructurer::new().parse("Just a line\nAnother line");
        assert_eq!(parsed.structure.section(SectionName::Other), "Just a line\nAnother line");
        assert_eq!(parsed.structure.populated_sections().count(), 1);
    }

    #[test]
    fn test_empty_text() {
        let parsed = ResumeStructurer::new().parse("");
        assert_eq!(parsed.text, "");
        assert_eq!(parsed.structure.sections.len(), 8);
        assert!(parsed.structure.skills.is_empty());
        assert!(parsed.structure.education.is_empty());
    }

    #[test]
    fn test_parse_document_uses_text() {
        let doc = RawDocument::new("Skills\nReact and TypeScript");
        let parsed = ResumeStructurer::new().parse_document(&doc);
        assert!(parsed.structure.skills.contains("react"));
        assert!(parsed.structure.skills.contains("typescript"));
    }

    #[test]
    fn test_serializes_sections_as_mapping() {
        let parsed = ResumeStructurer::new().parse("Skills\nRust");
        let json = serde_json::to_value(&parsed.structure).unwrap();
        assert_eq!(json["sections"]["skills"], "Skills\nRust");
        assert_eq!(json["sections"]["contact_info"], "");
    }
}
