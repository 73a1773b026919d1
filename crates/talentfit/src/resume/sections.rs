//! Header-driven résumé sectioning.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Named résumé section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionName {
    ContactInfo,
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
    Certifications,
    Other,
}

impl SectionName {
    /// Every section, in output order.
    pub const ALL: [SectionName; 8] = [
        SectionName::ContactInfo,
        SectionName::Summary,
        SectionName::Experience,
        SectionName::Education,
        SectionName::Skills,
        SectionName::Projects,
        SectionName::Certifications,
        SectionName::Other,
    ];

    /// snake_case label, as serialized.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionName::ContactInfo => "contact_info",
            SectionName::Summary => "summary",
            SectionName::Experience => "experience",
            SectionName::Education => "education",
            SectionName::Skills => "skills",
            SectionName::Projects => "projects",
            SectionName::Certifications => "certifications",
            SectionName::Other => "other",
        }
    }
}

impl std::fmt::Display for SectionName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Header cues, tested in order; the first hit moves the cursor.
static SECTION_HEADERS: Lazy<Vec<(Regex, SectionName)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"(?i)\b(?:contact|personal|address|phone|email)").unwrap(),
            SectionName::ContactInfo,
        ),
        (
            Regex::new(r"(?i)\b(?:summary|profile|objective|about)").unwrap(),
            SectionName::Summary,
        ),
        (
            Regex::new(r"(?i)\b(?:experience|work history|employment|career)").unwrap(),
            SectionName::Experience,
        ),
        (
            Regex::new(r"(?i)\b(?:education|academic|qualification)").unwrap(),
            SectionName::Education,
        ),
        (
            Regex::new(r"(?i)\b(?:skills|technical skills|competencies)").unwrap(),
            SectionName::Skills,
        ),
        (
            Regex::new(r"(?i)\b(?:projects|portfolio)").unwrap(),
            SectionName::Projects,
        ),
        (
            Regex::new(r"(?i)\b(?:certifications|certificates|licenses)").unwrap(),
            SectionName::Certifications,
        ),
    ]
});

/// The section a line announces, if it looks like a header.
pub fn header_section(line: &str) -> Option<SectionName> {
    SECTION_HEADERS
        .iter()
        .find(|(pattern, _)| pattern.is_match(line))
        .map(|(_, name)| *name)
}

/// Split `text` into sections with a single forward pass.
///
/// Text before the first header lands in `Other`. Header lines are kept in
/// the section they open. All eight keys are always present.
pub fn extract_sections(text: &str) -> IndexMap<SectionName, String> {
    let mut sections: IndexMap<SectionName, String> = SectionName::ALL
        .iter()
        .map(|name| (*name, String::new()))
        .collect();

    let mut current = SectionName::Other;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(name) = header_section(line) {
            current = name;
        }

        let body = sections.entry(current).or_default();
        if !body.is_empty() {
            body.push('\n');
        }
        body.push_str(line);
    }

    sections
}
