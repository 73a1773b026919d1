//! Fixed keyword catalogues shared by the structurers and the scorer.
//!
//! Everything here is compiled once on first use and read-only afterwards,
//! so the catalogues can be shared freely across threads.

use once_cell::sync::Lazy;
use regex::Regex;

// =============================================================================
// KEYWORD FAMILIES
// =============================================================================

/// A named group of skill terms compiled into one case-insensitive regex.
///
/// A term only counts when it stands on word boundaries: the regex anchors
/// the start, and [`KeywordFamily::find_all`] rejects matches followed by an
/// alphanumeric character (the regex engine has no look-ahead, and terms like
/// `c++` end in non-word characters).
#[derive(Debug)]
pub struct KeywordFamily {
    /// Family label (e.g. "languages").
    pub name: &'static str,
    pattern: Regex,
}

impl KeywordFamily {
    /// Compile a family from its terms. Longer terms are tried first so that
    /// `javascript` wins over `java` at the same position.
    pub fn new(name: &'static str, terms: &[&str]) -> Self {
        let mut sorted: Vec<&str> = terms.to_vec();
        sorted.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));

        let alternation = sorted
            .iter()
            .map(|t| regex::escape(t).replace(' ', r"\s+"))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = Regex::new(&format!(r"(?i)\b(?:{alternation})")).unwrap();
        Self { name, pattern }
    }

    /// All boundary-respecting matches in `text`, lower-cased, in order.
    pub fn find_all(&self, text: &str) -> Vec<String> {
        self.pattern
            .find_iter(text)
            .filter(|m| {
                text[m.end()..]
                    .chars()
                    .next()
                    .is_none_or(|c| !c.is_alphanumeric())
            })
            .map(|m| collapse_spaces(&m.as_str().to_lowercase()))
            .collect()
    }
}

fn collapse_spaces(term: &str) -> String {
    term.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Skill vocabulary used when structuring a résumé.
pub static RESUME_SKILL_FAMILIES: Lazy<Vec<KeywordFamily>> = Lazy::new(|| {
    vec![
        KeywordFamily::new(
            "languages_and_frameworks",
            &[
                "python", "java", "javascript", "typescript", "react", "angular", "vue",
                "node.js", "nodejs", "express", "django", "flask", "fastapi",
            ],
        ),
        KeywordFamily::new(
            "data_stores",
            &["sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch"],
        ),
        KeywordFamily::new(
            "cloud",
            &["aws", "azure", "gcp", "docker", "kubernetes", "terraform"],
        ),
        KeywordFamily::new(
            "version_control_ci",
            &["git", "github", "gitlab", "jenkins", "ci/cd"],
        ),
        KeywordFamily::new(
            "ml_ai",
            &["machine learning", "ml", "ai", "deep learning", "nlp", "computer vision"],
        ),
        KeywordFamily::new(
            "data_libraries",
            &["pandas", "numpy", "scikit-learn", "tensorflow", "pytorch"],
        ),
        KeywordFamily::new(
            "styling",
            &["html", "css", "bootstrap", "sass", "less"],
        ),
        KeywordFamily::new(
            "methodology",
            &["agile", "scrum", "kanban", "devops"],
        ),
    ]
});

/// Wider skill vocabulary used by the scorer's own résumé skill pass.
pub static SCORING_SKILL_FAMILIES: Lazy<Vec<KeywordFamily>> = Lazy::new(|| {
    vec![
        KeywordFamily::new(
            "languages",
            &[
                "python", "java", "javascript", "typescript", "c++", "c#", "php", "ruby", "go",
                "rust", "swift", "kotlin", "scala", "r", "matlab",
            ],
        ),
        KeywordFamily::new(
            "web_frameworks",
            &[
                "react", "angular", "vue", "node.js", "nodejs", "express", "django", "flask",
                "fastapi", "spring", "laravel", "rails", "asp.net",
            ],
        ),
        KeywordFamily::new(
            "front_end",
            &[
                "html", "css", "bootstrap", "sass", "less", "tailwind", "jquery", "webpack",
                "babel",
            ],
        ),
        KeywordFamily::new(
            "data_stores",
            &[
                "sql", "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "oracle",
                "sqlite", "dynamodb", "cassandra",
            ],
        ),
        KeywordFamily::new(
            "cloud_devops",
            &[
                "aws", "azure", "gcp", "docker", "kubernetes", "terraform", "ansible", "jenkins",
                "gitlab", "github", "ci/cd", "devops",
            ],
        ),
        KeywordFamily::new(
            "ml_ai",
            &[
                "machine learning", "ml", "ai", "deep learning", "nlp", "computer vision",
                "pandas", "numpy", "scikit-learn", "tensorflow", "pytorch", "keras",
            ],
        ),
        KeywordFamily::new(
            "tools",
            &[
                "git", "jira", "confluence", "slack", "figma", "photoshop", "illustrator",
                "tableau", "power bi",
            ],
        ),
        KeywordFamily::new(
            "methodology",
            &[
                "agile", "scrum", "kanban", "waterfall", "tdd", "bdd", "microservices",
                "rest api", "graphql",
            ],
        ),
        KeywordFamily::new(
            "platforms",
            &[
                "linux", "unix", "windows", "macos", "android", "ios", "firebase", "heroku",
                "netlify", "vercel",
            ],
        ),
    ]
});

// =============================================================================
// JOB POSTING CATALOGUE
// =============================================================================

/// Skill terms recognised in job postings, in reporting order.
pub const JOB_SKILL_KEYWORDS: &[&str] = &[
    // Programming languages
    "Python", "Java", "JavaScript", "TypeScript", "C++", "C#", "Go", "Rust", "PHP", "Ruby",
    "Swift", "Kotlin", "Scala", "R", "MATLAB", "Perl", "Shell", "Bash",
    // Web technologies
    "HTML", "CSS", "React", "Angular", "Vue.js", "Node.js", "Express.js", "Django", "Flask",
    "FastAPI", "Spring", "Laravel", "ASP.NET", "jQuery", "Bootstrap", "SASS", "LESS",
    // Databases
    "SQL", "MySQL", "PostgreSQL", "MongoDB", "Redis", "Elasticsearch", "Cassandra",
    "Oracle", "SQLite", "DynamoDB", "Neo4j",
    // Cloud & DevOps
    "AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "Terraform", "Jenkins",
    "Git", "GitHub", "GitLab", "CI/CD", "Ansible", "Chef", "Puppet",
    // Data science & ML
    "Machine Learning", "Deep Learning", "Artificial Intelligence", "Data Science",
    "Pandas", "NumPy", "Scikit-learn", "TensorFlow", "PyTorch", "Keras",
    "Natural Language Processing", "Computer Vision", "Statistics", "Analytics",
    // Mobile
    "iOS", "Android", "React Native", "Flutter", "Xamarin", "Ionic",
    // Other
    "Linux", "Unix", "Windows", "MacOS", "REST API", "GraphQL", "Microservices",
    "Agile", "Scrum", "Kanban", "DevOps", "TDD", "BDD",
];

/// Terms this short only match on token boundaries ("R" must not match every
/// word containing an r).
pub const SHORT_TERM_MAX_LEN: usize = 3;

/// Case-insensitive catalogue membership test against lower-cased `text`.
pub fn mentions_term(text_lower: &str, term: &str) -> bool {
    let term_lower = term.to_lowercase();
    if term_lower.chars().count() <= SHORT_TERM_MAX_LEN {
        crate::text::contains_token(text_lower, &term_lower)
    } else {
        text_lower.contains(&term_lower)
    }
}

/// Frequently posted titles, used when no title cue is found.
pub const COMMON_TITLES: &[&str] = &[
    "software engineer",
    "data scientist",
    "product manager",
    "business analyst",
    "devops engineer",
    "full stack developer",
    "frontend developer",
    "backend developer",
    "machine learning engineer",
];

/// Employment types in detection order.
pub const JOB_TYPES: &[&str] = &[
    "full-time",
    "part-time",
    "contract",
    "internship",
    "freelance",
    "remote",
    "hybrid",
];

// =============================================================================
// DEGREES
// =============================================================================

/// Degree patterns mapped to an ordinal level, highest level first.
pub static DEGREE_LEVELS: Lazy<Vec<(Regex, u8)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"(?i)\b(?:ph\.?\s?d|doctorate|doctoral)\b").unwrap(), 4),
        (Regex::new(r"(?i)\b(?:masters?|m\.s|m\.sc|msc|mba|mca)\b").unwrap(), 3),
        (Regex::new(r"(?i)\b(?:bachelors?|b\.s|b\.sc|bsc|bca|b\.?tech)\b").unwrap(), 2),
        (Regex::new(r"(?i)\bdiploma\b").unwrap(), 1),
    ]
});

/// Highest degree level mentioned in `text` (0 when none).
pub fn highest_degree_level(text: &str) -> u8 {
    DEGREE_LEVELS
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, level)| *level)
        .unwrap_or(0)
}

/// Lower-case phrases that count as education evidence in a résumé.
///
/// A résumé with none of them scores zero against stated qualifications.
pub const EDUCATION_EVIDENCE_KEYWORDS: &[&str] = &[
    "bachelor",
    "master",
    "phd",
    "doctorate",
    "degree",
    "diploma",
    "b.s.",
    "m.s.",
    "mba",
    "bca",
    "mca",
    "computer science",
    "engineering",
    "mathematics",
    "statistics",
];
