//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Talentfit: résumé-to-job relevance scoring
#[derive(Parser)]
#[command(name = "talentfit")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Semantic similarity backend (overrides the configuration file)
    #[arg(long, global = true)]
    pub embedder: Option<EmbedderChoice>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a résumé against a job posting
    Score {
        /// Path to the résumé (text or markdown)
        #[arg(value_name = "RESUME")]
        resume: PathBuf,

        /// Path to the job posting
        #[arg(value_name = "JOB")]
        job: PathBuf,

        /// Company name recorded with the job
        #[arg(short, long, default_value = "")]
        company: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Also write the full JSON result to this path
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the structure extracted from a résumé
    ParseResume {
        /// Path to the résumé
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the requirement extracted from a job posting
    ParseJob {
        /// Path to the job posting
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Company name recorded with the job
        #[arg(short, long, default_value = "")]
        company: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank several résumés against one job posting
    Rank {
        /// Path to the job posting
        #[arg(value_name = "JOB")]
        job: PathBuf,

        /// Paths to the résumés
        #[arg(value_name = "RESUMES", required = true)]
        resumes: Vec<PathBuf>,

        /// Drop candidates below this verdict (low, medium, high)
        #[arg(long)]
        min_verdict: Option<talentfit::Verdict>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Semantic similarity backend choice
#[derive(Clone, Copy, Debug, Default)]
pub enum EmbedderChoice {
    /// No embedder - TF-IDF similarity only
    #[default]
    None,
    /// Local hashing embedder
    Hashing,
    /// Ollama local models (requires Ollama running)
    Ollama,
}

impl std::str::FromStr for EmbedderChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "lexical" | "tfidf" => Ok(EmbedderChoice::None),
            "hashing" | "local" => Ok(EmbedderChoice::Hashing),
            "ollama" => Ok(EmbedderChoice::Ollama),
            _ => Err(format!(
                "Unknown embedder: {}. Use: none, hashing, or ollama.",
                s
            )),
        }
    }
}

impl std::fmt::Display for EmbedderChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbedderChoice::None => write!(f, "none"),
            EmbedderChoice::Hashing => write!(f, "hashing"),
            EmbedderChoice::Ollama => write!(f, "ollama"),
        }
    }
}

impl From<EmbedderChoice> for talentfit::EmbeddingProvider {
    fn from(choice: EmbedderChoice) -> Self {
        match choice {
            EmbedderChoice::None => talentfit::EmbeddingProvider::None,
            EmbedderChoice::Hashing => talentfit::EmbeddingProvider::Hashing,
            EmbedderChoice::Ollama => talentfit::EmbeddingProvider::Ollama,
        }
    }
}
