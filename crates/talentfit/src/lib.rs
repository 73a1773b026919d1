//! Talentfit: résumé-to-job relevance scoring.
//!
//! Talentfit turns unstructured résumé and job posting text into structured
//! records and scores how well a résumé fits a job, with a verdict, the
//! skills it lacks and suggestions for improving it.
//!
//! # Core Principles
//!
//! - **Never fails on content**: missing fields become sentinels or neutral scores
//! - **Graceful degradation**: a failing embedder falls back to lexical similarity
//! - **Shareable**: structurers and scorer are immutable and `Send + Sync`
//!
//! # Example
//!
//! ```no_run
//! use talentfit::Talentfit;
//!
//! let talentfit = Talentfit::new();
//! let result = talentfit.analyze_files("resume.txt", "job.txt", "Acme").unwrap();
//!
//! println!("Score: {:.1}", result.relevance.overall_score);
//! println!("Verdict: {}", result.relevance.verdict);
//! println!("Missing: {:?}", result.relevance.missing_skills);
//! ```

pub mod catalog;
pub mod config;
pub mod embedding;
pub mod error;
pub mod input;
pub mod job;
pub mod resume;
pub mod scoring;
pub mod text;

mod talentfit;

pub use crate::talentfit::{AnalysisResult, Talentfit};
pub use config::{EmbeddingConfig, EmbeddingProvider, ScoringConfig, TalentfitConfig};
pub use embedding::{Embedder, HashingEmbedder, MockEmbedder, OllamaEmbedder};
pub use error::{Result, TalentfitError};
pub use input::{read_document, DecoderChain, DocumentDecoder, FormatHint, RawDocument};
pub use job::{JobPostingStructurer, JobRequirement};
pub use resume::{ParsedResume, ResumeStructurer, SectionName, StructuredResume};
pub use scoring::{RankedCandidate, RelevanceResult, RelevanceScorer, Verdict};
