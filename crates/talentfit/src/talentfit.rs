//! Main Talentfit struct and public API.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::TalentfitConfig;
use crate::embedding::{self, Embedder};
use crate::error::{Result, TalentfitError};
use crate::input::{DecoderChain, DocumentDecoder, RawDocument};
use crate::job::{JobPostingStructurer, JobRequirement};
use crate::resume::{ParsedResume, ResumeStructurer};
use crate::scoring::{RankedCandidate, RelevanceResult, RelevanceScorer, Verdict};

/// Result of analyzing one résumé against one job posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Structured résumé.
    pub resume: ParsedResume,
    /// Structured job requirement.
    pub job: JobRequirement,
    /// Relevance of the résumé to the job.
    pub relevance: RelevanceResult,
}

/// The main Talentfit engine: decoding, structuring and scoring.
#[derive(Debug)]
pub struct Talentfit {
    config: TalentfitConfig,
    decoders: DecoderChain,
    resumes: ResumeStructurer,
    jobs: JobPostingStructurer,
    scorer: RelevanceScorer,
}

impl Talentfit {
    /// Create an engine with default configuration (lexical semantics only).
    pub fn new() -> Self {
        Self::from_parts(TalentfitConfig::default(), None)
    }

    /// Create an engine from a configuration, building the configured embedder.
    pub fn with_config(config: TalentfitConfig) -> Result<Self> {
        config.validate()?;
        let embedder = embedding::from_config(&config.embedding)?;
        Ok(Self::from_parts(config, embedder))
    }

    fn from_parts(config: TalentfitConfig, embedder: Option<Arc<dyn Embedder>>) -> Self {
        let mut scorer = RelevanceScorer::with_config(config.scoring.clone());
        if let Some(embedder) = embedder {
            scorer = scorer.with_shared_embedder(embedder);
        }

        Self {
            config,
            decoders: DecoderChain::default(),
            resumes: ResumeStructurer::new(),
            jobs: JobPostingStructurer::new(),
            scorer,
        }
    }

    /// Use an embedding provider for semantic similarity.
    pub fn with_embedder(mut self, embedder: impl Embedder + 'static) -> Self {
        self.scorer = RelevanceScorer::with_config(self.config.scoring.clone()).with_embedder(embedder);
        self
    }

    /// Try `decoder` before the bundled text decoders.
    ///
    /// This is how binary formats such as PDF or DOCX are supported.
    pub fn with_decoder(mut self, decoder: impl DocumentDecoder + 'static) -> Self {
        self.decoders = self.decoders.with_priority_decoder(decoder);
        self
    }

    pub fn config(&self) -> &TalentfitConfig {
        &self.config
    }

    pub fn scorer(&self) -> &RelevanceScorer {
        &self.scorer
    }

    /// Read and structure a résumé file.
    pub fn parse_resume_file(&self, path: impl AsRef<Path>) -> Result<ParsedResume> {
        let document = self.read(path.as_ref())?;
        Ok(self.resumes.parse_document(&document))
    }

    /// Read and structure a job posting file.
    pub fn parse_job_file(&self, path: impl AsRef<Path>, company: &str) -> Result<JobRequirement> {
        let document = self.read(path.as_ref())?;
        Ok(self.jobs.parse_document(&document, company))
    }

    /// Structure résumé text.
    pub fn parse_resume(&self, text: &str) -> ParsedResume {
        self.resumes.parse(text)
    }

    /// Structure job posting text.
    pub fn parse_job(&self, text: &str, company: &str) -> JobRequirement {
        self.jobs.parse(text, company)
    }

    /// Analyze a résumé file against a job posting file.
    pub fn analyze_files(
        &self,
        resume_path: impl AsRef<Path>,
        job_path: impl AsRef<Path>,
        company: &str,
    ) -> Result<AnalysisResult> {
        let resume = self.parse_resume_file(resume_path)?;
        let job = self.parse_job_file(job_path, company)?;
        Ok(self.analyze_parsed(resume, job))
    }

    /// Analyze résumé text against job posting text.
    pub fn analyze_text(&self, resume_text: &str, job_text: &str, company: &str) -> AnalysisResult {
        let resume = self.parse_resume(resume_text);
        let job = self.parse_job(job_text, company);
        self.analyze_parsed(resume, job)
    }

    fn analyze_parsed(&self, resume: ParsedResume, job: JobRequirement) -> AnalysisResult {
        let relevance = self.scorer.score(&resume, &job);
        info!(
            title = %job.title,
            score = relevance.overall_score,
            verdict = %relevance.verdict,
            "analysis complete"
        );
        AnalysisResult {
            resume,
            job,
            relevance,
        }
    }

    /// Rank résumé files against one job posting file, best first.
    ///
    /// Candidates are labelled by file name. Any unreadable résumé fails the
    /// whole ranking.
    pub fn rank_files<P: AsRef<Path>>(
        &self,
        job_path: impl AsRef<Path>,
        resume_paths: &[P],
        min_verdict: Option<Verdict>,
    ) -> Result<Vec<RankedCandidate>> {
        let job = self.parse_job_file(job_path, "")?;

        let resumes = resume_paths
            .iter()
            .map(|path| {
                let path = path.as_ref();
                let label = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());
                Ok((label, self.parse_resume_file(path)?))
            })
            .collect::<Result<Vec<(String, ParsedResume)>>>()?;

        let ranked = self.scorer.rank(
            &job,
            resumes.iter().map(|(label, resume)| (label.as_str(), resume)),
            min_verdict,
        );
        info!(job = %job.title, candidates = resumes.len(), kept = ranked.len(), "ranking complete");
        Ok(ranked)
    }

    fn read(&self, path: &Path) -> Result<RawDocument> {
        let document = self.decoders.read_document(path)?;
        if document.text.trim().is_empty() {
            return Err(TalentfitError::EmptyDocument(path.display().to_string()));
        }
        Ok(document)
    }
}

impl Default for Talentfit {
    fn default() -> Self {
        Self::new()
    }
}
