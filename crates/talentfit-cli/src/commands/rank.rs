//! Rank command - rank résumés against one job posting.

use std::path::PathBuf;

use colored::Colorize;
use serde::Serialize;
use talentfit::{RankedCandidate, Verdict};

use super::score::verdict_label;
use super::{truncate, GlobalOptions};

/// JSON output: the ranking together with what it was ranked against.
#[derive(Serialize)]
struct RankReport<'a> {
    job: String,
    resumes_considered: usize,
    min_verdict: Option<Verdict>,
    candidates: &'a [RankedCandidate],
}

pub fn run(
    job: PathBuf,
    resumes: Vec<PathBuf>,
    min_verdict: Option<Verdict>,
    json_output: bool,
    options: &GlobalOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if !job.exists() {
        return Err(format!("File not found: {}", job.display()).into());
    }

    let talentfit = options.talentfit()?;
    let ranked = talentfit.rank_files(&job, resumes.as_slice(), min_verdict)?;

    if json_output {
        let report = RankReport {
            job: job.display().to_string(),
            resumes_considered: resumes.len(),
            min_verdict,
            candidates: &ranked,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} resumes against {}",
        "Ranking".cyan().bold(),
        resumes.len().to_string().white().bold(),
        job.display().to_string().white()
    );
    if let Some(min) = min_verdict {
        println!(
            "Showing {} candidates at {} or above",
            ranked.len().to_string().white().bold(),
            verdict_label(min)
        );
    }
    println!();

    println!(
        "  {:>3}  {:30} {:>7}  {:8} {}",
        "#", "Resume", "Score", "Verdict", "Missing"
    );
    for (position, candidate) in ranked.iter().enumerate() {
        let result = &candidate.result;
        println!(
            "  {:>3}  {:30} {:>7.1}  {:8} {}",
            position + 1,
            truncate(&candidate.label, 30),
            result.overall_score,
            verdict_label(result.verdict),
            truncate(&result.missing_skills.join(", "), 40).dimmed()
        );
    }

    if ranked.is_empty() {
        println!("  {}", "No candidates met the minimum verdict".yellow());
    }

    Ok(())
}
