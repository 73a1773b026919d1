//! Score command - score one résumé against one job posting.

use std::path::PathBuf;

use colored::{ColoredString, Colorize};
use talentfit::{RelevanceResult, Verdict};

use super::GlobalOptions;

pub fn run(
    resume: PathBuf,
    job: PathBuf,
    company: String,
    json_output: bool,
    output: Option<PathBuf>,
    options: &GlobalOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    for path in [&resume, &job] {
        if !path.exists() {
            return Err(format!("File not found: {}", path.display()).into());
        }
    }

    let talentfit = options.talentfit()?;
    let result = talentfit.analyze_files(&resume, &job, &company)?;

    if let Some(ref path) = output {
        std::fs::write(path, serde_json::to_string_pretty(&result)?)?;
    }

    if json_output {
        println!("{}", serde_json::to_string_pretty(&result.relevance)?);
        return Ok(());
    }

    println!(
        "{} {} {} {}",
        "Scoring".cyan().bold(),
        resume.display().to_string().white(),
        "against".cyan().bold(),
        result.job.title.white()
    );
    println!();

    print_relevance(&result.relevance, options.verbose);

    if let Some(path) = output {
        println!();
        println!(
            "{} {}",
            "Saved to".green().bold(),
            path.display().to_string().white()
        );
    }

    Ok(())
}

/// Colour a verdict label.
pub fn verdict_label(verdict: Verdict) -> ColoredString {
    match verdict {
        Verdict::High => verdict.as_str().green().bold(),
        Verdict::Medium => verdict.as_str().yellow().bold(),
        Verdict::Low => verdict.as_str().red().bold(),
    }
}

fn print_relevance(relevance: &RelevanceResult, verbose: bool) {
    println!(
        "Overall score: {} ({})",
        format!("{:.1}", relevance.overall_score).white().bold(),
        verdict_label(relevance.verdict)
    );
    println!();

    println!("{}", "Components:".yellow().bold());
    println!("  Hard match:       {:>6.1}", relevance.hard_match_score);
    println!(
        "  Semantic match:   {:>6.1}  ({})",
        relevance.semantic_match_score, relevance.breakdown.semantic_match.backend
    );
    println!("  Education match:  {:>6.1}", relevance.education_match_score);
    println!("  Experience match: {:>6.1}", relevance.experience_match_score);
    println!();

    let skills = &relevance.breakdown.skill_analysis;
    if !skills.matched_skills.is_empty() {
        println!(
            "{} {}",
            "Matched skills:".green().bold(),
            skills.matched_skills.join(", ")
        );
    }
    if relevance.missing_skills.is_empty() {
        println!("{}", "No missing skills".green());
    } else {
        println!(
            "{} {}",
            "Missing skills:".red().bold(),
            relevance.missing_skills.join(", ")
        );
    }

    if verbose {
        let hard = &relevance.breakdown.hard_match;
        let education = &relevance.breakdown.education_match;
        let experience = &relevance.breakdown.experience_match;
        println!();
        println!("{}", "Breakdown:".yellow().bold());
        println!("  Lexical similarity: {:.2}", hard.lexical_similarity);
        println!("  Skill coverage:     {:.2}", hard.skill_coverage);
        println!(
            "  Exact skill matches: {}/{}",
            hard.exact_skill_matches, hard.total_required_skills
        );
        println!(
            "  Degree level:       {} (required {})",
            education.resume_level, education.required_level
        );
        println!(
            "  Years:              {} (required {})",
            experience.resume_years,
            experience
                .required_years
                .map_or_else(|| "-".to_string(), |y| y.to_string())
        );
        println!("  Resume skills:      {}", skills.resume_skills.join(", "));
    }

    if !relevance.suggestions.is_empty() {
        println!();
        println!("{}", "Suggestions:".yellow().bold());
        for suggestion in &relevance.suggestions {
            println!("  - {}", suggestion);
        }
    }
}
