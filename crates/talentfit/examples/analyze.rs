//! Example: Score a résumé against a job posting with Talentfit.
//!
//! Usage:
//!   cargo run --example analyze -- <resume_path> <job_path> [company]
//!
//! Example:
//!   cargo run --example analyze -- resume.txt posting.md Acme

use std::env;
use std::path::Path;

use talentfit::{HashingEmbedder, Talentfit};

fn main() -> talentfit::Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() < 3 {
        eprintln!("Usage: cargo run --example analyze -- <resume_path> <job_path> [company]");
        eprintln!("\nExample:");
        eprintln!("  cargo run --example analyze -- resume.txt posting.md Acme");
        std::process::exit(1);
    }

    for path in &args[1..3] {
        if !Path::new(path).exists() {
            eprintln!("Error: File not found: {}", path);
            std::process::exit(1);
        }
    }
    let company = args.get(3).map(String::as_str).unwrap_or("");

    let separator = "=".repeat(80);
    println!("{}", separator);
    println!("Talentfit Analysis: {} vs {}", args[1], args[2]);
    println!("{}", separator);
    println!();

    // Hashing embeddings need no running model server
    let talentfit = Talentfit::new().with_embedder(HashingEmbedder::new());
    let result = talentfit.analyze_files(&args[1], &args[2], company)?;

    let job = &result.job;
    println!("## Job");
    println!("  Title: {}", job.title);
    println!("  Location: {}", job.location);
    println!("  Type: {}", job.job_type);
    println!("  Salary: {}", job.salary_range);
    println!("  Experience: {}", job.experience_required);
    println!(
        "  Must have: {}",
        job.must_have_skills.iter().cloned().collect::<Vec<_>>().join(", ")
    );
    println!(
        "  Nice to have: {}",
        job.nice_to_have_skills.iter().cloned().collect::<Vec<_>>().join(", ")
    );
    println!();

    let resume = &result.resume.structure;
    println!("## Résumé");
    for (section, text) in resume.populated_sections() {
        println!("  {:15} {} chars", section.as_str(), text.len());
    }
    println!("  Skills: {}", resume.skills.iter().cloned().collect::<Vec<_>>().join(", "));
    for mention in &resume.education {
        println!("  Education: {} ({})", mention.degree_text, mention.field);
    }
    println!();

    let relevance = &result.relevance;
    let breakdown = &relevance.breakdown;
    println!("## Scores");
    println!("  Hard match:  {:6.2}", relevance.hard_match_score);
    println!(
        "  Semantic:    {:6.2} ({})",
        relevance.semantic_match_score, breakdown.semantic_match.backend
    );
    println!("  Education:   {:6.2}", relevance.education_match_score);
    println!("  Experience:  {:6.2}", relevance.experience_match_score);
    println!("  Overall:     {:6.2}", relevance.overall_score);
    println!("  Verdict:     {}", relevance.verdict);
    println!();

    println!(
        "## Skills ({} of {} matched)",
        breakdown.skill_analysis.matched_skills.len(),
        breakdown.skill_analysis.job_skills.len()
    );
    if !relevance.missing_skills.is_empty() {
        println!("  Missing: {}", relevance.missing_skills.join(", "));
    }
    println!();

    println!("## Suggestions ({} total)", relevance.suggestions.len());
    for (i, suggestion) in relevance.suggestions.iter().enumerate() {
        println!("  {}. {}", i + 1, suggestion);
    }
    println!();

    println!("{}", separator);

    Ok(())
}
