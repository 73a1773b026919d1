//! Parse-resume command - show the structure extracted from a résumé.

use std::path::PathBuf;

use colored::Colorize;

use super::{truncate, GlobalOptions};

pub fn run(
    file: PathBuf,
    json_output: bool,
    options: &GlobalOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let talentfit = options.talentfit()?;
    let resume = talentfit.parse_resume_file(&file)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&resume)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "Resume".cyan().bold(),
        file.display().to_string().white()
    );
    println!("Characters: {}", resume.text.chars().count());
    println!();

    println!("{}", "Sections:".yellow().bold());
    let mut populated = 0;
    for (name, body) in resume.structure.populated_sections() {
        populated += 1;
        let preview = body.lines().next().unwrap_or_default();
        println!("  {:15} {}", name.as_str(), truncate(preview, 60).dimmed());
        if options.verbose {
            for line in body.lines().skip(1) {
                println!("  {:15} {}", "", line.dimmed());
            }
        }
    }
    if populated == 0 {
        println!("  {}", "No section headers found".dimmed());
    }
    println!();

    let skills: Vec<&str> = resume.structure.skills.iter().map(String::as_str).collect();
    println!(
        "{} ({}) {}",
        "Skills".yellow().bold(),
        skills.len(),
        skills.join(", ")
    );

    println!();
    println!("{}", "Education:".yellow().bold());
    if resume.structure.education.is_empty() {
        println!("  {}", "None detected".dimmed());
    }
    for mention in &resume.structure.education {
        println!("  {} - {}", mention.degree_text.white(), mention.field);
    }

    Ok(())
}
