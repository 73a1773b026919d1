//! Parse-job command - show the requirement extracted from a job posting.

use std::path::PathBuf;

use colored::Colorize;

use super::GlobalOptions;

pub fn run(
    file: PathBuf,
    company: String,
    json_output: bool,
    options: &GlobalOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let talentfit = options.talentfit()?;
    let job = talentfit.parse_job_file(&file, &company)?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&job)?);
        return Ok(());
    }

    println!("{} {}", "Job".cyan().bold(), job.title.white().bold());
    if !job.company.is_empty() {
        println!("  Company:    {}", job.company);
    }
    println!("  Location:   {}", job.location);
    println!("  Type:       {}", job.job_type);
    println!("  Salary:     {}", job.salary_range);
    println!("  Experience: {}", job.experience_required);
    println!();

    let must: Vec<&str> = job.must_have_skills.iter().map(String::as_str).collect();
    let nice: Vec<&str> = job.nice_to_have_skills.iter().map(String::as_str).collect();
    println!("{} {}", "Must have:".red().bold(), must.join(", "));
    println!("{} {}", "Nice to have:".blue().bold(), nice.join(", "));

    println!();
    println!("{}", "Qualifications:".yellow().bold());
    if job.qualifications.is_empty() {
        println!("  {}", "None stated".dimmed());
    }
    for qualification in &job.qualifications {
        println!("  - {}", qualification);
    }

    Ok(())
}
