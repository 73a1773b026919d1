//! Talentfit CLI - résumé relevance scoring.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let options = commands::GlobalOptions {
        config: cli.config,
        embedder: cli.embedder,
        verbose: cli.verbose,
    };

    let result = match cli.command {
        Commands::Score {
            resume,
            job,
            company,
            json,
            output,
        } => commands::score::run(resume, job, company, json, output, &options),

        Commands::ParseResume { file, json } => commands::parse_resume::run(file, json, &options),

        Commands::ParseJob {
            file,
            company,
            json,
        } => commands::parse_job::run(file, company, json, &options),

        Commands::Rank {
            job,
            resumes,
            min_verdict,
            json,
        } => commands::rank::run(job, resumes, min_verdict, json, &options),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise `warn`, or `debug` with `--verbose`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "talentfit=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
