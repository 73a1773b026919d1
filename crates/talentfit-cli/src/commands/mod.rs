//! CLI command implementations.

pub mod parse_job;
pub mod parse_resume;
pub mod rank;
pub mod score;

use std::path::PathBuf;

use talentfit::{Talentfit, TalentfitConfig};
use tracing::debug;

use crate::cli::EmbedderChoice;

/// Options shared by every subcommand.
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub embedder: Option<EmbedderChoice>,
    pub verbose: bool,
}

impl GlobalOptions {
    /// Build the engine from `--config` and `--embedder`.
    pub fn talentfit(&self) -> Result<Talentfit, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => TalentfitConfig::from_file(path)?,
            None => TalentfitConfig::default(),
        };

        if let Some(choice) = self.embedder {
            config.embedding.provider = choice.into();
        }
        debug!(provider = ?config.embedding.provider, "building engine");

        Ok(Talentfit::with_config(config)?)
    }
}

/// Shorten `text` to `max` characters for terminal display.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let head: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{}...", head)
    }
}
