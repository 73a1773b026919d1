//! Error types for the talentfit library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for talentfit operations.
///
/// Extraction misses are never errors: absent patterns produce sentinels,
/// empty collections, or neutral scores. These variants cover input handling
/// and the external collaborators only.
#[derive(Debug, Error)]
pub enum TalentfitError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File format not supported by any registered decoder.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// A single decoder rejected the input.
    #[error("Decoder '{decoder}' failed: {message}")]
    Decode { decoder: String, message: String },

    /// Every decoder in the chain rejected the input.
    #[error("All decoders failed: {}", attempts.join("; "))]
    DecodeFailed { attempts: Vec<String> },

    /// Document decoded to no usable text.
    #[error("Empty document: {0}")]
    EmptyDocument(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Embedding provider failure.
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Lexical similarity could not be computed.
    #[error("Similarity error: {0}")]
    Similarity(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for talentfit operations.
pub type Result<T> = std::result::Result<T, TalentfitError>;
