//! Decoded document and format detection.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Text extracted from an input document, plus descriptive metadata.
///
/// Produced once by a decoder and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDocument {
    /// Extracted plain text.
    pub text: String,
    /// Descriptive metadata (`file`, `format`, `size_bytes`, `sha256`, `decoder`).
    pub metadata: IndexMap<String, String>,
}

impl RawDocument {
    /// Create a document with no metadata.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            metadata: IndexMap::new(),
        }
    }

    /// Attach a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }

    /// Look up a metadata entry.
    pub fn meta(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(|s| s.as_str())
    }
}

/// Container format guessed from a file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatHint {
    Text,
    Markdown,
    Pdf,
    Docx,
    Unknown,
}

impl FormatHint {
    /// Detect the format from a path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Self {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "txt" | "text" => FormatHint::Text,
            "md" | "markdown" => FormatHint::Markdown,
            "pdf" => FormatHint::Pdf,
            "docx" => FormatHint::Docx,
            _ => FormatHint::Unknown,
        }
    }

    /// Short lowercase label stored in document metadata.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatHint::Text => "text",
            FormatHint::Markdown => "markdown",
            FormatHint::Pdf => "pdf",
            FormatHint::Docx => "docx",
            FormatHint::Unknown => "unknown",
        }
    }

    /// Whether the format is plain text that the bundled decoders can read.
    pub fn is_textual(&self) -> bool {
        matches!(
            self,
            FormatHint::Text | FormatHint::Markdown | FormatHint::Unknown
        )
    }
}

impl std::fmt::Display for FormatHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_path() {
        assert_eq!(FormatHint::from_path(Path::new("cv.TXT")), FormatHint::Text);
        assert_eq!(FormatHint::from_path(Path::new("jd.md")), FormatHint::Markdown);
        assert_eq!(FormatHint::from_path(Path::new("cv.pdf")), FormatHint::Pdf);
        assert_eq!(FormatHint::from_path(Path::new("cv.docx")), FormatHint::Docx);
        assert_eq!(FormatHint::from_path(Path::new("resume")), FormatHint::Unknown);
    }

    #[test]
    fn test_textual_formats() {
        assert!(FormatHint::Text.is_textual());
        assert!(FormatHint::Unknown.is_textual());
        assert!(!FormatHint::Pdf.is_textual());
        assert!(!FormatHint::Docx.is_textual());
    }

    #[test]
    fn test_metadata_builder() {
        let doc = RawDocument::new("hello").with_metadata("format", "text");
        assert_eq!(doc.meta("format"), Some("text"));
        assert_eq!(doc.meta("file"), None);
    }
}
