//! Pluggable document decoders and the ordered fallback chain.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use super::document::{FormatHint, RawDocument};
use crate::error::{Result, TalentfitError};

/// Reject lossy decodes where more than this share of characters are U+FFFD.
const MAX_REPLACEMENT_RATIO: f64 = 0.10;

/// Turns raw bytes into a [`RawDocument`].
///
/// Implementations must be stateless or internally synchronized so a chain
/// can be shared across threads.
pub trait DocumentDecoder: Send + Sync {
    /// Decoder name recorded in metadata and error reports.
    fn name(&self) -> &str;

    /// Whether this decoder should be tried for `hint`.
    fn supports(&self, hint: FormatHint) -> bool;

    /// Decode `bytes`.
    fn decode(&self, bytes: &[u8], hint: FormatHint) -> Result<RawDocument>;
}

/// Strict UTF-8 decoder. Strips a leading byte-order mark.
#[derive(Debug, Clone, Copy, Default)]
pub struct Utf8TextDecoder;

impl DocumentDecoder for Utf8TextDecoder {
    fn name(&self) -> &str {
        "utf8"
    }

    fn supports(&self, hint: FormatHint) -> bool {
        hint.is_textual()
    }

    fn decode(&self, bytes: &[u8], _hint: FormatHint) -> Result<RawDocument> {
        let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes);
        let text = std::str::from_utf8(bytes).map_err(|e| TalentfitError::Decode {
            decoder: self.name().to_string(),
            message: e.to_string(),
        })?;
        Ok(RawDocument::new(text))
    }
}

/// Lossy UTF-8 decoder for mostly-text files with a few bad bytes.
///
/// Refuses anything that looks binary: NUL bytes, or too many replacement
/// characters after decoding.
#[derive(Debug, Clone, Copy, Default)]
pub struct LossyTextDecoder;

impl DocumentDecoder for LossyTextDecoder {
    fn name(&self) -> &str {
        "lossy-utf8"
    }

    fn supports(&self, hint: FormatHint) -> bool {
        hint.is_textual()
    }

    fn decode(&self, bytes: &[u8], _hint: FormatHint) -> Result<RawDocument> {
        if bytes.contains(&0) {
            return Err(TalentfitError::Decode {
                decoder: self.name().to_string(),
                message: "input contains NUL bytes".to_string(),
            });
        }

        let text = String::from_utf8_lossy(bytes);
        let total = text.chars().count();
        let replaced = text.chars().filter(|&c| c == char::REPLACEMENT_CHARACTER).count();

        if total > 0 && replaced as f64 / total as f64 > MAX_REPLACEMENT_RATIO {
            return Err(TalentfitError::Decode {
                decoder: self.name().to_string(),
                message: format!("{replaced} of {total} characters are not valid UTF-8"),
            });
        }

        Ok(RawDocument::new(text.trim_start_matches('\u{feff}')))
    }
}

/// Ordered list of decoders. The first decoder that supports the format and
/// succeeds wins.
#[derive(Clone)]
pub struct DecoderChain {
    decoders: Vec<Arc<dyn DocumentDecoder>>,
}

impl Default for DecoderChain {
    fn default() -> Self {
        Self::empty()
            .with_decoder(Utf8TextDecoder)
            .with_decoder(LossyTextDecoder)
    }
}

impl std::fmt::Debug for DecoderChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DecoderChain")
            .field("decoders", &self.names())
            .finish()
    }
}

impl DecoderChain {
    /// Chain with the bundled text decoders.
    pub fn new() -> Self {
        Self::default()
    }

    /// Chain with no decoders at all.
    pub fn empty() -> Self {
        Self {
            decoders: Vec::new(),
        }
    }

    /// Append a decoder; it is tried after the ones already registered.
    pub fn with_decoder(mut self, decoder: impl DocumentDecoder + 'static) -> Self {
        self.decoders.push(Arc::new(decoder));
        self
    }

    /// Put a decoder in front of the ones already registered.
    pub fn with_priority_decoder(mut self, decoder: impl DocumentDecoder + 'static) -> Self {
        self.decoders.insert(0, Arc::new(decoder));
        self
    }

    /// Names of the registered decoders, in order.
    pub fn names(&self) -> Vec<&str> {
        self.decoders.iter().map(|d| d.name()).collect()
    }

    /// Decode `bytes`, trying each supporting decoder in order.
    pub fn decode(&self, bytes: &[u8], hint: FormatHint) -> Result<RawDocument> {
        let mut attempts = Vec::new();

        for decoder in self.decoders.iter().filter(|d| d.supports(hint)) {
            match decoder.decode(bytes, hint) {
                Ok(doc) => {
                    debug!(decoder = decoder.name(), format = %hint, "decoded document");
                    return Ok(doc.with_metadata("decoder", decoder.name()));
                }
                Err(e) => {
                    warn!(decoder = decoder.name(), error = %e, "decoder failed, trying next");
                    attempts.push(format!("{}: {}", decoder.name(), e));
                }
            }
        }

        if attempts.is_empty() {
            return Err(TalentfitError::UnsupportedFormat(format!(
                "no decoder registered for '{hint}' documents"
            )));
        }

        Err(TalentfitError::DecodeFailed { attempts })
    }

    /// Read and decode a file, recording file metadata.
    pub fn read_document(&self, path: impl AsRef<Path>) -> Result<RawDocument> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| TalentfitError::Io {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(io_err)?;
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(io_err)?;

        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("{:x}", hasher.finalize());

        let hint = FormatHint::from_path(path);
        let doc = self.decode(&contents, hint)?;

        let file_name = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut metadata = indexmap::IndexMap::new();
        metadata.insert("file".to_string(), file_name);
        metadata.insert("format".to_string(), hint.as_str().to_string());
        metadata.insert("size_bytes".to_string(), contents.len().to_string());
        metadata.insert("sha256".to_string(), hash);
        for (key, value) in doc.metadata {
            metadata.entry(key).or_insert(value);
        }

        Ok(RawDocument {
            text: doc.text,
            metadata,
        })
    }
}

/// Read a file with the default decoder chain.
pub fn read_document(path: impl AsRef<Path>) -> Result<RawDocument> {
    DecoderChain::default().read_document(path)
}
