//! Document input: format detection and decoding.

mod decoder;
mod document;

pub use decoder::{read_document, DecoderChain, DocumentDecoder, LossyTextDecoder, Utf8TextDecoder};
pub use document::{FormatHint, RawDocument};
