//! Fuzz target for document decoding.
//!
//! This fuzzer tests that reading a file:
//! 1. Never panics on arbitrary bytes
//! 2. Either yields text or reports every decoder that was tried

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Write;
use talentfit::TalentfitError;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(mut temp_file) = tempfile::NamedTempFile::with_suffix(".txt") {
        if temp_file.write_all(data).is_ok() {
            match talentfit::read_document(temp_file.path()) {
                Ok(document) => assert!(document.meta("decoder").is_some()),
                Err(TalentfitError::DecodeFailed { attempts }) => assert!(!attempts.is_empty()),
                Err(_) => {}
            }
        }
    }
});
