//! Fuzz target for résumé structuring.
//!
//! This fuzzer tests that the résumé structurer:
//! 1. Never panics on arbitrary text
//! 2. Always reports every section
//! 3. Only reports lower-cased skills

#![no_main]

use libfuzzer_sys::fuzz_target;
use talentfit::{ResumeStructurer, SectionName};

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let parsed = ResumeStructurer::new().parse(text);
        assert_eq!(parsed.structure.sections.len(), SectionName::ALL.len());
        for skill in &parsed.structure.skills {
            assert_eq!(skill, &skill.to_lowercase());
        }
    }
});
