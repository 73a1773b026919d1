//! Fuzz target for job posting structuring.
//!
//! Checks that structuring never panics and that a skill is never both
//! required and optional.

#![no_main]

use libfuzzer_sys::fuzz_target;
use talentfit::JobPostingStructurer;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    if let Ok(text) = std::str::from_utf8(data) {
        let job = JobPostingStructurer::new().parse(text, "Fuzz Inc");
        assert!(!job.title.is_empty());
        assert!(job.must_have_skills.is_disjoint(&job.nice_to_have_skills));
    }
});
