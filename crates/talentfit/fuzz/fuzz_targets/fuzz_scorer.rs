//! Fuzz target for relevance scoring.
//!
//! Scores an arbitrary résumé against an arbitrary posting and checks that
//! every reported score stays within [0, 100].

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use talentfit::Talentfit;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    resume: &'a str,
    posting: &'a str,
}

fuzz_target!(|input: Input<'_>| {
    if input.resume.len() + input.posting.len() > 50_000 {
        return;
    }

    let result = Talentfit::new().analyze_text(input.resume, input.posting, "");
    let relevance = &result.relevance;
    for score in [
        relevance.overall_score,
        relevance.hard_match_score,
        relevance.semantic_match_score,
        relevance.education_match_score,
        relevance.experience_match_score,
    ] {
        assert!((0.0..=100.0).contains(&score));
    }
    assert!(relevance.suggestions.len() <= 5);
});
