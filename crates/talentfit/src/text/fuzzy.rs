//! Fuzzy string similarity.
//!
//! `ratio` is the normalized indel similarity used by common fuzzy-matching
//! libraries: `2 * LCS / (len(a) + len(b))` scaled to 0–100 and rounded.

/// Similarity of two strings on a 0–100 scale. Either side empty → 0.
pub fn ratio(a: &str, b: &str) -> u8 {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    let total = a_chars.len() + b_chars.len();

    if a_chars.is_empty() || b_chars.is_empty() {
        return 0;
    }

    let lcs = lcs_length(&a_chars, &b_chars);
    ((2 * lcs) as f64 / total as f64 * 100.0).round() as u8
}

/// Best-scoring candidate for `query`. Ties keep the earliest candidate.
/// Returns `None` when there are no candidates.
pub fn best_match<'a, I>(query: &str, candidates: I) -> Option<(&'a str, u8)>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut best: Option<(&'a str, u8)> = None;

    for candidate in candidates {
        let score = ratio(query, candidate);
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((candidate, score)),
        }
    }

    best
}

/// Length of the longest common subsequence, two-row dynamic programming.
fn lcs_length(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
