//! Scoring performance benchmarks.
//!
//! Measures relevance scoring, its similarity backends and candidate ranking.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use talentfit::text::TfIdf;
use talentfit::{HashingEmbedder, JobRequirement, RelevanceScorer, ResumeStructurer};

const RESUME: &str = "\
Jordan Lee
Summary
Backend engineer with 6+ years of experience.

Experience
- Built Python and Django services on AWS with Docker
- Migrated MySQL to PostgreSQL

Education
Master of Science in Computer Science

Skills: Python, Django, PostgreSQL, Docker, AWS, Git
";

fn job() -> JobRequirement {
    JobRequirement::new("Build and operate backend services for our data platform")
        .with_must_have(["Python", "Django", "PostgreSQL", "Docker"])
        .with_nice_to_have(["Kubernetes", "Terraform"])
        .with_qualifications(["Bachelor's degree in Computer Science"])
        .with_experience("5+ years of experience")
}

/// Benchmark a single score with each similarity backend.
fn bench_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    let job = job();

    let lexical = RelevanceScorer::new();
    group.bench_function("lexical", |b| {
        b.iter(|| black_box(lexical.score_text(black_box(RESUME), &job)))
    });

    let hashing = RelevanceScorer::new().with_embedder(HashingEmbedder::new());
    group.bench_function("hashing", |b| {
        b.iter(|| black_box(hashing.score_text(black_box(RESUME), &job)))
    });

    group.finish();
}

/// Benchmark TF-IDF similarity as documents grow.
fn bench_tfidf(c: &mut Criterion) {
    let mut group = c.benchmark_group("tfidf_similarity");
    let tfidf = TfIdf::new();

    for repeats in [1, 10, 100].iter() {
        let document = RESUME.repeat(*repeats);
        group.bench_with_input(
            BenchmarkId::new("repeats", repeats),
            &document,
            |b, document| b.iter(|| black_box(tfidf.similarity(document, RESUME))),
        );
    }

    group.finish();
}

/// Benchmark ranking many candidates against one job.
fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");
    group.sample_size(20);

    let scorer = RelevanceScorer::new();
    let structurer = ResumeStructurer::new();
    let job = job();

    for candidates in [10, 100].iter() {
        let resumes: Vec<(String, _)> = (0..*candidates)
            .map(|i| {
                let text = format!("{RESUME}\nCandidate {i} with {} years of experience", i % 12);
                (format!("candidate-{i}"), structurer.parse(&text))
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("candidates", candidates),
            &resumes,
            |b, resumes| {
                b.iter(|| {
                    black_box(scorer.rank(
                        &job,
                        resumes.iter().map(|(label, resume)| (label.as_str(), resume)),
                        None,
                    ))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_score, bench_tfidf, bench_rank);
criterion_main!(benches);
