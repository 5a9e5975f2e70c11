// Criterion benchmarks for the Date Mate scorer and matcher

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use datemate_api::core::{calculate_match_score, Matcher};
use datemate_api::models::{ScoringWeights, UserProfile};

fn create_candidate(id: usize) -> UserProfile {
    UserProfile {
        name: format!("User {}", id),
        age: 20 + (id % 40) as u8,
        gender: if id % 2 == 0 { "Female" } else { "Male" }.to_string(),
        interested_in: vec![if id % 2 == 0 { "Male" } else { "Female" }.to_string()],
        relationship_goals: "Long-term relationship".to_string(),
        hobbies: (0..(id % 6))
            .map(|h| format!("hobby{}", h))
            .collect(),
        personality_traits: vec!["Outgoing".to_string()],
        ideal_partner_traits: vec!["Honest".to_string()],
        deal_breakers: vec![],
        love_language: "Quality Time".to_string(),
        communication_style: "Direct".to_string(),
        life_goals: vec![],
        values: vec!["Family".to_string(), "Health".to_string()],
        location: "Berlin".to_string(),
        languages: vec!["English".to_string()],
        education: "Bachelor's".to_string(),
        occupation: "Engineer".to_string(),
    }
}

fn create_user() -> UserProfile {
    let mut user = create_candidate(1);
    user.hobbies = vec![
        "hobby0".to_string(),
        "hobby1".to_string(),
        "hobby2".to_string(),
    ];
    user
}

fn bench_scoring(c: &mut Criterion) {
    let weights = ScoringWeights::default();
    let user = create_user();
    let candidate = create_candidate(2);

    c.bench_function("calculate_match_score", |b| {
        b.iter(|| {
            calculate_match_score(black_box(&user), black_box(&candidate), black_box(&weights))
        });
    });
}

fn bench_matching(c: &mut Criterion) {
    let matcher = Matcher::with_default_weights();
    let user = create_user();

    let mut group = c.benchmark_group("matching");

    for candidate_count in [10, 50, 100, 500, 1000].iter() {
        let candidates: Vec<(String, UserProfile)> = (0..*candidate_count)
            .map(|i| (format!("user{}", i), create_candidate(i)))
            .collect();

        group.bench_with_input(
            BenchmarkId::new("find_matches", candidate_count),
            candidate_count,
            |b, _| {
                b.iter(|| {
                    matcher.find_matches(
                        black_box("user1"),
                        black_box(&user),
                        black_box(candidates.clone()),
                        black_box(50.0),
                        black_box(20),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_scoring, bench_matching);
criterion_main!(benches);
