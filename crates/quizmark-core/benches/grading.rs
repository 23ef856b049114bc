use criterion::{black_box, criterion_group, criterion_main, Criterion};

use quizmark_core::grade::grade;
use quizmark_core::model::{AnswerKey, Letter, ResponseSet};

fn make_key(n: u32) -> AnswerKey {
    (1..=n).map(|i| (i, Letter::ALL[(i % 5) as usize])).collect()
}

fn make_responses(n: u32) -> ResponseSet {
    // Every other answer wrong, to exercise the mismatch path too.
    (1..=n)
        .map(|i| {
            let offset = if i % 2 == 0 { 1 } else { 0 };
            (i, Letter::ALL[((i + offset) % 5) as usize])
        })
        .collect()
}

fn bench_grade(c: &mut Criterion) {
    let mut group = c.benchmark_group("grade");
    for n in [10u32, 100, 1000] {
        let key = make_key(n);
        let responses = make_responses(n);
        group.bench_function(format!("n={n}"), |b| {
            b.iter(|| grade(black_box(&key), black_box(&responses)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_grade);
criterion_main!(benches);
