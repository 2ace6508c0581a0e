//! Benchmarks for level generation.
//!
//! # Benchmarks
//!
//! - **`generator`**: generates a level needing at least 10 moves from each of
//!   three fixed seeds. The time covers every rejected attempt, including the
//!   solver runs used to measure them.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rushhour_generator::{LevelGenerator, LevelSeed};
use rushhour_solver::Solver;

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generator(c: &mut Criterion) {
    let solver = Solver::new();
    let generator = LevelGenerator::new(&solver);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = LevelSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(12));
    targets = bench_generator
);
criterion_main!(benches);
