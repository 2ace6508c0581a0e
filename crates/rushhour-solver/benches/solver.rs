//! Benchmarks for breadth-first solving.
//!
//! # Benchmarks
//!
//! - **`solve`**: solves fixed boards of increasing depth, including the full
//!   exploration of an unsolvable one.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rushhour_core::{Board, LevelDescriptor};
use rushhour_solver::Solver;

const BOARDS: [(&str, &str); 3] = [
    (
        "blocker_chain",
        r#"{"id": 1, "vehicles": [
            {"id": "target", "orientation": "horizontal", "length": 2,
             "position": {"row": 2, "col": 0}, "isPlayer": true},
            {"id": "truck1", "orientation": "vertical", "length": 3,
             "position": {"row": 0, "col": 2}},
            {"id": "car1", "orientation": "horizontal", "length": 2,
             "position": {"row": 5, "col": 1}}
        ]}"#,
    ),
    (
        "crowded",
        r#"{"id": 2, "vehicles": [
            {"id": "target", "orientation": "horizontal", "length": 2,
             "position": {"row": 2, "col": 1}, "isPlayer": true},
            {"id": "car1", "orientation": "horizontal", "length": 2,
             "position": {"row": 0, "col": 0}},
            {"id": "car2", "orientation": "vertical", "length": 2,
             "position": {"row": 1, "col": 0}},
            {"id": "truck1", "orientation": "vertical", "length": 3,
             "position": {"row": 1, "col": 3}},
            {"id": "car3", "orientation": "vertical", "length": 2,
             "position": {"row": 0, "col": 5}},
            {"id": "car4", "orientation": "vertical", "length": 2,
             "position": {"row": 2, "col": 4}},
            {"id": "truck2", "orientation": "horizontal", "length": 3,
             "position": {"row": 4, "col": 2}},
            {"id": "car5", "orientation": "horizontal", "length": 2,
             "position": {"row": 5, "col": 0}}
        ]}"#,
    ),
    (
        "unsolvable",
        r#"{"id": 3, "vehicles": [
            {"id": "target", "orientation": "horizontal", "length": 2,
             "position": {"row": 2, "col": 0}, "isPlayer": true},
            {"id": "car1", "orientation": "horizontal", "length": 2,
             "position": {"row": 2, "col": 3}},
            {"id": "truck1", "orientation": "vertical", "length": 3,
             "position": {"row": 3, "col": 1}}
        ]}"#,
    ),
];

fn board(json: &str) -> Board {
    let level: LevelDescriptor = serde_json::from_str(json).unwrap();
    level.to_board().unwrap()
}

fn bench_solve(c: &mut Criterion) {
    let solver = Solver::new();
    for (name, json) in BOARDS {
        let board = board(json);
        c.bench_with_input(BenchmarkId::new("solve", name), &board, |b, board| {
            b.iter(|| hint::black_box(solver.solve(hint::black_box(board))));
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
