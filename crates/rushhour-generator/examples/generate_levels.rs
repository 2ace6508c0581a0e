//! Generates a pack of random levels and writes it as a level file.
//!
//! # Usage
//!
//! ```sh
//! cargo run --release --example generate_levels
//! ```
//!
//! Generate ten levels needing at least 20 moves:
//!
//! ```sh
//! cargo run --release --example generate_levels -- --count 10 --difficulty 20
//! ```
//!
//! Reproduce a pack by passing the same seed phrase:
//!
//! ```sh
//! cargo run --release --example generate_levels -- --seed "weekly pack 12"
//! ```
//!
//! Set `RUST_LOG=debug` to see per-level search statistics.

use std::{fs, path::PathBuf, process};

use clap::Parser;
use rayon::prelude::*;
use rushhour_core::LevelPack;
use rushhour_generator::{LevelGenerator, LevelSeed};
use rushhour_solver::Solver;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of levels to generate.
    #[arg(long, value_name = "COUNT", default_value_t = 5)]
    count: u32,

    /// Minimum number of moves a level must need.
    #[arg(long, value_name = "MOVES", default_value_t = 15)]
    difficulty: usize,

    /// File the level pack is written to.
    #[arg(long, value_name = "PATH", default_value = "new_levels.json")]
    output: PathBuf,

    /// Seed phrase; level `N` is generated from `<PHRASE>#<N>`.
    #[arg(long, value_name = "PHRASE")]
    seed: Option<String>,

    /// Boards tried per level before giving up.
    #[arg(long, value_name = "COUNT", default_value_t = LevelGenerator::DEFAULT_MAX_ATTEMPTS)]
    max_attempts: usize,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let solver = Solver::new();
    let generator = LevelGenerator::new(&solver)
        .with_min_moves(args.difficulty)
        .with_max_attempts(args.max_attempts);

    println!(
        "Generating {} levels with at least {} moves...",
        args.count, args.difficulty
    );

    let results = (1..=args.count)
        .into_par_iter()
        .map(|id| {
            let seed = match &args.seed {
                Some(phrase) => LevelSeed::from_phrase(&format!("{phrase}#{id}")),
                None => LevelSeed::random(),
            };
            (id, seed, generator.generate_with_seed(seed))
        })
        .collect::<Vec<_>>();

    let mut pack = LevelPack::default();
    for (id, seed, level) in results {
        match level {
            Some(level) => {
                println!("  level {id}: solvable in {} moves (seed {seed})", level.min_moves);
                pack.levels.push(level.to_level_descriptor(id));
            }
            None => println!("  level {id}: no level found within the attempt limit"),
        }
    }

    let json = match pack.to_json_string() {
        Ok(json) => json,
        Err(err) => {
            eprintln!("Failed to serialize levels: {err}");
            process::exit(1);
        }
    };
    if let Err(err) = fs::write(&args.output, json) {
        eprintln!("Failed to write {}: {err}", args.output.display());
        process::exit(1);
    }

    println!();
    println!("Saved {} levels to {}", pack.len(), args.output.display());
}
