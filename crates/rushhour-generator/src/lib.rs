//! Random level generation for sliding-block puzzles.
//!
//! [`LevelGenerator`] places a player vehicle and a random set of obstacles on
//! a standard board, then keeps the first board whose shortest solution, as
//! measured by a [`Solver`](rushhour_solver::Solver), is long enough.
//!
//! Generation is driven by a [`LevelSeed`], so the same seed always yields the
//! same level.
//!
//! # Examples
//!
//! ```
//! use rushhour_generator::{LevelGenerator, LevelSeed};
//! use rushhour_solver::Solver;
//!
//! let solver = Solver::new();
//! let generator = LevelGenerator::new(&solver).with_min_moves(2);
//! let seed = LevelSeed::from_phrase("docs");
//!
//! if let Some(level) = generator.generate_with_seed(seed) {
//!     assert!(level.min_moves >= 2);
//!     let descriptor = level.to_level_descriptor(1);
//!     assert_eq!(descriptor.board.vehicles[0].id, "target");
//! }
//! ```

pub use self::{generator::*, seed::*};

mod generator;
mod seed;
