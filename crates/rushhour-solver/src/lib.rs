//! Shortest-solution search for sliding-block puzzles.
//!
//! [`Solver`] runs a breadth-first search over board states, using
//! [`Board::legal_moves`] and [`Board::with_move`] from [`rushhour_core`] as the
//! transition function. Every slide counts as one move regardless of its
//! distance, so the first solution found is a shortest one.
//!
//! The rules engine never calls into this crate; it is used by tooling such as
//! the level generator to measure difficulty.
//!
//! [`Board::legal_moves`]: rushhour_core::Board::legal_moves
//! [`Board::with_move`]: rushhour_core::Board::with_move

pub use self::{error::SolverError, solver::*};

mod error;
mod solver;
