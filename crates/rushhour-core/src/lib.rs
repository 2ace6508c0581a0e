//! Rules engine for sliding-block (Rush Hour) puzzles.
//!
//! A fixed-size board holds oriented rigid vehicles. One of them, the player,
//! must reach the exit cell by sliding the others out of its way. This crate
//! owns the rules only: geometry, move legality, move application, win
//! detection, and the level data format. Sessions, history and scoring live in
//! `rushhour-game`; search lives in `rushhour-solver`.
//!
//! # Overview
//!
//! - [`Position`], [`Direction`], [`Orientation`]: grid coordinates and axes
//! - [`Vehicle`]: one rigid body, its footprint, and its move predicate
//! - [`Board`]: vehicle ownership, the derived occupancy grid, move
//!   adjudication, and the win condition
//! - [`Move`]: one slide, used by history and search
//! - [`level`]: strict descriptors for loading and saving boards and level packs
//!
//! All operations are synchronous and single-threaded. Rejections are values
//! ([`MoveBlockReason`], [`PlacementError`], [`LevelError`]) and never leave a
//! board partially updated.
//!
//! # Examples
//!
//! ```
//! use rushhour_core::{Board, Direction, Position, Vehicle};
//!
//! let mut board = Board::standard();
//! board.add_vehicle(Vehicle::player("player", 2, Position::new(2, 0))?)?;
//!
//! board.move_vehicle("player", Direction::Right, 4)?;
//! assert!(board.check_win_condition());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod direction;
pub mod error;
pub mod level;
pub mod moves;
pub mod position;
pub mod vehicle;

pub use self::{
    board::Board,
    direction::{Direction, Orientation},
    error::{BoardError, LevelError, MoveBlockReason, PlacementError, VehicleError},
    level::{BoardDescriptor, LevelDescriptor, LevelPack, VehicleDescriptor},
    moves::Move,
    position::Position,
    vehicle::{Vehicle, VehicleId},
};
