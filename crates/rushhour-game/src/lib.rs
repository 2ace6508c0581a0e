//! Game session management for sliding-block puzzles.
//!
//! This crate sits on top of the rules engine in [`rushhour_core`] and adds
//! what a player interacts with:
//!
//! - [`Game`]: one play-through of a level with move history, undo, a forward
//!   move counter, a play timer, and the [`GameState`] machine
//! - [`GameSnapshot`]: serializable save state of a [`Game`]
//! - [`Progress`]: best moves and best time per completed level
//! - [`Session`]: the level pack, the progress store, and the current game
//!
//! Rendering, input handling, and storage are left to the caller.

mod error;
mod game;
mod progress;
mod session;
mod undo_stack;

pub use self::{
    error::GameError,
    game::{Game, GameSnapshot, GameState, MoveHistory, MoveOutcome, MoveRecord},
    progress::{LevelRecord, Progress},
    session::Session,
    undo_stack::UndoStack,
};
