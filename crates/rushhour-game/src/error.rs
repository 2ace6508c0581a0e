use rushhour_core::{LevelError, MoveBlockReason};

/// Errors that can occur during a game session.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// The level data could not be turned into a board.
    #[display("invalid level: {_0}")]
    #[from]
    Level(LevelError),
    /// The board rejected the move.
    #[display("move rejected: {_0}")]
    #[from]
    Blocked(MoveBlockReason),
    /// Moves are only accepted while the game is being played.
    #[display("game is not in progress")]
    NotPlaying,
    /// A saved game does not belong to the level it names.
    #[display("saved board does not match level {level}")]
    SnapshotMismatch {
        /// Id of the level named by the snapshot.
        level: u32,
    },
    /// The level pack has no level at this index.
    #[display("no level at index {index}")]
    UnknownLevel {
        /// Requested index.
        index: usize,
    },
    /// No level has been started yet.
    #[display("no level is loaded")]
    NoActiveGame,
}
