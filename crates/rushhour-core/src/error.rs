//! Error and rejection types.
//!
//! Every rejection is an expected outcome: the operation that produced it left
//! the board untouched.

use crate::{Direction, Orientation, Position, VehicleId};

/// Why a move cannot be applied.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum MoveBlockReason {
    /// No vehicle with this id is on the board.
    #[display("unknown vehicle `{id}`")]
    UnknownVehicle {
        /// The id that was looked up.
        id: VehicleId,
    },
    /// A move must cover at least one cell.
    #[display("move distance must be at least 1")]
    ZeroDistance,
    /// The direction is not along the vehicle's axis.
    #[display("a {orientation} vehicle cannot move {direction}")]
    IncompatibleDirection {
        /// Orientation of the vehicle.
        orientation: Orientation,
        /// Requested direction.
        direction: Direction,
    },
    /// The vehicle would leave the board.
    #[display("cell {cell} is outside the board")]
    OutOfBounds {
        /// First offending cell of the candidate footprint.
        cell: Position,
    },
    /// Another vehicle is in the way.
    #[display("blocked by vehicle `{with}`")]
    Collision {
        /// The vehicle occupying the target cell.
        with: VehicleId,
    },
}

/// Why a vehicle cannot be placed on a board.
#[derive(
    Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::IsVariant,
)]
pub enum PlacementError {
    /// A vehicle with the same id is already on the board.
    #[display("vehicle id `{id}` is already in use")]
    DuplicateId {
        /// The conflicting id.
        id: VehicleId,
    },
    /// Part of the footprint lies outside the board.
    #[display("cell {cell} is outside the board")]
    OutOfBounds {
        /// First offending cell.
        cell: Position,
    },
    /// Part of the footprint is already occupied.
    #[display("overlaps vehicle `{with}`")]
    Overlap {
        /// The vehicle already occupying the cell.
        with: VehicleId,
    },
    /// The board already has a player vehicle.
    #[display("board already has player vehicle `{existing}`")]
    SecondPlayer {
        /// The player vehicle already on the board.
        existing: VehicleId,
    },
    /// The player vehicle must be horizontal to reach the exit.
    #[display("player vehicle must be horizontal")]
    VerticalPlayer,
}

/// Invalid vehicle attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum VehicleError {
    /// Vehicles span at least two cells.
    #[display("vehicle length must be at least 2, got {length}")]
    InvalidLength {
        /// The rejected length.
        length: u8,
    },
}

/// Invalid board extent or exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// Width or height is zero or above [`Board::MAX_SIZE`](crate::Board::MAX_SIZE).
    #[display("invalid board size {width}x{height}")]
    InvalidSize {
        /// Requested width.
        width: usize,
        /// Requested height.
        height: usize,
    },
    /// The exit cell is not on the board.
    #[display("exit {exit} is outside the board")]
    ExitOutOfBounds {
        /// Requested exit.
        exit: Position,
    },
}

/// Errors raised while turning level data into a board.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LevelError {
    /// The level data is not well-formed JSON or does not match the schema.
    #[display("malformed level data: {_0}")]
    #[from]
    Json(serde_json::Error),
    /// The board extent or exit is invalid.
    #[display("invalid board: {_0}")]
    #[from]
    Board(BoardError),
    /// A vehicle descriptor has invalid attributes.
    #[display("invalid vehicle `{id}`: {source}")]
    Vehicle {
        /// Id of the offending vehicle.
        id: VehicleId,
        /// What was wrong with it.
        source: VehicleError,
    },
    /// A vehicle could not be placed.
    #[display("cannot place vehicle `{id}`: {source}")]
    Placement {
        /// Id of the offending vehicle.
        id: VehicleId,
        /// Why it was rejected.
        source: PlacementError,
    },
    /// No vehicle is marked as the player.
    #[display("level has no player vehicle")]
    MissingPlayer,
    /// A level inside a pack is invalid.
    #[display("level {level}: {source}")]
    InLevel {
        /// Id of the invalid level.
        level: u32,
        /// What was wrong with it.
        source: Box<LevelError>,
    },
}
