//! Vehicles: oriented rigid bodies occupying a straight run of cells.

use std::{
    borrow::Borrow,
    fmt::{self, Display},
};

use serde::{Deserialize, Serialize};

use crate::{Board, Direction, MoveBlockReason, Orientation, Position, VehicleError};

/// Identity of a vehicle, unique within one board.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::From,
)]
#[serde(transparent)]
pub struct VehicleId(String);

impl VehicleId {
    /// Creates an id from anything string-like.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VehicleId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Borrow<str> for VehicleId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for VehicleId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VehicleId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A vehicle on the board.
///
/// `position` is the topmost/leftmost cell; the vehicle extends `length` cells
/// to the right (horizontal) or downwards (vertical). Only the position ever
/// changes once a vehicle is created.
///
/// On a [`Board`], vehicles are identified by [`id`](Self::id); the derived
/// equality compares every attribute and is meant for comparing board states.
///
/// # Examples
///
/// ```
/// use rushhour_core::{Orientation, Position, Vehicle};
///
/// let truck = Vehicle::new("truck1", Orientation::Vertical, 3, Position::new(0, 2), false)?;
/// let cells: Vec<_> = truck.occupied_cells().collect();
/// assert_eq!(
///     cells,
///     [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)]
/// );
/// # Ok::<(), rushhour_core::VehicleError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    id: VehicleId,
    orientation: Orientation,
    length: u8,
    position: Position,
    is_player: bool,
}

impl Vehicle {
    /// Shortest allowed vehicle.
    pub const MIN_LENGTH: u8 = 2;

    /// Creates a vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleError::InvalidLength`] if `length` is less than
    /// [`Vehicle::MIN_LENGTH`].
    pub fn new(
        id: impl Into<VehicleId>,
        orientation: Orientation,
        length: u8,
        position: Position,
        is_player: bool,
    ) -> Result<Self, VehicleError> {
        if length < Self::MIN_LENGTH {
            return Err(VehicleError::InvalidLength { length });
        }
        Ok(Self {
            id: id.into(),
            orientation,
            length,
            position,
            is_player,
        })
    }

    /// Creates a horizontal player vehicle.
    ///
    /// # Errors
    ///
    /// Returns [`VehicleError::InvalidLength`] if `length` is less than
    /// [`Vehicle::MIN_LENGTH`].
    pub fn player(
        id: impl Into<VehicleId>,
        length: u8,
        position: Position,
    ) -> Result<Self, VehicleError> {
        Self::new(id, Orientation::Horizontal, length, position, true)
    }

    /// Returns the vehicle id.
    #[must_use]
    pub fn id(&self) -> &VehicleId {
        &self.id
    }

    /// Returns the orientation.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the number of cells the vehicle covers.
    #[must_use]
    pub fn length(&self) -> u8 {
        self.length
    }

    /// Returns the topmost/leftmost occupied cell.
    #[must_use]
    pub fn position(&self) -> Position {
        self.position
    }

    /// Returns `true` for the vehicle that has to reach the exit.
    #[must_use]
    pub fn is_player(&self) -> bool {
        self.is_player
    }

    /// Returns the occupied cells, starting at [`position`](Self::position).
    pub fn occupied_cells(&self) -> impl ExactSizeIterator<Item = Position> + Clone + use<> {
        Self::footprint(self.orientation, self.length, self.position)
    }

    fn footprint(
        orientation: Orientation,
        length: u8,
        position: Position,
    ) -> impl ExactSizeIterator<Item = Position> + Clone + use<> {
        let forward = orientation.forward();
        (0..length).map(move |i| position.offset(forward, i))
    }

    /// Returns the rightmost (horizontal) or bottom-most (vertical) cell.
    #[must_use]
    pub fn trailing_cell(&self) -> Position {
        self.position
            .offset(self.orientation.forward(), self.length - 1)
    }

    /// Returns `true` if the vehicle covers `pos`.
    #[must_use]
    pub fn occupies(&self, pos: Position) -> bool {
        self.occupied_cells().any(|cell| cell == pos)
    }

    /// Checks whether the vehicle can slide `distance` cells in `direction`.
    ///
    /// Every cell swept on the way must be inside `board` and either empty or
    /// covered by this vehicle itself; vehicles never jump over each other.
    ///
    /// # Errors
    ///
    /// Returns the first reason found, in order of travel:
    /// [`MoveBlockReason::ZeroDistance`], [`MoveBlockReason::IncompatibleDirection`],
    /// [`MoveBlockReason::OutOfBounds`] or [`MoveBlockReason::Collision`].
    pub fn move_capability(
        &self,
        direction: Direction,
        board: &Board,
        distance: u8,
    ) -> Result<(), MoveBlockReason> {
        if distance == 0 {
            return Err(MoveBlockReason::ZeroDistance);
        }
        if !self.orientation.allows(direction) {
            return Err(MoveBlockReason::IncompatibleDirection {
                orientation: self.orientation,
                direction,
            });
        }

        let edge = if direction == self.orientation.forward() {
            self.trailing_cell()
        } else {
            self.position
        };
        for step in 1..=distance {
            let cell = edge.offset(direction, step);
            if !board.in_bounds(cell) {
                return Err(MoveBlockReason::OutOfBounds { cell });
            }
            if let Some(other) = board.occupant(cell)
                && *other != self.id
            {
                return Err(MoveBlockReason::Collision {
                    with: other.clone(),
                });
            }
        }
        Ok(())
    }

    /// Returns `true` if [`move_capability`](Self::move_capability) succeeds.
    #[must_use]
    pub fn can_move(&self, direction: Direction, board: &Board, distance: u8) -> bool {
        self.move_capability(direction, board, distance).is_ok()
    }

    /// Slides the vehicle without any bounds or collision check.
    ///
    /// Callers validate first with [`can_move`](Self::can_move); a board
    /// mutates its vehicles only through [`Board::move_vehicle`], which also
    /// refreshes its occupancy grid.
    pub fn move_by(&mut self, direction: Direction, distance: u8) {
        self.position = self.position.offset(direction, distance);
    }
}

impl Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}, {}) @ {}",
            self.id, self.orientation, self.length, self.position
        )
    }
}
