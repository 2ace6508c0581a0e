//! The board: authoritative owner of vehicles and cell occupancy.

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

use serde::{Deserialize, Serialize};

use crate::{
    BoardDescriptor, BoardError, Direction, LevelError, Move, MoveBlockReason, PlacementError,
    Position, Vehicle, VehicleDescriptor, VehicleId,
};

/// A rectangular board holding non-overlapping vehicles and a single exit.
///
/// The board keeps a per-cell occupancy grid derived from vehicle positions.
/// The grid is rebuilt after every mutation and is never edited on its own, so
/// it always equals the union of the vehicles' footprints.
///
/// Every mutating operation validates first and applies second: a rejected
/// call leaves the board exactly as it was.
///
/// # Examples
///
/// ```
/// use rushhour_core::{Board, Direction, Orientation, Position, Vehicle};
///
/// let mut board = Board::standard();
/// board.add_vehicle(Vehicle::player("player", 2, Position::new(2, 0))?)?;
/// board.add_vehicle(Vehicle::new(
///     "truck",
///     Orientation::Vertical,
///     3,
///     Position::new(0, 2),
///     false,
/// )?)?;
///
/// assert!(!board.can_move_vehicle("player", Direction::Right, 3));
/// board.move_vehicle("truck", Direction::Down, 3)?;
/// board.move_vehicle("player", Direction::Right, 4)?;
/// assert!(board.check_win_condition());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardDescriptor", into = "BoardDescriptor")]
pub struct Board {
    width: usize,
    height: usize,
    exit: Position,
    vehicles: BTreeMap<VehicleId, Vehicle>,
    grid: Vec<Option<VehicleId>>,
}

impl Default for Board {
    #[inline]
    fn default() -> Self {
        Self::standard()
    }
}

impl Board {
    /// Side length of the standard board.
    pub const STANDARD_SIZE: usize = 6;

    /// Exit cell of the standard board.
    pub const STANDARD_EXIT: Position = Position::new(2, 5);

    /// Largest accepted width or height.
    pub const MAX_SIZE: usize = 256;

    /// Creates an empty 6×6 board with its exit at `(2, 5)`.
    #[must_use]
    pub fn standard() -> Self {
        Self::empty(
            Self::STANDARD_SIZE,
            Self::STANDARD_SIZE,
            Self::STANDARD_EXIT,
        )
    }

    /// Creates an empty board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::InvalidSize`] if either side is zero or larger
    /// than [`Board::MAX_SIZE`], and [`BoardError::ExitOutOfBounds`] if `exit`
    /// is not on the board.
    pub fn new(width: usize, height: usize, exit: Position) -> Result<Self, BoardError> {
        let valid_side = |side: usize| (1..=Self::MAX_SIZE).contains(&side);
        if !valid_side(width) || !valid_side(height) || width.checked_mul(height).is_none() {
            return Err(BoardError::InvalidSize { width, height });
        }
        let board = Self::empty(width, height, exit);
        if !board.in_bounds(exit) {
            return Err(BoardError::ExitOutOfBounds { exit });
        }
        Ok(board)
    }

    fn empty(width: usize, height: usize, exit: Position) -> Self {
        Self {
            width,
            height,
            exit,
            vehicles: BTreeMap::new(),
            grid: vec![None; width * height],
        }
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the cell the player's trailing edge has to reach.
    #[must_use]
    pub fn exit(&self) -> Position {
        self.exit
    }

    /// Returns `true` if `pos` lies on the board.
    #[must_use]
    #[inline]
    pub fn in_bounds(&self, pos: Position) -> bool {
        self.index(pos).is_some()
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        let row = usize::try_from(pos.row()).ok()?;
        let col = usize::try_from(pos.col()).ok()?;
        (row < self.height && col < self.width).then_some(row * self.width + col)
    }

    /// Returns `true` if `pos` is off the board or covered by a vehicle.
    ///
    /// Out-of-bounds cells count as occupied so that a single predicate covers
    /// both walls and vehicles.
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.index(pos).is_none_or(|i| self.grid[i].is_some())
    }

    /// Returns the id of the vehicle covering `pos`, if any.
    ///
    /// Out-of-bounds cells have no occupant.
    #[must_use]
    pub fn occupant(&self, pos: Position) -> Option<&VehicleId> {
        self.index(pos).and_then(|i| self.grid[i].as_ref())
    }

    /// Returns the vehicle covering `pos`, if any.
    #[must_use]
    pub fn vehicle_at(&self, pos: Position) -> Option<&Vehicle> {
        self.occupant(pos).and_then(|id| self.vehicles.get(id))
    }

    /// Returns the vehicle with the given id.
    #[must_use]
    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.get(id)
    }

    /// Returns all vehicles, ordered by id.
    pub fn vehicles(&self) -> impl ExactSizeIterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    /// Returns the number of vehicles on the board.
    #[must_use]
    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }

    /// Returns the player vehicle.
    ///
    /// The vehicle is looked up on every call; the board keeps no separate
    /// reference to it.
    #[must_use]
    pub fn player_vehicle(&self) -> Option<&Vehicle> {
        self.vehicles.values().find(|v| v.is_player())
    }

    /// Checks whether `vehicle` could be added.
    ///
    /// # Errors
    ///
    /// See [`add_vehicle`](Self::add_vehicle).
    pub fn placement_capability(&self, vehicle: &Vehicle) -> Result<(), PlacementError> {
        if self.vehicles.contains_key(vehicle.id()) {
            return Err(PlacementError::DuplicateId {
                id: vehicle.id().clone(),
            });
        }
        if vehicle.is_player() {
            if let Some(existing) = self.player_vehicle() {
                return Err(PlacementError::SecondPlayer {
                    existing: existing.id().clone(),
                });
            }
            if !vehicle.orientation().is_horizontal() {
                return Err(PlacementError::VerticalPlayer);
            }
        }
        for cell in vehicle.occupied_cells() {
            if !self.in_bounds(cell) {
                return Err(PlacementError::OutOfBounds { cell });
            }
            if let Some(with) = self.occupant(cell) {
                return Err(PlacementError::Overlap { with: with.clone() });
            }
        }
        Ok(())
    }

    /// Adds a vehicle to the board.
    ///
    /// # Errors
    ///
    /// The board is left unchanged and one of these is returned:
    ///
    /// - [`PlacementError::DuplicateId`] if the id is already in use
    /// - [`PlacementError::SecondPlayer`] if a player vehicle is already present
    /// - [`PlacementError::VerticalPlayer`] for a vertical player vehicle
    /// - [`PlacementError::OutOfBounds`] if the footprint leaves the board
    /// - [`PlacementError::Overlap`] if the footprint hits another vehicle
    pub fn add_vehicle(&mut self, vehicle: Vehicle) -> Result<(), PlacementError> {
        if let Err(err) = self.placement_capability(&vehicle) {
            log::trace!("rejected placement of {vehicle}: {err}");
            return Err(err);
        }
        self.vehicles.insert(vehicle.id().clone(), vehicle);
        self.rebuild_grid();
        Ok(())
    }

    /// Removes a vehicle and returns it, or `None` if the id is unknown.
    pub fn remove_vehicle(&mut self, id: &str) -> Option<Vehicle> {
        let vehicle = self.vehicles.remove(id)?;
        self.rebuild_grid();
        Some(vehicle)
    }

    /// Checks whether a vehicle can slide `distance` cells in `direction`.
    ///
    /// # Errors
    ///
    /// Returns [`MoveBlockReason::UnknownVehicle`] for an unknown id, otherwise
    /// whatever [`Vehicle::move_capability`] reports.
    pub fn move_capability(
        &self,
        id: &str,
        direction: Direction,
        distance: u8,
    ) -> Result<(), MoveBlockReason> {
        let vehicle = self
            .vehicles
            .get(id)
            .ok_or_else(|| MoveBlockReason::UnknownVehicle { id: id.into() })?;
        vehicle.move_capability(direction, self, distance)
    }

    /// Returns `true` if the move is legal in the current state.
    #[must_use]
    pub fn can_move_vehicle(&self, id: &str, direction: Direction, distance: u8) -> bool {
        self.move_capability(id, direction, distance).is_ok()
    }

    /// Slides a vehicle, re-validating the move against the current state.
    ///
    /// # Errors
    ///
    /// Returns the reason the move is illegal; the board is unchanged.
    pub fn move_vehicle(
        &mut self,
        id: &str,
        direction: Direction,
        distance: u8,
    ) -> Result<(), MoveBlockReason> {
        if let Err(reason) = self.move_capability(id, direction, distance) {
            log::trace!("rejected move {id} {direction} {distance}: {reason}");
            return Err(reason);
        }
        if let Some(vehicle) = self.vehicles.get_mut(id) {
            vehicle.move_by(direction, distance);
        }
        self.rebuild_grid();
        Ok(())
    }

    /// Applies a [`Move`].
    ///
    /// # Errors
    ///
    /// Same as [`move_vehicle`](Self::move_vehicle).
    pub fn apply_move(&mut self, mv: &Move) -> Result<(), MoveBlockReason> {
        self.move_vehicle(mv.vehicle_id.as_str(), mv.direction, mv.distance)
    }

    /// Returns a new board with `mv` applied, leaving `self` untouched.
    ///
    /// This is the pure transition function over board states.
    ///
    /// # Errors
    ///
    /// Same as [`move_vehicle`](Self::move_vehicle).
    pub fn with_move(&self, mv: &Move) -> Result<Self, MoveBlockReason> {
        self.move_capability(mv.vehicle_id.as_str(), mv.direction, mv.distance)?;
        let mut next = self.clone();
        next.apply_move(mv)?;
        Ok(next)
    }

    /// Lists every legal slide from the current state.
    ///
    /// Vehicles are visited in id order, directions in [`Direction::ALL`]
    /// order, and distances in increasing order.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mut moves = Vec::new();
        for vehicle in self.vehicles.values() {
            for direction in vehicle.orientation().directions() {
                let mut distance = 1;
                while vehicle.can_move(direction, self, distance) {
                    moves.push(Move::new(vehicle.id().clone(), direction, distance));
                    let Some(next) = distance.checked_add(1) else {
                        break;
                    };
                    distance = next;
                }
            }
        }
        moves
    }

    /// Returns a hashable key identifying the current vehicle arrangement.
    ///
    /// Only positions are included, in vehicle id order; ids, lengths and
    /// orientations never change between states of the same puzzle.
    #[must_use]
    pub fn state_key(&self) -> Vec<Position> {
        self.vehicles.values().map(Vehicle::position).collect()
    }

    /// Returns `true` when the player's trailing (rightmost) cell is on the exit.
    ///
    /// A player whose leading cell is next to the exit has not won yet; only
    /// the trailing cell counts.
    #[must_use]
    pub fn check_win_condition(&self) -> bool {
        self.player_vehicle().is_some_and(|player| {
            player.orientation().is_horizontal() && player.trailing_cell() == self.exit
        })
    }

    /// Alias for [`check_win_condition`](Self::check_win_condition).
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.check_win_condition()
    }

    /// Replaces every vehicle with ones built from `vehicles`.
    ///
    /// Dimensions and exit are kept. The replacement is built on the side and
    /// swapped in only if every descriptor is valid.
    ///
    /// # Errors
    ///
    /// Returns a [`LevelError`] describing the first invalid descriptor, or
    /// [`LevelError::MissingPlayer`]; the board is unchanged.
    pub fn reset(&mut self, vehicles: &[VehicleDescriptor]) -> Result<(), LevelError> {
        let mut next = Self::empty(self.width, self.height, self.exit);
        next.populate(vehicles)?;
        *self = next;
        Ok(())
    }

    pub(crate) fn populate(&mut self, vehicles: &[VehicleDescriptor]) -> Result<(), LevelError> {
        for descriptor in vehicles {
            let vehicle = Vehicle::try_from(descriptor)?;
            self.add_vehicle(vehicle)
                .map_err(|source| LevelError::Placement {
                    id: descriptor.id.clone(),
                    source,
                })?;
        }
        if self.player_vehicle().is_none() {
            return Err(LevelError::MissingPlayer);
        }
        Ok(())
    }

    fn rebuild_grid(&mut self) {
        self.grid.fill(None);
        for vehicle in self.vehicles.values() {
            for cell in vehicle.occupied_cells() {
                if let Some(i) = self.index(cell) {
                    self.grid[i] = Some(vehicle.id().clone());
                }
            }
        }
    }
}

impl TryFrom<BoardDescriptor> for Board {
    type Error = LevelError;

    fn try_from(descriptor: BoardDescriptor) -> Result<Self, Self::Error> {
        Self::try_from(&descriptor)
    }
}

impl TryFrom<&BoardDescriptor> for Board {
    type Error = LevelError;

    fn try_from(descriptor: &BoardDescriptor) -> Result<Self, Self::Error> {
        let mut board = Self::new(descriptor.width, descriptor.height, descriptor.exit())?;
        board.populate(&descriptor.vehicles)?;
        Ok(board)
    }
}

impl Display for Board {
    /// Renders one line per row: `.` for empty cells, `R` for the player, and
    /// the upper-cased first character of the id for other vehicles.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.grid.chunks(self.width).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                let ch = match cell.as_ref().and_then(|id| self.vehicles.get(id)) {
                    None => '.',
                    Some(vehicle) if vehicle.is_player() => 'R',
                    Some(vehicle) => vehicle
                        .id()
                        .as_str()
                        .chars()
                        .next()
                        .map_or('?', |c| c.to_ascii_uppercase()),
                };
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}
