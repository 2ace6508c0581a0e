//! Level data: the interchange shape boards are loaded from and saved to.
//!
//! Descriptors are validated strictly when they are turned into a [`Board`]:
//! required fields, enum values, vehicle lengths and placements are all
//! checked, and the first problem is reported as a [`LevelError`].
//!
//! # Examples
//!
//! ```
//! use rushhour_core::{Board, LevelPack};
//!
//! let json = r#"{
//!     "levels": [{
//!         "id": 1,
//!         "difficulty": "Beginner",
//!         "minMoves": 1,
//!         "vehicles": [
//!             {"id": "target", "orientation": "horizontal", "length": 2,
//!              "position": {"row": 2, "col": 0}, "isPlayer": true},
//!             {"id": "truck1", "orientation": "vertical", "length": 3,
//!              "position": {"row": 0, "col": 2}}
//!         ]
//!     }]
//! }"#;
//!
//! let pack = LevelPack::from_json_str(json)?;
//! let board: Board = pack.level(1).unwrap().to_board()?;
//! assert_eq!(board.exit(), Board::STANDARD_EXIT);
//! assert_eq!(board.vehicle_count(), 2);
//! # Ok::<(), rushhour_core::LevelError>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::{Board, LevelError, Orientation, Position, Vehicle, VehicleId};

/// Serialized form of a [`Vehicle`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct VehicleDescriptor {
    /// Vehicle id, unique within the level.
    pub id: VehicleId,
    /// Axis of the vehicle.
    pub orientation: Orientation,
    /// Number of cells covered (at least 2).
    pub length: u8,
    /// Topmost/leftmost cell.
    pub position: Position,
    /// Whether this is the vehicle that must reach the exit.
    #[serde(
        default,
        alias = "is_target",
        alias = "isTarget",
        skip_serializing_if = "std::ops::Not::not"
    )]
    pub is_player: bool,
}

impl From<&Vehicle> for VehicleDescriptor {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id().clone(),
            orientation: vehicle.orientation(),
            length: vehicle.length(),
            position: vehicle.position(),
            is_player: vehicle.is_player(),
        }
    }
}

impl TryFrom<&VehicleDescriptor> for Vehicle {
    type Error = LevelError;

    fn try_from(descriptor: &VehicleDescriptor) -> Result<Self, Self::Error> {
        Vehicle::new(
            descriptor.id.clone(),
            descriptor.orientation,
            descriptor.length,
            descriptor.position,
            descriptor.is_player,
        )
        .map_err(|source| LevelError::Vehicle {
            id: descriptor.id.clone(),
            source,
        })
    }
}

fn standard_size() -> usize {
    Board::STANDARD_SIZE
}

/// Serialized form of a [`Board`].
///
/// `width` and `height` default to 6. A missing `exit` defaults to the last
/// column of row `(height - 1) / 2`, which is `(2, 5)` on a 6×6 board.
///
/// Unknown keys are ignored here, since this struct is flattened into
/// [`LevelDescriptor`]; vehicle entries and the pack itself are strict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardDescriptor {
    /// Number of columns.
    #[serde(default = "standard_size")]
    pub width: usize,
    /// Number of rows.
    #[serde(default = "standard_size")]
    pub height: usize,
    /// Exit cell, if not the default one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exit: Option<Position>,
    /// Vehicles on the board.
    pub vehicles: Vec<VehicleDescriptor>,
}

impl BoardDescriptor {
    /// Returns the exit cell, applying the default when none is given.
    #[must_use]
    pub fn exit(&self) -> Position {
        self.exit.unwrap_or_else(|| {
            let row = self.height.saturating_sub(1) / 2;
            let col = self.width.saturating_sub(1);
            Position::new(
                i32::try_from(row).unwrap_or(i32::MAX),
                i32::try_from(col).unwrap_or(i32::MAX),
            )
        })
    }
}

impl From<&Board> for BoardDescriptor {
    fn from(board: &Board) -> Self {
        Self {
            width: board.width(),
            height: board.height(),
            exit: Some(board.exit()),
            vehicles: board.vehicles().map(VehicleDescriptor::from).collect(),
        }
    }
}

impl From<Board> for BoardDescriptor {
    fn from(board: Board) -> Self {
        Self::from(&board)
    }
}

/// One level: identification, metadata and the starting board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelDescriptor {
    /// Level number.
    pub id: u32,
    /// Free-form difficulty label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<String>,
    /// Length of the shortest known solution.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_moves: Option<u32>,
    /// Starting board.
    #[serde(flatten)]
    pub board: BoardDescriptor,
}

impl LevelDescriptor {
    /// Builds the starting board.
    ///
    /// # Errors
    ///
    /// Returns a [`LevelError`] if the board data is invalid.
    pub fn to_board(&self) -> Result<Board, LevelError> {
        Board::try_from(&self.board)
    }
}

/// An ordered collection of levels, as stored in a level file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LevelPack {
    /// Levels in play order.
    pub levels: Vec<LevelDescriptor>,
}

impl LevelPack {
    /// Parses a level pack and validates every level in it.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::Json`] if the text does not match the schema, or
    /// [`LevelError::InLevel`] naming the first level whose board is invalid.
    pub fn from_json_str(json: &str) -> Result<Self, LevelError> {
        let pack: Self = serde_json::from_str(json)?;
        pack.validate()?;
        Ok(pack)
    }

    /// Serializes the pack as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::Json`] if serialization fails.
    pub fn to_json_string(&self) -> Result<String, LevelError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every level builds a valid board.
    ///
    /// # Errors
    ///
    /// Returns [`LevelError::InLevel`] for the first invalid level.
    pub fn validate(&self) -> Result<(), LevelError> {
        for level in &self.levels {
            level.to_board().map_err(|source| LevelError::InLevel {
                level: level.id,
                source: Box::new(source),
            })?;
        }
        Ok(())
    }

    /// Returns the level with the given id.
    #[must_use]
    pub fn level(&self, id: u32) -> Option<&LevelDescriptor> {
        self.levels.iter().find(|level| level.id == id)
    }

    /// Returns the number of levels.
    #[must_use]
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Returns `true` if the pack has no levels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardError, Direction};

    const LEVEL: &str = r#"{
        "id": 7,
        "difficulty": "Intermediate",
        "vehicles": [
            {"id": "target", "orientation": "horizontal", "length": 2,
             "position": {"row": 2, "col": 1}, "is_target": true},
            {"id": "car1", "orientation": "vertical", "length": 2,
             "position": {"row": 1, "col": 3}},
            {"id": "truck1", "orientation": "horizontal", "length": 3,
             "position": {"row": 5, "col": 0}}
        ]
    }"#;

    #[test]
    fn test_level_defaults_and_aliases() {
        let level: LevelDescriptor = serde_json::from_str(LEVEL).unwrap();
        assert_eq!(level.id, 7);
        assert_eq!(level.min_moves, None);
        assert_eq!(level.board.exit(), Position::new(2, 5));

        let board = level.to_board().unwrap();
        assert_eq!((board.width(), board.height()), (6, 6));
        assert_eq!(board.player_vehicle().unwrap().id(), "target");
    }

    #[test]
    fn test_schema_violations_fail_loudly() {
        let bad_orientation = LEVEL.replace(r#""vertical""#, r#""diagonal""#);
        assert!(serde_json::from_str::<LevelDescriptor>(&bad_orientation).is_err());

        let unknown_field = LEVEL.replace(r#""length": 3"#, r#""length": 3, "colour": "red""#);
        assert!(serde_json::from_str::<LevelDescriptor>(&unknown_field).is_err());

        let missing_length = LEVEL.replace(r#""length": 3,"#, "");
        assert!(serde_json::from_str::<LevelDescriptor>(&missing_length).is_err());
    }

    #[test]
    fn test_invalid_boards_are_reported() {
        let short = LEVEL.replace(r#""length": 3"#, r#""length": 1"#);
        let level: LevelDescriptor = serde_json::from_str(&short).unwrap();
        assert!(matches!(
            level.to_board(),
            Err(LevelError::Vehicle { ref id, .. }) if id == "truck1"
        ));

        let no_player = LEVEL.replace(r#", "is_target": true"#, "");
        let level: LevelDescriptor = serde_json::from_str(&no_player).unwrap();
        assert!(matches!(level.to_board(), Err(LevelError::MissingPlayer)));

        let overlapping = LEVEL.replace(r#""row": 1, "col": 3"#, r#""row": 1, "col": 2"#);
        let level: LevelDescriptor = serde_json::from_str(&overlapping).unwrap();
        assert!(matches!(
            level.to_board(),
            Err(LevelError::Placement { ref id, .. }) if id == "car1"
        ));
    }

    #[test]
    fn test_pack_validation_names_level() {
        let json = format!(
            r#"{{"levels": [{}]}}"#,
            LEVEL.replace(r#", "is_target": true"#, "")
        );
        assert!(matches!(
            LevelPack::from_json_str(&json),
            Err(LevelError::InLevel { level: 7, .. })
        ));
        assert!(matches!(
            LevelPack::from_json_str("{\"levels\": ["),
            Err(LevelError::Json(_))
        ));
    }

    #[test]
    fn test_oversized_board_is_an_error() {
        let json = r#"{
            "id": 1,
            "width": 2000000000, "height": 2000000000,
            "exit": {"row": 0, "col": 0},
            "vehicles": []
        }"#;
        let level: LevelDescriptor = serde_json::from_str(json).unwrap();
        assert!(matches!(
            level.to_board(),
            Err(LevelError::Board(BoardError::InvalidSize { .. }))
        ));

        let pack = format!(r#"{{"levels": [{json}]}}"#);
        assert!(matches!(
            LevelPack::from_json_str(&pack),
            Err(LevelError::InLevel { level: 1, .. })
        ));
    }

    #[test]
    fn test_pack_rejects_unknown_keys() {
        let json = format!(r#"{{"levles": [], "levels": [{LEVEL}]}}"#);
        assert!(matches!(
            LevelPack::from_json_str(&json),
            Err(LevelError::Json(_))
        ));
    }

    #[test]
    fn test_board_round_trip_is_lossless() {
        let level: LevelDescriptor = serde_json::from_str(LEVEL).unwrap();
        let mut board = level.to_board().unwrap();
        board.move_vehicle("truck1", Direction::Right, 2).unwrap();

        let descriptor = BoardDescriptor::from(&board);
        let restored = Board::try_from(&descriptor).unwrap();
        assert_eq!(restored, board);

        let pack = LevelPack {
            levels: vec![LevelDescriptor {
                id: 1,
                difficulty: None,
                min_moves: Some(3),
                board: descriptor,
            }],
        };
        let json = pack.to_json_string().unwrap();
        assert_eq!(LevelPack::from_json_str(&json).unwrap(), pack);
    }
}
