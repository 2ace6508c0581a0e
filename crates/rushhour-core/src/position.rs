//! Grid coordinates.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::Direction;

/// A cell coordinate on the board, as `(row, col)`.
///
/// Coordinates are signed so that a candidate footprint may step outside the
/// board (for example row `-1`) and be rejected by bounds checks instead of
/// wrapping around.
///
/// # Examples
///
/// ```
/// use rushhour_core::{Direction, Position};
///
/// let pos = Position::new(2, 0);
/// assert_eq!(pos.offset(Direction::Right, 3), Position::new(2, 3));
/// assert_eq!(pos.offset(Direction::Up, 3), Position::new(-1, 0));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(deny_unknown_fields)]
pub struct Position {
    row: i32,
    col: i32,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Returns the row (y coordinate).
    #[must_use]
    #[inline]
    pub const fn row(self) -> i32 {
        self.row
    }

    /// Returns the column (x coordinate).
    #[must_use]
    #[inline]
    pub const fn col(self) -> i32 {
        self.col
    }

    /// Returns the position `distance` steps away along `direction`.
    #[must_use]
    #[inline]
    pub fn offset(self, direction: Direction, distance: u8) -> Self {
        let (d_row, d_col) = direction.delta();
        let distance = i32::from(distance);
        Self {
            row: self.row + d_row * distance,
            col: self.col + d_col * distance,
        }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_each_direction() {
        let pos = Position::new(3, 3);
        assert_eq!(pos.offset(Direction::Up, 2), Position::new(1, 3));
        assert_eq!(pos.offset(Direction::Down, 2), Position::new(5, 3));
        assert_eq!(pos.offset(Direction::Left, 2), Position::new(3, 1));
        assert_eq!(pos.offset(Direction::Right, 2), Position::new(3, 5));
        assert_eq!(pos.offset(Direction::Right, 0), pos);
    }

    #[test]
    fn test_offset_may_leave_board() {
        assert_eq!(
            Position::new(0, 0).offset(Direction::Left, 1),
            Position::new(0, -1)
        );
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_string(&Position::new(2, 4)).unwrap();
        assert_eq!(json, r#"{"row":2,"col":4}"#);
        assert!(serde_json::from_str::<Position>(r#"{"row":2}"#).is_err());
    }
}
