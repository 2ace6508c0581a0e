//! Movement directions and vehicle orientations.

use serde::{Deserialize, Serialize};

/// A direction a vehicle can slide in.
///
/// # Examples
///
/// ```
/// use rushhour_core::Direction;
///
/// assert_eq!(Direction::Up.inverse(), Direction::Down);
/// assert_eq!(Direction::Left.delta(), (0, -1));
/// assert_eq!(Direction::Right.to_string(), "right");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards row 0.
    #[display("up")]
    Up,
    /// Towards the last row.
    #[display("down")]
    Down,
    /// Towards column 0.
    #[display("left")]
    Left,
    /// Towards the last column.
    #[display("right")]
    Right,
}

impl Direction {
    /// All directions, in `up, down, left, right` order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the opposite direction.
    #[must_use]
    #[inline]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Returns the unit step `(Δrow, Δcol)`.
    #[must_use]
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// Returns the orientation a vehicle must have to move this way.
    #[must_use]
    #[inline]
    pub const fn orientation(self) -> Orientation {
        match self {
            Self::Up | Self::Down => Orientation::Vertical,
            Self::Left | Self::Right => Orientation::Horizontal,
        }
    }
}

/// The axis a vehicle is aligned with. A vehicle never rotates.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Occupies a run of cells within one row; moves left and right.
    #[display("horizontal")]
    Horizontal,
    /// Occupies a run of cells within one column; moves up and down.
    #[display("vertical")]
    Vertical,
}

impl Orientation {
    /// Returns `true` if a vehicle with this orientation may move in `direction`.
    #[must_use]
    #[inline]
    pub const fn allows(self, direction: Direction) -> bool {
        matches!(
            (self, direction.orientation()),
            (Self::Horizontal, Self::Horizontal) | (Self::Vertical, Self::Vertical)
        )
    }

    /// Returns the two directions along this axis, backward first.
    #[must_use]
    #[inline]
    pub const fn directions(self) -> [Direction; 2] {
        match self {
            Self::Horizontal => [Direction::Left, Direction::Right],
            Self::Vertical => [Direction::Up, Direction::Down],
        }
    }

    /// Returns the unit step towards the vehicle's trailing end.
    #[must_use]
    #[inline]
    pub const fn forward(self) -> Direction {
        match self {
            Self::Horizontal => Direction::Right,
            Self::Vertical => Direction::Down,
        }
    }
}
