//! A single slide of one vehicle.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::{Direction, VehicleId};

/// One slide: a vehicle moving `distance` cells in `direction`.
///
/// A slide of any distance counts as a single move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    /// The vehicle being moved.
    pub vehicle_id: VehicleId,
    /// Direction of travel.
    pub direction: Direction,
    /// Number of cells travelled.
    pub distance: u8,
}

impl Move {
    /// Creates a move.
    #[must_use]
    pub fn new(vehicle_id: impl Into<VehicleId>, direction: Direction, distance: u8) -> Self {
        Self {
            vehicle_id: vehicle_id.into(),
            direction,
            distance,
        }
    }

    /// Returns the move that undoes this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            vehicle_id: self.vehicle_id.clone(),
            direction: self.direction.inverse(),
            distance: self.distance,
        }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.vehicle_id, self.direction, self.distance)
    }
}
