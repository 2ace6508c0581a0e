use std::ops::RangeInclusive;

use rand::prelude::*;
use rand_pcg::Pcg64;
use rushhour_core::{
    Board, BoardDescriptor, LevelDescriptor, Orientation, Position, Vehicle, VehicleDescriptor,
};
use rushhour_solver::Solver;

use crate::LevelSeed;

/// Id of the player vehicle on generated boards.
pub const PLAYER_ID: &str = "target";

/// Difficulty label written into generated level descriptors.
pub const GENERATED_DIFFICULTY: &str = "Generated";

const PLAYER_LENGTH: u8 = 2;
const CAR_LENGTH: u8 = 2;
const TRUCK_LENGTH: u8 = 3;
const PLACEMENT_TRIES: usize = 20;

/// A level produced by [`LevelGenerator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedLevel {
    /// The starting board.
    pub board: Board,
    /// Length of the shortest solution.
    pub min_moves: usize,
    /// The seed the level was generated from.
    pub seed: LevelSeed,
}

impl GeneratedLevel {
    /// Converts the level into the level-file format.
    ///
    /// The player vehicle comes first as `target`. The remaining vehicles are
    /// renamed `car<N>` or `truck<N>` by length, numbered from 1 in board
    /// order.
    #[must_use]
    pub fn to_level_descriptor(&self, id: u32) -> LevelDescriptor {
        let mut vehicles = Vec::with_capacity(self.board.vehicle_count());
        if let Some(player) = self.board.player_vehicle() {
            vehicles.push(VehicleDescriptor {
                id: PLAYER_ID.into(),
                ..VehicleDescriptor::from(player)
            });
        }
        let obstacles = self.board.vehicles().filter(|vehicle| !vehicle.is_player());
        for (n, vehicle) in (1..).zip(obstacles) {
            let prefix = if vehicle.length() == CAR_LENGTH {
                "car"
            } else {
                "truck"
            };
            vehicles.push(VehicleDescriptor {
                id: format!("{prefix}{n}").into(),
                ..VehicleDescriptor::from(vehicle)
            });
        }

        LevelDescriptor {
            id,
            difficulty: Some(GENERATED_DIFFICULTY.to_owned()),
            min_moves: Some(u32::try_from(self.min_moves).unwrap_or(u32::MAX)),
            board: BoardDescriptor {
                width: self.board.width(),
                height: self.board.height(),
                exit: Some(self.board.exit()),
                vehicles,
            },
        }
    }
}

/// Generates random levels whose shortest solution is at least a given length.
///
/// # Configuration
///
/// - `min_moves` (default 10): shortest acceptable solution
/// - `max_attempts` (default 1000): boards tried before giving up
/// - `obstacles` (default `8..=13`): number of obstacle vehicles attempted
/// - `truck_ratio` (default 0.3): probability an obstacle is a truck
///
/// Each attempt places the player at a random column of the exit row, then
/// tries to place every obstacle at up to 20 random cells. Obstacles that do
/// not fit are skipped, and horizontal obstacles never go on the exit row.
#[derive(Debug, Clone)]
pub struct LevelGenerator<'a> {
    solver: &'a Solver,
    min_moves: usize,
    max_attempts: usize,
    obstacles: RangeInclusive<usize>,
    truck_ratio: f64,
}

impl<'a> LevelGenerator<'a> {
    /// Default shortest acceptable solution.
    pub const DEFAULT_MIN_MOVES: usize = 10;
    /// Default number of attempts.
    pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;
    /// Default probability that an obstacle is a truck.
    pub const DEFAULT_TRUCK_RATIO: f64 = 0.3;

    /// Creates a generator that measures difficulty with `solver`.
    #[must_use]
    pub fn new(solver: &'a Solver) -> Self {
        Self {
            solver,
            min_moves: Self::DEFAULT_MIN_MOVES,
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            obstacles: 8..=13,
            truck_ratio: Self::DEFAULT_TRUCK_RATIO,
        }
    }

    /// Sets the shortest acceptable solution.
    #[must_use]
    pub fn with_min_moves(mut self, min_moves: usize) -> Self {
        self.min_moves = min_moves;
        self
    }

    /// Sets how many boards are tried before giving up.
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Sets the range the number of obstacles is drawn from.
    ///
    /// # Panics
    ///
    /// Panics if `obstacles` is empty.
    #[must_use]
    pub fn with_obstacles(mut self, obstacles: RangeInclusive<usize>) -> Self {
        assert!(!obstacles.is_empty(), "obstacle range must not be empty");
        self.obstacles = obstacles;
        self
    }

    /// Sets the probability that an obstacle is a truck.
    ///
    /// # Panics
    ///
    /// Panics if `truck_ratio` is not within `0.0..=1.0`.
    #[must_use]
    pub fn with_truck_ratio(mut self, truck_ratio: f64) -> Self {
        assert!(
            (0.0..=1.0).contains(&truck_ratio),
            "truck ratio must be within 0.0..=1.0"
        );
        self.truck_ratio = truck_ratio;
        self
    }

    /// Returns the shortest acceptable solution.
    #[must_use]
    pub fn min_moves(&self) -> usize {
        self.min_moves
    }

    /// Returns the number of attempts.
    #[must_use]
    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Generates a level from a fresh random seed.
    ///
    /// Returns `None` if no attempt produced a hard enough level.
    #[must_use]
    pub fn generate(&self) -> Option<GeneratedLevel> {
        self.generate_with_seed(LevelSeed::random())
    }

    /// Generates a level deterministically from `seed`.
    ///
    /// Returns `None` if no attempt produced a hard enough level.
    #[must_use]
    pub fn generate_with_seed(&self, seed: LevelSeed) -> Option<GeneratedLevel> {
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        for attempt in 1..=self.max_attempts {
            let Some(board) = self.random_board(&mut rng) else {
                continue;
            };
            match self.solver.solve(&board) {
                Ok(solution) if solution.len() >= self.min_moves => {
                    log::debug!(
                        "seed {seed}: accepted attempt {attempt} with {} moves",
                        solution.len()
                    );
                    return Some(GeneratedLevel {
                        board,
                        min_moves: solution.len(),
                        seed,
                    });
                }
                Ok(solution) => {
                    log::trace!("attempt {attempt}: too easy ({} moves)", solution.len());
                }
                Err(err) => log::trace!("attempt {attempt}: {err}"),
            }
        }
        log::debug!(
            "seed {seed}: no level with {} moves in {} attempts",
            self.min_moves,
            self.max_attempts
        );
        None
    }

    fn random_board(&self, rng: &mut Pcg64) -> Option<Board> {
        let mut board = Board::standard();
        let exit = board.exit();
        let max_player_col = exit.col() - i32::from(PLAYER_LENGTH);
        let player_col = rng.random_range(0..=max_player_col);
        let player = Vehicle::player(PLAYER_ID, PLAYER_LENGTH, Position::new(exit.row(), player_col));
        board.add_vehicle(player.ok()?).ok()?;

        let rows = i32::try_from(board.height()).ok()?;
        let cols = i32::try_from(board.width()).ok()?;
        let count = rng.random_range(self.obstacles.clone());
        for i in 0..count {
            let (prefix, length) = if rng.random_bool(self.truck_ratio) {
                ("truck", TRUCK_LENGTH)
            } else {
                ("car", CAR_LENGTH)
            };
            let orientation = if rng.random_bool(0.5) {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let id = format!("{prefix}_{i:02}");
            for _ in 0..PLACEMENT_TRIES {
                let position = Position::new(rng.random_range(0..rows), rng.random_range(0..cols));
                if orientation.is_horizontal() && position.row() == exit.row() {
                    continue;
                }
                let vehicle = Vehicle::new(id.as_str(), orientation, length, position, false).ok()?;
                if board.add_vehicle(vehicle).is_ok() {
                    break;
                }
            }
        }
        Some(board)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn seed(phrase: &str) -> LevelSeed {
        LevelSeed::from_phrase(phrase)
    }

    #[test]
    fn test_same_seed_same_level() {
        let solver = Solver::new();
        let generator = LevelGenerator::new(&solver).with_min_moves(3);
        let first = generator.generate_with_seed(seed("same")).unwrap();
        let second = generator.generate_with_seed(seed("same")).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.seed, seed("same"));
    }

    #[test]
    fn test_min_moves_is_shortest_solution() {
        let solver = Solver::new();
        let level = LevelGenerator::new(&solver)
            .with_min_moves(3)
            .generate_with_seed(seed("shortest"))
            .unwrap();
        assert!(level.min_moves >= 3);
        assert_eq!(solver.min_moves(&level.board), Some(level.min_moves));
    }

    #[test]
    fn test_gives_up_after_max_attempts() {
        let solver = Solver::new().with_max_depth(2);
        let generator = LevelGenerator::new(&solver)
            .with_min_moves(3)
            .with_max_attempts(5);
        assert_eq!(generator.generate_with_seed(seed("hopeless")), None);
    }

    #[test]
    fn test_level_descriptor_renames_vehicles() {
        let solver = Solver::new();
        let level = LevelGenerator::new(&solver)
            .with_min_moves(2)
            .generate_with_seed(seed("descriptor"))
            .unwrap();
        let descriptor = level.to_level_descriptor(4);

        assert_eq!(descriptor.id, 4);
        assert_eq!(descriptor.difficulty.as_deref(), Some(GENERATED_DIFFICULTY));
        assert_eq!(
            descriptor.min_moves,
            Some(u32::try_from(level.min_moves).unwrap())
        );

        let (player, obstacles) = descriptor.board.vehicles.split_first().unwrap();
        assert_eq!(player.id, PLAYER_ID);
        assert!(player.is_player);
        for (n, vehicle) in (1..).zip(obstacles) {
            let prefix = if vehicle.length == CAR_LENGTH { "car" } else { "truck" };
            assert_eq!(vehicle.id, format!("{prefix}{n}").as_str());
            assert!(!vehicle.is_player);
        }

        let board = descriptor.to_board().unwrap();
        assert_eq!(board.vehicle_count(), level.board.vehicle_count());
        assert_eq!(solver.min_moves(&board), Some(level.min_moves));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(8))]

        #[test]
        fn test_generated_board_layout(bytes in any::<[u8; 32]>()) {
            let solver = Solver::new();
            let generator = LevelGenerator::new(&solver)
                .with_min_moves(1)
                .with_obstacles(4..=8);
            let level = generator.generate_with_seed(LevelSeed::from(bytes));
            prop_assume!(level.is_some());
            let level = level.unwrap();
            let board = &level.board;

            let player = board.player_vehicle().unwrap();
            prop_assert_eq!(player.id(), PLAYER_ID);
            prop_assert_eq!(player.position().row(), board.exit().row());
            prop_assert!((0..=3).contains(&player.position().col()));
            prop_assert!(board.vehicle_count() <= 9);
            prop_assert!(!board.is_solved());
            for vehicle in board.vehicles().filter(|vehicle| !vehicle.is_player()) {
                prop_assert!(
                    vehicle.orientation().is_vertical()
                        || vehicle.position().row() != board.exit().row()
                );
                prop_assert!([CAR_LENGTH, TRUCK_LENGTH].contains(&vehicle.length()));
            }
        }
    }
}
