use std::collections::{HashSet, VecDeque};

use rushhour_core::{Board, Move, MoveBlockReason, Position};

use crate::SolverError;

/// A shortest sequence of moves from a board to a solved board.
///
/// # Examples
///
/// ```
/// use rushhour_core::{Board, Orientation, Position, Vehicle};
/// use rushhour_solver::Solver;
///
/// let mut board = Board::standard();
/// board.add_vehicle(Vehicle::player("target", 2, Position::new(2, 0))?)?;
/// board.add_vehicle(Vehicle::new("truck", Orientation::Vertical, 3, Position::new(0, 2), false)?)?;
///
/// let solution = Solver::new().solve(&board)?;
/// assert_eq!(solution.len(), 2);
/// assert!(solution.apply_to(&board)?.is_solved());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    moves: Vec<Move>,
    explored_states: usize,
}

impl Solution {
    /// Returns the moves in the order they are played.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Returns the number of moves.
    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    /// Returns `true` if the board was already solved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Returns how many distinct states the search visited.
    #[must_use]
    pub fn explored_states(&self) -> usize {
        self.explored_states
    }

    /// Replays the solution on `board` and returns the final board.
    ///
    /// # Errors
    ///
    /// Returns the reason a move is rejected if `board` is not the board this
    /// solution was computed for.
    pub fn apply_to(&self, board: &Board) -> Result<Board, MoveBlockReason> {
        let mut board = board.clone();
        for mv in &self.moves {
            board.apply_move(mv)?;
        }
        Ok(board)
    }
}

/// Breadth-first puzzle solver.
///
/// # Configuration
///
/// - `max_depth` (default 100): solutions longer than this are not searched for
/// - `max_states` (default unlimited): aborts once this many states are visited
#[derive(Debug, Clone)]
pub struct Solver {
    max_depth: usize,
    max_states: Option<usize>,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
struct Node {
    parent: Option<(usize, Move)>,
}

impl Solver {
    /// Default depth limit.
    pub const DEFAULT_MAX_DEPTH: usize = 100;

    /// Creates a solver with default limits.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: Self::DEFAULT_MAX_DEPTH,
            max_states: None,
        }
    }

    /// Sets the longest solution searched for.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the largest number of states visited before giving up.
    #[must_use]
    pub fn with_max_states(mut self, max_states: usize) -> Self {
        self.max_states = Some(max_states);
        self
    }

    /// Returns the depth limit.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns the state limit, if any.
    #[must_use]
    pub fn max_states(&self) -> Option<usize> {
        self.max_states
    }

    /// Finds a shortest solution.
    ///
    /// # Errors
    ///
    /// - [`SolverError::NoPlayer`] if the board has no player vehicle
    /// - [`SolverError::Unsolvable`] if no reachable state is solved
    /// - [`SolverError::DepthLimit`] if no solution exists within `max_depth`
    /// - [`SolverError::StateLimit`] if the state limit was reached
    pub fn solve(&self, board: &Board) -> Result<Solution, SolverError> {
        if board.player_vehicle().is_none() {
            return Err(SolverError::NoPlayer);
        }
        if board.is_solved() {
            return Ok(Solution {
                moves: Vec::new(),
                explored_states: 1,
            });
        }

        let mut nodes = vec![Node { parent: None }];
        let mut visited: HashSet<Vec<Position>> = HashSet::from([board.state_key()]);
        let mut queue = VecDeque::from([(board.clone(), 0, 0)]);
        let mut depth_pruned = false;

        while let Some((current, index, depth)) = queue.pop_front() {
            if depth >= self.max_depth {
                depth_pruned = true;
                continue;
            }
            for mv in current.legal_moves() {
                let Ok(next) = current.with_move(&mv) else {
                    continue;
                };
                if !visited.insert(next.state_key()) {
                    continue;
                }
                if let Some(max_states) = self.max_states
                    && visited.len() > max_states
                {
                    log::debug!("state limit {max_states} reached at depth {depth}");
                    return Err(SolverError::StateLimit { max_states });
                }

                nodes.push(Node {
                    parent: Some((index, mv)),
                });
                let next_index = nodes.len() - 1;
                if next.is_solved() {
                    let moves = Self::path_to(&nodes, next_index);
                    log::debug!(
                        "solved in {} moves, {} states explored",
                        moves.len(),
                        visited.len()
                    );
                    return Ok(Solution {
                        moves,
                        explored_states: visited.len(),
                    });
                }
                queue.push_back((next, next_index, depth + 1));
            }
        }

        log::debug!("search exhausted after {} states", visited.len());
        if depth_pruned {
            Err(SolverError::DepthLimit {
                max_depth: self.max_depth,
            })
        } else {
            Err(SolverError::Unsolvable)
        }
    }

    /// Returns the length of a shortest solution, or `None` if there is none
    /// within the configured limits.
    #[must_use]
    pub fn min_moves(&self, board: &Board) -> Option<usize> {
        self.solve(board).ok().map(|solution| solution.len())
    }

    fn path_to(nodes: &[Node], mut index: usize) -> Vec<Move> {
        let mut moves = Vec::new();
        while let Some((parent, mv)) = &nodes[index].parent {
            moves.push(mv.clone());
            index = *parent;
        }
        moves.reverse();
        moves
    }
}

#[cfg(test)]
mod tests {
    use rushhour_core::{Direction, Orientation, Vehicle};

    use super::*;

    fn board_with(vehicles: &[(&str, Orientation, u8, i32, i32)]) -> Board {
        let mut board = Board::standard();
        board
            .add_vehicle(Vehicle::player("target", 2, Position::new(2, 0)).unwrap())
            .unwrap();
        for &(id, orientation, length, row, col) in vehicles {
            board
                .add_vehicle(
                    Vehicle::new(id, orientation, length, Position::new(row, col), false)
                        .unwrap(),
                )
                .unwrap();
        }
        board
    }

    #[test]
    fn test_already_solved() {
        let mut board = Board::standard();
        board
            .add_vehicle(Vehicle::player("target", 2, Position::new(2, 4)).unwrap())
            .unwrap();
        let solution = Solver::new().solve(&board).unwrap();
        assert!(solution.is_empty());
    }

    #[test]
    fn test_open_road_takes_one_move() {
        let board = board_with(&[]);
        let solution = Solver::new().solve(&board).unwrap();
        assert_eq!(
            solution.moves(),
            [Move::new("target", Direction::Right, 4)]
        );
    }

    #[test]
    fn test_blocker_chain() {
        // The truck can only clear row 2 once the car below it moves aside.
        let board = board_with(&[
            ("truck", Orientation::Vertical, 3, 0, 2),
            ("car", Orientation::Horizontal, 2, 5, 1),
        ]);
        let solution = Solver::new().solve(&board).unwrap();
        assert_eq!(solution.len(), 3);
        assert_eq!(
            solution.moves()[1..],
            [
                Move::new("truck", Direction::Down, 3),
                Move::new("target", Direction::Right, 4),
            ]
        );
        assert!(solution.apply_to(&board).unwrap().is_solved());
        assert_eq!(Solver::new().min_moves(&board), Some(3));
    }

    #[test]
    fn test_blocked_exit_row_is_unsolvable() {
        let board = board_with(&[("car", Orientation::Horizontal, 2, 2, 3)]);
        assert_eq!(Solver::new().solve(&board), Err(SolverError::Unsolvable));
        assert_eq!(Solver::new().min_moves(&board), None);
    }

    #[test]
    fn test_limits() {
        let board = board_with(&[("truck", Orientation::Vertical, 3, 0, 2)]);
        assert_eq!(
            Solver::new().with_max_depth(1).solve(&board),
            Err(SolverError::DepthLimit { max_depth: 1 })
        );
        assert_eq!(
            Solver::new().with_max_states(1).solve(&board),
            Err(SolverError::StateLimit { max_states: 1 })
        );
        assert!(Solver::new().with_max_depth(2).solve(&board).is_ok());
    }

    #[test]
    fn test_no_player() {
        let mut board = board_with(&[]);
        board.remove_vehicle("target");
        assert_eq!(Solver::new().solve(&board), Err(SolverError::NoPlayer));
    }
}
