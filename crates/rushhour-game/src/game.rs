use std::{num::NonZero, time::Duration};

use rushhour_core::{Board, BoardDescriptor, Direction, LevelDescriptor, Move, VehicleId};
use serde::{Deserialize, Serialize};

use crate::{GameError, UndoStack};

/// Phase of a game session.
///
/// `Loading → Playing → Won`. Only [`Game::reset`] (or loading another level)
/// leaves `Won`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::IsVariant,
)]
#[serde(rename_all = "lowercase")]
pub enum GameState {
    /// No board is ready yet.
    Loading,
    /// Moves are accepted.
    Playing,
    /// The player vehicle reached the exit.
    Won,
}

/// A forward move as stored in the history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    /// The vehicle that moved.
    pub vehicle_id: VehicleId,
    /// Direction of travel.
    pub direction: Direction,
    /// Number of cells travelled.
    pub distance: u8,
    /// Session time at which the move was made.
    pub timestamp: Duration,
}

impl MoveRecord {
    /// Returns the move this record describes.
    #[must_use]
    pub fn to_move(&self) -> Move {
        Move::new(self.vehicle_id.clone(), self.direction, self.distance)
    }
}

/// Move history of one game.
pub type MoveHistory = UndoStack<MoveRecord>;

/// Result of a successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The record appended to the history.
    pub record: MoveRecord,
    /// `true` if this move won the game.
    pub solved: bool,
}

/// Saved state of a game, for external persistence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    /// The level being played.
    pub level: LevelDescriptor,
    /// Current board.
    pub board: BoardDescriptor,
    /// Forward moves, oldest first.
    pub history: Vec<MoveRecord>,
    /// Forward move counter.
    pub move_count: u32,
    /// Elapsed play time.
    pub elapsed: Duration,
    /// Number of history entries kept for undo.
    #[serde(default = "default_history_capacity")]
    pub history_capacity: NonZero<usize>,
}

fn default_history_capacity() -> NonZero<usize> {
    Game::DEFAULT_HISTORY_CAPACITY
}

/// One play-through of a level.
///
/// Wraps a [`Board`] with the bookkeeping a player sees: the move history used
/// for undo, a forward move counter, the elapsed time, and the [`GameState`].
///
/// The move counter counts forward moves only; undoing a move does not
/// decrement it.
///
/// # Example
///
/// ```
/// use rushhour_core::{Direction, LevelDescriptor};
/// use rushhour_game::{Game, GameState};
///
/// let level: LevelDescriptor = serde_json::from_str(r#"{
///     "id": 1,
///     "vehicles": [
///         {"id": "target", "orientation": "horizontal", "length": 2,
///          "position": {"row": 2, "col": 0}, "isPlayer": true},
///         {"id": "car1", "orientation": "vertical", "length": 2,
///          "position": {"row": 2, "col": 3}}
///     ]
/// }"#)?;
/// let mut game = Game::new(level)?;
///
/// game.move_vehicle("car1", Direction::Down, 2)?;
/// game.undo();
/// assert_eq!(game.move_count(), 1);
///
/// game.move_vehicle("car1", Direction::Up, 2)?;
/// let outcome = game.move_vehicle("target", Direction::Right, 4)?;
/// assert!(outcome.solved);
/// assert_eq!(game.state(), GameState::Won);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    level: LevelDescriptor,
    initial: Board,
    board: Board,
    history: MoveHistory,
    move_count: u32,
    elapsed: Duration,
    state: GameState,
}

impl Game {
    /// Default number of history entries kept for undo.
    pub const DEFAULT_HISTORY_CAPACITY: NonZero<usize> = NonZero::new(5000).unwrap();

    /// Loads a level and starts playing it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Level`] if the level data is invalid.
    pub fn new(level: LevelDescriptor) -> Result<Self, GameError> {
        Self::with_history_capacity(level, Self::DEFAULT_HISTORY_CAPACITY)
    }

    /// Loads a level, keeping at most `capacity` moves for undo.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Level`] if the level data is invalid.
    pub fn with_history_capacity(
        level: LevelDescriptor,
        capacity: NonZero<usize>,
    ) -> Result<Self, GameError> {
        log::debug!("loading level {}", level.id);
        let initial = level.to_board()?;
        let mut game = Self {
            level,
            board: initial.clone(),
            initial,
            history: MoveHistory::new(capacity),
            move_count: 0,
            elapsed: Duration::ZERO,
            state: GameState::Loading,
        };
        game.enter_playing();
        Ok(game)
    }

    fn enter_playing(&mut self) {
        self.state = if self.board.check_win_condition() {
            GameState::Won
        } else {
            GameState::Playing
        };
        log::debug!("level {} is now {:?}", self.level.id, self.state);
    }

    /// Returns the level being played.
    #[must_use]
    pub fn level(&self) -> &LevelDescriptor {
        &self.level
    }

    /// Returns the current board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the number of forward moves made since the level started.
    #[must_use]
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    /// Returns the accumulated play time.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Returns the moves available for undo.
    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Returns `true` if [`undo`](Self::undo) would do something.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.state.is_playing() && !self.history.is_empty()
    }

    /// Slides a vehicle and records the move.
    ///
    /// On success the move is appended to the history, the move counter is
    /// incremented, and the game switches to [`GameState::Won`] if the player
    /// vehicle reached the exit.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NotPlaying`] unless the state is
    /// [`GameState::Playing`], or [`GameError::Blocked`] if the board rejects
    /// the move. Nothing changes in either case.
    pub fn move_vehicle(
        &mut self,
        id: &str,
        direction: Direction,
        distance: u8,
    ) -> Result<MoveOutcome, GameError> {
        if !self.state.is_playing() {
            return Err(GameError::NotPlaying);
        }
        self.board.move_vehicle(id, direction, distance)?;

        let record = MoveRecord {
            vehicle_id: id.into(),
            direction,
            distance,
            timestamp: self.elapsed,
        };
        self.history.push(record.clone());
        self.move_count += 1;

        let solved = self.board.check_win_condition();
        if solved {
            self.state = GameState::Won;
            log::info!(
                "level {} solved in {} moves ({:?})",
                self.level.id,
                self.move_count,
                self.elapsed
            );
        }
        Ok(MoveOutcome { record, solved })
    }

    /// Reverts the most recent move and returns its record.
    ///
    /// Does nothing and returns `None` when the history is empty or the game
    /// is not being played. The move counter is left as is, and the reverted
    /// move is not kept anywhere, so repeated undo walks back to the start.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        if !self.state.is_playing() {
            return None;
        }
        let record = self.history.pop()?;
        if let Err(reason) = self.board.apply_move(&record.to_move().inverse()) {
            // Only reachable if the history was edited behind the board's back.
            log::warn!("cannot undo {}: {reason}", record.to_move());
            self.history.push(record);
            return None;
        }
        Some(record)
    }

    /// Restarts the level: initial board, empty history, zero counter and timer.
    pub fn reset(&mut self) {
        self.board = self.initial.clone();
        self.history.clear();
        self.move_count = 0;
        self.elapsed = Duration::ZERO;
        self.enter_playing();
    }

    /// Advances the play timer. Time only accumulates while playing.
    pub fn tick(&mut self, delta: Duration) {
        if self.state.is_playing() {
            self.elapsed = self.elapsed.saturating_add(delta);
        }
    }

    /// Captures the game for saving.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            level: self.level.clone(),
            board: BoardDescriptor::from(&self.board),
            history: self.history.iter().cloned().collect(),
            move_count: self.move_count,
            elapsed: self.elapsed,
            history_capacity: self.history.capacity(),
        }
    }

    /// Rebuilds a game from a snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Level`] if the level or the saved board is invalid,
    /// and [`GameError::SnapshotMismatch`] if the saved board does not have the
    /// level's vehicles, dimensions, and exit, or if the saved history does not
    /// lead back from the saved board to the level's starting board.
    pub fn restore(snapshot: GameSnapshot) -> Result<Self, GameError> {
        let GameSnapshot {
            level,
            board,
            history,
            move_count,
            elapsed,
            history_capacity,
        } = snapshot;
        let initial = level.to_board()?;
        let board = Board::try_from(&board)?;
        let history = MoveHistory::from_entries(history_capacity, history);
        if !same_puzzle(&initial, &board)
            || !history_unwinds(&history, &board, &initial, move_count)
        {
            return Err(GameError::SnapshotMismatch { level: level.id });
        }

        let mut game = Self {
            level,
            initial,
            board,
            history,
            move_count,
            elapsed,
            state: GameState::Loading,
        };
        game.enter_playing();
        Ok(game)
    }
}

/// Checks that undoing every entry of `history` is legal from `board`.
///
/// Unless the history may have dropped old entries, unwinding it must also
/// arrive at `initial`.
fn history_unwinds(
    history: &MoveHistory,
    board: &Board,
    initial: &Board,
    move_count: u32,
) -> bool {
    let Ok(recorded) = usize::try_from(move_count) else {
        return false;
    };
    if recorded < history.len() {
        return false;
    }
    let mut board = board.clone();
    for record in history.iter().rev() {
        if board.apply_move(&record.to_move().inverse()).is_err() {
            return false;
        }
    }
    recorded > history.capacity().get() || board == *initial
}

fn same_puzzle(a: &Board, b: &Board) -> bool {
    a.width() == b.width()
        && a.height() == b.height()
        && a.exit() == b.exit()
        && a.vehicle_count() == b.vehicle_count()
        && a.vehicles().zip(b.vehicles()).all(|(x, y)| {
            x.id() == y.id()
                && x.orientation() == y.orientation()
                && x.length() == y.length()
                && x.is_player() == y.is_player()
        })
}
