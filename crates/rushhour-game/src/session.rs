use std::time::Duration;

use rushhour_core::{Direction, LevelPack};

use crate::{Game, GameError, GameState, MoveOutcome, MoveRecord, Progress};

/// Everything a player front end needs between launches: the level pack, the
/// progress store, and the level currently being played.
///
/// The session is created once at startup and owns its state explicitly;
/// persisting [`Progress`] (and [`Game::snapshot`]) is up to the caller.
#[derive(Debug, Clone)]
pub struct Session {
    pack: LevelPack,
    progress: Progress,
    current_index: usize,
    game: Option<Game>,
}

impl Session {
    /// Creates a session with no level loaded yet.
    #[must_use]
    pub fn new(pack: LevelPack, progress: Progress) -> Self {
        Self {
            pack,
            progress,
            current_index: 0,
            game: None,
        }
    }

    /// Returns the level pack.
    #[must_use]
    pub fn pack(&self) -> &LevelPack {
        &self.pack
    }

    /// Returns the progress store.
    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// Consumes the session and returns the progress store for saving.
    #[must_use]
    pub fn into_progress(self) -> Progress {
        self.progress
    }

    /// Returns the index of the current (or last requested) level.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the game in progress.
    #[must_use]
    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Returns the phase of the current game, [`GameState::Loading`] if none.
    #[must_use]
    pub fn state(&self) -> GameState {
        self.game.as_ref().map_or(GameState::Loading, Game::state)
    }

    /// Loads the level at `index` in the pack and starts it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::UnknownLevel`] if the index is past the end, or
    /// [`GameError::Level`] if the level data is invalid. The previous game is
    /// kept in either case.
    pub fn start_level(&mut self, index: usize) -> Result<&Game, GameError> {
        let level = self
            .pack
            .levels
            .get(index)
            .ok_or(GameError::UnknownLevel { index })?;
        let game = Game::new(level.clone())?;
        self.current_index = index;
        Ok(self.game.insert(game))
    }

    /// Starts the level after the current one.
    ///
    /// # Errors
    ///
    /// Same as [`start_level`](Self::start_level).
    pub fn next_level(&mut self) -> Result<&Game, GameError> {
        let index = if self.game.is_some() {
            self.current_index + 1
        } else {
            self.current_index
        };
        self.start_level(index)
    }

    /// Restarts the current level.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] if no level was started.
    pub fn restart(&mut self) -> Result<(), GameError> {
        self.game_mut()?.reset();
        Ok(())
    }

    /// Moves a vehicle in the current game.
    ///
    /// A winning move is recorded in the progress store.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoActiveGame`] if no level was started, otherwise
    /// whatever [`Game::move_vehicle`] reports.
    pub fn move_vehicle(
        &mut self,
        id: &str,
        direction: Direction,
        distance: u8,
    ) -> Result<MoveOutcome, GameError> {
        let game = self.game.as_mut().ok_or(GameError::NoActiveGame)?;
        let outcome = game.move_vehicle(id, direction, distance)?;
        if outcome.solved {
            let level = game.level().id;
            if self
                .progress
                .record_completion(level, game.move_count(), game.elapsed())
            {
                log::info!("new best result for level {level}");
            }
        }
        Ok(outcome)
    }

    /// Undoes the last move of the current game, if any.
    pub fn undo(&mut self) -> Option<MoveRecord> {
        self.game.as_mut()?.undo()
    }

    /// Advances the current game's timer.
    pub fn tick(&mut self, delta: Duration) {
        if let Some(game) = &mut self.game {
            game.tick(delta);
        }
    }

    fn game_mut(&mut self) -> Result<&mut Game, GameError> {
        self.game.as_mut().ok_or(GameError::NoActiveGame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACK: &str = r#"{
        "levels": [
            {"id": 1, "vehicles": [
                {"id": "target", "orientation": "horizontal", "length": 2,
                 "position": {"row": 2, "col": 2}, "isPlayer": true}
            ]},
            {"id": 2, "vehicles": [
                {"id": "target", "orientation": "horizontal", "length": 2,
                 "position": {"row": 2, "col": 0}, "isPlayer": true},
                {"id": "car1", "orientation": "vertical", "length": 2,
                 "position": {"row": 1, "col": 4}}
            ]}
        ]
    }"#;

    fn session() -> Session {
        Session::new(LevelPack::from_json_str(PACK).unwrap(), Progress::new())
    }

    #[test]
    fn test_loading_until_started() {
        let mut session = session();
        assert_eq!(session.state(), GameState::Loading);
        assert!(session.undo().is_none());
        assert!(matches!(
            session.move_vehicle("target", Direction::Right, 1),
            Err(GameError::NoActiveGame)
        ));
        assert!(matches!(session.restart(), Err(GameError::NoActiveGame)));

        session.next_level().unwrap();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.state(), GameState::Playing);
    }

    #[test]
    fn test_win_records_progress() {
        let mut session = session();
        session.start_level(0).unwrap();
        session.tick(Duration::from_secs(4));
        session.move_vehicle("target", Direction::Right, 1).unwrap();
        let outcome = session.move_vehicle("target", Direction::Right, 1).unwrap();
        assert!(outcome.solved);
        assert_eq!(session.state(), GameState::Won);

        let record = session.progress().record(1).unwrap();
        assert_eq!(record.best_moves, 2);
        assert_eq!(record.best_time, Duration::from_secs(4));

        session.restart().unwrap();
        session.move_vehicle("target", Direction::Right, 2).unwrap();
        assert_eq!(session.progress().record(1).unwrap().best_moves, 1);
    }

    #[test]
    fn test_next_level_and_bounds() {
        let mut session = session();
        session.start_level(0).unwrap();
        let game = session.next_level().unwrap();
        assert_eq!(game.level().id, 2);
        assert!(matches!(
            session.next_level(),
            Err(GameError::UnknownLevel { index: 2 })
        ));
        // The game in progress survives the failed switch.
        assert_eq!(session.game().unwrap().level().id, 2);
        assert_eq!(session.current_index(), 1);
    }
}
