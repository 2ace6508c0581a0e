use std::{collections::BTreeMap, time::Duration};

use serde::{Deserialize, Serialize};

/// Best results for one level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelRecord {
    /// Fewest forward moves in a completed run.
    pub best_moves: u32,
    /// Shortest completed run.
    pub best_time: Duration,
}

/// Completed levels and their best results, keyed by level id.
///
/// Records only ever improve: each field is replaced only by a strictly better
/// value, independently of the other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress {
    records: BTreeMap<u32, LevelRecord>,
}

impl Progress {
    /// Creates an empty progress store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the best results for a level, if it was ever completed.
    #[must_use]
    pub fn record(&self, level: u32) -> Option<&LevelRecord> {
        self.records.get(&level)
    }

    /// Returns `true` if the level was completed at least once.
    #[must_use]
    pub fn is_completed(&self, level: u32) -> bool {
        self.records.contains_key(&level)
    }

    /// Returns the number of completed levels.
    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.records.len()
    }

    /// Records a completed run and returns `true` if anything improved.
    ///
    /// The first completion of a level is always recorded.
    pub fn record_completion(&mut self, level: u32, moves: u32, time: Duration) -> bool {
        let Some(record) = self.records.get_mut(&level) else {
            self.records.insert(
                level,
                LevelRecord {
                    best_moves: moves,
                    best_time: time,
                },
            );
            return true;
        };

        let mut improved = false;
        if moves < record.best_moves {
            record.best_moves = moves;
            improved = true;
        }
        if time < record.best_time {
            record.best_time = time;
            improved = true;
        }
        improved
    }
}
