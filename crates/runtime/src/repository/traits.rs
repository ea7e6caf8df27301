//! Repository contract for the keyed game collection.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use duel_core::{Game, GameId};

use super::error::{RepositoryError, Result};

/// A game behind its own lock.
///
/// The lock serializes round resolution per game; different games never
/// contend with each other.
pub type SharedGame = Arc<Mutex<Game>>;

/// A registered game plus its bookkeeping.
#[derive(Clone, Debug)]
pub struct GameRecord {
    pub id: GameId,
    /// Creation order within this store, starting at 1.
    pub sequence: u64,
    pub created_at: DateTime<Utc>,
    pub game: SharedGame,
}

impl GameRecord {
    /// Lock the game for reading or resolution.
    pub fn lock(&self) -> Result<MutexGuard<'_, Game>> {
        self.game
            .lock()
            .map_err(|_| RepositoryError::GameLockPoisoned(self.id.to_string()))
    }
}

/// Repository for live games.
///
/// Entries are never removed; memory grows with the number of games created.
pub trait GameRepository: Send + Sync {
    /// Allocate a unique identifier, register a fresh game under it and return it.
    fn create(&self, player1_name: &str, player2_name: &str) -> Result<GameRecord>;

    /// Look up a game by identifier.
    fn get(&self, id: &GameId) -> Result<Option<GameRecord>>;

    /// All registered games, in creation order.
    fn list(&self) -> Result<Vec<GameRecord>>;

    /// Number of registered games.
    fn len(&self) -> Result<usize> {
        Ok(self.list()?.len())
    }

    fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}
