//! In-memory GameRepository implementation.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use chrono::Utc;
use duel_core::{Game, GameId};

use crate::repository::{GameRecord, GameRepository, RepositoryError, Result};

/// In-memory implementation of GameRepository.
///
/// Identifiers are `game_<unix millis>_<sequence>`; the sequence alone makes
/// them unique for the lifetime of the store.
pub struct InMemoryGameRepo {
    games: RwLock<HashMap<GameId, GameRecord>>,
    next_sequence: AtomicU64,
}

impl InMemoryGameRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            games: RwLock::new(HashMap::new()),
            next_sequence: AtomicU64::new(1),
        }
    }
}

impl Default for InMemoryGameRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRepository for InMemoryGameRepo {
    fn create(&self, player1_name: &str, player2_name: &str) -> Result<GameRecord> {
        let sequence = self.next_sequence.fetch_add(1, Ordering::Relaxed);
        let created_at = Utc::now();
        let id = GameId::new(format!(
            "game_{}_{}",
            created_at.timestamp_millis(),
            sequence
        ));

        let record = GameRecord {
            id: id.clone(),
            sequence,
            created_at,
            game: Arc::new(Mutex::new(Game::with_names(
                id.clone(),
                player1_name,
                player2_name,
            ))),
        };

        let mut games = self
            .games
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        games.insert(id, record.clone());
        Ok(record)
    }

    fn get(&self, id: &GameId) -> Result<Option<GameRecord>> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<GameRecord>> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut records: Vec<GameRecord> = games.values().cloned().collect();
        records.sort_unstable_by_key(|record| record.sequence);
        Ok(records)
    }

    fn len(&self) -> Result<usize> {
        let games = self
            .games
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(games.len())
    }
}
