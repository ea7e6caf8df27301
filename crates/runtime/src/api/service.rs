//! Cloneable façade over the game store and the round engine.
//!
//! [`DuelService`] is built once at startup and shared by every request
//! handler. It validates input, looks games up, serializes resolution per game
//! through the game's lock and returns detached views.
use std::sync::Arc;

use duel_core::{ActionInput, GameId, PlayerSlot, resolve_round};

use super::errors::{InputError, Result, RuntimeError};
use super::views::{GameSummary, GameView, NewGame, RoundReport};
use crate::config::RuntimeConfig;
use crate::repository::{GameRecord, GameRepository, InMemoryGameRepo};

/// Longest accepted display name, in characters.
pub const MAX_NAME_LEN: usize = 32;

/// Client-facing handle to the duel runtime.
#[derive(Clone)]
pub struct DuelService {
    repo: Arc<dyn GameRepository>,
    config: RuntimeConfig,
}

impl DuelService {
    pub fn new(repo: Arc<dyn GameRepository>, config: RuntimeConfig) -> Self {
        Self { repo, config }
    }

    /// Service backed by a fresh in-memory store.
    pub fn in_memory(config: RuntimeConfig) -> Self {
        Self::new(Arc::new(InMemoryGameRepo::new()), config)
    }

    /// Create a game with both players fresh and return its view.
    pub fn create_game(&self, request: NewGame) -> Result<GameView> {
        let player1 = validate_name(&request, PlayerSlot::Player1)?;
        let player2 = validate_name(&request, PlayerSlot::Player2)?;

        let record = self.repo.create(&player1, &player2)?;
        let game = record.lock()?;

        tracing::info!(
            game_id = %record.id,
            player1 = %player1,
            player2 = %player2,
            "game created"
        );
        Ok(GameView::from_game(&game, self.config.recent_log_window()))
    }

    pub fn get_game(&self, id: &GameId) -> Result<GameView> {
        let record = self.find(id)?;
        let game = record.lock()?;
        Ok(GameView::from_game(&game, self.config.recent_log_window()))
    }

    /// Resolve one round for a game.
    ///
    /// Checks run in order: both actions present and recognized, game exists,
    /// game active. Any failure leaves the game unchanged.
    pub fn submit_actions(
        &self,
        id: &GameId,
        player1_action: Option<&str>,
        player2_action: Option<&str>,
    ) -> Result<RoundReport> {
        let action1 = validate_action(player1_action, PlayerSlot::Player1)?;
        let action2 = validate_action(player2_action, PlayerSlot::Player2)?;

        let record = self.find(id)?;
        let mut game = record.lock()?;

        if !game.is_active() {
            tracing::warn!(game_id = %id, "actions submitted to finished game");
            return Err(RuntimeError::GameNotActive { id: id.clone() });
        }

        let round = game.round;
        let battle_result = resolve_round(&mut game, action1, action2).map_err(|error| {
            tracing::error!(game_id = %id, round, %error, "round resolution failed");
            RuntimeError::from(error)
        })?;

        tracing::info!(
            game_id = %id,
            round,
            player1_hp = game.players.player1.hp,
            player2_hp = game.players.player2.hp,
            status = %game.status,
            winner = %game.winner,
            "round resolved"
        );

        Ok(RoundReport {
            game: GameView::from_game(&game, self.config.recent_log_window()),
            battle_result,
        })
    }

    /// Summaries of every known game, oldest first.
    pub fn list_games(&self) -> Result<Vec<GameSummary>> {
        self.repo
            .list()?
            .iter()
            .map(|record| -> Result<GameSummary> {
                let game = record.lock()?;
                Ok(GameSummary::from_record(record, &game))
            })
            .collect()
    }

    pub fn game_count(&self) -> Result<usize> {
        Ok(self.repo.len()?)
    }

    fn find(&self, id: &GameId) -> Result<GameRecord> {
        self.repo.get(id)?.ok_or_else(|| {
            tracing::debug!(game_id = %id, "game not found");
            RuntimeError::NotFound { id: id.clone() }
        })
    }
}

fn validate_action(raw: Option<&str>, slot: PlayerSlot) -> Result<ActionInput> {
    let raw = raw.ok_or(InputError::MissingAction(slot))?;
    match ActionInput::parse(raw) {
        known @ ActionInput::Known(_) => Ok(known),
        ActionInput::Unrecognized(value) => {
            Err(InputError::UnknownAction { slot, value }.into())
        }
    }
}

fn validate_name(request: &NewGame, slot: PlayerSlot) -> Result<String> {
    let Some(raw) = request.name(slot) else {
        return Ok(slot.default_name().to_owned());
    };

    let name = raw.trim();
    if name.is_empty() {
        return Err(InputError::BlankName(slot).into());
    }
    if name.chars().count() > MAX_NAME_LEN {
        return Err(InputError::NameTooLong {
            slot,
            max: MAX_NAME_LEN,
        }
        .into());
    }
    Ok(name.to_owned())
}
