//! Serializable views returned to transports.
//!
//! Views are detached snapshots: building one copies what it needs out of the
//! locked game, so callers never hold a game lock while serializing.

use chrono::{DateTime, Utc};
use duel_core::{
    ActionPair, BattleResult, Game, GameId, GameStatus, PlayerSlot, Players, RoundLogEntry, Winner,
};
use serde::{Deserialize, Serialize};

use crate::repository::GameRecord;

/// External view of a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameView {
    pub id: GameId,
    pub players: Players,
    /// Always `player1`; both players act every round.
    pub current_turn: PlayerSlot,
    pub round: u32,
    pub game_status: GameStatus,
    pub winner: Winner,
    pub last_actions: Option<ActionPair>,
    /// The most recent log entries, oldest first.
    pub recent_battle_log: Vec<RoundLogEntry>,
}

impl GameView {
    pub fn from_game(game: &Game, log_window: usize) -> Self {
        Self {
            id: game.id.clone(),
            players: game.players.clone(),
            current_turn: PlayerSlot::Player1,
            round: game.round,
            game_status: game.status,
            winner: game.winner,
            last_actions: game.last_actions.clone(),
            recent_battle_log: game.recent_log(log_window).to_vec(),
        }
    }
}

/// One row of the game listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub id: GameId,
    pub round: u32,
    pub status: GameStatus,
    pub winner: Winner,
    pub created_at: DateTime<Utc>,
}

impl GameSummary {
    pub fn from_record(record: &GameRecord, game: &Game) -> Self {
        Self {
            id: record.id.clone(),
            round: game.round,
            status: game.status,
            winner: game.winner,
            created_at: record.created_at,
        }
    }
}

/// Response to a submitted round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundReport {
    pub game: GameView,
    pub battle_result: BattleResult,
}

/// Request to create a game. Missing names fall back to the slot defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGame {
    #[serde(default)]
    pub player1_name: Option<String>,
    #[serde(default)]
    pub player2_name: Option<String>,
}

impl NewGame {
    pub fn named(player1: impl Into<String>, player2: impl Into<String>) -> Self {
        Self {
            player1_name: Some(player1.into()),
            player2_name: Some(player2.into()),
        }
    }

    pub fn name(&self, slot: PlayerSlot) -> Option<&str> {
        match slot {
            PlayerSlot::Player1 => self.player1_name.as_deref(),
            PlayerSlot::Player2 => self.player2_name.as_deref(),
        }
    }
}
