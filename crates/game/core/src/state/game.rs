//! The duel entity: both players, round bookkeeping and the battle log.

use std::fmt;

use crate::action::ActionPair;
use crate::combat::BattleResult;

use super::player::{Player, PlayerSlot};

/// Opaque game identifier, unique for the lifetime of the process.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for GameId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Active,
    Finished,
}

/// Outcome of a finished game. `None` while the game is still active.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Winner {
    #[default]
    None,
    Player1,
    Player2,
    Tie,
}

impl From<PlayerSlot> for Winner {
    fn from(slot: PlayerSlot) -> Self {
        match slot {
            PlayerSlot::Player1 => Winner::Player1,
            PlayerSlot::Player2 => Winner::Player2,
        }
    }
}

/// Both players, keyed by their fixed slot.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Players {
    pub player1: Player,
    pub player2: Player,
}

impl Players {
    pub fn new(player1: Player, player2: Player) -> Self {
        Self { player1, player2 }
    }

    pub fn get(&self, slot: PlayerSlot) -> &Player {
        match slot {
            PlayerSlot::Player1 => &self.player1,
            PlayerSlot::Player2 => &self.player2,
        }
    }

    pub fn hp(&self) -> HpSnapshot {
        HpSnapshot {
            player1: self.player1.hp,
            player2: self.player2.hp,
        }
    }
}

/// Hit points of both players after a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HpSnapshot {
    pub player1: u32,
    pub player2: u32,
}

/// Immutable record of one resolved round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundLogEntry {
    pub round: u32,
    pub actions: ActionPair,
    pub result: BattleResult,
    pub hp: HpSnapshot,
}

/// A duel between two players.
///
/// Created once with both players fresh and mutated in place by
/// [`crate::engine::resolve_round`]. The battle log is append-only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Game {
    pub id: GameId,
    pub players: Players,
    /// Starts at 1; advanced once per resolved round that does not end the game.
    pub round: u32,
    pub status: GameStatus,
    pub winner: Winner,
    /// Actions from the most recent round, including ones that failed.
    pub last_actions: Option<ActionPair>,
    battle_log: Vec<RoundLogEntry>,
}

impl Game {
    /// New active game at round 1 with the default player names.
    pub fn new(id: impl Into<GameId>) -> Self {
        Self::with_names(
            id,
            PlayerSlot::Player1.default_name(),
            PlayerSlot::Player2.default_name(),
        )
    }

    pub fn with_names(
        id: impl Into<GameId>,
        player1_name: impl Into<String>,
        player2_name: impl Into<String>,
    ) -> Self {
        Self::with_players(
            id,
            Players::new(
                Player::new(PlayerSlot::Player1, player1_name),
                Player::new(PlayerSlot::Player2, player2_name),
            ),
        )
    }

    /// New active game from explicit player records (scenario setup).
    pub fn with_players(id: impl Into<GameId>, players: Players) -> Self {
        Self {
            id: id.into(),
            players,
            round: 1,
            status: GameStatus::Active,
            winner: Winner::None,
            last_actions: None,
            battle_log: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == GameStatus::Active
    }

    pub fn player(&self, slot: PlayerSlot) -> &Player {
        self.players.get(slot)
    }

    /// Full battle history, oldest first.
    pub fn battle_log(&self) -> &[RoundLogEntry] {
        &self.battle_log
    }

    /// The last `window` log entries, oldest first.
    pub fn recent_log(&self, window: usize) -> &[RoundLogEntry] {
        let start = self.battle_log.len().saturating_sub(window);
        &self.battle_log[start..]
    }

    pub(crate) fn append_log(&mut self, entry: RoundLogEntry) {
        self.battle_log.push(entry);
    }
}
