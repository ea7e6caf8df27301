//! Player identity and per-player resources.

use crate::config::GameConfig;

/// One of the two fixed seats in a duel.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum PlayerSlot {
    Player1,
    Player2,
}

impl PlayerSlot {
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::Player1, PlayerSlot::Player2];

    /// Display name used when a match is created without explicit names.
    pub fn default_name(self) -> &'static str {
        match self {
            PlayerSlot::Player1 => "Player 1",
            PlayerSlot::Player2 => "Player 2",
        }
    }
}

/// Per-player status. Elimination is tracked on the game, not the player.
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
pub enum PlayerStatus {
    #[default]
    Active,
}

/// A duelist and their current resources.
///
/// Invariant: `hp <= max_hp` and `energy <= max_energy`. Only the engine
/// mutates a player, once per resolved round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Player {
    pub id: PlayerSlot,
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub energy: u32,
    pub max_energy: u32,
    /// Set by `charge`, consumed by the next attack that has the energy to fire.
    pub charged: bool,
    pub status: PlayerStatus,
}

impl Player {
    /// Fresh player: full hp, starting energy, not charged.
    pub fn new(id: PlayerSlot, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            hp: GameConfig::MAX_HP,
            max_hp: GameConfig::MAX_HP,
            energy: GameConfig::STARTING_ENERGY,
            max_energy: GameConfig::MAX_ENERGY,
            charged: false,
            status: PlayerStatus::Active,
        }
    }

    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp;
        self
    }

    pub fn with_energy(mut self, energy: u32) -> Self {
        self.energy = energy;
        self
    }

    pub fn with_charged(mut self, charged: bool) -> Self {
        self.charged = charged;
        self
    }

    pub fn is_defeated(&self) -> bool {
        self.hp == 0
    }
}
