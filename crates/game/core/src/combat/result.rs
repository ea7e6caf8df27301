//! Battle result types reported for each resolved round.

/// What one player's action did this round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PlayerOutcome {
    /// Damage dealt to the opponent, after the opponent's defense.
    pub damage: u32,
    /// Requested change to this player's own energy, before clamping.
    pub energy_change: i32,
    /// Human-readable description of the action.
    pub message: String,
}

impl PlayerOutcome {
    pub fn new(damage: u32, energy_change: i32, message: impl Into<String>) -> Self {
        Self {
            damage,
            energy_change,
            message: message.into(),
        }
    }

    /// Outcome for an action that changed nothing.
    pub fn no_effect(message: impl Into<String>) -> Self {
        Self::new(0, 0, message)
    }
}

/// Result of a round for both players.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleResult {
    pub player1: PlayerOutcome,
    pub player2: PlayerOutcome,
}
