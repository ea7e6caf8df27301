/// Duel rule constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    /// Number of most recent round log entries exposed in game views.
    /// The full log keeps growing regardless of this window.
    pub recent_log_window: usize,
}

impl GameConfig {
    // ===== rule constants =====
    pub const MAX_HP: u32 = 100;
    pub const MAX_ENERGY: u32 = 5;
    pub const STARTING_ENERGY: u32 = 3;

    pub const NORMAL_DAMAGE: u32 = 15;
    pub const CHARGED_DAMAGE: u32 = 25;
    /// Incoming damage is divided by this (floor) when the target defends.
    pub const DEFEND_DIVISOR: u32 = 2;

    pub const ATTACK_COST: u32 = 1;
    pub const CHARGE_COST: u32 = 2;
    pub const DEFEND_ENERGY_GAIN: u32 = 1;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_RECENT_LOG_WINDOW: usize = 3;

    pub fn new() -> Self {
        Self {
            recent_log_window: Self::DEFAULT_RECENT_LOG_WINDOW,
        }
    }

    /// Window is clamped to at least one entry.
    pub fn with_recent_log_window(recent_log_window: usize) -> Self {
        Self {
            recent_log_window: recent_log_window.max(1),
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
