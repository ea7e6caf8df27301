//! Runtime configuration shared by the service and its store.

use duel_core::GameConfig;

/// Runtime configuration.
#[derive(Debug, Clone, Default)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
}

impl RuntimeConfig {
    pub fn with_recent_log_window(window: usize) -> Self {
        Self {
            game_config: GameConfig::with_recent_log_window(window),
        }
    }

    pub fn recent_log_window(&self) -> usize {
        self.game_config.recent_log_window
    }
}
