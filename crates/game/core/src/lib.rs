//! Deterministic duel rules and data types shared by the runtime and server.
//!
//! `duel-core` defines the canonical rules (actions, round resolution, game
//! state) and exposes pure APIs with no storage or I/O concerns. All state
//! mutation flows through [`engine::resolve_round`], and supporting crates
//! depend on the types re-exported here.
pub mod action;
pub mod combat;
pub mod config;
pub mod engine;
pub mod state;

pub use action::{Action, ActionInput, ActionPair};
pub use combat::{BattleResult, PlayerOutcome};
pub use config::GameConfig;
pub use engine::{ResourceKind, RoundError, TransitionPhase, resolve_round};
pub use state::{
    Game, GameId, GameStatus, HpSnapshot, Player, PlayerSlot, PlayerStatus, Players, RoundLogEntry,
    Winner,
};
