//! Authoritative duel state representation.
//!
//! This module owns the data structures that describe players, round
//! bookkeeping and the battle log. Storage layers clone or query this state
//! but mutate it exclusively through the engine.
mod game;
mod player;

pub use game::{Game, GameId, GameStatus, HpSnapshot, Players, RoundLogEntry, Winner};
pub use player::{Player, PlayerSlot, PlayerStatus};
