//! Repository layer for live games.
//!
//! The store maps game identifiers to games for the lifetime of the process.
//! It owns no rules: games are mutated by the engine while the caller holds
//! the game's own lock.

mod error;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use memory::InMemoryGameRepo;
pub use traits::{GameRecord, GameRepository, SharedGame};
