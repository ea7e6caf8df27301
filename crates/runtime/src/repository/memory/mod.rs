//! In-memory repository implementations.

mod game;

pub use game::InMemoryGameRepo;
