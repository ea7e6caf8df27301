//! Runtime services around the duel engine.
//!
//! This crate wires the pure rules in `duel-core` to a process-lifetime game
//! store and exposes the operations an outer transport (HTTP, tests, tools)
//! calls. Consumers construct one [`DuelService`] at startup and share it.
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the service, its views and its error taxonomy
//! - [`repository`] provides the keyed game store and its in-memory backend
//! - [`config`] holds runtime tunables
pub mod api;
pub mod config;
pub mod repository;

pub use api::{
    DuelService, GameSummary, GameView, InputError, NewGame, Result, RoundReport, RuntimeError,
};
pub use config::RuntimeConfig;
pub use repository::{
    GameRecord, GameRepository, InMemoryGameRepo, RepositoryError, SharedGame,
};
