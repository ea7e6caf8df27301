//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! transports can stay focused on routing and serialization.

pub mod errors;
pub mod service;
pub mod views;

pub use errors::{InputError, Result, RuntimeError};
pub use service::{DuelService, MAX_NAME_LEN};
pub use views::{GameSummary, GameView, NewGame, RoundReport};
