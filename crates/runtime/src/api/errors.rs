//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from input validation, the store and round resolution so
//! transports can map them to responses with consistent context.
use duel_core::{GameId, PlayerSlot, RoundError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("game {id} not found")]
    NotFound { id: GameId },

    #[error("game {id} is not active")]
    GameNotActive { id: GameId },

    #[error(transparent)]
    InvalidInput(#[from] InputError),

    #[error("round resolution failed: {0}")]
    Round(#[from] RoundError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl RuntimeError {
    /// Whether the caller can fix the request. Everything else is an internal fault.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            RuntimeError::NotFound { .. }
                | RuntimeError::GameNotActive { .. }
                | RuntimeError::InvalidInput(_)
        )
    }
}

/// Rejected request input. Raised before any game is touched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("missing action for {0}")]
    MissingAction(PlayerSlot),

    #[error("invalid action '{value}' for {slot}: expected attack, defend or charge")]
    UnknownAction { slot: PlayerSlot, value: String },

    #[error("name for {0} must not be blank")]
    BlankName(PlayerSlot),

    #[error("name for {slot} exceeds {max} characters")]
    NameTooLong { slot: PlayerSlot, max: usize },
}
