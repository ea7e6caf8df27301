//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("game store lock was poisoned")]
    LockPoisoned,

    #[error("game {0} lock was poisoned")]
    GameLockPoisoned(String),
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
