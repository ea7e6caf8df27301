//! Error types for the round resolution pipeline.

use crate::state::PlayerSlot;

/// Identifies which validation pass produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TransitionPhase {
    /// Checks on the pre-round snapshot, before anything is staged.
    PreValidate,
    /// Checks on the staged next state, before it is committed.
    PostValidate,
}

/// Player resource referenced by a bounds violation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum ResourceKind {
    Hp,
    Energy,
}

/// Errors surfaced while resolving a round.
///
/// Both variants are raised before the game is touched, so a failed round
/// leaves the game exactly as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("{phase} failed: {slot} {resource} {value} exceeds max {max}")]
    ResourceOutOfBounds {
        phase: TransitionPhase,
        slot: PlayerSlot,
        resource: ResourceKind,
        value: u32,
        max: u32,
    },

    #[error("{phase} failed: slot {slot} holds player {found}")]
    SlotMismatch {
        phase: TransitionPhase,
        slot: PlayerSlot,
        found: PlayerSlot,
    },
}

impl RoundError {
    pub fn phase(&self) -> TransitionPhase {
        match self {
            RoundError::ResourceOutOfBounds { phase, .. }
            | RoundError::SlotMismatch { phase, .. } => *phase,
        }
    }
}
