//! Combat resolution system.
//!
//! This module provides pure functions for the numeric side of a round.
//! All combat logic is deterministic and side-effect free.
//!
//! # Core Functions
//!
//! - `attack_damage`: Damage an attack stages (normal or charged)
//! - `mitigate_damage`: Halving applied to a defending target
//! - `apply_damage`: HP reduction (clamped to 0)
//! - `apply_energy_change`: Energy delta clamped to `[0, max]`

pub mod damage;
pub mod result;

pub use damage::{apply_damage, apply_energy_change, attack_damage, mitigate_damage};
pub use result::{BattleResult, PlayerOutcome};
