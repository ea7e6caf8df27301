//! Damage calculation and resource application.

use crate::config::GameConfig;

// ============================================================================
// Damage Calculation
// ============================================================================

/// Damage staged by an attack that had the energy to fire.
///
/// ```text
/// charged   => CHARGED_DAMAGE (25)
/// otherwise => NORMAL_DAMAGE  (15)
/// ```
pub fn attack_damage(charged: bool) -> u32 {
    if charged {
        GameConfig::CHARGED_DAMAGE
    } else {
        GameConfig::NORMAL_DAMAGE
    }
}

/// Reduce staged damage against a target that defended this round.
///
/// Floor division, independent of what the attacker chose.
pub fn mitigate_damage(damage: u32, target_defending: bool) -> u32 {
    if target_defending {
        damage / GameConfig::DEFEND_DIVISOR
    } else {
        damage
    }
}

// ============================================================================
// Resource Application
// ============================================================================

/// Apply damage to current HP.
///
/// # Returns
///
/// New HP value (clamped to 0)
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Apply a signed energy delta, clamped to `[0, max_energy]`.
pub fn apply_energy_change(current: u32, change: i32, max_energy: u32) -> u32 {
    let next = i64::from(current) + i64::from(change);
    next.clamp(0, i64::from(max_energy)) as u32
}
