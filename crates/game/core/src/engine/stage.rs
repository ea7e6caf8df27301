//! Per-player action staging.
//!
//! Each action is evaluated against the pre-round snapshot of its own actor
//! only. Nothing here sees the opponent's choice; interactions between the two
//! sides are applied afterwards by the engine.

use crate::action::{Action, ActionInput};
use crate::combat::{PlayerOutcome, attack_damage};
use crate::config::GameConfig;
use crate::state::Player;

/// Effect of one player's action before it is committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct StagedAction {
    pub outcome: PlayerOutcome,
    /// Incoming damage is halved. Lives for this round only.
    pub defending: bool,
    /// The actor's `charged` flag after the round.
    pub charged: bool,
}

impl StagedAction {
    fn unchanged(actor: &Player, outcome: PlayerOutcome) -> Self {
        Self {
            outcome,
            defending: false,
            charged: actor.charged,
        }
    }
}

pub(crate) fn stage_action(actor: &Player, input: &ActionInput) -> StagedAction {
    match input.action() {
        Some(Action::Attack) => stage_attack(actor),
        Some(Action::Defend) => stage_defend(actor),
        Some(Action::Charge) => stage_charge(actor),
        None => StagedAction::unchanged(
            actor,
            PlayerOutcome::no_effect(format!("{}: invalid action '{}'", actor.name, input)),
        ),
    }
}

/// The charge bonus is read first and the flag cleared in the same step, so a
/// charge never outlives the attack that fires it.
fn stage_attack(actor: &Player) -> StagedAction {
    if actor.energy < GameConfig::ATTACK_COST {
        return StagedAction::unchanged(
            actor,
            PlayerOutcome::no_effect(format!("{}: not enough energy!", actor.name)),
        );
    }

    let damage = attack_damage(actor.charged);
    let message = if actor.charged {
        format!("{} unleashes a charged attack!", actor.name)
    } else {
        format!("{} attacks!", actor.name)
    };

    StagedAction {
        outcome: PlayerOutcome::new(damage, -(GameConfig::ATTACK_COST as i32), message),
        defending: false,
        charged: false,
    }
}

fn stage_defend(actor: &Player) -> StagedAction {
    StagedAction {
        outcome: PlayerOutcome::new(
            0,
            GameConfig::DEFEND_ENERGY_GAIN as i32,
            format!("{} defends and recovers energy.", actor.name),
        ),
        defending: true,
        charged: actor.charged,
    }
}

fn stage_charge(actor: &Player) -> StagedAction {
    if actor.energy < GameConfig::CHARGE_COST {
        return StagedAction::unchanged(
            actor,
            PlayerOutcome::no_effect(format!("{}: not enough energy to charge!", actor.name)),
        );
    }

    StagedAction {
        outcome: PlayerOutcome::new(
            0,
            -(GameConfig::CHARGE_COST as i32),
            format!("{} charges up power!", actor.name),
        ),
        defending: false,
        charged: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PlayerSlot;

    fn player(energy: u32, charged: bool) -> Player {
        Player::new(PlayerSlot::Player1, "Ada")
            .with_energy(energy)
            .with_charged(charged)
    }

    #[test]
    fn attack_consumes_charge_and_energy() {
        let staged = stage_action(&player(3, true), &Action::Attack.into());
        assert_eq!(staged.outcome.damage, 25);
        assert_eq!(staged.outcome.energy_change, -1);
        assert!(!staged.charged);
        assert!(!staged.defending);
        assert!(staged.outcome.message.contains("charged"));
    }

    #[test]
    fn attack_without_energy_keeps_charge() {
        let staged = stage_action(&player(0, true), &Action::Attack.into());
        assert_eq!(staged.outcome.damage, 0);
        assert_eq!(staged.outcome.energy_change, 0);
        assert!(staged.charged);
        assert_eq!(staged.outcome.message, "Ada: not enough energy!");
    }

    #[test]
    fn defend_marks_defending_and_keeps_charge() {
        let staged = stage_action(&player(5, true), &Action::Defend.into());
        assert!(staged.defending);
        assert!(staged.charged);
        assert_eq!(staged.outcome.energy_change, 1);
        assert_eq!(staged.outcome.damage, 0);
    }

    #[test]
    fn charge_requires_two_energy() {
        let staged = stage_action(&player(1, false), &Action::Charge.into());
        assert!(!staged.charged);
        assert_eq!(staged.outcome.energy_change, 0);
        assert_eq!(staged.outcome.message, "Ada: not enough energy to charge!");

        let staged = stage_action(&player(2, false), &Action::Charge.into());
        assert!(staged.charged);
        assert_eq!(staged.outcome.energy_change, -2);
    }

    #[test]
    fn unrecognized_input_has_no_effect() {
        let staged = stage_action(&player(3, true), &ActionInput::parse("dance"));
        assert_eq!(staged.outcome, PlayerOutcome::no_effect("Ada: invalid action 'dance'"));
        assert!(staged.charged);
        assert!(!staged.defending);
    }
}
