//! Round resolution pipeline.
//!
//! [`resolve_round`] is the authoritative reducer for [`Game`]. A round runs
//! in three steps:
//!
//! 1. `stage` - each action is evaluated against the pre-round snapshot,
//!    then defense halving is applied to the staged damage
//! 2. `validate` - the staged next state is checked against player bounds
//! 3. `commit` - players, last actions, termination and the log are written
//!
//! Nothing is written to the game until staging and validation succeed, so a
//! failed round leaves the game untouched.
//!
//! The engine does not check that the game is still active; callers do that
//! before invoking it. It must not run concurrently on the same game.

mod errors;
mod stage;

pub use errors::{ResourceKind, RoundError, TransitionPhase};

use crate::action::{ActionInput, ActionPair};
use crate::combat::{BattleResult, apply_damage, apply_energy_change, mitigate_damage};
use crate::state::{Game, GameStatus, Player, PlayerSlot, Players, RoundLogEntry, Winner};

use stage::{StagedAction, stage_action};

/// Next state of both players plus the result to report.
struct StagedRound {
    players: Players,
    result: BattleResult,
}

/// Resolves one simultaneous round and returns its battle result.
///
/// The game advances to the next round, or finishes when either player's hp
/// reaches 0 (both at 0 is a tie). A log entry is appended in either case.
pub fn resolve_round(
    game: &mut Game,
    action1: impl Into<ActionInput>,
    action2: impl Into<ActionInput>,
) -> Result<BattleResult, RoundError> {
    let actions = ActionPair::new(action1, action2);
    let staged = stage_round(&game.players, &actions)?;
    Ok(commit_round(game, actions, staged))
}

fn stage_round(players: &Players, actions: &ActionPair) -> Result<StagedRound, RoundError> {
    validate_players(players, TransitionPhase::PreValidate)?;

    let mut staged1 = stage_action(&players.player1, &actions.player1);
    let mut staged2 = stage_action(&players.player2, &actions.player2);

    // Only post-hoc adjustment: damage aimed at a defender is halved.
    staged1.outcome.damage = mitigate_damage(staged1.outcome.damage, staged2.defending);
    staged2.outcome.damage = mitigate_damage(staged2.outcome.damage, staged1.defending);

    let next = Players::new(
        next_player(&players.player1, &staged1, staged2.outcome.damage),
        next_player(&players.player2, &staged2, staged1.outcome.damage),
    );
    validate_players(&next, TransitionPhase::PostValidate)?;

    Ok(StagedRound {
        players: next,
        result: BattleResult {
            player1: staged1.outcome,
            player2: staged2.outcome,
        },
    })
}

fn next_player(current: &Player, own: &StagedAction, incoming_damage: u32) -> Player {
    Player {
        hp: apply_damage(current.hp, incoming_damage),
        energy: apply_energy_change(current.energy, own.outcome.energy_change, current.max_energy),
        charged: own.charged,
        ..current.clone()
    }
}

fn validate_players(players: &Players, phase: TransitionPhase) -> Result<(), RoundError> {
    for slot in PlayerSlot::ALL {
        let player = players.get(slot);

        if player.id != slot {
            return Err(RoundError::SlotMismatch {
                phase,
                slot,
                found: player.id,
            });
        }
        if player.hp > player.max_hp {
            return Err(RoundError::ResourceOutOfBounds {
                phase,
                slot,
                resource: ResourceKind::Hp,
                value: player.hp,
                max: player.max_hp,
            });
        }
        if player.energy > player.max_energy {
            return Err(RoundError::ResourceOutOfBounds {
                phase,
                slot,
                resource: ResourceKind::Energy,
                value: player.energy,
                max: player.max_energy,
            });
        }
    }
    Ok(())
}

fn commit_round(game: &mut Game, actions: ActionPair, staged: StagedRound) -> BattleResult {
    let resolved_round = game.round;

    game.players = staged.players;
    game.last_actions = Some(actions.clone());

    let winner = match (
        game.players.player1.is_defeated(),
        game.players.player2.is_defeated(),
    ) {
        (true, true) => Some(Winner::Tie),
        (true, false) => Some(Winner::from(PlayerSlot::Player2)),
        (false, true) => Some(Winner::from(PlayerSlot::Player1)),
        (false, false) => None,
    };
    match winner {
        Some(winner) => {
            game.status = GameStatus::Finished;
            game.winner = winner;
        }
        None => game.round += 1,
    }

    game.append_log(RoundLogEntry {
        round: resolved_round,
        actions,
        result: staged.result.clone(),
        hp: game.players.hp(),
    });

    staged.result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::Action;
    use crate::combat::PlayerOutcome;
    use crate::config::GameConfig;
    use crate::state::HpSnapshot;

    fn game_with(player1: Player, player2: Player) -> Game {
        Game::with_players("test", Players::new(player1, player2))
    }

    fn p1() -> Player {
        Player::new(PlayerSlot::Player1, "Ada")
    }

    fn p2() -> Player {
        Player::new(PlayerSlot::Player2, "Brom")
    }

    // ========================================================================
    // Reference scenarios
    // ========================================================================

    #[test]
    fn attack_into_defend_on_fresh_game() {
        let mut game = Game::new("g");

        let result = resolve_round(&mut game, Action::Attack, Action::Defend).unwrap();

        assert_eq!(game.players.player1.energy, 2);
        assert_eq!(game.players.player2.energy, 4);
        assert_eq!(game.players.player2.hp, 93);
        assert_eq!(game.players.player1.hp, 100);
        assert_eq!(result.player1.damage, 7);
        assert_eq!(game.round, 2);
        assert_eq!(game.status, GameStatus::Active);
        assert_eq!(game.winner, Winner::None);
    }

    #[test]
    fn last_energy_attack_against_charge() {
        let mut game = game_with(p1().with_energy(1), p2().with_energy(5));

        resolve_round(&mut game, Action::Attack, Action::Charge).unwrap();

        assert_eq!(game.players.player1.energy, 0);
        assert_eq!(game.players.player2.hp, 85);
        assert_eq!(game.players.player2.energy, 3);
        assert!(game.players.player2.charged);
    }

    #[test]
    fn simultaneous_lethal_attacks_tie() {
        let mut game = game_with(p1().with_hp(10), p2().with_hp(15));

        resolve_round(&mut game, Action::Attack, Action::Attack).unwrap();

        assert_eq!(game.players.player1.hp, 0);
        assert_eq!(game.players.player2.hp, 0);
        assert_eq!(game.status, GameStatus::Finished);
        assert_eq!(game.winner, Winner::Tie);
        assert_eq!(game.round, 1);
    }

    // ========================================================================
    // Action rules
    // ========================================================================

    #[test]
    fn charged_attack_deals_bonus_and_clears_charge() {
        let mut game = game_with(p1().with_charged(true), p2());

        let result = resolve_round(&mut game, Action::Attack, Action::Charge).unwrap();

        assert_eq!(result.player1.damage, 25);
        assert_eq!(game.players.player2.hp, 75);
        assert!(!game.players.player1.charged);
        assert!(game.players.player2.charged);
    }

    #[test]
    fn charged_attack_into_defender_is_halved_and_still_consumes_charge() {
        let mut game = game_with(p1().with_charged(true), p2());

        let result = resolve_round(&mut game, Action::Attack, Action::Defend).unwrap();

        assert_eq!(result.player1.damage, 12);
        assert_eq!(game.players.player2.hp, 88);
        assert!(!game.players.player1.charged);
    }

    #[test]
    fn attack_without_energy_changes_nothing_but_is_logged() {
        let mut game = game_with(p1().with_energy(0).with_charged(true), p2());

        let result = resolve_round(&mut game, Action::Attack, Action::Defend).unwrap();

        assert_eq!(result.player1.damage, 0);
        assert_eq!(result.player1.energy_change, 0);
        assert_eq!(game.players.player1.energy, 0);
        assert!(game.players.player1.charged);
        assert_eq!(game.players.player2.hp, 100);
        assert_eq!(
            game.last_actions,
            Some(ActionPair::new(Action::Attack, Action::Defend))
        );
        assert_eq!(game.battle_log().len(), 1);
        assert_eq!(game.round, 2);
    }

    #[test]
    fn charge_without_energy_changes_nothing() {
        let mut game = game_with(p1().with_energy(1), p2());

        let result = resolve_round(&mut game, Action::Charge, Action::Defend).unwrap();

        assert_eq!(game.players.player1.energy, 1);
        assert!(!game.players.player1.charged);
        assert_eq!(result.player1.message, "Ada: not enough energy to charge!");
    }

    #[test]
    fn defend_energy_is_capped() {
        let mut game = game_with(p1().with_energy(GameConfig::MAX_ENERGY), p2());

        resolve_round(&mut game, Action::Defend, Action::Defend).unwrap();

        assert_eq!(game.players.player1.energy, GameConfig::MAX_ENERGY);
        assert_eq!(game.players.player2.energy, 4);
    }

    #[test]
    fn both_defend_deals_no_damage() {
        let mut game = Game::new("g");

        let result = resolve_round(&mut game, Action::Defend, Action::Defend).unwrap();

        assert_eq!(result.player1.damage, 0);
        assert_eq!(result.player2.damage, 0);
        assert_eq!(
            game.players.hp(),
            HpSnapshot {
                player1: 100,
                player2: 100
            }
        );
    }

    #[test]
    fn actions_resolve_against_pre_round_snapshot() {
        // Player 2 charges this round; player 1's attack must not see it, and
        // player 2's new charge must survive player 1's attack.
        let mut game = Game::new("g");

        let result = resolve_round(&mut game, Action::Attack, Action::Charge).unwrap();

        assert_eq!(result.player1.damage, 15);
        assert!(game.players.player2.charged);
        assert_eq!(game.players.player2.energy, 1);
    }

    #[test]
    fn unrecognized_action_is_invalid_but_resolves() {
        let mut game = Game::new("g");

        let result =
            resolve_round(&mut game, ActionInput::parse("fireball"), Action::Attack).unwrap();

        assert_eq!(
            result.player1,
            PlayerOutcome::no_effect("Player 1: invalid action 'fireball'")
        );
        assert_eq!(game.players.player1.hp, 85);
        assert_eq!(game.players.player1.energy, 3);
        assert_eq!(game.round, 2);
    }

    // ========================================================================
    // Termination and log
    // ========================================================================

    #[test]
    fn single_knockout_picks_survivor() {
        let mut game = game_with(p1(), p2().with_hp(15));

        resolve_round(&mut game, Action::Attack, Action::Attack).unwrap();

        assert_eq!(game.status, GameStatus::Finished);
        assert_eq!(game.winner, Winner::Player1);
        assert_eq!(game.players.player1.hp, 85);
        assert_eq!(game.round, 1);

        let mut game = game_with(p1().with_hp(7), p2());
        resolve_round(&mut game, Action::Defend, Action::Attack).unwrap();
        assert_eq!(game.players.player1.hp, 0);
        assert_eq!(game.winner, Winner::Player2);
    }

    #[test]
    fn log_records_round_actions_results_and_hp() {
        let mut game = Game::new("g");

        resolve_round(&mut game, Action::Attack, Action::Defend).unwrap();
        resolve_round(&mut game, Action::Charge, Action::Attack).unwrap();

        let log = game.battle_log();
        assert_eq!(log.len(), 2);
        assert_eq!(log[0].round, 1);
        assert_eq!(log[1].round, 2);
        assert_eq!(log[1].actions, ActionPair::new(Action::Charge, Action::Attack));
        assert_eq!(log[1].result.player2.damage, 15);
        assert_eq!(log[1].hp.player1, 85);
        assert_eq!(log[1].hp.player2, 93);
    }

    #[test]
    fn recent_log_keeps_last_three_while_full_log_grows() {
        let mut game = Game::new("g");

        for _ in 0..5 {
            resolve_round(&mut game, Action::Defend, Action::Defend).unwrap();
        }

        assert_eq!(game.battle_log().len(), 5);
        let recent = game.recent_log(GameConfig::DEFAULT_RECENT_LOG_WINDOW);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].round, 3);
        assert_eq!(recent[2].round, 5);
        assert_eq!(game.round, 6);
    }

    // ========================================================================
    // Atomicity
    // ========================================================================

    #[test]
    fn out_of_bounds_snapshot_fails_without_mutation() {
        let mut game = game_with(p1().with_energy(9), p2());
        let before = game.clone();

        let err = resolve_round(&mut game, Action::Attack, Action::Attack).unwrap_err();

        assert_eq!(err.phase(), TransitionPhase::PreValidate);
        assert!(matches!(
            err,
            RoundError::ResourceOutOfBounds {
                slot: PlayerSlot::Player1,
                resource: ResourceKind::Energy,
                value: 9,
                ..
            }
        ));
        assert_eq!(game, before);
    }

    #[test]
    fn swapped_slots_are_rejected() {
        let mut game = game_with(p2(), p1());
        let before = game.clone();

        let err = resolve_round(&mut game, Action::Defend, Action::Defend).unwrap_err();

        assert!(matches!(err, RoundError::SlotMismatch { .. }));
        assert_eq!(err.to_string(), "pre_validate failed: slot player1 holds player player2");
        assert_eq!(game, before);
    }
}
