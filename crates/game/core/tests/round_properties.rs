use duel_core::{
    Action, ActionInput, Game, GameConfig, GameStatus, Player, PlayerSlot, Players, Winner,
    resolve_round,
};
use proptest::prelude::*;

fn action() -> impl Strategy<Value = Action> {
    prop::sample::select(Action::ALL.to_vec())
}

fn player(slot: PlayerSlot) -> impl Strategy<Value = Player> {
    (
        1..=GameConfig::MAX_HP,
        0..=GameConfig::MAX_ENERGY,
        any::<bool>(),
    )
        .prop_map(move |(hp, energy, charged)| {
            Player::new(slot, slot.default_name())
                .with_hp(hp)
                .with_energy(energy)
                .with_charged(charged)
        })
}

fn active_game() -> impl Strategy<Value = Game> {
    (player(PlayerSlot::Player1), player(PlayerSlot::Player2))
        .prop_map(|(p1, p2)| Game::with_players("prop", Players::new(p1, p2)))
}

fn expected_damage(attacker: &Player, attack: Action, target_action: Action) -> u32 {
    if attack != Action::Attack || attacker.energy < GameConfig::ATTACK_COST {
        return 0;
    }
    let base = if attacker.charged {
        GameConfig::CHARGED_DAMAGE
    } else {
        GameConfig::NORMAL_DAMAGE
    };
    if target_action == Action::Defend {
        base / 2
    } else {
        base
    }
}

proptest! {
    #[test]
    fn resources_stay_in_bounds(
        game in active_game(),
        rounds in prop::collection::vec((action(), action()), 1..20),
    ) {
        let mut game = game;
        for (a1, a2) in rounds {
            if !game.is_active() {
                break;
            }
            resolve_round(&mut game, a1, a2).unwrap();
            for slot in PlayerSlot::ALL {
                let p = game.player(slot);
                prop_assert!(p.hp <= p.max_hp);
                prop_assert!(p.energy <= p.max_energy);
            }
        }
    }

    #[test]
    fn damage_and_resource_rules_hold(game in active_game(), a1 in action(), a2 in action()) {
        let before = game.clone();
        let mut game = game;

        let result = resolve_round(&mut game, a1, a2).unwrap();

        let (b1, b2) = (&before.players.player1, &before.players.player2);
        let (n1, n2) = (&game.players.player1, &game.players.player2);

        let dmg_to_2 = expected_damage(b1, a1, a2);
        let dmg_to_1 = expected_damage(b2, a2, a1);
        prop_assert_eq!(result.player1.damage, dmg_to_2);
        prop_assert_eq!(result.player2.damage, dmg_to_1);
        prop_assert_eq!(n2.hp, b2.hp.saturating_sub(dmg_to_2));
        prop_assert_eq!(n1.hp, b1.hp.saturating_sub(dmg_to_1));

        for (b, n, a) in [(b1, n1, a1), (b2, n2, a2)] {
            match a {
                Action::Attack if b.energy >= 1 => {
                    prop_assert_eq!(n.energy, b.energy - 1);
                    prop_assert!(!n.charged);
                }
                Action::Charge if b.energy >= 2 => {
                    prop_assert_eq!(n.energy, b.energy - 2);
                    prop_assert!(n.charged);
                }
                Action::Defend => {
                    prop_assert_eq!(n.energy, (b.energy + 1).min(GameConfig::MAX_ENERGY));
                    prop_assert_eq!(n.charged, b.charged);
                }
                _ => {
                    prop_assert_eq!(n.energy, b.energy);
                    prop_assert_eq!(n.charged, b.charged);
                }
            }
        }
    }

    #[test]
    fn termination_and_round_counter(game in active_game(), a1 in action(), a2 in action()) {
        let mut game = game;
        let round_before = game.round;
        let log_before = game.battle_log().len();

        resolve_round(&mut game, a1, a2).unwrap();

        prop_assert_eq!(game.battle_log().len(), log_before + 1);
        let (d1, d2) = (game.players.player1.hp == 0, game.players.player2.hp == 0);
        match (d1, d2) {
            (false, false) => {
                prop_assert_eq!(game.status, GameStatus::Active);
                prop_assert_eq!(game.round, round_before + 1);
                prop_assert_eq!(game.winner, Winner::None);
            }
            (true, true) => {
                prop_assert_eq!(game.status, GameStatus::Finished);
                prop_assert_eq!(game.winner, Winner::Tie);
                prop_assert_eq!(game.round, round_before);
            }
            (true, false) => prop_assert_eq!(game.winner, Winner::Player2),
            (false, true) => prop_assert_eq!(game.winner, Winner::Player1),
        }
    }

    #[test]
    fn unrecognized_input_only_affects_the_opponent_side(
        game in active_game(),
        raw in "[a-z]{1,8}",
        a2 in action(),
    ) {
        prop_assume!(raw.parse::<Action>().is_err());
        let before = game.clone();
        let mut game = game;

        let result = resolve_round(&mut game, ActionInput::parse(&raw), a2).unwrap();

        prop_assert_eq!(result.player1.damage, 0);
        prop_assert_eq!(game.players.player1.energy, before.players.player1.energy);
        prop_assert_eq!(game.players.player1.charged, before.players.player1.charged);
    }
}
