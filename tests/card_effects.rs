//! Card behavior tests: effect ordering, attacks and immunity, reactions,
//! durations, triggers and choice cardinality

mod common;

use common::*;
use dominion_rs::core::{
    CardDefinition, CardId, CardType, Effect, EffectContext, GainDestination, PlayerId, Reaction,
    ReactionBundle,
};
use dominion_rs::game::{
    BooleanChoice, CardChoice, EffectChoice, EventKind, Game, GameStateView, IntegerChoice,
    PileChoice, PlayerController, ScriptedAnswer, TurnPhase,
};
use dominion_rs::zones::Zone;
use dominion_rs::DominionError;

fn revealers(game: &Game) -> Vec<usize> {
    game.state
        .events
        .events()
        .iter()
        .filter(|e| matches!(e.kind, EventKind::RevealCards { .. }))
        .map(|e| e.player.index())
        .collect()
}

#[test]
fn test_effects_observe_earlier_steps() {
    let mut registry = registry();
    registry
        .register(
            CardDefinition::new("Rally", 3)
                .with_types(&[CardType::Action])
                .on_play(Effect::DrawCards(1))
                .on_play(Effect::GainActions(1))
                .on_play(Effect::custom(
                    "bonus if actions left",
                    |game: &mut Game, ctx: &EffectContext| {
                        let p = game.state.player_mut(ctx.player)?;
                        if p.actions >= 1 {
                            p.money += 3;
                        }
                        Ok(())
                    },
                )),
        )
        .unwrap();
    let mut game = passive_game(new_state(&registry, &[], 2, 1));
    let hand = set_hand(&mut game, &registry, 0, &["Rally"]);

    play_action(&mut game, 0, hand[0]);

    let p = game.state.player(pid(0)).unwrap();
    // The bonus sees the +1 Action that resolved before it
    assert_eq!(p.actions, 1);
    assert_eq!(p.money, 3);
    assert_eq!(p.hand().len(), 1);
}

#[test]
fn test_moat_in_hand_is_revealed_and_blocks() {
    let registry = registry();
    let mut game = passive_game(new_state(&registry, &["Militia", "Moat"], 2, 2));
    let militia = set_hand(&mut game, &registry, 0, &["Militia"]);
    set_hand(&mut game, &registry, 1, &["Moat", "Copper", "Copper", "Copper", "Copper"]);

    play_action(&mut game, 0, militia[0]);

    assert_eq!(game.state.player(pid(1)).unwrap().hand().len(), 5);
    assert_eq!(game.state.player(pid(0)).unwrap().money, 2);
    assert_eq!(revealers(&game), vec![1]);
    assert!(game.state.events.events().iter().any(|e| {
        e.player == pid(1)
            && matches!(&e.kind, EventKind::AttackBlocked { attack } if attack == "Militia")
    }));
}

#[test]
fn test_militia_discards_chosen_cards() {
    let registry = registry();
    let state = new_state(&registry, &["Militia"], 2, 3);
    let mut game = scripted_game(
        state,
        vec![vec![], vec![ScriptedAnswer::Cards(vec!["Estate".into(), "Estate".into()])]],
    );
    let militia = set_hand(&mut game, &registry, 0, &["Militia"]);
    let hand = set_hand(
        &mut game,
        &registry,
        1,
        &["Copper", "Estate", "Copper", "Estate", "Copper"],
    );

    play_action(&mut game, 0, militia[0]);

    let p1 = game.state.player(pid(1)).unwrap();
    assert_eq!(p1.hand(), &[hand[0], hand[2], hand[4]]);
    assert!(p1.zones.discard.contains(hand[1]));
    assert!(p1.zones.discard.contains(hand[3]));
}

#[test]
fn test_oversized_answer_is_cut_to_max() {
    let registry = registry();
    let state = new_state(&registry, &["Militia"], 2, 4);
    let answer = ScriptedAnswer::Cards(vec!["Copper".into(); 4]);
    let mut game = scripted_game(state, vec![vec![], vec![answer]]);
    let militia = set_hand(&mut game, &registry, 0, &["Militia"]);
    let hand = set_hand(
        &mut game,
        &registry,
        1,
        &["Copper", "Copper", "Copper", "Copper", "Estate"],
    );

    play_action(&mut game, 0, militia[0]);

    let p1 = game.state.player(pid(1)).unwrap();
    assert_eq!(p1.hand(), &[hand[2], hand[3], hand[4]]);
}

/// Never gives a usable answer to a card prompt
struct Stubborn(usize);

impl PlayerController for Stubborn {
    fn player_id(&self) -> PlayerId {
        pid(self.0)
    }
    fn choose_action_to_play(&mut self, _: &GameStateView, _: &[CardId]) -> Option<CardId> {
        None
    }
    fn choose_treasures_to_play(&mut self, _: &GameStateView, _: &[CardId]) -> Option<Vec<CardId>> {
        None
    }
    fn choose_card_to_buy(&mut self, _: &GameStateView, _: &[String]) -> Option<String> {
        None
    }
    fn choose_cards_from_list(&mut self, _: &GameStateView, _: &CardChoice) -> Vec<CardId> {
        Vec::new()
    }
    fn choose_pile_from_supply(&mut self, _: &GameStateView, _: &PileChoice) -> Option<String> {
        None
    }
    fn choose_boolean(&mut self, _: &GameStateView, choice: &BooleanChoice) -> bool {
        choice.default
    }
    fn choose_effects_from_list(&mut self, _: &GameStateView, _: &EffectChoice) -> Vec<usize> {
        Vec::new()
    }
    fn choose_integer(&mut self, _: &GameStateView, choice: &IntegerChoice) -> i64 {
        choice.max + 100
    }
}

#[test]
fn test_too_few_cards_forever_fails_the_game() {
    let registry = registry();
    let state = new_state(&registry, &["Militia"], 2, 5);
    let controllers: Vec<Box<dyn PlayerController>> =
        vec![Box::new(Stubborn(0)), Box::new(Stubborn(1))];
    let mut game = Game::new(state, controllers).unwrap();
    let militia = set_hand(&mut game, &registry, 0, &["Militia"]);

    game.play_card(militia[0], pid(0)).unwrap();
    let result = game.resolve_card(militia[0], pid(0));
    assert!(matches!(result, Err(DominionError::InvalidChoice(_))));
}

#[test]
fn test_integer_answers_are_clamped() {
    let registry = registry();
    let state = new_state(&registry, &[], 2, 5);
    let controllers: Vec<Box<dyn PlayerController>> =
        vec![Box::new(Stubborn(0)), Box::new(Stubborn(1))];
    let mut game = Game::new(state, controllers).unwrap();
    let n = game
        .choose_integer(
            pid(0),
            IntegerChoice {
                prompt: "How many?".into(),
                default: 1,
                min: 0,
                max: 4,
            },
        )
        .unwrap();
    assert_eq!(n, 4);
}

#[test]
fn test_lighthouse_protects_silently_until_next_turn() {
    let registry = registry();
    let mut game = passive_game(new_state(&registry, &["Lighthouse", "Witch"], 2, 6));
    let witch = set_hand(&mut game, &registry, 0, &["Witch"]);
    let lighthouse = set_hand(&mut game, &registry, 1, &["Lighthouse"]);

    play_action(&mut game, 1, lighthouse[0]);
    assert!(game.state.player(pid(1)).unwrap().zones.set_aside.contains(lighthouse[0]));

    play_action(&mut game, 0, witch[0]);
    assert_eq!(game.state.supply.count("Curse"), 10);
    assert!(revealers(&game).is_empty());
    assert!(!game
        .state
        .events
        .events()
        .iter()
        .any(|e| matches!(e.kind, EventKind::AttackBlocked { .. })));

    game.state.active_player = 1;
    let money_before = game.state.player(pid(1)).unwrap().money;
    game.start_turn().unwrap();
    let p1 = game.state.player(pid(1)).unwrap();
    assert_eq!(p1.money, money_before + 1);
    assert!(p1.in_play().contains(&lighthouse[0]));
    assert!(game.state.card(lighthouse[0]).unwrap().should_clean_up());
}

#[test]
fn test_lighthouse_in_hand_does_not_block() {
    let registry = registry();
    let mut game = passive_game(new_state(&registry, &["Lighthouse", "Militia"], 2, 6));
    let militia = set_hand(&mut game, &registry, 0, &["Militia"]);
    set_hand(
        &mut game,
        &registry,
        1,
        &["Lighthouse", "Copper", "Copper", "Copper", "Copper"],
    );

    play_action(&mut game, 0, militia[0]);

    assert_eq!(game.state.player(pid(1)).unwrap().hand().len(), 3);
    assert!(revealers(&game).is_empty());
    assert!(!game
        .state
        .events
        .events()
        .iter()
        .any(|e| matches!(e.kind, EventKind::AttackBlocked { .. })));
}

#[test]
fn test_attack_visits_opponents_left_of_attacker() {
    let registry = registry();
    let mut game = passive_game(new_state(&registry, &["Witch"], 3, 7));
    while game.state.supply.count("Curse") > 1 {
        game.state.supply.pile_mut("Curse").unwrap().pop();
    }
    let witch = set_hand(&mut game, &registry, 1, &["Witch"]);

    play_action(&mut game, 1, witch[0]);

    let curses = |game: &Game, p: usize| {
        count_named(game, &game.state.player(pid(p)).unwrap().zones.discard.cards, "Curse")
    };
    assert_eq!(curses(&game, 2), 1);
    // The pile ran out before reaching player 0; that gain is skipped, not an error
    assert_eq!(curses(&game, 0), 0);
    assert_eq!(game.state.supply.count("Curse"), 0);
}

#[test]
fn test_caravan_stays_in_play_and_draws_next_turn() {
    let registry = registry();
    let mut game = passive_game(new_state(&registry, &["Caravan"], 2, 8));
    let caravan = set_hand(&mut game, &registry, 0, &["Caravan"]);
    play_action(&mut game, 0, caravan[0]);

    game.clean_up().unwrap();
    assert!(game.state.player(pid(0)).unwrap().in_play().contains(&caravan[0]));

    game.start_turn().unwrap();
    game.clean_up().unwrap();

    game.start_turn().unwrap();
    let p0 = game.state.player(pid(0)).unwrap();
    assert_eq!(p0.hand().len(), 6);

    game.clean_up().unwrap();
    let p0 = game.state.player(pid(0)).unwrap();
    assert!(p0.in_play().is_empty());
    assert_ne!(p0.zones.locate(caravan[0]), None);
}

#[test]
fn test_fishing_village_next_turn_bonus() {
    let registry = registry();
    let mut game = passive_game(new_state(&registry, &["Fishing Village"], 2, 9));
    let fv = set_hand(&mut game, &registry, 0, &["Fishing Village"]);
    play_action(&mut game, 0, fv[0]);
    let p0 = game.state.player(pid(0)).unwrap();
    assert_eq!((p0.actions, p0.money), (2, 1));

    game.clean_up().unwrap();
    game.start_turn().unwrap();
    game.clean_up().unwrap();
    game.start_turn().unwrap();

    let p0 = game.state.player(pid(0)).unwrap();
    assert_eq!((p0.actions, p0.money), (2, 1));
}

#[test]
fn test_merchant_first_silver_bonus_once() {
    let registry = registry();
    let mut game = passive_game(new_state(&registry, &["Merchant"], 2, 10));
    let hand = set_hand(&mut game, &registry, 0, &["Merchant", "Silver", "Silver"]);
    stack_deck(&mut game, &registry, 0, &["Estate"]);

    play_action(&mut game, 0, hand[0]);
    game.play_card(hand[1], pid(0)).unwrap();
    game.play_card(hand[2], pid(0)).unwrap();

    let p0 = game.state.player(pid(0)).unwrap();
    assert_eq!(p0.money, 5);
    assert!(p0.on_play_triggers.is_empty());
}

#[test]
fn test_throne_room_plays_smithy_twice() {
    let registry = registry();
    let state = new_state(&registry, &["Throne Room"], 2, 11);
    let mut game = scripted_game(state, vec![vec![ScriptedAnswer::Card("Smithy".into())], vec![]]);
    let hand = set_hand(&mut game, &registry, 0, &["Throne Room", "Smithy"]);

    play_action(&mut game, 0, hand[0]);

    let p0 = game.state.player(pid(0)).unwrap();
    assert_eq!(p0.hand().len(), 6);
    assert_eq!(p0.in_play(), &[hand[0], hand[1]]);
    assert_eq!(p0.actions, 0);
}

#[test]
fn test_watchtower_trashes_gained_curse() {
    let registry = registry();
    let state = new_state(&registry, &["Watchtower"], 2, 12);
    let mut game = scripted_game(state, vec![vec![ScriptedAnswer::Bool(true)], vec![]]);
    let watchtower = set_hand(&mut game, &registry, 0, &["Watchtower"]);

    let curse = game
        .gain_card("Curse", pid(0), false, GainDestination::Discard)
        .unwrap();

    assert!(game.state.trash.contains(&curse));
    assert_eq!(revealers(&game), vec![0]);
    assert!(game.state.player(pid(0)).unwrap().hand().contains(&watchtower[0]));
}

#[test]
fn test_watchtower_can_topdeck_instead() {
    let registry = registry();
    let state = new_state(&registry, &["Watchtower"], 2, 12);
    let mut game = scripted_game(
        state,
        vec![vec![ScriptedAnswer::Bool(false), ScriptedAnswer::Bool(true)], vec![]],
    );
    set_hand(&mut game, &registry, 0, &["Watchtower"]);

    let silver = game
        .gain_card("Silver", pid(0), false, GainDestination::Discard)
        .unwrap();

    assert_eq!(game.state.player(pid(0)).unwrap().zones.deck.peek_top(), Some(silver));
}

#[test]
fn test_tunnel_discarded_to_militia_gains_gold() {
    let registry = registry();
    let state = new_state(&registry, &["Militia", "Tunnel"], 2, 13);
    let mut game = scripted_game(
        state,
        vec![
            vec![],
            vec![
                ScriptedAnswer::Cards(vec!["Tunnel".into(), "Copper".into()]),
                ScriptedAnswer::Bool(true),
            ],
        ],
    );
    let militia = set_hand(&mut game, &registry, 0, &["Militia"]);
    set_hand(&mut game, &registry, 1, &["Tunnel", "Copper", "Copper", "Copper", "Copper"]);

    play_action(&mut game, 0, militia[0]);

    let discard = &game.state.player(pid(1)).unwrap().zones.discard.cards;
    assert_eq!(count_named(&game, discard, "Gold"), 1);
    assert_eq!(game.state.supply.count("Gold"), 29);
}

#[test]
fn test_tunnel_ignores_cleanup_discards() {
    let registry = registry();
    let state = new_state(&registry, &["Tunnel"], 2, 14);
    let mut game = scripted_game(state, vec![vec![ScriptedAnswer::Bool(true)], vec![]]);
    let tunnel = set_hand(&mut game, &registry, 0, &["Tunnel"]);

    game.state.phase = TurnPhase::CleanUp;
    game.discard_card(tunnel[0], pid(0)).unwrap();

    assert_eq!(game.state.supply.count("Gold"), 30);
}

#[test]
fn test_royal_seal_topdecks_gains() {
    let registry = registry();
    let state = new_state(&registry, &["Royal Seal"], 2, 15);
    let mut game = scripted_game(state, vec![vec![ScriptedAnswer::Bool(true)], vec![]]);
    let seal = set_hand(&mut game, &registry, 0, &["Royal Seal"]);

    game.play_card(seal[0], pid(0)).unwrap();
    game.resolve_card(seal[0], pid(0)).unwrap();
    assert_eq!(game.state.player(pid(0)).unwrap().money, 2);

    let silver = game
        .gain_card("Silver", pid(0), false, GainDestination::Discard)
        .unwrap();
    assert_eq!(game.state.player(pid(0)).unwrap().zones.deck.peek_top(), Some(silver));

    game.clean_up().unwrap();
    assert!(game.state.player(pid(0)).unwrap().on_gain_triggers.is_empty());
}

#[test]
fn test_border_village_gains_cheaper_card() {
    let registry = registry();
    let state = new_state(&registry, &["Border Village"], 2, 16);
    let mut game = scripted_game(state, vec![vec![ScriptedAnswer::Pile("Silver".into())], vec![]]);

    game.gain_card("Border Village", pid(0), false, GainDestination::Discard)
        .unwrap();

    let discard = &game.state.player(pid(0)).unwrap().zones.discard.cards;
    assert_eq!(count_named(&game, discard, "Silver"), 1);
    assert_eq!(count_named(&game, discard, "Border Village"), 1);
}

#[test]
fn test_fortress_returns_to_hand_when_trashed() {
    let registry = registry();
    let state = new_state(&registry, &["Chapel", "Fortress"], 2, 17);
    let mut game = scripted_game(
        state,
        vec![vec![ScriptedAnswer::Cards(vec!["Fortress".into(), "Copper".into()])], vec![]],
    );
    let hand = set_hand(&mut game, &registry, 0, &["Chapel", "Fortress", "Copper"]);

    play_action(&mut game, 0, hand[0]);

    assert_eq!(game.state.player(pid(0)).unwrap().hand(), &[hand[1]]);
    assert_eq!(game.state.trash, vec![hand[2]]);
}

#[test]
fn test_conspirator_counts_actions_in_play() {
    let registry = registry();
    let mut game = passive_game(new_state(&registry, &["Conspirator"], 2, 18));
    let hand = set_hand(&mut game, &registry, 0, &["Village", "Village", "Conspirator"]);

    play_action(&mut game, 0, hand[0]);
    play_action(&mut game, 0, hand[1]);
    play_action(&mut game, 0, hand[2]);

    let p0 = game.state.player(pid(0)).unwrap();
    assert_eq!(p0.actions, 3);
    assert_eq!(p0.money, 2);
}

#[test]
fn test_conspirator_alone_gives_no_bonus() {
    let registry = registry();
    let mut game = passive_game(new_state(&registry, &["Conspirator"], 2, 18));
    let hand = set_hand(&mut game, &registry, 0, &["Conspirator"]);
    play_action(&mut game, 0, hand[0]);
    let p0 = game.state.player(pid(0)).unwrap();
    assert_eq!((p0.actions, p0.money, p0.hand().len()), (0, 2, 0));
}

#[test]
fn test_peddler_cheaper_in_buy_phase() {
    let registry = registry();
    let mut game = passive_game(new_state(&registry, &["Peddler"], 2, 19));
    let hand = set_hand(&mut game, &registry, 0, &["Village", "Village"]);
    play_action(&mut game, 0, hand[0]);
    play_action(&mut game, 0, hand[1]);

    assert_eq!(game.state.pile_cost("Peddler").unwrap(), 8);
    game.state.phase = TurnPhase::Buy;
    assert_eq!(game.state.pile_cost("Peddler").unwrap(), 4);
}

#[test]
fn test_grand_market_blocked_by_copper_in_play() {
    let registry = registry();
    let mut game = passive_game(new_state(&registry, &["Grand Market"], 2, 20));
    let hand = set_hand(&mut game, &registry, 0, &["Gold", "Gold", "Copper"]);
    game.play_card(hand[0], pid(0)).unwrap();
    game.play_card(hand[1], pid(0)).unwrap();
    assert!(game.state.can_buy(pid(0), "Grand Market"));

    game.play_card(hand[2], pid(0)).unwrap();
    assert!(!game.state.can_buy(pid(0), "Grand Market"));
}

#[test]
fn test_treasury_returns_unless_victory_bought() {
    let registry = registry();
    let mut game = passive_game(new_state(&registry, &["Treasury"], 2, 21));
    let treasury = set_hand(&mut game, &registry, 0, &["Treasury"]);
    stack_deck(&mut game, &registry, 0, &["Copper"; 10]);
    play_action(&mut game, 0, treasury[0]);

    game.clean_up().unwrap();
    assert!(game.state.player(pid(0)).unwrap().hand().contains(&treasury[0]));

    let mut game = passive_game(new_state(&registry, &["Treasury"], 2, 21));
    let treasury = set_hand(&mut game, &registry, 0, &["Treasury"]);
    stack_deck(&mut game, &registry, 0, &["Copper"; 10]);
    play_action(&mut game, 0, treasury[0]);
    game.state.player_mut(pid(0)).unwrap().money = 2;
    game.buy_card("Estate", pid(0)).unwrap();

    game.clean_up().unwrap();
    assert!(game.state.player(pid(0)).unwrap().zones.discard.contains(treasury[0]));
}

#[test]
fn test_native_village_mat_round_trip() {
    let registry = registry();
    let state = new_state(&registry, &["Native Village"], 2, 22);
    let mut game = scripted_game(
        state,
        vec![vec![ScriptedAnswer::Effects(vec![0]), ScriptedAnswer::Effects(vec![1])], vec![]],
    );
    let hand = set_hand(&mut game, &registry, 0, &["Native Village", "Native Village"]);
    let gold = stack_deck(&mut game, &registry, 0, &["Gold"]);

    play_action(&mut game, 0, hand[0]);
    assert_eq!(game.state.player(pid(0)).unwrap().zones.mat("Native Village"), &gold[..]);

    play_action(&mut game, 0, hand[1]);
    let p0 = game.state.player(pid(0)).unwrap();
    assert!(p0.zones.mat("Native Village").is_empty());
    assert!(p0.hand().contains(&gold[0]));
}

#[test]
fn test_island_sets_itself_and_a_card_aside() {
    let registry = registry();
    let state = new_state(&registry, &["Island"], 2, 23);
    let mut game = scripted_game(state, vec![vec![ScriptedAnswer::Card("Estate".into())], vec![]]);
    let hand = set_hand(&mut game, &registry, 0, &["Island", "Estate"]);
    let before = game.state.victory_points(pid(0)).unwrap();

    play_action(&mut game, 0, hand[0]);

    let p0 = game.state.player(pid(0)).unwrap();
    assert_eq!(p0.zones.mat("Island"), &[hand[0], hand[1]]);
    assert_eq!(game.state.victory_points(pid(0)).unwrap(), before);
}

#[test]
fn test_pawn_runs_chosen_options_in_order() {
    let registry = registry();
    let state = new_state(&registry, &["Pawn"], 2, 24);
    let mut game = scripted_game(state, vec![vec![ScriptedAnswer::Effects(vec![3, 2])], vec![]]);
    let pawn = set_hand(&mut game, &registry, 0, &["Pawn"]);

    play_action(&mut game, 0, pawn[0]);

    let p0 = game.state.player(pid(0)).unwrap();
    assert_eq!((p0.actions, p0.buys, p0.money), (0, 2, 1));
}

#[test]
fn test_cellar_redraws_discarded_count() {
    let registry = registry();
    let state = new_state(&registry, &["Cellar"], 2, 25);
    let mut game = scripted_game(
        state,
        vec![vec![ScriptedAnswer::Cards(vec!["Estate".into(), "Estate".into()])], vec![]],
    );
    let hand = set_hand(&mut game, &registry, 0, &["Cellar", "Estate", "Estate", "Copper"]);
    stack_deck(&mut game, &registry, 0, &["Silver", "Silver"]);

    play_action(&mut game, 0, hand[0]);

    let p0 = game.state.player(pid(0)).unwrap();
    assert_eq!(names(&game, p0.hand()), vec!["Copper", "Silver", "Silver"]);
    assert_eq!(p0.actions, 1);
}

#[test]
fn test_remodel_trashes_and_gains_up_to_two_more() {
    let registry = registry();
    let state = new_state(&registry, &["Remodel"], 2, 26);
    let mut game = scripted_game(
        state,
        vec![
            vec![
                ScriptedAnswer::Card("Estate".into()),
                ScriptedAnswer::Pile("Silver".into()),
            ],
            vec![],
        ],
    );
    let hand = set_hand(&mut game, &registry, 0, &["Remodel", "Estate"]);

    play_action(&mut game, 0, hand[0]);

    assert_eq!(game.state.trash, vec![hand[1]]);
    let discard = &game.state.player(pid(0)).unwrap().zones.discard.cards;
    assert_eq!(count_named(&game, discard, "Silver"), 1);
}

#[test]
fn test_feast_trashes_itself() {
    let registry = registry();
    let state = new_state(&registry, &["Feast"], 2, 27);
    let script = vec![vec![ScriptedAnswer::Pile("Laboratory".into())], vec![]];
    let mut game = scripted_game(state, script);
    let feast = set_hand(&mut game, &registry, 0, &["Feast"]);

    play_action(&mut game, 0, feast[0]);

    assert_eq!(game.state.trash, vec![feast[0]]);
    assert_eq!(game.state.supply.count("Laboratory"), 9);
}

#[test]
fn test_moneylender_trashes_copper() {
    let registry = registry();
    let state = new_state(&registry, &["Moneylender"], 2, 28);
    let mut game = scripted_game(state, vec![vec![ScriptedAnswer::Bool(true)], vec![]]);
    let hand = set_hand(&mut game, &registry, 0, &["Moneylender", "Copper"]);

    play_action(&mut game, 0, hand[0]);

    assert_eq!(game.state.trash, vec![hand[1]]);
    assert_eq!(game.state.player(pid(0)).unwrap().money, 3);
}

#[test]
fn test_bureaucrat_topdecks_victory_cards() {
    let registry = registry();
    let mut game = passive_game(new_state(&registry, &["Bureaucrat"], 2, 29));
    let bureaucrat = set_hand(&mut game, &registry, 0, &["Bureaucrat"]);
    let victim = set_hand(&mut game, &registry, 1, &["Copper", "Estate", "Copper"]);

    play_action(&mut game, 0, bureaucrat[0]);

    let top0 = game.state.player(pid(0)).unwrap().zones.deck.peek_top().unwrap();
    assert_eq!(game.state.card_name(top0), "Silver");
    let p1 = game.state.player(pid(1)).unwrap();
    assert_eq!(p1.zones.deck.peek_top(), Some(victim[1]));
    assert_eq!(p1.hand().len(), 2);
}

#[test]
fn test_council_room_opponents_draw() {
    let registry = registry();
    let mut game = passive_game(new_state(&registry, &["Council Room"], 3, 30));
    let cr = set_hand(&mut game, &registry, 0, &["Council Room"]);

    play_action(&mut game, 0, cr[0]);

    assert_eq!(game.state.player(pid(0)).unwrap().hand().len(), 4);
    assert_eq!(game.state.player(pid(0)).unwrap().buys, 2);
    assert_eq!(game.state.player(pid(1)).unwrap().hand().len(), 6);
    assert_eq!(game.state.player(pid(2)).unwrap().hand().len(), 6);
}

#[test]
fn test_gardens_counts_owned_cards() {
    let registry = registry();
    let mut game = passive_game(new_state(&registry, &["Gardens"], 2, 31));
    set_hand(&mut game, &registry, 0, &["Gardens"]);
    // 10 starting cards + Gardens; 7 Coppers + 3 Estates stays 3 VP + 1 from Gardens
    assert_eq!(game.state.player(pid(0)).unwrap().all_cards().len(), 11);
    assert_eq!(game.state.victory_points(pid(0)).unwrap(), 4);
}

/// Reaction card that reveals itself, then discards every copy in its owner's hand
fn bell() -> CardDefinition {
    CardDefinition::new("Bell", 2)
        .with_types(&[CardType::Action, CardType::Reaction])
        .reactions(ReactionBundle {
            on_gain: Some(Reaction::new(Zone::Hand, |game, rctx| {
                game.reveal_cards(&[rctx.card], rctx.owner);
                let bells: Vec<_> = game
                    .state
                    .player(rctx.owner)?
                    .hand()
                    .iter()
                    .copied()
                    .filter(|&c| game.state.card_name(c) == "Bell")
                    .collect();
                for bell in bells {
                    game.discard_card(bell, rctx.owner)?;
                }
                Ok(())
            })),
            ..Default::default()
        })
}

#[test]
fn test_reactions_fire_in_table_order_and_skip_moved_cards() {
    let mut registry = registry();
    registry.register(bell()).unwrap();
    let mut game = passive_game(new_state(&registry, &[], 2, 32));
    set_hand(&mut game, &registry, 0, &["Bell", "Bell"]);
    set_hand(&mut game, &registry, 1, &["Bell"]);

    game.gain_card("Silver", pid(1), false, GainDestination::Discard)
        .unwrap();

    // Player 0 first even though player 1 gained; the second Bell left the hand
    assert_eq!(revealers(&game), vec![0, 1]);
}
