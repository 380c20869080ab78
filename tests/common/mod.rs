//! Shared setup for integration tests: catalog games with hand-placed cards
//! and scripted controllers

#![allow(dead_code)]

use dominion_rs::core::{CardId, PlayerId};
use dominion_rs::game::{
    Game, GameState, PlayerController, ScriptedAnswer, ScriptedController, VerbosityLevel,
};
use dominion_rs::loader::{CardRegistry, GameConfig, GameInitializer, KingdomChoice};

/// Cards used to pad a kingdom out to ten piles
const FILLER: &[&str] = &[
    "Village", "Smithy", "Market", "Laboratory", "Festival", "Cellar", "Chapel", "Workshop",
    "Council Room", "Moneylender", "Remodel",
];

pub fn registry() -> CardRegistry {
    CardRegistry::with_catalog().unwrap()
}

/// A ten-card kingdom containing `cards`
pub fn kingdom_with(cards: &[&str]) -> KingdomChoice {
    let mut names: Vec<String> = cards.iter().map(|c| c.to_string()).collect();
    for filler in FILLER {
        if names.len() == 10 {
            break;
        }
        if !names.iter().any(|n| n == filler) {
            names.push(filler.to_string());
        }
    }
    KingdomChoice::Custom(names)
}

/// Silent game state for `players` seats with the given kingdom cards; player 0 goes first
pub fn new_state(
    registry: &CardRegistry,
    kingdom: &[&str],
    players: usize,
    seed: u64,
) -> GameState {
    let names: Vec<String> = (0..players).map(|i| format!("P{i}")).collect();
    let config = GameConfig::new(names)
        .with_kingdom(kingdom_with(kingdom))
        .with_seed(seed)
        .with_verbosity(VerbosityLevel::Silent);
    let mut state = GameInitializer::new(registry).init_game(&config).unwrap();
    state.active_player = 0;
    state
}

/// Wrap a state with one scripted controller per seat
pub fn scripted_game(state: GameState, scripts: Vec<Vec<ScriptedAnswer>>) -> Game {
    let controllers: Vec<Box<dyn PlayerController>> = scripts
        .into_iter()
        .enumerate()
        .map(|(i, answers)| -> Box<dyn PlayerController> {
            Box::new(ScriptedController::new(PlayerId::new(i), answers))
        })
        .collect();
    Game::new(state, controllers).unwrap()
}

/// Game where nobody has anything queued
pub fn passive_game(state: GameState) -> Game {
    let seats = state.players.len();
    scripted_game(state, vec![Vec::new(); seats])
}

/// Replace a player's hand with fresh cards; the old hand goes to the discard pile
pub fn set_hand(
    game: &mut Game,
    registry: &CardRegistry,
    player: usize,
    names: &[&str],
) -> Vec<CardId> {
    let old = game.state.players[player].zones.hand.take_all();
    game.state.players[player].zones.discard.cards.extend(old);
    names
        .iter()
        .map(|name| {
            let id = registry.new_instance(name, &mut game.state.cards).unwrap();
            game.state.players[player].zones.hand.add(id);
            id
        })
        .collect()
}

/// Put fresh cards on top of a player's deck; the first name ends up on top
pub fn stack_deck(
    game: &mut Game,
    registry: &CardRegistry,
    player: usize,
    names: &[&str],
) -> Vec<CardId> {
    names
        .iter()
        .rev()
        .map(|name| {
            let id = registry.new_instance(name, &mut game.state.cards).unwrap();
            game.state.players[player].zones.deck.add(id);
            id
        })
        .collect()
}

/// Names of the cards in a zone, bottom to top
pub fn names(game: &Game, cards: &[CardId]) -> Vec<String> {
    cards.iter().map(|&c| game.state.card_name(c)).collect()
}

pub fn count_named(game: &Game, cards: &[CardId], name: &str) -> usize {
    cards
        .iter()
        .filter(|&&c| game.state.card_name(c) == name)
        .count()
}

/// Play an action the way the action phase does: spend an action, move it, resolve it
pub fn play_action(game: &mut Game, player: usize, card: CardId) {
    let id = PlayerId::new(player);
    game.state.player_mut(id).unwrap().actions -= 1;
    game.play_card(card, id).unwrap();
    game.resolve_card(card, id).unwrap();
}

pub fn pid(i: usize) -> PlayerId {
    PlayerId::new(i)
}
