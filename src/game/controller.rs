//! Player controller trait and game state view
//!
//! This module defines the interface between the game engine and player
//! controllers (AI or human). The engine calls the controller whenever a
//! decision is needed and blocks until it answers; the controller inspects a
//! read-only view of the game state to make its choice. The engine validates
//! every answer, so controllers may be sloppy but never corrupt the game.

use crate::core::{CardDefinition, CardId, GameRng, PlayerId, Supply};
use crate::game::events::GameEvent;
use crate::game::{GameLogger, GameState, TurnPhase};
use std::cell::RefMut;

/// Pick between `min` and `max` cards out of `cards`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardChoice {
    pub prompt: String,
    pub cards: Vec<CardId>,
    pub min: usize,
    pub max: usize,
    /// Card whose effect is asking
    pub source: Option<CardId>,
}

/// Pick one pile out of the piles that passed the effect's filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PileChoice {
    pub prompt: String,
    pub piles: Vec<String>,
    pub source: Option<CardId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanChoice {
    pub prompt: String,
    pub default: bool,
    pub source: Option<CardId>,
}

/// Pick between `min` and `max` of the described options; answer with indices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EffectChoice {
    pub prompt: String,
    pub choices: Vec<String>,
    pub min: usize,
    pub max: usize,
    pub source: Option<CardId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerChoice {
    pub prompt: String,
    pub default: i64,
    pub min: i64,
    pub max: i64,
}

/// Read-only view of game state for controllers
pub struct GameStateView<'a> {
    game: &'a GameState,
    player_id: PlayerId,
}

impl<'a> GameStateView<'a> {
    /// Create a new view of the game state from a player's perspective
    pub fn new(game: &'a GameState, player_id: PlayerId) -> Self {
        GameStateView { game, player_id }
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    /// Full state, for controllers that want more than the helpers below
    pub fn state(&self) -> &'a GameState {
        self.game
    }

    pub fn logger(&self) -> &'a GameLogger {
        &self.game.logger
    }

    /// The game's random source; the only randomness a controller should use
    pub fn rng(&self) -> RefMut<'a, GameRng> {
        self.game.rng()
    }

    pub fn hand(&self) -> &'a [CardId] {
        self.game
            .player(self.player_id)
            .map(|p| p.hand())
            .unwrap_or(&[])
    }

    pub fn in_play(&self) -> &'a [CardId] {
        self.game
            .player(self.player_id)
            .map(|p| p.in_play())
            .unwrap_or(&[])
    }

    pub fn deck_size(&self) -> usize {
        self.game
            .player(self.player_id)
            .map(|p| p.zones.deck.len())
            .unwrap_or(0)
    }

    pub fn actions(&self) -> u32 {
        self.game.player(self.player_id).map(|p| p.actions).unwrap_or(0)
    }

    pub fn buys(&self) -> u32 {
        self.game.player(self.player_id).map(|p| p.buys).unwrap_or(0)
    }

    pub fn money(&self) -> u32 {
        self.game.player(self.player_id).map(|p| p.money).unwrap_or(0)
    }

    /// Number of cards the player owns across all zones and mats
    pub fn owned_card_count(&self) -> usize {
        self.game
            .player(self.player_id)
            .map(|p| p.all_cards().len())
            .unwrap_or(0)
    }

    pub fn victory_points(&self) -> i32 {
        self.game.victory_points(self.player_id).unwrap_or(0)
    }

    pub fn card_name(&self, card_id: CardId) -> String {
        self.game.card_name(card_id)
    }

    pub fn definition(&self, card_id: CardId) -> Option<&'a CardDefinition> {
        self.game.card(card_id).ok().map(|c| c.definition.as_ref())
    }

    /// Current effective cost of a card
    pub fn card_cost(&self, card_id: CardId) -> u32 {
        self.definition(card_id)
            .map(|d| self.game.calculate_cost(d))
            .unwrap_or(0)
    }

    pub fn supply(&self) -> &'a Supply {
        &self.game.supply
    }

    pub fn pile_cost(&self, pile: &str) -> Option<u32> {
        self.game.pile_cost(pile).ok()
    }

    pub fn pile_count(&self, pile: &str) -> usize {
        self.game.supply.count(pile)
    }

    pub fn turn(&self) -> u32 {
        self.game.turn
    }

    pub fn phase(&self) -> TurnPhase {
        self.game.phase
    }

    pub fn is_my_turn(&self) -> bool {
        self.game.active_player_id() == self.player_id
    }

    pub fn events_after(&self, seq: u64) -> &'a [GameEvent] {
        self.game.events_after(seq)
    }
}

/// Player controller trait
///
/// One implementation per kind of decision maker: interactive terminal,
/// scripted test double, random and heuristic AI. Every method is a
/// suspension point; the engine does nothing else until it returns.
pub trait PlayerController {
    /// Get the player ID this controller is responsible for
    fn player_id(&self) -> PlayerId;

    /// Pick an action card from hand to play, or None to end the action phase
    fn choose_action_to_play(
        &mut self,
        view: &GameStateView,
        playable: &[CardId],
    ) -> Option<CardId>;

    /// Pick treasures to play, or None to stop playing treasures
    fn choose_treasures_to_play(
        &mut self,
        view: &GameStateView,
        playable: &[CardId],
    ) -> Option<Vec<CardId>>;

    /// Pick a pile to buy from, or None to end the buy phase
    fn choose_card_to_buy(&mut self, view: &GameStateView, buyable: &[String]) -> Option<String>;

    fn choose_cards_from_list(&mut self, view: &GameStateView, choice: &CardChoice) -> Vec<CardId>;

    fn choose_pile_from_supply(
        &mut self,
        view: &GameStateView,
        choice: &PileChoice,
    ) -> Option<String>;

    fn choose_boolean(&mut self, view: &GameStateView, choice: &BooleanChoice) -> bool;

    /// Indices into `choice.choices`, in the order they should resolve
    fn choose_effects_from_list(&mut self, view: &GameStateView, choice: &EffectChoice)
        -> Vec<usize>;

    fn choose_integer(&mut self, view: &GameStateView, choice: &IntegerChoice) -> i64;

    /// Notification that the game has ended
    fn on_game_end(&mut self, _view: &GameStateView, _won: bool) {}
}
