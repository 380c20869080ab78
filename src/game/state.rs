//! Main game state structure

use crate::core::effects::CostModifierFn;
use crate::core::{Card, CardDefinition, CardId, EntityStore, GameRng, Player, PlayerId, Supply};
use crate::game::events::{EventKind, EventLog, GameEvent};
use crate::game::{GameLogger, TurnPhase};
use crate::zones::{Zone, ZonePosition};
use crate::{DominionError, Result};
use std::cell::{RefCell, RefMut};
use std::sync::Arc;

/// Everything about a game except the player controllers
///
/// Mutation goes through `Game`, which also owns the controllers; this split lets a
/// controller read the state through a `GameStateView` while the engine waits on it.
#[derive(Clone)]
pub struct GameState {
    /// Every card instance in the game
    pub cards: EntityStore<Card>,

    /// Players in table order
    pub players: Vec<Player>,

    pub supply: Supply,

    /// Shared trash; never reshuffled
    pub trash: Vec<CardId>,

    /// Index of the player whose turn it is
    pub active_player: usize,

    pub phase: TurnPhase,

    /// Game-wide turn number, 0 during setup
    pub turn: u32,

    /// Last event sequence number before the current turn started
    pub turn_start_seq: u64,

    /// Turn-scoped cost modifiers, cleared at cleanup
    pub cost_modifiers: Vec<CostModifierFn>,

    /// Wrapped in RefCell so controllers holding a read-only view can draw AI randomness
    /// from the same seeded stream
    pub rng: RefCell<GameRng>,

    pub events: EventLog,

    pub logger: GameLogger,
}

impl GameState {
    pub fn new(cards: EntityStore<Card>, players: Vec<Player>, supply: Supply, seed: u64) -> Self {
        GameState {
            cards,
            players,
            supply,
            trash: Vec::new(),
            active_player: 0,
            phase: TurnPhase::Action,
            turn: 0,
            turn_start_seq: 0,
            cost_modifiers: Vec::new(),
            rng: RefCell::new(GameRng::new(seed)),
            events: EventLog::new(),
            logger: GameLogger::new(),
        }
    }

    /// Set the RNG seed for deterministic gameplay
    pub fn seed_rng(&mut self, seed: u64) {
        *self.rng.borrow_mut() = GameRng::new(seed);
    }

    pub fn rng(&self) -> RefMut<'_, GameRng> {
        self.rng.borrow_mut()
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.players
            .get(id.index())
            .ok_or(DominionError::PlayerNotFound(id))
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Result<&mut Player> {
        self.players
            .get_mut(id.index())
            .ok_or(DominionError::PlayerNotFound(id))
    }

    pub fn active_player_id(&self) -> PlayerId {
        PlayerId::new(self.active_player)
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.players.len()).map(PlayerId::new)
    }

    /// Every other player, in table order starting to the left of `player`
    pub fn opponents_of(&self, player: PlayerId) -> Vec<PlayerId> {
        let n = self.players.len();
        (1..n)
            .map(|offset| PlayerId::new((player.index() + offset) % n))
            .collect()
    }

    pub fn card(&self, id: CardId) -> Result<&Card> {
        self.cards.get(id)
    }

    pub fn definition(&self, id: CardId) -> Result<Arc<CardDefinition>> {
        Ok(self.cards.get(id)?.definition.clone())
    }

    pub fn card_name(&self, id: CardId) -> String {
        self.cards
            .get(id)
            .map(|c| c.name().to_string())
            .unwrap_or_else(|_| format!("card {id}"))
    }

    /// Append to the event log and mirror it to the logger
    pub fn publish_event(&mut self, player: PlayerId, kind: EventKind) -> u64 {
        let event = self.events.publish(player, self.turn, kind);
        self.logger.event(event);
        event.seq
    }

    pub fn events_after(&self, seq: u64) -> &[GameEvent] {
        self.events.events_after(seq)
    }

    /// Events of the current turn so far
    pub fn events_this_turn(&self) -> &[GameEvent] {
        self.events.events_after(self.turn_start_seq)
    }

    /// Effective cost: base + the card's own modifier + turn modifiers, clamped at 0
    pub fn calculate_cost(&self, definition: &CardDefinition) -> u32 {
        let active = self.active_player_id();
        let own = definition
            .cost_modifier
            .as_ref()
            .map(|f| f(self, active))
            .unwrap_or(0);
        let turn: i32 = self.cost_modifiers.iter().map(|m| m(definition)).sum();
        (definition.cost + own + turn).max(0) as u32
    }

    pub fn pile_cost(&self, pile: &str) -> Result<u32> {
        let pile = self
            .supply
            .pile(pile)
            .ok_or_else(|| DominionError::UnknownPile(pile.to_string()))?;
        Ok(self.calculate_cost(&pile.definition))
    }

    /// Whether `player` may buy from `pile` right now (buys, money, emptiness, card rule)
    pub fn can_buy(&self, player: PlayerId, pile: &str) -> bool {
        let (Ok(p), Some(pile)) = (self.player(player), self.supply.pile(pile)) else {
            return false;
        };
        p.buys > 0
            && !pile.is_empty()
            && self.calculate_cost(&pile.definition) <= p.money
            && pile
                .definition
                .can_buy
                .as_ref()
                .map(|f| f(self, player))
                .unwrap_or(true)
    }

    /// Names of every pile the player could buy now, in supply order
    pub fn buyable_piles(&self, player: PlayerId) -> Vec<String> {
        self.supply
            .piles()
            .iter()
            .filter(|p| self.can_buy(player, &p.name))
            .map(|p| p.name.clone())
            .collect()
    }

    /// Victory points a single card is worth to `player`
    pub fn card_victory_points(&self, definition: &CardDefinition, player: PlayerId) -> i32 {
        match &definition.dynamic_victory_points {
            Some(f) => f(self, player),
            None => definition.victory_points,
        }
    }

    /// Sum of every owned card's points plus victory tokens
    pub fn victory_points(&self, player: PlayerId) -> Result<i32> {
        let p = self.player(player)?;
        let mut total = p.victory_tokens as i32;
        for id in p.all_cards() {
            let card = self.card(id)?;
            total += self.card_victory_points(&card.definition, player);
        }
        Ok(total)
    }

    /// Number of cards of a type in a player's play area
    pub fn count_in_play(&self, player: PlayerId, pred: impl Fn(&CardDefinition) -> bool) -> usize {
        self.player(player)
            .map(|p| {
                p.in_play()
                    .iter()
                    .filter(|&&id| self.card(id).map(|c| pred(&c.definition)).unwrap_or(false))
                    .count()
            })
            .unwrap_or(0)
    }

    /// Draw up to `count` cards, publishing shuffle and draw events
    ///
    /// Drawing from an exhausted deck and discard simply draws fewer cards.
    pub fn draw_cards(&mut self, player: PlayerId, count: u32) -> Result<Vec<CardId>> {
        let mut drawn = Vec::new();
        for _ in 0..count {
            let p = self
                .players
                .get_mut(player.index())
                .ok_or(DominionError::PlayerNotFound(player))?;
            let shuffled = if p.zones.deck.is_empty() {
                p.zones.discard.len()
            } else {
                0
            };
            let card = p.draw_card(&mut self.rng.borrow_mut());
            if shuffled > 0 {
                self.publish_event(player, EventKind::Shuffle { cards: shuffled });
            }
            match card {
                Some(card) => drawn.push(card),
                None => break,
            }
        }
        if !drawn.is_empty() {
            self.publish_event(player, EventKind::DrawCards { count: drawn.len() });
        }
        Ok(drawn)
    }

    /// Peek at the top `n` cards of a player's deck, reshuffling if needed
    pub fn top_n_cards(&mut self, player: PlayerId, n: usize) -> Result<Vec<CardId>> {
        let p = self
            .players
            .get_mut(player.index())
            .ok_or(DominionError::PlayerNotFound(player))?;
        let shuffled = if p.zones.deck.len() < n {
            p.zones.discard.len()
        } else {
            0
        };
        let cards = p.top_n_cards(n, &mut self.rng.borrow_mut());
        if shuffled > 0 {
            self.publish_event(player, EventKind::Shuffle { cards: shuffled });
        }
        Ok(cards)
    }

    /// Move a card the player holds to a zone, searching for where it is now
    ///
    /// Returns the zone it came from, or None (with a warning) if the player doesn't hold it.
    pub fn move_card(
        &mut self,
        card: CardId,
        player: PlayerId,
        to: Zone,
        position: ZonePosition,
    ) -> Result<Option<Zone>> {
        let name = self.card_name(card);
        let p = self.player_mut(player)?;
        let Some(from) = p.zones.locate(card) else {
            self.logger
                .warn(&format!("{player} cannot move {name} {card}: not found in any zone"));
            return Ok(None);
        };
        if !p.transfer_card(card, from, to, position) {
            self.logger
                .warn(&format!("{player} cannot move {name} {card} to {to}"));
            return Ok(None);
        }
        self.publish_event(player, EventKind::MoveCard { card, name, from, to });
        Ok(Some(from))
    }

    /// Province pile empty, or at least three supply piles empty
    pub fn is_game_finished(&self) -> bool {
        let provinces_gone = self
            .supply
            .pile("Province")
            .map(|p| p.is_empty())
            .unwrap_or(false);
        provinces_gone || self.supply.empty_pile_count() >= 3
    }

    /// Players with the most points, ties broken by fewer turns taken
    pub fn calculate_winners(&self) -> Result<Vec<PlayerId>> {
        let mut scores = Vec::with_capacity(self.players.len());
        for p in &self.players {
            scores.push((p.id, self.victory_points(p.id)?, p.turns));
        }
        Ok(determine_winners(&scores))
    }
}

impl std::fmt::Debug for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameState")
            .field("players", &self.players)
            .field("supply", &self.supply)
            .field("trash", &self.trash)
            .field("active_player", &self.active_player)
            .field("phase", &self.phase)
            .field("turn", &self.turn)
            .field("cost_modifiers", &self.cost_modifiers.len())
            .field("events", &self.events.len())
            .finish_non_exhaustive()
    }
}

/// Pick winners from `(player, points, turns)`: highest points, then fewest turns
///
/// Several players win if they are still tied after both criteria.
pub fn determine_winners(scores: &[(PlayerId, i32, u32)]) -> Vec<PlayerId> {
    let Some(best_vp) = scores.iter().map(|&(_, vp, _)| vp).max() else {
        return Vec::new();
    };
    let fewest_turns = scores
        .iter()
        .filter(|&&(_, vp, _)| vp == best_vp)
        .map(|&(_, _, turns)| turns)
        .min()
        .unwrap_or(0);
    scores
        .iter()
        .filter(|&&(_, vp, turns)| vp == best_vp && turns == fewest_turns)
        .map(|&(id, _, _)| id)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determine_winners_breaks_ties_by_turns() {
        let p = PlayerId::new;
        let scores = [(p(0), 6, 10), (p(1), 6, 8), (p(2), 4, 10)];
        assert_eq!(determine_winners(&scores), vec![p(1)]);
    }

    #[test]
    fn test_determine_winners_shared_victory() {
        let p = PlayerId::new;
        let scores = [(p(0), 12, 9), (p(1), 12, 9), (p(2), 4, 3)];
        assert_eq!(determine_winners(&scores), vec![p(0), p(1)]);
        assert!(determine_winners(&[]).is_empty());
    }

    #[test]
    fn test_lower_scorer_never_wins_on_turns() {
        let p = PlayerId::new;
        let scores = [(p(0), 3, 1), (p(1), 4, 30)];
        assert_eq!(determine_winners(&scores), vec![p(1)]);
    }
}
