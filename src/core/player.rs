//! Player representation: zones, per-turn counters and one-shot triggers

use crate::core::effects::{GainTriggerFn, PlayTriggerFn};
use crate::core::{CardId, GameRng, PlayerId};
use crate::zones::{PlayerZones, Zone, ZonePosition};
use std::fmt;

/// Represents a player in the game
#[derive(Clone)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub zones: PlayerZones,

    /// Per-turn counters, reset at cleanup
    pub actions: u32,
    pub buys: u32,
    pub money: u32,

    /// Persist across turns; separate from Victory-card points
    pub victory_tokens: u32,
    /// Turns this player has started
    pub turns: u32,

    /// One-shot triggers, cleared at the end of the turn that installed them
    pub on_gain_triggers: Vec<GainTriggerFn>,
    pub on_play_triggers: Vec<PlayTriggerFn>,
}

impl Player {
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Player {
            id,
            name: name.into(),
            zones: PlayerZones::new(id),
            actions: 1,
            buys: 1,
            money: 0,
            victory_tokens: 0,
            turns: 0,
            on_gain_triggers: Vec::new(),
            on_play_triggers: Vec::new(),
        }
    }

    pub fn hand(&self) -> &[CardId] {
        &self.zones.hand.cards
    }

    pub fn in_play(&self) -> &[CardId] {
        &self.zones.in_play.cards
    }

    /// Shuffle the discard pile and put it under the draw pile
    ///
    /// Returns false when there was nothing to shuffle.
    pub fn reshuffle(&mut self, rng: &mut GameRng) -> bool {
        if self.zones.discard.is_empty() {
            return false;
        }
        let mut cards = self.zones.discard.take_all();
        rng.shuffle(&mut cards);
        // Bottom of the deck is the front of the vec
        cards.append(&mut self.zones.deck.cards);
        self.zones.deck.cards = cards;
        true
    }

    /// Move the top card of the draw pile to hand, reshuffling the discard if the deck is empty
    ///
    /// Returns None when both deck and discard are empty.
    pub fn draw_card(&mut self, rng: &mut GameRng) -> Option<CardId> {
        if self.zones.deck.is_empty() {
            self.reshuffle(rng);
        }
        let card = self.zones.deck.draw_top()?;
        self.zones.hand.add(card);
        Some(card)
    }

    /// Peek at up to `n` cards from the top of the deck, topmost first
    ///
    /// Reshuffles the discard under the deck when the deck alone holds fewer than `n`.
    pub fn top_n_cards(&mut self, n: usize, rng: &mut GameRng) -> Vec<CardId> {
        if self.zones.deck.len() < n {
            self.reshuffle(rng);
        }
        self.zones.deck.top_n(n)
    }

    /// Splice a card out of whichever zone holds it
    ///
    /// Searches hand, deck, in play, discard, set aside, then mats. Returns the zone it
    /// was found in, or None if the player doesn't hold it.
    pub fn remove_card(&mut self, card: CardId) -> Option<Zone> {
        let zone = self.zones.locate(card)?;
        self.zones.get_zone_mut(zone)?.remove(card);
        Some(zone)
    }

    /// Move a card between two known zones
    ///
    /// Returns false, leaving everything untouched, if `from` doesn't hold the card.
    pub fn transfer_card(
        &mut self,
        card: CardId,
        from: Zone,
        to: Zone,
        position: ZonePosition,
    ) -> bool {
        let removed = self
            .zones
            .get_zone_mut(from)
            .map(|zone| zone.remove(card))
            .unwrap_or(false);
        if !removed {
            return false;
        }
        match self.zones.get_zone_mut(to) {
            Some(zone) => {
                zone.insert(card, position);
                true
            }
            None => {
                // Destination isn't a player zone; put the card back
                if let Some(zone) = self.zones.get_zone_mut(from) {
                    zone.add(card);
                }
                false
            }
        }
    }

    /// Union of every zone and mat; each card appears once
    pub fn all_cards(&self) -> Vec<CardId> {
        self.zones.all_cards()
    }

    /// Reset the per-turn counters
    pub fn reset_turn_counters(&mut self) {
        self.actions = 1;
        self.buys = 1;
        self.money = 0;
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("zones", &self.zones)
            .field("actions", &self.actions)
            .field("buys", &self.buys)
            .field("money", &self.money)
            .field("victory_tokens", &self.victory_tokens)
            .field("turns", &self.turns)
            .field("on_gain_triggers", &self.on_gain_triggers.len())
            .field("on_play_triggers", &self.on_play_triggers.len())
            .finish()
    }
}
