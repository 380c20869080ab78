//! Zone-transition primitives that card effects and the turn loop call
//!
//! Each primitive publishes an event and then fires whatever hooks, triggers and
//! reactions the move provokes, in that order, before returning.

use crate::core::{
    CardId, EffectContext, GainDestination, GainInfo, PlayerId, ReactionTrigger,
};
use crate::game::events::EventKind;
use crate::game::{Game, TurnPhase};
use crate::zones::{Zone, ZonePosition};
use crate::{DominionError, Result};

/// Cards in a fresh hand
pub const HAND_SIZE: u32 = 5;

impl Game {
    /// Move a card to the play area and add its worth if it is a treasure
    ///
    /// Does not resolve the card's effects; see `resolve_card`.
    pub fn play_card(&mut self, card: CardId, player: PlayerId) -> Result<()> {
        let def = self.state.definition(card)?;
        let p = self.state.player_mut(player)?;
        if p.remove_card(card).is_none() {
            self.state
                .logger
                .warn(&format!("{player} cannot play {}: not held", def.name));
            return Ok(());
        }
        p.zones.in_play.add(card);
        if def.is_treasure() {
            p.money += def.worth;
        }
        self.state.publish_event(
            player,
            EventKind::PlayCard {
                card,
                name: def.name.clone(),
            },
        );
        self.fire_play_triggers(player, card)
    }

    fn fire_play_triggers(&mut self, player: PlayerId, card: CardId) -> Result<()> {
        let triggers = std::mem::take(&mut self.state.player_mut(player)?.on_play_triggers);
        let mut kept = Vec::with_capacity(triggers.len());
        for trigger in triggers {
            if trigger(self, player, card)? {
                kept.push(trigger);
            }
        }
        let p = self.state.player_mut(player)?;
        // Triggers registered while firing go after the surviving ones
        kept.append(&mut p.on_play_triggers);
        p.on_play_triggers = kept;
        Ok(())
    }

    /// Take the top card of a pile and give it to `player`
    ///
    /// Gaining from an empty pile is an error: callers check first. After the
    /// card lands, fires its own on-gain hook, then the player's gain triggers,
    /// then every player's gain reactions.
    pub fn gain_card(
        &mut self,
        pile: &str,
        player: PlayerId,
        was_bought: bool,
        to: GainDestination,
    ) -> Result<CardId> {
        let card = self
            .state
            .supply
            .pile_mut(pile)
            .ok_or_else(|| DominionError::UnknownPile(pile.to_string()))?
            .pop()
            .ok_or_else(|| DominionError::EmptyPile(pile.to_string()))?;

        let p = self.state.player_mut(player)?;
        let zone = match to {
            GainDestination::Discard => &mut p.zones.discard,
            GainDestination::DeckTop => &mut p.zones.deck,
            GainDestination::Hand => &mut p.zones.hand,
        };
        zone.insert(card, to.position());
        self.state.publish_event(
            player,
            EventKind::GainCard {
                card,
                name: pile.to_string(),
                was_bought,
                destination: to,
            },
        );

        let def = self.state.definition(card)?;
        let ctx = EffectContext::new(card, player);
        self.execute_all(&def.on_gain, &ctx)?;

        let info = GainInfo {
            player,
            card,
            was_bought,
            destination: to,
        };
        let triggers = self.state.player(player)?.on_gain_triggers.clone();
        for trigger in triggers {
            trigger(self, &info)?;
        }

        self.fire_reactions(ReactionTrigger::Gain(info))?;
        Ok(card)
    }

    /// Gain from a pile only if it exists and has cards
    pub fn gain_if_available(
        &mut self,
        pile: &str,
        player: PlayerId,
        to: GainDestination,
    ) -> Result<Option<CardId>> {
        if self.state.supply.count(pile) == 0 {
            self.state
                .logger
                .verbose(&format!("{player} cannot gain {pile}: pile is empty"));
            return Ok(None);
        }
        self.gain_card(pile, player, false, to).map(Some)
    }

    /// Gain with `was_bought`, then pay one buy and the pile's effective cost
    pub fn buy_card(&mut self, pile: &str, player: PlayerId) -> Result<CardId> {
        let cost = self.state.pile_cost(pile)?;
        let card = self.gain_card(pile, player, true, GainDestination::Discard)?;
        let p = self.state.player_mut(player)?;
        p.buys = p.buys.saturating_sub(1);
        p.money = p.money.saturating_sub(cost);
        Ok(card)
    }

    /// Put a card the player holds on top of their discard pile
    ///
    /// Returns false (with a warning) if the card isn't anywhere the player holds cards.
    pub fn discard_card(&mut self, card: CardId, player: PlayerId) -> Result<bool> {
        let name = self.state.card_name(card);
        let p = self.state.player_mut(player)?;
        if p.remove_card(card).is_none() {
            self.state
                .logger
                .warn(&format!("{player} cannot discard {name} {card}: not found"));
            return Ok(false);
        }
        p.zones.discard.add(card);
        self.state
            .publish_event(player, EventKind::DiscardCard { card, name });
        self.fire_reactions(ReactionTrigger::Discard { player, card })?;
        Ok(true)
    }

    /// Move a card the player holds to the trash and run its on-trash hook
    pub fn trash_card(&mut self, card: CardId, player: PlayerId) -> Result<bool> {
        let def = self.state.definition(card)?;
        let p = self.state.player_mut(player)?;
        if p.remove_card(card).is_none() {
            self.state
                .logger
                .warn(&format!("{player} cannot trash {} {card}: not found", def.name));
            return Ok(false);
        }
        self.state.trash.push(card);
        self.state.publish_event(
            player,
            EventKind::TrashCard {
                card,
                name: def.name.clone(),
            },
        );
        self.execute_all(&def.on_trash, &EffectContext::new(card, player))?;
        Ok(true)
    }

    /// Make cards public knowledge; no state changes
    pub fn reveal_cards(&mut self, cards: &[CardId], player: PlayerId) {
        if cards.is_empty() {
            return;
        }
        let names = cards.iter().map(|&c| self.state.card_name(c)).collect();
        self.state.publish_event(
            player,
            EventKind::RevealCards {
                cards: cards.to_vec(),
                names,
            },
        );
    }

    /// Begin the active player's turn: counters, then duration effects, then
    /// start-of-turn reactions
    pub fn start_turn(&mut self) -> Result<()> {
        let player = self.state.active_player_id();
        self.state.turn += 1;
        self.state.phase = TurnPhase::Action;
        self.state.turn_start_seq = self.state.events.last_seq();
        self.state.player_mut(player)?.turns += 1;
        self.state.publish_event(player, EventKind::StartTurn);

        self.fire_durations(player)?;
        self.fire_reactions(ReactionTrigger::StartTurn { player })
    }

    /// End the active player's turn
    ///
    /// Runs on-cleanup hooks of cards in play, discards played cards without
    /// pending duration effects and the whole hand, draws a new hand, resets
    /// counters and one-shot triggers, passes the turn and drops cost modifiers.
    pub fn clean_up(&mut self) -> Result<()> {
        let player = self.state.active_player_id();
        self.state.phase = TurnPhase::CleanUp;

        let in_play = self.state.player(player)?.in_play().to_vec();
        for &card in &in_play {
            let def = self.state.definition(card)?;
            if def.on_cleanup.is_empty() {
                continue;
            }
            // An earlier hook may have moved it
            if self.state.player(player)?.zones.in_play.contains(card) {
                self.execute_all(&def.on_cleanup, &EffectContext::new(card, player))?;
            }
        }

        let in_play = self.state.player(player)?.in_play().to_vec();
        let mut to_discard = Vec::with_capacity(in_play.len());
        for card in in_play {
            if self.state.card(card)?.should_clean_up() {
                to_discard.push(card);
            }
        }
        let p = self.state.player_mut(player)?;
        for card in to_discard {
            p.transfer_card(card, Zone::InPlay, Zone::Discard, ZonePosition::Top);
        }
        let hand = p.zones.hand.take_all();
        p.zones.discard.cards.extend(hand);
        self.state.publish_event(player, EventKind::CleanUp);

        self.state.draw_cards(player, HAND_SIZE)?;

        let p = self.state.player_mut(player)?;
        p.reset_turn_counters();
        p.on_play_triggers.clear();
        p.on_gain_triggers.clear();

        self.state.active_player = (self.state.active_player + 1) % self.state.players.len();
        self.state.cost_modifiers.clear();
        self.state.phase = TurnPhase::Action;
        Ok(())
    }

    pub fn is_game_finished(&self) -> bool {
        self.state.is_game_finished()
    }

    pub fn calculate_winners(&self) -> Result<Vec<PlayerId>> {
        self.state.calculate_winners()
    }
}
