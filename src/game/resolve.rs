//! Effect executor, attack resolution, reactions and duration effects

use crate::core::effects::{CostModifierFn, GainTriggerFn, PlayTriggerFn};
use crate::core::{
    AttackImmunity, CardDefinition, CardId, DurationEffect, Effect, EffectContext, GainInfo,
    PlayerId, ReactionContext, ReactionTrigger,
};
use crate::game::events::EventKind;
use crate::game::Game;
use crate::Result;
use std::sync::Arc;

impl Game {
    /// Run one effect to completion, prompts and provoked reactions included
    pub fn execute(&mut self, effect: &Effect, ctx: &EffectContext) -> Result<()> {
        match effect {
            Effect::DrawCards(n) => {
                self.state.draw_cards(ctx.player, *n)?;
            }
            Effect::GainActions(n) => self.state.player_mut(ctx.player)?.actions += n,
            Effect::GainBuys(n) => self.state.player_mut(ctx.player)?.buys += n,
            Effect::GainMoney(n) => self.state.player_mut(ctx.player)?.money += n,
            Effect::GainVictoryTokens(n) => self.state.player_mut(ctx.player)?.victory_tokens += n,
            Effect::GainCard { card, to } => {
                self.gain_if_available(card, ctx.player, *to)?;
            }
            Effect::Sequence(steps) => self.execute_all(steps, ctx)?,
            Effect::Choose {
                prompt,
                choices,
                min,
                max,
            } => {
                let chosen =
                    self.choose_effects(ctx.player, prompt, choices, *min, *max, Some(ctx.card))?;
                for config in chosen {
                    self.execute(&config.effect, ctx)?;
                }
            }
            Effect::MayDo { prompt, effect } => {
                if self.choose_boolean(ctx.player, prompt, false, Some(ctx.card))? {
                    self.execute(effect, ctx)?;
                }
            }
            Effect::Attack(inner) => {
                for target in self.state.opponents_of(ctx.player) {
                    if self.blocks_attack(target, ctx.card)? {
                        continue;
                    }
                    self.execute(inner, &ctx.for_player(target))?;
                }
            }
            Effect::EachOtherPlayer(inner) => {
                for target in self.state.opponents_of(ctx.player) {
                    self.execute(inner, &ctx.for_player(target))?;
                }
            }
            Effect::Custom(custom) => (custom.run)(self, ctx)?,
        }
        Ok(())
    }

    /// Run effects strictly in order
    pub fn execute_all(&mut self, effects: &[Effect], ctx: &EffectContext) -> Result<()> {
        for effect in effects {
            self.execute(effect, ctx)?;
        }
        Ok(())
    }

    /// Resolve a played card's effect list for `player`
    pub fn resolve_card(&mut self, card: CardId, player: PlayerId) -> Result<()> {
        let def = self.state.definition(card)?;
        self.execute_all(&def.play_effects, &EffectContext::new(card, player))
    }

    /// Whether `target` is immune to the attack from `attack_card`
    ///
    /// Reveal-from-hand cards only count in hand; set-aside protection only
    /// counts in the set-aside zone.
    fn blocks_attack(&mut self, target: PlayerId, attack_card: CardId) -> Result<bool> {
        let p = self.state.player(target)?;
        let grants = |id: &CardId, kind: AttackImmunity| {
            self.state
                .card(*id)
                .map(|c| c.definition.attack_immunity == Some(kind))
                .unwrap_or(false)
        };
        let in_hand = p
            .hand()
            .iter()
            .copied()
            .find(|id| grants(id, AttackImmunity::RevealFromHand));
        let set_aside = p
            .zones
            .set_aside
            .cards
            .iter()
            .any(|id| grants(id, AttackImmunity::WhileSetAside));

        let attack = self.state.card_name(attack_card);
        if let Some(card) = in_hand {
            self.reveal_cards(&[card], target);
            self.state
                .publish_event(target, EventKind::AttackBlocked { attack });
            return Ok(true);
        }
        if set_aside {
            self.state
                .logger
                .verbose(&format!("{target} is protected from {attack}"));
            return Ok(true);
        }
        Ok(false)
    }

    /// Fire every reaction of the trigger's kind, in table order
    ///
    /// Candidates are collected first (players by seat, then zone precedence, then
    /// position), and each is skipped if an earlier reaction moved it out of the
    /// zone it reacts from. Each reaction filters for itself whether it cares.
    pub fn fire_reactions(&mut self, trigger: ReactionTrigger) -> Result<()> {
        let kind = trigger.kind();
        let mut pending = Vec::new();
        for player in &self.state.players {
            for zone in player.zones.zones_in_order() {
                for &card in &zone.cards {
                    let def = &self.state.card(card)?.definition;
                    if let Some(reaction) = def.reactions.get(kind) {
                        if reaction.zone == zone.zone_type {
                            pending.push((card, player.id, reaction.clone()));
                        }
                    }
                }
            }
        }

        for (card, owner, reaction) in pending {
            if self.state.player(owner)?.zones.locate(card) != Some(reaction.zone) {
                continue;
            }
            let ctx = ReactionContext {
                card,
                owner,
                trigger: trigger.clone(),
            };
            (reaction.effect)(self, &ctx)?;
        }
        Ok(())
    }

    /// Run the start-of-turn duration effects on the player's cards
    ///
    /// Effects returning false are dropped; a card with none left is discarded
    /// at the next cleanup.
    pub fn fire_durations(&mut self, player: PlayerId) -> Result<()> {
        let p = self.state.player(player)?;
        let holders: Vec<CardId> = p
            .in_play()
            .iter()
            .chain(p.zones.set_aside.cards.iter())
            .copied()
            .filter(|&id| {
                self.state
                    .card(id)
                    .map(|c| !c.durations.is_empty())
                    .unwrap_or(false)
            })
            .collect();

        for card in holders {
            let durations = std::mem::take(&mut self.state.cards.get_mut(card)?.durations);
            let ctx = EffectContext::new(card, player);
            let mut kept = Vec::with_capacity(durations.len());
            for duration in durations {
                if (duration.callback)(self, &ctx)? {
                    kept.push(duration);
                }
            }
            let c = self.state.cards.get_mut(card)?;
            kept.append(&mut c.durations);
            c.durations = kept;
        }
        Ok(())
    }

    /// Attach a duration effect to a card instance
    pub fn add_duration(&mut self, card: CardId, duration: DurationEffect) -> Result<()> {
        self.state.cards.get_mut(card)?.durations.push(duration);
        Ok(())
    }

    /// Install a cost modifier until the end of this turn
    pub fn add_cost_modifier(
        &mut self,
        f: impl Fn(&CardDefinition) -> i32 + Send + Sync + 'static,
    ) {
        let modifier: CostModifierFn = Arc::new(f);
        self.state.cost_modifiers.push(modifier);
    }

    /// Register a gain trigger that lasts for the rest of this turn
    pub fn add_gain_trigger(
        &mut self,
        player: PlayerId,
        f: impl Fn(&mut Game, &GainInfo) -> Result<()> + Send + Sync + 'static,
    ) -> Result<()> {
        let trigger: GainTriggerFn = Arc::new(f);
        self.state.player_mut(player)?.on_gain_triggers.push(trigger);
        Ok(())
    }

    /// Register a play trigger; it stays until it returns false or the turn ends
    pub fn add_play_trigger(
        &mut self,
        player: PlayerId,
        f: impl Fn(&mut Game, PlayerId, CardId) -> Result<bool> + Send + Sync + 'static,
    ) -> Result<()> {
        let trigger: PlayTriggerFn = Arc::new(f);
        self.state.player_mut(player)?.on_play_triggers.push(trigger);
        Ok(())
    }
}
