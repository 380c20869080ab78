//! Built-in card catalog
//!
//! Card definitions are data: simple cards are plain effect lists, the rest use
//! `Effect::custom` closures over the engine primitives. Nothing in the engine
//! depends on any particular card being here.

use crate::core::{
    AttackImmunity, CardDefinition, CardId, CardType, DurationEffect, Effect, EffectConfig,
    EffectContext, GainDestination, PlayerId, Reaction, ReactionBundle, ReactionTrigger,
};
use crate::game::events::EventKind;
use crate::game::{CardChoice, Game, TurnPhase};
use crate::zones::{Zone, ZonePosition};
use crate::Result;
use std::sync::Arc;

const NATIVE_VILLAGE_MAT: Zone = Zone::Mat("Native Village");
const ISLAND_MAT: Zone = Zone::Mat("Island");

/// Every built-in card: base cards first, then the kingdom cards
pub fn all_cards() -> Vec<CardDefinition> {
    let mut cards = base_cards();
    cards.extend(kingdom_cards());
    cards
}

/// Treasures, victory cards and Curse
pub fn base_cards() -> Vec<CardDefinition> {
    use CardType::*;
    vec![
        CardDefinition::new("Copper", 0).base().with_types(&[Treasure]).worth(1),
        CardDefinition::new("Silver", 3).base().with_types(&[Treasure]).worth(2),
        CardDefinition::new("Gold", 6).base().with_types(&[Treasure]).worth(3),
        CardDefinition::new("Platinum", 9).base().with_types(&[Treasure]).worth(5),
        CardDefinition::new("Estate", 2).base().with_types(&[Victory]).victory_points(1),
        CardDefinition::new("Duchy", 5).base().with_types(&[Victory]).victory_points(3),
        CardDefinition::new("Province", 8).base().with_types(&[Victory]).victory_points(6),
        CardDefinition::new("Colony", 11).base().with_types(&[Victory]).victory_points(10),
        CardDefinition::new("Curse", 0).base().with_types(&[Curse]).victory_points(-1),
    ]
}

fn action(name: &str, cost: i32) -> CardDefinition {
    CardDefinition::new(name, cost).with_types(&[CardType::Action])
}

/// Cards in the player's hand whose definition passes `pred`
fn hand_where(
    game: &Game,
    player: PlayerId,
    pred: impl Fn(&CardDefinition) -> bool,
) -> Result<Vec<CardId>> {
    let mut cards = Vec::new();
    for &id in game.state.player(player)?.hand() {
        if pred(&game.state.card(id)?.definition) {
            cards.push(id);
        }
    }
    Ok(cards)
}

fn hand_of(game: &Game, player: PlayerId) -> Result<Vec<CardId>> {
    Ok(game.state.player(player)?.hand().to_vec())
}

/// Let the player pick a non-empty pile costing at most `max_cost` and gain it
fn gain_costing_up_to(game: &mut Game, ctx: &EffectContext, max_cost: u32) -> Result<()> {
    let prompt = format!("Gain a card costing up to ${max_cost}");
    let pile = game.choose_pile(ctx.player, &prompt, Some(ctx.card), |state, pile| {
        !pile.is_empty() && state.calculate_cost(&pile.definition) <= max_cost
    })?;
    if let Some(pile) = pile {
        game.gain_card(&pile, ctx.player, false, GainDestination::Discard)?;
    }
    Ok(())
}

/// Effects that run once at the start of the player's next turn
fn next_turn(label: &'static str, effects: Vec<Effect>) -> Effect {
    let effects = Arc::new(effects);
    Effect::custom(label, move |game: &mut Game, ctx: &EffectContext| {
        let effects = effects.clone();
        game.add_duration(
            ctx.card,
            DurationEffect::start_of_turn(move |game: &mut Game, ctx: &EffectContext| {
                game.execute_all(&effects, ctx)?;
                Ok(false)
            }),
        )
    })
}

/// Offer to move a card the player just gained from their discard pile to their deck
fn offer_topdeck(game: &mut Game, player: PlayerId, gained: CardId, source: CardId) -> Result<()> {
    if game.state.player(player)?.zones.locate(gained) != Some(Zone::Discard) {
        return Ok(());
    }
    let def = game.state.definition(gained)?;
    let prompt = format!("Put the gained {} on top of your deck?", def.name);
    let default = def.is_action() || def.is_treasure();
    if game.choose_boolean(player, &prompt, default, Some(source))? {
        game.state
            .move_card(gained, player, Zone::Deck, ZonePosition::Top)?;
    }
    Ok(())
}

/// The kingdom card set
pub fn kingdom_cards() -> Vec<CardDefinition> {
    use CardType::{Action, Attack, Duration, Treasure, Victory};
    vec![
        // $2
        action("Cellar", 2)
            .on_play(Effect::GainActions(1))
            .on_play(Effect::custom("discard and redraw", |game: &mut Game, ctx: &EffectContext| {
                let hand = hand_of(game, ctx.player)?;
                let max = hand.len();
                let discarded = game.choose_cards(
                    ctx.player,
                    CardChoice {
                        prompt: "Discard any number of cards, then draw that many".into(),
                        cards: hand,
                        min: 0,
                        max,
                        source: Some(ctx.card),
                    },
                )?;
                let mut count = 0u32;
                for card in discarded {
                    if game.discard_card(card, ctx.player)? {
                        count += 1;
                    }
                }
                game.state.draw_cards(ctx.player, count)?;
                Ok(())
            }))
            .text("+1 Action. Discard any number of cards, then draw that many."),
        action("Chapel", 2)
            .on_play(Effect::custom("trash up to 4", |game: &mut Game, ctx: &EffectContext| {
                let hand = hand_of(game, ctx.player)?;
                let trashed = game.choose_cards(
                    ctx.player,
                    CardChoice {
                        prompt: "Trash up to 4 cards from your hand".into(),
                        cards: hand,
                        min: 0,
                        max: 4,
                        source: Some(ctx.card),
                    },
                )?;
                for card in trashed {
                    game.trash_card(card, ctx.player)?;
                }
                Ok(())
            }))
            .text("Trash up to 4 cards from your hand."),
        CardDefinition::new("Moat", 2)
            .with_types(&[Action, CardType::Reaction])
            .on_play(Effect::DrawCards(2))
            .attack_immunity(AttackImmunity::RevealFromHand)
            .text("+2 Cards. When another player plays an Attack card, you may first reveal this from your hand, to be unaffected by it."),
        action("Pawn", 2)
            .on_play(Effect::choose(
                "Choose two different options",
                vec![
                    Effect::DrawCards(1).into(),
                    Effect::GainActions(1).into(),
                    Effect::GainBuys(1).into(),
                    Effect::GainMoney(1).into(),
                ],
                2,
                2,
            ))
            .text("Choose two: +1 Card; +1 Action; +1 Buy; +$1. The choices must be different."),
        action("Native Village", 2)
            .on_play(Effect::GainActions(2))
            .on_play(Effect::choose(
                "Choose one",
                vec![
                    EffectConfig::new(
                        "Put the top card of your deck on your Native Village mat",
                        Effect::custom("to mat", |game: &mut Game, ctx: &EffectContext| {
                            let top = game.state.top_n_cards(ctx.player, 1)?;
                            if let Some(&card) = top.first() {
                                game.state.move_card(
                                    card,
                                    ctx.player,
                                    NATIVE_VILLAGE_MAT,
                                    ZonePosition::Top,
                                )?;
                            }
                            Ok(())
                        }),
                    ),
                    EffectConfig::new(
                        "Put all the cards from your Native Village mat into your hand",
                        Effect::custom("from mat", |game: &mut Game, ctx: &EffectContext| {
                            let Zone::Mat(mat) = NATIVE_VILLAGE_MAT else {
                                return Ok(());
                            };
                            let cards = game.state.player(ctx.player)?.zones.mat(mat).to_vec();
                            for card in cards {
                                game.state
                                    .move_card(card, ctx.player, Zone::Hand, ZonePosition::Top)?;
                            }
                            Ok(())
                        }),
                    ),
                ],
                1,
                1,
            ))
            .text("+2 Actions. Choose one: Put the top card of your deck face down on your Native Village mat; or put all the cards from your mat into your hand."),
        CardDefinition::new("Lighthouse", 2)
            .with_types(&[Action, Duration])
            .on_play(Effect::GainActions(1))
            .on_play(Effect::GainMoney(1))
            .on_play(Effect::custom("stand watch", |game: &mut Game, ctx: &EffectContext| {
                // Set aside until next turn, where it protects silently
                game.state
                    .move_card(ctx.card, ctx.player, Zone::SetAside, ZonePosition::Top)?;
                game.add_duration(
                    ctx.card,
                    DurationEffect::start_of_turn(|game: &mut Game, ctx: &EffectContext| {
                        game.state.player_mut(ctx.player)?.money += 1;
                        game.state
                            .move_card(ctx.card, ctx.player, Zone::InPlay, ZonePosition::Top)?;
                        Ok(false)
                    }),
                )
            }))
            .attack_immunity(AttackImmunity::WhileSetAside)
            .text("+1 Action, +$1. At the start of your next turn: +$1. Until then, when another player plays an Attack card, it doesn't affect you."),
        // $3
        action("Village", 3)
            .on_play(Effect::DrawCards(1))
            .on_play(Effect::GainActions(2))
            .text("+1 Card, +2 Actions."),
        action("Workshop", 3)
            .on_play(Effect::custom("gain up to 4", |game: &mut Game, ctx: &EffectContext| {
                gain_costing_up_to(game, ctx, 4)
            }))
            .text("Gain a card costing up to $4."),
        action("Merchant", 3)
            .on_play(Effect::DrawCards(1))
            .on_play(Effect::GainActions(1))
            .on_play(Effect::custom("silver bonus", |game: &mut Game, ctx: &EffectContext| {
                game.add_play_trigger(
                    ctx.player,
                    |game: &mut Game, player: PlayerId, card: CardId| {
                        if game.state.card_name(card) != "Silver" {
                            return Ok(true);
                        }
                        game.state.player_mut(player)?.money += 1;
                        Ok(false)
                    },
                )
            }))
            .text("+1 Card, +1 Action. The first time you play a Silver this turn, +$1."),
        CardDefinition::new("Fishing Village", 3)
            .with_types(&[Action, Duration])
            .on_play(Effect::GainActions(2))
            .on_play(Effect::GainMoney(1))
            .on_play(next_turn(
                "fishing village next turn",
                vec![Effect::GainActions(1), Effect::GainMoney(1)],
            ))
            .text("+2 Actions, +$1. At the start of your next turn: +1 Action and +$1."),
        CardDefinition::new("Watchtower", 3)
            .with_types(&[Action, CardType::Reaction])
            .on_play(Effect::custom("draw to 6", |game: &mut Game, ctx: &EffectContext| {
                while game.state.player(ctx.player)?.hand().len() < 6 {
                    if game.state.draw_cards(ctx.player, 1)?.is_empty() {
                        break;
                    }
                }
                Ok(())
            }))
            .reactions(ReactionBundle {
                on_gain: Some(Reaction::new(Zone::Hand, |game, rctx| {
                    let ReactionTrigger::Gain(info) = &rctx.trigger else {
                        return Ok(());
                    };
                    if info.player != rctx.owner {
                        return Ok(());
                    }
                    let def = game.state.definition(info.card)?;
                    let prompt = format!("Reveal Watchtower to trash the gained {}?", def.name);
                    let junk = def.is(CardType::Curse) || (def.is_victory() && def.cost <= 2);
                    if game.choose_boolean(rctx.owner, &prompt, junk, Some(rctx.card))? {
                        game.reveal_cards(&[rctx.card], rctx.owner);
                        game.trash_card(info.card, rctx.owner)?;
                        return Ok(());
                    }
                    offer_topdeck(game, rctx.owner, info.card, rctx.card)
                })),
                ..Default::default()
            })
            .text("Draw until you have 6 cards in hand. When you gain a card, you may reveal this from your hand, to either trash that card or put it onto your deck."),
        CardDefinition::new("Tunnel", 3)
            .with_types(&[Victory, CardType::Reaction])
            .victory_points(2)
            .reactions(ReactionBundle {
                on_discard: Some(Reaction::new(Zone::Discard, |game, rctx| {
                    let ReactionTrigger::Discard { card, .. } = rctx.trigger else {
                        return Ok(());
                    };
                    if card != rctx.card || game.state.phase == TurnPhase::CleanUp {
                        return Ok(());
                    }
                    let prompt = "Reveal Tunnel to gain a Gold?";
                    if game.choose_boolean(rctx.owner, prompt, true, Some(card))? {
                        game.reveal_cards(&[card], rctx.owner);
                        game.gain_if_available("Gold", rctx.owner, GainDestination::Discard)?;
                    }
                    Ok(())
                })),
                ..Default::default()
            })
            .text("2 VP. When you discard this other than during Clean-up, you may reveal it to gain a Gold."),
        // $4
        action("Smithy", 4)
            .on_play(Effect::DrawCards(3))
            .text("+3 Cards."),
        CardDefinition::new("Militia", 4)
            .with_types(&[Action, Attack])
            .on_play(Effect::GainMoney(2))
            .on_play(Effect::attack(Effect::custom(
                "discard down to 3",
                |game: &mut Game, ctx: &EffectContext| {
                    let hand = hand_of(game, ctx.player)?;
                    if hand.len() <= 3 {
                        return Ok(());
                    }
                    let excess = hand.len() - 3;
                    let discarded = game.choose_cards(
                        ctx.player,
                        CardChoice {
                            prompt: "Discard down to 3 cards in hand".into(),
                            cards: hand,
                            min: excess,
                            max: excess,
                            source: Some(ctx.card),
                        },
                    )?;
                    for card in discarded {
                        game.discard_card(card, ctx.player)?;
                    }
                    Ok(())
                },
            )))
            .text("+$2. Each other player discards down to 3 cards in hand."),
        action("Moneylender", 4)
            .on_play(Effect::custom("lend", |game: &mut Game, ctx: &EffectContext| {
                let coppers = hand_where(game, ctx.player, |d| d.name == "Copper")?;
                let Some(&copper) = coppers.first() else {
                    return Ok(());
                };
                if game.choose_boolean(ctx.player, "Trash a Copper for +$3?", true, Some(ctx.card))?
                    && game.trash_card(copper, ctx.player)?
                {
                    game.state.player_mut(ctx.player)?.money += 3;
                }
                Ok(())
            }))
            .text("You may trash a Copper from your hand for +$3."),
        action("Remodel", 4)
            .on_play(Effect::custom("remodel", |game: &mut Game, ctx: &EffectContext| {
                let hand = hand_of(game, ctx.player)?;
                let prompt = "Trash a card from your hand";
                let chosen = game.choose_one_card(ctx.player, prompt, hand, Some(ctx.card))?;
                let Some(card) = chosen else {
                    return Ok(());
                };
                let trashed = game.state.definition(card)?;
                let cost = game.state.calculate_cost(&trashed);
                game.trash_card(card, ctx.player)?;
                gain_costing_up_to(game, ctx, cost + 2)
            }))
            .text("Trash a card from your hand. Gain a card costing up to $2 more than it."),
        action("Throne Room", 4)
            .on_play(Effect::custom("play twice", |game: &mut Game, ctx: &EffectContext| {
                let actions = hand_where(game, ctx.player, |d| d.is_action())?;
                let chosen = game.choose_cards(
                    ctx.player,
                    CardChoice {
                        prompt: "You may play an Action card from your hand twice".into(),
                        cards: actions,
                        min: 0,
                        max: 1,
                        source: Some(ctx.card),
                    },
                )?;
                if let Some(&card) = chosen.first() {
                    game.play_card(card, ctx.player)?;
                    game.resolve_card(card, ctx.player)?;
                    game.resolve_card(card, ctx.player)?;
                }
                Ok(())
            }))
            .text("You may play an Action card from your hand twice."),
        action("Bridge", 4)
            .on_play(Effect::GainBuys(1))
            .on_play(Effect::GainMoney(1))
            .on_play(Effect::custom("cheaper this turn", |game: &mut Game, _ctx: &EffectContext| {
                game.add_cost_modifier(|_| -1);
                Ok(())
            }))
            .text("+1 Buy, +$1. This turn, cards (everywhere) cost $1 less."),
        action("Conspirator", 4)
            .on_play(Effect::GainMoney(2))
            .on_play(Effect::custom("conspire", |game: &mut Game, ctx: &EffectContext| {
                // Counts Action cards currently in play, this one included
                if game.state.count_in_play(ctx.player, |d| d.is_action()) >= 3 {
                    game.execute(&Effect::DrawCards(1), ctx)?;
                    game.execute(&Effect::GainActions(1), ctx)?;
                }
                Ok(())
            }))
            .text("+$2. If you've played 3 or more Actions this turn (counting this), +1 Card and +1 Action."),
        action("Feast", 4)
            .on_play(Effect::custom("feast", |game: &mut Game, ctx: &EffectContext| {
                game.trash_card(ctx.card, ctx.player)?;
                gain_costing_up_to(game, ctx, 5)
            }))
            .text("Trash this card. Gain a card costing up to $5."),
        CardDefinition::new("Gardens", 4)
            .with_types(&[Victory])
            .dynamic_victory_points(|state, player| {
                state
                    .player(player)
                    .map(|p| (p.all_cards().len() / 10) as i32)
                    .unwrap_or(0)
            })
            .text("Worth 1 VP per 10 cards you have (round down)."),
        CardDefinition::new("Island", 4)
            .with_types(&[Action, Victory])
            .victory_points(2)
            .on_play(Effect::custom("to island", |game: &mut Game, ctx: &EffectContext| {
                let hand = hand_of(game, ctx.player)?;
                let chosen = game.choose_one_card(
                    ctx.player,
                    "Set aside a card from your hand on your Island mat",
                    hand,
                    Some(ctx.card),
                )?;
                game.state
                    .move_card(ctx.card, ctx.player, ISLAND_MAT, ZonePosition::Top)?;
                if let Some(card) = chosen {
                    game.state
                        .move_card(card, ctx.player, ISLAND_MAT, ZonePosition::Top)?;
                }
                Ok(())
            }))
            .text("2 VP. Put this and a card from your hand onto your Island mat."),
        CardDefinition::new("Caravan", 4)
            .with_types(&[Action, Duration])
            .on_play(Effect::DrawCards(1))
            .on_play(Effect::GainActions(1))
            .on_play(next_turn("caravan next turn", vec![Effect::DrawCards(1)]))
            .text("+1 Card, +1 Action. At the start of your next turn, +1 Card."),
        action("Fortress", 4)
            .on_play(Effect::DrawCards(1))
            .on_play(Effect::GainActions(2))
            .on_trash(Effect::custom("return to hand", |game: &mut Game, ctx: &EffectContext| {
                let Some(pos) = game.state.trash.iter().position(|&c| c == ctx.card) else {
                    return Ok(());
                };
                game.state.trash.remove(pos);
                game.state.player_mut(ctx.player)?.zones.hand.add(ctx.card);
                let name = game.state.card_name(ctx.card);
                game.state.publish_event(
                    ctx.player,
                    EventKind::MoveCard {
                        card: ctx.card,
                        name,
                        from: Zone::Trash,
                        to: Zone::Hand,
                    },
                );
                Ok(())
            }))
            .text("+1 Card, +2 Actions. When you trash this, put it into your hand."),
        CardDefinition::new("Bureaucrat", 4)
            .with_types(&[Action, Attack])
            .on_play(Effect::GainCard {
                card: "Silver".into(),
                to: GainDestination::DeckTop,
            })
            .on_play(Effect::attack(Effect::custom(
                "topdeck a victory card",
                |game: &mut Game, ctx: &EffectContext| {
                    let victories = hand_where(game, ctx.player, |d| d.is_victory())?;
                    if victories.is_empty() {
                        let hand = hand_of(game, ctx.player)?;
                        game.reveal_cards(&hand, ctx.player);
                        return Ok(());
                    }
                    let chosen = game.choose_one_card(
                        ctx.player,
                        "Put a Victory card from your hand onto your deck",
                        victories,
                        Some(ctx.card),
                    )?;
                    if let Some(card) = chosen {
                        game.reveal_cards(&[card], ctx.player);
                        game.state
                            .move_card(card, ctx.player, Zone::Deck, ZonePosition::Top)?;
                    }
                    Ok(())
                },
            )))
            .text("Gain a Silver onto your deck. Each other player reveals a Victory card from their hand and puts it onto their deck (or reveals a hand with no Victory cards)."),
        // $5
        action("Market", 5)
            .on_play(Effect::DrawCards(1))
            .on_play(Effect::GainActions(1))
            .on_play(Effect::GainBuys(1))
            .on_play(Effect::GainMoney(1))
            .text("+1 Card, +1 Action, +1 Buy, +$1."),
        action("Laboratory", 5)
            .on_play(Effect::DrawCards(2))
            .on_play(Effect::GainActions(1))
            .text("+2 Cards, +1 Action."),
        action("Festival", 5)
            .on_play(Effect::GainActions(2))
            .on_play(Effect::GainBuys(1))
            .on_play(Effect::GainMoney(2))
            .text("+2 Actions, +1 Buy, +$2."),
        action("Council Room", 5)
            .on_play(Effect::DrawCards(4))
            .on_play(Effect::GainBuys(1))
            .on_play(Effect::each_other_player(Effect::DrawCards(1)))
            .text("+4 Cards, +1 Buy. Each other player draws a card."),
        CardDefinition::new("Witch", 5)
            .with_types(&[Action, Attack])
            .on_play(Effect::DrawCards(2))
            .on_play(Effect::attack(Effect::gain("Curse")))
            .text("+2 Cards. Each other player gains a Curse."),
        action("Treasury", 5)
            .on_play(Effect::DrawCards(1))
            .on_play(Effect::GainActions(1))
            .on_play(Effect::GainMoney(1))
            .on_cleanup(Effect::custom("return to deck", |game: &mut Game, ctx: &EffectContext| {
                let mut bought_victory = false;
                for event in game.state.events_this_turn() {
                    if let EventKind::GainCard { card, was_bought: true, .. } = &event.kind {
                        let is_victory = game
                            .state
                            .card(*card)
                            .map(|c| c.definition.is_victory())
                            .unwrap_or(false);
                        if event.player == ctx.player && is_victory {
                            bought_victory = true;
                        }
                    }
                }
                if bought_victory {
                    return Ok(());
                }
                let prompt = "Put Treasury on top of your deck?";
                if game.choose_boolean(ctx.player, prompt, true, Some(ctx.card))? {
                    game.state
                        .move_card(ctx.card, ctx.player, Zone::Deck, ZonePosition::Top)?;
                }
                Ok(())
            }))
            .text("+1 Card, +1 Action, +$1. At the end of your Buy phase, if you didn't buy a Victory card this turn, you may put this onto your deck."),
        CardDefinition::new("Royal Seal", 5)
            .with_types(&[Treasure])
            .worth(2)
            .on_play(Effect::custom("seal", |game: &mut Game, ctx: &EffectContext| {
                let seal = ctx.card;
                game.add_gain_trigger(ctx.player, move |game: &mut Game, info| {
                    offer_topdeck(game, info.player, info.card, seal)
                })
            }))
            .text("$2. While you have this in play, when you gain a card, you may put that card onto your deck."),
        // $6+
        action("Border Village", 6)
            .on_play(Effect::DrawCards(1))
            .on_play(Effect::GainActions(2))
            .on_gain(Effect::custom("gain cheaper", |game: &mut Game, ctx: &EffectContext| {
                let own = game.state.definition(ctx.card)?;
                let own_cost = game.state.calculate_cost(&own);
                let prompt = format!("Gain a card costing less than ${own_cost}");
                let pile = game.choose_pile(ctx.player, &prompt, Some(ctx.card), |state, pile| {
                    !pile.is_empty() && state.calculate_cost(&pile.definition) < own_cost
                })?;
                if let Some(pile) = pile {
                    game.gain_card(&pile, ctx.player, false, GainDestination::Discard)?;
                }
                Ok(())
            }))
            .text("+1 Card, +2 Actions. When you gain this, gain a card costing less than it."),
        action("Grand Market", 6)
            .on_play(Effect::DrawCards(1))
            .on_play(Effect::GainActions(1))
            .on_play(Effect::GainBuys(1))
            .on_play(Effect::GainMoney(2))
            .can_buy(|state, player| state.count_in_play(player, |d| d.name == "Copper") == 0)
            .text("+1 Card, +1 Action, +1 Buy, +$2. You can't buy this if you have any Coppers in play."),
        action("Peddler", 8)
            .on_play(Effect::DrawCards(1))
            .on_play(Effect::GainActions(1))
            .on_play(Effect::GainMoney(1))
            .cost_modifier(|state, active| {
                if state.phase != TurnPhase::Buy {
                    return 0;
                }
                -2 * state.count_in_play(active, |d| d.is_action()) as i32
            })
            .text("+1 Card, +1 Action, +$1. During your Buy phase, this costs $2 less per Action card you have in play."),
    ]
}
